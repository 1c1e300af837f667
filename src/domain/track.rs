// SPDX-License-Identifier: MPL-2.0
//! Subtitle and audio tracks offered by the track selection panel.

/// Kind of selectable track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    Subtitle,
    Audio,
}

/// Identifier of a track within its kind. `None` means "off".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackId(pub Option<u32>);

impl TrackId {
    /// The "off" entry (subtitles disabled).
    pub const OFF: Self = Self(None);

    /// Returns true for the "off" entry.
    #[must_use]
    pub fn is_off(self) -> bool {
        self.0.is_none()
    }
}

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub kind: TrackKind,
    pub id: TrackId,
    pub label: String,
}

impl Track {
    #[must_use]
    pub fn new(kind: TrackKind, index: u32, label: impl Into<String>) -> Self {
        Self {
            kind,
            id: TrackId(Some(index)),
            label: label.into(),
        }
    }

    /// The subtitle "Off" entry that is always offered.
    #[must_use]
    pub fn subtitles_off() -> Self {
        Self {
            kind: TrackKind::Subtitle,
            id: TrackId::OFF,
            label: "Off".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtitles_off_is_off() {
        let off = Track::subtitles_off();
        assert_eq!(off.kind, TrackKind::Subtitle);
        assert!(off.id.is_off());
    }

    #[test]
    fn new_track_has_index() {
        let track = Track::new(TrackKind::Audio, 2, "Spanish");
        assert_eq!(track.id, TrackId(Some(2)));
        assert!(!track.id.is_off());
    }
}
