// SPDX-License-Identifier: MPL-2.0
//! Track selection panel sub-component.
//!
//! A slide-up sheet listing subtitle and audio tracks. Open and close
//! strictly alternate: opening an open panel or closing a closed one is a
//! no-op, so the orchestrator's suspend/resume calls stay balanced.

use crate::config::{DEFAULT_PANEL_CLOSED_OFFSET, PANEL_OPEN_OFFSET};
use crate::domain::{Track, TrackId, TrackKind};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct State {
    open: bool,
    closed_offset: f32,
    tracks: Vec<Track>,
    selected: HashMap<TrackKind, TrackId>,
}

/// Messages for the track panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Open,
    Close,
    Toggle,
    /// Picks an entry. Selecting implies dismissal.
    Select { kind: TrackKind, id: TrackId },
    /// Replaces the listed tracks with what the decoder reports.
    SetTracks(Vec<Track>),
}

/// Effects produced by the track panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Closed → Open. The orchestrator suspends auto-hide.
    Opened,
    /// Open → Closed. The orchestrator resumes auto-hide.
    Closed,
    /// An entry was picked. `closed` tells whether this also closed the panel.
    Selected {
        kind: TrackKind,
        id: TrackId,
        closed: bool,
    },
}

impl State {
    #[must_use]
    pub fn new(closed_offset: f32) -> Self {
        let mut state = Self {
            open: false,
            closed_offset,
            tracks: Vec::new(),
            selected: HashMap::new(),
        };
        state.set_tracks(Vec::new());
        state
    }

    /// Handle a track panel message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open => self.open(),
            Message::Close => self.close(),
            Message::Toggle => {
                if self.open {
                    self.close()
                } else {
                    self.open()
                }
            }
            Message::Select { kind, id } => {
                if !self.tracks.iter().any(|t| t.kind == kind && t.id == id) {
                    log::debug!("Ignoring selection of unknown {kind:?} track {id:?}");
                    return Effect::None;
                }
                self.selected.insert(kind, id);
                let closed = self.close() == Effect::Closed;
                Effect::Selected { kind, id, closed }
            }
            Message::SetTracks(tracks) => {
                self.set_tracks(tracks);
                Effect::None
            }
        }
    }

    fn open(&mut self) -> Effect {
        if self.open {
            return Effect::None;
        }
        self.open = true;
        Effect::Opened
    }

    fn close(&mut self) -> Effect {
        if !self.open {
            return Effect::None;
        }
        self.open = false;
        Effect::Closed
    }

    /// Subtitle "Off" always leads the list. Selections that no longer exist
    /// fall back to "Off" for subtitles and the first entry for audio.
    fn set_tracks(&mut self, tracks: Vec<Track>) {
        let mut list = vec![Track::subtitles_off()];
        list.extend(tracks.into_iter().filter(|t| !t.id.is_off()));
        self.tracks = list;

        for kind in [TrackKind::Subtitle, TrackKind::Audio] {
            let still_listed = self
                .selected
                .get(&kind)
                .is_some_and(|id| self.tracks.iter().any(|t| t.kind == kind && t.id == *id));
            if still_listed {
                continue;
            }
            match self.tracks.iter().find(|t| t.kind == kind) {
                Some(first) => {
                    self.selected.insert(kind, first.id);
                }
                None => {
                    self.selected.remove(&kind);
                }
            }
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Offset the panel animates towards in its current state.
    #[must_use]
    pub fn target_offset(&self) -> f32 {
        if self.open {
            PANEL_OPEN_OFFSET
        } else {
            self.closed_offset
        }
    }

    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[must_use]
    pub fn selected(&self, kind: TrackKind) -> Option<TrackId> {
        self.selected.get(&kind).copied()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL_CLOSED_OFFSET)
    }
}
