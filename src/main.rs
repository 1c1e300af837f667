// SPDX-License-Identifier: MPL-2.0
//! Demo host: mounts the overlay against a simulated decoder and replays a
//! scripted sequence of touches, logging every rendered view.

use playback_overlay::config::{self, OverlaySettings};
use playback_overlay::domain::{SeekDirection, TrackId, TrackKind};
use playback_overlay::infrastructure::{SimulatedDecoder, SoftwareAnimator};
use playback_overlay::overlay::{Message, MountOptions, OverlayView, RawPointerEvent};
use playback_overlay::runtime::{self, OverlayEvent};

use env_logger::{Builder, Target};
use iced_core::{Point, Size};
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

const DEFAULT_SOURCE: &str = "https://media.example/streams/big-buck-bunny.m3u8";
const DEFAULT_MEDIA_SECONDS: u64 = 596;
const SURFACE: Size = Size::new(390.0, 844.0);

struct Args {
    source: String,
    title: Option<String>,
    seconds: u64,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Args {
        source: args
            .opt_value_from_str("--source")?
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        title: args.opt_value_from_str("--title")?,
        seconds: args
            .opt_value_from_str("--seconds")?
            .unwrap_or(DEFAULT_MEDIA_SECONDS),
        config: args.opt_value_from_str("--config")?,
    })
}

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stdout)
            .filter_level(LevelFilter::Warn)
            .filter_module("playback_overlay", LevelFilter::Info)
            .init();
    }
}

fn load_settings(path: Option<&PathBuf>) -> OverlaySettings {
    let loaded = match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    match loaded {
        Ok(config) => OverlaySettings::from_config(&config),
        Err(err) => {
            log::warn!("Using default overlay settings: {err}");
            OverlaySettings::default()
        }
    }
}

fn tap(x: f32, y: f32) -> Message {
    Message::Pointer(RawPointerEvent::Tap {
        position: Point::new(x, y),
    })
}

/// Replays a short viewing session.
async fn script(input: UnboundedSender<Message>) {
    let steps: Vec<(u64, Message)> = vec![
        (0, Message::SurfaceResized(SURFACE)),
        (1500, tap(300.0, 400.0)),
        (120, tap(310.0, 410.0)),
        (1000, tap(60.0, 400.0)),
        (100, tap(70.0, 420.0)),
        (800, Message::ToggleTrackPanel),
        (600, Message::SelectTrack {
            kind: TrackKind::Subtitle,
            id: TrackId(Some(1)),
        }),
        (400, Message::Pointer(RawPointerEvent::PinchStarted)),
        (50, Message::Pointer(RawPointerEvent::PinchChanged { scale: 1.15 })),
        (50, Message::Pointer(RawPointerEvent::PinchEnded { scale: 1.4 })),
        (500, Message::Skip(SeekDirection::Forward)),
        (300, Message::TogglePlayback),
        (1000, Message::TogglePlayback),
        (5000, tap(200.0, 300.0)),
        (1000, Message::ScrubStarted),
        (200, Message::ScrubMoved(0.4)),
        (200, Message::ScrubReleased(0.5)),
        (1500, Message::Close),
    ];

    for (delay, msg) in steps {
        tokio::time::sleep(Duration::from_millis(delay)).await;
        log::info!("> {msg:?}");
        if input.send(msg).is_err() {
            break;
        }
    }
}

fn describe(view: &OverlayView) -> String {
    let mut line = format!(
        "{} {} / {} [{:.0}%, buffered {:.0}%] controls={} fit={:?}",
        if view.buffering {
            "buffering"
        } else if view.playing {
            "playing"
        } else {
            "paused"
        },
        view.scrubber.elapsed_label,
        view.scrubber.remaining_label,
        view.scrubber.progress_percent,
        view.scrubber.buffered_percent,
        if view.controls_visible { "shown" } else { "hidden" },
        view.content_fit,
    );
    if view.panel_open {
        line.push_str(" panel=open");
    }
    if let Some((direction, opacity)) = view.seek_feedback {
        line.push_str(&format!(" feedback={direction:?}@{opacity:.2}"));
    }
    if let Some(icon) = view.center_icon {
        line.push_str(&format!(" icon={icon:?}"));
    }
    line
}

#[tokio::main]
async fn main() {
    init_logger();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: playback_overlay [--source URI] [--title TEXT] [--seconds N] [--config PATH]");
            std::process::exit(2);
        }
    };

    let options = match MountOptions::parse(&args.source, args.title) {
        Ok(options) => options,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };
    let settings = load_settings(args.config.as_ref());

    let decoder = SimulatedDecoder::start(Duration::from_secs(args.seconds));
    let mut handle = runtime::spawn(
        Box::new(decoder),
        Box::new(SoftwareAnimator::new()),
        options,
        settings,
    );

    tokio::spawn(script(handle.sender()));

    let mut last = String::new();
    while let Some(event) = handle.next_event().await {
        match event {
            OverlayEvent::Updated(view) => {
                let line = describe(&view);
                if line != last {
                    log::info!("{line}");
                    last = line;
                }
            }
            OverlayEvent::Closed => {
                log::info!("Done pressed, unmounting");
                break;
            }
        }
    }

    handle.shutdown().await;
}
