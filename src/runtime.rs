// SPDX-License-Identifier: MPL-2.0
//! Event loop hosting an [`Overlay`] on a tokio task.
//!
//! Decoder ticks, host messages and timer deadlines are serialized onto a
//! single task, so handlers run to completion without interleaving. The
//! loop sleeps until the overlay's earliest deadline and never polls.
//!
//! Dropping every [`OverlayHandle`] sender (or calling
//! [`OverlayHandle::shutdown`]) ends the loop and tears the overlay down.

use crate::application::port::{AnimationDriver, Decoder};
use crate::config::OverlaySettings;
use crate::overlay::{Effect, Message, MountOptions, Overlay, OverlayView};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

/// Notifications from the loop to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    /// Re-render with this view.
    Updated(OverlayView),
    /// The user pressed Done.
    Closed,
}

/// Host side of a running overlay loop.
#[derive(Debug)]
pub struct OverlayHandle {
    input: mpsc::UnboundedSender<Message>,
    events: mpsc::UnboundedReceiver<OverlayEvent>,
    task: JoinHandle<()>,
}

impl OverlayHandle {
    /// Queues a message. Returns false once the loop has stopped.
    pub fn send(&self, msg: Message) -> bool {
        self.input.send(msg).is_ok()
    }

    /// Another sender for the same loop, for feeding input from other tasks.
    #[must_use]
    pub fn sender(&self) -> mpsc::UnboundedSender<Message> {
        self.input.clone()
    }

    /// Waits for the next event. `None` once the loop has stopped.
    pub async fn next_event(&mut self) -> Option<OverlayEvent> {
        self.events.recv().await
    }

    /// Returns an already queued event without waiting.
    pub fn try_next_event(&mut self) -> Option<OverlayEvent> {
        self.events.try_recv().ok()
    }

    /// Stops the loop and waits until the overlay is torn down.
    pub async fn shutdown(self) {
        let Self { input, task, .. } = self;
        drop(input);
        if let Err(err) = task.await {
            log::warn!("Overlay task ended abnormally: {err}");
        }
    }
}

/// Mounts the overlay on a new tokio task.
///
/// Must be called from within a tokio runtime.
pub fn spawn(
    decoder: Box<dyn Decoder>,
    animator: Box<dyn AnimationDriver>,
    options: MountOptions,
    settings: OverlaySettings,
) -> OverlayHandle {
    let (input, input_rx) = mpsc::unbounded_channel();
    let (events_tx, events) = mpsc::unbounded_channel();

    let task = tokio::spawn(run(decoder, animator, options, settings, input_rx, events_tx));

    OverlayHandle {
        input,
        events,
        task,
    }
}

async fn run(
    decoder: Box<dyn Decoder>,
    animator: Box<dyn AnimationDriver>,
    options: MountOptions,
    settings: OverlaySettings,
    mut input: mpsc::UnboundedReceiver<Message>,
    events: mpsc::UnboundedSender<OverlayEvent>,
) {
    let (mut overlay, mut ticks) = Overlay::mount(decoder, animator, options, settings, now());
    if events
        .send(OverlayEvent::Updated(overlay.view(now())))
        .is_err()
    {
        log::debug!("Overlay events receiver dropped before the first view");
    }

    loop {
        let deadline = overlay.next_deadline();
        let timer = async move {
            match deadline {
                Some(deadline) => time::sleep_until(time::Instant::from_std(deadline)).await,
                None => std::future::pending::<()>().await,
            }
        };

        let effect = tokio::select! {
            msg = input.recv() => match msg {
                Some(msg) => overlay.handle(msg, now()),
                None => break,
            },
            Some(status) = ticks.recv() => overlay.handle(Message::DecoderTick(status), now()),
            () = timer => overlay.tick(now()),
        };

        let event = match effect {
            Effect::None => continue,
            Effect::Changed => OverlayEvent::Updated(overlay.view(now())),
            Effect::Closed => OverlayEvent::Closed,
        };
        if events.send(event).is_err() {
            log::debug!("Overlay events receiver dropped");
        }
    }

    overlay.teardown();
}

/// Current time on the tokio clock, so paused test clocks apply.
fn now() -> std::time::Instant {
    time::Instant::now().into_std()
}
