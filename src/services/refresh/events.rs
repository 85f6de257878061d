use std::sync::mpsc::{self, Receiver, SendError, Sender};

use chrono::{DateTime, Utc};

/// Everything the refresh controller reacts to. Both the ticker and the
/// window push into the same channel so events are handled in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    /// One-second heartbeat stamped with the wall-clock time it fired
    Tick(DateTime<Utc>),
    /// The surface needs repainting from the last published state
    RenderRequest,
    /// The host is closing the window
    Shutdown,
}

/// Cloneable producer half of the controller's event channel.
#[derive(Debug, Clone)]
pub struct EventSender {
    inner: Sender<ControllerEvent>,
}

impl EventSender {
    pub fn send(&self, event: ControllerEvent) -> Result<(), SendError<ControllerEvent>> {
        self.inner.send(event)
    }

    pub fn tick(&self, now: DateTime<Utc>) -> Result<(), SendError<ControllerEvent>> {
        self.send(ControllerEvent::Tick(now))
    }

    pub fn request_render(&self) -> Result<(), SendError<ControllerEvent>> {
        self.send(ControllerEvent::RenderRequest)
    }

    pub fn shutdown(&self) -> Result<(), SendError<ControllerEvent>> {
        self.send(ControllerEvent::Shutdown)
    }
}

pub fn event_channel() -> (EventSender, Receiver<ControllerEvent>) {
    let (tx, rx) = mpsc::channel();
    (EventSender { inner: tx }, rx)
}
