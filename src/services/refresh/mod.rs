//! Refresh loop for the prayer countdown.
//!
//! A [`Ticker`] and the window both feed one channel of
//! [`ControllerEvent`]s. The [`RefreshController`] consumes that channel on
//! the UI thread, one event at a time: ticks rebuild and publish a new
//! [`DisplayState`](crate::models::display::DisplayState), render requests
//! draw the last published one.

mod cache;
mod controller;
mod events;
mod ticker;

pub use controller::{ControllerPhase, Flow, RefreshController, Renderer};
pub use events::{event_channel, ControllerEvent, EventSender};
pub use ticker::{Ticker, Waker};

use std::time::Duration;

/// Countdown refresh cadence.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
