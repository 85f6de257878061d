use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::cache::{HijriCache, ScheduleCache};
use super::events::ControllerEvent;
use crate::error::ConfigurationError;
use crate::models::display::DisplayState;
use crate::models::settings::GeoConfig;
use crate::services::hijri::HijriProvider;
use crate::services::schedule::{resolve_next, ScheduleProvider};
use crate::utils::date::{local_date, remaining_until};

/// Draws published display state.
pub trait Renderer {
    /// Paint one frame from a read-only snapshot.
    fn draw(&mut self, state: &DisplayState);

    /// A new state was published; schedule a repaint.
    fn request_redraw(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    Idle,
    Computing,
    Rendering,
    /// Terminal; reached on shutdown or after a fatal error
    Stopped,
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Owns the display state and applies controller events to it one at a
/// time. Ticks rebuild the state; render requests only read it.
pub struct RefreshController<P, H> {
    schedules: ScheduleCache<P>,
    hijri: HijriCache<H>,
    time_zone: Tz,
    current: Arc<DisplayState>,
    phase: ControllerPhase,
}

impl<P: ScheduleProvider, H: HijriProvider> RefreshController<P, H> {
    /// Validate the configuration and compute the first state, so a bad
    /// setup fails before any window opens.
    pub fn start(
        provider: P,
        hijri: H,
        geo: GeoConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, ConfigurationError> {
        let time_zone = geo.validate()?;
        let mut schedules = ScheduleCache::new(provider, geo);
        let mut hijri = HijriCache::new(hijri);

        let initial = build_state(&mut schedules, &mut hijri, time_zone, now)?;
        log::info!(
            "Next prayer is {} at {}",
            initial.next.prayer,
            initial.next.at.with_timezone(&time_zone).format("%I:%M %p")
        );

        Ok(Self {
            schedules,
            hijri,
            time_zone,
            current: Arc::new(initial),
            phase: ControllerPhase::Idle,
        })
    }

    pub fn phase(&self) -> ControllerPhase {
        self.phase
    }

    /// The last published state. Later ticks replace it, never modify it.
    pub fn snapshot(&self) -> Arc<DisplayState> {
        Arc::clone(&self.current)
    }

    /// Apply a single event.
    pub fn handle<R>(
        &mut self,
        event: ControllerEvent,
        renderer: &mut R,
    ) -> Result<Flow, ConfigurationError>
    where
        R: Renderer + ?Sized,
    {
        if self.phase == ControllerPhase::Stopped {
            return Ok(Flow::Stop);
        }

        match event {
            ControllerEvent::Tick(now) => {
                self.phase = ControllerPhase::Computing;
                match build_state(&mut self.schedules, &mut self.hijri, self.time_zone, now) {
                    Ok(state) => {
                        self.publish(state);
                        self.phase = ControllerPhase::Idle;
                        renderer.request_redraw();
                        Ok(Flow::Continue)
                    }
                    Err(err) => {
                        log::error!("Prayer schedule refresh failed: {}", err);
                        self.phase = ControllerPhase::Stopped;
                        Err(err)
                    }
                }
            }
            ControllerEvent::RenderRequest => {
                self.phase = ControllerPhase::Rendering;
                let snapshot = self.snapshot();
                renderer.draw(&snapshot);
                self.phase = ControllerPhase::Idle;
                Ok(Flow::Continue)
            }
            ControllerEvent::Shutdown => {
                log::info!("Refresh controller shutting down");
                self.phase = ControllerPhase::Stopped;
                Ok(Flow::Stop)
            }
        }
    }

    /// Handle everything already queued without blocking. A closed channel
    /// counts as shutdown.
    pub fn pump<R>(
        &mut self,
        events: &Receiver<ControllerEvent>,
        renderer: &mut R,
    ) -> Result<Flow, ConfigurationError>
    where
        R: Renderer + ?Sized,
    {
        loop {
            match events.try_recv() {
                Ok(event) => {
                    if self.handle(event, renderer)? == Flow::Stop {
                        return Ok(Flow::Stop);
                    }
                }
                Err(TryRecvError::Empty) => return Ok(Flow::Continue),
                Err(TryRecvError::Disconnected) => {
                    self.phase = ControllerPhase::Stopped;
                    return Ok(Flow::Stop);
                }
            }
        }
    }

    /// Block on the channel until shutdown, a fatal error, or every
    /// producer has gone away.
    pub fn run<R>(
        &mut self,
        events: &Receiver<ControllerEvent>,
        renderer: &mut R,
    ) -> Result<(), ConfigurationError>
    where
        R: Renderer + ?Sized,
    {
        while let Ok(event) = events.recv() {
            if self.handle(event, renderer)? == Flow::Stop {
                return Ok(());
            }
        }
        self.phase = ControllerPhase::Stopped;
        Ok(())
    }

    fn publish(&mut self, state: DisplayState) {
        if state.next != self.current.next {
            log::info!(
                "Next prayer is {} at {}",
                state.next.prayer,
                state.next.at.with_timezone(&self.time_zone).format("%I:%M %p")
            );
        }
        log::debug!(
            "Tick: {} in {}s",
            state.next.prayer,
            state.remaining.num_seconds()
        );
        self.current = Arc::new(state);
    }
}

fn build_state<P, H>(
    schedules: &mut ScheduleCache<P>,
    hijri: &mut HijriCache<H>,
    time_zone: Tz,
    now: DateTime<Utc>,
) -> Result<DisplayState, ConfigurationError>
where
    P: ScheduleProvider,
    H: HijriProvider,
{
    let today = local_date(now, time_zone);
    schedules.discard_before(today);

    let schedule = schedules.get(today)?;
    let next = resolve_next(&schedule, now, |date| schedules.get(date))?;

    Ok(DisplayState {
        remaining: remaining_until(next.at, now),
        hijri: hijri.get(today)?,
        schedule,
        next,
        computed_at: now,
    })
}
