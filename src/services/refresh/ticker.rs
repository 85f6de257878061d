use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chrono::Utc;

use super::events::EventSender;

/// Callback run after each tick is queued, e.g. to wake the UI thread.
pub type Waker = Box<dyn Fn() + Send + 'static>;

/// Background timer feeding [`ControllerEvent::Tick`](super::ControllerEvent::Tick)
/// into the controller's channel.
///
/// Deadlines come from a monotonic clock, so ticks do not drift with frame
/// timing. The thread must be stopped with [`Ticker::stop`]; dropping the
/// ticker stops it too.
pub struct Ticker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn start(period: Duration, events: EventSender, waker: Option<Waker>) -> std::io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("prayer-ticker".to_string())
            .spawn(move || {
                let mut deadline = Instant::now() + period;
                loop {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match stop_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {
                            if events.tick(Utc::now()).is_err() {
                                log::debug!("Ticker: event channel closed, stopping");
                                break;
                            }
                            if let Some(waker) = &waker {
                                waker();
                            }

                            deadline += period;
                            let now = Instant::now();
                            if deadline < now {
                                // Fell behind (suspend, debugger); skip the missed ticks
                                deadline = now + period;
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })?;

        log::debug!("Ticker started with period {:?}", period);
        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Signal the timer thread and wait for it to exit. Idempotent.
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Ticker thread panicked");
            } else {
                log::debug!("Ticker stopped");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
