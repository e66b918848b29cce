//! Deferred reveal of the computer's moves.
//!
//! The engine applies the AI's reply synchronously, so by the time a reveal is
//! scheduled the game state is already final. The delay only paces what the
//! user sees: [`Pacer::schedule`] starts a timer task on a private
//! current-thread `tokio` runtime and hands back a [`PendingReveal`] that can
//! be waited on or cancelled. Cancelling skips the pause, never the content.

use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

#[derive(Debug)]
pub struct Pacer {
    runtime: Runtime,
    delay: Duration,
}

/// A scheduled reveal. Dropping it cancels the timer.
#[derive(Debug)]
pub struct PendingReveal<T> {
    timer: Option<JoinHandle<()>>,
    payload: Option<T>,
}

impl Pacer {
    pub fn new(delay: Duration) -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_time().build()?;
        Ok(Self { runtime, delay })
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts the timer for `payload`. The deadline is fixed now, not when waited on.
    pub fn schedule<T>(&self, payload: T) -> PendingReveal<T> {
        let deadline = Instant::now() + self.delay;
        let timer = self.runtime.spawn(async move {
            sleep_until(deadline).await;
        });
        PendingReveal {
            timer: Some(timer),
            payload: Some(payload),
        }
    }

    /// Blocks until the reveal is due and returns its payload.
    /// A cancelled reveal returns its payload immediately.
    pub fn wait<T>(&self, mut reveal: PendingReveal<T>) -> Option<T> {
        if let Some(timer) = reveal.timer.take() {
            // a cancelled timer resolves to a JoinError; the payload is still shown
            let _ = self.runtime.block_on(timer);
        }
        reveal.payload.take()
    }
}

impl<T> PendingReveal<T> {
    /// Stops the timer so a following [`Pacer::wait`] returns at once.
    pub fn cancel(&mut self) {
        if let Some(timer) = &self.timer {
            timer.abort();
        }
    }

    pub fn is_due(&self) -> bool {
        self.timer.as_ref().is_none_or(|t| t.is_finished())
    }
}

impl<T> Drop for PendingReveal<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
