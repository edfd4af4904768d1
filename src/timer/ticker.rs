//! Owned periodic ticker
//!
//! A tokio task emits one tick per period over a channel. The [`Ticker`]
//! owns the task: stopping or dropping it cancels the task, and ticks still
//! queued in the channel are discarded with the receiver.

use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::{FocusError, Result};

const TICK_BUFFER: usize = 16;

#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    tick_rx: mpsc::Receiver<()>,
    cancel_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn the tick task on the current tokio runtime.
    ///
    /// The first tick arrives one full period after the call.
    pub fn start(period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(FocusError::TickerError(
                "tick period must be greater than 0".to_string(),
            ));
        }
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| FocusError::TickerError(format!("no tokio runtime: {}", e)))?;

        let (tick_tx, tick_rx) = mpsc::channel(TICK_BUFFER);
        let (cancel_tx, mut cancel_rx) = oneshot::channel();

        let handle = runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = &mut cancel_rx => break,
                    _ = interval.tick() => {
                        if tick_tx.send(()).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        tracing::debug!(period_ms = period.as_millis() as u64, "ticker acquired");
        Ok(Self {
            period,
            tick_rx,
            cancel_tx: Some(cancel_tx),
            handle: Some(handle),
        })
    }

    /// Time between ticks
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Take one pending tick without waiting
    pub fn try_tick(&mut self) -> bool {
        self.tick_rx.try_recv().is_ok()
    }

    /// Wait for the next tick. Returns `false` if the task has ended.
    pub async fn tick(&mut self) -> bool {
        self.tick_rx.recv().await.is_some()
    }

    /// Release the ticker explicitly
    pub fn stop(mut self) {
        self.release();
    }

    /// Detach the task handle so tests can await the task's end
    #[cfg(test)]
    pub(crate) fn take_task(&mut self) -> Option<JoinHandle<()>> {
        self.handle.take()
    }

    fn release(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("ticker released");
        }
        self.tick_rx.close();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ticks_arrive() {
        let mut ticker = Ticker::start(Duration::from_millis(10)).unwrap();
        assert!(ticker.tick().await);
        assert!(ticker.tick().await);
    }

    #[test]
    fn test_requires_runtime() {
        let result = Ticker::start(Duration::from_millis(10));
        assert!(matches!(result, Err(FocusError::TickerError(_))));
    }

    #[tokio::test]
    async fn test_zero_period_rejected() {
        assert!(Ticker::start(Duration::ZERO).is_err());
    }

    #[tokio::test]
    async fn test_drop_ends_task() {
        let mut ticker = Ticker::start(Duration::from_millis(5)).unwrap();
        assert!(ticker.tick().await);
        let task = ticker.take_task().unwrap();

        drop(ticker);
        let ended = tokio::time::timeout(Duration::from_secs(1), task).await;
        assert!(ended.is_ok());
    }

    #[tokio::test]
    async fn test_no_ticks_after_release() {
        let mut ticker = Ticker::start(Duration::from_millis(5)).unwrap();
        assert!(ticker.tick().await);
        ticker.release();
        while ticker.try_tick() {}
        assert!(!ticker.tick().await);
        assert!(ticker.handle.is_none());
    }
}
