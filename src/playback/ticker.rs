use std::time::Duration;

use flume::Sender;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tracing::trace;

use crate::event::events::Event;

/// Source of per-frame ticks for an active playback session.
pub trait FrameTicker: Send {
    /// Starts delivering ticks tagged with `generation`, replacing any loop
    /// already running.
    fn arm(&mut self, generation: u64);
    fn disarm(&mut self);
    fn is_armed(&self) -> bool;
}

/// Emits [`Event::FrameTick`] on the app channel at a fixed frame interval.
pub struct IntervalTicker {
    interval: Duration,
    event_tx: Sender<Event>,
    handle: Option<JoinHandle<()>>,
}

impl IntervalTicker {
    pub fn new(interval: Duration, event_tx: Sender<Event>) -> Self {
        Self {
            interval,
            event_tx,
            handle: None,
        }
    }
}

impl FrameTicker for IntervalTicker {
    fn arm(&mut self, generation: u64) {
        self.disarm();

        let event_tx = self.event_tx.clone();
        let period = self.interval.max(Duration::from_millis(1));

        self.handle = Some(tokio::spawn(async move {
            let mut frames = tokio::time::interval(period);
            frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // the first tick completes immediately
            frames.tick().await;

            loop {
                frames.tick().await;
                if event_tx.send_async(Event::FrameTick(generation)).await.is_err() {
                    break;
                }
            }
        }));
        trace!("Frame ticker armed (generation {})", generation);
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            trace!("Frame ticker disarmed");
        }
    }

    fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn next_tick(rx: &flume::Receiver<Event>) -> Option<u64> {
        match tokio::time::timeout(Duration::from_secs(2), rx.recv_async()).await {
            Ok(Ok(Event::FrameTick(generation))) => Some(generation),
            _ => None,
        }
    }

    #[tokio::test]
    async fn ticks_carry_the_arming_generation() {
        let (tx, rx) = flume::unbounded();
        let mut ticker = IntervalTicker::new(Duration::from_millis(2), tx);

        ticker.arm(7);
        assert!(ticker.is_armed());
        assert_eq!(next_tick(&rx).await, Some(7));

        ticker.arm(8);
        while rx.try_recv().is_ok() {}
        assert_eq!(next_tick(&rx).await, Some(8));
    }

    #[tokio::test]
    async fn disarm_stops_the_loop() {
        let (tx, rx) = flume::unbounded();
        let mut ticker = IntervalTicker::new(Duration::from_millis(2), tx);

        ticker.arm(1);
        assert_eq!(next_tick(&rx).await, Some(1));
        ticker.disarm();
        ticker.disarm();
        assert!(!ticker.is_armed());

        tokio::time::sleep(Duration::from_millis(20)).await;
        while rx.try_recv().is_ok() {}
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn dropping_releases_the_task() {
        let (tx, rx) = flume::unbounded();
        {
            let mut ticker = IntervalTicker::new(Duration::from_millis(2), tx);
            ticker.arm(3);
            assert_eq!(next_tick(&rx).await, Some(3));
        }

        tokio::time::sleep(Duration::from_millis(20)).await;
        while rx.try_recv().is_ok() {}
        // every sender is gone once the aborted task is dropped
        assert!(matches!(
            tokio::time::timeout(Duration::from_secs(2), rx.recv_async()).await,
            Ok(Err(_))
        ));
    }
}
