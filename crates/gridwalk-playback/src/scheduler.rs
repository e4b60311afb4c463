//! Timer handles owned by a [`PlaybackController`](crate::PlaybackController).
//!
//! A scheduler delivers a [`Tick`] once its delay has elapsed. The
//! controller tags every timer it arms with a fresh tick and ignores any
//! tick that is not the one it is currently waiting for, so a late
//! delivery after `pause` or `load` is harmless.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Identifies one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tick(pub(crate) u64);

impl Tick {
    #[inline]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// A one-shot timer source.
pub trait Scheduler {
    /// Arrange for `tick` to be delivered after `delay`.
    fn schedule(&mut self, delay: Duration, tick: Tick);

    /// Drop `tick` if it has not fired yet. Unknown ticks are ignored.
    fn cancel(&mut self, tick: Tick);
}

// ---------------------------------------------------------------------------
// ManualScheduler
// ---------------------------------------------------------------------------

/// A virtual clock for event-loop hosts and tests.
///
/// Nothing fires on its own: the host moves time forward and collects the
/// ticks that became due, usually through
/// [`PlaybackController::advance_clock`](crate::PlaybackController::advance_clock).
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    pending: Vec<(Duration, Tick)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// When the earliest armed timer is due.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|&(due, _)| due).min()
    }

    /// Remove and return the earliest timer due at or before `until`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<Tick> {
        let (i, &(due, tick)) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _))| *due <= until)
            .min_by_key(|(_, (due, tick))| (*due, *tick))?;
        self.pending.swap_remove(i);
        self.now = self.now.max(due);
        Some(tick)
    }

    /// Move the clock forward to `t`. Never moves backwards.
    pub fn advance_to(&mut self, t: Duration) {
        self.now = self.now.max(t);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, tick: Tick) {
        self.pending.push((self.now + delay, tick));
    }

    fn cancel(&mut self, tick: Tick) {
        self.pending.retain(|&(_, t)| t != tick);
    }
}

// ---------------------------------------------------------------------------
// ThreadScheduler
// ---------------------------------------------------------------------------

#[derive(Debug)]
enum Request {
    Schedule { due: Instant, tick: Tick },
    Cancel(Tick),
}

/// Delivers ticks over a channel from one background timer thread.
///
/// The host owns the [`Receiver`] returned by [`new`](Self::new) and feeds
/// each received tick to
/// [`PlaybackController::on_tick`](crate::PlaybackController::on_tick) on
/// its own thread, so controller state is only ever touched by its owner.
/// Dropping the scheduler stops and joins the timer thread.
#[derive(Debug)]
pub struct ThreadScheduler {
    requests: Option<Sender<Request>>,
    worker: Option<JoinHandle<()>>,
}

impl ThreadScheduler {
    pub fn new() -> (Self, Receiver<Tick>) {
        let (tick_tx, tick_rx) = mpsc::channel();
        let (req_tx, req_rx) = mpsc::channel();
        let worker = thread::spawn(move || run_timer(req_rx, tick_tx));
        let sched = Self {
            requests: Some(req_tx),
            worker: Some(worker),
        };
        (sched, tick_rx)
    }

    fn send(&self, req: Request) {
        if let Some(tx) = &self.requests {
            if tx.send(req).is_err() {
                log::warn!("timer thread is gone; request dropped");
            }
        }
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&mut self, delay: Duration, tick: Tick) {
        self.send(Request::Schedule {
            due: Instant::now() + delay,
            tick,
        });
    }

    fn cancel(&mut self, tick: Tick) {
        self.send(Request::Cancel(tick));
    }
}

impl Drop for ThreadScheduler {
    fn drop(&mut self) {
        // Closing the request channel wakes the timer thread, which exits.
        self.requests.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("timer thread panicked");
            }
        }
    }
}

/// Timer thread body: sleeps until the earliest armed timer or the next
/// request, whichever comes first. Returns once the request channel or the
/// tick receiver is closed.
fn run_timer(requests: Receiver<Request>, ticks: Sender<Tick>) {
    let mut armed: Vec<(Instant, Tick)> = Vec::new();
    loop {
        let next = match armed.iter().map(|&(due, _)| due).min() {
            None => requests.recv().map_err(|_| RecvTimeoutError::Disconnected),
            Some(due) => requests.recv_timeout(due.saturating_duration_since(Instant::now())),
        };
        match next {
            Ok(Request::Schedule { due, tick }) => armed.push((due, tick)),
            Ok(Request::Cancel(tick)) => armed.retain(|&(_, t)| t != tick),
            Err(RecvTimeoutError::Timeout) => {
                let now = Instant::now();
                let (mut fired, rest): (Vec<_>, Vec<_>) =
                    armed.into_iter().partition(|&(due, _)| due <= now);
                armed = rest;
                fired.sort();
                for (_, tick) in fired {
                    if ticks.send(tick).is_err() {
                        log::trace!("tick receiver closed; timer thread exiting");
                        return;
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn manual_fires_in_due_order() {
        let mut s = ManualScheduler::new();
        s.schedule(MS * 300, Tick(0));
        s.schedule(MS * 100, Tick(1));
        s.schedule(MS * 100, Tick(2));
        assert_eq!(s.next_due(), Some(MS * 100));
        assert_eq!(s.pop_due(MS * 50), None);
        assert_eq!(s.pop_due(MS * 1000), Some(Tick(1)));
        assert_eq!(s.now(), MS * 100);
        assert_eq!(s.pop_due(MS * 1000), Some(Tick(2)));
        assert_eq!(s.pop_due(MS * 1000), Some(Tick(0)));
        assert_eq!(s.now(), MS * 300);
        assert_eq!(s.pop_due(MS * 1000), None);
    }

    #[test]
    fn manual_delay_is_relative_to_now() {
        let mut s = ManualScheduler::new();
        s.advance_to(MS * 500);
        s.advance_to(MS * 10);
        assert_eq!(s.now(), MS * 500);
        s.schedule(MS * 100, Tick(7));
        assert_eq!(s.next_due(), Some(MS * 600));
    }

    #[test]
    fn manual_cancel_removes_only_that_tick() {
        let mut s = ManualScheduler::new();
        s.schedule(MS, Tick(0));
        s.schedule(MS, Tick(1));
        s.cancel(Tick(0));
        s.cancel(Tick(42));
        assert_eq!(s.pending(), 1);
        assert_eq!(s.pop_due(MS), Some(Tick(1)));
    }

    #[test]
    fn thread_delivers_tick() {
        let (mut s, rx) = ThreadScheduler::new();
        s.schedule(MS * 5, Tick(3));
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(Tick(3)));
    }

    #[test]
    fn thread_cancel_suppresses_delivery() {
        let (mut s, rx) = ThreadScheduler::new();
        s.schedule(MS * 30, Tick(1));
        s.cancel(Tick(1));
        assert!(rx.recv_timeout(MS * 200).is_err());
    }

    #[test]
    fn thread_delivers_in_due_order_and_skips_cancelled() {
        let (mut s, rx) = ThreadScheduler::new();
        s.schedule(MS * 60, Tick(1));
        s.schedule(MS * 20, Tick(2));
        s.schedule(MS * 40, Tick(3));
        s.cancel(Tick(3));
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(Tick(2)));
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(Tick(1)));
        assert!(rx.recv_timeout(MS * 200).is_err());
    }

    #[test]
    fn thread_survives_rapid_rearming() {
        let (mut s, rx) = ThreadScheduler::new();
        for id in 0..1000 {
            s.schedule(MS * 2000, Tick(id));
            s.cancel(Tick(id));
        }
        s.schedule(MS * 5, Tick(1000));
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(Tick(1000)));
    }

    #[test]
    fn drop_stops_the_timer_thread_without_waiting_for_deadlines() {
        let (mut s, rx) = ThreadScheduler::new();
        s.schedule(Duration::from_secs(30), Tick(0));
        let started = Instant::now();
        drop(s);
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(rx.recv(), Err(mpsc::RecvError));
    }
}
