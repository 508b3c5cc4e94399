//! Cancellable periodic tick source.
//!
//! A [`Ticker`] hands out [`TickerHandle`]s: the first tick is delivered
//! immediately at subscription time, then one per period. Cancelling a
//! handle joins the backing thread, so no tick can be observed after
//! `cancel` returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// How often the ticker thread checks for cancellation while sleeping.
const CANCEL_POLL: Duration = Duration::from_millis(25);

/// A source of periodic tick events.
pub trait Ticker {
    /// Begin a periodic subscription delivering one tick immediately,
    /// then one per `period`.
    fn subscribe(&mut self, period: Duration) -> TickerHandle;
}

/// An active tick subscription.
///
/// Dropping the handle without cancelling also ends the subscription: the
/// backing thread exits on its next send once the receiver is gone.
pub struct TickerHandle {
    ticks: Receiver<()>,
    cancelled: Option<Arc<AtomicBool>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl TickerHandle {
    /// A handle fed manually through the returned sender, with no backing
    /// thread. Used by test tickers.
    #[must_use]
    pub fn manual() -> (Sender<()>, Self) {
        let (tx, rx) = mpsc::channel();
        (
            tx,
            Self {
                ticks: rx,
                cancelled: None,
                thread: None,
            },
        )
    }

    /// Take one queued tick, if any.
    #[must_use]
    pub fn try_tick(&self) -> bool {
        self.ticks.try_recv().is_ok()
    }

    /// Cancel the subscription, joining the ticker thread. Ticks still
    /// queued at that point are dropped with the handle.
    pub fn cancel(mut self) {
        if let Some(flag) = self.cancelled.take() {
            flag.store(true, Ordering::Relaxed);
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

/// Thread-backed ticker delivering over an mpsc channel.
#[derive(Debug, Default)]
pub struct IntervalTicker;

impl IntervalTicker {
    /// Create a new interval ticker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Ticker for IntervalTicker {
    fn subscribe(&mut self, period: Duration) -> TickerHandle {
        let (tx, rx) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let handle = thread::spawn(move || run_ticker(&tx, period, &flag));

        TickerHandle {
            ticks: rx,
            cancelled: Some(cancelled),
            thread: Some(handle),
        }
    }
}

fn run_ticker(tx: &Sender<()>, period: Duration, cancelled: &AtomicBool) {
    loop {
        if cancelled.load(Ordering::Relaxed) || tx.send(()).is_err() {
            return;
        }

        // Sleep in short slices so cancellation stays responsive.
        let mut slept = Duration::ZERO;
        while slept < period {
            if cancelled.load(Ordering::Relaxed) {
                return;
            }
            let step = CANCEL_POLL.min(period - slept);
            thread::sleep(step);
            slept += step;
        }
    }
}
