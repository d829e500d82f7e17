//! Cancellable periodic tick source.
//!
//! A `Ticker` delivers one message per period over a channel until it is
//! cancelled or dropped, giving the runner an explicit handle to cancel
//! when a session stops instead of a schedule-yourself-again callback.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Ticker {
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start sending `msg` on `tx` once per `period` until cancelled.
    /// Sending stops on its own if the receiving side goes away.
    pub fn spawn<T>(period: Duration, tx: Sender<T>, msg: T) -> Self
    where
        T: Clone + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let handle = thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                thread::sleep(period);
                if flag.load(Ordering::Relaxed) || tx.send(msg.clone()).is_err() {
                    break;
                }
            }
        });
        Self {
            cancelled,
            handle: Some(handle),
        }
    }

    /// Stop the tick stream. Idempotent; returns once the timer thread has
    /// observed the flag or finished on its own.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
