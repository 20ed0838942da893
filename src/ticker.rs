//! Thread-backed tick source for hosts that have no timer of their own.

use alloc::sync::Arc;
use core::time::Duration;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};

use crate::round::RoundController;

/// Delivers ticks to a [`RoundController`] from a background thread.
///
/// The thread ticks every [`RoundOptions::tick_interval_millis`](crate::RoundOptions)
/// until the controller stops ticking (the countdown ended or the round was
/// disposed), or until [`stop`](Self::stop) is called or the ticker is dropped.
#[derive(Debug)]
pub struct Ticker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Starts ticking `controller` on a new thread.
    #[must_use]
    pub fn spawn(controller: Arc<RoundController>) -> Self {
        let (stop, stop_rx) = mpsc::channel::<()>();
        let interval = Duration::from_millis(controller.options.tick_interval_millis);

        let handle = thread::spawn(move || {
            while controller.is_ticking() {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        controller.tick();
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            tracing::debug!("ticker stopped");
        });

        Self {
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Returns whether the ticking thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Blocks until the controller stops ticking on its own.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Stops ticking and waits for the thread to exit.
    pub fn stop(&mut self) {
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
