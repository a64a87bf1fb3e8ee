//! Cancellable one-shot timer used for debouncing.

use std::time::Duration;

use log::debug;
use tokio::{runtime::Handle, task::JoinHandle};

/// One-shot timer that runs a callback after a delay.
///
/// Starting the timer again cancels the previous callback, and dropping the
/// timer cancels whatever is still pending, so a callback never runs after
/// its owner is gone. Outside a tokio runtime there is nothing to wait on,
/// so the callback runs at once.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    handle: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `callback` to run after `delay`, replacing any pending one.
    pub fn start<F>(&mut self, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        match Handle::try_current() {
            Ok(runtime) => {
                self.handle = Some(runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    callback();
                }));
            }
            Err(_) => {
                debug!("No async runtime, running timer callback immediately");
                callback();
            }
        }
    }

    /// Drop the pending callback, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// True while a callback is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use tokio::time::sleep;

    use super::*;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> Box<dyn FnOnce() + Send>) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        let make = move || {
            let count = Arc::clone(&handle);
            Box::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
            }) as Box<dyn FnOnce() + Send>
        };
        (count, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (count, make) = counter();
        let mut timer = DebounceTimer::new();

        timer.start(Duration::from_millis(100), make());
        assert!(timer.is_pending());

        sleep(Duration::from_millis(99)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_cancels_previous() {
        let (count, make) = counter();
        let mut timer = DebounceTimer::new();

        timer.start(Duration::from_millis(100), make());
        sleep(Duration::from_millis(60)).await;
        timer.start(Duration::from_millis(100), make());

        sleep(Duration::from_millis(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_runs_immediately_without_runtime() {
        let (count, make) = counter();
        let mut timer = DebounceTimer::new();

        timer.start(Duration::from_millis(100), make());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (count, make) = counter();
        {
            let mut timer = DebounceTimer::new();
            timer.start(Duration::from_millis(10), make());
        }

        sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
