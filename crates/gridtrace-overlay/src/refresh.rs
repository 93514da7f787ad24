//! Background refresh thread.
//!
//! [`Refresher`] runs a job on a dedicated named thread at a fixed
//! interval until stopped or dropped. The first run happens one interval
//! after spawning.
//!
//! ```text
//!   owner                     gridtrace-refresh thread
//!     |                           |
//!     |                           | loop select!
//!     |                           |   tick      -> job()
//!     |--stop()/drop()----------->|   shutdown  -> break
//!     |<--join (run count)--------|
//! ```

use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Sender};

use crate::config::ConfigError;
use crate::discover::WorldSnapshot;
use crate::error::OverlayError;
use crate::service::VisualizerService;

/// Handle to a running refresh thread.
///
/// Dropping the handle stops the thread and waits for it.
#[derive(Debug)]
pub struct Refresher {
    shutdown_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl Refresher {
    /// Run `job` every `interval` on a new thread.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroInterval`] for a zero interval, or
    /// [`OverlayError::ThreadSpawnFailed`] if the OS refuses the thread.
    pub fn spawn<F>(interval: Duration, mut job: F) -> Result<Self, OverlayError>
    where
        F: FnMut() + Send + 'static,
    {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval.into());
        }
        let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
        let handle = thread::Builder::new()
            .name("gridtrace-refresh".into())
            .spawn(move || {
                let ticker = tick(interval);
                let mut runs = 0u64;
                loop {
                    select! {
                        recv(ticker) -> _ => {
                            job();
                            runs += 1;
                        }
                        recv(shutdown_rx) -> _ => break,
                    }
                }
                log::debug!("refresh thread stopping after {runs} runs");
                runs
            })
            .map_err(|e| OverlayError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;
        Ok(Self {
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Refresh every world returned by `worlds` through `service`.
    ///
    /// The service is shared with the caller, who may read marker sets
    /// between refreshes.
    ///
    /// # Errors
    ///
    /// As [`spawn`](Self::spawn).
    pub fn for_service<W>(
        service: VisualizerService,
        interval: Duration,
        mut worlds: W,
    ) -> Result<(Self, Arc<Mutex<VisualizerService>>), OverlayError>
    where
        W: FnMut() -> Vec<WorldSnapshot> + Send + 'static,
    {
        let shared = Arc::new(Mutex::new(service));
        let service = Arc::clone(&shared);
        let refresher = Self::spawn(interval, move || {
            let snapshots = worlds();
            // Each update leaves its world consistent, so poisoning is benign.
            let mut service = service.lock().unwrap_or_else(PoisonError::into_inner);
            for world in &snapshots {
                let report = service.update(world);
                if report.regions_skipped > 0 {
                    log::warn!(
                        "world {}: {} regions kept stale markers",
                        world.id,
                        report.regions_skipped
                    );
                }
            }
        })?;
        Ok((refresher, shared))
    }

    /// Stop the thread and return how many times the job ran.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.try_send(());
        }
        match self.handle.take().map(JoinHandle::join) {
            Some(Ok(runs)) => runs,
            Some(Err(_)) => {
                log::warn!("refresh thread panicked");
                0
            }
            None => 0,
        }
    }
}

impl Drop for Refresher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverlayConfig;
    use crate::discover::{BlockPos, RegionSnapshot};
    use gridtrace_test_utils::rect;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn zero_interval_is_rejected() {
        let err = Refresher::spawn(Duration::ZERO, || {}).unwrap_err();
        assert_eq!(err, OverlayError::Config(ConfigError::ZeroInterval));
    }

    #[test]
    fn runs_until_stopped() {
        let count = Arc::new(AtomicU64::new(0));
        let seen = Arc::clone(&count);
        let refresher = Refresher::spawn(Duration::from_millis(10), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        thread::sleep(Duration::from_millis(100));
        let runs = refresher.stop();
        assert!(runs >= 1);
        assert_eq!(runs, count.load(Ordering::SeqCst));
    }

    #[test]
    fn drop_stops_the_thread() {
        let count = Arc::new(AtomicU64::new(0));
        let seen = Arc::clone(&count);
        let refresher = Refresher::spawn(Duration::from_millis(10), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        thread::sleep(Duration::from_millis(50));
        drop(refresher);
        let after_drop = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }

    #[test]
    fn service_refresh_writes_markers() {
        let config = OverlayConfig {
            section_shift: 4,
            ..OverlayConfig::default()
        };
        let service = VisualizerService::new(&config).unwrap();
        let (refresher, shared) = Refresher::for_service(service, Duration::from_millis(10), || {
            vec![WorldSnapshot {
                id: "w".into(),
                maps: vec!["surface".into()],
                spawn: Some(BlockPos::new(0, 0)),
                observers: vec![],
                regions: vec![RegionSnapshot {
                    id: 1,
                    sections: rect(2, 2),
                }],
            }]
        })
        .unwrap();
        thread::sleep(Duration::from_millis(100));
        assert!(refresher.stop() >= 1);

        let service = shared.lock().unwrap();
        let set = service.marker_set("w").unwrap();
        assert_eq!(set.ids().collect::<Vec<_>>(), vec!["!GridTrace#w:region-1"]);
    }
}
