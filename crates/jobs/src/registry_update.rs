use rkn_guard_application::use_cases::RefreshRegistryUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::backoff::Backoff;

const DEFAULT_INTERVAL_SECS: u64 = 6 * 60 * 60;

/// Background job that keeps the registry snapshot fresh.
///
///   - One refresh runs immediately on start, independent of the interval
///   - Afterwards a refresh runs on every tick of the interval
///   - A failed tick sleeps for the backoff delay, then waits for the next
///     tick; the interval itself is never reset
///   - Cancellation is honoured at every await point and leaves the last
///     published snapshot in place
pub struct RegistryUpdateJob {
    refresh: Arc<RefreshRegistryUseCase>,
    interval_secs: u64,
    backoff: Backoff,
    shutdown: CancellationToken,
}

impl RegistryUpdateJob {
    pub fn new(refresh: Arc<RefreshRegistryUseCase>) -> Self {
        Self {
            refresh,
            interval_secs: DEFAULT_INTERVAL_SECS,
            backoff: Backoff::default(),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        if self.interval_secs == 0 {
            warn!("RegistryUpdateJob: interval is zero, job disabled");
            return;
        }

        info!(
            interval_secs = self.interval_secs,
            initial_backoff_secs = self.backoff.initial().as_secs(),
            max_backoff_secs = self.backoff.max().as_secs(),
            "Starting registry update job"
        );

        let initial = tokio::select! {
            _ = self.shutdown.cancelled() => {
                info!("RegistryUpdateJob: shutting down during initial update");
                return;
            }
            result = self.refresh.execute() => result,
        };
        match initial {
            Ok(outcome) => info!(domains = outcome.domains, "RegistryUpdateJob: initial update succeeded"),
            Err(e) => error!(error = %e, "RegistryUpdateJob: initial update failed"),
        }

        let period = Duration::from_secs(self.interval_secs);
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut consecutive_failures: u32 = 0;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("RegistryUpdateJob: shutting down");
                    break;
                }
                _ = interval.tick() => {}
            }

            let result = tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("RegistryUpdateJob: shutting down during update");
                    break;
                }
                result = self.refresh.execute() => result,
            };

            match result {
                Ok(outcome) => {
                    if consecutive_failures > 0 {
                        info!(
                            failures = consecutive_failures,
                            domains = outcome.domains,
                            "RegistryUpdateJob: update recovered"
                        );
                    } else {
                        info!(domains = outcome.domains, "RegistryUpdateJob: update completed");
                    }
                    consecutive_failures = 0;
                }
                Err(e) => {
                    consecutive_failures = consecutive_failures.saturating_add(1);
                    let delay = self.backoff.delay(consecutive_failures);
                    error!(
                        error = %e,
                        attempt = consecutive_failures,
                        backoff_ms = delay.as_millis() as u64,
                        "RegistryUpdateJob: update failed"
                    );

                    tokio::select! {
                        _ = self.shutdown.cancelled() => {
                            info!("RegistryUpdateJob: shutting down during backoff");
                            break;
                        }
                        _ = tokio::time::sleep(delay) => {}
                    }
                }
            }
        }
    }
}
