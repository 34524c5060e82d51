//! Readiness polling for newly created resources
//!
//! A fixed-budget loop: constant delay, constant attempt count, no backoff.

use crate::error::Result;
use crate::model::{ResourceKind, STATUS_AVAILABLE};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Polling budget
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay before each status probe
    pub interval: Duration,

    /// Number of probes before giving up
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(800),
            max_attempts: 10,
        }
    }
}

/// Outcome of waiting for a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Readiness {
    Ready {
        attempts: u32,
    },
    /// The budget ran out; the resource may still become ready later
    TimedOut {
        attempts: u32,
        last_status: Option<String>,
    },
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready { .. })
    }
}

/// Probe `status` until it reports [`STATUS_AVAILABLE`] or the budget is spent.
///
/// `probe` returns `None` when the provider has no record of the resource yet.
/// Probe errors abort the wait.
pub async fn wait_until_ready<F, Fut>(
    config: &PollConfig,
    kind: ResourceKind,
    id: &str,
    mut probe: F,
) -> Result<Readiness>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<String>>>,
{
    let mut last_status = None;

    for attempt in 1..=config.max_attempts {
        sleep(config.interval).await;

        last_status = probe().await?;
        debug!(%kind, id, attempt, status = ?last_status, "Polled resource status");

        if last_status.as_deref() == Some(STATUS_AVAILABLE) {
            return Ok(Readiness::Ready { attempts: attempt });
        }
    }

    warn!(
        %kind,
        id,
        attempts = config.max_attempts,
        status = ?last_status,
        "Resource did not become available in time"
    );
    Ok(Readiness::TimedOut {
        attempts: config.max_attempts,
        last_status,
    })
}
