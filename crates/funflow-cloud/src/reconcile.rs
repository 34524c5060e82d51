//! Generic find-or-create

use crate::error::Result;
use crate::model::ResourceKind;
use crate::poll::{PollConfig, Readiness, wait_until_ready};
use async_trait::async_trait;
use tracing::info;

/// A named resource that can be looked up, created and polled
#[async_trait]
pub trait Reconcile: Send + Sync {
    /// What a successful lookup returns
    type Found: Send;

    fn kind(&self) -> ResourceKind;

    /// Reserved name the lookup is scoped by
    fn name(&self) -> &str;

    async fn find(&self) -> Result<Option<Self::Found>>;

    /// Issue the creation request and return the new ID
    async fn create(&self) -> Result<String>;

    /// Current status, only consulted for kinds with a lifecycle
    async fn status(&self, _id: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Result of [`find_or_create`]
#[derive(Debug, Clone)]
pub enum Reconciled<T> {
    Existing(T),
    Created { id: String, readiness: Readiness },
}

impl<T> Reconciled<T> {
    pub fn was_created(&self) -> bool {
        matches!(self, Reconciled::Created { .. })
    }
}

/// Return the existing resource, or create it and wait for it to become ready.
///
/// A timed-out wait is not an error: the new ID is returned together with
/// the [`Readiness::TimedOut`] outcome.
pub async fn find_or_create<R: Reconcile>(
    resource: &R,
    poll: &PollConfig,
) -> Result<Reconciled<R::Found>> {
    let kind = resource.kind();

    if let Some(found) = resource.find().await? {
        info!(%kind, name = resource.name(), "Found existing resource");
        return Ok(Reconciled::Existing(found));
    }

    info!(%kind, name = resource.name(), "Creating resource");
    let id = resource.create().await?;
    info!(%kind, id = %id, "Created resource");

    let readiness = if kind.has_lifecycle() {
        wait_until_ready(poll, kind, &id, || resource.status(&id)).await?
    } else {
        Readiness::Ready { attempts: 0 }
    };

    Ok(Reconciled::Created { id, readiness })
}
