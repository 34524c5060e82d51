//! Default function network provisioning
//!
//! Finds or creates the reserved VPC, then the reserved vswitch and security
//! group inside it. Steps run strictly in sequence and there is no rollback:
//! a failure after the VPC was created leaves it in place, and re-running
//! picks up the existing resources and completes the rest.

use crate::action::{Action, Plan};
use crate::error::{CloudError, Result};
use crate::model::{
    CreateSecurityGroup, CreateVSwitch, CreateVpc, DEFAULT_SECURITY_GROUP_NAME,
    DEFAULT_VPC_NAME, DEFAULT_VSWITCH_NAME, ResourceKind, SecurityGroup, VSwitch, Vpc,
};
use crate::page::{DEFAULT_PAGE_SIZE, find_paginated};
use crate::poll::{PollConfig, Readiness};
use crate::provider::NetworkProvider;
use crate::reconcile::{Reconcile, Reconciled, find_or_create};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Addressing information needed to attach a function to the network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkContext {
    pub vpc_id: String,
    pub vswitch_ids: Vec<String>,
    pub security_group_id: String,

    /// Resources created in this run that did not report ready in time
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pending: Vec<PendingResource>,
}

impl NetworkContext {
    pub fn is_ready(&self) -> bool {
        self.pending.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingResource {
    pub kind: ResourceKind,
    pub id: String,
    pub last_status: Option<String>,
}

struct VpcResource<'a> {
    provider: &'a dyn NetworkProvider,
    name: &'a str,
}

#[async_trait]
impl Reconcile for VpcResource<'_> {
    type Found = Vpc;

    fn kind(&self) -> ResourceKind {
        ResourceKind::Vpc
    }

    fn name(&self) -> &str {
        self.name
    }

    async fn find(&self) -> Result<Option<Vpc>> {
        find_paginated(
            DEFAULT_PAGE_SIZE,
            |page| self.provider.describe_vpcs(page, DEFAULT_PAGE_SIZE),
            |vpc: &Vpc| vpc.name == self.name,
        )
        .await
    }

    async fn create(&self) -> Result<String> {
        self.provider
            .create_vpc(&CreateVpc::with_defaults(self.name))
            .await
    }

    async fn status(&self, id: &str) -> Result<Option<String>> {
        self.provider.describe_vpc_status(id).await
    }
}

struct VSwitchResource<'a> {
    provider: &'a dyn NetworkProvider,
    vpc_id: &'a str,
    known_ids: &'a [String],
    name: &'a str,
}

#[async_trait]
impl Reconcile for VSwitchResource<'_> {
    type Found = VSwitch;

    fn kind(&self) -> ResourceKind {
        ResourceKind::VSwitch
    }

    fn name(&self) -> &str {
        self.name
    }

    /// Only the vswitches already attached to the VPC are considered
    async fn find(&self) -> Result<Option<VSwitch>> {
        for id in self.known_ids {
            if let Some(vswitch) = self.provider.describe_vswitch(id).await?
                && vswitch.name == self.name
            {
                return Ok(Some(vswitch));
            }
        }
        Ok(None)
    }

    async fn create(&self) -> Result<String> {
        let zones = self.provider.describe_zones().await?;
        let zone_id = zones.into_iter().next().ok_or_else(|| {
            CloudError::InvalidResponse(format!(
                "no zone available for a vswitch in region {}",
                self.provider.region()
            ))
        })?;

        self.provider
            .create_vswitch(&CreateVSwitch::with_defaults(
                self.name,
                self.vpc_id,
                zone_id,
            ))
            .await
    }

    async fn status(&self, id: &str) -> Result<Option<String>> {
        self.provider.describe_vswitch_status(id).await
    }
}

struct SecurityGroupResource<'a> {
    provider: &'a dyn NetworkProvider,
    vpc_id: &'a str,
    name: &'a str,
}

#[async_trait]
impl Reconcile for SecurityGroupResource<'_> {
    type Found = SecurityGroup;

    fn kind(&self) -> ResourceKind {
        ResourceKind::SecurityGroup
    }

    fn name(&self) -> &str {
        self.name
    }

    async fn find(&self) -> Result<Option<SecurityGroup>> {
        let groups = self
            .provider
            .describe_security_groups(self.vpc_id, self.name)
            .await?;
        Ok(groups.into_iter().find(|g| g.name == self.name))
    }

    async fn create(&self) -> Result<String> {
        self.provider
            .create_security_group(&CreateSecurityGroup::with_defaults(self.name, self.vpc_id))
            .await
    }
}

/// Collects IDs and not-yet-ready resources across the three steps
#[derive(Default)]
struct Outcome {
    pending: Vec<PendingResource>,
}

impl Outcome {
    fn record<T>(&mut self, kind: ResourceKind, reconciled: &Reconciled<T>) {
        if let Reconciled::Created {
            id,
            readiness: Readiness::TimedOut { last_status, .. },
        } = reconciled
        {
            warn!(
                %kind,
                id = %id,
                "Continuing with a resource that is not available yet; later steps may fail"
            );
            self.pending.push(PendingResource {
                kind,
                id: id.clone(),
                last_status: last_status.clone(),
            });
        }
    }
}

fn reconciled_id<T>(reconciled: Reconciled<T>, id_of: impl FnOnce(T) -> String) -> String {
    match reconciled {
        Reconciled::Existing(found) => id_of(found),
        Reconciled::Created { id, .. } => id,
    }
}

/// Find or create the reserved VPC, vswitch and security group.
#[instrument(skip(provider, poll), fields(region = provider.region()))]
pub async fn ensure_network_context(
    provider: &dyn NetworkProvider,
    poll: &PollConfig,
) -> Result<NetworkContext> {
    let mut outcome = Outcome::default();

    // 1. VPC
    let vpc = find_or_create(
        &VpcResource {
            provider,
            name: DEFAULT_VPC_NAME,
        },
        poll,
    )
    .await?;
    outcome.record(ResourceKind::Vpc, &vpc);
    let (vpc_id, known_vswitch_ids) = match vpc {
        Reconciled::Existing(vpc) => (vpc.id, vpc.vswitch_ids),
        Reconciled::Created { id, .. } => (id, Vec::new()),
    };
    info!(vpc_id = %vpc_id, "Using VPC");

    // 2. vswitch, scoped to the VPC's attached vswitches
    let vswitch = find_or_create(
        &VSwitchResource {
            provider,
            vpc_id: &vpc_id,
            known_ids: &known_vswitch_ids,
            name: DEFAULT_VSWITCH_NAME,
        },
        poll,
    )
    .await?;
    outcome.record(ResourceKind::VSwitch, &vswitch);
    let vswitch_id = reconciled_id(vswitch, |v| v.id);

    // 3. security group
    let group = find_or_create(
        &SecurityGroupResource {
            provider,
            vpc_id: &vpc_id,
            name: DEFAULT_SECURITY_GROUP_NAME,
        },
        poll,
    )
    .await?;
    outcome.record(ResourceKind::SecurityGroup, &group);
    let security_group_id = reconciled_id(group, |g| g.id);

    Ok(NetworkContext {
        vpc_id,
        vswitch_ids: vec![vswitch_id],
        security_group_id,
        pending: outcome.pending,
    })
}

/// Report what [`ensure_network_context`] would do, without creating anything.
#[instrument(skip(provider), fields(region = provider.region()))]
pub async fn plan_network_context(provider: &dyn NetworkProvider) -> Result<Plan> {
    let vpc = VpcResource {
        provider,
        name: DEFAULT_VPC_NAME,
    };

    let Some(vpc) = vpc.find().await? else {
        return Ok(Plan::new(vec![
            Action::create(ResourceKind::Vpc, DEFAULT_VPC_NAME),
            Action::create(ResourceKind::VSwitch, DEFAULT_VSWITCH_NAME),
            Action::create(ResourceKind::SecurityGroup, DEFAULT_SECURITY_GROUP_NAME),
        ]));
    };

    let mut actions = vec![Action::no_op(ResourceKind::Vpc, DEFAULT_VPC_NAME, &vpc.id)];

    let vswitch = VSwitchResource {
        provider,
        vpc_id: &vpc.id,
        known_ids: &vpc.vswitch_ids,
        name: DEFAULT_VSWITCH_NAME,
    };
    actions.push(match vswitch.find().await? {
        Some(found) => Action::no_op(ResourceKind::VSwitch, DEFAULT_VSWITCH_NAME, found.id),
        None => Action::create(ResourceKind::VSwitch, DEFAULT_VSWITCH_NAME),
    });

    let group = SecurityGroupResource {
        provider,
        vpc_id: &vpc.id,
        name: DEFAULT_SECURITY_GROUP_NAME,
    };
    actions.push(match group.find().await? {
        Some(found) => Action::no_op(
            ResourceKind::SecurityGroup,
            DEFAULT_SECURITY_GROUP_NAME,
            found.id,
        ),
        None => Action::create(ResourceKind::SecurityGroup, DEFAULT_SECURITY_GROUP_NAME),
    });

    Ok(Plan::new(actions))
}
