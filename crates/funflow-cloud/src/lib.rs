//! funflow cloud networking
//!
//! Provider-neutral provisioning of the network a function runs in: the
//! reserved VPC, vswitch and security group.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    fun CLI                       │
//! │                   (fun vpc)                      │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │                funflow-cloud                     │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │   ensure_network_context / plan          │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌────────────┐ ┌────────────┐ ┌────────────┐   │
//! │  │ paginated  │ │ find-or-   │ │ readiness  │   │
//! │  │   finder   │ │  create    │ │   poller   │   │
//! │  └────────────┘ └────────────┘ └────────────┘   │
//! │      trait NetworkProvider { ... }              │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//!           ┌───────▼───────┐
//!           │    aliyun     │
//!           │   provider    │
//!           └───────────────┘
//! ```

pub mod action;
pub mod error;
pub mod model;
pub mod network;
pub mod page;
pub mod poll;
pub mod provider;
pub mod reconcile;

#[cfg(test)]
mod testing;

// Re-exports
pub use action::{Action, ActionType, Plan, PlanSummary};
pub use error::{CloudError, Result};
pub use model::{
    CreateSecurityGroup, CreateVSwitch, CreateVpc, DEFAULT_SECURITY_GROUP_NAME, DEFAULT_VPC_NAME,
    DEFAULT_VSWITCH_NAME, ResourceKind, STATUS_AVAILABLE, SecurityGroup, VSwitch, Vpc,
};
pub use network::{NetworkContext, PendingResource, ensure_network_context, plan_network_context};
pub use page::{DEFAULT_PAGE_SIZE, Page, find_paginated};
pub use poll::{PollConfig, Readiness, wait_until_ready};
pub use provider::NetworkProvider;
pub use reconcile::{Reconcile, Reconciled, find_or_create};
