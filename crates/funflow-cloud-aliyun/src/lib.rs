//! Alibaba Cloud provider for funflow
//!
//! Implements [`funflow_cloud::NetworkProvider`] on top of the RPC-style VPC
//! and ECS APIs. Requests are signed with the account's access key pair.
//!
//! # Example
//!
//! ```ignore
//! use funflow_cloud::{PollConfig, ensure_network_context};
//! use funflow_cloud_aliyun::{AliyunNetworkProvider, Credentials};
//!
//! let provider = AliyunNetworkProvider::builder("cn-hangzhou", Credentials::new(ak, secret))
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//!
//! let context = ensure_network_context(&provider, &PollConfig::default()).await?;
//! ```

pub mod client;
pub mod ecs;
pub mod error;
pub mod provider;
pub mod signature;
pub mod vpc;

pub use client::{Credentials, PopClient};
pub use error::{AliyunError, Result};
pub use provider::{AliyunNetworkProvider, AliyunNetworkProviderBuilder};
