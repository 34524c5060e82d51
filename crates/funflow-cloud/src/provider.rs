//! Network provider trait definition

use crate::error::Result;
use crate::model::{CreateSecurityGroup, CreateVSwitch, CreateVpc, SecurityGroup, VSwitch, Vpc};
use crate::page::Page;
use async_trait::async_trait;

/// Provider calls needed to provision the function network.
///
/// Implementations are bound to a single region at construction.
#[async_trait]
pub trait NetworkProvider: Send + Sync {
    /// Region all calls are issued against
    fn region(&self) -> &str;

    /// One page of the VPCs in the region
    async fn describe_vpcs(&self, page_number: u32, page_size: u32) -> Result<Page<Vpc>>;

    /// Current status of a VPC, `None` if the provider does not report it yet
    async fn describe_vpc_status(&self, vpc_id: &str) -> Result<Option<String>>;

    /// Create a VPC and return its ID
    async fn create_vpc(&self, request: &CreateVpc) -> Result<String>;

    async fn describe_vswitch(&self, vswitch_id: &str) -> Result<Option<VSwitch>>;

    async fn describe_vswitch_status(&self, vswitch_id: &str) -> Result<Option<String>>;

    /// Zones of the region that can host a vswitch
    async fn describe_zones(&self) -> Result<Vec<String>>;

    async fn create_vswitch(&self, request: &CreateVSwitch) -> Result<String>;

    /// Security groups in `vpc_id` carrying `name`
    async fn describe_security_groups(&self, vpc_id: &str, name: &str)
    -> Result<Vec<SecurityGroup>>;

    async fn create_security_group(&self, request: &CreateSecurityGroup) -> Result<String>;
}
