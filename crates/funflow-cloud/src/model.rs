//! Network resource model

use serde::{Deserialize, Serialize};

/// Reserved VPC name owned by funflow
pub const DEFAULT_VPC_NAME: &str = "fc-fun-vpc";

/// Reserved vswitch name owned by funflow
pub const DEFAULT_VSWITCH_NAME: &str = "fc-fun-vswitch-1";

/// Reserved security group name owned by funflow
pub const DEFAULT_SECURITY_GROUP_NAME: &str = "fc-fun-sg-1";

pub const DEFAULT_VPC_CIDR_BLOCK: &str = "10.0.0.0/8";
pub const DEFAULT_VSWITCH_CIDR_BLOCK: &str = "10.20.0.0/16";

/// Status reported by the provider once a resource is usable
pub const STATUS_AVAILABLE: &str = "Available";

/// Kind of network resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Vpc,
    VSwitch,
    SecurityGroup,
}

impl ResourceKind {
    /// Whether the resource goes through a pending state after creation
    pub fn has_lifecycle(&self) -> bool {
        match self {
            ResourceKind::Vpc | ResourceKind::VSwitch => true,
            ResourceKind::SecurityGroup => false,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Vpc => write!(f, "vpc"),
            ResourceKind::VSwitch => write!(f, "vswitch"),
            ResourceKind::SecurityGroup => write!(f, "security-group"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vpc {
    pub id: String,
    pub name: String,
    pub status: Option<String>,
    pub vswitch_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VSwitch {
    pub id: String,
    pub name: String,
    pub vpc_id: String,
    pub zone_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityGroup {
    pub id: String,
    pub name: String,
    pub vpc_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVpc {
    pub name: String,
    pub cidr_block: String,
    pub enable_ipv6: bool,
    pub description: String,
}

impl CreateVpc {
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cidr_block: DEFAULT_VPC_CIDR_BLOCK.to_string(),
            enable_ipv6: false,
            description: "default vpc created by fc fun".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVSwitch {
    pub name: String,
    pub vpc_id: String,
    pub zone_id: String,
    pub cidr_block: String,
    pub description: String,
}

impl CreateVSwitch {
    pub fn with_defaults(
        name: impl Into<String>,
        vpc_id: impl Into<String>,
        zone_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            vpc_id: vpc_id.into(),
            zone_id: zone_id.into(),
            cidr_block: DEFAULT_VSWITCH_CIDR_BLOCK.to_string(),
            description: "default vswitch created by fc fun".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSecurityGroup {
    pub name: String,
    pub vpc_id: String,
    pub group_type: String,
    pub description: String,
}

impl CreateSecurityGroup {
    pub fn with_defaults(name: impl Into<String>, vpc_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vpc_id: vpc_id.into(),
            group_type: "normal".to_string(),
            description: "default security group created by fc fun".to_string(),
        }
    }
}
