//! VPC API (version 2016-04-28)

use crate::client::PopClient;
use crate::error::Result;
use funflow_cloud::{CreateVSwitch, CreateVpc, Page, VSwitch, Vpc};
use serde::Deserialize;

pub const VPC_ENDPOINT: &str = "https://vpc.aliyuncs.com";
pub const VPC_API_VERSION: &str = "2016-04-28";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeVpcsResponse {
    total_count: Option<u32>,
    page_number: Option<u32>,
    #[serde(default)]
    vpcs: VpcSet,
}

#[derive(Debug, Default, Deserialize)]
struct VpcSet {
    #[serde(rename = "Vpc", default)]
    items: Vec<ApiVpc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiVpc {
    vpc_id: String,
    #[serde(default)]
    vpc_name: String,
    status: Option<String>,
    #[serde(rename = "VSwitchIds", default)]
    vswitch_ids: VSwitchIdSet,
}

#[derive(Debug, Default, Deserialize)]
struct VSwitchIdSet {
    #[serde(rename = "VSwitchId", default)]
    items: Vec<String>,
}

impl From<ApiVpc> for Vpc {
    fn from(vpc: ApiVpc) -> Self {
        Vpc {
            id: vpc.vpc_id,
            name: vpc.vpc_name,
            status: vpc.status,
            vswitch_ids: vpc.vswitch_ids.items,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DescribeVSwitchesResponse {
    #[serde(rename = "VSwitches", default)]
    vswitches: VSwitchSet,
}

#[derive(Debug, Default, Deserialize)]
struct VSwitchSet {
    #[serde(rename = "VSwitch", default)]
    items: Vec<ApiVSwitch>,
}

#[derive(Debug, Deserialize)]
struct ApiVSwitch {
    #[serde(rename = "VSwitchId")]
    id: String,
    #[serde(rename = "VSwitchName", default)]
    name: String,
    #[serde(rename = "VpcId", default)]
    vpc_id: String,
    #[serde(rename = "ZoneId")]
    zone_id: Option<String>,
    #[serde(rename = "Status")]
    status: Option<String>,
}

impl From<ApiVSwitch> for VSwitch {
    fn from(vswitch: ApiVSwitch) -> Self {
        VSwitch {
            id: vswitch.id,
            name: vswitch.name,
            vpc_id: vswitch.vpc_id,
            zone_id: vswitch.zone_id,
            status: vswitch.status,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeZonesResponse {
    #[serde(default)]
    zones: ZoneSet,
}

#[derive(Debug, Default, Deserialize)]
struct ZoneSet {
    #[serde(rename = "Zone", default)]
    items: Vec<ApiZone>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiZone {
    zone_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreateVpcResponse {
    vpc_id: String,
}

#[derive(Debug, Deserialize)]
struct CreateVSwitchResponse {
    #[serde(rename = "VSwitchId")]
    vswitch_id: String,
}

/// VPC API operations bound to one region
#[derive(Debug, Clone)]
pub struct VpcApi {
    client: PopClient,
    region: String,
}

impl VpcApi {
    pub fn new(client: PopClient, region: impl Into<String>) -> Self {
        Self {
            client,
            region: region.into(),
        }
    }

    fn region_param(&self) -> (&'static str, String) {
        ("RegionId", self.region.clone())
    }

    pub async fn describe_vpcs(&self, page_number: u32, page_size: u32) -> Result<Page<Vpc>> {
        let response: DescribeVpcsResponse = self
            .client
            .request(
                "DescribeVpcs",
                &[
                    self.region_param(),
                    ("PageSize", page_size.to_string()),
                    ("PageNumber", page_number.to_string()),
                ],
            )
            .await?;

        Ok(Page {
            total_count: response.total_count,
            page_number: response.page_number,
            items: response.vpcs.items.into_iter().map(Vpc::from).collect(),
        })
    }

    /// Status of a single VPC, looked up through `DescribeVpcs` with `VpcId`
    pub async fn describe_vpc_status(&self, vpc_id: &str) -> Result<Option<String>> {
        let response: DescribeVpcsResponse = self
            .client
            .request(
                "DescribeVpcs",
                &[self.region_param(), ("VpcId", vpc_id.to_string())],
            )
            .await?;

        Ok(response
            .vpcs
            .items
            .into_iter()
            .next()
            .and_then(|vpc| vpc.status))
    }

    pub async fn create_vpc(&self, request: &CreateVpc) -> Result<String> {
        let response: CreateVpcResponse = self
            .client
            .request(
                "CreateVpc",
                &[
                    self.region_param(),
                    ("CidrBlock", request.cidr_block.clone()),
                    ("EnableIpv6", request.enable_ipv6.to_string()),
                    ("VpcName", request.name.clone()),
                    ("Description", request.description.clone()),
                ],
            )
            .await?;
        Ok(response.vpc_id)
    }

    pub async fn describe_vswitch(&self, vswitch_id: &str) -> Result<Option<VSwitch>> {
        let response: DescribeVSwitchesResponse = self
            .client
            .request(
                "DescribeVSwitches",
                &[self.region_param(), ("VSwitchId", vswitch_id.to_string())],
            )
            .await?;

        Ok(response
            .vswitches
            .items
            .into_iter()
            .next()
            .map(VSwitch::from))
    }

    pub async fn describe_zones(&self) -> Result<Vec<String>> {
        let response: DescribeZonesResponse = self
            .client
            .request("DescribeZones", &[self.region_param()])
            .await?;

        Ok(response
            .zones
            .items
            .into_iter()
            .map(|zone| zone.zone_id)
            .collect())
    }

    pub async fn create_vswitch(&self, request: &CreateVSwitch) -> Result<String> {
        let response: CreateVSwitchResponse = self
            .client
            .request(
                "CreateVSwitch",
                &[
                    self.region_param(),
                    ("VpcId", request.vpc_id.clone()),
                    ("ZoneId", request.zone_id.clone()),
                    ("CidrBlock", request.cidr_block.clone()),
                    ("VSwitchName", request.name.clone()),
                    ("Description", request.description.clone()),
                ],
            )
            .await?;
        Ok(response.vswitch_id)
    }
}
