//! ECS API (version 2014-05-26), security groups only

use crate::client::PopClient;
use crate::error::Result;
use funflow_cloud::{CreateSecurityGroup, SecurityGroup};
use serde::Deserialize;

pub const ECS_ENDPOINT: &str = "https://ecs.aliyuncs.com";
pub const ECS_API_VERSION: &str = "2014-05-26";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeSecurityGroupsResponse {
    #[serde(default)]
    security_groups: SecurityGroupSet,
}

#[derive(Debug, Default, Deserialize)]
struct SecurityGroupSet {
    #[serde(rename = "SecurityGroup", default)]
    items: Vec<ApiSecurityGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiSecurityGroup {
    security_group_id: String,
    #[serde(default)]
    security_group_name: String,
    #[serde(default)]
    vpc_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreateSecurityGroupResponse {
    security_group_id: String,
}

/// ECS API operations bound to one region
#[derive(Debug, Clone)]
pub struct EcsApi {
    client: PopClient,
    region: String,
}

impl EcsApi {
    pub fn new(client: PopClient, region: impl Into<String>) -> Self {
        Self {
            client,
            region: region.into(),
        }
    }

    pub async fn describe_security_groups(
        &self,
        vpc_id: &str,
        name: &str,
    ) -> Result<Vec<SecurityGroup>> {
        let response: DescribeSecurityGroupsResponse = self
            .client
            .request(
                "DescribeSecurityGroups",
                &[
                    ("RegionId", self.region.clone()),
                    ("VpcId", vpc_id.to_string()),
                    ("SecurityGroupName", name.to_string()),
                ],
            )
            .await?;

        Ok(response
            .security_groups
            .items
            .into_iter()
            .map(|g| SecurityGroup {
                id: g.security_group_id,
                name: g.security_group_name,
                vpc_id: g.vpc_id,
            })
            .collect())
    }

    pub async fn create_security_group(&self, request: &CreateSecurityGroup) -> Result<String> {
        let response: CreateSecurityGroupResponse = self
            .client
            .request(
                "CreateSecurityGroup",
                &[
                    ("RegionId", self.region.clone()),
                    ("VpcId", request.vpc_id.clone()),
                    ("SecurityGroupName", request.name.clone()),
                    ("SecurityGroupType", request.group_type.clone()),
                    ("Description", request.description.clone()),
                ],
            )
            .await?;
        Ok(response.security_group_id)
    }
}
