//! Alibaba Cloud network provider implementation

use crate::client::{Credentials, PopClient};
use crate::ecs::{ECS_API_VERSION, ECS_ENDPOINT, EcsApi};
use crate::error::{AliyunError, Result};
use crate::vpc::{VPC_API_VERSION, VPC_ENDPOINT, VpcApi};
use async_trait::async_trait;
use funflow_cloud::{
    CreateSecurityGroup, CreateVSwitch, CreateVpc, NetworkProvider, Page, SecurityGroup, VSwitch,
    Vpc,
};
use std::time::Duration;

/// Network provider backed by the VPC and ECS APIs of one region
#[derive(Debug, Clone)]
pub struct AliyunNetworkProvider {
    region: String,
    vpc: VpcApi,
    ecs: EcsApi,
}

impl AliyunNetworkProvider {
    pub fn builder(
        region: impl Into<String>,
        credentials: Credentials,
    ) -> AliyunNetworkProviderBuilder {
        AliyunNetworkProviderBuilder {
            region: region.into(),
            credentials,
            timeout: None,
            vpc_endpoint: VPC_ENDPOINT.to_string(),
            ecs_endpoint: ECS_ENDPOINT.to_string(),
        }
    }
}

pub struct AliyunNetworkProviderBuilder {
    region: String,
    credentials: Credentials,
    timeout: Option<Duration>,
    vpc_endpoint: String,
    ecs_endpoint: String,
}

impl AliyunNetworkProviderBuilder {
    /// Per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn vpc_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.vpc_endpoint = endpoint.into();
        self
    }

    pub fn ecs_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.ecs_endpoint = endpoint.into();
        self
    }

    pub fn build(self) -> Result<AliyunNetworkProvider> {
        if self.region.trim().is_empty() {
            return Err(AliyunError::InvalidConfig("region is empty".to_string()));
        }
        if self.credentials.access_key_id.is_empty() || self.credentials.access_key_secret.is_empty()
        {
            return Err(AliyunError::InvalidConfig(
                "access key id and secret are required".to_string(),
            ));
        }

        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build()?;

        let vpc = PopClient::new(
            http.clone(),
            self.vpc_endpoint,
            VPC_API_VERSION,
            self.credentials.clone(),
        );
        let ecs = PopClient::new(http, self.ecs_endpoint, ECS_API_VERSION, self.credentials);

        Ok(AliyunNetworkProvider {
            vpc: VpcApi::new(vpc, &self.region),
            ecs: EcsApi::new(ecs, &self.region),
            region: self.region,
        })
    }
}

#[async_trait]
impl NetworkProvider for AliyunNetworkProvider {
    fn region(&self) -> &str {
        &self.region
    }

    async fn describe_vpcs(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> funflow_cloud::Result<Page<Vpc>> {
        Ok(self.vpc.describe_vpcs(page_number, page_size).await?)
    }

    async fn describe_vpc_status(&self, vpc_id: &str) -> funflow_cloud::Result<Option<String>> {
        Ok(self.vpc.describe_vpc_status(vpc_id).await?)
    }

    async fn create_vpc(&self, request: &CreateVpc) -> funflow_cloud::Result<String> {
        Ok(self.vpc.create_vpc(request).await?)
    }

    async fn describe_vswitch(&self, vswitch_id: &str) -> funflow_cloud::Result<Option<VSwitch>> {
        Ok(self.vpc.describe_vswitch(vswitch_id).await?)
    }

    async fn describe_vswitch_status(
        &self,
        vswitch_id: &str,
    ) -> funflow_cloud::Result<Option<String>> {
        let vswitch = self.vpc.describe_vswitch(vswitch_id).await?;
        Ok(vswitch.and_then(|v| v.status))
    }

    async fn describe_zones(&self) -> funflow_cloud::Result<Vec<String>> {
        Ok(self.vpc.describe_zones().await?)
    }

    async fn create_vswitch(&self, request: &CreateVSwitch) -> funflow_cloud::Result<String> {
        Ok(self.vpc.create_vswitch(request).await?)
    }

    async fn describe_security_groups(
        &self,
        vpc_id: &str,
        name: &str,
    ) -> funflow_cloud::Result<Vec<SecurityGroup>> {
        Ok(self.ecs.describe_security_groups(vpc_id, name).await?)
    }

    async fn create_security_group(
        &self,
        request: &CreateSecurityGroup,
    ) -> funflow_cloud::Result<String> {
        Ok(self.ecs.create_security_group(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funflow_cloud::{CloudError, PollConfig, ensure_network_context};
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> AliyunNetworkProvider {
        AliyunNetworkProvider::builder("cn-hangzhou", Credentials::new("test-ak", "test-secret"))
            .timeout(Duration::from_secs(5))
            .vpc_endpoint(server.uri())
            .ecs_endpoint(server.uri())
            .build()
            .unwrap()
    }

    fn fast_poll() -> PollConfig {
        PollConfig {
            interval: Duration::from_millis(1),
            max_attempts: 3,
        }
    }

    async fn respond(
        server: &MockServer,
        fragments: &[&str],
        body: serde_json::Value,
        calls: u64,
    ) {
        let mut mock = Mock::given(method("POST"));
        for fragment in fragments {
            mock = mock.and(body_string_contains(*fragment));
        }
        mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(calls)
            .mount(server)
            .await;
    }

    #[test]
    fn test_build_rejects_missing_credentials() {
        let result = AliyunNetworkProvider::builder("cn-hangzhou", Credentials::new("", "")).build();
        assert!(matches!(result, Err(AliyunError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_existing_network_is_reused() {
        let server = MockServer::start().await;
        respond(
            &server,
            &["Action=DescribeVpcs", "PageNumber=1"],
            json!({
                "TotalCount": 1, "PageNumber": 1,
                "Vpcs": {"Vpc": [{
                    "VpcId": "vpc-1", "VpcName": "fc-fun-vpc", "Status": "Available",
                    "VSwitchIds": {"VSwitchId": ["vsw-1"]}
                }]}
            }),
            1,
        )
        .await;
        respond(
            &server,
            &["Action=DescribeVSwitches", "VSwitchId=vsw-1"],
            json!({"VSwitches": {"VSwitch": [{
                "VSwitchId": "vsw-1", "VSwitchName": "fc-fun-vswitch-1",
                "VpcId": "vpc-1", "Status": "Available"
            }]}}),
            1,
        )
        .await;
        respond(
            &server,
            &["Action=DescribeSecurityGroups", "SecurityGroupName=fc-fun-sg-1"],
            json!({"SecurityGroups": {"SecurityGroup": [{
                "SecurityGroupId": "sg-1", "SecurityGroupName": "fc-fun-sg-1", "VpcId": "vpc-1"
            }]}}),
            1,
        )
        .await;
        respond(&server, &["Action=Create"], json!({}), 0).await;

        let context = ensure_network_context(&provider(&server), &fast_poll())
            .await
            .unwrap();

        assert_eq!(context.vpc_id, "vpc-1");
        assert_eq!(context.vswitch_ids, vec!["vsw-1"]);
        assert_eq!(context.security_group_id, "sg-1");
    }

    #[tokio::test]
    async fn test_empty_region_creates_network() {
        let server = MockServer::start().await;
        respond(
            &server,
            &["Action=DescribeVpcs", "PageNumber=1"],
            json!({"TotalCount": 0, "PageNumber": 1, "Vpcs": {"Vpc": []}}),
            1,
        )
        .await;
        respond(
            &server,
            &["Action=CreateVpc", "CidrBlock=10.0.0.0%2F8", "VpcName=fc-fun-vpc"],
            json!({"RequestId": "req", "VpcId": "vpc-new"}),
            1,
        )
        .await;
        respond(
            &server,
            &["Action=DescribeVpcs", "VpcId=vpc-new"],
            json!({"Vpcs": {"Vpc": [{"VpcId": "vpc-new", "Status": "Available"}]}}),
            1,
        )
        .await;
        respond(
            &server,
            &["Action=DescribeZones"],
            json!({"Zones": {"Zone": [{"ZoneId": "cn-hangzhou-g"}, {"ZoneId": "cn-hangzhou-h"}]}}),
            1,
        )
        .await;
        respond(
            &server,
            &["Action=CreateVSwitch", "ZoneId=cn-hangzhou-g", "CidrBlock=10.20.0.0%2F16"],
            json!({"VSwitchId": "vsw-new"}),
            1,
        )
        .await;
        respond(
            &server,
            &["Action=DescribeVSwitches", "VSwitchId=vsw-new"],
            json!({"VSwitches": {"VSwitch": [{"VSwitchId": "vsw-new", "Status": "Available"}]}}),
            1,
        )
        .await;
        respond(
            &server,
            &["Action=DescribeSecurityGroups"],
            json!({"SecurityGroups": {"SecurityGroup": []}}),
            1,
        )
        .await;
        respond(
            &server,
            &["Action=CreateSecurityGroup", "SecurityGroupType=normal"],
            json!({"SecurityGroupId": "sg-new"}),
            1,
        )
        .await;

        let context = ensure_network_context(&provider(&server), &fast_poll())
            .await
            .unwrap();

        assert!(context.is_ready());
        assert_eq!(context.vpc_id, "vpc-new");
        assert_eq!(context.vswitch_ids, vec!["vsw-new"]);
        assert_eq!(context.security_group_id, "sg-new");
    }

    #[tokio::test]
    async fn test_api_error_maps_to_cloud_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "RequestId": "req-3",
                "Code": "InvalidRegionId.NotFound",
                "Message": "The specified region does not exist."
            })))
            .mount(&server)
            .await;

        let err = provider(&server).describe_zones().await.unwrap_err();
        match err {
            CloudError::Api {
                code, request_id, ..
            } => {
                assert_eq!(code, "InvalidRegionId.NotFound");
                assert_eq!(request_id, "req-3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
