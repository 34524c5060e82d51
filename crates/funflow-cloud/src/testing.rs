//! In-memory provider used by the unit tests

use crate::error::{CloudError, Result};
use crate::model::{
    CreateSecurityGroup, CreateVSwitch, CreateVpc, STATUS_AVAILABLE, SecurityGroup, VSwitch, Vpc,
};
use crate::page::Page;
use crate::provider::NetworkProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    vpcs: Vec<Vpc>,
    vswitches: Vec<VSwitch>,
    groups: Vec<SecurityGroup>,
    zones: Vec<String>,
    calls: HashMap<&'static str, u32>,
    failing: Option<&'static str>,
    never_ready: bool,
    next_id: u32,
    last_vpc_request: Option<CreateVpc>,
}

impl State {
    fn call(&mut self, action: &'static str) -> Result<()> {
        *self.calls.entry(action).or_default() += 1;
        if self.failing == Some(action) {
            return Err(CloudError::Api {
                code: "Forbidden".to_string(),
                message: format!("{} denied", action),
                request_id: "req-fake".to_string(),
            });
        }
        Ok(())
    }

    fn new_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{:04}", prefix, self.next_id)
    }

    fn initial_status(&self) -> Option<String> {
        Some(if self.never_ready { "Pending" } else { STATUS_AVAILABLE }.to_string())
    }
}

/// Remembers created resources and counts calls per API action
pub struct FakeProvider {
    region: String,
    state: Mutex<State>,
}

impl FakeProvider {
    pub fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            state: Mutex::new(State {
                zones: vec![format!("{}-g", region), format!("{}-h", region)],
                ..State::default()
            }),
        }
    }

    pub fn count(&self, action: &str) -> u32 {
        self.state
            .lock()
            .unwrap()
            .calls
            .get(action)
            .copied()
            .unwrap_or(0)
    }

    pub fn vpc(&self, id: &str) -> Option<Vpc> {
        let state = self.state.lock().unwrap();
        state.vpcs.iter().find(|v| v.id == id).cloned()
    }

    pub fn last_vpc_request(&self) -> Option<CreateVpc> {
        self.state.lock().unwrap().last_vpc_request.clone()
    }

    pub fn never_ready(&self) {
        self.state.lock().unwrap().never_ready = true;
    }

    pub fn fail_on(&self, action: &'static str) {
        self.state.lock().unwrap().failing = Some(action);
    }

    pub fn clear_zones(&self) {
        self.state.lock().unwrap().zones.clear();
    }

    pub fn seed_vpc(&self, name: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let id = state.new_id("vpc");
        state.vpcs.push(Vpc {
            id: id.clone(),
            name: name.to_string(),
            status: Some(STATUS_AVAILABLE.to_string()),
            vswitch_ids: Vec::new(),
        });
        id
    }

    pub fn seed_user_vpcs(&self, count: usize) {
        for i in 0..count {
            self.seed_vpc(&format!("user-vpc-{}", i));
        }
    }

    pub fn seed_vswitch(&self, vpc_id: &str, name: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let id = state.new_id("vsw");
        state.vswitches.push(VSwitch {
            id: id.clone(),
            name: name.to_string(),
            vpc_id: vpc_id.to_string(),
            zone_id: None,
            status: Some(STATUS_AVAILABLE.to_string()),
        });
        if let Some(vpc) = state.vpcs.iter_mut().find(|v| v.id == vpc_id) {
            vpc.vswitch_ids.push(id.clone());
        }
        id
    }
}

#[async_trait]
impl NetworkProvider for FakeProvider {
    fn region(&self) -> &str {
        &self.region
    }

    async fn describe_vpcs(&self, page_number: u32, page_size: u32) -> Result<Page<Vpc>> {
        let mut state = self.state.lock().unwrap();
        state.call("DescribeVpcs")?;
        let start = ((page_number - 1) * page_size) as usize;
        let items = state
            .vpcs
            .iter()
            .skip(start)
            .take(page_size as usize)
            .cloned()
            .collect();
        Ok(Page {
            total_count: Some(state.vpcs.len() as u32),
            page_number: Some(page_number),
            items,
        })
    }

    async fn describe_vpc_status(&self, vpc_id: &str) -> Result<Option<String>> {
        let mut state = self.state.lock().unwrap();
        state.call("DescribeVpcStatus")?;
        Ok(state
            .vpcs
            .iter()
            .find(|v| v.id == vpc_id)
            .and_then(|v| v.status.clone()))
    }

    async fn create_vpc(&self, request: &CreateVpc) -> Result<String> {
        let mut state = self.state.lock().unwrap();
        state.call("CreateVpc")?;
        let id = state.new_id("vpc");
        let status = state.initial_status();
        state.vpcs.push(Vpc {
            id: id.clone(),
            name: request.name.clone(),
            status,
            vswitch_ids: Vec::new(),
        });
        state.last_vpc_request = Some(request.clone());
        Ok(id)
    }

    async fn describe_vswitch(&self, vswitch_id: &str) -> Result<Option<VSwitch>> {
        let mut state = self.state.lock().unwrap();
        state.call("DescribeVSwitches")?;
        Ok(state.vswitches.iter().find(|v| v.id == vswitch_id).cloned())
    }

    async fn describe_vswitch_status(&self, vswitch_id: &str) -> Result<Option<String>> {
        let mut state = self.state.lock().unwrap();
        state.call("DescribeVSwitchStatus")?;
        Ok(state
            .vswitches
            .iter()
            .find(|v| v.id == vswitch_id)
            .and_then(|v| v.status.clone()))
    }

    async fn describe_zones(&self) -> Result<Vec<String>> {
        let mut state = self.state.lock().unwrap();
        state.call("DescribeZones")?;
        Ok(state.zones.clone())
    }

    async fn create_vswitch(&self, request: &CreateVSwitch) -> Result<String> {
        let mut state = self.state.lock().unwrap();
        state.call("CreateVSwitch")?;
        let id = state.new_id("vsw");
        let status = state.initial_status();
        state.vswitches.push(VSwitch {
            id: id.clone(),
            name: request.name.clone(),
            vpc_id: request.vpc_id.clone(),
            zone_id: Some(request.zone_id.clone()),
            status,
        });
        if let Some(vpc) = state.vpcs.iter_mut().find(|v| v.id == request.vpc_id) {
            vpc.vswitch_ids.push(id.clone());
        }
        Ok(id)
    }

    async fn describe_security_groups(
        &self,
        vpc_id: &str,
        name: &str,
    ) -> Result<Vec<SecurityGroup>> {
        let mut state = self.state.lock().unwrap();
        state.call("DescribeSecurityGroups")?;
        Ok(state
            .groups
            .iter()
            .filter(|g| g.vpc_id == vpc_id && g.name == name)
            .cloned()
            .collect())
    }

    async fn create_security_group(&self, request: &CreateSecurityGroup) -> Result<String> {
        let mut state = self.state.lock().unwrap();
        state.call("CreateSecurityGroup")?;
        let id = state.new_id("sg");
        state.groups.push(SecurityGroup {
            id: id.clone(),
            name: request.name.clone(),
            vpc_id: request.vpc_id.clone(),
        });
        Ok(id)
    }
}
