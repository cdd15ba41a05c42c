use serde::Serialize;

use crate::config::InstanceInfo;

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub hostname: String,
    pub pod_ip: String,
    pub node_name: String,
}

impl From<&InstanceInfo> for InfoResponse {
    fn from(info: &InstanceInfo) -> Self {
        Self {
            hostname: info.hostname.clone(),
            pod_ip: info.pod_ip.clone(),
            node_name: info.node_name.clone(),
        }
    }
}
