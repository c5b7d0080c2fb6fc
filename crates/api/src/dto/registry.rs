use rkn_guard_application::use_cases::RegistryStatus;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegistryStatusResponse {
    pub domains: usize,
    pub urls: usize,
    pub ips: usize,
    pub created_at: Option<String>,
    pub age_secs: Option<i64>,
}

impl From<RegistryStatus> for RegistryStatusResponse {
    fn from(status: RegistryStatus) -> Self {
        Self {
            domains: status.domains,
            urls: status.urls,
            ips: status.ips,
            created_at: status.created_at.map(|t| t.to_rfc3339()),
            age_secs: status.age_secs,
        }
    }
}
