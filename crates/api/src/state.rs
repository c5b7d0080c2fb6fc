use rkn_guard_application::use_cases::{CheckUrlUseCase, GetRegistryStatusUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub check_url: Arc<CheckUrlUseCase>,
    pub registry_status: Arc<GetRegistryStatusUseCase>,
}
