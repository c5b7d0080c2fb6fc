pub mod check_url;
pub mod get_registry_status;
pub mod refresh_registry;

pub use check_url::{CheckUrlUseCase, UrlVerdict};
pub use get_registry_status::{GetRegistryStatusUseCase, Readiness, RegistryStatus};
pub use refresh_registry::{RefreshOutcome, RefreshRegistryUseCase};
