mod registry;
mod use_cases;

pub use registry::RegistryServices;
pub use use_cases::{registry_update_job, UseCases};
