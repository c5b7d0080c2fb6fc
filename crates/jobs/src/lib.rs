pub mod backoff;
pub mod registry_update;
pub mod runner;

pub use backoff::Backoff;
pub use registry_update::RegistryUpdateJob;
pub use runner::JobRunner;
