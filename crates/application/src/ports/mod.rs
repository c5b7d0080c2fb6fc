mod registry_holder;
mod registry_source;

pub use registry_holder::RegistryHolderPort;
pub use registry_source::RegistrySource;
