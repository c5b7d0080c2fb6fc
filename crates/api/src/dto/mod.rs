pub mod check;
pub mod registry;

pub use check::{CheckQuery, CheckRequest, CheckResponse};
pub use registry::RegistryStatusResponse;
