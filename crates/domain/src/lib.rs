//! RKN Guard Domain Layer
pub mod config;
pub mod errors;
pub mod matcher;
pub mod normalizer;
pub mod registry;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use matcher::is_blocked;
pub use normalizer::{normalize, normalize_host, CanonicalUrl, NormalizeError, Scheme, MAX_URL_LEN};
pub use registry::{hash_domain, Registry};
