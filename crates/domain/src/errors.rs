use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Registry fetch error: {0}")]
    RegistryFetch(String),

    #[error("Invalid registry payload: {0}")]
    InvalidRegistryPayload(String),

    #[error("Registry refresh timed out after {0}s")]
    RefreshTimeout(u64),
}
