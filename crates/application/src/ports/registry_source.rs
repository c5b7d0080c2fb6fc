use async_trait::async_trait;
use rkn_guard_domain::DomainError;

/// Remote authority that supplies the raw blocklist feed.
///
/// Implementations own transport and payload decoding; the core only needs a
/// finite list of raw domain strings.
#[async_trait]
pub trait RegistrySource: Send + Sync {
    async fn fetch_raw_domains(&self) -> Result<Vec<String>, DomainError>;
}
