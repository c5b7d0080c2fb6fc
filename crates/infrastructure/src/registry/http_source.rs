use async_trait::async_trait;
use rkn_guard_application::ports::RegistrySource;
use rkn_guard_domain::DomainError;
use std::time::Duration;
use tracing::{debug, instrument};

const USER_AGENT: &str = concat!("RKN-Guard/", env!("CARGO_PKG_VERSION"), " (registry-sync)");

/// Client for the registry mirror API.
///
/// `GET {base_url}/domains/` must answer with a JSON array of strings.
pub struct HttpRegistrySource {
    domains_url: String,
    http_client: reqwest::Client,
}

impl HttpRegistrySource {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(request_timeout)
            .build()
            .map_err(|e| DomainError::RegistryFetch(e.to_string()))?;

        Ok(Self {
            domains_url: domains_url(base_url),
            http_client,
        })
    }

    pub fn domains_url(&self) -> &str {
        &self.domains_url
    }
}

#[async_trait]
impl RegistrySource for HttpRegistrySource {
    #[instrument(skip(self), fields(url = %self.domains_url))]
    async fn fetch_raw_domains(&self) -> Result<Vec<String>, DomainError> {
        let response = self
            .http_client
            .get(&self.domains_url)
            .send()
            .await
            .map_err(|e| DomainError::RegistryFetch(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::RegistryFetch(format!(
                "unexpected status: {}",
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::RegistryFetch(format!("read body: {}", e)))?;

        debug!(bytes = body.len(), "Registry feed downloaded");

        parse_domain_list(&body)
    }
}

fn domains_url(base_url: &str) -> String {
    format!("{}/domains/", base_url.trim().trim_end_matches('/'))
}

/// Decodes `["example.com", ...]`. Anything but an array of strings is
/// rejected as a whole.
fn parse_domain_list(body: &[u8]) -> Result<Vec<String>, DomainError> {
    serde_json::from_slice::<Vec<String>>(body)
        .map_err(|e| DomainError::InvalidRegistryPayload(format!("expected JSON array of strings: {}", e)))
}
