use rkn_guard_application::use_cases::UrlVerdict;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckResponse {
    /// Canonical form the verdict was computed for.
    pub url: String,
    pub blocked: bool,
}

impl From<UrlVerdict> for CheckResponse {
    fn from(verdict: UrlVerdict) -> Self {
        Self {
            url: verdict.url.to_string(),
            blocked: verdict.blocked,
        }
    }
}
