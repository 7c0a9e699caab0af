//! One-shot catalog fetch from the Indra API server.
//!
//! Exactly one GET per view activation, no retries and no timeout: a hung
//! request leaves the view loading until the user reloads. Failures collapse
//! to [`CatalogError`] and are logged by the caller, never shown as
//! structured error UI.

use super::Catalog;
use thiserror::Error;

/// Why a catalog could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request itself failed: transport error or non-success status.
    #[error("catalog request failed: {0}")]
    Fetch(String),
    /// The response body was not an ordered list of model records.
    #[error("catalog response did not parse: {0}")]
    Parse(String),
}

/// Join the service root and the `models` endpoint.
///
/// The configured root may or may not carry a trailing slash.
#[must_use]
pub fn models_url(service_root: &str) -> String {
    let root = service_root.trim_end_matches('/');
    format!("{root}/models")
}

/// Fetch the full model catalog with a single GET request.
///
/// # Errors
///
/// Returns [`CatalogError::Fetch`] on transport failure or a non-success
/// status, and [`CatalogError::Parse`] when the body is not a list of
/// model records.
pub fn fetch_catalog(service_root: &str) -> Result<Catalog, CatalogError> {
    let agent: ureq::Agent = ureq::config::Config::builder()
        .timeout_global(None)
        .build()
        .new_agent();
    let user_agent = concat!("indra-tui/", env!("CARGO_PKG_VERSION"));

    let response = match agent
        .get(&models_url(service_root))
        .header("User-Agent", user_agent)
        .call()
    {
        Ok(response) => response,
        Err(ureq::Error::StatusCode(status)) => {
            return Err(CatalogError::Fetch(format!("server returned {status}")));
        }
        Err(err) => return Err(CatalogError::Fetch(err.to_string())),
    };

    let body = response
        .into_body()
        .read_to_string()
        .map_err(|err| CatalogError::Fetch(err.to_string()))?;

    serde_json::from_str(&body).map_err(|err| CatalogError::Parse(err.to_string()))
}
