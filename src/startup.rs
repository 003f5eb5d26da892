use std::time::Duration;

use crate::error::AppError;

/// Every outbound request to a count source is bounded by this timeout, so a
/// dead endpoint costs one bot at most ten seconds of its cycle.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the shared HTTP client used by all count sources and name lookups.
///
/// Redirects are disabled: every endpoint this client talks to is either a
/// fixed API or an operator-supplied URL, and following redirects from the
/// latter would be an SSRF hazard.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend initialization failed
pub fn setup_http_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}
