use dnsrpc_domain::DomainError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("dnsrpc/", env!("CARGO_PKG_VERSION"));

/// Client shared by every outbound provider. `timeout` bounds the whole
/// request, body included.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .pool_max_idle_per_host(4)
        .build()
        .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))
}

pub(crate) fn map_request_error(service: &str, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::UpstreamTimeout(service.to_string())
    } else {
        DomainError::Upstream(format!("{} request failed: {}", service, e))
    }
}

/// Sends `request` and decodes a successful JSON body.
pub(crate) async fn send_json<T: DeserializeOwned>(
    service: &str,
    request: reqwest::RequestBuilder,
) -> Result<T, DomainError> {
    let response = request
        .send()
        .await
        .map_err(|e| map_request_error(service, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DomainError::Upstream(format!(
            "{} returned HTTP {}",
            service,
            status.as_u16()
        )));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| map_request_error(service, e))?;

    debug!(service, bytes = body.len(), "Provider response received");

    serde_json::from_slice(&body)
        .map_err(|e| DomainError::Upstream(format!("{} sent an unexpected body: {}", service, e)))
}

/// Appends each segment to `base`, percent-encoding as needed.
pub(crate) fn join_url(base: &str, segments: &[&str]) -> Result<reqwest::Url, DomainError> {
    let mut url = reqwest::Url::parse(base)
        .map_err(|e| DomainError::ConfigError(format!("Invalid provider URL {}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| DomainError::ConfigError(format!("Provider URL cannot be a base: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
