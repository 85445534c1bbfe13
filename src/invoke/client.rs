//! Sidecar invocation client.
//!
//! # Responsibilities
//! - Hold a long-lived, pooled HTTP client for outbound calls
//! - Build Dapr-style invocation URLs for named target services
//! - Collapse every non-success outcome into a single InvokeError

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::config::SidecarConfig;
use crate::invoke::error::{InvokeError, InvokeResult};

/// Client for invoking other services through the sidecar proxy.
///
/// Acquired once at process startup and shared by all request handlers.
/// Holds no per-request state, so concurrent use needs no coordination;
/// connection pooling lives inside the wrapped [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct InvocationClient {
    /// Pooled HTTP client with the configured timeout.
    http: reqwest::Client,
    /// Invocation API root, e.g. `http://localhost:3500/v1.0/invoke/`.
    base_url: Url,
}

impl InvocationClient {
    /// Create a new invocation client for the given sidecar endpoint.
    pub fn new(config: &SidecarConfig) -> InvokeResult<Self> {
        let base = format!("http://{}:{}/v1.0/invoke/", config.host, config.port);
        let base_url = base
            .parse::<Url>()
            .map_err(|e| InvokeError::new("sidecar", format!("invalid sidecar address '{base}': {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| InvokeError::new("sidecar", format!("failed to build HTTP client: {e}")))?;

        tracing::info!(
            sidecar_host = %config.host,
            sidecar_port = config.port,
            timeout_secs = config.timeout_secs,
            "Invocation client initialized"
        );

        Ok(Self { http, base_url })
    }

    /// Invoke `method` on the service registered with the sidecar as `app_id`.
    ///
    /// Returns the response body as untyped JSON so callers can pass it
    /// through without re-shaping. Any non-success outcome, from connection
    /// refusal through an undecodable body, surfaces as [`InvokeError`].
    pub async fn invoke(
        &self,
        app_id: &str,
        method: &str,
        verb: Method,
        body: &Value,
    ) -> InvokeResult<Value> {
        let url = self.invocation_url(app_id, method)?;

        tracing::debug!(
            app_id = %app_id,
            method = %method,
            verb = %verb,
            "Invoking service via sidecar"
        );

        let response = self
            .http
            .request(verb, url)
            .json(body)
            .send()
            .await
            .map_err(|e| InvokeError::new(app_id, format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InvokeError::new(
                app_id,
                format!("sidecar returned status {status}"),
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| InvokeError::new(app_id, format!("invalid response body: {e}")))
    }

    /// Build the invocation URL for a target service and method.
    fn invocation_url(&self, app_id: &str, method: &str) -> InvokeResult<Url> {
        self.base_url
            .join(&format!("{app_id}/method/{method}"))
            .map_err(|e| InvokeError::new(app_id, format!("invalid method path '{method}': {e}")))
    }
}
