// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper: status checking and error-envelope decoding.

use reqwest::{Client, Method, RequestBuilder, Response};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiErrorBody};

/// HTTP client for the reminder service.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Builds a request for a service-relative path.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{path}", self.base_url))
    }

    /// Executes a request and maps non-2xx responses to [`ApiError::Status`].
    ///
    /// A JSON error body is decoded into the service's error envelope; any
    /// other body yields a generic "request failed with status N" message.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let is_json = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));

        let body: Option<ApiErrorBody> = if is_json {
            resp.json().await.ok()
        } else {
            None
        };

        let message = body
            .as_ref()
            .map(|b| b.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
            body,
        })
    }
}
