// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

/// Structured error envelope the service returns on non-2xx responses.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Server-side timestamp of the failure.
    pub timestamp: String,

    /// HTTP status code, repeated in the body.
    pub status: u16,

    /// Short reason phrase (e.g. "Bad Request").
    pub error: String,

    /// Human-readable message.
    pub message: String,

    /// Request path that failed.
    pub path: String,

    /// Per-field validation messages, present only for validation failures.
    #[serde(default)]
    pub field_errors: BTreeMap<String, String>,
}

/// Reminder service client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network/transport failure before a response was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. The body is present when the service returned a
    /// parsable error envelope; the message falls back to a generic one
    /// otherwise.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Display message: the envelope's message, or a generic fallback.
        message: String,
        /// Parsed error envelope, if the body was JSON.
        body: Option<ApiErrorBody>,
    },

    /// A 2xx response whose body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Per-field validation messages, when the service supplied them.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            ApiError::Status {
                body: Some(body), ..
            } if !body.field_errors.is_empty() => Some(&body.field_errors),
            _ => None,
        }
    }

    /// HTTP status code, for non-2xx responses.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
