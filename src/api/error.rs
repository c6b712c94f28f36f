// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Failure modes of the remote clients.

use serde::Deserialize;

/// Error returned by every remote call. Callers treat all variants as
/// "backend unavailable".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response body not read.
    #[error("network error: {0}")]
    Network(String),

    /// The body was not the expected JSON record.
    #[error("decode error: {0}")]
    Decode(String),

    /// The server answered with a non-success status.
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl ApiError {
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a rejection from a status code and the raw response body,
    /// preferring the server's `{"error": ...}` text when present.
    pub fn rejected(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: String,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.trim().to_string());
        Self::Rejected { status, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_error_field() {
        let err = ApiError::rejected(404, r#"{"error": "Overlay not found"}"#);
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 404,
                message: "Overlay not found".to_string()
            }
        );
    }

    #[test]
    fn test_rejected_falls_back_to_body() {
        let err = ApiError::rejected(502, "Bad Gateway\n");
        assert_eq!(err.to_string(), "server rejected request (502): Bad Gateway");
    }
}
