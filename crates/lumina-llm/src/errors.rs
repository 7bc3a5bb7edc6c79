//! Capability call errors.

use lumina_core::{Capability, LuminaError};

/// Result type alias for capability calls.
pub type CapabilityResult<T> = Result<T, CapabilityError>;

/// Errors that can occur during a single capability call.
#[derive(Debug, thiserror::Error)]
pub enum CapabilityError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Key rejected (401/403).
    #[error("Auth error ({status}): {message}")]
    Auth {
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },

    /// Rate limited by the endpoint (429).
    #[error("Rate limited: {message}")]
    RateLimited {
        /// Suggested retry delay in milliseconds, when the endpoint sent one.
        retry_after_ms: Option<u64>,
        /// Error description.
        message: String,
    },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
        /// Endpoint-specific error code.
        code: Option<String>,
    },

    /// Success status but nothing usable in the body.
    #[error("empty response: {0}")]
    EmptyResponse(&'static str),
}

impl CapabilityError {
    /// Error category string for logging.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Http(e) if e.is_timeout() => "timeout",
            Self::Http(_) => "network",
            Self::Json(_) => "parse",
            Self::Auth { .. } => "auth",
            Self::RateLimited { .. } => "rate_limit",
            Self::Api { .. } => "api",
            Self::EmptyResponse(_) => "empty_response",
        }
    }

    /// Extract retry-after delay in milliseconds, if available.
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after_ms, .. } => *retry_after_ms,
            _ => None,
        }
    }

    /// Attach the capability that failed and lift into the shared taxonomy.
    pub fn into_lumina(self, capability: Capability) -> LuminaError {
        LuminaError::Capability {
            capability,
            category: self.category().to_string(),
            message: self.to_string(),
        }
    }
}

/// Classify a non-success response.
///
/// `body` is the raw response text; the `{"error":{"message","code"}}`
/// envelope is used when present.
pub(crate) fn classify_status(
    status: u16,
    body: &str,
    retry_after_ms: Option<u64>,
) -> CapabilityError {
    let (message, code) = parse_error_body(body, status);
    match status {
        401 | 403 => CapabilityError::Auth { status, message },
        429 => CapabilityError::RateLimited {
            retry_after_ms,
            message,
        },
        _ => CapabilityError::Api {
            status,
            message,
            code,
        },
    }
}

fn parse_error_body(body: &str, status: u16) -> (String, Option<String>) {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        let error = &json["error"];
        if let Some(message) = error["message"].as_str() {
            let code = error["code"]
                .as_str()
                .or_else(|| error["type"].as_str())
                .map(String::from);
            return (message.to_string(), code);
        }
    }
    if body.trim().is_empty() {
        (format!("HTTP {status}"), None)
    } else {
        (format!("HTTP {status}: {}", body.trim()), None)
    }
}

/// Parse `retry-after-ms`, then `retry-after` (seconds).
pub(crate) fn retry_after_from_headers(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
    };
    header("retry-after-ms").or_else(|| header("retry-after").map(|s| s.saturating_mul(1000)))
}
