use std::fmt;

/// Body of a non-2xx response
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// Structured error (response declared a JSON content type)
    Json(serde_json::Value),
    /// Anything else, reduced to the HTTP status text
    Text(String),
}

impl ErrorBody {
    /// Human-readable detail.
    ///
    /// For JSON bodies a top-level `detail` or `message` string is preferred
    /// over the raw document.
    pub fn detail(&self) -> String {
        match self {
            ErrorBody::Json(value) => value
                .get("detail")
                .or_else(|| value.get("message"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string()),
            ErrorBody::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail())
    }
}

/// Errors raised at the remote store boundary
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    /// Connection, timeout or body decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-2xx status
    #[error("Remote store returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Parsed error body
        body: ErrorBody,
    },

    /// A 2xx response whose content contradicts the request
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl BoundaryError {
    /// HTTP status, if the store answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            BoundaryError::Status { status, .. } => Some(*status),
            BoundaryError::Http(e) => e.status().map(|s| s.as_u16()),
            BoundaryError::UnexpectedResponse(_) => None,
        }
    }

    /// Error payload supplied by the store, if any
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            BoundaryError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}
