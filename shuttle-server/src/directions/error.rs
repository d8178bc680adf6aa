//! Directions client error types.

/// Errors from the directions HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// API answered but reported a non-OK status
    #[error("directions status {status}{}", detail(.message))]
    Status {
        status: String,
        message: Option<String>,
    },

    /// API answered OK but without any route leg
    #[error("no route between the given points")]
    NoRoute,

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// No API key was configured
    #[error("no directions API key configured")]
    MissingKey,
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}
