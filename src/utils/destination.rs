//! Destination URL validation.

use url::Url;

/// Errors that can occur when validating a destination URL.
#[derive(Debug, thiserror::Error)]
pub enum DestinationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates a destination URL and returns its canonical form.
///
/// Parsing through [`Url`] lowercases the host and normalizes the path,
/// so equal destinations compare equal as strings. Schemes other than
/// HTTP(S) are rejected to keep `javascript:`, `data:`, and `file:`
/// targets out of redirects.
///
/// # Errors
///
/// Returns [`DestinationError::InvalidFormat`] for malformed URLs and
/// [`DestinationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_destination(input: &str) -> Result<String, DestinationError> {
    let url = Url::parse(input).map_err(|e| DestinationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(DestinationError::UnsupportedProtocol),
    }

    Ok(url.to_string())
}
