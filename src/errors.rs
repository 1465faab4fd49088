//! Error types for the API client.

/// Errors that can occur when building or executing API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be built: a mandatory field was missing or
    /// empty, or the configured protocol/host do not form a valid URL. No
    /// network call is attempted.
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },
    /// The HTTP call itself failed (connection, TLS, read error).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body could not be decoded in the expected format. The raw
    /// body snippet is kept for diagnostics.
    #[error("malformed response: {message}")]
    MalformedResponse { message: String, body: String },
}

impl Error {
    pub(crate) fn missing_field(field: &'static str) -> Self {
        Error::InvalidRequest {
            reason: format!("missing required field `{field}`"),
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // The body is server-controlled; back off to a char boundary so the
    // slice cannot panic mid-codepoint.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...[truncated]", &body[..cut])
}

#[cfg(test)]
mod tests {
    use super::truncate_body;

    #[test]
    fn short_body_kept_verbatim() {
        assert_eq!(truncate_body("<error>nope</error>"), "<error>nope</error>");
    }

    #[test]
    fn long_body_truncated() {
        let body = "x".repeat(3000);
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert_eq!(snippet.len(), 2000 + "...[truncated]".len());
    }

    #[test]
    fn truncation_lands_on_char_boundary() {
        let mut body = "x".repeat(1999);
        body.push('€');
        body.push_str(&"y".repeat(100));
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert!(snippet.starts_with(&"x".repeat(1999)));
        assert!(!snippet.contains('€'));
    }
}
