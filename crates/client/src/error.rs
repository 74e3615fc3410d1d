/// Errors surfaced by client construction and the signing transport.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Rejected at construction: empty user, empty API key, or an endpoint
    /// that is not an absolute URL.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The API key has a `:`-delimited prefix that is not a non-negative
    /// integer.
    #[error("Malformed API key: {0}")]
    MalformedCredential(String),
    /// The request URL could not be parsed, so the signature cannot be
    /// attached. Per-request condition, returned to the caller.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    /// Failure from the underlying transport, passed through unchanged.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}
