//! Error types for the s3audit data model.

/// Errors produced while decoding a bucket policy document.
///
/// Neither variant is fatal to an audit run: an unparseable document is
/// treated as absent by the evaluator, and a field that does not match any
/// recognized shape only invalidates its enclosing statement.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// The raw policy text is not well-formed JSON.
    #[error("malformed policy document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    /// A statement field does not match any recognized shape.
    #[error("statement field does not match a recognized shape: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Convenience result type for policy decoding.
pub type PolicyResult<T> = Result<T, PolicyError>;
