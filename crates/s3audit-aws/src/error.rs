//! Error types for the fact-gathering layer.

/// Boxed source error from the AWS SDK.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort an audit run.
///
/// Per-bucket configuration fetches never produce these; they degrade the
/// affected fact instead, so one unreadable bucket cannot stop a run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Bucket enumeration failed; nothing can be audited without it.
    #[error("cannot list buckets")]
    ListBuckets(#[source] BoxError),

    /// The caller-identity lookup failed, so reports cannot carry an
    /// account ID.
    #[error("cannot resolve caller identity")]
    CallerIdentity(#[source] BoxError),
}
