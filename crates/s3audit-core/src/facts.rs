//! Raw configuration facts for a single bucket.

use s3audit_model::BlockPublicAccess;

/// Everything the fact-gathering layer knows about one bucket, as plain data.
///
/// The engine consumes this record and produces a report; it never fetches
/// anything itself. `policy` is `None` when the bucket has no policy
/// attached — a legitimate state, distinct from a fetch error.
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct BucketFacts {
    /// Bucket name.
    pub name: String,
    /// Owning account ID.
    pub account_id: String,
    /// Bucket region.
    pub region: String,
    /// Whether a server-side encryption configuration is present.
    pub encryption_enabled: bool,
    /// Whether versioning is enabled.
    pub versioning_enabled: bool,
    /// Whether MFA delete is enabled.
    pub mfa_delete_enabled: bool,
    /// Public access block flags (all false when no configuration is attached).
    pub public_access_block: BlockPublicAccess,
    /// Raw bucket policy document text, if any is attached.
    pub policy: Option<String>,
}
