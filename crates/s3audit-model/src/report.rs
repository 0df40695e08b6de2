//! The per-bucket compliance report.

use serde::{Deserialize, Serialize};

/// Public access block flags for a bucket.
///
/// AWS defines exactly four boolean fields for this configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct BlockPublicAccess {
    /// Whether public ACLs are blocked for this bucket.
    #[serde(default)]
    pub block_public_acls: bool,
    /// Whether public bucket policies are blocked.
    #[serde(default)]
    pub block_public_policy: bool,
    /// Whether public ACLs on this bucket are ignored.
    #[serde(default)]
    pub ignore_public_acls: bool,
    /// Whether access to this bucket is restricted to the owning account when
    /// its policy is public.
    #[serde(default)]
    pub restrict_public_buckets: bool,
}

/// Compliance verdict for one bucket.
///
/// Created once by the evaluator and never mutated afterward; ownership
/// passes to whichever output sink consumes it. The field set is stable and
/// serializes losslessly to JSON (camelCase keys), tabular text, and flat
/// delimited rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct BucketReport {
    /// Bucket name.
    pub name: String,
    /// Owning account ID.
    pub account_id: String,
    /// Bucket region.
    pub region: String,
    /// Whether a server-side encryption configuration is present.
    pub server_side_encryption_enabled: bool,
    /// Whether versioning is enabled.
    pub versioning_enabled: bool,
    /// Whether MFA delete is enabled.
    pub mfa_delete: bool,
    /// Whether the bucket policy provably denies plaintext (HTTP) transport.
    pub policy_deny_http: bool,
    /// Public access block flags.
    pub block_public_access: BlockPublicAccess,
}
