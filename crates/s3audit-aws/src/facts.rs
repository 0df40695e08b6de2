//! Per-bucket configuration fetching.
//!
//! Each fetch mirrors one S3 configuration API call. A failed call degrades
//! its fact to the false/absent default and logs the service error code at
//! debug level; several of these errors are expected states (no encryption
//! configuration, no public access block, no bucket policy) rather than
//! faults.

use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::types::{BucketVersioningStatus, MfaDeleteStatus};
use s3audit_core::BucketFacts;
use s3audit_model::BlockPublicAccess;
use tracing::debug;

use crate::client::AwsAuditor;

/// Region assumed when the location constraint is absent or unreadable.
const DEFAULT_REGION: &str = "us-east-1";

impl AwsAuditor {
    /// Resolve the region a bucket lives in.
    ///
    /// An empty location constraint means the bucket is in `us-east-1`; an
    /// unreadable one degrades to the same default.
    pub async fn bucket_region(&self, name: &str) -> String {
        match self.client.get_bucket_location().bucket(name).send().await {
            Ok(output) => normalize_location_constraint(
                output.location_constraint().map(|c| c.as_str()),
            )
            .to_owned(),
            Err(e) => {
                debug!(
                    bucket = %name,
                    code = ?e.code(),
                    "cannot read bucket location, assuming default region"
                );
                DEFAULT_REGION.to_owned()
            }
        }
    }

    /// Fetch all configuration facts for one bucket.
    ///
    /// Never fails: each unreadable fact keeps its default and the audit
    /// continues with the rest.
    pub async fn bucket_facts(&self, name: &str) -> BucketFacts {
        let region = self.bucket_region(name).await;
        let client = self.regional_client(&region);

        let mut facts = BucketFacts {
            name: name.to_owned(),
            account_id: self.account_id().to_owned(),
            region,
            ..BucketFacts::default()
        };

        match client
            .get_bucket_versioning()
            .bucket(name)
            .expected_bucket_owner(self.account_id())
            .send()
            .await
        {
            Ok(output) => {
                facts.versioning_enabled =
                    matches!(output.status(), Some(BucketVersioningStatus::Enabled));
                facts.mfa_delete_enabled =
                    matches!(output.mfa_delete(), Some(MfaDeleteStatus::Enabled));
            }
            Err(e) => {
                debug!(bucket = %name, code = ?e.code(), "cannot read versioning status");
            }
        }

        // The dedicated not-found error means no SSE configuration exists;
        // either way the bucket counts as unencrypted.
        match client
            .get_bucket_encryption()
            .bucket(name)
            .expected_bucket_owner(self.account_id())
            .send()
            .await
        {
            Ok(_) => facts.encryption_enabled = true,
            Err(e) => {
                debug!(bucket = %name, code = ?e.code(), "no server-side encryption configuration");
            }
        }

        match client
            .get_public_access_block()
            .bucket(name)
            .expected_bucket_owner(self.account_id())
            .send()
            .await
        {
            Ok(output) => {
                if let Some(config) = output.public_access_block_configuration() {
                    facts.public_access_block = BlockPublicAccess {
                        block_public_acls: config.block_public_acls().unwrap_or(false),
                        block_public_policy: config.block_public_policy().unwrap_or(false),
                        ignore_public_acls: config.ignore_public_acls().unwrap_or(false),
                        restrict_public_buckets: config
                            .restrict_public_buckets()
                            .unwrap_or(false),
                    };
                }
            }
            Err(e) => {
                debug!(bucket = %name, code = ?e.code(), "no public access block configuration");
            }
        }

        match client
            .get_bucket_policy()
            .bucket(name)
            .expected_bucket_owner(self.account_id())
            .send()
            .await
        {
            Ok(output) => facts.policy = output.policy().map(ToOwned::to_owned),
            Err(e) => {
                debug!(
                    bucket = %name,
                    code = ?e.code(),
                    message = ?e.message(),
                    "no bucket policy"
                );
            }
        }

        facts
    }

    /// Build an S3 client pinned to the bucket's region, reusing the run's
    /// shared configuration.
    fn regional_client(&self, region: &str) -> Client {
        let config = aws_sdk_s3::config::Builder::from(&self.config)
            .region(Region::new(region.to_owned()))
            .build();
        Client::from_conf(config)
    }
}

/// Map a location constraint to a region name.
///
/// Buckets in `us-east-1` report no constraint, and very old buckets in
/// `eu-west-1` report the legacy `EU` constraint.
fn normalize_location_constraint(constraint: Option<&str>) -> &str {
    match constraint {
        None | Some("") => DEFAULT_REGION,
        Some("EU") => "eu-west-1",
        Some(other) => other,
    }
}
