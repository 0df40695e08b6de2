//! AWS client wiring: configuration loading, caller identity, and bucket
//! enumeration.

use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::FetchError;

/// One entry from the bucket listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
    /// Bucket name.
    pub name: String,
    /// When the bucket was created, if the API reported it.
    pub creation_date: Option<DateTime<Utc>>,
}

/// Handle for one audit run: the shared SDK configuration, an S3 client, and
/// the caller's account ID resolved once up front.
#[derive(Debug, Clone)]
pub struct AwsAuditor {
    pub(crate) config: SdkConfig,
    pub(crate) client: Client,
    account_id: String,
}

impl AwsAuditor {
    /// Load the default AWS configuration (environment, profile, instance
    /// metadata) and resolve the caller's account ID.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::CallerIdentity`] when STS cannot identify the
    /// caller, which usually means no usable credentials are configured.
    pub async fn connect() -> Result<Self, FetchError> {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let account_id = caller_account_id(&config).await?;
        let client = Client::new(&config);

        debug!(account_id = %account_id, "resolved caller identity");
        Ok(Self {
            config,
            client,
            account_id,
        })
    }

    /// The account ID of the audited account.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// List all buckets in the account, optionally keeping only those whose
    /// name starts with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ListBuckets`] when the listing call fails.
    pub async fn list_buckets(
        &self,
        prefix: Option<&str>,
    ) -> Result<Vec<BucketSummary>, FetchError> {
        debug!("listing buckets");
        let output = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| FetchError::ListBuckets(e.into()))?;

        let buckets = output
            .buckets()
            .iter()
            .filter_map(|bucket| {
                let name = bucket.name()?.to_owned();
                matches_prefix(&name, prefix).then(|| BucketSummary {
                    name,
                    creation_date: bucket
                        .creation_date()
                        .and_then(|d| DateTime::from_timestamp(d.secs(), d.subsec_nanos())),
                })
            })
            .collect();
        Ok(buckets)
    }
}

/// Resolve the account ID for the currently configured credentials.
async fn caller_account_id(config: &SdkConfig) -> Result<String, FetchError> {
    let sts = aws_sdk_sts::Client::new(config);
    let identity = sts
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| FetchError::CallerIdentity(e.into()))?;
    Ok(identity.account().unwrap_or_default().to_owned())
}

/// Whether `name` passes the optional prefix filter.
fn matches_prefix(name: &str, prefix: Option<&str>) -> bool {
    prefix.is_none_or(|p| name.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_match_any_name_without_prefix() {
        assert!(matches_prefix("my-bucket", None));
    }

    #[test]
    fn test_should_filter_by_exact_prefix() {
        assert!(matches_prefix("prod-logs", Some("prod-")));
        assert!(!matches_prefix("staging-logs", Some("prod-")));
        // Prefix matching is on the raw name, not a substring match.
        assert!(!matches_prefix("my-prod-logs", Some("prod-")));
    }
}
