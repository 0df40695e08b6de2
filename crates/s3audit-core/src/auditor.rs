//! Compliance evaluation: raw bucket facts in, immutable report out.

use s3audit_model::{BucketReport, PolicyDocument};
use tracing::{debug, warn};

use crate::facts::BucketFacts;
use crate::transport;

/// Evaluate one bucket's facts into a [`BucketReport`].
///
/// Pure and stateless. Every flag other than `policy_deny_http` is copied
/// through from the already-structured facts; `policy_deny_http` is derived
/// from the raw policy text. A bucket simply failing a rule is a normal
/// result, not an error, and an unparseable policy degrades to a `false`
/// flag with a warning — nothing here can abort a multi-bucket run.
#[must_use]
pub fn evaluate(facts: BucketFacts) -> BucketReport {
    let policy_deny_http = facts
        .policy
        .as_deref()
        .is_some_and(|text| evaluate_policy(text, &facts.name));

    BucketReport {
        name: facts.name,
        account_id: facts.account_id,
        region: facts.region,
        server_side_encryption_enabled: facts.encryption_enabled,
        versioning_enabled: facts.versioning_enabled,
        mfa_delete: facts.mfa_delete_enabled,
        policy_deny_http,
        block_public_access: facts.public_access_block,
    }
}

/// Parse a raw policy document and evaluate the deny-plaintext-transport rule.
fn evaluate_policy(text: &str, bucket: &str) -> bool {
    match PolicyDocument::from_json(text) {
        Ok(policy) => {
            debug!(
                bucket = %bucket,
                policy_id = ?policy.id,
                statements = policy.statements.len(),
                "evaluating bucket policy"
            );
            transport::denies_insecure_transport(&policy, bucket)
        }
        Err(e) => {
            warn!(bucket = %bucket, error = %e, "unparseable bucket policy, treating as absent");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use s3audit_model::BlockPublicAccess;

    use super::*;

    const DENY_HTTP_POLICY: &str = r#"{
        "Version": "2012-10-17",
        "Statement": [{
            "Effect": "Deny",
            "Principal": "*",
            "Action": ["s3:*"],
            "Resource": ["arn:aws:s3:::my-bucket", "arn:aws:s3:::my-bucket/*"],
            "Condition": {"Bool": {"aws:SecureTransport": "false"}}
        }]
    }"#;

    fn facts_with_policy(policy: Option<&str>) -> BucketFacts {
        BucketFacts {
            name: "my-bucket".to_owned(),
            account_id: "123456789012".to_owned(),
            region: "eu-central-1".to_owned(),
            encryption_enabled: true,
            versioning_enabled: true,
            mfa_delete_enabled: false,
            public_access_block: BlockPublicAccess {
                block_public_acls: true,
                block_public_policy: false,
                ignore_public_acls: true,
                restrict_public_buckets: false,
            },
            policy: policy.map(str::to_owned),
        }
    }

    #[test]
    fn test_should_copy_scalar_facts_through() {
        let report = evaluate(facts_with_policy(None));
        assert_eq!(report.name, "my-bucket");
        assert_eq!(report.account_id, "123456789012");
        assert_eq!(report.region, "eu-central-1");
        assert!(report.server_side_encryption_enabled);
        assert!(report.versioning_enabled);
        assert!(!report.mfa_delete);
        assert!(report.block_public_access.block_public_acls);
        assert!(!report.block_public_access.block_public_policy);
        assert!(report.block_public_access.ignore_public_acls);
        assert!(!report.block_public_access.restrict_public_buckets);
    }

    #[test]
    fn test_should_report_false_when_no_policy_attached() {
        let report = evaluate(facts_with_policy(None));
        assert!(!report.policy_deny_http);
    }

    #[test]
    fn test_should_detect_deny_http_policy() {
        let report = evaluate(facts_with_policy(Some(DENY_HTTP_POLICY)));
        assert!(report.policy_deny_http);
    }

    #[test]
    fn test_should_degrade_unparseable_policy_to_false() {
        let report = evaluate(facts_with_policy(Some("{not valid json")));
        assert!(!report.policy_deny_http);
        // The remaining flags are still populated from their own inputs.
        assert!(report.server_side_encryption_enabled);
        assert!(report.versioning_enabled);
    }

    #[test]
    fn test_should_skip_malformed_statement_and_keep_evaluating() {
        let policy = r#"{
            "Version": "2012-10-17",
            "Statement": [
                {"Effect": "Deny", "Action": {"bad": "shape"}},
                {
                    "Effect": "Deny",
                    "Principal": "*",
                    "Action": ["s3:*"],
                    "Resource": ["arn:aws:s3:::my-bucket", "arn:aws:s3:::my-bucket/*"],
                    "Condition": {"Bool": {"aws:SecureTransport": "false"}}
                }
            ]
        }"#;
        let report = evaluate(facts_with_policy(Some(policy)));
        assert!(report.policy_deny_http);
    }

    #[test]
    fn test_should_report_false_for_empty_policy_document() {
        let report = evaluate(facts_with_policy(Some(r#"{"Version": "2012-10-17"}"#)));
        assert!(!report.policy_deny_http);
    }
}
