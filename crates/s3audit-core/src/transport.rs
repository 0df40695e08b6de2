//! Decision procedure for "the bucket policy denies plaintext transport".
//!
//! A bucket passes this rule when its policy carries a Deny statement that
//! simultaneously (1) fires whenever `aws:SecureTransport` is false, (2)
//! covers all S3 actions, (3) applies to every principal, and (4) names both
//! the bucket itself and its objects. All four checks must hold for the same
//! statement; partial matches across different statements do not combine.
//!
//! Matching is structural and exact: no glob expansion beyond the literal
//! trailing `/*` on the object ARN, no policy variables, no condition
//! operators other than `Bool` on `aws:SecureTransport`.

use s3audit_model::{Effect, PolicyDocument, Statement};
use serde_json::Value;

/// ARN of the bucket itself, in the `aws` partition.
fn bucket_arn(bucket: &str) -> String {
    format!("arn:aws:s3:::{bucket}")
}

/// Whether some Deny statement in `policy` denies all S3 actions for every
/// principal, on both the bucket and its objects, whenever the request does
/// not use secure transport.
///
/// The result is the logical OR over all Deny statements, evaluated as a
/// short-circuiting fold so statement order cannot matter.
#[must_use]
pub fn denies_insecure_transport(policy: &PolicyDocument, bucket: &str) -> bool {
    let arn = bucket_arn(bucket);
    policy
        .statements
        .iter()
        .filter(|statement| statement.effect == Effect::Deny)
        .any(|statement| {
            requires_secure_transport(statement)
                && covers_all_s3_actions(statement)
                && covers_every_principal(statement)
                && covers_bucket_and_objects(statement, &arn)
        })
}

/// Condition check: the statement carries
/// `Condition: {"Bool": {"aws:SecureTransport": "false"}}`.
///
/// The condition value is a boolean-as-string per the policy grammar; it
/// qualifies only when it parses as boolean `false`. An unrecognized value
/// disqualifies the statement rather than counting as false.
fn requires_secure_transport(statement: &Statement) -> bool {
    statement
        .condition
        .get("Bool")
        .and_then(Value::as_object)
        .and_then(|payload| payload.get("aws:SecureTransport"))
        .and_then(Value::as_str)
        .and_then(parse_policy_bool)
        == Some(false)
}

/// Parse the policy grammar's boolean-as-string spellings.
fn parse_policy_bool(s: &str) -> Option<bool> {
    match s {
        "true" | "True" | "TRUE" | "t" | "T" | "1" => Some(true),
        "false" | "False" | "FALSE" | "f" | "F" | "0" => Some(false),
        _ => None,
    }
}

/// Action check: the statement's actions include the literal `*` or `s3:*`
/// (exact, case-sensitive).
fn covers_all_s3_actions(statement: &Statement) -> bool {
    statement.action.contains("*") || statement.action.contains("s3:*")
}

/// Principal check: the raw principal is the bare string `*` (also accepting
/// the double- and single-quoted variants some serializers emit) or a map
/// containing `"AWS": "*"`. Any other shape fails.
fn covers_every_principal(statement: &Statement) -> bool {
    match &statement.principal {
        Some(Value::String(s)) => matches!(s.as_str(), "*" | "\"*\"" | "'*'"),
        Some(Value::Object(map)) => map.get("AWS").and_then(Value::as_str) == Some("*"),
        _ => false,
    }
}

/// Resource check: the statement names both the bucket ARN and `<arn>/*`.
/// One without the other leaves either bucket-level or object-level requests
/// uncovered and fails the check.
fn covers_bucket_and_objects(statement: &Statement, arn: &str) -> bool {
    let object_arn = format!("{arn}/*");
    statement.resource.contains(arn) && statement.resource.contains(&object_arn)
}
