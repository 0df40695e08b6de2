//! Bucket-policy grammar types.
//!
//! An S3 bucket policy is a JSON document whose grammar is polymorphic in a
//! few awkward ways: several fields are written as either a single string or
//! an array of strings depending on the instance, the principal clause has at
//! least three distinct shapes, and condition payloads differ per operator.
//! The types here normalize the string-or-array ambiguity eagerly at the
//! parse boundary ([`PolicyValue`]) and keep the genuinely heterogeneous
//! sub-documents opaque until evaluation.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::error::{PolicyError, PolicyResult};

// ---------------------------------------------------------------------------
// PolicyValue
// ---------------------------------------------------------------------------

/// A policy field the upstream grammar writes as either a single string or an
/// array of strings, normalized to an ordered list.
///
/// A scalar source wraps to a one-element sequence; array elements that are
/// not strings are stringified rather than dropped. Any other top-level shape
/// (object, boolean, number) is a decode error for this field, which marks
/// the enclosing statement malformed without failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PolicyValue(Vec<String>);

impl PolicyValue {
    /// Whether the sequence contains `needle` as an exact entry.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.0.iter().any(|entry| entry == needle)
    }

    /// The normalized entries, in source order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for PolicyValue {
    fn from(entries: Vec<String>) -> Self {
        Self(entries)
    }
}

impl<'de> Deserialize<'de> for PolicyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        match raw {
            serde_json::Value::String(s) => Ok(Self(vec![s])),
            serde_json::Value::Array(items) => Ok(Self(
                items
                    .into_iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
            )),
            other => Err(D::Error::custom(format!(
                "expected a string or an array of strings, got {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Statement
// ---------------------------------------------------------------------------

/// Whether a statement grants or denies the actions it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// The statement grants access.
    Allow,
    /// The statement denies access.
    Deny,
}

/// One access-control rule inside a policy document.
///
/// `effect` and `action` are required; a statement missing either is
/// malformed and is dropped during document parsing rather than failing the
/// document. The principal sub-document and condition payloads keep their raw
/// JSON shape until evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    /// Optional statement identifier.
    #[serde(rename = "Sid", default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// Allow or Deny.
    #[serde(rename = "Effect")]
    pub effect: Effect,

    /// Raw principal sub-document. Its shape varies per instance (`"*"`, a
    /// quoted string, or a map from principal type to value), so it stays
    /// unparsed except for the shapes the evaluator recognizes.
    #[serde(rename = "Principal", default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<serde_json::Value>,

    /// Actions the statement covers.
    #[serde(rename = "Action")]
    pub action: PolicyValue,

    /// Resource ARNs the statement covers.
    #[serde(rename = "Resource", default)]
    pub resource: PolicyValue,

    /// Condition operators keyed by operator name (e.g. `Bool`). Operator
    /// payloads have heterogeneous shapes, so they stay opaque.
    #[serde(rename = "Condition", alias = "condition", default)]
    pub condition: BTreeMap<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// PolicyDocument
// ---------------------------------------------------------------------------

/// A parsed bucket policy: version, optional ID, and an ordered sequence of
/// statements.
///
/// Documents are parsed fresh from each bucket's raw policy text, never
/// mutated, and discarded after evaluation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PolicyDocument {
    /// Policy language version (e.g. `2012-10-17`).
    pub version: String,
    /// Optional policy identifier.
    pub id: Option<String>,
    /// Statements, in source order. Malformed statements are already dropped.
    pub statements: Vec<Statement>,
}

impl PolicyDocument {
    /// Parse a policy document from its raw JSON text.
    ///
    /// Statements that fail to decode (missing `Effect` or `Action`, or a
    /// field with an unrecognized shape) are skipped with a warning; the rest
    /// of the document still parses. Lowercase field spellings are accepted
    /// alongside the canonical ones, matching what the upstream grammar's
    /// serializers emit.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::MalformedDocument`] when the text itself is not
    /// well-formed JSON of the expected top-level shape.
    pub fn from_json(text: &str) -> PolicyResult<Self> {
        #[derive(Deserialize)]
        struct RawDocument {
            #[serde(rename = "Version", alias = "version", default)]
            version: String,
            #[serde(rename = "Id", alias = "ID", alias = "id", default)]
            id: Option<String>,
            #[serde(rename = "Statement", alias = "statement", default)]
            statements: Vec<serde_json::Value>,
        }

        let raw: RawDocument =
            serde_json::from_str(text).map_err(PolicyError::MalformedDocument)?;

        let statements = raw
            .statements
            .into_iter()
            .filter_map(|value| match Statement::from_value(value) {
                Ok(statement) => Some(statement),
                Err(e) => {
                    warn!(error = %e, "skipping malformed policy statement");
                    None
                }
            })
            .collect();

        Ok(Self {
            version: raw.version,
            id: raw.id,
            statements,
        })
    }
}

impl Statement {
    /// Decode one statement from its raw JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Decode`] when a required field is missing or a
    /// field does not match any recognized shape.
    pub fn from_value(value: serde_json::Value) -> PolicyResult<Self> {
        serde_json::from_value(value).map_err(PolicyError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_wrap_scalar_value_as_single_entry() {
        let value: PolicyValue = serde_json::from_str("\"s3:*\"").unwrap();
        assert_eq!(value.as_slice(), ["s3:*"]);
    }

    #[test]
    fn test_should_preserve_array_order() {
        let value: PolicyValue =
            serde_json::from_str("[\"s3:GetObject\",\"s3:PutObject\"]").unwrap();
        assert_eq!(value.as_slice(), ["s3:GetObject", "s3:PutObject"]);
    }

    #[test]
    fn test_should_stringify_non_string_array_elements() {
        let value: PolicyValue = serde_json::from_str("[\"s3:GetObject\", 42, true]").unwrap();
        assert_eq!(value.as_slice(), ["s3:GetObject", "42", "true"]);
    }

    #[test]
    fn test_should_reject_non_string_scalar_shapes() {
        assert!(serde_json::from_str::<PolicyValue>("42").is_err());
        assert!(serde_json::from_str::<PolicyValue>("true").is_err());
        assert!(serde_json::from_str::<PolicyValue>("{\"a\":1}").is_err());
    }

    #[test]
    fn test_should_parse_full_document() {
        let text = r#"{
            "Version": "2012-10-17",
            "Id": "deny-http",
            "Statement": [{
                "Sid": "DenyInsecure",
                "Effect": "Deny",
                "Principal": "*",
                "Action": "s3:*",
                "Resource": ["arn:aws:s3:::b", "arn:aws:s3:::b/*"],
                "Condition": {"Bool": {"aws:SecureTransport": "false"}}
            }]
        }"#;
        let doc = PolicyDocument::from_json(text).unwrap();
        assert_eq!(doc.version, "2012-10-17");
        assert_eq!(doc.id.as_deref(), Some("deny-http"));
        assert_eq!(doc.statements.len(), 1);

        let statement = &doc.statements[0];
        assert_eq!(statement.effect, Effect::Deny);
        assert_eq!(statement.sid.as_deref(), Some("DenyInsecure"));
        assert!(statement.action.contains("s3:*"));
        assert_eq!(statement.resource.len(), 2);
        assert!(statement.condition.contains_key("Bool"));
    }

    #[test]
    fn test_should_accept_lowercase_statement_key() {
        let text = r#"{
            "Version": "2012-10-17",
            "statement": [{"Effect": "Allow", "Action": "s3:GetObject"}]
        }"#;
        let doc = PolicyDocument::from_json(text).unwrap();
        assert_eq!(doc.statements.len(), 1);
        assert_eq!(doc.statements[0].effect, Effect::Allow);
    }

    #[test]
    fn test_should_skip_statement_missing_effect() {
        let text = r#"{
            "Statement": [
                {"Action": "s3:*"},
                {"Effect": "Deny", "Action": "s3:*"}
            ]
        }"#;
        let doc = PolicyDocument::from_json(text).unwrap();
        assert_eq!(doc.statements.len(), 1);
        assert_eq!(doc.statements[0].effect, Effect::Deny);
    }

    #[test]
    fn test_should_skip_statement_missing_action() {
        let text = r#"{"Statement": [{"Effect": "Deny"}]}"#;
        let doc = PolicyDocument::from_json(text).unwrap();
        assert!(doc.statements.is_empty());
    }

    #[test]
    fn test_should_skip_statement_with_bad_action_shape() {
        let text = r#"{
            "Statement": [
                {"Effect": "Deny", "Action": {"nested": "object"}},
                {"Effect": "Deny", "Action": "*"}
            ]
        }"#;
        let doc = PolicyDocument::from_json(text).unwrap();
        assert_eq!(doc.statements.len(), 1);
        assert!(doc.statements[0].action.contains("*"));
    }

    #[test]
    fn test_should_report_malformed_document() {
        let err = PolicyDocument::from_json("not json at all").unwrap_err();
        assert!(matches!(err, PolicyError::MalformedDocument(_)));
    }

    #[test]
    fn test_should_keep_principal_sub_document_raw() {
        let text = r#"{
            "Statement": [{
                "Effect": "Deny",
                "Action": "*",
                "Principal": {"AWS": "*", "Service": "cloudtrail.amazonaws.com"}
            }]
        }"#;
        let doc = PolicyDocument::from_json(text).unwrap();
        let principal = doc.statements[0].principal.as_ref().unwrap();
        assert_eq!(principal["AWS"], "*");
        assert_eq!(principal["Service"], "cloudtrail.amazonaws.com");
    }
}
