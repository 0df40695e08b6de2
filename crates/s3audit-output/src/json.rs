//! Structured JSON rendering.

use std::io;

use s3audit_model::BucketReport;

use crate::ReportPrinter;

/// Renders the report list as a pretty-printed JSON array.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonPrinter;

impl ReportPrinter for JsonPrinter {
    fn print_report(&self, reports: &[BucketReport], w: &mut dyn io::Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *w, reports)?;
        writeln!(w)
    }
}

#[cfg(test)]
mod tests {
    use s3audit_model::BlockPublicAccess;

    use super::*;

    #[test]
    fn test_should_render_parseable_json_array() {
        let reports = vec![
            BucketReport {
                name: "a".to_owned(),
                account_id: "123456789012".to_owned(),
                region: "us-east-1".to_owned(),
                server_side_encryption_enabled: true,
                versioning_enabled: false,
                mfa_delete: false,
                policy_deny_http: true,
                block_public_access: BlockPublicAccess::default(),
            },
            BucketReport {
                name: "b".to_owned(),
                account_id: "123456789012".to_owned(),
                region: "us-east-1".to_owned(),
                server_side_encryption_enabled: false,
                versioning_enabled: true,
                mfa_delete: false,
                policy_deny_http: false,
                block_public_access: BlockPublicAccess::default(),
            },
        ];

        let mut out = Vec::new();
        JsonPrinter.print_report(&reports, &mut out).unwrap();

        let parsed: Vec<BucketReport> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, reports);
    }

    #[test]
    fn test_should_render_empty_report_list_as_empty_array() {
        let mut out = Vec::new();
        JsonPrinter.print_report(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
