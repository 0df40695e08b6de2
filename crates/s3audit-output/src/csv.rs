//! Flat delimited-row rendering.

use std::borrow::Cow;
use std::io;

use s3audit_model::BucketReport;

use crate::ReportPrinter;

/// Column headers, in stable order.
const HEADERS: [&str; 11] = [
    "Account Id",
    "Region",
    "Bucket Name",
    "Server Side Encryption",
    "Versioning enabled",
    "MFA delete",
    "Deny HTTP only",
    "Block Public ACLs",
    "Ignore Public ACLs",
    "Block Public Policy",
    "Restrict Public Buckets",
];

/// Renders reports as comma-separated rows under a fixed header line.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvPrinter;

impl ReportPrinter for CsvPrinter {
    fn print_report(&self, reports: &[BucketReport], w: &mut dyn io::Write) -> io::Result<()> {
        write_row(w, &HEADERS)?;
        for report in reports {
            let bpa = &report.block_public_access;
            write_row(
                w,
                &[
                    &report.account_id,
                    &report.region,
                    &report.name,
                    bool_field(report.server_side_encryption_enabled),
                    bool_field(report.versioning_enabled),
                    bool_field(report.mfa_delete),
                    bool_field(report.policy_deny_http),
                    bool_field(bpa.block_public_acls),
                    bool_field(bpa.ignore_public_acls),
                    bool_field(bpa.block_public_policy),
                    bool_field(bpa.restrict_public_buckets),
                ],
            )?;
        }
        Ok(())
    }
}

fn bool_field(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Quote a field only when it contains a delimiter, quote, or line break.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains(['"', ',', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_row(w: &mut dyn io::Write, fields: &[&str]) -> io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        w.write_all(escape(field).as_bytes())?;
    }
    w.write_all(b"\n")
}
