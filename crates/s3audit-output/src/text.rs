//! Human-readable per-bucket rendering.

use std::io;

use s3audit_model::BucketReport;

use crate::ReportPrinter;

/// Renders one block per bucket: the benchmark rule titles with a pass/fail
/// line per flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPrinter;

impl ReportPrinter for TextPrinter {
    fn print_report(&self, reports: &[BucketReport], w: &mut dyn io::Write) -> io::Result<()> {
        for report in reports {
            writeln!(w)?;
            writeln!(w, " {}", report.name)?;

            writeln!(w, "\tEnsure all S3 buckets employ encryption-at-rest [CIS 2.1.1]")?;
            check_line(
                w,
                report.server_side_encryption_enabled,
                "Server side encryption is enabled",
                "No server side encryption found",
            )?;

            writeln!(
                w,
                "\tEnsure S3 Bucket Policy is set to deny HTTP requests [CIS 2.1.2]"
            )?;
            check_line(
                w,
                report.policy_deny_http,
                "Bucket policy to deny HTTP requests is present",
                "No bucket policy to deny HTTP requests found",
            )?;

            writeln!(w, "\tS3 bucket versioning enabled (non-CIS)")?;
            check_line(
                w,
                report.versioning_enabled,
                "S3 bucket has versioning enabled",
                "Versioning is not enabled",
            )?;

            writeln!(
                w,
                "\tEnsure that S3 Buckets are configured with 'Block public access' [CIS 2.1.5]"
            )?;
            let bpa = &report.block_public_access;
            check_line(
                w,
                bpa.block_public_acls,
                "Block Public ACLs is enabled",
                "Block Public ACLs is disabled",
            )?;
            check_line(
                w,
                bpa.block_public_policy,
                "Block Public Policy is enabled",
                "Block Public Policy is disabled",
            )?;
            check_line(
                w,
                bpa.ignore_public_acls,
                "Ignore Public ACLs is enabled",
                "Ignore Public ACLs is disabled",
            )?;
            check_line(
                w,
                bpa.restrict_public_buckets,
                "Restrict Public Access is enabled",
                "Restrict Public Access is disabled",
            )?;
        }
        Ok(())
    }
}

/// Write one pass/fail line.
fn check_line(w: &mut dyn io::Write, ok: bool, pass: &str, fail: &str) -> io::Result<()> {
    if ok {
        writeln!(w, "\t\t\u{2714} {pass}")
    } else {
        writeln!(w, "\t\t\u{2716} {fail}")
    }
}
