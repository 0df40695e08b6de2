//! Output suppression.

use std::io;

use s3audit_model::BucketReport;
use tracing::debug;

use crate::ReportPrinter;

/// Swallows all output; useful when only the exit status or logs matter.
#[derive(Debug, Default, Clone, Copy)]
pub struct NooutPrinter;

impl ReportPrinter for NooutPrinter {
    fn print_report(&self, reports: &[BucketReport], _w: &mut dyn io::Write) -> io::Result<()> {
        debug!(reports = reports.len(), "omitting output because sink is set to noout");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_write_nothing() {
        let mut out = Vec::new();
        NooutPrinter.print_report(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
