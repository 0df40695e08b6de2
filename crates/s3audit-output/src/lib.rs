//! Report rendering for s3audit.
//!
//! The audit engine hands over plain [`BucketReport`] values; this crate
//! turns them into bytes. [`ReportPrinter`] is the seam between the two:
//! each implementation renders the full report list to any [`io::Write`],
//! so callers pick the sink and the destination independently.

mod csv;
mod json;
mod noout;
mod text;

use std::io;

use s3audit_model::BucketReport;

pub use csv::CsvPrinter;
pub use json::JsonPrinter;
pub use noout::NooutPrinter;
pub use text::TextPrinter;

/// A sink that knows how to render bucket compliance reports.
pub trait ReportPrinter {
    /// Format the reports and write them to `w`.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn print_report(&self, reports: &[BucketReport], w: &mut dyn io::Write) -> io::Result<()>;
}
