//! Data model for s3audit: the bucket-policy grammar and the compliance report.
//!
//! This crate defines the canonical in-memory shapes the audit engine works
//! with: [`PolicyDocument`] and its statements as parsed from a bucket's raw
//! policy text, and [`BucketReport`], the immutable per-bucket verdict handed
//! to whichever output sink the caller chooses. Everything here is plain data;
//! no I/O happens in this crate.

mod error;
mod policy;
mod report;

pub use error::{PolicyError, PolicyResult};
pub use policy::{Effect, PolicyDocument, PolicyValue, Statement};
pub use report::{BlockPublicAccess, BucketReport};
