//! AWS fact gathering for s3audit.
//!
//! This crate is the I/O collaborator of the audit engine: it enumerates
//! buckets and fetches each bucket's raw configuration (versioning,
//! encryption, public access block, policy text) over the S3 API, plus the
//! caller's account ID over STS, and hands the results to `s3audit-core` as
//! plain [`BucketFacts`] values.
//!
//! Fetching is deliberately forgiving: a bucket the caller cannot fully
//! inspect still gets a report, with each unreadable fact degraded to its
//! false/absent default and the service error code logged at debug level.
//! Only bucket enumeration and caller-identity failures are hard errors,
//! since nothing can be audited without them.
//!
//! [`BucketFacts`]: s3audit_core::BucketFacts

mod client;
mod error;
mod facts;

pub use client::{AwsAuditor, BucketSummary};
pub use error::{BoxError, FetchError};
