//! Compliance evaluation engine for s3audit.
//!
//! The engine takes the raw configuration facts gathered for one bucket
//! ([`BucketFacts`]) and derives a deterministic [`BucketReport`]. It is a
//! pure, synchronous function of its input: no I/O, no shared state, no
//! ordering requirements. Callers may evaluate many buckets concurrently
//! without any synchronization, since no two invocations share data.
//!
//! Most report flags are pass-through booleans from already-structured
//! inputs; the one nontrivial derivation is whether the bucket's access
//! policy provably denies plaintext (HTTP) transport, implemented by
//! [`denies_insecure_transport`].
//!
//! [`BucketReport`]: s3audit_model::BucketReport

mod auditor;
mod facts;
mod transport;

pub use auditor::evaluate;
pub use facts::BucketFacts;
pub use transport::denies_insecure_transport;
