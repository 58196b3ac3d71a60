//! Benchmark API integration module.
//!
//! Provides the HTTP client for the combined ingestion/search endpoint and
//! the wire-level request/response shapes it speaks. Wire shapes stay inside
//! the crate; the orchestrators normalize them before anything else sees them.

mod client;
mod types;

pub use client::ApiClient;
pub(crate) use types::{HitWire, IngestWire, SearchRequestWire, SearchWire};
