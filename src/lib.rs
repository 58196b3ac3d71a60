//! Hybrid Bench - a side-by-side benchmark harness for hybrid search backends.
//!
//! The harness drives one combined benchmark endpoint that fans out to two
//! independent systems server-side: Qdrant (vector similarity) and
//! Elasticsearch (full-text/hybrid). Documents are uploaded once and ingested
//! into both; identical queries are then issued against both, and the
//! per-backend timings and ranked results come back in a single response for
//! side-by-side comparison.
//!
//! # Quick Start
//!
//! ```no_run
//! use hybrid_bench::{
//!     api::ApiClient,
//!     batch::UploadBatch,
//!     config::Config,
//!     ingest::Ingestor,
//!     search::{SearchQuery, Searcher},
//! };
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let config = Config::load()?;
//!     config.validate()?;
//!
//!     let client = ApiClient::new(config.api);
//!
//!     // Ingest a batch of documents into both backends
//!     let batch = UploadBatch::from_paths(&[PathBuf::from("docs/")])?;
//!     let ingestor = Ingestor::new(client.clone());
//!     if let Some(report) = ingestor.ingest(batch).await? {
//!         println!("{} chunks created", report.chunks);
//!     }
//!
//!     // Query both backends and compare
//!     let searcher = Searcher::new(client);
//!     let query = SearchQuery::new("refund policy", config.search.limit);
//!     if let Some(report) = searcher.search(&query).await? {
//!         println!(
//!             "Qdrant {:.2} ms vs Elastic {:.2} ms",
//!             report.qdrant_time_ms, report.elastic_time_ms
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **ApiClient**: one HTTP request per operation against the combined endpoint
//! - **UploadBatch**: ordered, transient set of files for one ingestion run
//! - **Ingestor**: ingestion orchestration and write-time comparison
//! - **Searcher**: query orchestration and ranked-result comparison
//! - **Session**: the two-tab view state machine with per-mode in-flight flags

pub mod api;
pub mod batch;
pub mod config;
pub mod error;
pub mod ingest;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use api::ApiClient;
pub use batch::{FilePart, UploadBatch};
pub use config::Config;
pub use error::{BenchError, Result};
pub use ingest::{IngestionReport, Ingestor};
pub use search::{Backend, RankedHit, SearchQuery, SearchReport, Searcher};
pub use session::{Session, Submit, Tab};
