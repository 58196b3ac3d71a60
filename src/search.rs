//! Search benchmark orchestration.
//!
//! Submits one query to the combined endpoint and normalizes both backends'
//! raw result lists into a single comparable report. Backend identity is the
//! [`Backend`] discriminant; nothing backend-specific leaks past this module.

use crate::api::{ApiClient, HitWire, SearchRequestWire, SearchWire};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Identity of one of the two compared backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Vector-similarity store.
    Qdrant,
    /// Full-text/hybrid search engine.
    Elastic,
}

impl Backend {
    /// Both backends, in display order.
    pub const ALL: [Backend; 2] = [Backend::Qdrant, Backend::Elastic];

    /// Display label for report headers.
    pub fn label(&self) -> &'static str {
        match self {
            Backend::Qdrant => "Qdrant",
            Backend::Elastic => "Elasticsearch",
        }
    }
}

/// One search submission.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Query text.
    pub query: String,
    /// Number of results requested per backend.
    pub limit: usize,
}

impl SearchQuery {
    /// Create a new query.
    pub fn new(query: impl Into<String>, limit: usize) -> Self {
        Self {
            query: query.into(),
            limit,
        }
    }

    /// Whether the query text is blank after trimming.
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }
}

/// A single ranked result, normalized across backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHit {
    /// Source document identifier (the uploaded file name).
    pub source: String,
    /// Matched excerpt.
    pub text: String,
    /// Backend-defined relevance score; magnitudes are not comparable
    /// across backends.
    pub score: f64,
}

/// Outcome of one search run against both backends.
///
/// Each result list is in the owning backend's relevance order and must be
/// rendered as received; the lists are never re-sorted, merged, or
/// interleaved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Qdrant query latency in milliseconds, measured server-side.
    pub qdrant_time_ms: f64,
    /// Elasticsearch query latency in milliseconds, measured server-side.
    pub elastic_time_ms: f64,
    /// Qdrant hits, best first.
    pub qdrant_results: Vec<RankedHit>,
    /// Elasticsearch hits, best first.
    pub elastic_results: Vec<RankedHit>,
}

impl SearchReport {
    /// Hits for one backend, in that backend's relevance order.
    pub fn results(&self, backend: Backend) -> &[RankedHit] {
        match backend {
            Backend::Qdrant => &self.qdrant_results,
            Backend::Elastic => &self.elastic_results,
        }
    }

    /// Server-reported query latency for one backend.
    pub fn time_ms(&self, backend: Backend) -> f64 {
        match backend {
            Backend::Qdrant => self.qdrant_time_ms,
            Backend::Elastic => self.elastic_time_ms,
        }
    }

    fn from_wire(wire: SearchWire) -> Self {
        Self {
            qdrant_time_ms: wire.qdrant_time_ms,
            elastic_time_ms: wire.elastic_time_ms,
            qdrant_results: normalize(wire.qdrant_results),
            elastic_results: normalize(wire.elastic_results),
        }
    }
}

/// Normalize one backend's raw hit list, keeping its order.
fn normalize(hits: Vec<HitWire>) -> Vec<RankedHit> {
    hits.into_iter()
        .map(|h| RankedHit {
            source: h.source,
            text: h.text,
            score: h.score,
        })
        .collect()
}

/// Drives the query side of the benchmark.
#[derive(Clone)]
pub struct Searcher {
    client: ApiClient,
}

impl Searcher {
    /// Create a new searcher.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Run one search benchmark.
    ///
    /// A blank query is a no-op: `Ok(None)` without touching the network.
    /// The response is atomic (both backends' data or an error); an empty
    /// result list for either backend is a valid outcome, not a failure.
    pub async fn search(&self, query: &SearchQuery) -> Result<Option<SearchReport>> {
        if query.is_blank() {
            return Ok(None);
        }

        let request = SearchRequestWire {
            query: query.query.clone(),
            limit: query.limit,
        };

        let wire = self.client.post_search(&request).await?;
        let report = SearchReport::from_wire(wire);

        info!(
            qdrant_hits = report.qdrant_results.len(),
            elastic_hits = report.elastic_results.len(),
            "search complete"
        );

        Ok(Some(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn hit(source: &str, score: f64) -> HitWire {
        HitWire {
            score,
            text: format!("excerpt from {}", source),
            source: source.to_string(),
        }
    }

    fn unroutable_searcher() -> Searcher {
        let config = Config::with_base_url("http://127.0.0.1:9");
        Searcher::new(ApiClient::new(config.api))
    }

    #[test]
    fn test_normalization_preserves_backend_order() {
        let wire = SearchWire {
            qdrant_time_ms: 12.5,
            elastic_time_ms: 30.1,
            qdrant_results: vec![hit("a.txt", 0.9), hit("b.txt", 0.7), hit("c.txt", 0.4)],
            elastic_results: vec![hit("c.txt", 11.2), hit("a.txt", 8.6), hit("b.txt", 2.0)],
        };

        let report = SearchReport::from_wire(wire);

        let qdrant: Vec<_> = report
            .results(Backend::Qdrant)
            .iter()
            .map(|h| h.source.as_str())
            .collect();
        let elastic: Vec<_> = report
            .results(Backend::Elastic)
            .iter()
            .map(|h| h.source.as_str())
            .collect();

        assert_eq!(qdrant, ["a.txt", "b.txt", "c.txt"]);
        assert_eq!(elastic, ["c.txt", "a.txt", "b.txt"]);
        assert_eq!(report.time_ms(Backend::Qdrant), 12.5);
        assert_eq!(report.time_ms(Backend::Elastic), 30.1);
    }

    #[test]
    fn test_empty_result_list_is_valid() {
        let wire = SearchWire {
            qdrant_time_ms: 1.0,
            elastic_time_ms: 2.0,
            qdrant_results: vec![],
            elastic_results: vec![hit("a.txt", 3.3), hit("b.txt", 1.1)],
        };

        let report = SearchReport::from_wire(wire);
        assert!(report.results(Backend::Qdrant).is_empty());
        assert_eq!(report.results(Backend::Elastic).len(), 2);
        assert_eq!(report.results(Backend::Elastic)[0].source, "a.txt");
    }

    #[test]
    fn test_blank_query_detection() {
        assert!(SearchQuery::new("", 5).is_blank());
        assert!(SearchQuery::new("   ", 5).is_blank());
        assert!(!SearchQuery::new("refund policy", 5).is_blank());
    }

    #[tokio::test]
    async fn test_blank_query_is_a_noop() {
        // Unroutable origin: an attempted request would fail, not return Ok.
        let searcher = unroutable_searcher();
        let report = searcher.search(&SearchQuery::new("  ", 5)).await.unwrap();
        assert!(report.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_surfaces_failure() {
        let searcher = unroutable_searcher();
        let result = searcher.search(&SearchQuery::new("refund policy", 5)).await;
        assert!(result.is_err());
    }
}
