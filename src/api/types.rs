//! Wire-level request/response shapes for the benchmark API.
//!
//! These mirror the endpoint's JSON bodies field for field and are not part
//! of the public API. Both backends' results arrive in one response, already
//! tagged by backend identity through the field they live in.

use serde::{Deserialize, Serialize};

/// Request body for `POST /search`.
#[derive(Debug, Serialize)]
pub(crate) struct SearchRequestWire {
    pub query: String,
    pub limit: usize,
}

/// Response body for `POST /ingest`.
#[derive(Debug, Deserialize)]
pub(crate) struct IngestWire {
    /// Human-readable status line; wire-only.
    #[serde(default)]
    #[allow(dead_code)]
    pub message: Option<String>,
    pub chunks: usize,
    pub qdrant_time_ms: f64,
    pub elastic_time_ms: f64,
}

/// A single ranked hit as returned by either backend.
#[derive(Debug, Deserialize)]
pub(crate) struct HitWire {
    pub score: f64,
    pub text: String,
    pub source: String,
}

/// Response body for `POST /search`.
///
/// List order is each backend's own relevance ranking.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchWire {
    pub qdrant_time_ms: f64,
    pub elastic_time_ms: f64,
    pub qdrant_results: Vec<HitWire>,
    pub elastic_results: Vec<HitWire>,
}

/// Response body for `GET /health`.
#[derive(Debug, Deserialize)]
pub(crate) struct HealthWire {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_wire_decode() {
        let body = r#"{"message": "Done", "chunks": 42, "qdrant_time_ms": 12.5, "elastic_time_ms": 30.1}"#;
        let wire: IngestWire = serde_json::from_str(body).unwrap();
        assert_eq!(wire.chunks, 42);
        assert_eq!(wire.qdrant_time_ms, 12.5);
        assert_eq!(wire.elastic_time_ms, 30.1);
    }

    #[test]
    fn test_ingest_wire_decode_without_message() {
        let body = r#"{"chunks": 0, "qdrant_time_ms": 0.0, "elastic_time_ms": 0.0}"#;
        let wire: IngestWire = serde_json::from_str(body).unwrap();
        assert_eq!(wire.chunks, 0);
    }

    #[test]
    fn test_search_wire_decode_preserves_order() {
        let body = r#"{
            "qdrant_time_ms": 4.2,
            "elastic_time_ms": 9.9,
            "qdrant_results": [
                {"score": 0.91, "text": "first", "source": "a.txt"},
                {"score": 0.55, "text": "second", "source": "b.txt"}
            ],
            "elastic_results": []
        }"#;
        let wire: SearchWire = serde_json::from_str(body).unwrap();
        assert_eq!(wire.qdrant_results.len(), 2);
        assert_eq!(wire.qdrant_results[0].text, "first");
        assert_eq!(wire.qdrant_results[1].text, "second");
        assert!(wire.elastic_results.is_empty());
    }

    #[test]
    fn test_search_request_encode() {
        let request = SearchRequestWire {
            query: "refund policy".to_string(),
            limit: 5,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["query"], "refund policy");
        assert_eq!(json["limit"], 5);
    }
}
