//! Benchmark session state.
//!
//! The view model behind the two-mode surface: which tab is active, what is
//! in flight, and the latest report per mode. The session is an explicit
//! context object owned by its driver; every mutation goes through the
//! begin/settle transitions below, which is what keeps at most one ingestion
//! and one search outstanding at a time. The two modes are independent and
//! may be in flight concurrently.

use crate::batch::UploadBatch;
use crate::error::Result;
use crate::ingest::IngestionReport;
use crate::search::{SearchQuery, SearchReport};

/// The two modes of the benchmark surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Document upload and ingestion timing.
    Ingest,
    /// Query latency and ranking comparison.
    #[default]
    Search,
}

/// Outcome of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    /// Accepted. The caller must now make exactly one orchestrator call and
    /// report its outcome through the matching settle transition.
    Started,
    /// Rejected: the same mode is already in flight. The submission is
    /// dropped, not queued.
    Busy,
    /// Rejected: nothing to submit (empty batch or blank query).
    Empty,
}

/// View state for one benchmark session.
///
/// Lives for the whole session; each submission is an independent cycle
/// from idle through pending and back.
#[derive(Debug, Default)]
pub struct Session {
    active_tab: Tab,
    ingest_in_flight: bool,
    search_in_flight: bool,
    last_ingestion: Option<IngestionReport>,
    last_search: Option<SearchReport>,
}

impl Session {
    /// Create a fresh session on the search tab with no reports.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently visible tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switch the visible tab. Pure state change; in-flight operations of
    /// either mode are unaffected.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Whether an ingestion run is outstanding.
    pub fn ingest_in_flight(&self) -> bool {
        self.ingest_in_flight
    }

    /// Whether a search run is outstanding.
    pub fn search_in_flight(&self) -> bool {
        self.search_in_flight
    }

    /// The most recent successful ingestion report, if any.
    pub fn last_ingestion(&self) -> Option<&IngestionReport> {
        self.last_ingestion.as_ref()
    }

    /// The most recent successful search report, if any.
    pub fn last_search(&self) -> Option<&SearchReport> {
        self.last_search.as_ref()
    }

    /// Try to start an ingestion run for the given batch.
    ///
    /// On [`Submit::Started`] the stale report is cleared and the mode is
    /// marked in flight. Any other outcome leaves the state untouched.
    pub fn begin_ingest(&mut self, batch: &UploadBatch) -> Submit {
        if self.ingest_in_flight {
            return Submit::Busy;
        }
        if batch.is_empty() {
            return Submit::Empty;
        }

        self.last_ingestion = None;
        self.ingest_in_flight = true;
        Submit::Started
    }

    /// Record the outcome of the in-flight ingestion run.
    ///
    /// The in-flight flag is cleared whatever happened. Only a successful
    /// report is stored; on failure the slot stays as `begin_ingest` left it
    /// and the error is handed back for a single user-visible notification.
    pub fn settle_ingest(
        &mut self,
        outcome: Result<Option<IngestionReport>>,
    ) -> Result<Option<&IngestionReport>> {
        self.ingest_in_flight = false;
        match outcome {
            Ok(Some(report)) => {
                self.last_ingestion = Some(report);
                Ok(self.last_ingestion.as_ref())
            }
            Ok(None) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Try to start a search run for the given query.
    ///
    /// Structurally identical to [`Session::begin_ingest`], tracked
    /// independently of it.
    pub fn begin_search(&mut self, query: &SearchQuery) -> Submit {
        if self.search_in_flight {
            return Submit::Busy;
        }
        if query.is_blank() {
            return Submit::Empty;
        }

        self.last_search = None;
        self.search_in_flight = true;
        Submit::Started
    }

    /// Record the outcome of the in-flight search run.
    pub fn settle_search(
        &mut self,
        outcome: Result<Option<SearchReport>>,
    ) -> Result<Option<&SearchReport>> {
        self.search_in_flight = false;
        match outcome {
            Ok(Some(report)) => {
                self.last_search = Some(report);
                Ok(self.last_search.as_ref())
            }
            Ok(None) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
