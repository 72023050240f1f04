//! Persistence reconciler
//!
//! Writes the state through to every configured backend and, on load, reads
//! them all before merging by priority. Storage failures never reach the
//! caller; they are logged and reported in a [`PersistReport`].

use chrono::{DateTime, Utc};

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;
use crate::export::ImportedState;
use crate::models::TrackerState;
use crate::storage::{BackendRole, BackendSnapshot, SnapshotStore, StorageBackend, StorageLayout};

/// Name the snapshot is reported under
pub const SNAPSHOT_NAME: &str = "snapshot";

/// Outcome of writing to (or clearing) one backend
#[derive(Debug, Clone, PartialEq)]
pub struct BackendOutcome {
    pub backend: String,
    pub error: Option<String>,
}

impl BackendOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-backend results of a write-through
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistReport {
    pub outcomes: Vec<BackendOutcome>,
}

impl PersistReport {
    fn record(&mut self, backend: &str, result: TrackerResult<()>) {
        let error = match result {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(backend, error = %e, "storage backend write failed");
                Some(e.to_string())
            }
        };
        self.outcomes.push(BackendOutcome {
            backend: backend.to_string(),
            error,
        });
    }

    /// True when every backend took the write
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(BackendOutcome::succeeded)
    }

    /// Backends that failed
    pub fn failures(&self) -> impl Iterator<Item = &BackendOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

/// Ranked storage backends plus the optional snapshot
pub struct PersistenceReconciler {
    backends: Vec<Box<dyn StorageBackend>>,
    snapshot: Option<SnapshotStore>,
}

impl PersistenceReconciler {
    /// Create a reconciler over `backends`, in priority order
    pub fn new(backends: Vec<Box<dyn StorageBackend>>, snapshot: Option<SnapshotStore>) -> Self {
        Self { backends, snapshot }
    }

    /// Build the file-backed reconciler for a data directory
    pub fn from_settings(paths: &TrackerPaths, settings: &Settings) -> TrackerResult<Self> {
        let layout = StorageLayout::for_paths(paths, settings)?;
        Ok(Self::new(layout.backends, layout.snapshot))
    }

    /// Names of the configured backends, in priority order
    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Write `state` to every backend and refresh the snapshot
    ///
    /// Each write is attempted regardless of earlier failures.
    pub fn persist(&self, state: &TrackerState, taken_at: DateTime<Utc>) -> PersistReport {
        let mut report = PersistReport::default();

        for backend in &self.backends {
            report.record(backend.name(), backend.save(state));
        }
        if let Some(snapshot) = &self.snapshot {
            report.record(SNAPSHOT_NAME, snapshot.write(state, taken_at));
        }

        tracing::debug!(
            records = state.expenses.len(),
            failed = report.failures().count(),
            "write-through finished"
        );
        report
    }

    /// Read every backend and merge what they hold
    ///
    /// A backend that fails to load is skipped. With nothing readable the
    /// result is an empty state.
    pub fn load(&self) -> TrackerState {
        let loaded: Vec<(BackendRole, Option<BackendSnapshot>)> = self
            .backends
            .iter()
            .map(|backend| match backend.load() {
                Ok(snapshot) => (backend.role(), Some(snapshot)),
                Err(e) => {
                    tracing::warn!(
                        backend = backend.name(),
                        error = %e,
                        "skipping unreadable backend"
                    );
                    (backend.role(), None)
                }
            })
            .collect();

        reconcile(&loaded)
    }

    /// Decode the stored snapshot, if any
    pub fn read_snapshot(&self) -> TrackerResult<Option<ImportedState>> {
        match &self.snapshot {
            Some(snapshot) => snapshot.read(),
            None => Ok(None),
        }
    }

    /// Clear every backend and remove the snapshot
    pub fn clear_all(&self) -> PersistReport {
        let mut report = PersistReport::default();
        for backend in &self.backends {
            report.record(backend.name(), backend.clear());
        }
        if let Some(snapshot) = &self.snapshot {
            report.record(SNAPSHOT_NAME, snapshot.remove());
        }
        report
    }
}

/// Merge loaded backend contents by priority
///
/// Primary and fallback backends are consulted per field: the first one
/// (primaries before fallbacks, then in list order) holding a field supplies
/// it. Backfill backends only fill in records when the merged list is empty,
/// and the budget when the merged budget is 0. `None` entries are backends
/// that could not be read.
pub fn reconcile(loaded: &[(BackendRole, Option<BackendSnapshot>)]) -> TrackerState {
    let ranked = move |role: BackendRole| {
        loaded
            .iter()
            .filter(move |(r, _)| *r == role)
            .filter_map(|(_, snapshot)| snapshot.as_ref())
    };

    let mut expenses = None;
    let mut budget = None;
    for snapshot in ranked(BackendRole::Primary).chain(ranked(BackendRole::Fallback)) {
        if expenses.is_none() {
            expenses = snapshot.expenses.clone();
        }
        if budget.is_none() {
            budget = snapshot.budget;
        }
    }

    let mut expenses = expenses.unwrap_or_default();
    let mut budget = budget.unwrap_or(0.0);

    for snapshot in ranked(BackendRole::Backfill) {
        if expenses.is_empty() {
            if let Some(records) = snapshot.expenses.as_ref().filter(|r| !r.is_empty()) {
                tracing::debug!(count = records.len(), "backfilling records");
                expenses = records.clone();
            }
        }
        if budget == 0.0 {
            if let Some(stored) = snapshot.budget {
                budget = stored;
            }
        }
    }

    TrackerState::new(expenses, budget)
}
