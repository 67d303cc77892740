//! Testing utilities for the story dashboard.
//!
//! This module provides tools for integration testing:
//! - `RecordingNavigator` for observing dispatches without a real host
//! - `DispatchHarness` for catalog plus dispatcher scenarios
//! - Assertion helpers for verifying navigation traffic

use crate::catalog::{sample_records, Catalog, StoryRecord};
use crate::dispatch::{DispatchError, Dispatcher, Navigator};

/// A [`Navigator`] that records every requested path instead of navigating.
///
/// Use this for deterministic tests without a terminal.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    /// Paths requested so far, in order.
    paths: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path requested so far, oldest first.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// How many navigation requests have been seen.
    pub fn call_count(&self) -> usize {
        self.paths.len()
    }

    /// The most recent requested path.
    pub fn last_path(&self) -> Option<&str> {
        self.paths.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }
}

/// A catalog wired to a dispatcher with a [`RecordingNavigator`].
pub struct DispatchHarness {
    pub catalog: Catalog,
    pub dispatcher: Dispatcher<RecordingNavigator>,
}

impl DispatchHarness {
    /// Harness over the six-record sample catalog.
    pub fn sample() -> Self {
        Self::with_records(sample_records())
    }

    /// Harness over caller-supplied records. Panics if they fail validation;
    /// invalid-catalog behavior is tested against [`Catalog::new`] directly.
    pub fn with_records(records: Vec<StoryRecord>) -> Self {
        let catalog = Catalog::new(records).expect("harness records must be valid");
        Self {
            catalog,
            dispatcher: Dispatcher::new(RecordingNavigator::new()),
        }
    }

    /// Dispatch the record at `index` (zero-based, catalog order).
    pub fn open(&mut self, index: usize) -> Result<(), DispatchError> {
        let record = &self.catalog.records()[index];
        self.dispatcher.dispatch(&self.catalog, record)
    }

    /// Dispatch a record that may or may not belong to the catalog.
    pub fn open_record(&mut self, record: &StoryRecord) -> Result<(), DispatchError> {
        self.dispatcher.dispatch(&self.catalog, record)
    }

    /// Paths the navigator has been asked for, in order.
    pub fn paths(&self) -> &[String] {
        self.dispatcher.navigator().paths()
    }
}

impl Default for DispatchHarness {
    fn default() -> Self {
        Self::sample()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the harness navigated to exactly `expected`, in order.
#[track_caller]
pub fn assert_navigations(harness: &DispatchHarness, expected: &[&str]) {
    let actual: Vec<&str> = harness.paths().iter().map(String::as_str).collect();
    assert_eq!(
        actual, expected,
        "Expected navigations {expected:?}, got {actual:?}"
    );
}

/// Assert no navigation has happened.
#[track_caller]
pub fn assert_no_navigation(harness: &DispatchHarness) {
    assert!(
        harness.paths().is_empty(),
        "Expected no navigation, got {:?}",
        harness.paths()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_opens_by_index() {
        let mut harness = DispatchHarness::sample();

        harness.open(0).unwrap();
        harness.open(3).unwrap();

        assert_navigations(&harness, &["/golconda", "/charminar"]);
    }

    #[test]
    fn test_harness_starts_with_no_traffic() {
        let harness = DispatchHarness::sample();
        assert_no_navigation(&harness);
        assert_eq!(harness.dispatcher.navigator().last_path(), None);
    }

    #[test]
    fn test_harness_rejects_foreign_record() {
        let mut harness = DispatchHarness::sample();
        let stranger = StoryRecord::new("Ghost", "not listed", "ghost", "👻", "Mystery");

        assert!(harness.open_record(&stranger).is_err());
        assert_no_navigation(&harness);
    }

    #[test]
    fn test_harness_with_custom_records() {
        let mut harness = DispatchHarness::with_records(vec![
            StoryRecord::new("Solo", "only one", "solo", "🎈", "Test"),
        ]);

        harness.open(0).unwrap();

        assert_navigations(&harness, &["/solo"]);
    }
}
