//! Thread-safe accumulator of pricing outcomes.
//!
//! Values and errors live in two tables behind a single mutex, so every
//! mutation is serialised at one point and no write can be lost. Both tables
//! are ordered maps, which makes enumeration order a pure function of the
//! stored content: trade ids holding a value come first in ascending id order,
//! followed by error-only trade ids in ascending id order.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::ScalarResult;
use crate::traits::ResultSink;

#[derive(Debug, Default)]
struct ResultTables {
    values: BTreeMap<String, f64>,
    errors: BTreeMap<String, String>,
}

impl ResultTables {
    fn merged(&self, trade_id: &str) -> Option<ScalarResult> {
        let value = self.values.get(trade_id).copied();
        let error = self.errors.get(trade_id).cloned();
        if value.is_none() && error.is_none() {
            return None;
        }
        Some(ScalarResult::new(trade_id, value, error))
    }

    fn trade_ids(&self) -> Vec<String> {
        let error_only = self
            .errors
            .keys()
            .filter(|id| !self.values.contains_key(id.as_str()));
        self.values.keys().chain(error_only).cloned().collect()
    }
}

/// Collection of per-trade values and errors for one pricing run.
///
/// # Examples
///
/// ```
/// use pricer_core::results::ScalarResults;
/// use pricer_core::traits::ResultSink;
///
/// let results = ScalarResults::new();
/// results.add_value("T1", 100.0);
/// results.add_error("T1", "late");
///
/// let entry = results.lookup("T1").unwrap();
/// assert_eq!(entry.value, Some(100.0));
/// assert_eq!(entry.error.as_deref(), Some("late"));
/// ```
#[derive(Debug, Default)]
pub struct ScalarResults {
    tables: Mutex<ResultTables>,
}

impl ScalarResults {
    /// Creates an empty result collection.
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking writer cannot leave a half-updated map behind: each write
    // is a single insert, so a poisoned lock still guards consistent tables.
    fn tables(&self) -> MutexGuard<'_, ResultTables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the merged value/error view for `trade_id`, or `None` if the
    /// trade was never written.
    pub fn lookup(&self, trade_id: &str) -> Option<ScalarResult> {
        self.tables().merged(trade_id)
    }

    /// Returns true if a value or an error was recorded for `trade_id`.
    pub fn contains_trade(&self, trade_id: &str) -> bool {
        let tables = self.tables();
        tables.values.contains_key(trade_id) || tables.errors.contains_key(trade_id)
    }

    /// Number of distinct trades with a value and/or an error.
    pub fn len(&self) -> usize {
        let tables = self.tables();
        tables.values.len()
            + tables
                .errors
                .keys()
                .filter(|id| !tables.values.contains_key(id.as_str()))
                .count()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        let tables = self.tables();
        tables.values.is_empty() && tables.errors.is_empty()
    }

    /// Distinct trade ids in enumeration order.
    pub fn trade_ids(&self) -> Vec<String> {
        self.tables().trade_ids()
    }

    /// Iterates over one merged result per distinct trade id.
    ///
    /// The set of ids is captured when the iterator is created; each result
    /// is read from the live tables as the iterator advances. Calling
    /// `entries` again (or cloning the iterator) restarts the enumeration.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            results: self,
            ids: self.trade_ids(),
            position: 0,
        }
    }
}

impl ResultSink for ScalarResults {
    fn add_value(&self, trade_id: &str, value: f64) {
        self.tables().values.insert(trade_id.to_string(), value);
    }

    fn add_error(&self, trade_id: &str, message: &str) {
        self.tables()
            .errors
            .insert(trade_id.to_string(), message.to_string());
    }
}

impl<'a> IntoIterator for &'a ScalarResults {
    type Item = ScalarResult;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Iterator over the merged results of a [`ScalarResults`].
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    results: &'a ScalarResults,
    ids: Vec<String>,
    position: usize,
}

impl Iterator for Entries<'_> {
    type Item = ScalarResult;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.ids.get(self.position) {
            self.position += 1;
            if let Some(result) = self.results.lookup(id) {
                return Some(result);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.ids.len() - self.position))
    }
}
