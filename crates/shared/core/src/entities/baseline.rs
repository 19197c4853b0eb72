use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::instruments::InstrumentKey;
use crate::values::{Price, Timestamp};

/// Frozen reference for one instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineEntry {
    /// Price at capture time
    pub price: Price,
    /// History length at capture time
    pub history_len: usize,
}

/// Zero point for scoring, captured once per evaluation cycle
///
/// Entries are kept in key order, so iterating a baseline is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineSnapshot {
    pub captured_at: Timestamp,
    entries: BTreeMap<InstrumentKey, BaselineEntry>,
}

impl BaselineSnapshot {
    /// Create an empty baseline
    pub fn new(captured_at: Timestamp) -> Self {
        Self {
            captured_at,
            entries: BTreeMap::new(),
        }
    }

    /// Record an instrument's reference point (last write wins)
    pub fn insert(&mut self, key: InstrumentKey, price: Price, history_len: usize) {
        self.entries.insert(key, BaselineEntry { price, history_len });
    }

    pub fn get(&self, key: &InstrumentKey) -> Option<&BaselineEntry> {
        self.entries.get(key)
    }

    /// Baseline price for an instrument
    pub fn price(&self, key: &InstrumentKey) -> Option<Price> {
        self.entries.get(key).map(|e| e.price)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&InstrumentKey, &BaselineEntry)> {
        self.entries.iter()
    }
}
