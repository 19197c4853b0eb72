use serde::{Deserialize, Serialize};

use super::{InstrumentKey, InstrumentState};
use crate::values::Timestamp;

/// Owned, point-in-time copy of the whole feed
///
/// Instruments are kept in the feed's listing order (registration order).
/// Nothing in here refers back to the live feed, so a snapshot taken at
/// selection time stays valid no matter how the feed moves afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub taken_at: Timestamp,
    pub instruments: Vec<InstrumentState>,
}

impl FeedSnapshot {
    pub fn new(taken_at: Timestamp, instruments: Vec<InstrumentState>) -> Self {
        Self {
            taken_at,
            instruments,
        }
    }

    /// Look up an instrument by key
    pub fn get(&self, key: &InstrumentKey) -> Option<&InstrumentState> {
        self.instruments.iter().find(|i| &i.key == key)
    }

    pub fn contains(&self, key: &InstrumentKey) -> bool {
        self.get(key).is_some()
    }

    /// First listed instrument, if any
    pub fn first_key(&self) -> Option<&InstrumentKey> {
        self.instruments.first().map(|i| &i.key)
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstrumentState> {
        self.instruments.iter()
    }
}
