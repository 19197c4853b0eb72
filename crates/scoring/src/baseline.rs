//! Baseline capture

use foresight_core::{BaselineSnapshot, FeedSnapshot};

/// Freeze the price and history length of every instrument in `snapshot`
pub fn capture_baseline(snapshot: &FeedSnapshot) -> BaselineSnapshot {
    let mut baseline = BaselineSnapshot::new(snapshot.taken_at);
    for inst in snapshot.iter() {
        baseline.insert(inst.key.clone(), inst.price, inst.ticks());
    }
    baseline
}

/// Holds at most one baseline per evaluation cycle
///
/// Capturing while a baseline is held is a no-op: a later snapshot must
/// never replace the reference the player committed against.
#[derive(Debug, Default)]
pub struct BaselineSlot {
    held: Option<BaselineSnapshot>,
}

impl BaselineSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture from `snapshot` unless a baseline is already held
    pub fn capture(&mut self, snapshot: &FeedSnapshot) -> &BaselineSnapshot {
        if self.held.is_some() {
            log::debug!("Baseline already captured, ignoring later snapshot");
        }
        self.held.get_or_insert_with(|| {
            let baseline = capture_baseline(snapshot);
            log::info!(
                "Baseline captured: {} instruments at {}",
                baseline.len(),
                baseline.captured_at
            );
            baseline
        })
    }

    pub fn is_captured(&self) -> bool {
        self.held.is_some()
    }

    pub fn get(&self) -> Option<&BaselineSnapshot> {
        self.held.as_ref()
    }

    /// Consume the baseline for scoring
    pub fn take(&mut self) -> Option<BaselineSnapshot> {
        self.held.take()
    }

    /// Discard without scoring
    pub fn clear(&mut self) {
        self.held = None;
    }
}
