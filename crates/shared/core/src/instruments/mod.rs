mod instrument;
mod snapshot;

pub use instrument::{InstrumentKey, InstrumentMetrics, InstrumentState};
pub use snapshot::FeedSnapshot;
