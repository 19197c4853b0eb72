mod action;
mod baseline;
mod phase;
mod score;
mod view;

pub use action::PlayerAction;
pub use baseline::{BaselineEntry, BaselineSnapshot};
pub use phase::Phase;
pub use score::ScoreRecord;
pub use view::SessionView;
