mod engine;
mod match_set;
mod pattern;

pub use engine::{FilterEngine, Listener, ScanOutcome, ScanTicket, SubscriptionId};
pub use match_set::MatchSet;
pub use pattern::FilterPattern;
