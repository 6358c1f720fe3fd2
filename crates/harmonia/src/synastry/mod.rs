pub mod scorer;
pub mod types;

pub use scorer::SynastryScorer;
pub use types::{CompatibilitySignal, ContextItem, SynastryConnection};
