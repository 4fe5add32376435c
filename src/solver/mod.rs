//! Guess scoring and selection
//!
//! Every strategy implements [`Scorer`] against a per-round
//! [`ScoringContext`]; the [`Selector`] ranks the possible guesses with one.

mod context;
pub mod fewest;
pub mod global;
pub mod local;
mod selector;
pub mod strategy;
mod topk;

pub use context::ScoringContext;
pub use fewest::{FewestNextCandidates, expected_next_candidates};
pub use global::GlobalAdequacy;
pub use local::LocalAdequacy;
pub use selector::{Progress, Ranking, Selection, Selector, SelectorConfig};
pub use strategy::{Scorer, StrategyType, Weighted};
pub use topk::{ScoredWord, TopK};
