//! Scoring strategies
//!
//! Defines the `Scorer` trait and the enum used to pick a strategy at runtime.

use super::context::ScoringContext;
use super::fewest::FewestNextCandidates;
use super::global::GlobalAdequacy;
use super::local::LocalAdequacy;
use crate::core::Word;

/// Rates how good a guess would be in the current round
///
/// Higher is better. Scores are only compared within one round, so a scorer
/// may use any scale as long as it is consistent for a given context.
pub trait Scorer: Sync {
    /// Score `candidate` against the round described by `ctx`
    fn score(&self, candidate: &Word, ctx: &ScoringContext<'_>) -> f64;

    /// Short name used in logs and reports
    fn name(&self) -> &'static str;
}

/// Linear combination of other strategies
#[derive(Debug, Clone, Default)]
pub struct Weighted {
    parts: Vec<(f64, StrategyType)>,
}

impl Weighted {
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Add `strategy` with the given weight
    #[must_use]
    pub fn with(mut self, weight: f64, strategy: impl Into<StrategyType>) -> Self {
        self.parts.push((weight, strategy.into()));
        self
    }

    /// Global adequacy plus a tenth of local adequacy
    #[must_use]
    pub fn blend() -> Self {
        Self::new()
            .with(1.0, GlobalAdequacy)
            .with(0.1, LocalAdequacy)
    }

    #[must_use]
    pub fn parts(&self) -> &[(f64, StrategyType)] {
        &self.parts
    }
}

impl Scorer for Weighted {
    fn name(&self) -> &'static str {
        "blend"
    }

    fn score(&self, candidate: &Word, ctx: &ScoringContext<'_>) -> f64 {
        self.parts
            .iter()
            .map(|(weight, strategy)| weight * strategy.score(candidate, ctx))
            .sum()
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Position-aware letter frequency
    Local(LocalAdequacy),
    /// Occurrence-aware letter frequency
    Global(GlobalAdequacy),
    /// One-round lookahead on remaining guesses (default)
    FewestNext(FewestNextCandidates),
    /// Weighted sum of other strategies
    Weighted(Weighted),
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 4] = ["local", "global", "fewest", "blend"];

    /// Create strategy from name string
    ///
    /// Supported names: "local", "global", "fewest", "blend".
    /// Returns `None` if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "local" => Some(Self::Local(LocalAdequacy)),
            "global" => Some(Self::Global(GlobalAdequacy)),
            "fewest" | "fewest-next" => Some(Self::FewestNext(FewestNextCandidates)),
            "blend" | "weighted" => Some(Self::Weighted(Weighted::blend())),
            _ => None,
        }
    }

    /// Every built-in strategy, in `NAMES` order
    #[must_use]
    pub fn all() -> Vec<Self> {
        Self::NAMES.iter().filter_map(|name| Self::from_name(name)).collect()
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::FewestNext(FewestNextCandidates)
    }
}

impl Scorer for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Local(s) => s.name(),
            Self::Global(s) => s.name(),
            Self::FewestNext(s) => s.name(),
            Self::Weighted(s) => s.name(),
        }
    }

    fn score(&self, candidate: &Word, ctx: &ScoringContext<'_>) -> f64 {
        match self {
            Self::Local(s) => s.score(candidate, ctx),
            Self::Global(s) => s.score(candidate, ctx),
            Self::FewestNext(s) => s.score(candidate, ctx),
            Self::Weighted(s) => s.score(candidate, ctx),
        }
    }
}

impl From<LocalAdequacy> for StrategyType {
    fn from(s: LocalAdequacy) -> Self {
        Self::Local(s)
    }
}

impl From<GlobalAdequacy> for StrategyType {
    fn from(s: GlobalAdequacy) -> Self {
        Self::Global(s)
    }
}

impl From<FewestNextCandidates> for StrategyType {
    fn from(s: FewestNextCandidates) -> Self {
        Self::FewestNext(s)
    }
}

impl From<Weighted> for StrategyType {
    fn from(s: Weighted) -> Self {
        Self::Weighted(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue::Clue;
    use crate::core::Alphabet;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn from_name_recognizes_builtins() {
        for name in StrategyType::NAMES {
            let strategy = StrategyType::from_name(name).unwrap();
            assert_eq!(strategy.name(), name);
        }
        assert_eq!(StrategyType::from_name("FEWEST").unwrap().name(), "fewest");
        assert!(StrategyType::from_name("entropy").is_none());
    }

    #[test]
    fn default_is_fewest_next() {
        assert_eq!(StrategyType::default().name(), "fewest");
        assert_eq!(StrategyType::all().len(), 4);
    }

    #[test]
    fn blend_is_global_plus_tenth_local() {
        let alphabet = Alphabet::lowercase();
        let answers = words(&["crate", "grate", "irate", "plate"]);
        let ctx = ScoringContext::new(&alphabet, Clue::new(&alphabet, 5), &answers, &answers, 0.0);
        let candidate = Word::new("trace").unwrap();

        let expected =
            GlobalAdequacy.score(&candidate, &ctx) + 0.1 * LocalAdequacy.score(&candidate, &ctx);
        let blended = Weighted::blend().score(&candidate, &ctx);

        assert!((blended - expected).abs() < 1e-12);
        assert_eq!(Weighted::blend().parts().len(), 2);
    }

    #[test]
    fn empty_weighted_scores_zero() {
        let alphabet = Alphabet::lowercase();
        let answers = words(&["crate"]);
        let ctx = ScoringContext::new(&alphabet, Clue::new(&alphabet, 5), &answers, &answers, 0.0);

        assert!(Weighted::new().score(&answers[0], &ctx).abs() < f64::EPSILON);
    }

    #[test]
    fn weights_scale_children() {
        let alphabet = Alphabet::lowercase();
        let answers = words(&["crate", "grate"]);
        let ctx = ScoringContext::new(&alphabet, Clue::new(&alphabet, 5), &answers, &answers, 0.0);
        let candidate = &answers[0];

        let doubled = Weighted::new().with(2.0, LocalAdequacy);
        let local = LocalAdequacy.score(candidate, &ctx);
        assert!((doubled.score(candidate, &ctx) - 2.0 * local).abs() < 1e-12);
    }
}
