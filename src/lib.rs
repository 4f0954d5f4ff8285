pub mod analysis;
pub mod closed_form;
mod error;
pub mod game;
pub mod minimax;
pub mod moves;


use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use closed_form::ClosedFormStrategy;
pub use error::{Error, Result};
pub use minimax::{MinimaxStrategy, SearchStats};

/// Provides the interface for choosing the computer's pick in Apple Nim.
///
/// Implementors must return a pick in `1..=4` that does not exceed `pile`.
/// Calling with an empty pile is a contract violation.
pub trait Strategy {
    /// Returns the pick for the player to move with `pile` apples left.
    fn select_move(&self, pile: usize) -> usize;

    /// Same as `select_move`, but records search diagnostics into `stats`.
    ///
    /// Strategies that do not search leave `stats` untouched.
    fn select_move_with_stats(&self, pile: usize, _stats: &mut SearchStats) -> usize {
        self.select_move(pile)
    }
}

/// Names one of the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// The modulo-5 rule.
    #[default]
    ClosedForm,
    /// Exhaustive game-tree search.
    Minimax,
}

impl StrategyKind {
    /// Builds the strategy this kind names.
    pub fn build(self, parallel: bool) -> Box<dyn Strategy + Send + Sync> {
        match self {
            StrategyKind::ClosedForm => Box::new(ClosedFormStrategy),
            StrategyKind::Minimax => Box::new(MinimaxStrategy { parallel }),
        }
    }
}

/// Selects the computer's pick for `pile` apples with the given strategy.
pub fn select_move(pile: usize, strategy: StrategyKind) -> usize {
    strategy.build(false).select_move(pile)
}

/// Selects the computer's pick and returns the search diagnostics alongside it.
pub fn select_move_with_stats(pile: usize, strategy: StrategyKind) -> (usize, SearchStats) {
    let mut stats = SearchStats::default();
    let pick = strategy.build(false).select_move_with_stats(pile, &mut stats);
    (pick, stats)
}
