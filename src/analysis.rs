use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use dashmap::DashMap;
use sorted_vec::SortedVec;

use crate::moves::legal_picks;

/// Outcome of a pile for the player about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Some pick leaves the opponent a losing pile.
    Win,
    /// Every pick leaves the opponent a winning pile.
    Loss,
}

/// Classifies piles by memoized game-theoretic recursion.
///
/// Piles are filled in ascending order, so classifying a pile only reads
/// cached children. This is an analysis aid for checking the modulo rule;
/// the minimax strategy does not consult it.
#[derive(Debug, Clone, Default)]
pub struct OutcomeTable {
    cache: Arc<DashMap<usize, Outcome>>,
    /// Every pile below this one is cached.
    filled: Arc<AtomicUsize>,
}

impl OutcomeTable {
    /// Constructs a new, empty table.
    pub fn new() -> OutcomeTable {
        OutcomeTable {
            cache: Arc::new(DashMap::new()),
            filled: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns the number of piles classified so far.
    pub fn get_cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Classifies `pile` for the player to move.
    pub fn get_outcome(&self, pile: usize) -> Outcome {
        if let Some(outcome) = self.cache.get(&pile) {
            return *outcome;
        }

        let start = self.filled.load(Ordering::Acquire).min(pile);
        let mut outcome = Outcome::Win;
        for next in start..=pile {
            outcome = self.classify(next);
        }
        self.filled.fetch_max(pile.saturating_add(1), Ordering::AcqRel);
        outcome
    }

    /// Classifies `pile`, whose children must already be cached.
    fn classify(&self, pile: usize) -> Outcome {
        if let Some(outcome) = self.cache.get(&pile) {
            return *outcome;
        }

        // An empty basket means the opponent took the last apple.
        let outcome = if pile == 0
            || legal_picks(pile).any(|pick| {
                self.cache.get(&(pile - pick)).map(|child| *child) == Some(Outcome::Loss)
            }) {
            Outcome::Win
        } else {
            Outcome::Loss
        };
        self.cache.insert(pile, outcome);
        outcome
    }

    /// Returns true if the player to move from `pile` loses against best play.
    pub fn is_losing(&self, pile: usize) -> bool {
        self.get_outcome(pile) == Outcome::Loss
    }

    /// Returns every losing pile in `1..=up_to`.
    pub fn losing_positions(&self, up_to: usize) -> SortedVec<usize> {
        let mut losing = SortedVec::new();
        for pile in 1..=up_to {
            if self.is_losing(pile) {
                losing.insert(pile);
            }
        }
        losing
    }
}

/// Returns every losing pile in `1..=up_to` using a fresh table.
pub fn losing_positions(up_to: usize) -> SortedVec<usize> {
    OutcomeTable::new().losing_positions(up_to)
}
