use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::moves::legal_picks;
use crate::Strategy;

/// Score of an immediate win for the maximizing player.
///
/// Terminal scores are `BEST_SCORE - depth`, so it must exceed any reachable depth.
pub const BEST_SCORE: i32 = 1000;

/// Sentinel for the min/max accumulators, outside any terminal score.
pub const INFINITY: i32 = 32000;

/// Diagnostics gathered during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Number of child states entered, top-level candidates included.
    pub nodes_searched: u64,
    /// Deepest ply the evaluator was called with.
    pub max_depth: u32,
}

impl SearchStats {
    fn visit(&mut self, depth: u32) {
        self.max_depth = self.max_depth.max(depth);
    }

    fn merge(&mut self, other: &SearchStats) {
        self.nodes_searched += other.nodes_searched;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

/// Picks moves by searching the whole game tree, with the computer maximizing.
///
/// No pruning and no memoization; the search is exponential in the pile size.
/// With `parallel` set the top-level candidates are evaluated on the rayon pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimaxStrategy {
    pub parallel: bool,
}

impl Strategy for MinimaxStrategy {
    fn select_move(&self, pile: usize) -> usize {
        self.select_move_with_stats(pile, &mut SearchStats::default())
    }

    fn select_move_with_stats(&self, pile: usize, stats: &mut SearchStats) -> usize {
        debug_assert!(pile > 0, "cannot select a move from an empty pile");
        *stats = SearchStats::default();

        let candidates: Vec<usize> = legal_picks(pile).collect();
        let scored: Vec<(usize, i32, SearchStats)> = if self.parallel {
            candidates
                .par_iter()
                .map(|&pick| evaluate_candidate(pile, pick))
                .collect()
        } else {
            candidates
                .iter()
                .map(|&pick| evaluate_candidate(pile, pick))
                .collect()
        };

        let mut best = -INFINITY;
        let mut best_pick = 0;
        // Only a strictly better score replaces the incumbent, so ties go to
        // the larger pick.
        for (pick, value, branch_stats) in scored {
            trace!("minimax: {pile} apples, pick {pick} scores {value}");
            stats.merge(&branch_stats);
            if value > best {
                best = value;
                best_pick = pick;
            }
        }

        debug!(
            "minimax: {pile} apples, pick {best_pick} (score {best}), searched {} nodes at a maximum depth of {}",
            stats.nodes_searched, stats.max_depth
        );
        best_pick
    }
}

fn evaluate_candidate(pile: usize, pick: usize) -> (usize, i32, SearchStats) {
    let mut stats = SearchStats {
        nodes_searched: 1,
        max_depth: 0,
    };
    let value = minimax_with_stats(pile - pick, false, 1, &mut stats);
    (pick, value, stats)
}

/// Evaluates `pile` with the given side to move, `depth` plies below the root.
///
/// A player handed an empty pile has won, since the opponent took the last
/// apple. A player handed a single apple has lost.
pub fn minimax(pile: usize, maximizing: bool, depth: u32) -> i32 {
    minimax_with_stats(pile, maximizing, depth, &mut SearchStats::default())
}

/// Same as `minimax`, counting every child state entered into `stats`.
pub fn minimax_with_stats(
    pile: usize,
    maximizing: bool,
    depth: u32,
    stats: &mut SearchStats,
) -> i32 {
    stats.visit(depth);
    let terminal = BEST_SCORE - depth as i32;

    match (pile, maximizing) {
        (0, true) => return terminal,
        (0, false) => return -terminal,
        (1, true) => return -terminal,
        (1, false) => return terminal,
        _ => (),
    }

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for pick in legal_picks(pile) {
        stats.nodes_searched += 1;
        let value = minimax_with_stats(pile - pick, !maximizing, depth + 1, stats);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}
