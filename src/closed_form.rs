use log::debug;

use crate::moves::{is_losing_position, legal_picks, MIN_PICK};
use crate::Strategy;

/// Picks moves with the modulo rule: leave the opponent a pile of `5k + 1`.
///
/// Runs in constant time. When the pile is already `5k + 1` there is no
/// forcing move and the strategy takes a single apple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosedFormStrategy;

impl Strategy for ClosedFormStrategy {
    fn select_move(&self, pile: usize) -> usize {
        debug_assert!(pile > 0, "cannot select a move from an empty pile");

        match legal_picks(pile).find(|pick| is_losing_position(pile - pick)) {
            Some(pick) => {
                debug!("closed form: {pile} apples, forcing pick {pick}");
                pick
            }
            None => {
                debug!("closed form: {pile} apples is lost, taking {MIN_PICK}");
                MIN_PICK
            }
        }
    }
}
