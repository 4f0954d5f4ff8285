/// Smallest number of apples a player may take.
pub const MIN_PICK: usize = 1;

/// Largest number of apples a player may take.
pub const MAX_PICK: usize = 4;

/// Piles repeat their outcome with this period (`MAX_PICK + 1`).
pub const PERIOD: usize = MAX_PICK + 1;

/// Residue of the piles that are lost for the player to move.
pub const LOSING_RESIDUE: usize = 1;

/// Returns the legal picks for `pile`, largest first.
///
/// Both strategies walk candidates in this order, which is what makes
/// larger picks win ties.
pub fn legal_picks(pile: usize) -> impl Iterator<Item = usize> {
    (MIN_PICK..=MAX_PICK.min(pile)).rev()
}

/// Returns true if the player to move cannot force a win from `pile`.
pub fn is_losing_position(pile: usize) -> bool {
    pile % PERIOD == LOSING_RESIDUE
}
