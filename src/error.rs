use thiserror::Error;

use crate::moves::{MAX_PICK, MIN_PICK};

/// Errors raised by the game driver. The strategies themselves cannot fail.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("pick {pick} is outside {}..={}", MIN_PICK, MAX_PICK)]
    PickOutOfRange { pick: i128 },

    #[error("cannot pick {pick} apples, only {pile} left")]
    PickExceedsPile { pick: usize, pile: usize },

    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    #[error("the basket is already empty")]
    GameOver,

    #[error("input closed before the game ended")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
