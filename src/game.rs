use std::io::{BufRead, Write};

use clap::ValueEnum;
use log::debug;

use crate::moves::{MAX_PICK, MIN_PICK};
use crate::{Error, Result, SearchStats, StrategyKind};

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// Parses a line typed by the human player.
pub fn parse_pick(input: &str) -> Result<i64> {
    let input = input.trim();
    input.parse().map_err(|_| Error::NotANumber {
        input: input.to_string(),
    })
}

/// Checks that `pick` apples may be taken from `pile`.
///
/// Zero is rejected: a pick must remove at least one apple.
pub fn validate_pick(pile: usize, pick: i64) -> Result<usize> {
    let pick = usize::try_from(pick).map_err(|_| Error::PickOutOfRange { pick: pick.into() })?;
    check_pick(pile, pick)
}

fn check_pick(pile: usize, pick: usize) -> Result<usize> {
    if !(MIN_PICK..=MAX_PICK).contains(&pick) {
        return Err(Error::PickOutOfRange { pick: pick as i128 });
    }
    if pick > pile {
        return Err(Error::PickExceedsPile { pick, pile });
    }
    Ok(pick)
}

/// State of one game: the basket and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pile: usize,
    turn: Player,
    strategy: StrategyKind,
    parallel: bool,
}

impl Game {
    /// Starts a game with `pile` apples and `first` to move.
    pub fn new(pile: usize, first: Player, strategy: StrategyKind) -> Game {
        Game {
            pile,
            turn: first,
            strategy,
            parallel: false,
        }
    }

    /// Evaluates the top-level minimax candidates in parallel.
    pub fn with_parallel_search(mut self, parallel: bool) -> Game {
        self.parallel = parallel;
        self
    }

    pub fn pile(&self) -> usize {
        self.pile
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub fn is_over(&self) -> bool {
        self.pile == 0
    }

    /// Takes `pick` apples for the player to move and passes the turn.
    pub fn apply(&mut self, pick: usize) -> Result<()> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        let pick = check_pick(self.pile, pick)?;
        self.pile -= pick;
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Lets the strategy choose the next pick and plays it.
    ///
    /// Intended for the computer's turn, but plays whichever side is to move.
    pub fn computer_move(&mut self, stats: &mut SearchStats) -> Result<usize> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        let pick = self
            .strategy
            .build(self.parallel)
            .select_move_with_stats(self.pile, stats);
        self.apply(pick)?;
        Ok(pick)
    }

    /// The player who took the last apple, once the basket is empty.
    pub fn loser(&self) -> Option<Player> {
        self.is_over().then(|| self.turn.opponent())
    }
}

/// Runs a console game until the basket is empty and returns the loser.
pub fn play<R: BufRead, W: Write>(game: &mut Game, input: R, output: W) -> Result<Player> {
    play_with(game, input, output, |_, _| ())
}

/// Like `play`, calling `on_computer_move` with every computer pick and its search stats.
pub fn play_with<R, W, F>(
    game: &mut Game,
    mut input: R,
    mut output: W,
    mut on_computer_move: F,
) -> Result<Player>
where
    R: BufRead,
    W: Write,
    F: FnMut(usize, &SearchStats),
{
    if game.is_over() {
        return Err(Error::GameOver);
    }

    writeln!(output, "***ABOUT APPLE NIM***")?;
    writeln!(output, "A small number of apples are placed on a basket.")?;
    writeln!(output, "Players can remove 1, 2, 3 or 4 apples in turns.")?;
    writeln!(output, "Whoever picks the last apple loses the game.")?;
    writeln!(output, "***START***")?;

    while !game.is_over() {
        match game.turn() {
            Player::Human => {
                writeln!(output, "Number of apples left: [[ {} ]]", game.pile())?;
                writeln!(output, "***YOUR TURN***")?;
                let pick = read_pick(game.pile(), &mut input, &mut output)?;
                game.apply(pick)?;
            }
            Player::Computer => {
                writeln!(output, "Number of apples left: [ {} ]", game.pile())?;
                writeln!(output, "***COMPUTER'S TURN***")?;
                let mut stats = SearchStats::default();
                let pick = game.computer_move(&mut stats)?;
                on_computer_move(pick, &stats);
                let noun = if pick == 1 { "apple" } else { "apples" };
                writeln!(output, "Computer picks ( {pick} ) {noun}.")?;
            }
        }
    }

    let loser = game.loser().ok_or(Error::GameOver)?;
    writeln!(output, "Empty basket! ")?;
    match loser {
        Player::Human => writeln!(output, "You lose.")?,
        Player::Computer => writeln!(output, "You win.")?,
    }
    writeln!(output, "***Game Over***")?;
    Ok(loser)
}

fn read_pick<R: BufRead, W: Write>(pile: usize, input: &mut R, output: &mut W) -> Result<usize> {
    let mut line = String::new();
    loop {
        write!(output, "Enter your pick: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        match parse_pick(&line).and_then(|pick| validate_pick(pile, pick)) {
            Ok(pick) => return Ok(pick),
            Err(err) => {
                debug!("rejected pick: {err}");
                writeln!(output, "Invalid input")?;
            }
        }
    }
}
