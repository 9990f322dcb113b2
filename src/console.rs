//! Line-oriented console game.

use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_search::{Board, CELL_COUNT, MoveError, Player, Position, Square, Strategy};
use tracing::{debug, info, instrument};

/// Who the human plays against.
pub enum Opponent {
    /// Another human at the same keyboard.
    Friend,
    /// The computer, playing `side` with `strategy`.
    Computer {
        /// Side the computer plays.
        side: Player,
        /// How the computer chooses moves.
        strategy: Box<dyn Strategy>,
    },
}

/// A console game session over arbitrary input and output streams.
pub struct Console<R, W> {
    board: Board,
    opponent: Opponent,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a session with a blank board.
    pub fn new(opponent: Opponent, input: R, output: W) -> Self {
        Self {
            board: Board::new(),
            opponent,
            input,
            output,
        }
    }

    /// Plays games until the user declines a rematch or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Starting a new game.")?;

        loop {
            self.print_status()?;
            if !self.play_move()? {
                info!("Input closed, leaving game");
                return Ok(());
            }

            if self.board.is_over() {
                self.print_winner()?;
                if !self.prompt_try_again()? {
                    return Ok(());
                }
                self.board.reset();
                writeln!(self.output, "Started new game.")?;
            }
        }
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Output written so far.
    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Plays one move by whoever is to move. Returns false when input ends.
    fn play_move(&mut self) -> Result<bool> {
        if let Opponent::Computer { side, strategy } = &mut self.opponent
            && self.board.turn() == *side
        {
            let outcome = strategy.play(&mut self.board)?;
            debug!(index = outcome.index(), nodes = outcome.nodes(), "Computer moved");
            writeln!(self.output, "Computer plays {}.", outcome.index())?;
            return Ok(true);
        }
        self.read_player_move()
    }

    fn print_status(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}\n", self.board)?;
        writeln!(self.output, "{}'s turn.", self.board.turn())?;
        Ok(())
    }

    /// Reads one move from input. Invalid input leaves the board unchanged.
    fn read_player_move(&mut self) -> Result<bool> {
        write!(self.output, "Index of move: ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(false);
        };

        let Some(pos) = Position::parse(&line) else {
            writeln!(self.output, "\nInvalid move.")?;
            writeln!(
                self.output,
                "\nThe index of the move must be between 0 and {}, inclusive.",
                CELL_COUNT - 1
            )?;
            return Ok(true);
        };

        match self.board.play(pos.to_index()) {
            Ok(()) => {}
            Err(MoveError::Occupied(_)) => {
                writeln!(self.output, "\nInvalid move.")?;
                writeln!(self.output, "\nThe selected index must be blank.")?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(true)
    }

    fn print_winner(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}\n", self.board)?;
        match self.board.winner() {
            Square::Empty => writeln!(self.output, "The game is a draw.")?,
            Square::Occupied(player) => writeln!(self.output, "Player {} wins!", player)?,
        }
        Ok(())
    }

    fn prompt_try_again(&mut self) -> Result<bool> {
        loop {
            write!(self.output, "Would you like to start a new game? (Y/N): ")?;
            self.output.flush()?;
            let Some(answer) = self.read_line()? else {
                return Ok(false);
            };
            if answer.eq_ignore_ascii_case("y") {
                return Ok(true);
            }
            if answer.eq_ignore_ascii_case("n") {
                return Ok(false);
            }
            writeln!(self.output, "Invalid input.")?;
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
