//! Line-oriented console driving a single [`Game`].

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rochade_core::{Game, GameError, Played, PromotionPiece, Square, divide};

use crate::command::{Command, ConsoleOption, MoveInput, parse_command};
use crate::error::ConsoleError;

/// Options adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Complete pending promotions with a queen without prompting.
    pub autoqueen: bool,
    /// Print the board after each successful move.
    pub showboard: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            autoqueen: false,
            showboard: true,
        }
    }
}

/// The console, holding the game in progress and its options.
///
/// Reads one command per line and answers on the writer. Parse and rule
/// errors are printed and the session goes on; only I/O failures end it.
pub struct Console {
    game: Game,
    config: ConsoleConfig,
}

impl Console {
    /// Create a console on the starting position with default options.
    pub fn new() -> Self {
        Self::with_game(Game::new(), ConsoleConfig::default())
    }

    /// Create a console continuing `game`.
    pub fn with_game(game: Game, config: ConsoleConfig) -> Self {
        Self { game, config }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> ConsoleConfig {
        self.config
    }

    /// Run the command loop until `quit` or until input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<(), ConsoleError> {
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received console command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, &mut writer)?,
                Err(e) => {
                    warn!(error = %e, "console command parse error");
                    writeln!(writer, "error: {e}")?;
                }
            }
            writer.flush()?;
        }

        info!("rochade console shutting down");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, w: &mut W) -> Result<(), ConsoleError> {
        match cmd {
            Command::New => {
                self.game.reset();
                writeln!(w, "new game")?;
            }
            Command::Board => self.print_board(w)?,
            Command::Moves(sq) => self.handle_moves(sq, w)?,
            Command::Move(input) => {
                let result = match input {
                    MoveInput::Coordinate(mv) => self.game.play_move(mv),
                    MoveInput::San(token) => self.game.play_san(&token),
                };
                self.report(result, w)?;
            }
            Command::Promote(piece) => {
                let result = self.game.promote(piece);
                self.report(result, w)?;
            }
            Command::Cancel => match self.game.cancel_promotion() {
                Ok(()) => writeln!(w, "promotion cancelled")?,
                Err(e) => writeln!(w, "error: {e}")?,
            },
            Command::History => self.print_history(w)?,
            Command::Set(opt) => self.handle_set(opt, w)?,
            Command::Perft(depth) => self.handle_perft(depth, w)?,
            Command::Unknown(name) => {
                debug!(cmd = %name, "unknown console command");
                writeln!(w, "unknown command: {name}")?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&self, sq: Square, w: &mut W) -> Result<(), ConsoleError> {
        let targets = self.game.legal_moves(sq);
        if targets.is_empty() {
            writeln!(w, "no legal moves from {sq}")?;
        } else {
            writeln!(w, "{targets}")?;
        }
        Ok(())
    }

    fn handle_set<W: Write>(&mut self, opt: ConsoleOption, w: &mut W) -> Result<(), ConsoleError> {
        match opt {
            ConsoleOption::AutoQueen(on) => {
                self.config.autoqueen = on;
                writeln!(w, "autoqueen {on}")?;
            }
            ConsoleOption::ShowBoard(on) => {
                self.config.showboard = on;
                writeln!(w, "showboard {on}")?;
            }
        }
        Ok(())
    }

    /// Print leaf counts per root move of the current position, then the total.
    fn handle_perft<W: Write>(&self, depth: usize, w: &mut W) -> Result<(), ConsoleError> {
        let counts = divide(self.game.board(), self.game.ply(), depth);
        let mut total = 0u64;
        for (mv, nodes) in &counts {
            writeln!(w, "{mv}: {nodes}")?;
            total += nodes;
        }
        debug!(depth, total, "perft finished");
        writeln!(w, "total: {total}")?;
        Ok(())
    }

    /// Print the result of a move or promotion.
    fn report<W: Write>(
        &mut self,
        result: Result<Played, GameError>,
        w: &mut W,
    ) -> Result<(), ConsoleError> {
        match result {
            Ok(Played::Moved { san }) => {
                writeln!(w, "played {san}")?;
                if self.config.showboard {
                    writeln!(w, "{}", self.game.board().pretty())?;
                }
                if let Some(outcome) = self.game.outcome() {
                    writeln!(w, "game over: {outcome}")?;
                }
            }
            Ok(Played::PromotionPending { from, to }) => {
                if self.config.autoqueen {
                    let result = self.game.promote(PromotionPiece::Queen);
                    return self.report(result, w);
                }
                writeln!(w, "{from}{to} promotes: promote <q|r|b|n> or cancel")?;
            }
            Err(e) => writeln!(w, "error: {e}")?,
        }
        Ok(())
    }

    fn print_board<W: Write>(&self, w: &mut W) -> Result<(), ConsoleError> {
        let board = self.game.board();
        writeln!(w, "{}", board.pretty())?;
        writeln!(w, "{} to move", self.game.side_to_move())?;
        writeln!(w, "castling: {}", board.castle_rights())?;
        if let Some(pending) = self.game.pending_promotion() {
            writeln!(w, "promotion pending: {}{}", pending.from, pending.to)?;
        }
        if let Some(outcome) = self.game.outcome() {
            writeln!(w, "game over: {outcome}")?;
        }
        Ok(())
    }

    /// Print the record as numbered move pairs: `1. e4 e5`.
    fn print_history<W: Write>(&self, w: &mut W) -> Result<(), ConsoleError> {
        let history = self.game.history();
        if history.is_empty() {
            writeln!(w, "no moves played")?;
            return Ok(());
        }
        for (i, pair) in history.chunks(2).enumerate() {
            writeln!(w, "{}. {}", i + 1, pair.join(" "))?;
        }
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
