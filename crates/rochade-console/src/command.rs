//! Console command parsing.

use rochade_core::{Move, PromotionPiece, Square};

use crate::error::ConsoleError;

/// A move as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveInput {
    /// Coordinate form such as `e2e4` or `e7e8q`.
    Coordinate(Move),
    /// Anything else, read as algebraic notation.
    San(String),
}

/// An option changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleOption {
    /// Promote to a queen without asking.
    AutoQueen(bool),
    /// Print the board after every move.
    ShowBoard(bool),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- start a new game.
    New,
    /// `board` -- print the position.
    Board,
    /// `moves <square>` -- list legal destinations of a piece.
    Moves(Square),
    /// `move <token>` -- play a move.
    Move(MoveInput),
    /// `promote <q|r|b|n>` -- finish a pending promotion.
    Promote(PromotionPiece),
    /// `cancel` -- abandon a pending promotion.
    Cancel,
    /// `history` -- print the moves played so far.
    History,
    /// `set <name> <value>` -- change an option.
    Set(ConsoleOption),
    /// `perft <depth>` -- count move-tree leaves per root move.
    Perft(usize),
    /// `quit` -- leave the console.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match name {
        "new" => Ok(Command::New),
        "board" => Ok(Command::Board),
        "cancel" => Ok(Command::Cancel),
        "history" => Ok(Command::History),
        "quit" => Ok(Command::Quit),
        "moves" => {
            let value = first_arg(name, args)?;
            let sq = Square::from_algebraic(value).ok_or_else(|| ConsoleError::InvalidSquare {
                value: value.to_string(),
            })?;
            Ok(Command::Moves(sq))
        }
        "move" => {
            let token = first_arg(name, args)?;
            let input = match Move::from_coordinate(token) {
                Some(mv) => MoveInput::Coordinate(mv),
                None => MoveInput::San(token.to_string()),
            };
            Ok(Command::Move(input))
        }
        "promote" => {
            let value = first_arg(name, args)?;
            let mut chars = value.chars();
            let piece = match (chars.next(), chars.next()) {
                (Some(c), None) => PromotionPiece::from_char(c),
                _ => None,
            };
            piece
                .map(Command::Promote)
                .ok_or_else(|| ConsoleError::InvalidPromotion {
                    value: value.to_string(),
                })
        }
        "set" => parse_set(args),
        "perft" => {
            let value = first_arg(name, args)?;
            match value.parse::<usize>() {
                Ok(depth) if depth > 0 => Ok(Command::Perft(depth)),
                _ => Err(ConsoleError::InvalidDepth {
                    value: value.to_string(),
                }),
            }
        }
        _ => Ok(Command::Unknown(name.to_string())),
    }
}

fn first_arg<'a>(command: &str, args: &[&'a str]) -> Result<&'a str, ConsoleError> {
    args.first().copied().ok_or_else(|| ConsoleError::MissingArgument {
        command: command.to_string(),
    })
}

/// Parse `set <name> <value>`.
fn parse_set(args: &[&str]) -> Result<Command, ConsoleError> {
    let name = first_arg("set", args)?;
    let value = args.get(1).copied().ok_or_else(|| ConsoleError::MissingArgument {
        command: format!("set {name}"),
    })?;
    let flag = parse_bool(name, value)?;
    match name.to_ascii_lowercase().as_str() {
        "autoqueen" => Ok(Command::Set(ConsoleOption::AutoQueen(flag))),
        "showboard" => Ok(Command::Set(ConsoleOption::ShowBoard(flag))),
        _ => Err(ConsoleError::UnknownOption {
            name: name.to_string(),
        }),
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConsoleError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(ConsoleError::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
