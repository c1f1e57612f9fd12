//! Line-oriented console protocol for playing a rochade game.

pub mod command;
pub mod console;
pub mod error;

pub use command::{Command, ConsoleOption, MoveInput, parse_command};
pub use console::{Console, ConsoleConfig};
pub use error::ConsoleError;
