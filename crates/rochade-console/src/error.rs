//! Console protocol errors.

use rochade_core::GameError;

/// Errors that can occur while reading or executing console commands.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A command that needs an argument was given none.
    #[error("{command} needs an argument")]
    MissingArgument {
        /// The command word.
        command: String,
    },

    /// A square argument is not in `e4` form.
    #[error("invalid square: {value}")]
    InvalidSquare {
        /// The text that failed to parse.
        value: String,
    },

    /// The promotion piece is not one of `q`, `r`, `b`, `n`.
    #[error("invalid promotion piece: {value}")]
    InvalidPromotion {
        /// The text that failed to parse.
        value: String,
    },

    /// `perft` was given something other than a positive depth.
    #[error("invalid perft depth: {value}")]
    InvalidDepth {
        /// The text that failed to parse.
        value: String,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `set` gave a value the option does not accept.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The game rejected the command.
    #[error(transparent)]
    Game(#[from] GameError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
