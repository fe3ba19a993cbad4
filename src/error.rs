use std::io;

use thiserror::Error;

/// Errors that end a quiz session early.
///
/// Bad input from the player never shows up here: menus and the answer
/// prompt re-prompt instead.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("input ended while waiting for a selection")]
    InputClosed,
    #[error("nothing to choose from")]
    NothingToSelect,
}
