//! Rover instruction vocabulary.
//!
//! Commands arrive as a string of single letters and are decoded one
//! character at a time; dispatch order and fail-fast semantics live in
//! [`crate::rover::Rover::run_commands`].

/// Errors raised while decoding instruction letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("invalid command {0:?}")]
    Unrecognized(char),
}

/// A single rover instruction, coded to its dispatch letter.
///
/// The set is closed: `L`, `R`, and `F` are the whole vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    #[strum(serialize = "L")]
    Left,
    #[strum(serialize = "R")]
    Right,
    #[strum(serialize = "F")]
    Forward,
}

impl Command {
    /// Decodes one instruction letter, case-insensitively.
    pub fn from_letter(letter: char) -> Result<Self, CommandError> {
        match letter.to_ascii_uppercase() {
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            'F' => Ok(Self::Forward),
            _ => Err(CommandError::Unrecognized(letter)),
        }
    }
}
