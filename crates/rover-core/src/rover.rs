//! Rover facade: position parsing, command dispatch, formatted output.
//!
//! The rover is the single owner of mutable state in the crate. All state
//! mutation flows through [`Rover::run_commands`], which replaces the held
//! [`Navigator`] one instruction at a time.

use std::str::FromStr;

use crate::command::{Command, CommandError};
use crate::state::{Coordinate, Facing, Navigator};

/// Error raised when a textual position does not match the expected grammar.
///
/// Every violation maps to this one error: wrong segment count, non-numeric
/// or negative coordinates, or a facing letter outside `N`/`S`/`E`/`W`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "invalid position {input:?}: coordinates must be non-negative numbers and \
     the orientation must be a valid cardinal point (N, S, E or W)"
)]
pub struct PositionError {
    pub input: String,
}

impl PositionError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}

/// The command-facing navigation unit.
///
/// Holds the current [`Navigator`] and replaces it after each applied
/// command; the navigator itself is never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rover {
    navigator: Navigator,
}

impl Rover {
    pub const fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }

    /// Parses a `"<latitude>:<longitude>:<facing>"` position.
    ///
    /// Coordinates past the grid edge are normalized the way
    /// [`Coordinate::create`] normalizes them, so `"23:15:N"` is a valid
    /// position for the cell `3:5`.
    pub fn from_position(position: &str) -> Result<Self, PositionError> {
        let segments: Vec<&str> = position.split(':').collect();
        let [latitude, longitude, facing] = segments.as_slice() else {
            return Err(PositionError::new(position));
        };

        let latitude: i32 = latitude
            .parse()
            .map_err(|_| PositionError::new(position))?;
        let longitude: i32 = longitude
            .parse()
            .map_err(|_| PositionError::new(position))?;
        let facing = Facing::from_str(facing).map_err(|_| PositionError::new(position))?;

        let coordinate = Coordinate::create(latitude, longitude)
            .map_err(|_| PositionError::new(position))?;
        let navigator = Navigator::new(coordinate, facing);
        tracing::trace!(position = %navigator, "parsed rover position");

        Ok(Self::new(navigator))
    }

    /// Applies each instruction letter strictly left to right.
    ///
    /// Decoding is case-insensitive. The first unrecognized letter aborts
    /// the rest of the sequence; instructions before it stay applied and
    /// nothing is rolled back, so the rover is left at the intermediate
    /// position (observable via [`Rover::current_position`]).
    pub fn run_commands(&mut self, commands: &str) -> Result<(), CommandError> {
        for letter in commands.chars() {
            let command = Command::from_letter(letter)?;
            self.dispatch(command);
        }

        Ok(())
    }

    fn dispatch(&mut self, command: Command) {
        self.navigator = match command {
            Command::Left => self.navigator.left(),
            Command::Right => self.navigator.right(),
            Command::Forward => self.navigator.forward(),
        };
        tracing::debug!(command = %command, position = %self.navigator, "applied rover command");
    }

    /// Renders the current position as `"<latitude>:<longitude>:<facing>"`.
    pub fn formatted_location(&self) -> String {
        self.navigator.to_string()
    }

    pub const fn current_position(&self) -> Coordinate {
        self.navigator.current_position()
    }

    pub const fn facing(&self) -> Facing {
        self.navigator.facing()
    }
}
