use std::fmt;

use super::{Coordinate, Facing};

/// A coordinate coupled with a facing, plus the direction-dependent
/// transition rules.
///
/// Navigators are immutable: `forward`, `left`, and `right` each return a
/// new instance. Turning preserves the coordinate and only changes the
/// facing; moving forward preserves the facing and steps the coordinate
/// along the axis the facing selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Navigator {
    coordinate: Coordinate,
    facing: Facing,
}

impl Navigator {
    pub const fn new(coordinate: Coordinate, facing: Facing) -> Self {
        Self { coordinate, facing }
    }

    /// Moves one cell in the direction currently faced.
    #[must_use]
    pub fn forward(self) -> Self {
        let coordinate = match self.facing {
            Facing::North => self.coordinate.increase_longitude(),
            Facing::South => self.coordinate.decrease_longitude(),
            Facing::East => self.coordinate.increase_latitude(),
            Facing::West => self.coordinate.decrease_latitude(),
        };

        Self {
            coordinate,
            facing: self.facing,
        }
    }

    /// Turns a quarter counter-clockwise in place.
    #[must_use]
    pub fn left(self) -> Self {
        Self {
            coordinate: self.coordinate,
            facing: self.facing.left(),
        }
    }

    /// Turns a quarter clockwise in place.
    #[must_use]
    pub fn right(self) -> Self {
        Self {
            coordinate: self.coordinate,
            facing: self.facing.right(),
        }
    }

    pub const fn current_position(&self) -> Coordinate {
        self.coordinate
    }

    pub const fn facing(&self) -> Facing {
        self.facing
    }
}

impl fmt::Display for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.coordinate, self.facing)
    }
}
