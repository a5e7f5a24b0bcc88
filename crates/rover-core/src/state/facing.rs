/// Cardinal orientation of the rover.
///
/// The set is closed: turning cycles through the four points and no fifth
/// facing is reachable. Each variant is coded to its cardinal letter, which
/// gives the (case-sensitive) `FromStr` used by position parsing and the
/// `Display` used by formatted output.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    #[strum(serialize = "N")]
    North,
    #[strum(serialize = "S")]
    South,
    #[strum(serialize = "E")]
    East,
    #[strum(serialize = "W")]
    West,
}

impl Facing {
    /// Quarter turn counter-clockwise.
    pub const fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::South => Self::East,
            Self::East => Self::North,
            Self::West => Self::South,
        }
    }

    /// Quarter turn clockwise.
    pub const fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::South => Self::West,
            Self::East => Self::South,
            Self::West => Self::North,
        }
    }
}
