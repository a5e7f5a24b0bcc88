//! Deterministic rover navigation over a bounded toroidal grid.
//!
//! `rover-core` defines the canonical navigation rules (coordinate
//! arithmetic, facing transitions, command dispatch) and exposes pure APIs
//! for embedding harnesses. All state mutation flows through
//! [`rover::Rover`]; the value types it is built from are immutable and
//! every transition returns a new instance.
pub mod command;
pub mod config;
pub mod rover;
pub mod state;

pub use command::{Command, CommandError};
pub use config::GridConfig;
pub use rover::{PositionError, Rover};
pub use state::{Coordinate, CoordinateError, Facing, Navigator};
