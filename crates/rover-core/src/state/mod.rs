//! Immutable navigation state.
//!
//! This module owns the value types the rover is built from: the grid
//! [`Coordinate`], the cardinal [`Facing`], and the [`Navigator`] coupling
//! the two. None of them mutate in place; every transition returns a new
//! value, and only [`crate::rover::Rover`] holds reassignable state.
pub mod coordinate;
pub mod facing;
pub mod navigator;

pub use coordinate::{Coordinate, CoordinateError};
pub use facing::Facing;
pub use navigator::Navigator;
