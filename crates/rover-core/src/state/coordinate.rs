use std::fmt;

use crate::config::GridConfig;

/// Errors raised when constructing a [`Coordinate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("latitude and longitude must not be negative (got {latitude}:{longitude})")]
    Negative { latitude: i32, longitude: i32 },
}

/// Discrete point on the wraparound grid.
///
/// Both axes are invariantly held in `[0, GridConfig::MAX_LATITUDE)` /
/// `[0, GridConfig::MAX_LONGITUDE)`: construction normalizes via modulo and
/// the step operations wrap at the edges, so no instance can ever hold an
/// out-of-range value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    latitude: i32,
    longitude: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self {
        latitude: 0,
        longitude: 0,
    };

    /// Validated factory.
    ///
    /// Negative inputs are rejected; non-negative inputs at or past the grid
    /// edge wrap via modulo, so `create(23, 15)` lands on `3:5`.
    pub fn create(latitude: i32, longitude: i32) -> Result<Self, CoordinateError> {
        if latitude < 0 || longitude < 0 {
            return Err(CoordinateError::Negative {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude: latitude % GridConfig::MAX_LATITUDE,
            longitude: longitude % GridConfig::MAX_LONGITUDE,
        })
    }

    pub const fn latitude(&self) -> i32 {
        self.latitude
    }

    pub const fn longitude(&self) -> i32 {
        self.longitude
    }

    /// Steps one cell along the latitude axis, wrapping past the far edge.
    #[must_use]
    pub fn increase_latitude(self) -> Self {
        Self {
            latitude: (self.latitude + 1) % GridConfig::MAX_LATITUDE,
            longitude: self.longitude,
        }
    }

    /// Steps one cell back along the latitude axis, wrapping below zero.
    #[must_use]
    pub fn decrease_latitude(self) -> Self {
        let latitude = if self.latitude - 1 < 0 {
            GridConfig::MAX_LATITUDE - 1
        } else {
            self.latitude - 1
        };

        Self {
            latitude,
            longitude: self.longitude,
        }
    }

    /// Steps one cell along the longitude axis, wrapping past the far edge.
    #[must_use]
    pub fn increase_longitude(self) -> Self {
        Self {
            latitude: self.latitude,
            longitude: (self.longitude + 1) % GridConfig::MAX_LONGITUDE,
        }
    }

    /// Steps one cell back along the longitude axis, wrapping below zero.
    #[must_use]
    pub fn decrease_longitude(self) -> Self {
        let longitude = if self.longitude - 1 < 0 {
            GridConfig::MAX_LONGITUDE - 1
        } else {
            self.longitude - 1
        };

        Self {
            latitude: self.latitude,
            longitude,
        }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.latitude, self.longitude)
    }
}
