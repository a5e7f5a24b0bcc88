/// Navigation grid constants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridConfig;

impl GridConfig {
    // ===== compile-time constants =====
    /// Cells along the latitude axis. Latitudes live in `[0, MAX_LATITUDE)`.
    pub const MAX_LATITUDE: i32 = 10;
    /// Cells along the longitude axis. Longitudes live in `[0, MAX_LONGITUDE)`.
    pub const MAX_LONGITUDE: i32 = 10;
}
