//! Geographic and tile-grid type definitions

use std::fmt;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Supported zoom levels for satellite tile sources
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 22;

/// Edge length of one raster tile in pixels.
pub const TILE_SIZE: u32 = 256;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A geographic rectangle defined by two opposite corners.
///
/// Callers may supply the corners in any order; grid and area
/// computations normalize internally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRect {
    pub a: GeoPoint,
    pub b: GeoPoint,
}

impl GeoRect {
    pub fn new(a: GeoPoint, b: GeoPoint) -> Self {
        Self { a, b }
    }

    /// Builds a rectangle from raw corner coordinates.
    pub fn from_corners(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Self {
        Self {
            a: GeoPoint::new(lat1, lon1),
            b: GeoPoint::new(lat2, lon2),
        }
    }
}

/// Tile coordinates in the Web Mercator / Slippy Map system.
///
/// Addresses one 256×256 pixel raster tile on the remote source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// X coordinate (east-west), 0 at west
    pub x: u32,
    /// Y coordinate (north-south), 0 at north
    pub y: u32,
    /// Zoom level (0-22)
    pub zoom: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, zoom: u8) -> Self {
        Self { x, y, zoom }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// The inclusive rectangular range of tiles covering a [`GeoRect`]
/// at one zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub x_min: u32,
    pub x_max: u32,
    pub y_min: u32,
    pub y_max: u32,
    pub zoom: u8,
}

impl TileGrid {
    /// Grid width in tiles. Never zero: ranges are inclusive.
    #[inline]
    pub fn width(&self) -> u32 {
        self.x_max - self.x_min + 1
    }

    /// Grid height in tiles.
    #[inline]
    pub fn height(&self) -> u32 {
        self.y_max - self.y_min + 1
    }

    /// Total number of tiles in the grid.
    #[inline]
    pub fn tile_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Canvas width in pixels for a mosaic of this grid.
    #[inline]
    pub fn pixel_width(&self) -> u32 {
        self.width() * TILE_SIZE
    }

    /// Canvas height in pixels for a mosaic of this grid.
    #[inline]
    pub fn pixel_height(&self) -> u32 {
        self.height() * TILE_SIZE
    }

    /// Pixel offset of a tile within the mosaic canvas.
    ///
    /// The tile is assumed to lie inside the grid; coordinates outside
    /// the range would underflow and panic in debug builds.
    #[inline]
    pub fn pixel_offset(&self, tile: &TileCoord) -> (u32, u32) {
        (
            (tile.x - self.x_min) * TILE_SIZE,
            (tile.y - self.y_min) * TILE_SIZE,
        )
    }

    /// Returns an iterator over every tile in the grid.
    ///
    /// Tiles are yielded in row-major order (y fixed, x sweeping west
    /// to east). Iteration order does not affect mosaic output since
    /// tile regions are disjoint.
    #[inline]
    pub fn iter(&self) -> GridTilesIterator {
        GridTilesIterator {
            grid: *self,
            next_x: self.x_min,
            next_y: self.y_min,
            done: false,
        }
    }
}

/// Iterator over all tiles in a [`TileGrid`], row-major.
#[derive(Debug, Clone)]
pub struct GridTilesIterator {
    grid: TileGrid,
    next_x: u32,
    next_y: u32,
    done: bool,
}

impl Iterator for GridTilesIterator {
    type Item = TileCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let tile = TileCoord::new(self.next_x, self.next_y, self.grid.zoom);

        if self.next_x < self.grid.x_max {
            self.next_x += 1;
        } else if self.next_y < self.grid.y_max {
            self.next_x = self.grid.x_min;
            self.next_y += 1;
        } else {
            self.done = true;
        }

        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let rows_left = (self.grid.y_max - self.next_y) as u64;
        let in_row = (self.grid.x_max - self.next_x) as u64 + 1;
        let remaining = (rows_left * self.grid.width() as u64 + in_row) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridTilesIterator {}

/// Object density over a surveyed area.
///
/// Division by a zero area is represented explicitly rather than
/// producing infinity or NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Density {
    /// Objects per square kilometre
    PerKm2(f64),
    /// Area was zero; density is undefined
    NotComputable,
}

impl Density {
    /// Computes density from a count and an area in km².
    pub fn from_count(count: u64, area_km2: f64) -> Self {
        if area_km2 == 0.0 {
            Density::NotComputable
        } else {
            Density::PerKm2(count as f64 / area_km2)
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Density::PerKm2(d) => write!(f, "{:.2} per km²", d),
            Density::NotComputable => write!(f, "N/A (area is too small)"),
        }
    }
}

/// Errors that can occur during coordinate conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordError {
    /// Latitude is outside the Web Mercator range
    #[error("invalid latitude: {0} (must be between {MIN_LAT} and {MAX_LAT})")]
    InvalidLatitude(f64),
    /// Longitude is outside valid range (-180.0 to 180.0)
    #[error("invalid longitude: {0} (must be between {MIN_LON} and {MAX_LON})")]
    InvalidLongitude(f64),
    /// Zoom level is outside valid range
    #[error("invalid zoom level: {0} (must be between {MIN_ZOOM} and {MAX_ZOOM})")]
    InvalidZoom(u8),
}
