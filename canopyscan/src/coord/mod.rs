//! Geographic coordinate and tile-grid math
//!
//! Pure conversions between latitude/longitude rectangles and the
//! Web Mercator tile grid used by satellite imagery sources, plus the
//! area approximation used for density reporting.

mod types;

pub use types::{
    CoordError, Density, GeoPoint, GeoRect, GridTilesIterator, TileCoord, TileGrid, MAX_LAT,
    MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON, MIN_ZOOM, TILE_SIZE,
};

use std::f64::consts::PI;

/// Mean Earth radius in kilometres, used by [`rect_area_km2`].
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Converts a geographic point to tile coordinates.
///
/// Applies the standard spherical Web Mercator projection. Inputs
/// outside the Mercator-representable latitude band, the valid
/// longitude range, or the supported zoom range are rejected.
///
/// # Arguments
///
/// * `point` - Geographic point in degrees
/// * `zoom` - Zoom level (0 to 22)
#[inline]
pub fn point_to_tile(point: GeoPoint, zoom: u8) -> Result<TileCoord, CoordError> {
    if !(MIN_LAT..=MAX_LAT).contains(&point.lat) {
        return Err(CoordError::InvalidLatitude(point.lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&point.lon) {
        return Err(CoordError::InvalidLongitude(point.lon));
    }
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }

    // Number of tiles per axis at this zoom level
    let n = 2.0_f64.powi(zoom as i32);

    let x = ((point.lon + 180.0) / 360.0 * n).floor();

    // asinh(tan(lat)) is the closed form of ln(tan(lat) + sec(lat))
    let lat_rad = point.lat.to_radians();
    let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor();

    // The index n itself is only reachable at the antimeridian / south
    // Mercator edge; clamp so both indices stay inside the grid.
    let max_index = (n - 1.0).max(0.0);
    Ok(TileCoord {
        x: x.min(max_index) as u32,
        y: y.min(max_index) as u32,
        zoom,
    })
}

/// Computes the tile grid covering a rectangle at the given zoom.
///
/// Both corners are projected and the ranges normalized with
/// componentwise min/max, so the result is independent of the order
/// in which the caller supplied the corners.
pub fn rect_to_grid(rect: &GeoRect, zoom: u8) -> Result<TileGrid, CoordError> {
    let a = point_to_tile(rect.a, zoom)?;
    let b = point_to_tile(rect.b, zoom)?;

    Ok(TileGrid {
        x_min: a.x.min(b.x),
        x_max: a.x.max(b.x),
        y_min: a.y.min(b.y),
        y_max: a.y.max(b.y),
        zoom,
    })
}

/// Approximates the area of a rectangle in km².
///
/// Computes the haversine great-circle distance between the two
/// corners and squares it. This is not a true geodesic rectangle
/// area; it is preserved as-is for compatibility with the results
/// log produced by earlier survey runs. See DESIGN.md before
/// changing the formula.
pub fn rect_area_km2(rect: &GeoRect) -> f64 {
    let dlat = (rect.b.lat - rect.a.lat).to_radians();
    let dlon = (rect.b.lon - rect.a.lon).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + rect.a.lat.to_radians().cos() * rect.b.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    let d = EARTH_RADIUS_KM * c;
    d * d
}

/// Ground resolution in metres per pixel at a latitude and zoom.
///
/// 156543.03392 m/px is the equatorial resolution of zoom 0.
#[inline]
pub fn ground_resolution(lat: f64, zoom: u8) -> f64 {
    156543.03392 * lat.to_radians().cos() / 2.0_f64.powi(zoom as i32)
}
