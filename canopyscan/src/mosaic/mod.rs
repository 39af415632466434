//! Mosaic canvas assembly.
//!
//! Composites processed tiles into one large image. The canvas is
//! allocated up front from the tile grid's pixel dimensions and each
//! tile writes a disjoint 256×256 region, so paste order never
//! affects the output and failed tiles simply leave their region
//! background-filled (black).

use image::{imageops, RgbImage};

use crate::coord::{TileCoord, TileGrid, TILE_SIZE};

/// Pixel canvas for a tile grid mosaic.
///
/// Dimensions are exactly `grid.width() * 256` by `grid.height() * 256`.
/// The freshly allocated buffer is zero-filled, i.e. black.
pub struct MosaicCanvas {
    grid: TileGrid,
    image: RgbImage,
}

impl MosaicCanvas {
    /// Allocates a blank canvas sized to the grid.
    pub fn new(grid: &TileGrid) -> Self {
        Self {
            grid: *grid,
            image: RgbImage::new(grid.pixel_width(), grid.pixel_height()),
        }
    }

    /// Pastes a processed tile image at its grid position.
    ///
    /// The region is determined solely by the tile coordinate relative
    /// to the grid origin. The tile image is cropped to the 256×256
    /// footprint first, so an oversized image can never bleed into a
    /// neighbor's region.
    pub fn paste(&mut self, tile: &TileCoord, tile_image: &RgbImage) {
        let (px, py) = self.grid.pixel_offset(tile);
        let region = imageops::crop_imm(tile_image, 0, 0, TILE_SIZE, TILE_SIZE);
        imageops::replace(&mut self.image, &*region, px as i64, py as i64);
    }

    /// Canvas width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Borrow the canvas pixels.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consumes the canvas, returning the composed image.
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn grid(w: u32, h: u32) -> TileGrid {
        TileGrid {
            x_min: 100,
            x_max: 100 + w - 1,
            y_min: 200,
            y_max: 200 + h - 1,
            zoom: 18,
        }
    }

    fn solid_tile(value: u8) -> RgbImage {
        RgbImage::from_pixel(TILE_SIZE, TILE_SIZE, Rgb([value, value, value]))
    }

    #[test]
    fn test_canvas_dimensions_match_grid() {
        for (w, h) in [(1, 1), (3, 2), (10, 10)] {
            let canvas = MosaicCanvas::new(&grid(w, h));
            assert_eq!(canvas.dimensions(), (w * 256, h * 256));
        }
    }

    #[test]
    fn test_new_canvas_is_black() {
        let canvas = MosaicCanvas::new(&grid(2, 2));
        assert!(canvas.image().pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_paste_writes_only_its_region() {
        let g = grid(2, 2);
        let mut canvas = MosaicCanvas::new(&g);

        // Southeast tile of the 2×2 grid
        canvas.paste(&TileCoord::new(101, 201, 18), &solid_tile(255));

        let image = canvas.image();
        assert_eq!(image.get_pixel(256, 256).0, [255, 255, 255]);
        assert_eq!(image.get_pixel(511, 511).0, [255, 255, 255]);

        // The other three regions stay background
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(511, 0).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(0, 511).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(255, 255).0, [0, 0, 0]);
    }

    #[test]
    fn test_paste_order_does_not_matter() {
        let g = grid(2, 1);

        let mut forward = MosaicCanvas::new(&g);
        forward.paste(&TileCoord::new(100, 200, 18), &solid_tile(10));
        forward.paste(&TileCoord::new(101, 200, 18), &solid_tile(20));

        let mut reverse = MosaicCanvas::new(&g);
        reverse.paste(&TileCoord::new(101, 200, 18), &solid_tile(20));
        reverse.paste(&TileCoord::new(100, 200, 18), &solid_tile(10));

        assert_eq!(forward.into_image().as_raw(), reverse.into_image().as_raw());
    }

    #[test]
    fn test_full_grid_coverage() {
        let g = grid(3, 3);
        let mut canvas = MosaicCanvas::new(&g);

        for tile in g.iter() {
            canvas.paste(&tile, &solid_tile(42));
        }

        assert!(canvas.image().pixels().all(|p| p.0 == [42, 42, 42]));
    }

    #[test]
    fn test_oversized_tile_is_clipped() {
        let g = grid(1, 1);
        let mut canvas = MosaicCanvas::new(&g);

        let oversized = RgbImage::from_pixel(512, 512, Rgb([9, 9, 9]));
        canvas.paste(&TileCoord::new(100, 200, 18), &oversized);

        assert_eq!(canvas.dimensions(), (256, 256));
        assert!(canvas.image().pixels().all(|p| p.0 == [9, 9, 9]));
    }

    #[test]
    fn test_oversized_tile_cannot_bleed_into_neighbors() {
        let g = grid(2, 2);
        let mut canvas = MosaicCanvas::new(&g);

        // Oversized image pasted as the northwest tile of a 2×2 grid
        let oversized = RgbImage::from_pixel(512, 512, Rgb([9, 9, 9]));
        canvas.paste(&TileCoord::new(100, 200, 18), &oversized);

        let image = canvas.image();
        assert_eq!(image.get_pixel(255, 255).0, [9, 9, 9]);

        // East, south, and southeast regions stay background
        assert_eq!(image.get_pixel(256, 0).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(0, 256).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(256, 256).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(511, 511).0, [0, 0, 0]);
    }
}
