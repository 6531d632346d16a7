use crate::palette::{Color, Palette};

/// Anything that can hand out a color per pixel.
pub trait RasterImage {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn color_at(&self, x: u32, y: u32) -> Color;
}

impl RasterImage for bmp::Image {
    fn width(&self) -> u32 {
        self.get_width()
    }

    fn height(&self) -> u32 {
        self.get_height()
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        self.get_pixel(x, y).into()
    }
}

/// Palette indices for every pixel of an image, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexGrid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl IndexGrid {
    /// Builds a grid from row-major cells. Returns `None` when the cell count
    /// does not match the dimensions.
    pub fn from_cells(width: u32, height: u32, cells: Vec<u8>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(IndexGrid { width, height, cells })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Rows top to bottom, each left to right. Yields `height` rows even when
    /// the grid is zero pixels wide.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let width = self.width as usize;
        (0..self.height as usize).map(move |y| &self.cells[y * width..(y + 1) * width])
    }

    /// Highest index used, `None` for an empty grid.
    pub fn max_index(&self) -> Option<u8> {
        self.cells.iter().copied().max()
    }
}

/// Maps every pixel to the index of its nearest palette entry.
///
/// Each pixel is compared against every entry in palette order and the first
/// minimal distance is kept, so the result is the same as reducing the full
/// pixels-by-entries distance table with a stable arg-min.
pub fn classify<I: RasterImage + ?Sized>(image: &I, palette: &Palette) -> IndexGrid {
    let width = image.width();
    let height = image.height();
    let mut cells = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            cells.push(palette.nearest(image.color_at(x, y)));
        }
    }
    IndexGrid { width, height, cells }
}
