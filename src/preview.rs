use std::path::{Path, PathBuf};

use bmp::{Image, Pixel, px};
use log::debug;

use crate::classify::IndexGrid;
use crate::error::ConvertError;
use crate::palette::Palette;

const SWATCH_COLS: usize = 16;
const SWATCH_BOX_PX: usize = 16;
const SWATCH_BORDER_PX: usize = 1;

/// Paints a classified grid back through its palette, so the result can be
/// compared against the source sheet by eye.
///
/// Cells that fall outside the palette are painted bright green to flag them.
pub fn render_grid(grid: &IndexGrid, palette: &Palette) -> Image {
    let mut img = Image::new(grid.width(), grid.height());
    for (x, y) in img.coordinates() {
        let pixel = grid
            .get(x, y)
            .and_then(|index| palette.get(index))
            .map(Pixel::from)
            .unwrap_or(px!(0, 255, 0));
        img.set_pixel(x, y, pixel);
    }
    img
}

/// Lays the palette out as rows of 16 boxes with a 1 px black border, in
/// index order from the top left.
pub fn palette_swatch(palette: &Palette) -> Image {
    let palette_size = palette.len();
    let box_rows = palette_size.div_ceil(SWATCH_COLS);

    let width = (SWATCH_COLS * (SWATCH_BOX_PX + SWATCH_BORDER_PX) + SWATCH_BORDER_PX) as u32;
    let height = (box_rows * (SWATCH_BOX_PX + SWATCH_BORDER_PX) + SWATCH_BORDER_PX) as u32;

    let mut img = Image::new(width, height);

    for (index, color) in palette.colors().iter().enumerate() {
        let row = index / SWATCH_COLS;
        let col = index % SWATCH_COLS;
        let xmin = SWATCH_BORDER_PX * (col + 1) + SWATCH_BOX_PX * col;
        let ymin = SWATCH_BORDER_PX * (row + 1) + SWATCH_BOX_PX * row;
        draw_box(&mut img, xmin as u32, ymin as u32, SWATCH_BOX_PX as u32, (*color).into());
    }
    img
}

fn draw_box(img: &mut Image, xmin: u32, ymin: u32, side: u32, color: Pixel) {
    for y in ymin..ymin + side {
        for x in xmin..xmin + side {
            img.set_pixel(x, y, color);
        }
    }
}

/// Writes `<LABEL>_PREVIEW.BMP` and `<LABEL>_PAL.BMP` into `dir` and returns
/// their paths.
pub fn save_previews(
    dir: &Path,
    label: &str,
    grid: &IndexGrid,
    palette: &Palette,
) -> Result<Vec<PathBuf>, ConvertError> {
    let preview_path = dir.join(format!("{label}_PREVIEW.BMP"));
    let swatch_path = dir.join(format!("{label}_PAL.BMP"));

    for (path, img) in [
        (&preview_path, render_grid(grid, palette)),
        (&swatch_path, palette_swatch(palette)),
    ] {
        debug!("Writing out preview {}", path.display());
        img.save(path).map_err(|source| ConvertError::Write {
            path: path.clone(),
            source,
        })?;
    }
    Ok(vec![preview_path, swatch_path])
}
