use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::classify::{IndexGrid, classify};
use crate::error::ConvertError;
use crate::header::{HEADER_GUARD, HeaderBlock, emit_header};
use crate::palette::Palette;
use crate::preview::save_previews;

pub const FONT_LABEL: &str = "DATA_BITMAP_FONT";
pub const GFX_LABEL: &str = "DATA_BITMAP_GFX";

/// Where the sheets live and where the header goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertConfig {
    pub font_path: PathBuf,
    pub gfx_path: PathBuf,
    pub output_path: PathBuf,
    /// When set, preview bitmaps of both grids are written here.
    pub preview_dir: Option<PathBuf>,
}

impl ConvertConfig {
    /// `font.bmp` and `gfx.bmp` from `data_dir`.
    pub fn from_data_dir(data_dir: &Path, output_path: PathBuf) -> Self {
        ConvertConfig {
            font_path: data_dir.join("font.bmp"),
            gfx_path: data_dir.join("gfx.bmp"),
            output_path,
            preview_dir: None,
        }
    }

    /// The source checkout this binary was built from. `CARGO_MANIFEST_DIR` is
    /// fixed at compile time, so a moved binary still resolves its default
    /// paths against the build tree.
    pub fn project_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    pub fn default_data_dir() -> PathBuf {
        Self::project_root().join("libs").join("ccleste").join("data")
    }

    pub fn default_output_path() -> PathBuf {
        Self::project_root().join("bitmap_data.h")
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::from_data_dir(&Self::default_data_dir(), Self::default_output_path())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionSummary {
    pub font: IndexGrid,
    pub gfx: IndexGrid,
    pub output_path: PathBuf,
    pub preview_paths: Vec<PathBuf>,
}

pub fn load_image(path: &Path) -> Result<bmp::Image, ConvertError> {
    let img = bmp::open(path).map_err(|source| ConvertError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} ({}x{})", path.display(), img.get_width(), img.get_height());
    Ok(img)
}

/// Replaces `path` with `contents` through a temporary file in the same
/// directory, so readers see either the old file or the complete new one.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ConvertError> {
    let write_err = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}

/// Loads both sheets, classifies them against their palettes and writes the
/// header. Nothing is written unless both sheets decode.
pub fn run(config: &ConvertConfig) -> Result<ConversionSummary, ConvertError> {
    let font_img = load_image(&config.font_path)?;
    let gfx_img = load_image(&config.gfx_path)?;

    let font_palette = Palette::font();
    let gfx_palette = Palette::gfx();
    debug!(
        "Classifying against {} font colors and {} gfx colors",
        font_palette.len(),
        gfx_palette.len()
    );

    let font = classify(&font_img, &font_palette);
    let gfx = classify(&gfx_img, &gfx_palette);
    for (label, grid) in [(FONT_LABEL, &font), (GFX_LABEL, &gfx)] {
        match grid.max_index() {
            Some(max) => debug!("{label}: {}x{}, highest index {max}", grid.width(), grid.height()),
            None => debug!("{label}: empty sheet"),
        }
    }

    let text = emit_header(
        HEADER_GUARD,
        &[HeaderBlock::new(FONT_LABEL, &font), HeaderBlock::new(GFX_LABEL, &gfx)],
    );
    write_atomic(&config.output_path, text.as_bytes())?;
    info!("Wrote {}", config.output_path.display());

    let mut preview_paths = Vec::new();
    if let Some(dir) = &config.preview_dir {
        preview_paths.extend(save_previews(dir, FONT_LABEL, &font, &font_palette)?);
        preview_paths.extend(save_previews(dir, GFX_LABEL, &gfx, &gfx_palette)?);
    }

    Ok(ConversionSummary {
        font,
        gfx,
        output_path: config.output_path.clone(),
        preview_paths,
    })
}
