pub mod classify;
pub mod convert;
pub mod error;
pub mod header;
pub mod palette;
pub mod preview;

pub use classify::{IndexGrid, RasterImage, classify};
pub use convert::{ConvertConfig, ConversionSummary, run};
pub use error::ConvertError;
pub use header::{HeaderBlock, emit_header};
pub use palette::{Color, Palette};
