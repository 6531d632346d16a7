use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not decode image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: bmp::BmpError,
    },
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("palette has {len} colors, at most 256 fit in an 8-bit cell")]
    PaletteTooLarge { len: usize },
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
