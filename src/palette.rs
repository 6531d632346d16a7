use crate::error::ConvertError;

/// A 24-bit color with channels stored blue, green, red.
///
/// This is the order the sheets have always been classified in, so the palette
/// constants below are written in it too. A pixel and a palette entry must share
/// the order or the nearest-color search silently picks the wrong entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Color {
    pub const fn bgr(b: u8, g: u8, r: u8) -> Self {
        Color { b, g, r }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { b, g, r }
    }

    fn channels(&self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    /// Manhattan distance: the sum of absolute per-channel differences.
    ///
    /// Differences are taken in i16 so that 0x00 - 0xff is -255 rather than a
    /// wrapped byte.
    pub fn distance(&self, other: &Color) -> u32 {
        self.channels()
            .iter()
            .zip(other.channels())
            .map(|(&a, b)| (i16::from(a) - i16::from(b)).unsigned_abs() as u32)
            .sum()
    }
}

impl From<bmp::Pixel> for Color {
    fn from(pixel: bmp::Pixel) -> Self {
        Color::rgb(pixel.r, pixel.g, pixel.b)
    }
}

impl From<Color> for bmp::Pixel {
    fn from(color: Color) -> Self {
        bmp::Pixel::new(color.r, color.g, color.b)
    }
}

const FONT_COLORS: [Color; 2] = [Color::bgr(0x00, 0x00, 0x00), Color::bgr(0xff, 0xff, 0xff)];

const GFX_COLORS: [Color; 16] = [
    Color::bgr(0x00, 0x00, 0x00), Color::bgr(0x53, 0x2b, 0x1d), Color::bgr(0x53, 0x25, 0x7e), Color::bgr(0x51, 0x87, 0x00),
    Color::bgr(0x36, 0x52, 0xab), Color::bgr(0x4f, 0x57, 0x5f), Color::bgr(0xc7, 0xc3, 0xc2), Color::bgr(0xe8, 0xf1, 0xff),
    Color::bgr(0x4d, 0x00, 0xff), Color::bgr(0x00, 0xa3, 0xff), Color::bgr(0x27, 0xec, 0xff), Color::bgr(0x36, 0xe4, 0x00),
    Color::bgr(0xff, 0xad, 0x29), Color::bgr(0x9c, 0x76, 0x83), Color::bgr(0xa8, 0x77, 0xff), Color::bgr(0xaa, 0xcc, 0xff),
];

/// An ordered list of reference colors. The position of a color is the index
/// written for every pixel that lands on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, ConvertError> {
        if colors.is_empty() {
            return Err(ConvertError::EmptyPalette);
        }
        if colors.len() > usize::from(u8::MAX) + 1 {
            return Err(ConvertError::PaletteTooLarge { len: colors.len() });
        }
        Ok(Palette { colors })
    }

    /// Two entries for the monochrome font sheet: black, white.
    pub fn font() -> Self {
        Palette { colors: FONT_COLORS.to_vec() }
    }

    /// The sixteen colors of the graphics sheet.
    pub fn gfx() -> Self {
        Palette { colors: GFX_COLORS.to_vec() }
    }

    /// Never zero, `Palette::new` rejects empty lists.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn get(&self, index: u8) -> Option<Color> {
        self.colors.get(usize::from(index)).copied()
    }

    /// Index of the entry closest to `color`. On a tie the lowest index wins,
    /// which is why the comparison is strict.
    pub fn nearest(&self, color: Color) -> u8 {
        let mut best_index = 0usize;
        let mut best_distance = u32::MAX;
        for (index, candidate) in self.colors.iter().enumerate() {
            let distance = candidate.distance(&color);
            if distance < best_distance {
                best_distance = distance;
                best_index = index;
            }
        }
        // Palette::new caps the length at 256.
        best_index as u8
    }
}
