use band_palette::{BandPalette, ParseColorError, Rgb};
use serde::{Deserialize, Serialize};

/// Ordered palette extracted from an image, top of the image first.
///
/// `dominant` is always the color at index `len / 2`; it is derived, never
/// stored independently, so the two fields cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PaletteRepr", into = "PaletteRepr")]
pub struct ColorPalette {
    colors: Vec<Rgb>,
}

/// Wire form: hex strings
#[derive(Serialize, Deserialize)]
struct PaletteRepr {
    colors: Vec<String>,
    #[serde(default)]
    dominant: Option<String>,
}

impl ColorPalette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Parse a palette from hex strings such as `"#ff8800"`.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, ParseColorError> {
        colors
            .iter()
            .map(|c| c.as_ref().parse::<Rgb>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Colors as lowercase `#rrggbb` strings.
    pub fn hex_colors(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }

    /// The middle-index color (`colors[len / 2]`), white for an empty palette.
    pub fn dominant(&self) -> Rgb {
        self.colors
            .get(self.colors.len() / 2)
            .copied()
            .unwrap_or(Rgb::WHITE)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl From<BandPalette> for ColorPalette {
    fn from(palette: BandPalette) -> Self {
        Self::new(palette.into_colors())
    }
}

impl From<ColorPalette> for PaletteRepr {
    fn from(palette: ColorPalette) -> Self {
        Self {
            dominant: Some(palette.dominant().to_hex()),
            colors: palette.hex_colors(),
        }
    }
}

impl TryFrom<PaletteRepr> for ColorPalette {
    type Error = ParseColorError;

    /// The incoming `dominant` is ignored and recomputed from `colors`.
    fn try_from(repr: PaletteRepr) -> Result<Self, Self::Error> {
        Self::from_hex(&repr.colors)
    }
}
