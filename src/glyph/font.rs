use std::collections::HashMap;

use super::outline::{parse_outline, PathCommand};
use crate::error::{VizError, VizResult};

/// Glyph outline font as emitted by the offline font converter. All
/// coordinates are prescaled to `resolution` units per em.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct GlyphFont {
    pub glyphs: HashMap<String, GlyphData>,
    #[serde(rename = "familyName", default)]
    pub family_name: String,
    #[serde(default)]
    pub ascender: f64,
    #[serde(default)]
    pub descender: f64,
    #[serde(rename = "underlineThickness", default)]
    pub underline_thickness: f64,
    #[serde(rename = "boundingBox", default)]
    pub bounding_box: BoundingBox,
    pub resolution: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct GlyphData {
    /// Horizontal advance.
    pub ha: f64,
    #[serde(default)]
    pub x_min: f64,
    #[serde(default)]
    pub x_max: f64,
    /// Outline command string.
    #[serde(default)]
    pub o: String,
}

impl GlyphData {
    pub fn outline(&self) -> VizResult<Vec<PathCommand>> {
        parse_outline(&self.o)
    }
}

impl GlyphFont {
    pub fn from_json(json: &str) -> VizResult<Self> {
        let font: GlyphFont = serde_json::from_str(json)
            .map_err(|err| VizError::glyph(format!("invalid glyph font: {err}")))?;
        if !(font.resolution > 0.0) {
            return Err(VizError::glyph(format!(
                "resolution must be positive, got {}",
                font.resolution
            )));
        }
        Ok(font)
    }

    pub fn glyph(&self, ch: char) -> Option<&GlyphData> {
        let mut buf = [0u8; 4];
        self.glyphs.get(&*ch.encode_utf8(&mut buf))
    }

    /// Line height in font units.
    pub fn line_height(&self) -> f64 {
        self.bounding_box.y_max - self.bounding_box.y_min + self.underline_thickness
    }
}
