use std::fmt;
use std::str::FromStr;

use super::sources;
use crate::error::VizError;

/// Named visual effect. Each variant owns one vertex/fragment program pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum ShaderVariant {
    Gradient,
    Neon,
    Iridescent,
    Fluid,
    Halftone,
    Glitch,
    Scanline,
    Noise,
    Pixelate,
    Hologram,
    Matrix,
}

/// Variants applied to the extruded glyph mesh.
pub const GLYPH_CATALOG: &[ShaderVariant] = &[
    ShaderVariant::Gradient,
    ShaderVariant::Neon,
    ShaderVariant::Iridescent,
    ShaderVariant::Fluid,
];

/// Variants applied to a textured image plane, in cycling order.
pub const IMAGE_CATALOG: &[ShaderVariant] = &[
    ShaderVariant::Halftone,
    ShaderVariant::Glitch,
    ShaderVariant::Scanline,
    ShaderVariant::Noise,
    ShaderVariant::Pixelate,
    ShaderVariant::Hologram,
    ShaderVariant::Matrix,
];

/// Which uniforms a program reads besides `time`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformSchema {
    pub color: bool,
    pub color2: bool,
    pub resolution: bool,
    pub texture: bool,
}

impl UniformSchema {
    const IMAGE: UniformSchema = UniformSchema {
        color: false,
        color2: false,
        resolution: true,
        texture: true,
    };
    const TINTED: UniformSchema = UniformSchema {
        color: true,
        color2: false,
        resolution: false,
        texture: false,
    };
    const TWO_TONE: UniformSchema = UniformSchema {
        color: true,
        color2: true,
        resolution: false,
        texture: false,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShaderProgram {
    pub vertex: &'static str,
    pub fragment: &'static str,
    pub uniforms: UniformSchema,
}

impl ShaderVariant {
    pub fn name(self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Neon => "neon",
            Self::Iridescent => "iridescent",
            Self::Fluid => "fluid",
            Self::Halftone => "halftone",
            Self::Glitch => "glitch",
            Self::Scanline => "scanline",
            Self::Noise => "noise",
            Self::Pixelate => "pixelate",
            Self::Hologram => "hologram",
            Self::Matrix => "matrix",
        }
    }

    /// True for variants that sample an image texture.
    pub fn is_image(self) -> bool {
        self.uniforms().texture
    }

    pub fn uniforms(self) -> UniformSchema {
        self.program().uniforms
    }

    pub fn program(self) -> ShaderProgram {
        let (vertex, fragment, uniforms) = match self {
            Self::Gradient => (
                sources::GLYPH_VERTEX,
                sources::GRADIENT_FRAGMENT,
                UniformSchema::TWO_TONE,
            ),
            Self::Neon => (
                sources::GLYPH_VERTEX,
                sources::NEON_FRAGMENT,
                UniformSchema::TINTED,
            ),
            Self::Iridescent => (
                sources::GLYPH_VERTEX,
                sources::IRIDESCENT_FRAGMENT,
                UniformSchema::TWO_TONE,
            ),
            Self::Fluid => (
                sources::GLYPH_VERTEX,
                sources::FLUID_FRAGMENT,
                UniformSchema::TWO_TONE,
            ),
            Self::Halftone => (
                sources::IMAGE_VERTEX,
                sources::HALFTONE_FRAGMENT,
                UniformSchema::IMAGE,
            ),
            Self::Glitch => (
                sources::IMAGE_VERTEX,
                sources::GLITCH_FRAGMENT,
                UniformSchema::IMAGE,
            ),
            Self::Scanline => (
                sources::IMAGE_VERTEX,
                sources::SCANLINE_FRAGMENT,
                UniformSchema::IMAGE,
            ),
            Self::Noise => (
                sources::IMAGE_VERTEX,
                sources::NOISE_FRAGMENT,
                UniformSchema::IMAGE,
            ),
            Self::Pixelate => (
                sources::IMAGE_VERTEX,
                sources::PIXELATE_FRAGMENT,
                UniformSchema::IMAGE,
            ),
            Self::Hologram => (
                sources::IMAGE_VERTEX,
                sources::HOLOGRAM_FRAGMENT,
                UniformSchema::IMAGE,
            ),
            Self::Matrix => (
                sources::IMAGE_VERTEX,
                sources::MATRIX_FRAGMENT,
                UniformSchema::IMAGE,
            ),
        };
        ShaderProgram {
            vertex,
            fragment,
            uniforms,
        }
    }
}

impl FromStr for ShaderVariant {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        GLYPH_CATALOG
            .iter()
            .chain(IMAGE_CATALOG)
            .copied()
            .find(|variant| variant.name() == lowered)
            .ok_or_else(|| VizError::UnknownVariant(s.to_string()))
    }
}

impl TryFrom<String> for ShaderVariant {
    type Error = VizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ShaderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
