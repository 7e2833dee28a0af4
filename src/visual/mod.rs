//! Shader-driven decorative visuals: the variant catalog, per-frame uniform
//! state, variant cycling and the geometry each visual draws.

mod cycle;
mod motion;
mod plane;
mod sources;
mod tunnel;
mod uniforms;
mod variant;

pub use cycle::{Cycle, VariantCycler};
pub use motion::{GlyphMotion, GlyphPose};
pub use plane::{cover_plane, plane_vertices, PlaneSize, Viewport};
pub use sources::{TUNNEL_FRAGMENT, TUNNEL_VERTEX};
pub use tunnel::{tunnel_colors, tunnel_lines, tunnel_offset, TunnelConfig, MAX_TUNNEL_SEGMENTS};
pub use uniforms::{AnimationUniformState, Phases, UniformValues};
pub use variant::{ShaderProgram, ShaderVariant, UniformSchema, GLYPH_CATALOG, IMAGE_CATALOG};

use crate::glyph::GlyphLayout;

/// Defaults for the shader-cycled image.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ImageVisualConfig {
    pub src: String,
    pub interval_ms: f64,
    pub initial: usize,
    pub fov_deg: f64,
    pub camera_distance: f64,
}

impl Default for ImageVisualConfig {
    fn default() -> Self {
        Self {
            src: String::new(),
            interval_ms: 200.0,
            initial: 0,
            fov_deg: 50.0,
            camera_distance: 5.0,
        }
    }
}

impl ImageVisualConfig {
    pub fn cycler(&self) -> crate::VizResult<VariantCycler> {
        VariantCycler::new(IMAGE_CATALOG, self.initial, Cycle::Every(self.interval_ms))
    }
}

/// Defaults for the rotating glyph. Cycling is dormant: the variant is fixed.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct GlyphVisualConfig {
    pub font: String,
    pub text: String,
    pub variant: ShaderVariant,
    pub layout: GlyphLayout,
    pub motion: GlyphMotion,
    pub fov_deg: f64,
    pub camera_distance: f64,
}

impl Default for GlyphVisualConfig {
    fn default() -> Self {
        Self {
            font: "fonts/JetBrainsMono-Bold.json".to_string(),
            text: "<br>".to_string(),
            variant: ShaderVariant::Gradient,
            layout: GlyphLayout::default(),
            motion: GlyphMotion::default(),
            fov_deg: 60.0,
            camera_distance: 6.0,
        }
    }
}

impl GlyphVisualConfig {
    pub fn cycler(&self) -> crate::VizResult<VariantCycler> {
        VariantCycler::fixed(GLYPH_CATALOG, self.variant)
    }
}
