//! Rectangular wireframe tunnel scrolling toward the camera.

use crate::error::{VizError, VizResult};
use crate::theme::{Color, Palette};

/// Upper bound on line segments a tunnel may build.
pub const MAX_TUNNEL_SEGMENTS: usize = 20_000;

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct TunnelConfig {
    pub spacing: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// World units per second.
    pub speed: f64,
    pub fov_deg: f64,
    /// Distance at which fog starts; it is complete at `depth`.
    pub fog_near: f64,
}

impl Default for TunnelConfig {
    fn default() -> Self {
        Self {
            spacing: 2.0,
            width: 20.0,
            height: 20.0,
            depth: 100.0,
            speed: 2.0,
            fov_deg: 75.0,
            fog_near: 5.0,
        }
    }
}

impl TunnelConfig {
    /// Segments [`tunnel_lines`] would emit, computed without building them.
    pub fn segment_count(&self) -> f64 {
        let count = |span: f64| (span / self.spacing + 1e-9).floor() + 1.0;
        2.0 * count(self.width) + 2.0 * count(self.height) + 4.0 * count(self.depth)
    }

    pub fn validate(&self) -> VizResult<()> {
        if !(self.spacing > 0.0) || !self.spacing.is_finite() {
            return Err(VizError::config(format!("tunnel spacing must be positive, got {}", self.spacing)));
        }
        for (name, value) in [("width", self.width), ("height", self.height), ("depth", self.depth)] {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(VizError::config(format!("tunnel {name} must be non-negative, got {value}")));
            }
        }
        let segments = self.segment_count();
        if segments > MAX_TUNNEL_SEGMENTS as f64 {
            return Err(VizError::config(format!(
                "tunnel would need {segments} segments, limit is {MAX_TUNNEL_SEGMENTS}"
            )));
        }
        Ok(())
    }
}

/// Steps `start, start + step, ...` while not past `end` (with a small
/// tolerance so the far edge is included despite float drift).
fn steps(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 {
        ((end - start) / step + 1e-9).floor() as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| start + i as f64 * step)
}

/// Line-list vertices: every consecutive pair is one segment.
pub fn tunnel_lines(config: &TunnelConfig) -> Vec<[f32; 3]> {
    let hw = config.width / 2.0;
    let hh = config.height / 2.0;
    let d = -config.depth;
    let mut points = Vec::new();
    let mut seg = |a: [f64; 3], b: [f64; 3]| {
        points.push([a[0] as f32, a[1] as f32, a[2] as f32]);
        points.push([b[0] as f32, b[1] as f32, b[2] as f32]);
    };

    // Rails along Z on ceiling and floor.
    for x in steps(-hw, hw, config.spacing) {
        seg([x, hh, 0.0], [x, hh, d]);
        seg([x, -hh, 0.0], [x, -hh, d]);
    }
    // Rails along Z on the walls.
    for y in steps(-hh, hh, config.spacing) {
        seg([hw, y, 0.0], [hw, y, d]);
        seg([-hw, y, 0.0], [-hw, y, d]);
    }
    // Cross-section rings.
    for i in steps(0.0, config.depth, config.spacing) {
        let z = -i;
        seg([-hw, hh, z], [hw, hh, z]);
        seg([-hw, -hh, z], [hw, -hh, z]);
        seg([-hw, -hh, z], [-hw, hh, z]);
        seg([hw, -hh, z], [hw, hh, z]);
    }
    points
}

/// Z translation after `elapsed` seconds. Wraps every `spacing` so the
/// finite grid reads as endless.
pub fn tunnel_offset(elapsed: f64, config: &TunnelConfig) -> f64 {
    if config.spacing <= 0.0 {
        return 0.0;
    }
    (elapsed * config.speed).rem_euclid(config.spacing)
}

/// Line and fog/background colors for the active palette.
pub fn tunnel_colors(palette: &Palette) -> (Color, Color) {
    (palette.muted, palette.background)
}
