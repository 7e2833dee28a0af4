use std::f64::consts::TAU;

use crate::theme::Palette;

/// Per-instance clock feeding the `time` uniform. Owned by exactly one
/// mounted visual and never reset by a variant swap.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationUniformState {
    pub elapsed: f64,
    pub phases: Phases,
}

/// Oscillation phases derived from `elapsed`, in radians wrapped to `[0, 2π)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Phases {
    /// 1.5 rad/s, drives the glyph bob.
    pub bob: f64,
    /// 0.5 rad/s, drives the glyph tilt.
    pub tilt: f64,
    /// 3.0 rad/s, drives the halftone threshold wobble.
    pub pulse: f64,
}

impl AnimationUniformState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        self.elapsed += dt;
        self.phases = Phases {
            bob: (self.elapsed * 1.5) % TAU,
            tilt: (self.elapsed * 0.5) % TAU,
            pulse: (self.elapsed * 3.0) % TAU,
        };
    }

    pub fn uniforms(&self, palette: &Palette, resolution: [f32; 2]) -> UniformValues {
        UniformValues {
            time: self.elapsed as f32,
            color: palette.primary.to_rgb_f32(),
            color2: palette.secondary.to_rgb_f32(),
            resolution,
        }
    }
}

/// Values uploaded for one draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformValues {
    pub time: f32,
    pub color: [f32; 3],
    pub color2: [f32; 3],
    pub resolution: [f32; 2],
}
