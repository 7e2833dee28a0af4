use glam::{Mat4, Quat, Vec3};

/// Cosmetic spin-and-float for the glyph mesh.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct GlyphMotion {
    /// Spin rate in units of 0.6 rad/s (0.01 rad per 60 Hz frame).
    pub rotation_speed: f64,
    pub float_intensity: f64,
}

impl Default for GlyphMotion {
    fn default() -> Self {
        Self {
            rotation_speed: 0.3,
            float_intensity: 0.15,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPose {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub y: f64,
}

impl GlyphMotion {
    /// Pose after `elapsed` seconds of real time, independent of frame rate.
    pub fn pose(&self, elapsed: f64) -> GlyphPose {
        GlyphPose {
            rotation_x: (elapsed * 0.5).sin() * 0.1,
            rotation_y: self.rotation_speed * 0.6 * elapsed,
            y: (elapsed * 1.5).sin() * self.float_intensity,
        }
    }
}

impl GlyphPose {
    pub fn model_matrix(&self) -> Mat4 {
        // Tilt is applied in world space on top of the spin.
        let rotation = Quat::from_rotation_x(self.rotation_x as f32)
            * Quat::from_rotation_y(self.rotation_y as f32);
        Mat4::from_rotation_translation(rotation, Vec3::new(0.0, self.y as f32, 0.0))
    }
}
