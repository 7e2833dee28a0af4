//! Easing curves and frame-rate independent damping.

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    /// Same curve as gsap's `power3.out`.
    OutCubic,
    InOutCubic,
    InOutSine,
    /// `min(1, 1.001 - 2^(-10t))`, the smooth-scroll default.
    OutExpo,
}

impl Ease {
    pub const ALL: [Ease; 9] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::InOutSine,
        Self::OutExpo,
    ];

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
            Self::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
                }
            }
        }
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Exponential decay of `current` toward `target`. Independent of frame rate:
/// two steps of `dt` land where one step of `2 * dt` does.
pub fn damp(current: f64, target: f64, lambda: f64, dt: f64) -> f64 {
    lerp(current, target, 1.0 - (-lambda * dt).exp())
}
