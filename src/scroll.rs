//! Smoothed, inertial page scrolling.
//!
//! Native wheel and touch deltas only move [`ScrollState::target`]; the
//! visible offset follows it in [`ScrollController::advance`], which the host
//! calls once per display frame with the real frame delta.

use crate::ease::{damp, lerp, Ease};

/// Offsets closer than this to the target snap onto it.
const SNAP_EPSILON: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "kebab-case", tag = "mode")]
pub enum Smoothing {
    /// Eases from the offset at input time to the target over a fixed
    /// duration.
    Duration { seconds: f64, ease: Ease },
    /// Exponential decay toward the target; `lerp` is the fraction covered
    /// per 60 Hz frame.
    Damp { lerp: f64 },
}

impl Default for Smoothing {
    fn default() -> Self {
        Self::Duration {
            seconds: 1.2,
            ease: Ease::OutExpo,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub smoothing: Smoothing,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    pub smooth_touch: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smoothing: Smoothing::default(),
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
            smooth_touch: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub current: f64,
    pub velocity: f64,
    pub target: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    Idle,
    Down,
    Up,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    elapsed: f64,
}

#[derive(Clone, Debug)]
pub struct ScrollController {
    config: ScrollConfig,
    state: ScrollState,
    limit: f64,
    tween: Option<Tween>,
    direction: ScrollDirection,
}

impl ScrollController {
    pub fn new(config: ScrollConfig, limit: f64) -> Self {
        Self {
            config,
            state: ScrollState::default(),
            limit: limit.max(0.0),
            tween: None,
            direction: ScrollDirection::Idle,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Offset produced by the latest integration step.
    pub fn offset(&self) -> f64 {
        self.state.current
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn is_settled(&self) -> bool {
        self.state.current == self.state.target
    }

    /// Updates the scrollable range, e.g. after a resize. Offsets beyond the
    /// new limit are pulled back immediately.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.state.target = self.clamp(self.state.target);
        if self.state.current > self.limit {
            self.state.current = self.limit;
            self.tween = None;
        }
    }

    pub fn on_wheel(&mut self, delta: f64) {
        let target = self.state.target + delta * self.config.wheel_multiplier;
        self.retarget(target);
    }

    pub fn on_touch(&mut self, delta: f64) {
        let target = self.state.target + delta * self.config.touch_multiplier;
        if self.config.smooth_touch {
            self.retarget(target);
        } else {
            self.jump(target);
        }
    }

    pub fn scroll_to(&mut self, offset: f64, immediate: bool) {
        if immediate {
            self.jump(offset);
        } else {
            self.retarget(offset);
        }
    }

    /// Integrates one display frame of `dt` seconds and returns the new
    /// offset.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let previous = self.state.current;
        let target = self.state.target;

        let next = match (self.config.smoothing, self.tween.as_mut()) {
            (_, None) => target,
            (Smoothing::Duration { seconds, ease }, Some(tween)) => {
                tween.elapsed += dt;
                if seconds <= 0.0 || tween.elapsed >= seconds {
                    target
                } else {
                    lerp(tween.from, target, ease.apply(tween.elapsed / seconds))
                }
            }
            (Smoothing::Damp { lerp }, Some(_)) => damp(previous, target, lerp * 60.0, dt),
        };

        let next = if (target - next).abs() < SNAP_EPSILON {
            target
        } else {
            next
        };
        if next == target {
            self.tween = None;
        }

        self.state.current = next;
        self.state.velocity = if dt > 0.0 { (next - previous) / dt } else { 0.0 };
        self.direction = if next > previous {
            ScrollDirection::Down
        } else if next < previous {
            ScrollDirection::Up
        } else {
            ScrollDirection::Idle
        };
        next
    }

    fn retarget(&mut self, target: f64) {
        let target = self.clamp(target);
        if target == self.state.target && self.tween.is_some() {
            return;
        }
        self.state.target = target;
        self.tween = Some(Tween {
            from: self.state.current,
            elapsed: 0.0,
        });
    }

    fn jump(&mut self, offset: f64) {
        let offset = self.clamp(offset);
        self.state.target = offset;
        self.state.current = offset;
        self.state.velocity = 0.0;
        self.tween = None;
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.limit)
    }
}
