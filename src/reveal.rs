//! Play-once reveal transitions bound to scroll position.

use std::str::FromStr;

use crate::ease::{lerp, Ease};
use crate::error::VizError;

/// Visual state applied to an element: opacity, translation in pixels and
/// uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn lerp(self, to: Pose, t: f64) -> Pose {
        Pose {
            opacity: lerp(self.opacity, to.opacity, t),
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            scale: lerp(self.scale, to.scale, t),
        }
    }

    /// CSS `transform` value for this pose.
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) scale({:.4})",
            self.x, self.y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealKind {
    Fade,
    FadeUp,
    FadeDown,
    SlideLeft,
    SlideRight,
    Scale,
}

impl RevealKind {
    /// Starting pose and duration (seconds) for the tag.
    pub fn transition(self) -> Transition {
        let hidden = Pose {
            opacity: 0.0,
            ..Pose::IDENTITY
        };
        let (from, duration) = match self {
            Self::Fade => (hidden, 0.8),
            Self::FadeUp => (Pose { y: 100.0, ..hidden }, 0.8),
            Self::FadeDown => (Pose { y: -50.0, ..hidden }, 0.8),
            Self::SlideLeft => (Pose { x: -50.0, ..hidden }, 0.8),
            Self::SlideRight => (Pose { x: 50.0, ..hidden }, 0.8),
            Self::Scale => (Pose { scale: 0.5, ..hidden }, 0.6),
        };
        Transition {
            from,
            duration,
            delay: 0.0,
            ease: Ease::OutCubic,
        }
    }
}

impl FromStr for RevealKind {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fade" => Ok(Self::Fade),
            "fade-up" => Ok(Self::FadeUp),
            "fade-down" => Ok(Self::FadeDown),
            "slide-left" => Ok(Self::SlideLeft),
            "slide-right" => Ok(Self::SlideRight),
            "scale" => Ok(Self::Scale),
            other => Err(VizError::UnknownTransition(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: Pose,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Transition {
    /// Pose `elapsed` seconds after the trigger fired, delay included.
    pub fn sample(&self, elapsed: f64) -> Pose {
        let t = elapsed - self.delay;
        if t <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 || t >= self.duration {
            return Pose::IDENTITY;
        }
        self.from.lerp(Pose::IDENTITY, self.ease.apply(t / self.duration))
    }

    pub fn total(&self) -> f64 {
        self.delay + self.duration
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Fraction of the viewport height, measured from its top, that an
    /// element's top edge must reach (`0.8` reads as "top 80%").
    pub start: f64,
    /// Delay added per stagger index, in seconds.
    pub stagger_unit: f64,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            start: 0.8,
            stagger_unit: 0.2,
        }
    }
}

/// Trigger line as a fraction of the viewport height. Parses a bare
/// fraction (`0.9`), a percentage (`90%`) or a `top <position>` pair where
/// position is a percentage or one of `top`, `center`, `bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerStart(pub f64);

impl FromStr for TriggerStart {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let position = raw.strip_prefix("top").map(str::trim).unwrap_or(raw);
        let fraction = match position {
            "top" => Some(0.0),
            "center" => Some(0.5),
            "bottom" => Some(1.0),
            other => match other.strip_suffix('%') {
                Some(percent) => percent.trim().parse::<f64>().ok().map(|p| p / 100.0),
                None => other.parse::<f64>().ok(),
            },
        };
        match fraction {
            Some(f) if f.is_finite() => Ok(Self(f)),
            _ => Err(VizError::config(format!("bad reveal start {raw:?}"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealId(usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealPhase {
    Pending,
    Playing { elapsed: f64 },
    Done,
}

#[derive(Clone, Debug)]
struct Entry {
    top: f64,
    start: f64,
    transition: Transition,
    phase: RevealPhase,
}

#[derive(Clone, Debug, Default)]
pub struct SectionAnimator {
    config: TriggerConfig,
    entries: Vec<Entry>,
}

impl SectionAnimator {
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Registers an element whose top edge sits at `top` in document
    /// coordinates.
    pub fn register(&mut self, top: f64, kind: RevealKind, stagger_index: usize) -> RevealId {
        let mut transition = kind.transition();
        transition.delay += stagger_index as f64 * self.config.stagger_unit;
        self.register_transition(top, transition)
    }

    pub fn register_transition(&mut self, top: f64, transition: Transition) -> RevealId {
        self.entries.push(Entry {
            top,
            start: self.config.start,
            transition,
            phase: RevealPhase::Pending,
        });
        RevealId(self.entries.len() - 1)
    }

    /// Moves an element, e.g. after layout changed. Started reveals are
    /// unaffected.
    pub fn set_top(&mut self, id: RevealId, top: f64) {
        if let Some(entry) = self.entries.get_mut(id.0) {
            entry.top = top;
        }
    }

    /// Overrides the trigger line of one element.
    pub fn set_start(&mut self, id: RevealId, start: TriggerStart) {
        if let Some(entry) = self.entries.get_mut(id.0) {
            entry.start = start.0;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Starts every pending reveal whose element crossed the trigger line.
    /// Returns the ids started by this call.
    pub fn observe(&mut self, scroll: f64, viewport_height: f64) -> Vec<RevealId> {
        let mut started = Vec::new();
        for (index, entry) in self.entries.iter_mut().enumerate() {
            let line = scroll + entry.start * viewport_height;
            if entry.phase == RevealPhase::Pending && entry.top <= line {
                entry.phase = RevealPhase::Playing { elapsed: 0.0 };
                started.push(RevealId(index));
            }
        }
        started
    }

    pub fn advance(&mut self, dt: f64) {
        for entry in &mut self.entries {
            if let RevealPhase::Playing { elapsed } = entry.phase {
                let elapsed = elapsed + dt;
                entry.phase = if elapsed >= entry.transition.total() {
                    RevealPhase::Done
                } else {
                    RevealPhase::Playing { elapsed }
                };
            }
        }
    }

    pub fn phase(&self, id: RevealId) -> Option<RevealPhase> {
        self.entries.get(id.0).map(|entry| entry.phase)
    }

    pub fn pose(&self, id: RevealId) -> Option<Pose> {
        self.entries.get(id.0).map(|entry| match entry.phase {
            RevealPhase::Pending => entry.transition.from,
            RevealPhase::Playing { elapsed } => entry.transition.sample(elapsed),
            RevealPhase::Done => Pose::IDENTITY,
        })
    }

    /// True while any reveal still needs frames.
    pub fn is_animating(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry.phase, RevealPhase::Playing { .. }))
    }

    pub fn all_done(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| entry.phase == RevealPhase::Done)
    }
}

/// Endless back-and-forth offset, used for floating cards and icons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Yoyo {
    pub amplitude: f64,
    /// Seconds for one leg (rest to peak).
    pub period: f64,
    pub ease: Ease,
}

impl Yoyo {
    pub fn new(amplitude: f64, period: f64) -> Self {
        Self {
            amplitude,
            period,
            ease: Ease::InOutSine,
        }
    }

    pub fn sample(&self, elapsed: f64) -> f64 {
        if self.period <= 0.0 {
            return 0.0;
        }
        let legs = elapsed.max(0.0) / self.period;
        let leg = legs.floor() as u64;
        let t = legs.fract();
        let progress = if leg % 2 == 0 { t } else { 1.0 - t };
        self.amplitude * self.ease.apply(progress)
    }
}

/// Endless one-way linear slide that snaps back at the end of each period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marquee {
    /// Offset in pixels reached at the end of a period.
    pub distance: f64,
    pub period: f64,
}

impl Marquee {
    pub fn new(distance: f64, period: f64) -> Self {
        Self { distance, period }
    }

    pub fn sample(&self, elapsed: f64) -> f64 {
        if self.period <= 0.0 {
            return 0.0;
        }
        self.distance * (elapsed.max(0.0) / self.period).fract()
    }
}
