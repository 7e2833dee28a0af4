//! Fixed header that slides away while scrolling down.

use crate::ease::{lerp, Ease};
use crate::theme::{Color, Palette};

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Pixels of scroll before the header may hide.
    pub threshold: f64,
    pub slide_duration: f64,
    pub intro_duration: f64,
    /// Vertical pixel offset the header enters from on mount.
    pub intro_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            threshold: 100.0,
            slide_duration: 0.3,
            intro_duration: 0.8,
            intro_offset: -50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVisibility {
    Shown,
    Hidden,
}

impl NavVisibility {
    fn y_percent(self) -> f64 {
        match self {
            Self::Shown => 0.0,
            Self::Hidden => -100.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavPose {
    /// Translation as a percentage of the header height.
    pub y_percent: f64,
    pub opacity: f64,
    /// Intro translation in pixels.
    pub intro_y: f64,
}

impl NavPose {
    pub fn css_transform(&self) -> String {
        format!(
            "translateY(calc({:.3}% + {:.2}px))",
            self.y_percent, self.intro_y
        )
    }
}

#[derive(Clone, Copy, Debug)]
struct Slide {
    from: f64,
    to: f64,
    elapsed: f64,
}

#[derive(Clone, Debug)]
pub struct NavOverlay {
    config: NavConfig,
    last_y: f64,
    visibility: NavVisibility,
    slide: Slide,
    intro_elapsed: f64,
}

impl NavOverlay {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            last_y: 0.0,
            visibility: NavVisibility::Shown,
            slide: Slide {
                from: 0.0,
                to: 0.0,
                elapsed: config.slide_duration,
            },
            intro_elapsed: 0.0,
        }
    }

    pub fn visibility(&self) -> NavVisibility {
        self.visibility
    }

    /// Feeds a scroll sample. Returns the new visibility when it changed.
    pub fn on_scroll(&mut self, y: f64) -> Option<NavVisibility> {
        let wanted = if y > self.last_y && y > self.config.threshold {
            NavVisibility::Hidden
        } else {
            NavVisibility::Shown
        };
        self.last_y = y;
        if wanted == self.visibility {
            return None;
        }
        self.visibility = wanted;
        self.slide = Slide {
            from: self.current_y_percent(),
            to: wanted.y_percent(),
            elapsed: 0.0,
        };
        Some(wanted)
    }

    pub fn advance(&mut self, dt: f64) -> NavPose {
        self.slide.elapsed += dt;
        self.intro_elapsed += dt;
        self.pose()
    }

    pub fn pose(&self) -> NavPose {
        let intro = if self.config.intro_duration > 0.0 {
            Ease::OutCubic.apply(self.intro_elapsed / self.config.intro_duration)
        } else {
            1.0
        };
        NavPose {
            y_percent: self.current_y_percent(),
            opacity: intro,
            intro_y: lerp(self.config.intro_offset, 0.0, intro),
        }
    }

    /// True while a slide or the intro still needs frames.
    pub fn is_animating(&self) -> bool {
        self.slide.elapsed < self.config.slide_duration
            || self.intro_elapsed < self.config.intro_duration
    }

    fn current_y_percent(&self) -> f64 {
        if self.config.slide_duration <= 0.0 {
            return self.slide.to;
        }
        let t = Ease::OutQuad.apply(self.slide.elapsed / self.config.slide_duration);
        lerp(self.slide.from, self.slide.to, t)
    }
}

/// Header colors derived from the active palette.
#[derive(Clone, Debug, PartialEq)]
pub struct NavStyle {
    pub background: String,
    pub border: String,
    pub text: String,
    pub link_hover: String,
}

impl NavStyle {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            background: palette.background.css_rgba(0.8),
            border: palette.muted.css_rgba(0.3),
            text: hex(palette.foreground),
            link_hover: hex(palette.primary),
        }
    }
}

fn hex(color: Color) -> String {
    color.to_string()
}
