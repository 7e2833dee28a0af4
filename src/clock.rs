use crate::error::{VizError, VizResult};

/// Longest frame step fed to animations. A tab coming back from the
/// background would otherwise report seconds of elapsed time in one frame.
pub const MAX_FRAME_DT: f64 = 0.1;

/// Converts display-refresh timestamps (milliseconds) into frame deltas.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last_ms: Option<f64>,
    elapsed: f64,
    max_dt: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Clock for scroll, reveal and nav tweens. Steps are capped at
    /// [`MAX_FRAME_DT`] so a stalled frame does not jump a tween to its end.
    pub fn new() -> Self {
        Self {
            last_ms: None,
            elapsed: 0.0,
            max_dt: MAX_FRAME_DT,
        }
    }

    /// Clock that follows wall time however long a frame takes. Shader
    /// time, glyph rotation and variant cycling run on this one.
    pub fn real_time() -> Self {
        Self {
            max_dt: f64::INFINITY,
            ..Self::new()
        }
    }

    /// Returns the delta in seconds since the previous tick. The first tick
    /// only anchors the clock and yields zero.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.elapsed += dt;
        dt
    }

    /// Seconds accumulated since the first tick.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

/// Interval timer driven by explicit time steps instead of an event loop.
#[derive(Clone, Debug)]
pub struct RepeatingTimer {
    interval_ms: f64,
    carry_ms: f64,
    running: bool,
}

impl RepeatingTimer {
    pub fn new(interval_ms: f64) -> VizResult<Self> {
        if !(interval_ms > 0.0) || !interval_ms.is_finite() {
            return Err(VizError::InvalidInterval(interval_ms));
        }
        Ok(Self {
            interval_ms,
            carry_ms: 0.0,
            running: false,
        })
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops the timer and discards any partial interval.
    pub fn stop(&mut self) {
        self.running = false;
        self.carry_ms = 0.0;
    }

    /// Feeds `dt_ms` of elapsed time and returns how many whole intervals
    /// completed. The remainder carries into the next call.
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if !self.running || dt_ms <= 0.0 {
            return 0;
        }
        self.carry_ms += dt_ms;
        let fired = (self.carry_ms / self.interval_ms).floor();
        self.carry_ms -= fired * self.interval_ms;
        fired as u32
    }
}
