use super::variant::ShaderVariant;
use crate::clock::RepeatingTimer;
use crate::error::{VizError, VizResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cycle {
    /// Advance to the next variant every `ms` milliseconds.
    Every(f64),
    /// The variant stays fixed.
    Dormant,
}

/// Steps through a variant catalog on a timer owned by one visual instance.
#[derive(Clone, Debug)]
pub struct VariantCycler {
    catalog: &'static [ShaderVariant],
    index: usize,
    timer: Option<RepeatingTimer>,
}

impl VariantCycler {
    pub fn new(catalog: &'static [ShaderVariant], initial: usize, cycle: Cycle) -> VizResult<Self> {
        if catalog.is_empty() {
            return Err(VizError::UnknownVariant("empty catalog".to_string()));
        }
        let timer = match cycle {
            Cycle::Every(ms) => Some(RepeatingTimer::new(ms)?),
            Cycle::Dormant => None,
        };
        Ok(Self {
            catalog,
            index: initial % catalog.len(),
            timer,
        })
    }

    /// Cycler fixed on `variant`. Falls back to the first entry when the
    /// variant is not part of the catalog.
    pub fn fixed(catalog: &'static [ShaderVariant], variant: ShaderVariant) -> VizResult<Self> {
        let initial = catalog.iter().position(|v| *v == variant).unwrap_or(0);
        Self::new(catalog, initial, Cycle::Dormant)
    }

    pub fn start(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.start();
        }
    }

    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(RepeatingTimer::is_running)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> ShaderVariant {
        self.catalog[self.index]
    }

    pub fn catalog(&self) -> &'static [ShaderVariant] {
        self.catalog
    }

    /// Feeds elapsed milliseconds. Returns true when the active variant
    /// changed.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        let steps = timer.advance(dt_ms) as usize;
        if steps == 0 {
            return false;
        }
        let before = self.index;
        self.index = (self.index + steps) % self.catalog.len();
        self.index != before
    }
}
