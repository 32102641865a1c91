use super::interpolate;
use crate::mach::{Var, Vars};

/// ## Variable slider
///
/// A ranged control over one variable. The value itself lives in `Vars`
/// so instructions can refer to it.

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    var: Var,
    min: f64,
    max: f64,
}

impl Slider {
    pub fn new(vars: &mut Vars, name: &str) -> Slider {
        let slider = Slider {
            var: vars.define(name),
            min: 0.0,
            max: 1.0,
        };
        vars.store(&slider.var, 0.5);
        slider
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    pub fn minimum(&self) -> f64 {
        self.min
    }

    pub fn maximum(&self) -> f64 {
        self.max
    }

    pub fn value(&self, vars: &Vars) -> f64 {
        vars.fetch(&self.var)
    }

    pub fn set(&self, vars: &mut Vars, value: f64) {
        vars.store(&self.var, self.clamp(value));
    }

    pub fn set_range(&mut self, min: f64, max: f64) {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        self.min = min;
        self.max = max;
    }

    /// The current value becomes the lower bound.
    pub fn set_minimum(&mut self, vars: &Vars) {
        let value = self.value(vars);
        self.set_range(value, self.max);
    }

    /// The current value becomes the upper bound.
    pub fn set_maximum(&mut self, vars: &Vars) {
        let value = self.value(vars);
        self.set_range(self.min, value);
    }

    /// Pointer at `pos` across a slider `width` wide.
    pub fn touch(&self, vars: &mut Vars, pos: f64, width: f64) {
        let value = interpolate(pos, 1.0, width - 2.0, self.min, self.max);
        self.set(vars, value);
    }

    pub fn reset(&mut self, vars: &mut Vars) {
        self.set_range(0.0, 1.0);
        vars.store(&self.var, 0.5);
    }

    fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// The four sliders `a` to `d`.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPanel {
    sliders: Vec<Slider>,
}

impl SliderPanel {
    pub const NAMES: [&'static str; 4] = ["a", "b", "c", "d"];

    pub fn new(vars: &mut Vars) -> SliderPanel {
        SliderPanel {
            sliders: SliderPanel::NAMES
                .iter()
                .map(|name| Slider::new(vars, name))
                .collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slider> {
        self.sliders.iter()
    }

    pub fn find(&self, name: &str) -> Option<&Slider> {
        self.sliders.iter().find(|s| s.var.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Slider> {
        self.sliders.iter_mut().find(|s| s.var.name() == name)
    }
}
