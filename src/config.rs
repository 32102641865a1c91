//! Settings for the grapher.
//!
//! Every field has a default, so a configuration file only needs the
//! values it changes.

use crate::mach::Runtime;
use crate::plot::{Viewport, MIN_SPAN, SLOT_COLORS, SLOT_COUNT};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV: &str = "GRAPHER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Viewport at startup and after a view reset.
    pub view: ViewConfig,
    /// Zoom step per key press, greater than one.
    pub zoom_factor: f64,
    /// Fraction of the span panned per unit of stick deflection.
    pub pan_rate: f64,
    /// Deepest stack an evaluation may build.
    pub stack_limit: usize,
    /// Colour of each equation slot.
    pub colors: [[u8; 3]; SLOT_COUNT],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            view: ViewConfig::default(),
            zoom_factor: 1.02,
            pan_rate: 0.0002,
            stack_limit: Runtime::DEFAULT_STACK_LIMIT,
            colors: SLOT_COLORS,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> ViewConfig {
        let view = Viewport::default();
        ViewConfig {
            xmin: view.xmin,
            xmax: view.xmax,
            ymin: view.ymin,
            ymax: view.ymax,
        }
    }
}

impl ViewConfig {
    fn is_usable(&self) -> bool {
        let span = |min: f64, max: f64| {
            min.is_finite() && max.is_finite() && (max - min).is_finite() && max - min >= MIN_SPAN
        };
        span(self.xmin, self.xmax) && span(self.ymin, self.ymax)
    }
}

impl From<ViewConfig> for Viewport {
    fn from(v: ViewConfig) -> Viewport {
        Viewport::new(v.xmin, v.xmax, v.ymin, v.ymax)
    }
}

impl Config {
    /// Reads a JSON file. Out of range values fall back to their defaults.
    pub fn load(path: &Path) -> std::io::Result<Config> {
        let reader = BufReader::new(File::open(path)?);
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config.validate())
    }

    pub fn from_json(s: &str) -> std::io::Result<Config> {
        let config: Config = serde_json::from_str(s)?;
        Ok(config.validate())
    }

    /// Replaces every unusable setting with its default, logging each one.
    pub fn validate(mut self) -> Config {
        let defaults = Config::default();
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 1.0) {
            warn!("zoom_factor {} must be greater than one", self.zoom_factor);
            self.zoom_factor = defaults.zoom_factor;
        }
        if !(self.pan_rate.is_finite() && self.pan_rate > 0.0) {
            warn!("pan_rate {} must be positive", self.pan_rate);
            self.pan_rate = defaults.pan_rate;
        }
        if self.stack_limit == 0 {
            warn!("stack_limit must be at least one");
            self.stack_limit = defaults.stack_limit;
        }
        if !self.view.is_usable() {
            warn!(
                "view x [{}, {}] y [{}, {}] is empty or reversed",
                self.view.xmin, self.view.xmax, self.view.ymin, self.view.ymax
            );
            self.view = defaults.view;
        }
        self
    }

    pub fn runtime(&self) -> Runtime {
        Runtime::new(self.stack_limit)
    }

    pub fn viewport(&self) -> Viewport {
        self.view.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_json(r#"{"zoom_factor": 1.5, "view": {"xmax": 10.0}}"#).unwrap();
        assert_eq!(config.zoom_factor, 1.5);
        assert_eq!(config.pan_rate, 0.0002);
        assert_eq!(config.viewport(), Viewport::new(-5.0, 10.0, -3.0, 3.0));
        assert_eq!(config.colors, SLOT_COLORS);
    }

    #[test]
    fn test_bad_json() {
        assert!(Config::from_json("{ nope").is_err());
    }

    #[test]
    fn test_zoom_factor_must_exceed_one() {
        for json in &[r#"{"zoom_factor": 0.5}"#, r#"{"zoom_factor": 1.0}"#, r#"{"zoom_factor": -2}"#] {
            let config = Config::from_json(json).unwrap();
            assert_eq!(config.zoom_factor, 1.02, "{}", json);
        }
    }

    #[test]
    fn test_reversed_view_falls_back() {
        let config = Config::from_json(r#"{"view": {"xmin": 5, "xmax": -5}}"#).unwrap();
        assert_eq!(config.viewport(), Viewport::default());
        let config = Config::from_json(r#"{"view": {"ymin": 1, "ymax": 1}}"#).unwrap();
        assert_eq!(config.viewport(), Viewport::default());
    }

    #[test]
    fn test_zero_stack_limit_falls_back() {
        let config = Config::from_json(r#"{"stack_limit": 0}"#).unwrap();
        assert_eq!(config.stack_limit, Runtime::DEFAULT_STACK_LIMIT);
    }

    #[test]
    fn test_bad_pan_rate_falls_back() {
        let config = Config::from_json(r#"{"pan_rate": -1}"#).unwrap();
        assert_eq!(config.pan_rate, 0.0002);
    }

    #[test]
    fn test_valid_values_survive() {
        let json = r#"{"zoom_factor": 2, "stack_limit": 1, "view": {"xmin": 0, "xmax": 1, "ymin": 0, "ymax": 1}}"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.zoom_factor, 2.0);
        assert_eq!(config.stack_limit, 1);
        assert_eq!(config.viewport(), Viewport::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_runtime_limit() {
        let config = Config::from_json(r#"{"stack_limit": 8}"#).unwrap();
        assert_eq!(config.runtime().stack_limit(), 8);
    }
}
