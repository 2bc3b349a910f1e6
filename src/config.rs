//! Runtime configuration.
//!
//! Defaults are compiled in. A JSON object stored under
//! `localStorage["starmap_config"]` may override any subset of fields; an
//! override that fails to parse or validate is logged and ignored.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StarMapError};
use crate::projection::{DEFAULT_SCALE, ScaleBounds};

pub const STORAGE_KEY: &str = "starmap_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarMapConfig {
    /// Static constellation catalogue document.
    pub catalogue_url: String,
    /// Live member roster.
    pub roster_url: String,
    pub initial_scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Wheel delta to zoom exponent factor.
    pub zoom_speed: f64,
    /// Radians of rotation per pixel of horizontal drag.
    pub rotation_sensitivity: f64,
    /// Hit radius in canvas pixels.
    pub hit_radius_px: f64,
    /// Pointer travel beyond which a press is a drag, not a click.
    pub drag_threshold_px: f64,
    pub show_labels: bool,
}

impl Default for StarMapConfig {
    fn default() -> Self {
        Self {
            catalogue_url: "/static/constellations.json".to_string(),
            roster_url: "/static/members.json".to_string(),
            initial_scale: DEFAULT_SCALE,
            min_scale: 0.2,
            max_scale: 8.0,
            zoom_speed: 0.001,
            rotation_sensitivity: 0.005,
            hit_radius_px: 10.0,
            drag_threshold_px: 4.0,
            show_labels: false,
        }
    }
}

impl StarMapConfig {
    /// Parses a (possibly partial) override document on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(raw).map_err(|source| StarMapError::Decode {
            what: "configuration",
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(StarMapError::Config(format!("{name} must be a positive number, got {v}")))
            }
        };
        positive("min_scale", self.min_scale)?;
        positive("max_scale", self.max_scale)?;
        positive("initial_scale", self.initial_scale)?;
        positive("zoom_speed", self.zoom_speed)?;
        positive("rotation_sensitivity", self.rotation_sensitivity)?;
        positive("hit_radius_px", self.hit_radius_px)?;
        if !(self.drag_threshold_px.is_finite() && self.drag_threshold_px >= 0.0) {
            return Err(StarMapError::Config(format!(
                "drag_threshold_px must be non-negative, got {}",
                self.drag_threshold_px
            )));
        }
        if self.min_scale > self.max_scale {
            return Err(StarMapError::Config(format!(
                "min_scale {} exceeds max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        if self.initial_scale < self.min_scale || self.initial_scale > self.max_scale {
            return Err(StarMapError::Config(format!(
                "initial_scale {} outside [{}, {}]",
                self.initial_scale, self.min_scale, self.max_scale
            )));
        }
        Ok(())
    }

    pub fn scale_bounds(&self) -> ScaleBounds {
        ScaleBounds {
            min: self.min_scale,
            max: self.max_scale,
        }
    }

    /// Defaults merged with the browser-stored override, if any.
    pub fn load() -> Self {
        let Some(raw) = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => {
                log::info!("using configuration override from localStorage");
                cfg
            }
            Err(e) => {
                log::warn!("ignoring stored configuration: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = StarMapConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.hit_radius_px, 10.0);
        assert_eq!(cfg.initial_scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let cfg =
            StarMapConfig::from_json(r#"{"roster_url": "/api/members", "show_labels": true}"#)
                .unwrap();
        assert_eq!(cfg.roster_url, "/api/members");
        assert!(cfg.show_labels);
        assert_eq!(cfg.catalogue_url, StarMapConfig::default().catalogue_url);
        assert_eq!(cfg.zoom_speed, 0.001);
    }

    #[test]
    fn test_malformed_override_is_decode_error() {
        let err = StarMapConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, StarMapError::Decode { what: "configuration", .. }));
    }

    #[test]
    fn test_inverted_scale_bounds_rejected() {
        let err = StarMapConfig::from_json(r#"{"min_scale": 5.0, "max_scale": 1.0}"#).unwrap_err();
        assert!(matches!(err, StarMapError::Config(_)));
    }

    #[test]
    fn test_non_positive_values_rejected() {
        assert!(StarMapConfig::from_json(r#"{"min_scale": 0.0}"#).is_err());
        assert!(StarMapConfig::from_json(r#"{"hit_radius_px": -1}"#).is_err());
        assert!(StarMapConfig::from_json(r#"{"drag_threshold_px": -0.5}"#).is_err());
        assert!(StarMapConfig::from_json(r#"{"initial_scale": 50.0}"#).is_err());
    }

    #[test]
    fn test_scale_bounds() {
        let b = StarMapConfig::default().scale_bounds();
        assert_eq!(b.clamp(100.0), 8.0);
        assert_eq!(b.clamp(0.0), 0.2);
    }
}
