//! Zoom configuration.
//!
//! Holds the tunable constants of the gesture controller. The defaults are the
//! canonical values; embedders may override them from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lower zoom bound (surface at its natural size).
pub const MIN_ZOOM: f64 = 1.0;
/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 25.0;
/// Scale change per unit of wheel `deltaY`.
pub const WHEEL_SENSITIVITY: f64 = 0.001;
/// Wheel zoom is rounded to multiples of this step.
pub const WHEEL_STEP: f64 = 0.1;
/// Fraction of the pinch ratio applied per touch move.
pub const PINCH_DAMPER: f64 = 0.05;

/// User-agent fragments that identify touch-first platforms.
/// Matching is a case-insensitive substring test.
pub const MOBILE_USER_AGENT_TOKENS: &[&str] = &[
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min_zoom must be positive and finite, got {0}")]
    InvalidMinZoom(f64),

    #[error("max_zoom ({max}) must not be below min_zoom ({min})")]
    InvertedBounds { min: f64, max: f64 },

    #[error("pinch_damper must be in (0, 1], got {0}")]
    InvalidDamper(f64),

    #[error("wheel_step must be positive and finite, got {0}")]
    InvalidWheelStep(f64),

    #[error("Failed to parse zoom config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for one gesture controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub wheel_sensitivity: f64,
    pub wheel_step: f64,
    pub pinch_damper: f64,
    pub mobile_user_agent_tokens: Vec<String>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_sensitivity: WHEEL_SENSITIVITY,
            wheel_step: WHEEL_STEP,
            pinch_damper: PINCH_DAMPER,
            mobile_user_agent_tokens: MOBILE_USER_AGENT_TOKENS
                .iter()
                .map(|token| token.to_string())
                .collect(),
        }
    }
}

impl ZoomConfig {
    /// Parse a config from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ZoomConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            return Err(ConfigError::InvalidMinZoom(self.min_zoom));
        }
        if !(self.max_zoom >= self.min_zoom) {
            return Err(ConfigError::InvertedBounds {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !(self.pinch_damper > 0.0 && self.pinch_damper <= 1.0) {
            return Err(ConfigError::InvalidDamper(self.pinch_damper));
        }
        if !(self.wheel_step.is_finite() && self.wheel_step > 0.0) {
            return Err(ConfigError::InvalidWheelStep(self.wheel_step));
        }
        Ok(())
    }

    /// Clamp a scale into `[min_zoom, max_zoom]`.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_zoom).min(self.max_zoom)
    }

    /// True when the user agent belongs to a touch-first platform.
    pub fn is_mobile_user_agent(&self, user_agent: &str) -> bool {
        let user_agent = user_agent.to_lowercase();
        self.mobile_user_agent_tokens
            .iter()
            .any(|token| user_agent.contains(&token.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = ZoomConfig::default();
        assert_eq!(config.min_zoom, 1.0);
        assert_eq!(config.max_zoom, 25.0);
        assert_eq!(config.pinch_damper, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn clamp_scale_respects_bounds() {
        let config = ZoomConfig::default();
        assert_eq!(config.clamp_scale(0.2), 1.0);
        assert_eq!(config.clamp_scale(3.5), 3.5);
        assert_eq!(config.clamp_scale(40.0), 25.0);
    }

    #[test]
    fn mobile_detection_is_case_insensitive() {
        let config = ZoomConfig::default();
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
        let android = "Mozilla/5.0 (Linux; ANDROID 14; Pixel 8)";
        let desktop = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0";

        assert!(config.is_mobile_user_agent(iphone));
        assert!(config.is_mobile_user_agent(android));
        assert!(config.is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; opera mini/9)"));
        assert!(!config.is_mobile_user_agent(desktop));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = ZoomConfig {
            min_zoom: 5.0,
            max_zoom: 2.0,
            ..ZoomConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn rejects_bad_damper_and_min_zoom() {
        let damper = ZoomConfig {
            pinch_damper: 0.0,
            ..ZoomConfig::default()
        };
        assert!(matches!(damper.validate(), Err(ConfigError::InvalidDamper(_))));

        let min = ZoomConfig {
            min_zoom: f64::NAN,
            ..ZoomConfig::default()
        };
        assert!(matches!(min.validate(), Err(ConfigError::InvalidMinZoom(_))));
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let config = ZoomConfig::from_json(r#"{ "max_zoom": 8.0 }"#).unwrap();
        assert_eq!(config.max_zoom, 8.0);
        assert_eq!(config.min_zoom, 1.0);
        assert_eq!(config.mobile_user_agent_tokens.len(), 8);
    }

    #[test]
    fn from_json_reports_parse_errors() {
        assert!(matches!(
            ZoomConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn config_serialization_roundtrip() {
        let original = ZoomConfig {
            max_zoom: 12.0,
            pinch_damper: 0.1,
            ..ZoomConfig::default()
        };

        let json = serde_json::to_string(&original).unwrap();
        let restored: ZoomConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }
}
