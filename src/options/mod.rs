//! Centralized rig configuration with TOML preset support.
//!
//! All tweakable settings (arm geometry, smoothing speeds, lens projection,
//! input bindings) are consolidated here. Options serialize to/from TOML so
//! hosts can ship camera presets; every sub-struct uses `#[serde(default)]`
//! so partial files (e.g. only overriding `[rig]`) work correctly.

mod bindings;
mod lens;
mod rig;

use std::path::Path;

pub use bindings::BindingOptions;
pub use lens::LensOptions;
pub use rig::RigOptions;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Pivot-arm length, angle, and smoothing parameters.
    pub rig: RigOptions,
    /// Lens projection parameters.
    pub lens: LensOptions,
    /// Input event bindings.
    pub bindings: BindingOptions,
}

impl Options {
    /// Reject configurations the rig has no valid behavior for.
    pub fn validate(&self) -> Result<(), RigError> {
        self.rig.validate()?;
        self.lens.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        toml::from_str(&content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_picks_up_defaults() {
        let parsed: Options = toml::from_str(
            "[rig]\nmax_arm_length = 1500.0\n",
        )
        .unwrap();
        assert_eq!(parsed.rig.max_arm_length, 1500.0);
        assert_eq!(parsed.rig.min_arm_length, 200.0);
        assert_eq!(parsed.lens, LensOptions::default());
        assert_eq!(parsed.bindings, BindingOptions::default());
    }

    #[test]
    fn defaults_are_valid() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn inverted_arm_bounds_are_rejected() {
        let opts = Options {
            rig: RigOptions {
                min_arm_length: 1000.0,
                max_arm_length: 200.0,
                ..RigOptions::default()
            },
            ..Options::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn non_positive_interp_speed_is_rejected() {
        let opts = Options {
            rig: RigOptions {
                zoom_interp_speed: 0.0,
                ..RigOptions::default()
            },
            ..Options::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn out_of_range_default_angle_is_rejected() {
        for angle in [-0.1, 1.1] {
            let opts = Options {
                rig: RigOptions {
                    default_angle: angle,
                    ..RigOptions::default()
                },
                ..Options::default()
            };
            assert!(opts.validate().is_err(), "angle {angle} must fail");
        }
    }

    #[test]
    fn degenerate_lens_is_rejected() {
        let opts = Options {
            lens: LensOptions {
                znear: 100.0,
                zfar: 10.0,
                ..LensOptions::default()
            },
            ..Options::default()
        };
        assert!(opts.validate().is_err());
    }
}
