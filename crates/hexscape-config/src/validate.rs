//! Startup validation: reject configurations that cannot describe a map.

use crate::config::{CloudConfig, Config, DecorationConfig};
use crate::error::ConfigError;

const MIN_RADIAL_SEGMENTS: u32 = 3;

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

fn check_probability(name: &str, p: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(invalid(format!("{name} must lie in [0, 1], got {p}")))
    }
}

fn check_range(name: &str, (min, max): (f32, f32)) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be a non-empty range, got [{min}, {max})")))
    }
}

fn check_positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be positive, got {value}")))
    }
}

fn check_segments(name: &str, segments: u32) -> Result<(), ConfigError> {
    if segments >= MIN_RADIAL_SEGMENTS {
        Ok(())
    } else {
        Err(invalid(format!(
            "{name} needs at least {MIN_RADIAL_SEGMENTS} segments, got {segments}"
        )))
    }
}

impl Config {
    /// Check every invariant the generator relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("height.max_height", self.height.max_height)?;
        self.validate_bands()?;

        check_positive("map.map_radius", self.map.map_radius)?;
        if !(self.map.noise_scale.is_finite() && self.map.noise_scale > 0.0) {
            return Err(invalid(format!(
                "map.noise_scale must be positive, got {}",
                self.map.noise_scale
            )));
        }
        if !(self.map.height_exponent.is_finite() && self.map.height_exponent > 0.0) {
            return Err(invalid(format!(
                "map.height_exponent must be positive, got {}",
                self.map.height_exponent
            )));
        }

        check_positive("layout.col_spacing", self.layout.col_spacing)?;
        check_positive("layout.row_spacing", self.layout.row_spacing)?;
        check_positive("layout.tile_radius", self.layout.tile_radius)?;
        check_segments("layout.tile_segments", self.layout.tile_segments)?;

        validate_decoration(&self.decoration)?;
        validate_clouds(&self.clouds)?;

        if self.surroundings.enabled {
            check_positive("surroundings.sea_radius", self.surroundings.sea_radius)?;
            check_positive("surroundings.rim_top_radius", self.surroundings.rim_top_radius)?;
            check_positive(
                "surroundings.rim_bottom_radius",
                self.surroundings.rim_bottom_radius,
            )?;
            check_segments("surroundings.sea_segments", self.surroundings.sea_segments)?;
            check_segments("surroundings.rim_segments", self.surroundings.rim_segments)?;
        }

        Ok(())
    }

    fn validate_bands(&self) -> Result<(), ConfigError> {
        let bands = self.height.bands.descending();
        for fraction in bands {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(invalid(format!(
                    "band thresholds must lie in [0, 1], got {fraction}"
                )));
            }
        }
        for pair in bands.windows(2) {
            if pair[0] <= pair[1] {
                return Err(invalid(format!(
                    "band thresholds must strictly descend, got {} then {}",
                    pair[0], pair[1]
                )));
            }
        }
        if bands[0] >= 1.0 {
            return Err(invalid(format!(
                "highest band threshold must be below 1 so peaks can reach it, got {}",
                bands[0]
            )));
        }
        if bands[4] != 0.0 {
            return Err(invalid(format!(
                "lowest band threshold must be 0 to cover every height, got {}",
                bands[4]
            )));
        }
        Ok(())
    }
}

fn validate_decoration(decoration: &DecorationConfig) -> Result<(), ConfigError> {
    check_probability("decoration.stone_chance", decoration.stone_chance)?;
    check_probability("decoration.tree_chance", decoration.tree_chance)?;
    check_range("decoration.stone_radius", decoration.stone_radius)?;
    check_range("decoration.tree_height", decoration.tree_height)?;
    if decoration.stone_radius.0 <= 0.0 {
        return Err(invalid("decoration.stone_radius must start above 0"));
    }
    if decoration.tree_height.0 <= 0.0 {
        return Err(invalid("decoration.tree_height must start above 0"));
    }
    if !(decoration.stone_jitter.is_finite() && decoration.stone_jitter >= 0.0) {
        return Err(invalid("decoration.stone_jitter must be non-negative"));
    }
    check_segments("decoration.stone_segments", decoration.stone_segments)?;
    check_segments("decoration.tree_segments", decoration.tree_segments)
}

fn validate_clouds(clouds: &CloudConfig) -> Result<(), ConfigError> {
    check_positive("clouds.count_exponent", clouds.count_exponent)?;
    check_range("clouds.puff_radius", clouds.puff_radius)?;
    check_range("clouds.altitude", clouds.altitude)?;
    if clouds.puff_radius.0 <= 0.0 {
        return Err(invalid("clouds.puff_radius must start above 0"));
    }
    check_positive("clouds.spread", clouds.spread)?;
    if !(clouds.puff_lift.is_finite() && clouds.puff_lift >= 0.0) {
        return Err(invalid("clouds.puff_lift must be non-negative"));
    }
    check_segments("clouds.puff_segments", clouds.puff_segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_non_monotonic_thresholds_rejected() {
        let mut config = Config::default();
        config.height.bands.grass = 0.75;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid(ref msg) if msg.contains("descend")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_equal_thresholds_rejected() {
        let mut config = Config::default();
        config.height.bands.dirt = config.height.bands.stone;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_gap_at_zero_rejected() {
        let mut config = Config::default();
        config.height.bands.dirt2 = 0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unreachable_top_band_rejected() {
        let mut config = Config::default();
        config.height.bands.stone = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let mut config = Config::default();
        config.decoration.tree_chance = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.decoration.stone_chance = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_forced_probabilities_are_valid() {
        let mut config = Config::default();
        config.decoration.tree_chance = 1.0;
        config.decoration.stone_chance = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut config = Config::default();
        config.clouds.altitude = (14.0, 7.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_height_rejected() {
        let mut config = Config::default();
        config.height.max_height = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_too_few_segments_rejected() {
        let mut config = Config::default();
        config.layout.tile_segments = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_disabled_surroundings_skip_checks() {
        let mut config = Config::default();
        config.surroundings.enabled = false;
        config.surroundings.sea_radius = -1.0;
        assert!(config.validate().is_ok());
    }
}
