//! Tunable constants for the petal helix.
//!
//! Every field has a default matching the shipped look, so a page can
//! override just the values it cares about:
//!
//! ```json
//! { "total_petals": 80, "hue_shift": true }
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Configuration for the double-helix petal field.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HelixConfig {
	/// Total petals across both helices. Must be even.
	pub total_petals: usize,
	/// Base horizontal sweep radius of a helix, in px.
	pub helix_radius: f64,
	/// How far a petal rises per radian of angle.
	pub vertical_spacing: f64,
	/// Lower bound for per-petal angular speed (radians per tick).
	pub angle_speed_min: f64,
	/// Upper bound for per-petal angular speed (radians per tick).
	pub angle_speed_max: f64,
	/// Speed multiplier applied to helix B so the two strands drift apart.
	pub helix_b_speed_multiplier: f64,
	/// Global upward drift.
	pub rise_speed: f64,
	/// Scale at zero depth; scale runs from here to 1.2 at full depth.
	pub depth_scale: f64,
	/// Viewport widths at or below this use the compact layout.
	pub compact_breakpoint: f64,
	/// Width of the lower-right strip petals are confined to in compact layout.
	pub compact_region_width: f64,
	/// Gap kept between compact petals and the right/bottom edges.
	pub compact_edge_margin: f64,
	/// Fraction of the viewport height reserved for the header in compact layout.
	pub compact_top_fraction: f64,
	/// Quiet period after the last resize before rebuilding, in ms.
	pub debounce_ms: f64,
	/// Minimum spacing between admitted frames, in ms.
	pub frame_interval_ms: f64,
	/// Petals whose rendered y falls below this are respawned at the bottom.
	pub respawn_threshold: f64,
	/// Lateral offset of each helix from the viewport center.
	pub helix_offset: f64,
	/// Petal element width in px.
	pub petal_width: f64,
	/// Petal element height in px.
	pub petal_height: f64,
	/// Probability that a petal gets the stronger halo blur.
	pub halo_chance: f64,
	/// Tint petals by depth with a small warm hue rotation.
	pub hue_shift: bool,
}

impl Default for HelixConfig {
	fn default() -> Self {
		Self {
			total_petals: 120,
			helix_radius: 100.0,
			vertical_spacing: 10.0,
			angle_speed_min: 0.014,
			angle_speed_max: 0.058,
			helix_b_speed_multiplier: 1.05,
			rise_speed: 0.8,
			depth_scale: 0.9,
			compact_breakpoint: 600.0,
			compact_region_width: 180.0,
			compact_edge_margin: 10.0,
			compact_top_fraction: 0.3,
			debounce_ms: 120.0,
			frame_interval_ms: 33.0,
			respawn_threshold: -120.0,
			helix_offset: 12.0,
			petal_width: 14.0,
			petal_height: 42.0,
			halo_chance: 0.15,
			hue_shift: false,
		}
	}
}

/// Reasons a [`HelixConfig`] is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
	/// `total_petals` is zero.
	#[error("total_petals must be positive")]
	NoPetals,
	/// `total_petals` cannot be split evenly between the helices.
	#[error("total_petals must split evenly across two helices, got {0}")]
	OddPetals(usize),
	/// Petals would stand still, turn backwards, or have no speed range.
	#[error("angle speed range [{min}, {max}] is empty or non-positive")]
	SpeedRange {
		/// Configured lower bound.
		min: f64,
		/// Configured upper bound.
		max: f64,
	},
	/// The named field must be greater than zero.
	#[error("{0} must be positive")]
	NonPositive(&'static str),
}

impl HelixConfig {
	/// Petals per helix.
	pub fn per_helix(&self) -> usize {
		self.total_petals / 2
	}

	/// Check the values the simulation divides by or samples from.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.total_petals == 0 {
			return Err(ConfigError::NoPetals);
		}
		if self.total_petals % 2 != 0 {
			return Err(ConfigError::OddPetals(self.total_petals));
		}
		if self.angle_speed_min <= 0.0 || self.angle_speed_max < self.angle_speed_min {
			return Err(ConfigError::SpeedRange {
				min: self.angle_speed_min,
				max: self.angle_speed_max,
			});
		}
		if self.helix_b_speed_multiplier <= 0.0 {
			return Err(ConfigError::NonPositive("helix_b_speed_multiplier"));
		}
		if self.debounce_ms <= 0.0 {
			return Err(ConfigError::NonPositive("debounce_ms"));
		}
		if self.helix_radius <= 0.0 {
			return Err(ConfigError::NonPositive("helix_radius"));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_validates() {
		let config = HelixConfig::default();
		assert_eq!(config.validate(), Ok(()));
		assert_eq!(config.per_helix(), 60);
	}

	#[test]
	fn test_partial_json_keeps_defaults() {
		let config: HelixConfig =
			serde_json::from_str(r#"{ "total_petals": 8, "hue_shift": true }"#).unwrap();
		assert_eq!(config.total_petals, 8);
		assert!(config.hue_shift);
		assert_eq!(config.helix_radius, 100.0);
		assert_eq!(config.frame_interval_ms, 33.0);
	}

	#[test]
	fn test_rejects_odd_and_zero_totals() {
		let mut config = HelixConfig {
			total_petals: 7,
			..HelixConfig::default()
		};
		assert_eq!(config.validate(), Err(ConfigError::OddPetals(7)));
		config.total_petals = 0;
		assert_eq!(config.validate(), Err(ConfigError::NoPetals));
	}

	#[test]
	fn test_rejects_inverted_speed_range() {
		let config = HelixConfig {
			angle_speed_min: 0.05,
			angle_speed_max: 0.01,
			..HelixConfig::default()
		};
		assert!(matches!(
			config.validate(),
			Err(ConfigError::SpeedRange { .. })
		));
	}

	#[test]
	fn test_rejects_zero_debounce() {
		let config = HelixConfig {
			debounce_ms: 0.0,
			..HelixConfig::default()
		};
		assert_eq!(
			config.validate(),
			Err(ConfigError::NonPositive("debounce_ms"))
		);
	}

	#[test]
	fn test_rejects_non_positive_multiplier() {
		for multiplier in [-1.0, 0.0] {
			let config = HelixConfig {
				helix_b_speed_multiplier: multiplier,
				..HelixConfig::default()
			};
			assert_eq!(
				config.validate(),
				Err(ConfigError::NonPositive("helix_b_speed_multiplier"))
			);
		}
	}
}
