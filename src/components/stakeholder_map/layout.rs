//! Placement math and viewport constants for the two chart layouts.
//!
//! All functions here work in data units; conversion to screen pixels lives in
//! [`super::state`]. Marker sizes are the exception: they are specified
//! directly in screen pixels and stay constant under zoom, the way a plotting
//! library sizes scatter markers.

use std::f64::consts::TAU;

use super::types::{MapLayout, RingStep, StakeholderRecord};

/// Outermost guide-ring radius and axis-domain maximum, in data units.
pub const MAX_RADIUS: f64 = 10.0;

/// Extra viewport margin beyond the data domain, in data units.
pub const DOMAIN_PAD: f64 = 0.5;

/// Lower bound of the documented importance domain (Cartesian y axis).
pub const IMPORTANCE_MIN: f64 = 1.0;

/// Axis-aligned viewport of a layout, in data units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub x_min: f64,
	pub x_max: f64,
	pub y_min: f64,
	pub y_max: f64,
}

impl Viewport {
	/// Fixed viewport for a layout: the polar chart spans ±(10 + pad) on both
	/// axes; the Cartesian chart pads the documented value domains by half a
	/// unit.
	pub fn for_layout(layout: MapLayout) -> Self {
		match layout {
			MapLayout::Polar => {
				let extent = MAX_RADIUS + DOMAIN_PAD;
				Self {
					x_min: -extent,
					x_max: extent,
					y_min: -extent,
					y_max: extent,
				}
			}
			MapLayout::Cartesian => Self {
				x_min: -DOMAIN_PAD,
				x_max: MAX_RADIUS + DOMAIN_PAD,
				y_min: IMPORTANCE_MIN - DOMAIN_PAD,
				y_max: MAX_RADIUS + DOMAIN_PAD,
			},
		}
	}

	/// Viewport width in data units.
	pub fn width(&self) -> f64 {
		self.x_max - self.x_min
	}

	/// Viewport height in data units.
	pub fn height(&self) -> f64 {
		self.y_max - self.y_min
	}
}

/// Angle assigned to row `index` of `len` total rows: `2π·i/N`, spreading rows
/// evenly around the circle in table order.
///
/// The assignment is arbitrary (it encodes nothing about the row) and is kept
/// for compatibility with the original chart.
pub fn row_angle(index: usize, len: usize) -> f64 {
	if len == 0 {
		return 0.0;
	}
	TAU * index as f64 / len as f64
}

/// World-unit position of a record under the given layout.
pub fn place(record: &StakeholderRecord, index: usize, len: usize, layout: MapLayout) -> (f64, f64) {
	match layout {
		MapLayout::Polar => {
			let angle = row_angle(index, len);
			(record.distance * angle.cos(), record.distance * angle.sin())
		}
		MapLayout::Cartesian => (record.distance, record.importance),
	}
}

/// Marker diameter in screen pixels: importance × size_scale.
pub fn marker_diameter(importance: f64, size_scale: f64) -> f64 {
	importance * size_scale
}

/// Radii of the concentric guide rings for a ring spacing, starting at 0.
pub fn ring_radii(step: RingStep) -> Vec<f64> {
	(0..=MAX_RADIUS as usize)
		.step_by(step.as_units())
		.map(|r| r as f64)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::stakeholder_map::palette::DEFAULT_COLOR;

	fn record(importance: f64, distance: f64) -> StakeholderRecord {
		StakeholderRecord {
			category: "Interno".into(),
			group_name: "G".into(),
			importance,
			distance,
			category_level: 3.0,
			color: DEFAULT_COLOR,
		}
	}

	#[test]
	fn angles_spread_evenly_in_table_order() {
		assert_eq!(row_angle(0, 4), 0.0);
		assert!((row_angle(1, 4) - TAU / 4.0).abs() < 1e-12);
		assert!((row_angle(3, 4) - 3.0 * TAU / 4.0).abs() < 1e-12);
		// Degenerate cases: no rows, single row.
		assert_eq!(row_angle(0, 0), 0.0);
		assert_eq!(row_angle(0, 1), 0.0);
	}

	#[test]
	fn zero_distance_maps_to_origin_at_any_index() {
		for (index, len) in [(0, 1), (2, 5), (7, 9)] {
			let (x, y) = place(&record(5.0, 0.0), index, len, MapLayout::Polar);
			assert_eq!((x, y), (0.0, 0.0));
		}
	}

	#[test]
	fn polar_position_is_distance_times_unit_vector() {
		let (x, y) = place(&record(5.0, 4.0), 1, 4, MapLayout::Polar);
		assert!((x - 0.0).abs() < 1e-12);
		assert!((y - 4.0).abs() < 1e-12);
	}

	#[test]
	fn cartesian_position_is_distance_by_importance() {
		let (x, y) = place(&record(7.0, 3.0), 0, 10, MapLayout::Cartesian);
		assert_eq!((x, y), (3.0, 7.0));
	}

	#[test]
	fn marker_diameter_scales_proportionally() {
		let base = marker_diameter(5.0, 3.0);
		assert_eq!(base, 15.0);
		assert_eq!(marker_diameter(5.0, 6.0), base * 2.0);
	}

	#[test]
	fn ring_radii_for_both_steps() {
		assert_eq!(
			ring_radii(RingStep::One),
			(0..=10).map(f64::from).collect::<Vec<_>>()
		);
		assert_eq!(ring_radii(RingStep::Two), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
	}

	#[test]
	fn viewports_pad_the_documented_domains() {
		let polar = Viewport::for_layout(MapLayout::Polar);
		assert_eq!((polar.x_min, polar.x_max), (-10.5, 10.5));
		assert_eq!(polar.width(), polar.height());

		let cartesian = Viewport::for_layout(MapLayout::Cartesian);
		assert_eq!((cartesian.x_min, cartesian.x_max), (-0.5, 10.5));
		assert_eq!((cartesian.y_min, cartesian.y_max), (0.5, 10.5));
	}
}
