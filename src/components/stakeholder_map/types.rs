//! Data types for the stakeholder map: normalized rows, the dataset produced by
//! one pipeline run, and the display options passed into each render cycle.

use super::palette::Color;

/// One validated stakeholder row.
#[derive(Clone, Debug, PartialEq)]
pub struct StakeholderRecord {
	/// Category label, an open set ("Interno", "Conectado", "Externo", ...).
	pub category: String,
	/// Stakeholder / interest-group display name.
	pub group_name: String,
	/// Marker size driver. Documented domain 1–10.
	pub importance: f64,
	/// Closeness to the core: 0 (center) to 10.
	pub distance: f64,
	/// Ordinal tier: 1 = Externo, 2 = Conectado, 3 = Interno.
	pub category_level: f64,
	/// Display color. Always set: palette lookup with a neutral fallback.
	pub color: Color,
}

/// Normalized table produced by one Load → Normalize run.
///
/// Never mutated after construction; every interaction rebuilds it from the
/// current source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
	/// Rows that survived validation and coercion, in input order.
	pub records: Vec<StakeholderRecord>,
	/// Rows silently excluded because a numeric field failed coercion.
	pub dropped: usize,
	/// Whether `Nivel de categoría` was absent and backfilled from `Categoría`.
	pub level_derived: bool,
}

/// Chart variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapLayout {
	/// Radial scatter: distance is the radius, rows spread at even angles.
	#[default]
	Polar,
	/// Plain scatter: distance on x, importance on y, color by tier.
	Cartesian,
}

/// Spacing between concentric guide rings (polar layout only).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RingStep {
	/// A ring every unit of distance.
	One,
	/// A ring every two units of distance.
	#[default]
	Two,
}

impl RingStep {
	/// Ring spacing in data units.
	pub fn as_units(self) -> usize {
		match self {
			RingStep::One => 1,
			RingStep::Two => 2,
		}
	}
}

/// Immutable display options, passed into the render step each cycle rather
/// than living as ambient state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapOptions {
	/// Marker size multiplier. Diameter in px = importance × size_scale.
	pub size_scale: f64,
	/// Draw group names above markers.
	pub show_labels: bool,
	/// Guide ring spacing (polar layout).
	pub ring_step: RingStep,
	/// Which chart variant to draw.
	pub layout: MapLayout,
}

impl MapOptions {
	/// Slider bounds and step for `size_scale`.
	pub const SIZE_SCALE_MIN: f64 = 1.0;
	/// Upper slider bound for `size_scale`.
	pub const SIZE_SCALE_MAX: f64 = 6.0;
	/// Slider step for `size_scale`.
	pub const SIZE_SCALE_STEP: f64 = 0.5;
}

impl Default for MapOptions {
	fn default() -> Self {
		Self {
			size_scale: 3.0,
			show_labels: true,
			ring_step: RingStep::default(),
			layout: MapLayout::default(),
		}
	}
}

/// Compact display form of a coerced numeric: integral values render without a
/// decimal point, everything else uses the shortest round-trip form.
pub fn format_value(value: f64) -> String {
	if value.fract() == 0.0 {
		format!("{value:.0}")
	} else {
		format!("{value}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_options_match_documented_values() {
		let opts = MapOptions::default();
		assert_eq!(opts.size_scale, 3.0);
		assert!(opts.show_labels);
		assert_eq!(opts.ring_step, RingStep::Two);
		assert_eq!(opts.layout, MapLayout::Polar);
	}

	#[test]
	fn ring_step_units() {
		assert_eq!(RingStep::One.as_units(), 1);
		assert_eq!(RingStep::Two.as_units(), 2);
	}

	#[test]
	fn value_formatting() {
		assert_eq!(format_value(5.0), "5");
		assert_eq!(format_value(2.5), "2.5");
		assert_eq!(format_value(0.0), "0");
	}
}
