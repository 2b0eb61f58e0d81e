//! Per-mount chart state: placed markers, view transform, and hover tracking.
//!
//! A [`MapState`] is rebuilt from scratch whenever the dataset or an option
//! changes; only mouse interaction mutates it in place (pan, zoom, hover). No
//! state survives across runs beyond the lifetime of one canvas mount.

use super::layout::{self, Viewport};
use super::types::{Dataset, MapLayout, StakeholderRecord};

/// A record with its world-unit position resolved by the layout.
#[derive(Clone, Debug)]
pub struct Marker {
	pub record: StakeholderRecord,
	/// World x, in data units.
	pub x: f64,
	/// World y, in data units.
	pub y: f64,
}

/// Pan and zoom transform applied to the whole chart, in screen pixels.
#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0 by the component).
	pub k: f64,
}

/// Tracks an in-progress background pan.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Chart state for one canvas mount.
pub struct MapState {
	pub markers: Vec<Marker>,
	pub layout: MapLayout,
	pub viewport: Viewport,
	pub transform: ViewTransform,
	pub pan: PanState,
	/// Index into `markers` of the marker under the cursor, if any.
	pub hovered: Option<usize>,
	pub width: f64,
	pub height: f64,
	/// Pixels per data unit at zoom 1, x axis.
	px_x: f64,
	/// Pixels per data unit at zoom 1, y axis.
	px_y: f64,
}

impl MapState {
	/// Build the chart state for a dataset: resolve every marker position and
	/// center the viewport in the canvas at zoom 1.
	pub fn new(dataset: &Dataset, layout: MapLayout, width: f64, height: f64) -> Self {
		let viewport = Viewport::for_layout(layout);

		// The polar chart locks a 1:1 aspect ratio; the Cartesian axes may
		// scale independently to fill the canvas.
		let (px_x, px_y) = match layout {
			MapLayout::Polar => {
				let s = (width / viewport.width()).min(height / viewport.height());
				(s, s)
			}
			MapLayout::Cartesian => (width / viewport.width(), height / viewport.height()),
		};

		let len = dataset.records.len();
		let markers = dataset
			.records
			.iter()
			.enumerate()
			.map(|(index, record)| {
				let (x, y) = layout::place(record, index, len, layout);
				Marker {
					record: record.clone(),
					x,
					y,
				}
			})
			.collect();

		let transform = ViewTransform {
			x: (width - viewport.width() * px_x) / 2.0,
			y: (height - viewport.height() * px_y) / 2.0,
			k: 1.0,
		};

		Self {
			markers,
			layout,
			viewport,
			transform,
			pan: PanState::default(),
			hovered: None,
			width,
			height,
			px_x,
			px_y,
		}
	}

	/// Screen position of a world-unit point under the current transform.
	/// World y grows upward; screen y grows downward.
	pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
		let base_x = (x - self.viewport.x_min) * self.px_x;
		let base_y = (self.viewport.y_max - y) * self.px_y;
		(
			self.transform.x + self.transform.k * base_x,
			self.transform.y + self.transform.k * base_y,
		)
	}

	/// Current pixels-per-data-unit on each axis, zoom included. Used for ring
	/// radii and grid spacing.
	pub fn unit_scale(&self) -> (f64, f64) {
		(self.px_x * self.transform.k, self.px_y * self.transform.k)
	}

	/// Topmost marker whose drawn circle contains the screen point, if any.
	/// Later rows draw on top, so the last hit wins.
	pub fn marker_at(&self, sx: f64, sy: f64, size_scale: f64) -> Option<usize> {
		let mut found = None;
		for (index, marker) in self.markers.iter().enumerate() {
			let (mx, my) = self.to_screen(marker.x, marker.y);
			let radius = layout::marker_diameter(marker.record.importance, size_scale) / 2.0;
			// Keep tiny markers hoverable.
			let hit_radius = radius.max(6.0);
			let (dx, dy) = (sx - mx, sy - my);
			if (dx * dx + dy * dy).sqrt() < hit_radius {
				found = Some(index);
			}
		}
		found
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::stakeholder_map::palette;

	fn dataset(rows: &[(f64, f64)]) -> Dataset {
		Dataset {
			records: rows
				.iter()
				.enumerate()
				.map(|(i, &(importance, distance))| StakeholderRecord {
					category: "Interno".into(),
					group_name: format!("G{i}"),
					importance,
					distance,
					category_level: 3.0,
					color: palette::category_color("Interno"),
				})
				.collect(),
			dropped: 0,
			level_derived: true,
		}
	}

	#[test]
	fn polar_origin_lands_at_the_canvas_center() {
		let state = MapState::new(&dataset(&[(5.0, 0.0)]), MapLayout::Polar, 800.0, 600.0);
		let (x, y) = state.to_screen(0.0, 0.0);
		assert!((x - 400.0).abs() < 1e-9);
		assert!((y - 300.0).abs() < 1e-9);
	}

	#[test]
	fn polar_scale_is_square() {
		let state = MapState::new(&dataset(&[]), MapLayout::Polar, 1100.0, 700.0);
		let (sx, sy) = state.unit_scale();
		assert_eq!(sx, sy);
		// 21 data units must fit in the 700px dimension.
		assert!((sx - 700.0 / 21.0).abs() < 1e-9);
	}

	#[test]
	fn zero_distance_marker_hits_at_center() {
		let state = MapState::new(&dataset(&[(5.0, 0.0)]), MapLayout::Polar, 800.0, 600.0);
		assert_eq!(state.marker_at(400.0, 300.0, 3.0), Some(0));
		assert_eq!(state.marker_at(200.0, 300.0, 3.0), None);
	}

	#[test]
	fn pan_and_zoom_move_the_view_not_the_world() {
		let mut state = MapState::new(&dataset(&[(5.0, 4.0)]), MapLayout::Polar, 800.0, 600.0);
		let before = state.to_screen(4.0, 0.0);

		state.transform.x += 30.0;
		state.transform.y -= 10.0;
		let panned = state.to_screen(4.0, 0.0);
		assert_eq!(panned, (before.0 + 30.0, before.1 - 10.0));

		state.transform.k = 2.0;
		let (sx, sy) = state.unit_scale();
		let base = MapState::new(&dataset(&[]), MapLayout::Polar, 800.0, 600.0);
		let (bx, by) = base.unit_scale();
		assert_eq!((sx, sy), (bx * 2.0, by * 2.0));
	}

	#[test]
	fn later_rows_win_overlapping_hits() {
		let state = MapState::new(
			&dataset(&[(8.0, 0.0), (8.0, 0.0)]),
			MapLayout::Polar,
			800.0,
			600.0,
		);
		assert_eq!(state.marker_at(400.0, 300.0, 3.0), Some(1));
	}

	#[test]
	fn cartesian_maps_the_padded_domain_onto_the_canvas() {
		let state = MapState::new(&dataset(&[]), MapLayout::Cartesian, 1100.0, 700.0);
		let (left, bottom) = state.to_screen(-0.5, 0.5);
		let (right, top) = state.to_screen(10.5, 10.5);
		assert!((left - 0.0).abs() < 1e-9);
		assert!((bottom - 700.0).abs() < 1e-9);
		assert!((right - 1100.0).abs() < 1e-9);
		assert!((top - 0.0).abs() < 1e-9);
	}
}
