// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use stakeholder_map::components::stakeholder_map::{layout, palette};
use stakeholder_map::{parse_dataset, LoadError, MapLayout, MapOptions, RingStep};

const HEADER: &str = "Categoría,Grupo de interés,Importancia (1-10),Distancia (0-10)";

#[test]
fn valid_csv_renders_every_input_row() {
	let csv = format!(
		"{HEADER}\nInterno,Dirección,9,1\nConectado,Proveedores,6,4\nExterno,Prensa,4,8\n"
	);
	let dataset = parse_dataset(&csv).expect("parse");
	assert_eq!(dataset.records.len(), 3);
	assert_eq!(dataset.dropped, 0);
}

#[test]
fn missing_columns_halt_with_the_exact_set_difference() {
	let csv = "Grupo de interés,Importancia (1-10)\nEquipo,5\n";
	match parse_dataset(csv) {
		Err(LoadError::MissingColumns(missing)) => {
			assert_eq!(missing, vec!["Categoría", "Distancia (0-10)"]);
		}
		other => panic!("expected MissingColumns, got {other:?}"),
	}
}

#[test]
fn single_interno_row_gets_the_interno_palette_color() {
	let csv = format!("{HEADER}\nInterno,A,5,2\n");
	let dataset = parse_dataset(&csv).expect("parse");
	assert_eq!(dataset.records.len(), 1);
	assert_eq!(dataset.records[0].color, palette::category_color("Interno"));
	assert_eq!(dataset.records[0].color.to_css(), "#6a5acd");
}

#[test]
fn derived_tiers_follow_the_fixed_mapping() {
	let csv = format!(
		"{HEADER}\nInterno,A,5,1\nConectado,B,5,1\nExterno,C,5,1\nComunidad,D,5,1\n"
	);
	let dataset = parse_dataset(&csv).expect("parse");
	assert!(dataset.level_derived);
	let levels: Vec<f64> = dataset.records.iter().map(|r| r.category_level).collect();
	assert_eq!(levels, vec![3.0, 2.0, 1.0, 2.0]);
}

#[test]
fn one_bad_distance_out_of_five_yields_four_rows() {
	let csv = format!(
		"{HEADER}\nInterno,A,5,1\nInterno,B,5,2\nInterno,C,5,no sé\nInterno,D,5,4\nInterno,E,5,5\n"
	);
	let dataset = parse_dataset(&csv).expect("parse");
	assert_eq!(dataset.records.len(), 4);
	assert_eq!(dataset.dropped, 1);
	assert!(dataset.records.iter().all(|r| r.group_name != "C"));
}

#[test]
fn polar_placement_of_zero_distance_is_the_origin() {
	let csv = format!("{HEADER}\nInterno,A,5,0\nExterno,B,5,0\nConectado,C,5,0\n");
	let dataset = parse_dataset(&csv).expect("parse");
	let len = dataset.records.len();
	for (index, record) in dataset.records.iter().enumerate() {
		assert_eq!(layout::place(record, index, len, MapLayout::Polar), (0.0, 0.0));
	}
}

#[test]
fn size_scale_scales_diameters_without_touching_positions() {
	let csv = format!("{HEADER}\nInterno,A,5,3\nExterno,B,2,7\n");
	let dataset = parse_dataset(&csv).expect("parse");
	let len = dataset.records.len();

	let positions: Vec<(f64, f64)> = dataset
		.records
		.iter()
		.enumerate()
		.map(|(i, r)| layout::place(r, i, len, MapLayout::Polar))
		.collect();

	for record in &dataset.records {
		let small = layout::marker_diameter(record.importance, 1.5);
		let large = layout::marker_diameter(record.importance, 4.5);
		assert!((large - small * 3.0).abs() < 1e-12);
	}

	// Positions depend only on the layout, never on size_scale.
	let after: Vec<(f64, f64)> = dataset
		.records
		.iter()
		.enumerate()
		.map(|(i, r)| layout::place(r, i, len, MapLayout::Polar))
		.collect();
	assert_eq!(positions, after);
}

#[test]
fn cartesian_variant_colors_by_tier() {
	let csv = format!("{HEADER},Nivel de categoría\nComunidad,A,5,3,3\nComunidad,B,5,3,7\n");
	let dataset = parse_dataset(&csv).expect("parse");
	// Tier 3 maps to the Interno color even though the category is unknown;
	// an out-of-range tier falls back to neutral.
	assert_eq!(
		palette::level_color(dataset.records[0].category_level),
		palette::category_color("Interno")
	);
	assert_eq!(
		palette::level_color(dataset.records[1].category_level),
		palette::DEFAULT_COLOR
	);
}

#[test]
fn default_options_drive_the_documented_chart() {
	let options = MapOptions::default();
	assert_eq!(options.layout, MapLayout::Polar);
	assert_eq!(layout::ring_radii(options.ring_step), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
	assert_eq!(layout::ring_radii(RingStep::One).len(), 11);
}
