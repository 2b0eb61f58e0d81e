//! CSV loading and normalization pipeline.
//!
//! Contract: given exactly one of {URL text, uploaded file text}, produce a
//! validated [`Dataset`] or a [`LoadError`]; never hand a partially valid table
//! to the renderer. Fatal failures are fetch errors, parser errors, and missing
//! required columns. Rows whose numeric fields fail coercion are not errors:
//! they are dropped silently and only show up as a smaller table.

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::palette;
use super::types::{Dataset, StakeholderRecord};

/// Header names the loader refuses to work without, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 4] = [
	"Categoría",
	"Grupo de interés",
	"Importancia (1-10)",
	"Distancia (0-10)",
];

/// Optional tier column; backfilled from `Categoría` when absent.
pub const LEVEL_COLUMN: &str = "Nivel de categoría";

/// Fatal pipeline failures, surfaced to the user verbatim.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LoadError {
	/// Network failure or non-success HTTP status while fetching the CSV URL.
	#[error("no se pudo descargar el CSV: {0}")]
	Fetch(String),
	/// The CSV reader rejected the input; carries the parser's own message.
	#[error("no se pudo leer el CSV: {0}")]
	Parse(String),
	/// Required columns absent from the header row, in declaration order.
	#[error("faltan columnas requeridas: {}", .0.join(", "))]
	MissingColumns(Vec<String>),
}

/// A CSV file supplied through the file picker, already read into memory.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadedCsv {
	/// File name, for display only.
	pub name: String,
	/// Raw CSV text.
	pub text: String,
}

/// One raw CSV row keyed by the original Spanish headers. Numeric fields stay
/// as strings here; coercion happens below so bad values can drop the row
/// instead of failing the whole parse.
#[derive(Debug, Deserialize)]
struct RawRecord {
	#[serde(rename = "Categoría")]
	category: String,
	#[serde(rename = "Grupo de interés")]
	group_name: String,
	#[serde(rename = "Importancia (1-10)")]
	importance: String,
	#[serde(rename = "Distancia (0-10)")]
	distance: String,
	#[serde(rename = "Nivel de categoría", default)]
	category_level: Option<String>,
}

/// Numeric coercion: trimmed parse to `f64`, with non-finite values treated as
/// missing so a literal `NaN` cell cannot survive into the chart.
fn coerce(field: &str) -> Option<f64> {
	let value: f64 = field.trim().parse().ok()?;
	value.is_finite().then_some(value)
}

/// Run the full validate/normalize pipeline over CSV text.
pub fn parse_dataset(text: &str) -> Result<Dataset, LoadError> {
	let mut reader = csv::Reader::from_reader(text.as_bytes());
	let headers = reader
		.headers()
		.map_err(|e| LoadError::Parse(e.to_string()))?
		.clone();

	let missing: Vec<String> = REQUIRED_COLUMNS
		.iter()
		.filter(|column| !headers.iter().any(|h| h == **column))
		.map(|column| column.to_string())
		.collect();
	if !missing.is_empty() {
		return Err(LoadError::MissingColumns(missing));
	}

	let level_derived = !headers.iter().any(|h| h == LEVEL_COLUMN);

	let mut records = Vec::new();
	let mut dropped = 0usize;
	for row in reader.deserialize::<RawRecord>() {
		let raw = row.map_err(|e| LoadError::Parse(e.to_string()))?;

		// Backfill the tier from the category when the column is absent; the
		// derived value is always numeric, so only source-supplied tiers can
		// fail coercion.
		let level = match &raw.category_level {
			Some(value) => coerce(value),
			None => Some(palette::category_level(&raw.category)),
		};

		let (Some(importance), Some(distance), Some(category_level)) =
			(coerce(&raw.importance), coerce(&raw.distance), level)
		else {
			dropped += 1;
			debug!(
				"stakeholder-map: dropping row for {:?} (non-numeric field)",
				raw.group_name
			);
			continue;
		};

		records.push(StakeholderRecord {
			color: palette::category_color(&raw.category),
			category: raw.category,
			group_name: raw.group_name,
			importance,
			distance,
			category_level,
		});
	}

	info!(
		"stakeholder-map: {} rows kept, {} dropped{}",
		records.len(),
		dropped,
		if level_derived { ", tier derived" } else { "" }
	);

	Ok(Dataset {
		records,
		dropped,
		level_derived,
	})
}

fn js_error(value: JsValue) -> LoadError {
	LoadError::Fetch(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Fetch CSV text from a user-supplied URL.
///
/// Non-success HTTP statuses are fetch errors; there is no timeout or retry. A
/// slow URL simply keeps the run in its loading state until a newer run
/// supersedes it.
pub async fn fetch_csv(url: &str) -> Result<String, LoadError> {
	let window =
		web_sys::window().ok_or_else(|| LoadError::Fetch("sin contexto de ventana".into()))?;

	let opts = RequestInit::new();
	opts.set_method("GET");
	opts.set_mode(RequestMode::Cors);

	let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
	let response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(js_error)?;
	let response: Response = response
		.dyn_into()
		.map_err(|_| LoadError::Fetch("respuesta inválida".into()))?;

	if !response.ok() {
		return Err(LoadError::Fetch(format!("HTTP {}", response.status())));
	}

	let text = JsFuture::from(response.text().map_err(js_error)?)
		.await
		.map_err(js_error)?;
	Ok(text.as_string().unwrap_or_default())
}

/// Read an uploaded CSV file into memory.
pub async fn read_file(file: &web_sys::File) -> Result<UploadedCsv, LoadError> {
	let text = JsFuture::from(file.text())
		.await
		.map_err(|_| LoadError::Parse("no se pudo leer el archivo".into()))?;
	Ok(UploadedCsv {
		name: file.name(),
		text: text.as_string().unwrap_or_default(),
	})
}
