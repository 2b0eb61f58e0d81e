//! stakeholder-map: interactive stakeholder map dashboard.
//!
//! Loads a stakeholder table from a user-supplied CSV source (public URL or
//! file upload), validates and normalizes it, and renders an interactive
//! radial scatter where marker size encodes importance, radial distance
//! encodes closeness to the core, and color encodes the category. The
//! normalized table is also shown in a read-only viewer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{info, Level};

pub mod components;

pub use components::stakeholder_map::{
	fetch_csv, parse_dataset, read_file, Dataset, LoadError, MapLayout, MapOptions, RingStep,
	StakeholderMapCanvas, StakeholderRecord, UploadedCsv,
};

use components::data_table::DataTable;
use components::sidebar::Sidebar;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("stakeholder-map: logging initialized");
}

/// Outcome of the current Load → Normalize run.
#[derive(Clone, Debug, PartialEq)]
enum LoadState {
	/// Neither source supplied yet; prompt instead of a chart.
	Empty,
	/// A fetch for the current source is in flight.
	Loading,
	/// Pipeline succeeded; chart and table render from this dataset.
	Ready(Dataset),
	/// Fatal pipeline failure; nothing renders but the message.
	Failed(LoadError),
}

/// Main application component: sidebar plus map and table.
///
/// Every change to the source signals re-runs the whole pipeline; every change
/// to the options re-renders from the current dataset. A generation counter
/// lets the newest run supersede any still-pending fetch.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let url = RwSignal::new(String::new());
	let upload = RwSignal::new(None::<UploadedCsv>);
	let options = RwSignal::new(MapOptions::default());
	let load = RwSignal::new(LoadState::Empty);
	let generation = StoredValue::new(0u64);

	Effect::new(move |_| {
		let run = generation.get_value() + 1;
		generation.set_value(run);

		let url_value = url.get();
		let upload_value = upload.get();

		// A non-empty URL wins over a simultaneously selected upload.
		if !url_value.trim().is_empty() {
			load.set(LoadState::Loading);
			spawn_local(async move {
				let result = match fetch_csv(url_value.trim()).await {
					Ok(text) => parse_dataset(&text),
					Err(e) => Err(e),
				};
				// Superseded by a newer run: discard this result.
				if generation.get_value() != run {
					return;
				}
				load.set(match result {
					Ok(dataset) => LoadState::Ready(dataset),
					Err(e) => LoadState::Failed(e),
				});
			});
		} else if let Some(file) = upload_value {
			load.set(match parse_dataset(&file.text) {
				Ok(dataset) => LoadState::Ready(dataset),
				Err(e) => LoadState::Failed(e),
			});
		} else {
			load.set(LoadState::Empty);
		}
	});

	view! {
		<Html attr:lang="es" attr:dir="ltr" />
		<Title text="Mapa de Stakeholders – Senior Market" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page">
			<Sidebar url=url upload=upload options=options />
			<main class="content">
				<h1>"Mapa de Stakeholders – Senior Market"</h1>
				<p class="caption">
					"Tamaño = Importancia (1–10) · Distancia = Cercanía al núcleo (0–10) · Colores = Categoría"
				</p>
				{move || match load.get() {
					LoadState::Empty => {
						view! {
							<p class="status">
								"👉 Proporciona una URL de CSV pública o sube un archivo CSV para ver el mapa."
							</p>
						}
							.into_any()
					}
					LoadState::Loading => {
						view! { <p class="status">"Cargando datos…"</p> }.into_any()
					}
					LoadState::Failed(e) => {
						view! { <p class="status error">{e.to_string()}</p> }.into_any()
					}
					LoadState::Ready(dataset) => {
						let data = Signal::derive(move || dataset.clone());
						view! {
							<StakeholderMapCanvas data=data options=options />
							<DataTable data=data />
						}
							.into_any()
					}
				}}
			</main>
		</div>
	}
}
