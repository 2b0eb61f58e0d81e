//! Sidebar controls: data-source selectors and display options.
//!
//! Mirrors the control surface of the original dashboard: CSV URL field, file
//! picker, size-scale slider, label checkbox, ring-spacing selector, plus the
//! layout selector. Every control writes straight into a signal; the page
//! re-runs the pipeline or re-renders in response.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::components::stakeholder_map::{
	read_file, MapLayout, MapOptions, RingStep, UploadedCsv,
};

/// Side panel binding the input-source and display-option signals.
#[component]
pub fn Sidebar(
	/// Public CSV URL; takes precedence over an upload when non-empty.
	url: RwSignal<String>,
	/// Uploaded CSV file, already read into memory.
	upload: RwSignal<Option<UploadedCsv>>,
	/// Display options consumed by the render step.
	options: RwSignal<MapOptions>,
) -> impl IntoView {
	let on_file_change = move |ev: leptos::ev::Event| {
		let input: HtmlInputElement = match ev.target() {
			Some(target) => target.unchecked_into(),
			None => return,
		};
		let Some(file) = input.files().and_then(|files| files.get(0)) else {
			upload.set(None);
			return;
		};
		spawn_local(async move {
			match read_file(&file).await {
				Ok(csv) => upload.set(Some(csv)),
				Err(e) => warn!("stakeholder-map: upload failed: {e}"),
			}
		});
	};

	view! {
		<aside class="sidebar">
			<h2>"Datos de entrada"</h2>
			<p>
				"Usa una URL de CSV (por ejemplo, Google Sheets → Archivo > Publicar en la web → CSV) o sube un CSV."
			</p>
			<label>
				"URL CSV pública (opcional)"
				<input
					type="text"
					placeholder="https://..."
					prop:value=move || url.get()
					on:change=move |ev| url.set(event_target_value(&ev))
				/>
			</label>
			<label>
				"O sube un CSV"
				<input type="file" accept=".csv" on:change=on_file_change />
			</label>
			{move || {
				upload
					.get()
					.map(|csv| view! { <p class="file-name">{csv.name}</p> })
			}}

			<hr />
			<h2>"Opciones de visualización"</h2>
			<label>
				{move || format!("Escala de tamaño: {}", options.get().size_scale)}
				<input
					type="range"
					min=MapOptions::SIZE_SCALE_MIN
					max=MapOptions::SIZE_SCALE_MAX
					step=MapOptions::SIZE_SCALE_STEP
					prop:value=move || options.get().size_scale.to_string()
					on:input=move |ev| {
						if let Ok(value) = event_target_value(&ev).parse::<f64>() {
							options.update(|o| o.size_scale = value);
						}
					}
				/>
			</label>
			<label class="checkbox">
				<input
					type="checkbox"
					prop:checked=move || options.get().show_labels
					on:change=move |ev| {
						let checked = event_target_checked(&ev);
						options.update(|o| o.show_labels = checked);
					}
				/>
				"Mostrar etiquetas"
			</label>
			<label>
				"Separación de anillos"
				<select on:change=move |ev| {
					let step = match event_target_value(&ev).as_str() {
						"1" => RingStep::One,
						_ => RingStep::Two,
					};
					options.update(|o| o.ring_step = step);
				}>
					<option value="1" selected=move || options.get().ring_step == RingStep::One>
						"1"
					</option>
					<option value="2" selected=move || options.get().ring_step == RingStep::Two>
						"2"
					</option>
				</select>
			</label>
			<label>
				"Tipo de gráfico"
				<select on:change=move |ev| {
					let layout = match event_target_value(&ev).as_str() {
						"cartesiano" => MapLayout::Cartesian,
						_ => MapLayout::Polar,
					};
					options.update(|o| o.layout = layout);
				}>
					<option value="polar" selected=move || options.get().layout == MapLayout::Polar>
						"Mapa radial"
					</option>
					<option
						value="cartesiano"
						selected=move || options.get().layout == MapLayout::Cartesian
					>
						"Dispersión"
					</option>
				</select>
			</label>

			<hr />
			<p class="format-hint">
				"Formato esperado de columnas: Categoría, Grupo de interés, Importancia (1-10), Distancia (0-10), Nivel de categoría (1=Externo, 2=Conectado, 3=Interno)"
			</p>
		</aside>
	}
}
