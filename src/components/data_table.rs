//! Collapsible read-only viewer for the normalized dataset.

use leptos::prelude::*;

use crate::components::stakeholder_map::types::{format_value, Dataset};

/// Renders the full normalized table under the chart, collapsed by default.
/// Shows every surviving row with its derived tier and color swatch, plus a
/// note on how many rows were dropped and whether the tier was backfilled.
#[component]
pub fn DataTable(#[prop(into)] data: Signal<Dataset>) -> impl IntoView {
	view! {
		<details class="data-table">
			<summary>"Ver datos (tabla)"</summary>
			{move || {
				let dataset = data.get();
				let mut note = format!("{} filas", dataset.records.len());
				if dataset.dropped > 0 {
					note.push_str(&format!(
						" · {} descartadas por valores no numéricos",
						dataset.dropped
					));
				}
				if dataset.level_derived {
					note.push_str(" · nivel derivado de la categoría");
				}
				let rows = dataset
					.records
					.iter()
					.map(|record| {
						let swatch = format!(
							"display: inline-block; width: 0.8em; height: 0.8em; border-radius: 50%; background: {};",
							record.color.to_css()
						);
						view! {
							<tr>
								<td>
									<span style=swatch></span>
									" "
									{record.category.clone()}
								</td>
								<td>{record.group_name.clone()}</td>
								<td>{format_value(record.importance)}</td>
								<td>{format_value(record.distance)}</td>
								<td>{format_value(record.category_level)}</td>
							</tr>
						}
					})
					.collect_view();
				view! {
					<p class="table-note">{note}</p>
					<table>
						<thead>
							<tr>
								<th>"Categoría"</th>
								<th>"Grupo de interés"</th>
								<th>"Importancia (1-10)"</th>
								<th>"Distancia (0-10)"</th>
								<th>"Nivel de categoría"</th>
							</tr>
						</thead>
						<tbody>{rows}</tbody>
					</table>
					<p class="table-hint">
						"Edita el CSV en su origen y recarga la página para actualizar el mapa."
					</p>
				}
			}}
		</details>
	}
}
