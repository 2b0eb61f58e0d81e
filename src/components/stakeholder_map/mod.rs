//! Interactive stakeholder map component.
//!
//! Normalizes a CSV stakeholder table and renders it on an HTML canvas as:
//! - a radial scatter (default): marker size = importance, radius = closeness
//!   to the core, color = category, with concentric guide rings, or
//! - a plain scatter: distance on x, importance on y, color by tier.
//!
//! Interaction: drag the background to pan, scroll to zoom, hover a marker for
//! all of its fields. Display options arrive as an immutable [`MapOptions`]
//! per render cycle.
//!
//! # Example
//!
//! ```ignore
//! use stakeholder_map::{parse_dataset, MapOptions, StakeholderMapCanvas};
//!
//! let dataset = parse_dataset(csv_text)?;
//! let data = Signal::derive(move || dataset.clone());
//! let options = Signal::derive(MapOptions::default);
//!
//! view! { <StakeholderMapCanvas data=data options=options /> }
//! ```

mod component;
pub mod data;
pub mod layout;
pub mod palette;
mod render;
mod state;
pub mod types;

pub use component::StakeholderMapCanvas;
pub use data::{
	fetch_csv, parse_dataset, read_file, LoadError, UploadedCsv, LEVEL_COLUMN, REQUIRED_COLUMNS,
};
pub use types::{Dataset, MapLayout, MapOptions, RingStep, StakeholderRecord};
