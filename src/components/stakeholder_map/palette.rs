//! Fixed lookup tables driving the visual encoding.
//!
//! Two small enumerated tables cover everything: category label to display
//! color, and category label to ordinal tier. Each has exactly one documented
//! default for keys outside the table, so every surviving row always ends up
//! with a color and a tier.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Display palette keyed by category label.
const CATEGORY_PALETTE: [(&str, Color); 3] = [
	("Interno", Color::rgb(0x6a, 0x5a, 0xcd)),   // slate blue
	("Conectado", Color::rgb(0x20, 0xb2, 0xaa)), // light sea green
	("Externo", Color::rgb(0xff, 0x8c, 0x00)),   // dark orange
];

/// Neutral fallback for categories outside the palette.
pub const DEFAULT_COLOR: Color = Color::rgb(0x99, 0x99, 0x99);

/// Tier table: 3 = Interno (closest to the core), 2 = Conectado, 1 = Externo.
const CATEGORY_LEVELS: [(&str, f64); 3] = [("Interno", 3.0), ("Conectado", 2.0), ("Externo", 1.0)];

/// Tier assigned to categories without a mapping.
pub const DEFAULT_LEVEL: f64 = 2.0;

/// Display color for a category label, falling back to [`DEFAULT_COLOR`].
pub fn category_color(category: &str) -> Color {
	CATEGORY_PALETTE
		.iter()
		.find(|(key, _)| *key == category)
		.map(|(_, color)| *color)
		.unwrap_or(DEFAULT_COLOR)
}

/// Ordinal tier for a category label, falling back to [`DEFAULT_LEVEL`].
pub fn category_level(category: &str) -> f64 {
	CATEGORY_LEVELS
		.iter()
		.find(|(key, _)| *key == category)
		.map(|(_, level)| *level)
		.unwrap_or(DEFAULT_LEVEL)
}

/// Per-tier palette used by the Cartesian layout: each tier maps onto the same
/// color as the category it summarizes. Non-integral or out-of-range tiers get
/// [`DEFAULT_COLOR`].
pub fn level_color(level: f64) -> Color {
	CATEGORY_LEVELS
		.iter()
		.find(|(_, key)| *key == level)
		.map(|(name, _)| category_color(name))
		.unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn palette_hits_and_fallback() {
		assert_eq!(category_color("Interno").to_css(), "#6a5acd");
		assert_eq!(category_color("Conectado").to_css(), "#20b2aa");
		assert_eq!(category_color("Externo").to_css(), "#ff8c00");
		assert_eq!(category_color("Desconocido"), DEFAULT_COLOR);
		assert_eq!(DEFAULT_COLOR.to_css(), "#999999");
	}

	#[test]
	fn level_table_and_default() {
		assert_eq!(category_level("Interno"), 3.0);
		assert_eq!(category_level("Conectado"), 2.0);
		assert_eq!(category_level("Externo"), 1.0);
		assert_eq!(category_level("Prensa"), DEFAULT_LEVEL);
	}

	#[test]
	fn tier_colors_match_their_categories() {
		assert_eq!(level_color(3.0), category_color("Interno"));
		assert_eq!(level_color(2.0), category_color("Conectado"));
		assert_eq!(level_color(1.0), category_color("Externo"));
		assert_eq!(level_color(2.5), DEFAULT_COLOR);
		assert_eq!(level_color(0.0), DEFAULT_COLOR);
	}

	#[test]
	fn css_formatting() {
		assert_eq!(Color::rgb(255, 140, 0).to_css(), "#ff8c00");
		assert_eq!(Color::rgba(10, 20, 30, 0.5).to_css(), "rgba(10, 20, 30, 0.5)");
		assert_eq!(Color::rgb(1, 2, 3).with_alpha(0.25).a, 0.25);
	}
}
