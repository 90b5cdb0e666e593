//! Colors for the particle hero.
//!
//! Colors deserialize from CSS hex strings so palettes can be overridden from
//! the page's site-config JSON.

use std::fmt;

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with `a` clamped to `[0, 1]`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self {
			a: a.clamp(0.0, 1.0),
			..self
		}
	}

	/// Parse `#rgb` or `#rrggbb`.
	pub fn from_hex(value: &str) -> Option<Self> {
		let hex = value.trim().strip_prefix('#')?;
		if !hex.is_ascii() {
			return None;
		}
		match hex.len() {
			3 => {
				let channel = |i: usize| {
					u8::from_str_radix(&hex[i..i + 1], 16)
						.ok()
						.map(|v| v * 17)
				};
				Some(Self::rgb(channel(0)?, channel(1)?, channel(2)?))
			}
			6 => {
				let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
				Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
			}
			_ => None,
		}
	}

	/// CSS `rgb()` or `rgba()` string.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// CSS `rgb()` string, alpha dropped.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Returned when a config string is not a hex color.
#[derive(Debug)]
pub struct InvalidColor(String);

impl fmt::Display for InvalidColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "invalid hex color: {:?}", self.0)
	}
}

impl std::error::Error for InvalidColor {}

impl TryFrom<String> for Color {
	type Error = InvalidColor;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::from_hex(&value).ok_or(InvalidColor(value))
	}
}

/// Violet palette used by the stock hero.
pub fn violet_palette() -> Vec<Color> {
	vec![
		Color::rgb(139, 92, 246),  // #8B5CF6
		Color::rgb(167, 139, 250), // #A78BFA
		Color::rgb(109, 40, 217),  // #6D28D9
		Color::rgb(196, 181, 253), // #C4B5FD
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_long_and_short_hex() {
		assert_eq!(Color::from_hex("#8B5CF6"), Some(Color::rgb(139, 92, 246)));
		assert_eq!(Color::from_hex("#fff"), Some(Color::rgb(255, 255, 255)));
		assert_eq!(Color::from_hex("8B5CF6"), None);
		assert_eq!(Color::from_hex("#12345"), None);
	}

	#[test]
	fn css_output_depends_on_alpha() {
		let c = Color::rgb(139, 92, 246);
		assert_eq!(c.to_css(), "#8b5cf6");
		assert_eq!(c.with_alpha(0.15).to_css(), "rgba(139, 92, 246, 0.15)");
	}

	#[test]
	fn palette_deserializes_from_strings() {
		let colors: Vec<Color> = serde_json::from_str(r##"["#8B5CF6", "#C4B5FD"]"##).unwrap();
		assert_eq!(colors, vec![violet_palette()[0], violet_palette()[3]]);
		assert!(serde_json::from_str::<Vec<Color>>(r#"["violet"]"#).is_err());
	}
}
