//! Color handling for tactical diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Scene data keeps colors as the raw strings received on
//! the wire; they are parsed into [`Color`] only when drawing.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;
use log::warn;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use tactiboard_core::color::Color;
    ///
    /// let orange = Color::new("#f4a261").unwrap();
    /// let navy = Color::new("navy").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Parses an optional color string, falling back to `fallback` when the
    /// string is absent, empty or not a valid CSS color.
    ///
    /// Rendering must never fail on bad color data, so invalid strings are
    /// logged and replaced rather than reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use tactiboard_core::color::Color;
    ///
    /// let fallback = Color::new("black").unwrap();
    /// assert_eq!(Color::parse_or(Some("not-a-color"), fallback), fallback);
    /// assert_eq!(Color::parse_or(None, fallback), fallback);
    /// ```
    pub fn parse_or(color_str: Option<&str>, fallback: Color) -> Color {
        match color_str.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => Self::new(s).unwrap_or_else(|err| {
                warn!(err = err.as_str(); "Falling back to default color");
                fallback
            }),
            None => fallback,
        }
    }

    /// Creates a color from a string literal known to be valid.
    ///
    /// Used for the fixed palette of the renderer and the icon library.
    /// Invalid input yields the default color.
    pub(crate) fn known(color_str: &str) -> Self {
        Self::new(color_str).unwrap_or_default()
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tactiboard_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// let faded = red.with_alpha(0.2);
    /// assert!((faded.alpha() - 0.2).abs() < 0.001);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

impl From<Color> for svg::node::Value {
    fn from(color: Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#1e3a8a").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("red").unwrap();
        let transparent = color.with_alpha(0.5);
        assert!((transparent.alpha() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_parse_or_valid() {
        let fallback = Color::default();
        let parsed = Color::parse_or(Some("#ef4444"), fallback);
        assert_eq!(parsed, Color::new("#ef4444").unwrap());
    }

    #[test]
    fn test_parse_or_invalid_and_empty() {
        let fallback = Color::new("navy").unwrap();
        assert_eq!(Color::parse_or(Some("bogus"), fallback), fallback);
        assert_eq!(Color::parse_or(Some("   "), fallback), fallback);
        assert_eq!(Color::parse_or(None, fallback), fallback);
    }

    #[test]
    fn test_known_invalid_is_default() {
        assert_eq!(Color::known("nope"), Color::default());
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("orange").unwrap();
        let color2 = Color::new("orange").unwrap();
        let color3 = Color::new("white").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
