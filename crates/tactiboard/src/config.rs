//! Configuration types for Tactiboard rendering and editing.
//!
//! All types implement [`serde::Deserialize`] and default every missing
//! field, so an empty configuration file is valid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and editor settings.
//! - [`RenderConfig`] - Output size, label font and legend visibility.
//! - [`EditorConfig`] - Placement scale and pointer hit radius of the board editor.
//!
//! # Example
//!
//! ```
//! # use tactiboard::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().width(), 600);
//! assert!(config.render().legend());
//! ```

use serde::Deserialize;

use tactiboard_core::{draw::DEFAULT_FONT_FAMILY, scene::DEFAULT_ITEM_SCALE};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Editor configuration section.
    #[serde(default)]
    editor: EditorConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its two sections.
    pub fn new(render: RenderConfig, editor: EditorConfig) -> Self {
        Self { render, editor }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the editor configuration.
    pub fn editor(&self) -> &EditorConfig {
        &self.editor
    }

    /// Returns a copy with the output size replaced where given.
    pub fn with_size(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        if let Some(width) = width {
            self.render.width = width;
        }
        if let Some(height) = height {
            self.render.height = height;
        }
        self
    }
}

/// Settings of the diagram renderer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels.
    width: u32,
    /// Output height in pixels.
    height: u32,
    /// Font family of every label.
    font_family: String,
    /// Whether the fixed legend overlay is drawn.
    legend: bool,
}

impl RenderConfig {
    /// Creates a render configuration with the given output size and
    /// defaults for everything else.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Hides or shows the legend.
    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn legend(&self) -> bool {
        self.legend
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            legend: true,
        }
    }
}

/// Settings of the interactive board editor.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Scale given to newly placed items.
    default_scale: f32,
    /// Radius, in canvas pixels, of the pointer-down hit region around an
    /// item's anchor.
    hit_radius: f32,
}

impl EditorConfig {
    pub fn new(default_scale: f32, hit_radius: f32) -> Self {
        Self {
            default_scale,
            hit_radius,
        }
    }

    pub fn default_scale(&self) -> f32 {
        self.default_scale
    }

    pub fn hit_radius(&self) -> f32 {
        self.hit_radius
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_scale: DEFAULT_ITEM_SCALE,
            hit_radius: 16.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"render": {"width": 800}}"#).unwrap();
        assert_eq!(config.render().width(), 800);
        assert_eq!(config.render().height(), 400);
        assert_eq!(config.render().font_family(), DEFAULT_FONT_FAMILY);
        assert_eq!(config.editor().hit_radius(), 16.0);
    }

    #[test]
    fn test_with_size() {
        let config = AppConfig::default().with_size(None, Some(300));
        assert_eq!(config.render().width(), 600);
        assert_eq!(config.render().height(), 300);
    }
}
