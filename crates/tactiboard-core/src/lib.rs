//! Tactiboard Core Types and Definitions
//!
//! This crate provides the foundational types for tactical lesson-plan
//! diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Percentage-space points and canvas bounds ([`geometry`] module)
//! - **Draw**: Render layers, strokes and text primitives for SVG output ([`draw`] module)
//! - **Icons**: The static icon library used by the board editor ([`icon`] module)
//! - **Scene**: The tactical diagram model ([`scene`] module)
//! - **Lesson**: The lesson-plan document that owns one scene per drill ([`lesson`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod icon;
pub mod lesson;
pub mod scene;
