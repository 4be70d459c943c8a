//! Tactiboard - Tactical diagrams for physical-education lesson plans.
//!
//! Rendering of tactical boards to SVG, an interactive board editor, and the
//! lesson-plan plumbing around them: JSON snapshots, lesson generation,
//! lesson-sheet and image export.

pub mod config;
pub mod editor;
pub mod export;
pub mod generate;
pub mod json;

mod error;

pub use tactiboard_core::{color, draw, geometry, icon, lesson, scene};

pub use error::TactiboardError;

use log::{debug, info};

use config::AppConfig;
use editor::{SceneSink, TacticalEditor};
use export::{
    document::DocumentExporter,
    image::ImageExporter,
    svg::{RenderedBoard, Renderer},
};
use generate::{GenerationParams, LessonGenerator};
use lesson::{DrillSlot, LessonPlan};
use scene::TacticalSchema;

/// Entry point for loading, rendering and exporting lesson plans.
///
/// # Examples
///
/// ```rust
/// use tactiboard::{BoardBuilder, config::AppConfig};
///
/// let source = r#"{
///     "title": "Jeu rapide",
///     "sport": "Basketball",
///     "warmup": {"schema": {"players": [
///         {"id": "p1", "label": "PG", "x": 50, "y": 80, "role": "attacker", "team": "team1", "hasBall": true}
///     ]}}
/// }"#;
///
/// let builder = BoardBuilder::new(AppConfig::default());
/// let lesson = builder.parse_lesson(source).expect("Failed to parse");
///
/// for (slot, board) in builder.render_lesson(&lesson) {
///     println!("{slot}: {} elements", board.scene_element_count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct BoardBuilder {
    config: AppConfig,
    renderer: Renderer,
}

impl BoardBuilder {
    /// Create a new board builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let renderer = Renderer::new(config.render().clone());
        Self { config, renderer }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Parse a lesson-plan document from JSON.
    ///
    /// # Errors
    ///
    /// Returns `TactiboardError::Json` with the source text attached when the
    /// document is not valid JSON or does not have the lesson-plan shape.
    pub fn parse_lesson(&self, source: &str) -> Result<LessonPlan, TactiboardError> {
        info!(bytes = source.len(); "Parsing lesson");
        json::lesson_from_json(source)
    }

    /// Serialize a lesson-plan document to JSON.
    pub fn to_json(&self, lesson: &LessonPlan) -> Result<String, TactiboardError> {
        json::lesson_to_json(lesson)
    }

    /// Render one scene for the given sport.
    pub fn render(&self, schema: &TacticalSchema, sport: &str) -> RenderedBoard {
        self.renderer.render(schema, sport)
    }

    /// Render one scene to SVG text.
    pub fn render_svg(&self, schema: &TacticalSchema, sport: &str) -> String {
        self.render(schema, sport).to_svg_string()
    }

    /// Render the diagram of one drill of a lesson.
    ///
    /// Returns `None` when the slot does not exist in the lesson.
    pub fn render_drill(&self, lesson: &LessonPlan, slot: DrillSlot) -> Option<RenderedBoard> {
        let drill = lesson.drill(slot)?;
        debug!(drill = drill.title.as_str(), slot = slot.to_string(); "Rendering drill");
        Some(self.render(&drill.schema, &lesson.sport))
    }

    /// Render every drill of a lesson in document order.
    pub fn render_lesson(&self, lesson: &LessonPlan) -> Vec<(DrillSlot, RenderedBoard)> {
        info!(title = lesson.title.as_str(), sport = lesson.sport.as_str(); "Rendering lesson");
        lesson
            .drills()
            .map(|(slot, drill)| (slot, self.render(&drill.schema, &lesson.sport)))
            .collect()
    }

    /// Open an editing session on a drill scene.
    pub fn editor<S: SceneSink>(&self, schema: &TacticalSchema, sink: S) -> TacticalEditor<S> {
        TacticalEditor::from_schema(schema, self.config.editor().clone(), sink)
    }

    /// Ask a generator for a new lesson plan.
    pub fn generate<G: LessonGenerator + ?Sized>(
        &self,
        generator: &G,
        params: &GenerationParams,
    ) -> Result<LessonPlan, TactiboardError> {
        info!(sport = params.sport.as_str(), level = params.level.as_str(); "Generating lesson");
        Ok(generator.generate(params)?)
    }

    /// Export a lesson plan as a document.
    pub fn export_document<E: DocumentExporter + ?Sized>(
        &self,
        exporter: &E,
        lesson: &LessonPlan,
    ) -> Result<Vec<u8>, TactiboardError> {
        Ok(exporter.to_document_blob(lesson)?)
    }

    /// Export a rendered board as an image data URL.
    pub fn export_image<E: ImageExporter + ?Sized>(
        &self,
        exporter: &E,
        board: &RenderedBoard,
    ) -> Result<String, TactiboardError> {
        Ok(exporter.rasterize(board)?)
    }
}
