//! JSON snapshots of lesson plans and scenes.
//!
//! The wire format is the one the generation service produces: camelCase
//! fields, `type` for arrow and item kinds, `final` for the cool-down drill.

use log::debug;
use serde::{Serialize, de::DeserializeOwned};

use tactiboard_core::{lesson::LessonPlan, scene::TacticalSchema};

use crate::TactiboardError;

fn from_json<T: DeserializeOwned>(source: &str) -> Result<T, TactiboardError> {
    serde_json::from_str(source).map_err(|err| TactiboardError::new_json_error(err, source))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, TactiboardError> {
    serde_json::to_string_pretty(value).map_err(|err| TactiboardError::new_json_error(err, ""))
}

/// Parses a lesson-plan document.
pub fn lesson_from_json(source: &str) -> Result<LessonPlan, TactiboardError> {
    let lesson: LessonPlan = from_json(source)?;
    debug!(title = lesson.title.as_str(), situations = lesson.fundamental.len(); "Lesson parsed");
    Ok(lesson)
}

/// Serializes a lesson-plan document.
pub fn lesson_to_json(lesson: &LessonPlan) -> Result<String, TactiboardError> {
    to_json(lesson)
}

/// Parses a single scene.
pub fn schema_from_json(source: &str) -> Result<TacticalSchema, TactiboardError> {
    from_json(source)
}

/// Serializes a single scene.
pub fn schema_to_json(schema: &TacticalSchema) -> Result<String, TactiboardError> {
    to_json(schema)
}
