//! The lesson-plan document: a warm-up, one or more fundamental situations
//! and a cool-down, each pairing teaching content with a tactical diagram.
//!
//! Every field defaults when absent on the wire, so partially filled
//! documents from the generation service never fail on missing arrays.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scene::TacticalSchema;

/// Title given to a freshly created lesson plan.
pub const BLANK_LESSON_TITLE: &str = "Nouvelle Séance";
/// Duration text given to a freshly created drill.
pub const BLANK_DRILL_DURATION: &str = "15 min";

/// A full lesson plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonPlan {
    pub title: String,
    pub level: String,
    pub sport: String,
    pub objective: String,
    /// Total duration in minutes.
    pub duration: u32,
    pub material: String,
    pub warmup: Drill,
    pub fundamental: Vec<Drill>,
    #[serde(rename = "final")]
    pub final_drill: Drill,
}

/// Address of one drill inside a [`LessonPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrillSlot {
    Warmup,
    Fundamental(usize),
    Final,
}

impl fmt::Display for DrillSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warmup => f.write_str("warmup"),
            Self::Fundamental(index) => write!(f, "fundamental-{}", index + 1),
            Self::Final => f.write_str("final"),
        }
    }
}

impl LessonPlan {
    /// Creates the hand-authoring starting point: a basketball session of
    /// 60 minutes with one drill per phase.
    pub fn blank() -> Self {
        Self {
            title: BLANK_LESSON_TITLE.to_string(),
            level: "1 A.C (7ème)".to_string(),
            sport: "Basketball".to_string(),
            objective: String::new(),
            duration: 60,
            material: String::new(),
            warmup: Drill::blank("Échauffement"),
            fundamental: vec![Drill::blank("Situation 1")],
            final_drill: Drill::blank("Bilan"),
        }
    }

    /// Appends a blank fundamental drill titled `Situation N` and returns its slot.
    pub fn add_fundamental_drill(&mut self) -> DrillSlot {
        let index = self.fundamental.len();
        self.fundamental
            .push(Drill::blank(format!("Situation {}", index + 1)));
        DrillSlot::Fundamental(index)
    }

    /// Removes the fundamental drill at `index`.
    ///
    /// Returns the removed drill, or `None` when the index is out of range or
    /// the drill is the last fundamental one, which is never removed.
    pub fn remove_fundamental_drill(&mut self, index: usize) -> Option<Drill> {
        if self.fundamental.len() <= 1 || index >= self.fundamental.len() {
            return None;
        }
        Some(self.fundamental.remove(index))
    }

    pub fn drill(&self, slot: DrillSlot) -> Option<&Drill> {
        match slot {
            DrillSlot::Warmup => Some(&self.warmup),
            DrillSlot::Fundamental(index) => self.fundamental.get(index),
            DrillSlot::Final => Some(&self.final_drill),
        }
    }

    pub fn drill_mut(&mut self, slot: DrillSlot) -> Option<&mut Drill> {
        match slot {
            DrillSlot::Warmup => Some(&mut self.warmup),
            DrillSlot::Fundamental(index) => self.fundamental.get_mut(index),
            DrillSlot::Final => Some(&mut self.final_drill),
        }
    }

    /// Replaces the diagram of one drill. Returns false if the slot does not exist.
    pub fn set_schema(&mut self, slot: DrillSlot, schema: TacticalSchema) -> bool {
        match self.drill_mut(slot) {
            Some(drill) => {
                drill.schema = schema;
                true
            }
            None => false,
        }
    }

    /// Iterates every drill with its slot, in document order.
    pub fn drills(&self) -> impl Iterator<Item = (DrillSlot, &Drill)> {
        std::iter::once((DrillSlot::Warmup, &self.warmup))
            .chain(
                self.fundamental
                    .iter()
                    .enumerate()
                    .map(|(index, drill)| (DrillSlot::Fundamental(index), drill)),
            )
            .chain(std::iter::once((DrillSlot::Final, &self.final_drill)))
    }
}

/// One phase of a lesson plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Drill {
    pub title: String,
    /// Free text such as "15 min".
    pub duration: String,
    pub goal: String,
    pub method: String,
    pub instructions: Vec<String>,
    pub variations: Variations,
    pub success_criteria: Vec<String>,
    pub evaluation_criteria: Vec<EvaluationCriterion>,
    pub schema: TacticalSchema,
}

impl Drill {
    /// Creates an empty drill with the default duration.
    pub fn blank(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration: BLANK_DRILL_DURATION.to_string(),
            ..Self::default()
        }
    }
}

/// Ways to adapt a drill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Variations {
    pub easier: String,
    pub harder: String,
    pub time_limited: String,
}

/// A graded evaluation criterion, 0 to 2 points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationCriterion {
    pub description: String,
    pub points_0: String,
    pub points_1: String,
    pub points_2: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::Point, scene::BoardItem};

    #[test]
    fn test_blank_lesson() {
        let lesson = LessonPlan::blank();
        assert_eq!(lesson.title, "Nouvelle Séance");
        assert_eq!(lesson.duration, 60);
        assert_eq!(lesson.warmup.title, "Échauffement");
        assert_eq!(lesson.fundamental.len(), 1);
        assert_eq!(lesson.fundamental[0].title, "Situation 1");
        assert_eq!(lesson.final_drill.title, "Bilan");
        assert_eq!(lesson.warmup.duration, "15 min");
    }

    #[test]
    fn test_add_and_remove_fundamental() {
        let mut lesson = LessonPlan::blank();
        assert_eq!(lesson.add_fundamental_drill(), DrillSlot::Fundamental(1));
        assert_eq!(lesson.fundamental[1].title, "Situation 2");

        assert!(lesson.remove_fundamental_drill(5).is_none());
        let removed = lesson.remove_fundamental_drill(0).unwrap();
        assert_eq!(removed.title, "Situation 1");
        assert!(lesson.remove_fundamental_drill(0).is_none());
        assert_eq!(lesson.fundamental.len(), 1);
    }

    #[test]
    fn test_set_schema() {
        let mut lesson = LessonPlan::blank();
        let schema = TacticalSchema::from_items("x", vec![BoardItem::new("1", "cone", Point::new(5.0, 5.0))]);
        assert!(lesson.set_schema(DrillSlot::Final, schema.clone()));
        assert_eq!(lesson.final_drill.schema, schema);
        assert!(!lesson.set_schema(DrillSlot::Fundamental(3), schema));
    }

    #[test]
    fn test_drills_order() {
        let mut lesson = LessonPlan::blank();
        lesson.add_fundamental_drill();
        let slots: Vec<String> = lesson.drills().map(|(slot, _)| slot.to_string()).collect();
        assert_eq!(slots, vec!["warmup", "fundamental-1", "fundamental-2", "final"]);
    }

    #[test]
    fn test_missing_arrays_default() {
        let json = r#"{"title": "Passe", "warmup": {"title": "Jeu"}, "final": {"title": "Bilan"}}"#;
        let lesson: LessonPlan = serde_json::from_str(json).unwrap();
        assert!(lesson.fundamental.is_empty());
        assert!(lesson.warmup.instructions.is_empty());
        assert!(lesson.warmup.evaluation_criteria.is_empty());
        assert_eq!(lesson.final_drill.title, "Bilan");
    }

    #[test]
    fn test_wire_names() {
        let mut drill = Drill::blank("A");
        drill.variations.time_limited = "2 min".to_string();
        drill.evaluation_criteria.push(EvaluationCriterion {
            description: "Passe".to_string(),
            points_0: "jamais".to_string(),
            ..EvaluationCriterion::default()
        });
        let value = serde_json::to_value(&drill).unwrap();
        assert_eq!(value["variations"]["timeLimited"], "2 min");
        assert_eq!(value["evaluationCriteria"][0]["points_0"], "jamais");
        assert!(value.get("successCriteria").is_some());

        let lesson = serde_json::to_value(LessonPlan::blank()).unwrap();
        assert!(lesson.get("final").is_some());
    }
}
