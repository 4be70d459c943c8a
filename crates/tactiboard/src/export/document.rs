//! Lesson-sheet export.
//!
//! [`SheetExporter`] lays a lesson plan out as a Markdown teaching sheet:
//! a header with level, duration and material, the objective, then the
//! three phases of the lesson with one table per drill.

use std::fmt::Write;

use log::info;

use tactiboard_core::lesson::{Drill, LessonPlan};

use super::ExportError;

/// Turns a lesson plan into a downloadable document.
pub trait DocumentExporter {
    /// Encodes the lesson plan. The plan is only read.
    fn to_document_blob(&self, lesson: &LessonPlan) -> Result<Vec<u8>, ExportError>;
}

/// Markdown lesson sheet.
///
/// # Examples
///
/// ```
/// use tactiboard::export::document::{DocumentExporter, SheetExporter};
/// use tactiboard_core::lesson::LessonPlan;
///
/// let blob = SheetExporter.to_document_blob(&LessonPlan::blank()).unwrap();
/// let sheet = String::from_utf8(blob).unwrap();
/// assert!(sheet.starts_with("# FICHE SÉANCE EPS - BASKETBALL"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetExporter;

impl SheetExporter {
    /// Renders the sheet as text.
    pub fn render(&self, lesson: &LessonPlan) -> Result<String, ExportError> {
        let mut sheet = String::new();
        write_sheet(&mut sheet, lesson).map_err(|err| ExportError::Document(err.to_string()))?;
        Ok(sheet)
    }
}

impl DocumentExporter for SheetExporter {
    fn to_document_blob(&self, lesson: &LessonPlan) -> Result<Vec<u8>, ExportError> {
        let sheet = self.render(lesson)?;
        info!(title = lesson.title.as_str(), bytes = sheet.len(); "Lesson sheet exported");
        Ok(sheet.into_bytes())
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Table cells cannot hold raw newlines or pipes.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn write_sheet(out: &mut String, lesson: &LessonPlan) -> std::fmt::Result {
    writeln!(out, "# FICHE SÉANCE EPS - {}", lesson.sport.to_uppercase())?;
    writeln!(out)?;
    writeln!(out, "| Niveau: {} | Durée: {} min |", cell(&lesson.level), lesson.duration)?;
    writeln!(out, "|---|---|")?;
    writeln!(out, "| Matériel: {} | Effectif: Variable |", cell(&lesson.material))?;
    writeln!(out)?;
    writeln!(out, "## OBJECTIF: {}", lesson.objective)?;
    writeln!(out)?;

    writeln!(out, "## 1. ÉCHAUFFEMENT / PRISE EN MAIN")?;
    writeln!(out)?;
    writeln!(
        out,
        "**{} ({})**",
        or_default(&lesson.warmup.title, "Échauffement"),
        lesson.warmup.duration
    )?;
    writeln!(out)?;
    write_drill_table(out, &lesson.warmup)?;

    writeln!(out, "## 2. PARTIE FONDAMENTALE")?;
    writeln!(out)?;
    for (index, drill) in lesson.fundamental.iter().enumerate() {
        writeln!(out, "**Situation {}: {} ({})**", index + 1, drill.title, drill.duration)?;
        writeln!(out)?;
        write_drill_table(out, drill)?;
    }

    writeln!(out, "## 3. RETOUR AU CALME")?;
    writeln!(out)?;
    let cool_down = &lesson.final_drill;
    writeln!(out, "**{} ({})**", or_default(&cool_down.title, "Bilan"), cool_down.duration)?;
    writeln!(out)?;
    if !cool_down.method.is_empty() {
        writeln!(out, "{}", cool_down.method)?;
        writeln!(out)?;
    }
    writeln!(out, "Bilan: {}", cool_down.instructions.join(" "))?;
    Ok(())
}

fn write_drill_table(out: &mut String, drill: &Drill) -> std::fmt::Result {
    let mut organisation = vec!["**Dispositif:**".to_string(), cell(&drill.method)];
    organisation.push("**Consignes:**".to_string());
    organisation.extend(drill.instructions.iter().map(|i| format!("• {}", cell(i))));
    organisation.push("**Variantes:**".to_string());
    organisation.push(format!("+ {}", cell(&drill.variations.harder)));
    organisation.push(format!("- {}", cell(&drill.variations.easier)));

    let mut criteria: Vec<String> = drill
        .success_criteria
        .iter()
        .map(|c| format!("• {}", cell(c)))
        .collect();
    criteria.push("**Évaluation:**".to_string());
    criteria.extend(
        drill
            .evaluation_criteria
            .iter()
            .map(|e| format!("[0] {} / [2] {}", cell(&e.points_0), cell(&e.points_2))),
    );

    writeln!(out, "| BUT | ORGANISATION / CONSIGNES | CRITÈRES DE RÉUSSITE |")?;
    writeln!(out, "|---|---|---|")?;
    writeln!(
        out,
        "| {} | {} | {} |",
        cell(&drill.goal),
        organisation.join("<br>"),
        criteria.join("<br>")
    )?;
    writeln!(out)?;
    Ok(())
}
