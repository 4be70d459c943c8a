//! CLI logic for the Tactiboard diagram tool.
//!
//! This module contains the core CLI logic: load a lesson plan, render the
//! diagram of every drill and write the requested exports.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::info;

use tactiboard::{
    BoardBuilder, TactiboardError,
    export::{document::SheetExporter, image::SvgDataUrl},
};

/// File name of the lesson sheet inside the output directory.
pub const SHEET_FILE_NAME: &str = "lesson.md";

/// Run the Tactiboard CLI application
///
/// This function loads the input lesson plan, renders one SVG per drill
/// into the output directory and, when asked, writes the lesson sheet and
/// the image data URLs next to them.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TactiboardError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed lesson documents
/// - Export errors
pub fn run(args: &Args) -> Result<(), TactiboardError> {
    info!(
        input_path = args.input,
        output_dir = args.output;
        "Processing lesson"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?.with_size(args.width, args.height);

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    let builder = BoardBuilder::new(app_config);
    let lesson = builder.parse_lesson(&source)?;

    let output_dir = Path::new(&args.output);
    fs::create_dir_all(output_dir)?;

    for (slot, board) in builder.render_lesson(&lesson) {
        let svg_path = output_dir.join(format!("{slot}.svg"));
        fs::write(&svg_path, board.to_svg_string())?;
        info!(path = svg_path.display().to_string(); "SVG exported successfully");

        if args.data_url {
            let url = builder.export_image(&SvgDataUrl, &board)?;
            let url_path = output_dir.join(format!("{slot}.dataurl.txt"));
            fs::write(&url_path, url)?;
            info!(path = url_path.display().to_string(); "Data URL exported");
        }
    }

    if args.sheet {
        let sheet = builder.export_document(&SheetExporter, &lesson)?;
        let sheet_path = output_dir.join(SHEET_FILE_NAME);
        fs::write(&sheet_path, sheet)?;
        info!(path = sheet_path.display().to_string(); "Lesson sheet exported");
    }

    Ok(())
}
