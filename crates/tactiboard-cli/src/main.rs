//! `tactiboard` binary: renders a lesson plan's drill diagrams.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use tactiboard::TactiboardError;
use tactiboard_cli::{Args, error_adapter::to_reportable};

/// Parses the requested level, falling back to `warn` on unknown names.
fn log_level(name: &str) -> LevelFilter {
    LevelFilter::from_str(name).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {name}. Using 'warn' instead.");
        LevelFilter::Warn
    })
}

/// Logs the failure as a miette report, or as plain text if rendering fails.
fn report(err: &TactiboardError) {
    let mut rendered = String::new();
    match miette::GraphicalReportHandler::new().render_report(&mut rendered, &to_reportable(err)) {
        Ok(()) => error!("{rendered}"),
        Err(_) => error!("Lesson rendering failed: {err}"),
    }
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    let level = log_level(&args.log_level);
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();

    info!(level:?; "Starting Tactiboard");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = tactiboard_cli::run(&args) {
        report(&err);
        process::exit(1);
    }

    info!("Lesson rendered");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_names() {
        assert_eq!(log_level("debug"), LevelFilter::Debug);
        assert_eq!(log_level("OFF"), LevelFilter::Off);
        assert_eq!(log_level("loud"), LevelFilter::Warn);
    }
}
