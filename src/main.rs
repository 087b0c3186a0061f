//! `scansion` - command-line driver for the lyric prosody engine.
//!
//! Reads a lyric file, runs the analysis pipeline, and prints a per-line
//! report. With `--auto`, the section meter policy overrides estimated
//! stress first. Set `SCANSION_SAVE` to also persist the lines as JSON.

use scansion::analysis::{line_reports, LineReport};
use scansion::config::{Config, EstimatorConfig, OutputFormat};
use scansion::error::{Error, Result};
use scansion::session::{Command, JsonFileSink, NullSink, Session};
use scansion::types::{Line, Section};
use serde::Serialize;
use std::env;

/// Everything the JSON output carries.
#[derive(Serialize)]
struct ReportDocument<'a> {
    lines: &'a [Line],
    sections: &'a [Section],
    reports: &'a [LineReport],
}

fn print_usage() {
    println!("Usage: scansion [--auto] [--json] <lyric-file>");
    println!();
    println!("  --auto   apply the section meter policy before reporting");
    println!("  --json   emit the full analysis as JSON");
    println!();
    println!("Environment: SCANSION_OUTPUT=text|json, SCANSION_SAVE=<path>");
}

fn print_text_report(lines: &[Line], sections: &[Section], reports: &[LineReport]) {
    for (i, line) in lines.iter().enumerate() {
        if line.is_section_title {
            println!("{}", line.text);
        } else if line.syllables.is_empty() {
            println!();
        } else if let Some(report) = reports.iter().find(|r| r.line_index == i) {
            println!(
                "  {:<40} {:<12} {:<10} {:>3}",
                line.text, line.stress_pattern, report.meter, report.score
            );
        }
    }
    println!();
    for section in sections {
        println!(
            "{}: lines {}..{} ({} line{})",
            section.kind,
            section.start,
            section.end,
            section.len(),
            if section.len() == 1 { "" } else { "s" }
        );
    }
}

fn run() -> Result<()> {
    let config = Config::load()?;

    let mut json = config.output == OutputFormat::Json;
    let mut auto = false;
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--auto" => auto = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other if other.starts_with('-') => {
                return Err(Error::config(
                    format!("unknown flag {other:?}"),
                    "Run with --help for usage",
                ));
            }
            other => path = Some(other.to_string()),
        }
    }
    let Some(path) = path else {
        print_usage();
        return Err(Error::config(
            "no lyric file given",
            "Pass the path of a lyric text file",
        ));
    };

    let lyric = fs_err::read_to_string(&path)?;
    let estimator = EstimatorConfig::default();
    let mut session = Session::from_lyric(&lyric, &estimator);

    if auto {
        session.enter_edit();
        session = session.apply(&Command::AutoAnalyze, &mut NullSink)?;
        session.exit_edit();
    }

    let reports = line_reports(session.lines());
    if json {
        let document = ReportDocument {
            lines: session.lines(),
            sections: session.sections(),
            reports: &reports,
        };
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print_text_report(session.lines(), session.sections(), &reports);
    }

    if let Some(save_path) = config.save_path {
        let mut sink = JsonFileSink::new(save_path);
        session.apply(&Command::Save, &mut sink)?;
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("scansion: {e}");
        std::process::exit(1);
    }
}
