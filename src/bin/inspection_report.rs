//! Generate an inspection report from saved form state
//!
//! Reads the form state as JSON, runs one submission and writes the PDF.
//!
//! Usage:
//!   inspection_report form.json
//!   inspection_report form.json --output-dir reports --config report.json --verbose
//!
//! Exit codes: 0 report written, 1 form rejected, 2 generation failed.

use chrono::Utc;
use inspection_report::{submit, InspectionForm, ReportConfig, SubmissionOutcome};
use std::path::PathBuf;
use std::process::ExitCode;

struct CliConfig {
    form_path: PathBuf,
    output_dir: PathBuf,
    config_path: Option<PathBuf>,
    verbose: bool,
}

impl CliConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut form_path = None;
        let mut output_dir = PathBuf::from(".");
        let mut config_path = None;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output-dir" => {
                    i += 1;
                    let value = args.get(i).ok_or("--output-dir requires a directory")?;
                    output_dir = PathBuf::from(value);
                },
                "--config" => {
                    i += 1;
                    let value = args.get(i).ok_or("--config requires a file")?;
                    config_path = Some(PathBuf::from(value));
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                flag if flag.starts_with('-') => {
                    return Err(format!("unknown option {}", flag));
                },
                path => {
                    if form_path.is_some() {
                        return Err(format!("unexpected argument {}", path));
                    }
                    form_path = Some(PathBuf::from(path));
                },
            }
            i += 1;
        }

        Ok(Self {
            form_path: form_path.ok_or("missing form state file")?,
            output_dir,
            config_path,
            verbose,
        })
    }
}

fn usage() {
    eprintln!("Usage: inspection_report <form.json> [--output-dir DIR] [--config FILE] [--verbose]");
}

fn main() -> ExitCode {
    let cli = match CliConfig::from_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            usage();
            return ExitCode::from(2);
        },
    };

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let form = match InspectionForm::from_json_file(&cli.form_path) {
        Ok(form) => form,
        Err(e) => {
            eprintln!("❌ Could not read form state {}: {}", cli.form_path.display(), e);
            return ExitCode::from(2);
        },
    };

    let config = match &cli.config_path {
        Some(path) => match ReportConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Could not read configuration {}: {}", path.display(), e);
                return ExitCode::from(2);
            },
        },
        None => ReportConfig::default(),
    };

    match submit(&form, &config, Utc::now()) {
        SubmissionOutcome::Ready(download) => match download.save_to(&cli.output_dir) {
            Ok(path) => {
                println!("✅ Inspection report generated successfully!");
                println!("   {}", path.display());
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("❌ Unexpected error: {}", e);
                ExitCode::from(2)
            },
        },
        SubmissionOutcome::Rejected { message } => {
            eprintln!("⚠️ {}", message);
            ExitCode::from(1)
        },
        SubmissionOutcome::Failed { message, detail } => {
            eprintln!("❌ {}", message);
            eprintln!("{}", detail);
            ExitCode::from(2)
        },
    }
}
