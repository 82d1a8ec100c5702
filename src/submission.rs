//! Submission boundary.
//!
//! [`submit`] runs one submit action end to end: collect, render, name the
//! file. Every error is recovered here and turned into a
//! [`SubmissionOutcome`] suitable for showing to the person filling in the form.

use crate::config::ReportConfig;
use crate::error::{Error, Result, ValidationError};
use crate::filename::derive_filename;
use crate::form::InspectionForm;
use crate::report::ReportRenderer;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Media type of the generated report.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Shown when a report was generated.
pub const SUCCESS_MESSAGE: &str = "Inspection report generated successfully!";

/// Shown when a required field is blank.
pub const MISSING_FIELDS_MESSAGE: &str =
    "Please fill in at least Owner Name and Car Model before submitting.";

/// A generated report ready to be offered for download.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDownload {
    /// Suggested file name
    pub file_name: String,
    /// Media type of `bytes`
    pub media_type: &'static str,
    /// Complete PDF document
    pub bytes: Bytes,
}

impl ReportDownload {
    /// Write the report into `dir` under its file name and return the path.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        log::info!("Saved {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// Result of one submit action.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Report generated
    Ready(ReportDownload),
    /// Form state failed validation; nothing was generated
    Rejected {
        /// Warning for the user
        message: String,
    },
    /// Generation failed unexpectedly
    Failed {
        /// Short description for the user
        message: String,
        /// Full error chain
        detail: String,
    },
}

impl SubmissionOutcome {
    /// Whether a report was generated.
    pub fn is_ready(&self) -> bool {
        matches!(self, SubmissionOutcome::Ready(_))
    }

    /// Message to show the user.
    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Ready(_) => SUCCESS_MESSAGE,
            SubmissionOutcome::Rejected { message } | SubmissionOutcome::Failed { message, .. } => message,
        }
    }

    /// The download, if a report was generated.
    pub fn download(&self) -> Option<&ReportDownload> {
        match self {
            SubmissionOutcome::Ready(download) => Some(download),
            _ => None,
        }
    }
}

fn rejection_message(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingRequiredField(_) => MISSING_FIELDS_MESSAGE.to_string(),
        ValidationError::YearOutOfRange { min, max, .. } => {
            format!("Please enter a Year between {} and {}.", min, max)
        }
    }
}

/// Render an error and its sources, one per line.
fn error_chain(err: &Error) -> String {
    let mut detail = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        detail.push_str("\ncaused by: ");
        detail.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    detail
}

/// Collect the form, render the report and name the download.
///
/// `submitted_at` is recorded as the document creation date.
pub fn submit(form: &InspectionForm, config: &ReportConfig, submitted_at: DateTime<Utc>) -> SubmissionOutcome {
    let record = match form.collect() {
        Ok(record) => record,
        Err(err) => {
            log::warn!("Submission rejected: {}", err);
            return SubmissionOutcome::Rejected {
                message: rejection_message(&err),
            };
        }
    };

    let renderer = ReportRenderer::new(config.clone().with_creation_date(submitted_at));
    match renderer.render(&record) {
        Ok(bytes) => {
            let file_name = derive_filename(form.owner_name.trim(), form.car_model.trim());
            log::info!("Generated {}", file_name);
            SubmissionOutcome::Ready(ReportDownload {
                file_name,
                media_type: PDF_MEDIA_TYPE,
                bytes,
            })
        }
        Err(err) => {
            let detail = error_chain(&err);
            log::error!("Report generation failed: {}", detail);
            SubmissionOutcome::Failed {
                message: format!("Unexpected error: {}", err),
                detail,
            }
        }
    }
}
