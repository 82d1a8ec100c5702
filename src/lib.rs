// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::should_implement_trait)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Inspection Report
//!
//! Vehicle inspection forms collected into ordered records and rendered as
//! paginated PDF reports.
//!
//! ## Pipeline
//!
//! ```text
//! InspectionForm ──collect()──▶ InspectionRecord ──render()──▶ PDF bytes
//!                                                     │
//!                              derive_filename() ─────┴──▶ ReportDownload
//! ```
//!
//! - **Collection**: [`InspectionForm::collect`] validates the required
//!   fields and the model year and produces an [`InspectionRecord`].
//! - **Rendering**: [`render`] / [`ReportRenderer`] lay the record out as a
//!   title, the Basic Information block and one block per section, breaking
//!   pages at the bottom margin.
//! - **Submission**: [`submit`] runs both steps, names the file and turns
//!   every failure into a user-facing [`SubmissionOutcome`].
//!
//! ## Quick Start
//!
//! ```
//! use chrono::Utc;
//! use inspection_report::{submit, InspectionForm, ReportConfig, SubmissionOutcome};
//!
//! let form = InspectionForm {
//!     owner_name: "Jane Doe".to_string(),
//!     car_model: "Civic".to_string(),
//!     year: 2020,
//!     ..InspectionForm::default()
//! };
//!
//! match submit(&form, &ReportConfig::default(), Utc::now()) {
//!     SubmissionOutcome::Ready(download) => {
//!         assert_eq!(download.file_name, "Jane Doe_Civic_Inspection.pdf");
//!     },
//!     other => panic!("{}", other.message()),
//! }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 (<http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license (<http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Form catalogue and collected data
pub mod form;
pub mod record;
pub mod schema;

// Rendering
pub mod config;
pub mod object;
pub mod report;
pub mod writer;

// Delivery
pub mod filename;
pub mod submission;

pub use config::{PageSize, ReportConfig};
pub use error::{Error, RenderError, RequiredField, Result, ValidationError};
pub use filename::derive_filename;
pub use form::{ImageKind, InspectionForm, PhotoAttachment};
pub use record::{FieldGroup, InspectionRecord, ScalarValue, Section, MISSING_VALUE};
pub use report::{render, ReportLayout, ReportRenderer};
pub use submission::{submit, ReportDownload, SubmissionOutcome};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
