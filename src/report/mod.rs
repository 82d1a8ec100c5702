//! Inspection report rendering.
//!
//! Rendering runs in two stages. [`ReportRenderer::layout`] places every
//! line of the report on pages, and [`ReportRenderer::render`] hands the
//! placed lines to the [`crate::writer`] to produce the PDF bytes.

mod layout;
mod renderer;

pub use layout::{wrap_text, Align, LayoutPage, PlacedLine, ReportLayout};
pub use renderer::{render, ReportRenderer};
