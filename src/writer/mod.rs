//! PDF writing module for generating report files.
//!
//! ## Architecture
//!
//! ```text
//! ReportLayout (positioned lines per page)
//!     ↓
//! [PdfWriter] (pages, fonts, info, xref, trailer)
//!     ↓
//! [ContentStreamBuilder] (text operators per page)
//!     ↓
//! [ObjectSerializer] (PDF object syntax)
//!     ↓
//! PDF bytes
//! ```
//!
//! ## Example
//!
//! ```
//! use inspection_report::writer::{encode_win_ansi, FontStyle, PdfWriter};
//!
//! let mut writer = PdfWriter::new();
//! let mut page = writer.add_page(595.0, 842.0);
//! page.add_text(&encode_win_ansi("Hello").unwrap(), 72.0, 720.0, FontStyle::Regular, 12.0);
//! page.finish();
//! let bytes = writer.finish().unwrap();
//! assert!(bytes.starts_with(b"%PDF-"));
//! ```

mod content_stream;
mod font_metrics;
mod object_serializer;
mod pdf_writer;

pub use content_stream::{ContentStreamBuilder, ContentStreamOp};
pub use font_metrics::{encode_win_ansi, FontInfo, FontStyle};
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::{PageBuilder, PdfWriter, PdfWriterConfig};
