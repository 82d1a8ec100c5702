//! PDF document writer.
//!
//! Assembles complete PDF documents with proper structure:
//! header, body, xref table, and trailer.

use super::content_stream::ContentStreamBuilder;
use super::font_metrics::FontStyle;
use super::object_serializer::ObjectSerializer;
use crate::error::Result;
use crate::object::{Dictionary, Object, ObjectRef};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::io::Write;

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.4")
    pub version: String,
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// Creation timestamp
    pub creation_date: Option<DateTime<Utc>>,
    /// Whether to compress content streams
    pub compress: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.4".to_string(),
            title: None,
            subject: None,
            creator: None,
            creation_date: None,
            compress: false,
        }
    }
}

impl PdfWriterConfig {
    /// Set document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set document subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set creator application.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the creation timestamp.
    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// Enable or disable content stream compression (FlateDecode).
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Compress data using Flate/Deflate compression.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Encode an info-dictionary text string: literal for ASCII, UTF-16BE otherwise.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        ObjectSerializer::string(text)
    } else {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::String(bytes)
    }
}

/// A page being built.
pub struct PageBuilder<'a> {
    writer: &'a mut PdfWriter,
    page_index: usize,
}

impl<'a> PageBuilder<'a> {
    /// Add WinAnsi-encoded text with its baseline origin at (x, y).
    pub fn add_text(&mut self, encoded: &[u8], x: f32, y: f32, style: FontStyle, size: f32) -> &mut Self {
        self.writer.fonts_used.insert(style);
        let page = &mut self.writer.pages[self.page_index];
        page.content_builder
            .set_font(style.resource_name(), size)
            .text(encoded, x, y);
        self
    }

    /// Finish building this page and return to the writer.
    pub fn finish(self) -> &'a mut PdfWriter {
        let page = &mut self.writer.pages[self.page_index];
        page.content_builder.end_text();
        self.writer
    }
}

/// Internal page data.
struct PageData {
    width: f32,
    height: f32,
    content_builder: ContentStreamBuilder,
}

/// PDF document writer.
///
/// Builds a complete PDF document with pages, fonts, and content.
pub struct PdfWriter {
    config: PdfWriterConfig,
    pages: Vec<PageData>,
    /// Faces referenced by any page
    fonts_used: BTreeSet<FontStyle>,
}

impl PdfWriter {
    /// Create a new PDF writer with default config.
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    /// Create a PDF writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            fonts_used: BTreeSet::new(),
        }
    }

    /// Add a page with the given dimensions in points.
    pub fn add_page(&mut self, width: f32, height: f32) -> PageBuilder<'_> {
        let page_index = self.pages.len();
        let mut content_builder = ContentStreamBuilder::new();
        content_builder.fill_gray(0.0);
        self.pages.push(PageData {
            width,
            height,
            content_builder,
        });
        PageBuilder {
            writer: self,
            page_index,
        }
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Build the complete PDF document.
    pub fn finish(self) -> Result<Vec<u8>> {
        let serializer = ObjectSerializer::new();

        // Object numbering: catalog, page tree, fonts, (page, content) pairs, info.
        let catalog_id = 1u32;
        let pages_id = 2u32;
        let mut next_id = 3u32;

        let mut objects: Vec<(u32, Object)> = Vec::new();

        let mut font_resources = Dictionary::new();
        for style in &self.fonts_used {
            let font_id = next_id;
            next_id += 1;
            objects.push((
                font_id,
                ObjectSerializer::dict(vec![
                    ("Type", ObjectSerializer::name("Font")),
                    ("Subtype", ObjectSerializer::name("Type1")),
                    ("BaseFont", ObjectSerializer::name(style.base_font())),
                    ("Encoding", ObjectSerializer::name("WinAnsiEncoding")),
                ]),
            ));
            font_resources.insert(
                style.resource_name().to_string(),
                Object::Reference(ObjectRef::new(font_id, 0)),
            );
        }

        let mut page_refs = Vec::with_capacity(self.pages.len());
        for page_data in &self.pages {
            let page_id = next_id;
            let content_id = next_id + 1;
            next_id += 2;

            let raw_content = page_data.content_builder.build()?;
            let mut content_dict = Dictionary::new();
            let content_bytes = if self.config.compress {
                content_dict.insert("Filter".to_string(), ObjectSerializer::name("FlateDecode"));
                compress_data(&raw_content)?
            } else {
                raw_content
            };

            let page_obj = ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Page")),
                ("Parent", ObjectSerializer::reference(pages_id, 0)),
                (
                    "MediaBox",
                    ObjectSerializer::rect(0.0, 0.0, page_data.width as f64, page_data.height as f64),
                ),
                ("Contents", ObjectSerializer::reference(content_id, 0)),
                (
                    "Resources",
                    ObjectSerializer::dict(vec![("Font", Object::Dictionary(font_resources.clone()))]),
                ),
            ]);

            page_refs.push(ObjectSerializer::reference(page_id, 0));
            objects.push((page_id, page_obj));
            objects.push((
                content_id,
                Object::Stream {
                    dict: content_dict,
                    data: bytes::Bytes::from(content_bytes),
                },
            ));
        }

        let pages_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Pages")),
            ("Kids", Object::Array(page_refs)),
            ("Count", ObjectSerializer::integer(self.pages.len() as i64)),
        ]);
        let catalog_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Catalog")),
            ("Pages", ObjectSerializer::reference(pages_id, 0)),
        ]);

        let info_id = next_id;
        next_id += 1;
        let mut info_entries = Vec::new();
        if let Some(title) = &self.config.title {
            info_entries.push(("Title", text_string(title)));
        }
        if let Some(subject) = &self.config.subject {
            info_entries.push(("Subject", text_string(subject)));
        }
        if let Some(creator) = &self.config.creator {
            info_entries.push(("Creator", text_string(creator)));
        }
        info_entries.push((
            "Producer",
            text_string(concat!("inspection_report ", env!("CARGO_PKG_VERSION"))),
        ));
        if let Some(date) = &self.config.creation_date {
            let stamp = date.format("D:%Y%m%d%H%M%SZ").to_string();
            info_entries.push(("CreationDate", ObjectSerializer::string(stamp)));
        }

        objects.push((catalog_id, catalog_obj));
        objects.push((pages_id, pages_obj));
        objects.push((info_id, ObjectSerializer::dict(info_entries)));
        objects.sort_by_key(|(id, _)| *id);

        let mut output = Vec::new();
        writeln!(output, "%PDF-{}", self.config.version)?;
        // Binary marker (recommended for binary content)
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        let mut xref_offsets = Vec::with_capacity(objects.len());
        for (id, obj) in &objects {
            xref_offsets.push(output.len());
            serializer.write_indirect(&mut output, *id, 0, obj)?;
        }

        let xref_start = output.len();
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", next_id)?;
        // Object 0 is always free
        writeln!(output, "0000000000 65535 f ")?;
        for offset in &xref_offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(next_id as i64)),
            ("Root", ObjectSerializer::reference(catalog_id, 0)),
            ("Info", ObjectSerializer::reference(info_id, 0)),
        ]);
        writeln!(output, "trailer")?;
        serializer.write_object(&mut output, &trailer)?;
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        write!(output, "%%EOF")?;

        log::debug!(
            "Wrote PDF: {} pages, {} objects, {} bytes",
            self.pages.len(),
            objects.len(),
            output.len()
        );
        Ok(output)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
