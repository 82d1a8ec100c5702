//! Record to PDF rendering.

use super::layout::{Align, LayoutEngine, ReportLayout};
use crate::config::ReportConfig;
use crate::error::{RenderError, Result};
use crate::record::{display_value, FieldGroup, InspectionRecord};
use crate::schema::{BASIC_FIELD_NAMES, BASIC_INFORMATION};
use crate::writer::{encode_win_ansi, FontStyle, PdfWriter, PdfWriterConfig};
use bytes::Bytes;

/// Render a record with the default configuration.
///
/// ```
/// use inspection_report::{render, InspectionRecord, Section};
///
/// let mut record = InspectionRecord::new();
/// record
///     .insert_scalar("Owner Name", "Jane Doe")
///     .insert_scalar("Car Model", "Civic")
///     .insert_section("Tires & Wheels", Section::new().with_field("Tire Condition", "Good"));
///
/// let pdf = render(&record).unwrap();
/// assert!(pdf.starts_with(b"%PDF-"));
/// ```
pub fn render(record: &InspectionRecord) -> Result<Bytes> {
    ReportRenderer::default().render(record)
}

/// Renders inspection records into PDF documents.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    config: ReportConfig,
}

impl ReportRenderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// The renderer's configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Place every report line on pages.
    ///
    /// The header block (title, then Basic Information with the four basic
    /// fields in fixed order) always comes first. Every other top-level
    /// entry follows in record order as a heading and one line per field.
    pub fn layout(&self, record: &InspectionRecord) -> Result<ReportLayout> {
        let config = &self.config;
        config.validate()?;
        let mut engine = LayoutEngine::new(config);
        let (size, height) = (config.font_size, config.line_height);

        engine.paragraph(
            &config.title,
            FontStyle::Bold,
            config.title_font_size,
            config.title_line_height,
            Align::Center,
        );
        engine.gap(config.title_gap);

        engine.paragraph(BASIC_INFORMATION.title, FontStyle::Bold, size, height, Align::Left);
        for name in BASIC_FIELD_NAMES {
            if let Some(FieldGroup::Section(_)) = record.get(name) {
                return Err(RenderError::MalformedRecord {
                    entry: name.to_string(),
                    reason: "basic field holds a section".to_string(),
                }
                .into());
            }
            let text = format!("{}: {}", name, record.scalar_display(name));
            engine.paragraph(&text, FontStyle::Regular, size, height, Align::Left);
        }

        for (name, group) in record.sections() {
            let section = match group {
                FieldGroup::Section(section) => section,
                FieldGroup::Scalar(_) => {
                    return Err(RenderError::MalformedRecord {
                        entry: name.to_string(),
                        reason: "expected a section, found a scalar".to_string(),
                    }
                    .into());
                }
            };

            engine.gap(config.section_gap);
            engine.paragraph(name, FontStyle::Bold, size, height, Align::Left);
            for (label, value) in section.iter() {
                let text = format!("{}: {}", label, display_value(value));
                engine.paragraph(&text, FontStyle::Regular, size, height, Align::Left);
            }
        }

        Ok(engine.finish())
    }

    /// Render a record into a complete PDF document.
    pub fn render(&self, record: &InspectionRecord) -> Result<Bytes> {
        let layout = self.layout(record)?;

        let mut pdf_config = PdfWriterConfig::default()
            .with_title(self.config.title.clone())
            .with_subject(format!(
                "{} - {}",
                record.scalar_display("Owner Name"),
                record.scalar_display("Car Model")
            ))
            .with_compress(self.config.compress);
        if let Some(creator) = &self.config.creator {
            pdf_config = pdf_config.with_creator(creator.clone());
        }
        if let Some(date) = self.config.creation_date {
            pdf_config = pdf_config.with_creation_date(date);
        }

        let mut writer = PdfWriter::with_config(pdf_config);
        for page in &layout.pages {
            let mut builder = writer.add_page(layout.page_width, layout.page_height);
            for line in page.lines.iter().filter(|line| !line.text.is_empty()) {
                let encoded =
                    encode_win_ansi(&line.text).map_err(|ch| RenderError::UnsupportedCharacter {
                        ch,
                        line: line.text.clone(),
                    })?;
                builder.add_text(&encoded, line.x, line.baseline, line.style, line.size);
            }
            builder.finish();
        }

        let bytes = writer.finish()?;
        log::info!(
            "Rendered inspection report: {} page(s), {} bytes",
            layout.page_count(),
            bytes.len()
        );
        Ok(Bytes::from(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::record::Section;

    fn sample() -> InspectionRecord {
        let mut record = InspectionRecord::new();
        record
            .insert_scalar("Owner Name", "Jane Doe")
            .insert_scalar("Car Model", "Civic")
            .insert_scalar("Year", 2020i64)
            .insert_scalar("License Plate", "")
            .insert_section(
                "Engine & Transmission",
                Section::new()
                    .with_field("Engine Condition", "Good")
                    .with_field("Oil Leaks", "No"),
            )
            .insert_section("Additional Comments", Section::new().with_field("Comments", ""));
        record
    }

    #[test]
    fn test_layout_order() {
        let layout = ReportRenderer::default().layout(&sample()).unwrap();
        assert_eq!(
            layout.texts(),
            vec![
                "Car Inspection Report",
                "Basic Information",
                "Owner Name: Jane Doe",
                "Car Model: Civic",
                "Year: 2020",
                "License Plate: N/A",
                "Engine & Transmission",
                "Engine Condition: Good",
                "Oil Leaks: No",
                "Additional Comments",
                "Comments: N/A",
            ]
        );
    }

    #[test]
    fn test_header_uses_bold_faces() {
        let layout = ReportRenderer::default().layout(&sample()).unwrap();
        let lines: Vec<_> = layout.lines().collect();
        assert_eq!(lines[0].style, FontStyle::Bold);
        assert_eq!(lines[0].size, 16.0);
        assert_eq!(lines[1].style, FontStyle::Bold);
        assert_eq!(lines[2].style, FontStyle::Regular);
        assert_eq!(lines[6].style, FontStyle::Bold);
    }

    #[test]
    fn test_missing_basic_fields_render_placeholder() {
        let layout = ReportRenderer::default().layout(&InspectionRecord::new()).unwrap();
        assert_eq!(
            &layout.texts()[2..],
            &["Owner Name: N/A", "Car Model: N/A", "Year: N/A", "License Plate: N/A"]
        );
    }

    #[test]
    fn test_scalar_outside_basic_fields_is_malformed() {
        let mut record = sample();
        record.insert_scalar("Mileage", 42000i64);
        let err = ReportRenderer::default().layout(&record).unwrap_err();
        assert!(matches!(
            err,
            Error::Render(RenderError::MalformedRecord { ref entry, .. }) if entry == "Mileage"
        ));
    }

    #[test]
    fn test_section_under_basic_key_is_malformed() {
        let mut record = sample();
        record.insert_section("Year", Section::new());
        assert!(matches!(
            render(&record),
            Err(Error::Render(RenderError::MalformedRecord { .. }))
        ));
    }

    #[test]
    fn test_unencodable_text_fails() {
        let mut record = sample();
        record.insert_scalar("Owner Name", "李雷");
        let err = render(&record).unwrap_err();
        assert!(matches!(
            err,
            Error::Render(RenderError::UnsupportedCharacter { ch: '李', ref line }) if line == "Owner Name: 李雷"
        ));
    }

    #[test]
    fn test_render_writes_metadata() {
        let pdf = render(&sample()).unwrap();
        let text = String::from_utf8_lossy(&pdf);
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("/Title (Car Inspection Report)"));
        assert!(text.contains("/Subject (Jane Doe - Civic)"));
        assert!(text.contains("/Creator (CAROBAR Inspection Form)"));
        assert!(!text.contains("/CreationDate"));
        assert!(text.contains("(Owner Name: Jane Doe) Tj"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let record = sample();
        assert_eq!(render(&record).unwrap(), render(&record).unwrap());
    }

    #[test]
    fn test_latin1_text_is_encoded() {
        let mut record = sample();
        record.insert_scalar("Owner Name", "Renée");
        let pdf = render(&record).unwrap();
        assert!(String::from_utf8_lossy(&pdf).contains("(Owner Name: Ren\\351e) Tj"));
    }
}
