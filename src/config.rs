//! Report layout configuration.
//!
//! All lengths are in PDF points (1/72 inch). Defaults reproduce the
//! classic report layout: A4, 10 mm side and top margins, 15 mm bottom
//! margin, a 16 pt title on a 10 mm line and 12 pt body text on 8 mm lines.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Points per millimetre.
pub const MM: f32 = 72.0 / 25.4;

/// Standard page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// A4 (210mm x 297mm)
    A4,
    /// US Letter (8.5" x 11")
    Letter,
    /// Custom dimensions in points
    Custom {
        /// Width in points
        width: f32,
        /// Height in points
        height: f32,
    },
}

impl PageSize {
    /// Get dimensions in points (1 inch = 72 points).
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.0, 842.0),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Report rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Page size
    pub page_size: PageSize,
    /// Left margin in points
    pub margin_left: f32,
    /// Right margin in points
    pub margin_right: f32,
    /// Top margin in points
    pub margin_top: f32,
    /// Bottom margin in points; no line box may extend into it
    pub margin_bottom: f32,
    /// Centered title text
    pub title: String,
    /// Title font size
    pub title_font_size: f32,
    /// Height of the title line box
    pub title_line_height: f32,
    /// Vertical space after the title
    pub title_gap: f32,
    /// Heading and body font size
    pub font_size: f32,
    /// Height of heading and body line boxes
    pub line_height: f32,
    /// Vertical space before each section heading
    pub section_gap: f32,
    /// Compress page content streams
    pub compress: bool,
    /// Creator application recorded in the document info
    pub creator: Option<String>,
    /// Creation timestamp recorded in the document info
    #[serde(skip)]
    pub creation_date: Option<DateTime<Utc>>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin_left: 10.0 * MM,
            margin_right: 10.0 * MM,
            margin_top: 10.0 * MM,
            margin_bottom: 15.0 * MM,
            title: "Car Inspection Report".to_string(),
            title_font_size: 16.0,
            title_line_height: 10.0 * MM,
            title_gap: 10.0 * MM,
            font_size: 12.0,
            line_height: 8.0 * MM,
            section_gap: 5.0 * MM,
            compress: false,
            creator: Some("CAROBAR Inspection Form".to_string()),
            creation_date: None,
        }
    }
}

impl ReportConfig {
    /// Create configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file; missing keys take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every line box fits inside the margins of an empty page.
    pub fn validate(&self) -> Result<()> {
        let printable_height = self.printable_height();
        if self.printable_width() <= 0.0 || printable_height <= 0.0 {
            return Err(Error::InvalidConfig(
                "margins leave no printable area".to_string(),
            ));
        }
        if self.font_size <= 0.0 || self.title_font_size <= 0.0 {
            return Err(Error::InvalidConfig("font sizes must be positive".to_string()));
        }
        for (name, height) in [
            ("title_line_height", self.title_line_height),
            ("line_height", self.line_height),
        ] {
            if height <= 0.0 || height > printable_height {
                return Err(Error::InvalidConfig(format!(
                    "{} {} must be positive and at most the printable height {}",
                    name, height, printable_height
                )));
            }
        }
        Ok(())
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// Set individual margins (left, right, top, bottom).
    pub fn with_margins(mut self, left: f32, right: f32, top: f32, bottom: f32) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self.margin_top = top;
        self.margin_bottom = bottom;
        self
    }

    /// Set the title text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body font size and line box height.
    pub fn with_body_text(mut self, font_size: f32, line_height: f32) -> Self {
        self.font_size = font_size;
        self.line_height = line_height;
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Set the creation timestamp.
    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// Width available to text between the side margins.
    pub fn printable_width(&self) -> f32 {
        let (width, _) = self.page_size.dimensions();
        width - self.margin_left - self.margin_right
    }

    /// Height available to line boxes between the top and bottom margins.
    pub fn printable_height(&self) -> f32 {
        let (_, height) = self.page_size.dimensions();
        height - self.margin_top - self.margin_bottom
    }
}
