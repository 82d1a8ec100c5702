//! PDF content stream builder.
//!
//! Builds page content streams containing text operators
//! according to PDF specification ISO 32000-1:2008 Section 9.4.

use super::object_serializer::write_escaped;
use std::io::{self, Write};

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font resource and size (Tf)
    SetFont(String, f32),
    /// Set text matrix (Tm)
    SetTextMatrix(f32, f32, f32, f32, f32, f32),
    /// Show text (Tj); bytes are already in the font's encoding
    ShowText(Vec<u8>),
    /// Set fill color gray (g)
    SetFillColorGray(f32),
}

/// Builder for page content streams.
#[derive(Debug, Clone, Default)]
pub struct ContentStreamBuilder {
    operations: Vec<ContentStreamOp>,
    /// Current font resource name
    current_font: Option<String>,
    /// Current font size
    current_font_size: f32,
    /// Whether we're in a text object
    in_text_object: bool,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Operations recorded so far.
    pub fn operations(&self) -> &[ContentStreamOp] {
        &self.operations
    }

    /// Begin a text object.
    pub fn begin_text(&mut self) -> &mut Self {
        if !self.in_text_object {
            self.op(ContentStreamOp::BeginText);
            self.in_text_object = true;
        }
        self
    }

    /// End a text object.
    pub fn end_text(&mut self) -> &mut Self {
        if self.in_text_object {
            self.op(ContentStreamOp::EndText);
            self.in_text_object = false;
            // Tf state does not survive ET
            self.current_font = None;
        }
        self
    }

    /// Set font for text operations. Repeated identical calls are dropped.
    pub fn set_font(&mut self, resource_name: &str, size: f32) -> &mut Self {
        self.begin_text();
        if self.current_font.as_deref() != Some(resource_name) || self.current_font_size != size {
            self.op(ContentStreamOp::SetFont(resource_name.to_string(), size));
            self.current_font = Some(resource_name.to_string());
            self.current_font_size = size;
        }
        self
    }

    /// Show encoded text with its baseline origin at (x, y).
    pub fn text(&mut self, encoded: &[u8], x: f32, y: f32) -> &mut Self {
        self.begin_text();
        self.op(ContentStreamOp::SetTextMatrix(1.0, 0.0, 0.0, 1.0, x, y));
        self.op(ContentStreamOp::ShowText(encoded.to_vec()));
        self
    }

    /// Set gray fill color (0 = black, 1 = white).
    pub fn fill_gray(&mut self, gray: f32) -> &mut Self {
        self.op(ContentStreamOp::SetFillColorGray(gray))
    }

    /// Build the content stream to bytes.
    pub fn build(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        for op in &self.operations {
            write_op(&mut buf, op)?;
            writeln!(buf)?;
        }
        if self.in_text_object {
            write_op(&mut buf, &ContentStreamOp::EndText)?;
            writeln!(buf)?;
        }
        Ok(buf)
    }
}

/// Write a single operation to the buffer.
fn write_op<W: Write>(w: &mut W, op: &ContentStreamOp) -> io::Result<()> {
    match op {
        ContentStreamOp::BeginText => write!(w, "BT"),
        ContentStreamOp::EndText => write!(w, "ET"),
        ContentStreamOp::SetFont(name, size) => write!(w, "/{} {} Tf", name, num(*size)),
        ContentStreamOp::SetTextMatrix(a, b, c, d, e, f) => write!(
            w,
            "{} {} {} {} {} {} Tm",
            num(*a),
            num(*b),
            num(*c),
            num(*d),
            num(*e),
            num(*f)
        ),
        ContentStreamOp::ShowText(text) => {
            write!(w, "(")?;
            write_escaped(w, text)?;
            write!(w, ") Tj")
        },
        ContentStreamOp::SetFillColorGray(g) => write!(w, "{} g", num(*g)),
    }
}

/// Format an operand with at most two decimals and no trailing zeros.
fn num(value: f32) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
