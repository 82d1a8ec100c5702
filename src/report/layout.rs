//! Line placement and pagination.
//!
//! Coordinates in a [`ReportLayout`] are PDF user space: points, origin at
//! the bottom-left corner of the page, y growing upwards. Internally the
//! engine tracks a top-down cursor the way a printer feeds paper and
//! converts when a line is placed.

use crate::config::ReportConfig;
use crate::writer::FontStyle;

/// Slack for float comparisons against the bottom margin.
const EPSILON: f32 = 1e-3;

/// Horizontal placement of a line within the printable width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Start at the left margin
    Left,
    /// Centered between the margins
    Center,
}

/// A line of text positioned on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Text as written to the page
    pub text: String,
    /// Left edge of the text
    pub x: f32,
    /// Baseline of the text
    pub baseline: f32,
    /// Top edge of the line box
    pub top: f32,
    /// Height of the line box
    pub height: f32,
    /// Font face
    pub style: FontStyle,
    /// Font size in points
    pub size: f32,
}

impl PlacedLine {
    /// Bottom edge of the line box.
    pub fn bottom(&self) -> f32 {
        self.top - self.height
    }
}

/// Lines placed on one page, in reading order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPage {
    /// Placed lines
    pub lines: Vec<PlacedLine>,
}

impl LayoutPage {
    /// Whether nothing has been placed on the page.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Positioned lines of a complete report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    /// Page width in points
    pub page_width: f32,
    /// Page height in points
    pub page_height: f32,
    /// Pages in order; never empty
    pub pages: Vec<LayoutPage>,
}

impl ReportLayout {
    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All lines across pages in reading order.
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flat_map(|page| page.lines.iter())
    }

    /// Text of all lines across pages in reading order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines().map(|line| line.text.as_str()).collect()
    }
}

/// Places lines top to bottom, starting a new page when a line box would
/// enter the bottom margin.
pub(crate) struct LayoutEngine<'a> {
    config: &'a ReportConfig,
    page_width: f32,
    page_height: f32,
    pages: Vec<LayoutPage>,
    /// Distance from the top edge of the page to the next line box
    cursor: f32,
}

impl<'a> LayoutEngine<'a> {
    pub(crate) fn new(config: &'a ReportConfig) -> Self {
        let (page_width, page_height) = config.page_size.dimensions();
        Self {
            config,
            page_width,
            page_height,
            pages: vec![LayoutPage::default()],
            cursor: config.margin_top,
        }
    }

    fn current_page(&mut self) -> &mut LayoutPage {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn new_page(&mut self) {
        log::trace!("Page break after page {}", self.pages.len());
        self.pages.push(LayoutPage::default());
        self.cursor = self.config.margin_top;
    }

    /// Advance the cursor. Spacing at the top of a fresh page is dropped.
    pub(crate) fn gap(&mut self, height: f32) {
        if self.current_page().is_empty() {
            return;
        }
        self.cursor += height;
    }

    /// Place a single line without wrapping.
    pub(crate) fn line(&mut self, text: &str, style: FontStyle, size: f32, height: f32, align: Align) {
        let limit = self.page_height - self.config.margin_bottom;
        if self.cursor + height > limit + EPSILON && !self.current_page().is_empty() {
            self.new_page();
        }

        let x = match align {
            Align::Left => self.config.margin_left,
            Align::Center => {
                let width = style.info().text_width(text, size);
                self.config.margin_left + (self.config.printable_width() - width) / 2.0
            }
        };
        // Glyph box vertically centered in the line box.
        let baseline_from_top = self.cursor + height / 2.0 + style.info().baseline_offset(size);

        let placed = PlacedLine {
            text: text.to_string(),
            x,
            baseline: self.page_height - baseline_from_top,
            top: self.page_height - self.cursor,
            height,
            style,
            size,
        };
        self.current_page().lines.push(placed);
        self.cursor += height;
    }

    /// Place a paragraph: one line per text line, each word-wrapped to the
    /// printable width.
    pub(crate) fn paragraph(&mut self, text: &str, style: FontStyle, size: f32, height: f32, align: Align) {
        let max_width = self.config.printable_width();
        for source in split_lines(text) {
            for wrapped in wrap_text(&source, style, size, max_width) {
                self.line(&wrapped, style, size, height, align);
            }
        }
    }

    pub(crate) fn finish(self) -> ReportLayout {
        ReportLayout {
            page_width: self.page_width,
            page_height: self.page_height,
            pages: self.pages,
        }
    }
}

/// Split text into lines on `\n`, `\r\n` and lone `\r`. Other control
/// characters become spaces. Empty text yields one empty line.
fn split_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<String> = normalized
        .lines()
        .map(|line| line.chars().map(|ch| if ch.is_control() { ' ' } else { ch }).collect())
        .collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Wrap text to fit within `max_width` points.
///
/// Text that already fits is returned unchanged. Otherwise lines break at
/// whitespace, and a single word wider than the limit is broken between
/// characters. Wrapped lines are rejoined with single spaces, so runs of
/// whitespace in text that needed wrapping collapse to one space.
pub fn wrap_text(text: &str, style: FontStyle, size: f32, max_width: f32) -> Vec<String> {
    let info = style.info();
    if info.text_width(text, size) <= max_width {
        return vec![text.to_string()];
    }

    let space_width = info.char_width(' ') * size / 1000.0;
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = info.text_width(word, size);

        if word_width > max_width {
            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            let mut pieces = break_word(word, style, size, max_width);
            // The tail of a broken word may still share a line with what follows.
            if let Some(tail) = pieces.pop() {
                lines.extend(pieces);
                current_width = info.text_width(&tail, size);
                current_line = tail;
            }
        } else if current_line.is_empty() {
            current_line = word.to_string();
            current_width = word_width;
        } else if current_width + space_width + word_width <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
            current_width += space_width + word_width;
        } else {
            lines.push(std::mem::replace(&mut current_line, word.to_string()));
            current_width = word_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn break_word(word: &str, style: FontStyle, size: f32, max_width: f32) -> Vec<String> {
    let info = style.info();
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0.0;
    for ch in word.chars() {
        let ch_width = info.char_width(ch) * size / 1000.0;
        if width + ch_width > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            width = 0.0;
        }
        piece.push(ch);
        width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
