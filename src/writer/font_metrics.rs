//! Base-14 font metrics and text encoding for report generation.
//!
//! The report uses the standard Helvetica faces, which every PDF viewer
//! provides, so nothing is embedded. Widths are the Adobe AFM advance
//! widths in 1/1000 em and drive centering and line wrapping.

/// Font faces used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FontStyle {
    /// Helvetica
    #[default]
    Regular,
    /// Helvetica-Bold
    Bold,
}

impl FontStyle {
    /// Metrics for this face.
    pub fn info(&self) -> &'static FontInfo {
        match self {
            FontStyle::Regular => &HELVETICA,
            FontStyle::Bold => &HELVETICA_BOLD,
        }
    }

    /// PostScript name written as the font's `/BaseFont`.
    pub fn base_font(&self) -> &'static str {
        self.info().name
    }

    /// Name of the font in page resource dictionaries.
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
        }
    }
}

/// Metrics of a Base-14 font.
#[derive(Debug)]
pub struct FontInfo {
    /// PostScript font name
    pub name: &'static str,
    /// Advance widths for printable ASCII (0x20..=0x7E)
    ascii_widths: [u16; 95],
    /// Width used for Latin-1 and WinAnsi extras
    default_width: u16,
    /// Ascender height (above baseline)
    pub ascender: f32,
    /// Descender depth (below baseline, negative)
    pub descender: f32,
}

impl FontInfo {
    /// Width of a single character in font units (1/1000 em).
    pub fn char_width(&self, ch: char) -> f32 {
        let code = ch as u32;
        if (0x20..=0x7E).contains(&code) {
            self.ascii_widths[(code - 0x20) as usize] as f32
        } else {
            self.default_width as f32
        }
    }

    /// Baseline offset below the vertical center of the glyph box, in
    /// points at the given size.
    pub fn baseline_offset(&self, font_size: f32) -> f32 {
        (self.ascender + self.descender) / 2.0 * font_size / 1000.0
    }

    /// Width of text in points at the given size.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let units: f32 = text.chars().map(|c| self.char_width(c)).sum();
        units * font_size / 1000.0
    }
}

#[rustfmt::skip]
static HELVETICA: FontInfo = FontInfo {
    name: "Helvetica",
    ascii_widths: [
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
        1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
        333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
        556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
    ],
    default_width: 556,
    ascender: 718.0,
    descender: -207.0,
};

#[rustfmt::skip]
static HELVETICA_BOLD: FontInfo = FontInfo {
    name: "Helvetica-Bold",
    ascii_widths: [
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
        975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
        333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
        611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
    ],
    default_width: 611,
    ascender: 718.0,
    descender: -207.0,
};

/// Encode text with WinAnsiEncoding (PDF Annex D.2).
///
/// Tabs become spaces. Returns the first character without a WinAnsi code.
pub fn encode_win_ansi(text: &str) -> Result<Vec<u8>, char> {
    text.chars()
        .map(|ch| match ch {
            '\t' => Ok(b' '),
            ' '..='~' | '\u{A0}'..='\u{FF}' => Ok(ch as u32 as u8),
            _ => win_ansi_extra(ch).ok_or(ch),
        })
        .collect()
}

/// Codes 0x80..=0x9F, where WinAnsi departs from Latin-1.
fn win_ansi_extra(ch: char) -> Option<u8> {
    let code = match ch {
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helvetica_widths() {
        let font = FontStyle::Regular.info();
        assert_eq!(font.char_width(' '), 278.0);
        assert_eq!(font.char_width('W'), 944.0);
        assert_eq!(font.char_width('i'), 222.0);
        assert_eq!(font.char_width('~'), 584.0);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = FontStyle::Regular.info().text_width("Brakes Condition", 12.0);
        let bold = FontStyle::Bold.info().text_width("Brakes Condition", 12.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let font = FontStyle::Regular.info();
        // "Year" = 667 + 556 + 556 + 333
        assert!((font.text_width("Year", 10.0) - 21.12).abs() < 0.001);
        assert!((font.text_width("Year", 20.0) - 42.24).abs() < 0.001);
    }

    #[test]
    fn test_baseline_offset() {
        // (718 - 207) / 2 = 255.5 units
        let font = FontStyle::Regular.info();
        assert!((font.baseline_offset(12.0) - 3.066).abs() < 0.001);
        assert_eq!(font.baseline_offset(12.0), FontStyle::Bold.info().baseline_offset(12.0));
    }

    #[test]
    fn test_resource_names() {
        assert_eq!(FontStyle::Regular.resource_name(), "F1");
        assert_eq!(FontStyle::Bold.base_font(), "Helvetica-Bold");
    }

    #[test]
    fn test_encode_ascii_and_latin1() {
        assert_eq!(encode_win_ansi("Civic").unwrap(), b"Civic".to_vec());
        assert_eq!(encode_win_ansi("Renée").unwrap(), vec![b'R', b'e', b'n', 0xE9, b'e']);
        assert_eq!(encode_win_ansi("a\tb").unwrap(), b"a b".to_vec());
    }

    #[test]
    fn test_encode_win_ansi_extras() {
        assert_eq!(encode_win_ansi("€").unwrap(), vec![0x80]);
        assert_eq!(encode_win_ansi("–").unwrap(), vec![0x96]);
        assert_eq!(encode_win_ansi("Œ").unwrap(), vec![0x8C]);
    }

    #[test]
    fn test_encode_rejects_unmapped() {
        assert_eq!(encode_win_ansi("ok 🚘"), Err('🚘'));
        assert_eq!(encode_win_ansi("line\nbreak"), Err('\n'));
    }
}
