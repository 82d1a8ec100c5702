//! Shared helpers: pull positioned text back out of generated reports.

#![allow(dead_code)]

use flate2::read::ZlibDecoder;
use regex::bytes::Regex;
use std::io::Read;

/// A `Tj` text run as it appears in a page content stream.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub font: String,
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

/// Content streams in file order. Pages are written in order, so this is
/// also page order.
pub fn content_streams(pdf: &[u8]) -> Vec<Vec<u8>> {
    let stream_re = Regex::new(r"<<(/Filter /FlateDecode )?/Length (\d+)>>\nstream\n").unwrap();
    stream_re
        .captures_iter(pdf)
        .map(|caps| {
            let length: usize = std::str::from_utf8(&caps[2]).unwrap().parse().unwrap();
            let start = caps.get(0).unwrap().end();
            let data = &pdf[start..start + length];
            if caps.get(1).is_some() {
                let mut inflated = Vec::new();
                ZlibDecoder::new(data).read_to_end(&mut inflated).unwrap();
                inflated
            } else {
                data.to_vec()
            }
        })
        .collect()
}

/// Undo literal-string escaping; octal escapes map through Latin-1.
fn unescape(raw: &str) -> String {
    let mut out = String::new();
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(d) if d.is_digit(8) => {
                let mut code = d.to_digit(8).unwrap();
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(next) => {
                            code = code * 8 + next;
                            chars.next();
                        },
                        None => break,
                    }
                }
                out.push(char::from(code as u8));
            },
            Some(other) => out.push(other),
            None => {},
        }
    }
    out
}

/// Text runs per page, in content order.
pub fn pages(pdf: &[u8]) -> Vec<Vec<TextLine>> {
    let font_re = regex::Regex::new(r"^/(F\d+) ([\d.]+) Tf$").unwrap();
    let matrix_re = regex::Regex::new(r"^1 0 0 1 ([\d.-]+) ([\d.-]+) Tm$").unwrap();
    let show_re = regex::Regex::new(r"^\((.*)\) Tj$").unwrap();

    content_streams(pdf)
        .iter()
        .map(|stream| {
            let content = String::from_utf8_lossy(stream);
            let mut font = String::new();
            let mut size = 0.0;
            let (mut x, mut y) = (0.0, 0.0);
            let mut lines = Vec::new();
            for op in content.lines() {
                if let Some(caps) = font_re.captures(op) {
                    font = caps[1].to_string();
                    size = caps[2].parse().unwrap();
                } else if let Some(caps) = matrix_re.captures(op) {
                    x = caps[1].parse().unwrap();
                    y = caps[2].parse().unwrap();
                } else if let Some(caps) = show_re.captures(op) {
                    lines.push(TextLine {
                        text: unescape(&caps[1]),
                        font: font.clone(),
                        size,
                        x,
                        y,
                    });
                }
            }
            lines
        })
        .collect()
}

/// All text runs across pages in reading order.
pub fn texts(pdf: &[u8]) -> Vec<String> {
    pages(pdf)
        .into_iter()
        .flatten()
        .map(|line| line.text)
        .collect()
}

/// Parse `Label: value` lines back into pairs, skipping headings.
pub fn fields(pdf: &[u8]) -> Vec<(String, String)> {
    texts(pdf)
        .into_iter()
        .filter_map(|line| {
            line.split_once(": ")
                .map(|(label, value)| (label.to_string(), value.to_string()))
        })
        .collect()
}

/// Position of `needle` in `lines`, panicking with the full listing if absent.
pub fn position(lines: &[String], needle: &str) -> usize {
    lines
        .iter()
        .position(|line| line == needle)
        .unwrap_or_else(|| panic!("{:?} not found in {:#?}", needle, lines))
}
