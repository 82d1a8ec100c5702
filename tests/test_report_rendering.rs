//! Integration tests for report rendering: content, order and pagination.

mod common;

use inspection_report::config::MM;
use inspection_report::writer::FontStyle;
use chrono::Utc;
use inspection_report::{
    render, submit, Error, InspectionForm, InspectionRecord, PageSize, ReportConfig, ReportRenderer,
    Section,
};

fn jane_doe() -> InspectionRecord {
    let mut record = InspectionRecord::new();
    record
        .insert_scalar("Owner Name", "Jane Doe")
        .insert_scalar("Car Model", "Civic")
        .insert_scalar("Year", 2020i64)
        .insert_scalar("License Plate", "ABC123")
        .insert_section(
            "Engine & Transmission",
            Section::new()
                .with_field("Engine Condition", "Good")
                .with_field("Transmission Condition", "Excellent")
                .with_field("Oil Leaks", "No"),
        );
    record
}

fn filler_record(fields: usize) -> InspectionRecord {
    let mut record = jane_doe();
    let filler: Section = (0..fields)
        .map(|i| (format!("Filler Field {}", i), format!("Value {}", i)))
        .collect();
    record.insert_section("Filler", filler);
    record
}

mod content_tests {
    use super::*;

    #[test]
    fn test_scenario_lines_in_order() {
        let pdf = render(&jane_doe()).unwrap();
        let lines = common::texts(&pdf);

        let owner = common::position(&lines, "Owner Name: Jane Doe");
        let year = common::position(&lines, "Year: 2020");
        let engine = common::position(&lines, "Engine Condition: Good");
        assert!(owner < year && year < engine);
    }

    #[test]
    fn test_title_and_headings() {
        let pdf = render(&jane_doe()).unwrap();
        let pages = common::pages(&pdf);
        let first = &pages[0];

        assert_eq!(first[0].text, "Car Inspection Report");
        assert_eq!(first[0].font, "F2");
        assert_eq!(first[0].size, 16.0);
        assert_eq!(first[1].text, "Basic Information");
        assert_eq!(first[1].font, "F2");
        assert_eq!(first[2].font, "F1");

        let heading = first.iter().find(|l| l.text == "Engine & Transmission").unwrap();
        assert_eq!(heading.font, "F2");
        assert_eq!(heading.size, 12.0);
    }

    #[test]
    fn test_title_is_centered() {
        let pdf = render(&jane_doe()).unwrap();
        let title = &common::pages(&pdf)[0][0];
        let width = FontStyle::Bold.info().text_width(&title.text, 16.0);
        let center = title.x + width / 2.0;
        assert!((center - 595.0 / 2.0).abs() < 0.1, "title centered at {}", center);
    }

    #[test]
    fn test_fields_parse_back_in_order() {
        let pdf = render(&jane_doe()).unwrap();
        let fields = common::fields(&pdf);
        let labels: Vec<&str> = fields.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Owner Name",
                "Car Model",
                "Year",
                "License Plate",
                "Engine Condition",
                "Transmission Condition",
                "Oil Leaks",
            ]
        );
        assert_eq!(fields[3].1, "ABC123");
    }

    #[test]
    fn test_basic_block_precedes_sections_inserted_first() {
        let mut record = InspectionRecord::new();
        record
            .insert_section("Tires & Wheels", Section::new().with_field("Tire Condition", "Poor"))
            .insert_scalar("Car Model", "Civic")
            .insert_scalar("Owner Name", "Jane Doe");

        let lines = common::texts(&render(&record).unwrap());
        assert_eq!(
            lines,
            vec![
                "Car Inspection Report",
                "Basic Information",
                "Owner Name: Jane Doe",
                "Car Model: Civic",
                "Year: N/A",
                "License Plate: N/A",
                "Tires & Wheels",
                "Tire Condition: Poor",
            ]
        );
    }

    #[test]
    fn test_empty_values_render_placeholder() {
        let mut record = jane_doe();
        record
            .insert_scalar("License Plate", "")
            .insert_section("Additional Comments", Section::new().with_field("Comments", ""));

        let lines = common::texts(&render(&record).unwrap());
        common::position(&lines, "License Plate: N/A");
        common::position(&lines, "Comments: N/A");
    }

    #[test]
    fn test_special_characters_survive() {
        let mut record = jane_doe();
        record.insert_section(
            "Additional Comments",
            Section::new().with_field("Comments", r"Dent (rear) \ scuffed bumper, Renée's note"),
        );

        let lines = common::texts(&render(&record).unwrap());
        common::position(&lines, r"Comments: Dent (rear) \ scuffed bumper, Renée's note");
    }

    #[test]
    fn test_multiline_comments_split_into_lines() {
        let mut record = jane_doe();
        record.insert_section(
            "Additional Comments",
            Section::new().with_field("Comments", "Scratch on door\nNew tires fitted"),
        );

        let lines = common::texts(&render(&record).unwrap());
        let first = common::position(&lines, "Comments: Scratch on door");
        assert_eq!(lines[first + 1], "New tires fitted");
    }

    #[test]
    fn test_carriage_return_in_comments_splits_lines() {
        let form = InspectionForm {
            owner_name: "Jane Doe".to_string(),
            car_model: "Civic".to_string(),
            comments: "Scratch on door\rNew tires\u{c}fitted".to_string(),
            ..InspectionForm::default()
        };
        let outcome = submit(&form, &ReportConfig::default(), Utc::now());
        let download = outcome.download().expect("report generated");

        let lines = common::texts(&download.bytes);
        let first = common::position(&lines, "Comments: Scratch on door");
        assert_eq!(lines[first + 1], "New tires fitted");
    }

    #[test]
    fn test_long_comment_wraps_within_margins() {
        let comment = "Paint shows light swirl marks on the bonnet and both front wings. ".repeat(5);
        let mut record = jane_doe();
        record.insert_section("Additional Comments", Section::new().with_field("Comments", comment.trim()));

        let config = ReportConfig::default();
        let layout = ReportRenderer::default().layout(&record).unwrap();
        let start = layout
            .texts()
            .iter()
            .position(|t| t.starts_with("Comments: "))
            .unwrap();
        let wrapped: Vec<_> = layout.lines().skip(start).collect();

        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert_eq!(line.x, config.margin_left);
            assert!(FontStyle::Regular.info().text_width(&line.text, 12.0) <= config.printable_width());
        }
        let rejoined: Vec<&str> = wrapped.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(rejoined.join(" "), format!("Comments: {}", comment.trim()));
    }
}

mod pagination_tests {
    use super::*;

    #[test]
    fn test_sixty_fields_paginate() {
        let record = filler_record(60);
        let config = ReportConfig::default();
        let layout = ReportRenderer::default().layout(&record).unwrap();

        assert!(layout.page_count() > 1);
        for line in layout.lines() {
            assert!(
                line.bottom() >= config.margin_bottom - 1e-3,
                "{:?} enters the bottom margin",
                line.text
            );
            assert!(line.top <= 842.0 - config.margin_top + 1e-3);
        }

        let pdf = render(&record).unwrap();
        let pages = common::pages(&pdf);
        assert_eq!(pages.len(), layout.page_count());
        for page in &pages {
            for line in page {
                assert!(line.y > config.margin_bottom);
            }
        }
    }

    #[test]
    fn test_sections_split_transparently() {
        let pdf = render(&filler_record(60)).unwrap();
        let lines = common::texts(&pdf);
        let fields: Vec<&String> = lines.iter().filter(|l| l.starts_with("Filler Field")).collect();
        assert_eq!(fields.len(), 60);
        for (i, line) in fields.iter().enumerate() {
            assert_eq!(**line, format!("Filler Field {}: Value {}", i, i));
        }
        // Heading appears once even though the section spans pages.
        assert_eq!(lines.iter().filter(|l| *l == "Filler").count(), 1);
    }

    #[test]
    fn test_continuation_pages_start_at_top_margin() {
        let layout = ReportRenderer::default().layout(&filler_record(120)).unwrap();
        assert!(layout.page_count() >= 3);
        let expected_top = 842.0 - 10.0 * MM;
        for page in &layout.pages[1..] {
            assert!((page.lines[0].top - expected_top).abs() < 1e-3);
        }
    }

    #[test]
    fn test_pdf_page_tree_counts_pages() {
        let record = filler_record(60);
        let pages = ReportRenderer::default().layout(&record).unwrap().page_count();
        let pdf = render(&record).unwrap();
        let text = String::from_utf8_lossy(&pdf);
        assert!(text.contains(&format!("/Count {}", pages)));
        assert_eq!(text.matches("/Type /Page ").count(), pages);
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_compressed_output_has_same_text() {
        let record = filler_record(40);
        let plain = render(&record).unwrap();
        let compressed = ReportRenderer::new(ReportConfig::default().with_compress(true))
            .render(&record)
            .unwrap();

        assert!(String::from_utf8_lossy(&compressed).contains("/FlateDecode"));
        assert!(compressed.len() < plain.len());
        assert_eq!(common::texts(&compressed), common::texts(&plain));
    }

    #[test]
    fn test_letter_page_and_custom_title() {
        let config = ReportConfig::default()
            .with_page_size(PageSize::Letter)
            .with_title("Pre-purchase Inspection");
        let pdf = ReportRenderer::new(config).render(&jane_doe()).unwrap();
        let text = String::from_utf8_lossy(&pdf);

        assert!(text.contains("/MediaBox [0 0 612 792]"));
        assert!(text.contains("/Title (Pre-purchase Inspection)"));
        assert_eq!(common::texts(&pdf)[0], "Pre-purchase Inspection");
    }

    #[test]
    fn test_tighter_line_height_fits_more_lines() {
        let record = filler_record(60);
        let roomy = ReportRenderer::default().layout(&record).unwrap();
        let tight = ReportRenderer::new(ReportConfig::default().with_body_text(10.0, 5.0 * MM))
            .layout(&record)
            .unwrap();
        assert!(tight.pages[0].lines.len() > roomy.pages[0].lines.len());
    }

    #[test]
    fn test_line_taller_than_page_is_rejected() {
        let renderer = ReportRenderer::new(ReportConfig::default().with_body_text(12.0, 900.0));
        assert!(matches!(renderer.layout(&jane_doe()), Err(Error::InvalidConfig(_))));
        assert!(matches!(renderer.render(&jane_doe()), Err(Error::InvalidConfig(_))));

        let form = InspectionForm {
            owner_name: "Jane Doe".to_string(),
            car_model: "Civic".to_string(),
            ..InspectionForm::default()
        };
        let outcome = submit(&form, renderer.config(), Utc::now());
        assert!(outcome.message().starts_with("Unexpected error: Invalid report configuration"));
    }
}
