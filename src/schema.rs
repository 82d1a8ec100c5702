//! Inspection form field catalogue.
//!
//! The catalogue is fixed at compile time: every section, its fields in
//! display order, the label shown on the form, the label written to the
//! report, and the kind of value the field accepts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest accepted model year.
pub const YEAR_MIN: i32 = 1980;
/// Largest accepted model year.
pub const YEAR_MAX: i32 = 2030;

/// Top-level record keys of the basic fields, in report order.
pub const BASIC_FIELD_NAMES: [&str; 4] = ["Owner Name", "Car Model", "Year", "License Plate"];

/// Whether a top-level record key names a basic field.
pub fn is_basic_field(name: &str) -> bool {
    BASIC_FIELD_NAMES.contains(&name)
}

/// Error returned when parsing an unknown choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not one of: {expected}")]
pub struct ParseChoiceError {
    value: String,
    expected: String,
}

/// Single-choice enumerations with a fixed option list.
///
/// `Default` is the first option, matching the widget's initial selection.
macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Options in widget order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display string written to the report.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str() == s)
                    .ok_or_else(|| ParseChoiceError {
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|option| option.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

choice_enum! {
    /// Four-level qualitative assessment.
    Condition {
        /// Excellent
        Excellent => "Excellent",
        /// Good
        Good => "Good",
        /// Average
        Average => "Average",
        /// Poor
        Poor => "Poor",
    }
}

choice_enum! {
    /// Binary presence check.
    YesNo {
        /// Yes
        Yes => "Yes",
        /// No
        No => "No",
    }
}

choice_enum! {
    /// Binary functional check for lights.
    WorkingState {
        /// Working
        Working => "Working",
        /// Not Working
        NotWorking => "Not Working",
    }
}

/// Identifies a field of the inspection form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum FieldId {
    OwnerName,
    CarModel,
    Year,
    LicensePlate,
    EngineCondition,
    TransmissionCondition,
    OilLeaks,
    BrakesCondition,
    SuspensionCondition,
    SteeringCondition,
    TireCondition,
    WheelCondition,
    Headlights,
    Indicators,
    BatteryCondition,
    InteriorCondition,
    ExteriorCondition,
    PaintCondition,
    AirbagsFunctional,
    AcCondition,
    InfotainmentSystem,
    Comments,
    Photos,
}

/// Kind of value a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text; `required` fields must be non-blank
    Text {
        /// Whether the field must be non-blank
        required: bool,
    },
    /// Multi-line free text
    MultilineText,
    /// Integer within an inclusive range
    BoundedInteger {
        /// Smallest accepted value
        min: i32,
        /// Largest accepted value
        max: i32,
    },
    /// One of [`Condition`]
    Condition,
    /// One of [`YesNo`]
    YesNo,
    /// One of [`WorkingState`]
    WorkingState,
    /// Any number of image uploads
    Attachments,
}

/// A single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field identifier
    pub id: FieldId,
    /// Label shown next to the widget
    pub label: &'static str,
    /// Label written to the report, `None` if the field is never reported
    pub report_label: Option<&'static str>,
    /// Accepted values
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn reported(id: FieldId, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            report_label: Some(label),
            kind,
        }
    }

    const fn relabeled(id: FieldId, label: &'static str, report_label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            report_label: Some(report_label),
            kind,
        }
    }

    /// Whether the field's value appears in the report.
    pub fn is_reported(&self) -> bool {
        self.report_label.is_some()
    }
}

/// A named group of related fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    /// Heading written to the report
    pub title: &'static str,
    /// Heading shown on the form
    pub form_title: &'static str,
    /// Fields in display order
    pub fields: &'static [FieldSpec],
}

impl SectionSpec {
    /// Fields that appear in the report, in order.
    pub fn reported_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|field| field.is_reported())
    }
}

/// The basic information block, always rendered first.
pub const BASIC_INFORMATION: SectionSpec = SectionSpec {
    title: "Basic Information",
    form_title: "Basic Information",
    fields: &[
        FieldSpec::reported(FieldId::OwnerName, "Owner Name", FieldKind::Text { required: true }),
        FieldSpec::reported(FieldId::CarModel, "Car Model", FieldKind::Text { required: true }),
        FieldSpec::reported(
            FieldId::Year,
            "Year",
            FieldKind::BoundedInteger {
                min: YEAR_MIN,
                max: YEAR_MAX,
            },
        ),
        FieldSpec::reported(FieldId::LicensePlate, "License Plate", FieldKind::Text { required: false }),
    ],
};

/// Inspection sections, in definition order.
pub const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        title: "Engine & Transmission",
        form_title: "Engine & Transmission",
        fields: &[
            FieldSpec::reported(FieldId::EngineCondition, "Engine Condition", FieldKind::Condition),
            FieldSpec::reported(FieldId::TransmissionCondition, "Transmission Condition", FieldKind::Condition),
            FieldSpec::relabeled(FieldId::OilLeaks, "Oil Leaks?", "Oil Leaks", FieldKind::YesNo),
        ],
    },
    SectionSpec {
        title: "Brakes & Suspension",
        form_title: "Brakes & Suspension",
        fields: &[
            FieldSpec::reported(FieldId::BrakesCondition, "Brakes Condition", FieldKind::Condition),
            FieldSpec::reported(FieldId::SuspensionCondition, "Suspension Condition", FieldKind::Condition),
            FieldSpec::reported(FieldId::SteeringCondition, "Steering Condition", FieldKind::Condition),
        ],
    },
    SectionSpec {
        title: "Tires & Wheels",
        form_title: "Tires & Wheels",
        fields: &[
            FieldSpec::reported(FieldId::TireCondition, "Tire Condition", FieldKind::Condition),
            FieldSpec::reported(FieldId::WheelCondition, "Wheel Condition", FieldKind::Condition),
        ],
    },
    SectionSpec {
        title: "Lights & Electricals",
        form_title: "Lights & Electricals",
        fields: &[
            FieldSpec::reported(FieldId::Headlights, "Headlights", FieldKind::WorkingState),
            FieldSpec::reported(FieldId::Indicators, "Indicators", FieldKind::WorkingState),
            FieldSpec::reported(FieldId::BatteryCondition, "Battery Condition", FieldKind::Condition),
        ],
    },
    SectionSpec {
        title: "Interior & Exterior",
        form_title: "Interior & Exterior",
        fields: &[
            FieldSpec::reported(FieldId::InteriorCondition, "Interior Condition", FieldKind::Condition),
            FieldSpec::reported(FieldId::ExteriorCondition, "Exterior Condition", FieldKind::Condition),
            FieldSpec::reported(FieldId::PaintCondition, "Paint Condition", FieldKind::Condition),
        ],
    },
    SectionSpec {
        title: "Safety & Features",
        form_title: "Safety & Features",
        fields: &[
            FieldSpec::relabeled(
                FieldId::AirbagsFunctional,
                "Airbags Functional?",
                "Airbags Functional",
                FieldKind::YesNo,
            ),
            FieldSpec::reported(FieldId::AcCondition, "AC Condition", FieldKind::Condition),
            FieldSpec::reported(FieldId::InfotainmentSystem, "Infotainment System", FieldKind::Condition),
        ],
    },
    SectionSpec {
        title: "Additional Comments",
        form_title: "Additional Comments / Photos",
        fields: &[
            FieldSpec::reported(FieldId::Comments, "Comments", FieldKind::MultilineText),
            FieldSpec {
                id: FieldId::Photos,
                label: "Upload Car Photos",
                report_label: None,
                kind: FieldKind::Attachments,
            },
        ],
    },
];

/// File extensions accepted by the photo upload.
pub const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Look up an inspection section by report title.
pub fn section(title: &str) -> Option<&'static SectionSpec> {
    SECTIONS.iter().find(|section| section.title == title)
}
