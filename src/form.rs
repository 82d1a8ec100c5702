//! Form state and collection into an [`InspectionRecord`].
//!
//! [`InspectionForm`] carries the current value of every widget. It is
//! plain data so any front end (or a JSON file) can fill it in; the
//! collector validates it and produces the record the renderer consumes.

use crate::error::{RequiredField, Result, ValidationError};
use crate::record::{InspectionRecord, ScalarValue, Section};
use crate::schema::{
    Condition, FieldId, WorkingState, YesNo, BASIC_FIELD_NAMES, PHOTO_EXTENSIONS, SECTIONS,
    YEAR_MAX, YEAR_MIN,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Image formats accepted by the photo upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// PNG image
    Png,
    /// JPEG image
    Jpeg,
}

/// An uploaded photo. Only its descriptor is carried; photo content is
/// never read or embedded in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAttachment {
    /// Original file name
    pub file_name: String,
}

impl PhotoAttachment {
    /// Create an attachment descriptor.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Image format by file extension (case-insensitive), if accepted.
    pub fn image_kind(&self) -> Option<ImageKind> {
        let (_, extension) = self.file_name.rsplit_once('.')?;
        let extension = extension.to_ascii_lowercase();
        if !PHOTO_EXTENSIONS.contains(&extension.as_str()) {
            return None;
        }
        match extension.as_str() {
            "png" => Some(ImageKind::Png),
            _ => Some(ImageKind::Jpeg),
        }
    }
}

/// Current state of every inspection form widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct InspectionForm {
    // Basic Information
    pub owner_name: String,
    pub car_model: String,
    pub year: i32,
    pub license_plate: String,
    // Engine & Transmission
    pub engine_condition: Condition,
    pub transmission_condition: Condition,
    pub oil_leaks: YesNo,
    // Brakes & Suspension
    pub brakes_condition: Condition,
    pub suspension_condition: Condition,
    pub steering_condition: Condition,
    // Tires & Wheels
    pub tire_condition: Condition,
    pub wheel_condition: Condition,
    // Lights & Electricals
    pub headlights: WorkingState,
    pub indicators: WorkingState,
    pub battery_condition: Condition,
    // Interior & Exterior
    pub interior_condition: Condition,
    pub exterior_condition: Condition,
    pub paint_condition: Condition,
    // Safety & Features
    pub airbags_functional: YesNo,
    pub ac_condition: Condition,
    pub infotainment_system: Condition,
    // Additional Comments / Photos
    pub comments: String,
    pub photos: Vec<PhotoAttachment>,
}

impl Default for InspectionForm {
    fn default() -> Self {
        Self {
            owner_name: String::new(),
            car_model: String::new(),
            year: YEAR_MIN,
            license_plate: String::new(),
            engine_condition: Condition::default(),
            transmission_condition: Condition::default(),
            oil_leaks: YesNo::default(),
            brakes_condition: Condition::default(),
            suspension_condition: Condition::default(),
            steering_condition: Condition::default(),
            tire_condition: Condition::default(),
            wheel_condition: Condition::default(),
            headlights: WorkingState::default(),
            indicators: WorkingState::default(),
            battery_condition: Condition::default(),
            interior_condition: Condition::default(),
            exterior_condition: Condition::default(),
            paint_condition: Condition::default(),
            airbags_functional: YesNo::default(),
            ac_condition: Condition::default(),
            infotainment_system: Condition::default(),
            comments: String::new(),
            photos: Vec::new(),
        }
    }
}

impl InspectionForm {
    /// Create a form with every widget at its initial value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load form state from a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load form state from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Report display string of a field, `None` for fields that are never reported.
    pub fn display_value(&self, id: FieldId) -> Option<String> {
        let value = match id {
            FieldId::OwnerName => self.owner_name.trim().to_string(),
            FieldId::CarModel => self.car_model.trim().to_string(),
            FieldId::Year => self.year.to_string(),
            FieldId::LicensePlate => self.license_plate.trim().to_string(),
            FieldId::EngineCondition => self.engine_condition.to_string(),
            FieldId::TransmissionCondition => self.transmission_condition.to_string(),
            FieldId::OilLeaks => self.oil_leaks.to_string(),
            FieldId::BrakesCondition => self.brakes_condition.to_string(),
            FieldId::SuspensionCondition => self.suspension_condition.to_string(),
            FieldId::SteeringCondition => self.steering_condition.to_string(),
            FieldId::TireCondition => self.tire_condition.to_string(),
            FieldId::WheelCondition => self.wheel_condition.to_string(),
            FieldId::Headlights => self.headlights.to_string(),
            FieldId::Indicators => self.indicators.to_string(),
            FieldId::BatteryCondition => self.battery_condition.to_string(),
            FieldId::InteriorCondition => self.interior_condition.to_string(),
            FieldId::ExteriorCondition => self.exterior_condition.to_string(),
            FieldId::PaintCondition => self.paint_condition.to_string(),
            FieldId::AirbagsFunctional => self.airbags_functional.to_string(),
            FieldId::AcCondition => self.ac_condition.to_string(),
            FieldId::InfotainmentSystem => self.infotainment_system.to_string(),
            FieldId::Comments => self.comments.clone(),
            FieldId::Photos => return None,
        };
        Some(value)
    }

    /// Attachments whose extension the upload widget accepts.
    pub fn supported_photos(&self) -> impl Iterator<Item = &PhotoAttachment> {
        self.photos.iter().filter(|photo| photo.image_kind().is_some())
    }

    /// Validate the form and build the inspection record.
    ///
    /// Owner Name and Car Model must be non-blank after trimming (checked
    /// in that order) and Year must lie in `YEAR_MIN..=YEAR_MAX`. The record
    /// holds the four basic scalars followed by every section in definition
    /// order.
    pub fn collect(&self) -> std::result::Result<InspectionRecord, ValidationError> {
        let owner_name = self.owner_name.trim();
        let car_model = self.car_model.trim();

        if owner_name.is_empty() {
            return Err(ValidationError::MissingRequiredField(RequiredField::OwnerName));
        }
        if car_model.is_empty() {
            return Err(ValidationError::MissingRequiredField(RequiredField::CarModel));
        }
        if !(YEAR_MIN..=YEAR_MAX).contains(&self.year) {
            return Err(ValidationError::YearOutOfRange {
                year: self.year,
                min: YEAR_MIN,
                max: YEAR_MAX,
            });
        }

        let [owner_key, model_key, year_key, plate_key] = BASIC_FIELD_NAMES;
        let mut record = InspectionRecord::new();
        record
            .insert_scalar(owner_key, owner_name)
            .insert_scalar(model_key, car_model)
            .insert_scalar(year_key, ScalarValue::Integer(i64::from(self.year)))
            .insert_scalar(plate_key, self.license_plate.trim());

        for spec in SECTIONS {
            let section: Section = spec
                .reported_fields()
                .filter_map(|field| Some((field.report_label?, self.display_value(field.id)?)))
                .collect();
            record.insert_section(spec.title, section);
        }

        if !self.photos.is_empty() {
            log::debug!(
                "{} photo attachment(s) accepted ({} supported); photos are not included in the report",
                self.photos.len(),
                self.supported_photos().count()
            );
        }
        log::debug!(
            "Collected inspection record for '{}' / '{}' with {} entries",
            owner_name,
            car_model,
            record.len()
        );

        Ok(record)
    }
}
