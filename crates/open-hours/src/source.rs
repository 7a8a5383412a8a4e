//! JSON schedule source.
//!
//! The expected document shape is:
//!
//! ```json
//! { "restaurants": [ { "name": "Kayasa Restaurant", "opening_hours": "Mon-Thu 8:30 am - 9 pm" } ] }
//! ```
//!
//! Unknown fields are ignored. Every failure to obtain or decode the document is
//! reported as [`OpenHoursError::SourceUnavailable`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OpenHoursError, Result};
use crate::schedule::{normalize_set, ScheduleSet};

/// One raw business entry, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub name: String,
    pub opening_hours: String,
}

/// The raw schedule document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSource {
    pub restaurants: Vec<ScheduleEntry>,
}

impl ScheduleSource {
    /// Decode a schedule document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| OpenHoursError::SourceUnavailable(format!("invalid schedule JSON: {e}")))
    }

    /// Decode a schedule document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| OpenHoursError::SourceUnavailable(format!("invalid schedule JSON: {e}")))
    }

    /// Read and decode a schedule document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`OpenHoursError::SourceUnavailable`] if the file cannot be opened
    /// or does not hold a valid schedule document.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            OpenHoursError::SourceUnavailable(format!("cannot open '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            OpenHoursError::SourceUnavailable(msg) => {
                OpenHoursError::SourceUnavailable(format!("'{}': {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Normalize every entry into a [`ScheduleSet`].
    pub fn to_schedule_set(&self) -> Result<ScheduleSet> {
        normalize_set(&self.restaurants)
    }
}

/// Read, decode and normalize a schedule file in one step.
pub fn load_schedule_set(path: impl AsRef<Path>) -> Result<ScheduleSet> {
    ScheduleSource::from_path(path)?.to_schedule_set()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "restaurants": [
            { "name": "Kayasa Restaurant", "opening_hours": "Mon-Thu 8:30 am - 9 pm; Fri-Sun 8:30 am - 10 pm" },
            { "name": "The Golden Duck", "opening_hours": "Mon-Fri 11 am - 11 pm; Sat-Sun 4 pm - 11 pm" }
        ]
    }"#;

    #[test]
    fn test_from_json_str() {
        let source = ScheduleSource::from_json_str(SAMPLE).unwrap();
        assert_eq!(source.restaurants.len(), 2);
        assert_eq!(source.restaurants[0].name, "Kayasa Restaurant");
        assert_eq!(source.restaurants[1].opening_hours, "Mon-Fri 11 am - 11 pm; Sat-Sun 4 pm - 11 pm");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"{ "version": 2, "restaurants": [ { "name": "A", "opening_hours": "mon 9am - 5pm", "cuisine": "thai" } ] }"#;
        let source = ScheduleSource::from_json_str(json).unwrap();
        assert_eq!(source.restaurants[0].name, "A");
    }

    #[test]
    fn test_malformed_json_is_source_unavailable() {
        let err = ScheduleSource::from_json_str("{ \"restaurants\": [ ").unwrap_err();
        assert!(matches!(err, OpenHoursError::SourceUnavailable(_)), "got: {err:?}");
    }

    #[test]
    fn test_missing_field_is_source_unavailable() {
        let err = ScheduleSource::from_json_str(r#"{ "restaurants": [ { "name": "A" } ] }"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("opening_hours"), "got: {msg}");
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = ScheduleSource::from_path("/definitely/not/here.json").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Schedule source unavailable"), "got: {msg}");
        assert!(msg.contains("/definitely/not/here.json"), "got: {msg}");
    }

    #[test]
    fn test_load_schedule_set_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let schedules = load_schedule_set(file.path()).unwrap();
        assert_eq!(schedules.len(), 2);
        // Kayasa: Mon-Thu and Fri-Sun ranges give one interval per day.
        assert_eq!(schedules.get("Kayasa Restaurant").unwrap().intervals.len(), 7);
    }
}
