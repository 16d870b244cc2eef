use crate::models::coverage::CoverageCode;
use crate::models::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel used when the info sheet does not name a profile picture.
pub const DEFAULT_PROFILE_IMAGE: &str = "default.png";

/// One tutor as derived from the schedule and info sheets.
///
/// Identity key is the lower-cased name (one record per distinct lower-cased
/// name); `name` keeps the original casing for display. The "here until"
/// string shown on the board is computed per query by the shift engine and is
/// deliberately not part of this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    pub name: String,

    #[serde(default)]
    pub major: Option<Role>,

    #[serde(default)]
    pub academic_class: String,

    #[serde(default = "default_profile_image")]
    pub profile_image: String,

    /// Weekday name ("Monday"..."Friday") → that day's slot sequence.
    #[serde(default)]
    pub schedule: BTreeMap<String, Vec<CoverageCode>>,
}

fn default_profile_image() -> String {
    DEFAULT_PROFILE_IMAGE.to_string()
}

impl Tutor {
    /// Fresh record with empty per-weekday sequences and default metadata,
    /// created the first time a name shows up in the schedule sheet.
    pub fn new(display_name: &str) -> Self {
        Self {
            name: display_name.to_string(),
            major: None,
            academic_class: String::new(),
            profile_image: default_profile_image(),
            schedule: BTreeMap::new(),
        }
    }

    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Slot sequence for one weekday, if the tutor works that day.
    pub fn day_schedule(&self, weekday_name: &str) -> Option<&[CoverageCode]> {
        self.schedule.get(weekday_name).map(|v| v.as_slice())
    }
}
