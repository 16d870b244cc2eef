use crate::models::role::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One cell of a coverage grid or a tutor's slot sequence.
///
/// Input is case-insensitive. "n" (raw sheet) and "C" (normalized) both mean
/// the center is closed; anything unrecognized collapses to `Blank` rather
/// than staying a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CoverageCode {
    Staffed(Role),
    Closed,
    Blank,
}

impl CoverageCode {
    /// Parse one spreadsheet cell.
    pub fn from_cell(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.is_empty() {
            return CoverageCode::Blank;
        }
        if let Some(role) = Role::from_marker(cell) {
            return CoverageCode::Staffed(role);
        }
        match cell.to_lowercase().as_str() {
            "n" | "c" => CoverageCode::Closed,
            _ => CoverageCode::Blank,
        }
    }

    /// True when a tutor staffs this slot, i.e. the cell bears a role marker.
    pub fn is_staffed(&self) -> bool {
        matches!(self, CoverageCode::Staffed(_))
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            CoverageCode::Staffed(r) => Some(*r),
            _ => None,
        }
    }

    /// Cell text as written to the cache files.
    pub fn as_cell(&self) -> &'static str {
        match self {
            CoverageCode::Staffed(r) => r.marker(),
            CoverageCode::Closed => "C",
            CoverageCode::Blank => "",
        }
    }
}

impl fmt::Display for CoverageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_cell())
    }
}

impl From<CoverageCode> for String {
    fn from(code: CoverageCode) -> Self {
        code.as_cell().to_string()
    }
}

impl From<String> for CoverageCode {
    fn from(s: String) -> Self {
        CoverageCode::from_cell(&s)
    }
}
