use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The five engineering disciplines staffing the center.
///
/// Each role carries two codes: the short slot marker written into the
/// coverage grids ("MA", "CP", ...) and the abbreviation used in the tutor
/// schedule and everywhere a major is named ("MAE", "CMPE", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Mechanical, // MAE
    Computer,   // CMPE
    Electrical, // ECE
    Civil,      // CEE
    Biological, // BENG
}

/// Every role, in display/priority order.
pub const ALL_ROLES: [Role; 5] = [
    Role::Mechanical,
    Role::Computer,
    Role::Electrical,
    Role::Civil,
    Role::Biological,
];

impl Role {
    /// Slot marker as it appears in the coverage grids
    pub fn marker(&self) -> &'static str {
        match self {
            Role::Mechanical => "MA",
            Role::Computer => "CP",
            Role::Electrical => "EL",
            Role::Civil => "CE",
            Role::Biological => "B",
        }
    }

    /// Major abbreviation used in the tutor schedule sheet
    pub fn abbr(&self) -> &'static str {
        match self {
            Role::Mechanical => "MAE",
            Role::Computer => "CMPE",
            Role::Electrical => "ECE",
            Role::Civil => "CEE",
            Role::Biological => "BENG",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Mechanical => "Mechanical Engineer",
            Role::Computer => "Computer Engineer",
            Role::Electrical => "Electrical Engineer",
            Role::Civil => "Civil Engineer",
            Role::Biological => "Biological Engineer",
        }
    }

    /// Sort rank used by the roster: MAE first, BENG last.
    pub fn priority(&self) -> usize {
        match self {
            Role::Mechanical => 0,
            Role::Computer => 1,
            Role::Electrical => 2,
            Role::Civil => 3,
            Role::Biological => 4,
        }
    }

    /// Row of this role inside one raw 6-row grid block of the print
    /// schedule sheet (row 2 is the hidden spacer row).
    pub fn sheet_row(&self) -> usize {
        match self {
            Role::Mechanical => 0,
            Role::Civil => 1,
            Role::Biological => 3,
            Role::Electrical => 4,
            Role::Computer => 5,
        }
    }

    /// Parse a slot marker, case-insensitively.
    pub fn from_marker(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ma" | "m" => Some(Role::Mechanical),
            "cp" => Some(Role::Computer),
            "el" => Some(Role::Electrical),
            "ce" => Some(Role::Civil),
            "b" => Some(Role::Biological),
            _ => None,
        }
    }

    /// Parse a major abbreviation, case-insensitively.
    pub fn from_abbr(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "MAE" => Some(Role::Mechanical),
            "CMPE" => Some(Role::Computer),
            "ECE" => Some(Role::Electrical),
            "CEE" => Some(Role::Civil),
            "BENG" => Some(Role::Biological),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbr())
    }
}

// Roles travel through the cache files as their abbreviation string.
impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.abbr())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RoleVisitor;

        impl Visitor<'_> for RoleVisitor {
            type Value = Role;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a major abbreviation (MAE, CMPE, ECE, CEE, BENG)")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Role, E> {
                Role::from_abbr(v).ok_or_else(|| E::custom(format!("unknown role: {v}")))
            }
        }

        deserializer.deserialize_str(RoleVisitor)
    }
}
