//! User gender codes.

use serde::{Deserialize, Serialize};

/// Gender as stored on the user row.
///
/// Wire/storage format: small integer (0 = Male, 1 = Female).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male = 0,
    Female = 1,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Convert from the stored code. Returns `None` for unknown codes.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Male),
            1 => Some(Self::Female),
            _ => None,
        }
    }

    pub fn code(self) -> i16 {
        self as i16
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Read accessor: stored code to display label, `None` when the code is unknown.
pub fn gender_label(code: i16) -> Option<&'static str> {
    Gender::from_code(code).map(Gender::label)
}
