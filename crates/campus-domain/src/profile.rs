//! Polymorphic user profiles.
//!
//! A user row stores its profile as a `(profileable_type, profileable_id)` pair.
//! The type column holds a discriminator such as `App\ModeratorProfile`; this
//! module maps it onto the closed [`ProfileKind`] set through [`PROFILE_KINDS`]
//! and pairs it with the id into a typed [`ProfileRef`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::id::{AdminProfileId, ModeratorProfileId, StudentProfileId};

const DISCRIMINATOR_PREFIX: &str = "App\\";
const DISCRIMINATOR_SUFFIX: &str = "Profile";

/// Every profile kind a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    Student,
    Moderator,
    Admin,
}

/// Lookup table between stored discriminators and profile kinds.
pub const PROFILE_KINDS: [(ProfileKind, &str); 3] = [
    (ProfileKind::Student, "App\\StudentProfile"),
    (ProfileKind::Moderator, "App\\ModeratorProfile"),
    (ProfileKind::Admin, "App\\AdminProfile"),
];

impl ProfileKind {
    pub fn from_discriminator(value: &str) -> Option<Self> {
        PROFILE_KINDS
            .iter()
            .find(|(_, discriminator)| *discriminator == value)
            .map(|(kind, _)| *kind)
    }

    pub fn discriminator(self) -> &'static str {
        PROFILE_KINDS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, discriminator)| *discriminator)
            .unwrap_or_default()
    }

    /// Display label, also used as the user's role label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Moderator => "Moderator",
            Self::Admin => "Admin",
        }
    }
}

/// Role label granting administrative rights.
pub const ADMIN_LABEL: &str = "Admin";

/// Typed pointer to a profile row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileRef {
    Student(StudentProfileId),
    Moderator(ModeratorProfileId),
    Admin(AdminProfileId),
}

/// Why a stored profile pair could not be turned into a [`ProfileRef`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("profile type is not set")]
    TypeUnset,
    #[error("unknown profile type `{0}`")]
    UnknownKind(String),
    #[error("profile id is missing for `{0}`")]
    MissingId(&'static str),
}

impl ProfileRef {
    pub fn new(kind: ProfileKind, id: Uuid) -> Self {
        match kind {
            ProfileKind::Student => Self::Student(StudentProfileId(id)),
            ProfileKind::Moderator => Self::Moderator(ModeratorProfileId(id)),
            ProfileKind::Admin => Self::Admin(AdminProfileId(id)),
        }
    }

    /// Parse the stored `(profileable_type, profileable_id)` columns.
    pub fn from_columns(
        profileable_type: Option<&str>,
        profileable_id: Option<Uuid>,
    ) -> Result<Self, ResolutionError> {
        let discriminator = profileable_type
            .filter(|t| !t.is_empty())
            .ok_or(ResolutionError::TypeUnset)?;
        let kind = ProfileKind::from_discriminator(discriminator)
            .ok_or_else(|| ResolutionError::UnknownKind(discriminator.to_owned()))?;
        let id = profileable_id.ok_or(ResolutionError::MissingId(kind.discriminator()))?;
        Ok(Self::new(kind, id))
    }

    pub fn kind(&self) -> ProfileKind {
        match self {
            Self::Student(_) => ProfileKind::Student,
            Self::Moderator(_) => ProfileKind::Moderator,
            Self::Admin(_) => ProfileKind::Admin,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::Student(id) => id.0,
            Self::Moderator(id) => id.0,
            Self::Admin(id) => id.0,
        }
    }

    /// Columns to persist for this reference.
    pub fn to_columns(&self) -> (&'static str, Uuid) {
        (self.kind().discriminator(), self.id())
    }
}

/// Derive the read-only type label from a stored discriminator.
///
/// Takes the text after the first `App\` and before the first `Profile`;
/// either marker may be missing. An absent discriminator or an empty result
/// yields `None`.
pub fn type_label(profileable_type: Option<&str>) -> Option<String> {
    let value = profileable_type?;
    let after = value
        .split_once(DISCRIMINATOR_PREFIX)
        .map_or(value, |(_, rest)| rest);
    let before = after
        .split_once(DISCRIMINATOR_SUFFIX)
        .map_or(after, |(head, _)| head);
    (!before.is_empty()).then(|| before.to_owned())
}
