use chrono::{DateTime, Utc};
use uuid::Uuid;

use campus_domain::gender::gender_label;
use campus_domain::id::{AdminProfileId, ModeratorProfileId, StudentProfileId, UserId};
use campus_domain::policy::{Actor, Owned};
use campus_domain::profile::{ProfileKind, ProfileRef, ResolutionError, type_label};

/// Persisted user account. Carries the password hash and never leaves the service as-is.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub password_hash: String,
    pub gender: i16,
    pub blocked: bool,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub avatar: Option<String>,
    pub profileable_type: Option<String>,
    pub profileable_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Role label derived from the profile discriminator, e.g. `"Moderator"`.
    pub fn type_label(&self) -> Option<String> {
        type_label(self.profileable_type.as_deref())
    }

    pub fn gender_label(&self) -> Option<&'static str> {
        gender_label(self.gender)
    }

    /// Absolute avatar URL under `base_url`, if an avatar is stored.
    pub fn avatar_url(&self, base_url: &str) -> Option<String> {
        compose_avatar_url(base_url, self.avatar.as_deref())
    }

    pub fn profile_ref(&self) -> Result<ProfileRef, ResolutionError> {
        ProfileRef::from_columns(self.profileable_type.as_deref(), self.profileable_id)
    }

    pub fn actor(&self) -> Actor {
        Actor::new(UserId(self.id), self.type_label())
    }
}

/// `{base_url}/uploads/{path}` for a non-empty relative path.
pub fn compose_avatar_url(base_url: &str, path: Option<&str>) -> Option<String> {
    let path = path.map(|p| p.trim_start_matches('/')).filter(|p| !p.is_empty())?;
    Some(format!("{}/uploads/{path}", base_url.trim_end_matches('/')))
}

/// Partial update of the mutable user attributes.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub gender: Option<i16>,
    pub avatar: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.mobile.is_none()
            && self.gender.is_none()
            && self.avatar.is_none()
    }
}

// ── Profiles ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    pub id: StudentProfileId,
    pub faculty_id: Uuid,
    pub academic_year: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeratorProfile {
    pub id: ModeratorProfileId,
    pub faculty_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminProfile {
    pub id: AdminProfileId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A resolved profile record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Profile {
    Student(StudentProfile),
    Moderator(ModeratorProfile),
    Admin(AdminProfile),
}

impl Profile {
    pub fn kind(&self) -> ProfileKind {
        self.reference().kind()
    }

    pub fn reference(&self) -> ProfileRef {
        match self {
            Self::Student(p) => ProfileRef::Student(p.id),
            Self::Moderator(p) => ProfileRef::Moderator(p.id),
            Self::Admin(p) => ProfileRef::Admin(p.id),
        }
    }
}

/// Profile data submitted at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewProfile {
    Student { faculty_id: Uuid, academic_year: i16 },
    Moderator { faculty_id: Uuid },
    Admin,
}

impl NewProfile {
    pub fn into_profile(self, id: Uuid, now: DateTime<Utc>) -> Profile {
        match self {
            Self::Student {
                faculty_id,
                academic_year,
            } => Profile::Student(StudentProfile {
                id: StudentProfileId(id),
                faculty_id,
                academic_year,
                created_at: now,
                updated_at: now,
            }),
            Self::Moderator { faculty_id } => Profile::Moderator(ModeratorProfile {
                id: ModeratorProfileId(id),
                faculty_id,
                created_at: now,
                updated_at: now,
            }),
            Self::Admin => Profile::Admin(AdminProfile {
                id: AdminProfileId(id),
                created_at: now,
                updated_at: now,
            }),
        }
    }
}

// ── Academic structure ───────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Faculty {
    pub id: Uuid,
    pub name: String,
    pub university_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
}

/// A course offered by one department within one faculty.
#[derive(Debug, Clone)]
pub struct CourseDepartmentFaculty {
    pub id: Uuid,
    pub course_id: Uuid,
    pub department_faculty_id: Uuid,
}

// ── Questions ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Question {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Question {
    fn owner_id(&self) -> UserId {
        UserId(self.user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(profileable_type: Option<&str>, avatar: Option<&str>) -> User {
        User {
            id: Uuid::now_v7(),
            name: "Dana Saleh".into(),
            email: "dana@example.test".into(),
            email_verified_at: None,
            password_hash: "$argon2id$placeholder".into(),
            gender: 1,
            blocked: false,
            address: None,
            mobile: None,
            avatar: avatar.map(str::to_owned),
            profileable_type: profileable_type.map(str::to_owned),
            profileable_id: profileable_type.map(|_| Uuid::now_v7()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn should_compose_avatar_url_from_origin() {
        let user = user_with(None, Some("avatars/a.png"));
        assert_eq!(
            user.avatar_url("https://campus.test").as_deref(),
            Some("https://campus.test/uploads/avatars/a.png")
        );
    }

    #[test]
    fn should_return_no_avatar_url_for_empty_path() {
        assert_eq!(user_with(None, Some("")).avatar_url("http://h"), None);
        assert_eq!(user_with(None, None).avatar_url("http://h"), None);
    }

    #[test]
    fn should_derive_moderator_label() {
        let user = user_with(Some("App\\ModeratorProfile"), None);
        assert_eq!(user.type_label().as_deref(), Some("Moderator"));
        assert!(!user.actor().is_admin());
    }

    #[test]
    fn should_treat_admin_profile_as_admin_actor() {
        let user = user_with(Some("App\\AdminProfile"), None);
        assert!(user.actor().is_admin());
    }

    #[test]
    fn should_map_gender_label() {
        assert_eq!(user_with(None, None).gender_label(), Some("Female"));
    }

    #[test]
    fn should_resolve_profile_ref_from_columns() {
        let user = user_with(Some("App\\StudentProfile"), None);
        let reference = user.profile_ref().unwrap();
        assert_eq!(reference.kind(), ProfileKind::Student);
        assert_eq!(Some(reference.id()), user.profileable_id);
    }

    #[test]
    fn should_detect_empty_changes() {
        assert!(UserChanges::default().is_empty());
        let changes = UserChanges {
            mobile: Some("+963911111111".into()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
