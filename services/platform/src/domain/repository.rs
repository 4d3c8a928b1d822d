#![allow(async_fn_in_trait)]

use uuid::Uuid;

use campus_domain::pagination::PageRequest;
use campus_domain::profile::ProfileRef;

use crate::domain::cascade::{CascadeStep, StepOutcome};
use crate::domain::types::{
    CourseDepartmentFaculty, Department, Faculty, ModeratorProfile, Profile, Question, Tag, User,
    UserChanges,
};
use crate::error::{PlatformError, StorageError};

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, PlatformError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, PlatformError>;
    /// Insert the user, and its profile row first when given.
    async fn create(&self, user: &User, profile: Option<&Profile>) -> Result<(), PlatformError>;
    async fn update(&self, id: Uuid, changes: &UserChanges) -> Result<(), PlatformError>;
    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), PlatformError>;
}

/// Read access to the three profile tables.
pub trait ProfileRepository: Send + Sync {
    async fn find(&self, reference: ProfileRef) -> Result<Option<Profile>, PlatformError>;
}

/// Repository for questions and their tag links.
pub trait QuestionRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, PlatformError>;
    async fn list(&self, page: PageRequest) -> Result<Vec<Question>, PlatformError>;
    async fn create(&self, question: &Question) -> Result<(), PlatformError>;
    async fn update(
        &self,
        id: Uuid,
        title: Option<&str>,
        body: Option<&str>,
    ) -> Result<(), PlatformError>;
    /// Delete a question with its tag links and comments. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, PlatformError>;
    async fn list_tags(&self, question_id: Uuid) -> Result<Vec<Tag>, PlatformError>;
    async fn find_tag(&self, tag_id: Uuid) -> Result<Option<Tag>, PlatformError>;
    /// Returns `false` if the tag was already attached.
    async fn attach_tag(&self, question_id: Uuid, tag_id: Uuid) -> Result<bool, PlatformError>;
    /// Returns `true` if a link was removed.
    async fn detach_tag(&self, question_id: Uuid, tag_id: Uuid) -> Result<bool, PlatformError>;
}

/// Faculties and the relations hanging off them.
pub trait FacultyRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Faculty>, PlatformError>;
    async fn list_departments(&self, faculty_id: Uuid) -> Result<Vec<Department>, PlatformError>;
    async fn list_moderators(
        &self,
        faculty_id: Uuid,
    ) -> Result<Vec<ModeratorProfile>, PlatformError>;
    /// Course offerings reached through the faculty's department joins.
    async fn list_course_department_faculties(
        &self,
        faculty_id: Uuid,
    ) -> Result<Vec<CourseDepartmentFaculty>, PlatformError>;
    async fn find_department(&self, id: Uuid) -> Result<Option<Department>, PlatformError>;
    /// Returns `false` if the department was already attached.
    async fn attach_department(
        &self,
        faculty_id: Uuid,
        department_id: Uuid,
    ) -> Result<bool, PlatformError>;
}

/// A user's department and course memberships.
pub trait MembershipRepository: Send + Sync {
    async fn department_faculty_exists(&self, id: Uuid) -> Result<bool, PlatformError>;
    async fn course_department_faculty_exists(&self, id: Uuid) -> Result<bool, PlatformError>;
    async fn join_department_faculty(
        &self,
        user_id: Uuid,
        department_faculty_id: Uuid,
    ) -> Result<(), PlatformError>;
    /// Returns `true` if a membership was removed.
    async fn leave_department_faculty(
        &self,
        user_id: Uuid,
        department_faculty_id: Uuid,
    ) -> Result<bool, PlatformError>;
    async fn join_course_department_faculty(
        &self,
        user_id: Uuid,
        course_department_faculty_id: Uuid,
    ) -> Result<(), PlatformError>;
    /// Returns `true` if a membership was removed.
    async fn leave_course_department_faculty(
        &self,
        user_id: Uuid,
        course_department_faculty_id: Uuid,
    ) -> Result<bool, PlatformError>;
}

/// Interests in events and rates on comments.
pub trait EngagementRepository: Send + Sync {
    async fn event_exists(&self, id: Uuid) -> Result<bool, PlatformError>;
    async fn comment_exists(&self, id: Uuid) -> Result<bool, PlatformError>;
    async fn add_interest(&self, user_id: Uuid, event_id: Uuid) -> Result<(), PlatformError>;
    /// Returns `true` if an interest was removed.
    async fn remove_interest(&self, user_id: Uuid, event_id: Uuid) -> Result<bool, PlatformError>;
    /// Insert the rate, or overwrite it and refresh `updated_at`.
    async fn upsert_rate(
        &self,
        user_id: Uuid,
        comment_id: Uuid,
        rate: i16,
    ) -> Result<(), PlatformError>;
}

/// Port for the uploaded-file store.
pub trait FileStorage: Send + Sync {
    /// Remove a stored file. Returns `false` if it was already absent.
    async fn delete(&self, path: &str) -> Result<bool, StorageError>;
}

/// Opens units of work for the user cascade.
pub trait UserGraphRepository: Send + Sync {
    type Unit: CascadeUnit;

    async fn begin(&self) -> Result<Self::Unit, PlatformError>;
}

/// One atomic cascade. Dropping it without [`CascadeUnit::commit`] discards every change.
pub trait CascadeUnit: Send {
    /// Lock the user row for the rest of the unit. `None` if it no longer exists.
    async fn lock_user(&mut self, user_id: Uuid) -> Result<Option<User>, PlatformError>;
    async fn apply(
        &mut self,
        user_id: Uuid,
        step: CascadeStep,
    ) -> Result<StepOutcome, PlatformError>;
    /// Delete the user row and its profile row. Returns `true` if the user row was deleted.
    async fn remove_user(&mut self, user_id: Uuid) -> Result<bool, PlatformError>;
    async fn commit(self) -> Result<(), PlatformError>;
}
