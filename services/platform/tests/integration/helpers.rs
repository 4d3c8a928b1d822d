use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use campus_platform::domain::cascade::{CascadeStep, StepOutcome};
use campus_platform::domain::password::hash_password;
use campus_platform::domain::repository::{
    CascadeUnit, FileStorage, ProfileRepository, UserGraphRepository, UserRepository,
};
use campus_platform::domain::types::{Profile, User, UserChanges};
use campus_platform::error::{PlatformError, StorageError};
use campus_domain::profile::ProfileRef;
use campus_testing::factory::UserAttributes;

// ── Rows ─────────────────────────────────────────────────────────────────────

/// A user-owned row that may hold a stored file (post image, event cover, tool file).
#[derive(Debug, Clone)]
pub struct OwnedRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Option<Uuid>,
    pub question_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct MessageRow {
    pub id: Uuid,
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
}

/// Every table touched by the user cascade. Join rows are `(user_id, other_id)`.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub users: Vec<User>,
    pub profiles: Vec<Profile>,
    pub department_faculty_users: Vec<(Uuid, Uuid)>,
    pub course_department_faculty_users: Vec<(Uuid, Uuid)>,
    pub posts: Vec<OwnedRow>,
    pub events: Vec<OwnedRow>,
    pub questions: Vec<OwnedRow>,
    pub tools: Vec<OwnedRow>,
    pub course_posts: Vec<OwnedRow>,
    pub comments: Vec<CommentRow>,
    pub interests: Vec<(Uuid, Uuid)>,
    pub rates: Vec<(Uuid, Uuid)>,
    pub question_tags: Vec<(Uuid, Uuid)>,
    pub messages: Vec<MessageRow>,
}

impl Tables {
    /// Whether any row still references `user_id`.
    pub fn references(&self, user_id: Uuid) -> bool {
        let owned = |rows: &[OwnedRow]| rows.iter().any(|r| r.user_id == user_id);
        let joined = |rows: &[(Uuid, Uuid)]| rows.iter().any(|(u, _)| *u == user_id);
        self.users.iter().any(|u| u.id == user_id)
            || joined(&self.department_faculty_users)
            || joined(&self.course_department_faculty_users)
            || joined(&self.interests)
            || joined(&self.rates)
            || owned(&self.posts)
            || owned(&self.events)
            || owned(&self.questions)
            || owned(&self.tools)
            || owned(&self.course_posts)
            || self.comments.iter().any(|c| c.user_id == user_id)
            || self
                .messages
                .iter()
                .any(|m| m.from_user_id == user_id || m.to_user_id == user_id)
    }

    fn delete_comments(&mut self, ids: &[Uuid]) -> u64 {
        let before = self.rates.len() + self.comments.len();
        self.rates.retain(|(_, comment)| !ids.contains(comment));
        self.comments.retain(|c| !ids.contains(&c.id));
        (before - self.rates.len() - self.comments.len()) as u64
    }

    fn comments_where(&self, pred: impl Fn(&CommentRow) -> bool) -> Vec<Uuid> {
        self.comments.iter().filter(|c| pred(c)).map(|c| c.id).collect()
    }

    fn take_owned(rows: &mut Vec<OwnedRow>, user_id: Uuid) -> Vec<OwnedRow> {
        let (taken, kept): (Vec<_>, Vec<_>) = rows.drain(..).partition(|r| r.user_id == user_id);
        *rows = kept;
        taken
    }

    fn detach(rows: &mut Vec<(Uuid, Uuid)>, user_id: Uuid) -> u64 {
        let before = rows.len();
        rows.retain(|(u, _)| *u != user_id);
        (before - rows.len()) as u64
    }

    fn run_step(&mut self, user_id: Uuid, step: CascadeStep) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        match step {
            CascadeStep::DetachDepartmentFaculties => {
                outcome.affected = Self::detach(&mut self.department_faculty_users, user_id);
            }
            CascadeStep::DetachCourseDepartmentFaculties => {
                outcome.affected =
                    Self::detach(&mut self.course_department_faculty_users, user_id);
            }
            CascadeStep::DeleteComments => {
                let ids = self.comments_where(|c| c.user_id == user_id);
                outcome.affected = self.delete_comments(&ids);
            }
            CascadeStep::DeletePosts => {
                for post in Self::take_owned(&mut self.posts, user_id) {
                    let ids = self.comments_where(|c| c.post_id == Some(post.id));
                    outcome.affected += 1 + self.delete_comments(&ids);
                    outcome.released_files.extend(post.file.filter(|f| !f.is_empty()));
                }
            }
            CascadeStep::DetachInterests => {
                outcome.affected = Self::detach(&mut self.interests, user_id);
            }
            CascadeStep::DeleteEvents => {
                for event in Self::take_owned(&mut self.events, user_id) {
                    let before = self.interests.len();
                    self.interests.retain(|(_, e)| *e != event.id);
                    outcome.affected += 1 + (before - self.interests.len()) as u64;
                    outcome.released_files.extend(event.file.filter(|f| !f.is_empty()));
                }
            }
            CascadeStep::DeleteQuestions => {
                for question in Self::take_owned(&mut self.questions, user_id) {
                    self.question_tags.retain(|(q, _)| *q != question.id);
                    let ids = self.comments_where(|c| c.question_id == Some(question.id));
                    outcome.affected += 1 + self.delete_comments(&ids);
                }
            }
            CascadeStep::DeleteTools => {
                for tool in Self::take_owned(&mut self.tools, user_id) {
                    outcome.affected += 1;
                    outcome.released_files.extend(tool.file.filter(|f| !f.is_empty()));
                }
            }
            CascadeStep::DetachRates => {
                outcome.affected = Self::detach(&mut self.rates, user_id);
            }
            CascadeStep::DeleteCoursePosts => {
                outcome.affected = Self::take_owned(&mut self.course_posts, user_id).len() as u64;
            }
            CascadeStep::DeleteMessages => {
                let before = self.messages.len();
                self.messages
                    .retain(|m| m.from_user_id != user_id && m.to_user_id != user_id);
                outcome.affected = (before - self.messages.len()) as u64;
            }
        }
        outcome
    }
}

// ── InMemoryGraph ────────────────────────────────────────────────────────────

/// Graph store whose units stage a copy of the tables and publish it on commit.
#[derive(Clone, Default)]
pub struct InMemoryGraph {
    pub tables: Arc<Mutex<Tables>>,
}

impl InMemoryGraph {
    pub fn snapshot(&self) -> Tables {
        self.tables.lock().unwrap().clone()
    }
}

pub struct InMemoryUnit {
    staged: Tables,
    shared: Arc<Mutex<Tables>>,
}

impl UserGraphRepository for InMemoryGraph {
    type Unit = InMemoryUnit;

    async fn begin(&self) -> Result<InMemoryUnit, PlatformError> {
        Ok(InMemoryUnit {
            staged: self.snapshot(),
            shared: Arc::clone(&self.tables),
        })
    }
}

impl CascadeUnit for InMemoryUnit {
    async fn lock_user(&mut self, user_id: Uuid) -> Result<Option<User>, PlatformError> {
        Ok(self.staged.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn apply(
        &mut self,
        user_id: Uuid,
        step: CascadeStep,
    ) -> Result<StepOutcome, PlatformError> {
        Ok(self.staged.run_step(user_id, step))
    }

    async fn remove_user(&mut self, user_id: Uuid) -> Result<bool, PlatformError> {
        let Some(index) = self.staged.users.iter().position(|u| u.id == user_id) else {
            return Ok(false);
        };
        let user = self.staged.users.remove(index);
        if let Ok(reference) = user.profile_ref() {
            self.staged.profiles.retain(|p| p.reference() != reference);
        }
        Ok(true)
    }

    async fn commit(self) -> Result<(), PlatformError> {
        *self.shared.lock().unwrap() = self.staged;
        Ok(())
    }
}

/// User and profile reads over the same tables, for use cases outside the cascade.
impl UserRepository for InMemoryGraph {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, PlatformError> {
        Ok(self.snapshot().users.into_iter().find(|u| u.id == id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, PlatformError> {
        Ok(self.snapshot().users.into_iter().find(|u| u.email == email))
    }

    async fn create(&self, user: &User, profile: Option<&Profile>) -> Result<(), PlatformError> {
        let mut tables = self.tables.lock().unwrap();
        tables.users.push(user.clone());
        tables.profiles.extend(profile.cloned());
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &UserChanges) -> Result<(), PlatformError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(user) = tables.users.iter_mut().find(|u| u.id == id) {
            if let Some(name) = &changes.name {
                user.name = name.clone();
            }
            if changes.address.is_some() {
                user.address = changes.address.clone();
            }
            if changes.mobile.is_some() {
                user.mobile = changes.mobile.clone();
            }
            if let Some(gender) = changes.gender {
                user.gender = gender;
            }
            if changes.avatar.is_some() {
                user.avatar = changes.avatar.clone();
            }
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), PlatformError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(user) = tables.users.iter_mut().find(|u| u.id == id) {
            user.password_hash = password_hash.to_owned();
        }
        Ok(())
    }
}

impl ProfileRepository for InMemoryGraph {
    async fn find(&self, reference: ProfileRef) -> Result<Option<Profile>, PlatformError> {
        Ok(self
            .snapshot()
            .profiles
            .into_iter()
            .find(|p| p.reference() == reference))
    }
}

// ── RecordingStorage ─────────────────────────────────────────────────────────

/// File store that records every delete call.
#[derive(Clone, Default)]
pub struct RecordingStorage {
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingStorage {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl FileStorage for RecordingStorage {
    async fn delete(&self, path: &str) -> Result<bool, StorageError> {
        self.calls.lock().unwrap().push(path.to_owned());
        Ok(true)
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

/// A persisted user built from factory attributes, without a profile.
pub fn user_from(attrs: &UserAttributes) -> User {
    User {
        id: Uuid::now_v7(),
        name: attrs.name.clone(),
        email: attrs.email.clone(),
        email_verified_at: attrs.email_verified_at,
        password_hash: hash_password(&attrs.password).unwrap(),
        gender: attrs.gender.code(),
        blocked: attrs.blocked,
        address: Some(attrs.address.clone()),
        mobile: Some(attrs.mobile.clone()),
        avatar: None,
        profileable_type: None,
        profileable_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn owned(user_id: Uuid, file: Option<&str>) -> OwnedRow {
    OwnedRow {
        id: Uuid::now_v7(),
        user_id,
        file: file.map(str::to_owned),
    }
}

/// Seed one of everything the cascade touches for `user_id`.
/// Returns the ids of the seeded post, event and question.
pub fn seed_graph(tables: &mut Tables, user_id: Uuid, tag: &str) -> (Uuid, Uuid, Uuid) {
    let post = owned(user_id, Some(&format!("posts/{tag}.png")));
    let event = owned(user_id, Some(&format!("events/{tag}.png")));
    let question = owned(user_id, None);
    let (post_id, event_id, question_id) = (post.id, event.id, question.id);

    tables.posts.push(post);
    tables.events.push(event);
    tables.questions.push(question);
    tables
        .tools
        .push(owned(user_id, Some(&format!("tools/{tag}.pdf"))));
    tables.course_posts.push(owned(user_id, None));
    tables
        .department_faculty_users
        .push((user_id, Uuid::now_v7()));
    tables
        .course_department_faculty_users
        .push((user_id, Uuid::now_v7()));
    tables.question_tags.push((question_id, Uuid::now_v7()));

    let comment = CommentRow {
        id: Uuid::now_v7(),
        user_id,
        post_id: None,
        question_id: None,
    };
    tables.rates.push((user_id, comment.id));
    tables.comments.push(comment);
    tables.interests.push((user_id, event_id));
    (post_id, event_id, question_id)
}
