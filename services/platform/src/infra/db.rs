use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait, sea_query::OnConflict,
};
use uuid::Uuid;

use campus_domain::id::{AdminProfileId, ModeratorProfileId, StudentProfileId};
use campus_domain::pagination::PageRequest;
use campus_domain::profile::ProfileRef;
use campus_platform_schema::{
    admin_profiles, comments, course_department_faculties, course_department_faculty_users,
    course_posts, department_faculties, department_faculty_users, departments, events, faculties,
    interests, messages, moderator_profiles, posts, question_tags, questions, rates,
    student_profiles, tags, tools, users,
};

use crate::domain::cascade::{CascadeStep, StepOutcome};
use crate::domain::repository::{
    CascadeUnit, EngagementRepository, FacultyRepository, MembershipRepository, ProfileRepository,
    QuestionRepository, UserGraphRepository, UserRepository,
};
use crate::domain::types::{
    AdminProfile, CourseDepartmentFaculty, Department, Faculty, ModeratorProfile, Profile,
    Question, StudentProfile, Tag, User, UserChanges,
};
use crate::error::PlatformError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, PlatformError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, PlatformError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User, profile: Option<&Profile>) -> Result<(), PlatformError> {
        let txn = self.db.begin().await.context("begin create user")?;
        if let Some(profile) = profile {
            insert_profile(&txn, profile)
                .await
                .context("create profile")?;
        }
        let inserted = users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            email_verified_at: Set(user.email_verified_at),
            password: Set(user.password_hash.clone()),
            gender: Set(user.gender),
            blocked: Set(user.blocked),
            address: Set(user.address.clone()),
            mobile: Set(user.mobile.clone()),
            avatar: Set(user.avatar.clone()),
            profileable_type: Set(user.profileable_type.clone()),
            profileable_id: Set(user.profileable_id),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&txn)
        .await;
        // A concurrent registration can claim the email after `find_by_email`.
        if let Err(ref e) = inserted {
            if is_unique_violation(e) {
                return Err(PlatformError::UserAlreadyExists);
            }
        }
        inserted.context("create user")?;
        txn.commit().await.context("commit create user")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &UserChanges) -> Result<(), PlatformError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref name) = changes.name {
            am.name = Set(name.clone());
        }
        if let Some(ref address) = changes.address {
            am.address = Set(Some(address.clone()));
        }
        if let Some(ref mobile) = changes.mobile {
            am.mobile = Set(Some(mobile.clone()));
        }
        if let Some(gender) = changes.gender {
            am.gender = Set(gender);
        }
        if let Some(ref avatar) = changes.avatar {
            am.avatar = Set(Some(avatar.clone()).filter(|a| !a.is_empty()));
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update user")?;
        Ok(())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), PlatformError> {
        users::ActiveModel {
            id: Set(id),
            password: Set(password_hash.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user password")?;
        Ok(())
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        email_verified_at: model.email_verified_at,
        password_hash: model.password,
        gender: model.gender,
        blocked: model.blocked,
        address: model.address,
        mobile: model.mobile,
        avatar: model.avatar,
        profileable_type: model.profileable_type,
        profileable_id: model.profileable_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find(&self, reference: ProfileRef) -> Result<Option<Profile>, PlatformError> {
        let profile = match reference {
            ProfileRef::Student(id) => student_profiles::Entity::find_by_id(id.0)
                .one(&self.db)
                .await
                .context("find student profile")?
                .map(|m| {
                    Profile::Student(StudentProfile {
                        id: StudentProfileId(m.id),
                        faculty_id: m.faculty_id,
                        academic_year: m.academic_year,
                        created_at: m.created_at,
                        updated_at: m.updated_at,
                    })
                }),
            ProfileRef::Moderator(id) => moderator_profiles::Entity::find_by_id(id.0)
                .one(&self.db)
                .await
                .context("find moderator profile")?
                .map(|m| Profile::Moderator(moderator_from_model(m))),
            ProfileRef::Admin(id) => admin_profiles::Entity::find_by_id(id.0)
                .one(&self.db)
                .await
                .context("find admin profile")?
                .map(|m| {
                    Profile::Admin(AdminProfile {
                        id: AdminProfileId(m.id),
                        created_at: m.created_at,
                        updated_at: m.updated_at,
                    })
                }),
        };
        Ok(profile)
    }
}

fn moderator_from_model(model: moderator_profiles::Model) -> ModeratorProfile {
    ModeratorProfile {
        id: ModeratorProfileId(model.id),
        faculty_id: model.faculty_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

async fn insert_profile<C: ConnectionTrait>(conn: &C, profile: &Profile) -> Result<(), DbErr> {
    match profile {
        Profile::Student(p) => {
            student_profiles::ActiveModel {
                id: Set(p.id.0),
                faculty_id: Set(p.faculty_id),
                academic_year: Set(p.academic_year),
                created_at: Set(p.created_at),
                updated_at: Set(p.updated_at),
            }
            .insert(conn)
            .await?;
        }
        Profile::Moderator(p) => {
            moderator_profiles::ActiveModel {
                id: Set(p.id.0),
                faculty_id: Set(p.faculty_id),
                created_at: Set(p.created_at),
                updated_at: Set(p.updated_at),
            }
            .insert(conn)
            .await?;
        }
        Profile::Admin(p) => {
            admin_profiles::ActiveModel {
                id: Set(p.id.0),
                created_at: Set(p.created_at),
                updated_at: Set(p.updated_at),
            }
            .insert(conn)
            .await?;
        }
    }
    Ok(())
}

async fn delete_profile<C: ConnectionTrait>(conn: &C, reference: ProfileRef) -> Result<u64, DbErr> {
    let result = match reference {
        ProfileRef::Student(id) => student_profiles::Entity::delete_by_id(id.0).exec(conn).await?,
        ProfileRef::Moderator(id) => {
            moderator_profiles::Entity::delete_by_id(id.0)
                .exec(conn)
                .await?
        }
        ProfileRef::Admin(id) => admin_profiles::Entity::delete_by_id(id.0).exec(conn).await?,
    };
    Ok(result.rows_affected)
}

// ── Question repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbQuestionRepository {
    pub db: DatabaseConnection,
}

impl QuestionRepository for DbQuestionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, PlatformError> {
        let model = questions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find question by id")?;
        Ok(model.map(question_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Question>, PlatformError> {
        let models = questions::Entity::find()
            .order_by_desc(questions::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list questions")?;
        Ok(models.into_iter().map(question_from_model).collect())
    }

    async fn create(&self, question: &Question) -> Result<(), PlatformError> {
        questions::ActiveModel {
            id: Set(question.id),
            user_id: Set(question.user_id),
            title: Set(question.title.clone()),
            body: Set(question.body.clone()),
            created_at: Set(question.created_at),
            updated_at: Set(question.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create question")?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        title: Option<&str>,
        body: Option<&str>,
    ) -> Result<(), PlatformError> {
        let mut am = questions::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(title) = title {
            am.title = Set(title.to_owned());
        }
        if let Some(body) = body {
            am.body = Set(body.to_owned());
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update question")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, PlatformError> {
        let txn = self.db.begin().await.context("begin delete question")?;
        let (deleted, _) = delete_question(&txn, id)
            .await
            .context("delete question")?;
        txn.commit().await.context("commit delete question")?;
        Ok(deleted)
    }

    async fn list_tags(&self, question_id: Uuid) -> Result<Vec<Tag>, PlatformError> {
        let models = tags::Entity::find()
            .inner_join(question_tags::Entity)
            .filter(question_tags::Column::QuestionId.eq(question_id))
            .order_by_asc(tags::Column::Name)
            .all(&self.db)
            .await
            .context("list question tags")?;
        Ok(models
            .into_iter()
            .map(|m| Tag {
                id: m.id,
                name: m.name,
            })
            .collect())
    }

    async fn find_tag(&self, tag_id: Uuid) -> Result<Option<Tag>, PlatformError> {
        let model = tags::Entity::find_by_id(tag_id)
            .one(&self.db)
            .await
            .context("find tag by id")?;
        Ok(model.map(|m| Tag {
            id: m.id,
            name: m.name,
        }))
    }

    async fn attach_tag(&self, question_id: Uuid, tag_id: Uuid) -> Result<bool, PlatformError> {
        let link = question_tags::ActiveModel::attach(question_id, tag_id);
        let inserted = question_tags::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([question_tags::Column::QuestionId, question_tags::Column::TagId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("attach question tag")?;
        Ok(inserted > 0)
    }

    async fn detach_tag(&self, question_id: Uuid, tag_id: Uuid) -> Result<bool, PlatformError> {
        let result = question_tags::Entity::delete_many()
            .filter(question_tags::Column::QuestionId.eq(question_id))
            .filter(question_tags::Column::TagId.eq(tag_id))
            .exec(&self.db)
            .await
            .context("detach question tag")?;
        Ok(result.rows_affected > 0)
    }
}

fn question_from_model(model: questions::Model) -> Question {
    Question {
        id: model.id,
        user_id: model.user_id,
        title: model.title,
        body: model.body,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Faculty repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFacultyRepository {
    pub db: DatabaseConnection,
}

impl DbFacultyRepository {
    async fn faculty_model(&self, id: Uuid) -> Result<Option<faculties::Model>, PlatformError> {
        let model = faculties::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find faculty by id")?;
        Ok(model)
    }
}

impl FacultyRepository for DbFacultyRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Faculty>, PlatformError> {
        Ok(self.faculty_model(id).await?.map(|m| Faculty {
            id: m.id,
            name: m.name,
            university_id: m.university_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }))
    }

    async fn list_departments(&self, faculty_id: Uuid) -> Result<Vec<Department>, PlatformError> {
        let Some(faculty) = self.faculty_model(faculty_id).await? else {
            return Ok(Vec::new());
        };
        let models = faculty
            .find_related(departments::Entity)
            .order_by_asc(departments::Column::Name)
            .all(&self.db)
            .await
            .context("list faculty departments")?;
        Ok(models.into_iter().map(department_from_model).collect())
    }

    async fn list_moderators(
        &self,
        faculty_id: Uuid,
    ) -> Result<Vec<ModeratorProfile>, PlatformError> {
        let models = moderator_profiles::Entity::find()
            .filter(moderator_profiles::Column::FacultyId.eq(faculty_id))
            .order_by_asc(moderator_profiles::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list faculty moderators")?;
        Ok(models.into_iter().map(moderator_from_model).collect())
    }

    async fn list_course_department_faculties(
        &self,
        faculty_id: Uuid,
    ) -> Result<Vec<CourseDepartmentFaculty>, PlatformError> {
        let Some(faculty) = self.faculty_model(faculty_id).await? else {
            return Ok(Vec::new());
        };
        let models = faculty
            .find_linked(faculties::CourseDepartmentFacultiesLink)
            .all(&self.db)
            .await
            .context("list faculty course offerings")?;
        Ok(models
            .into_iter()
            .map(|m| CourseDepartmentFaculty {
                id: m.id,
                course_id: m.course_id,
                department_faculty_id: m.department_faculty_id,
            })
            .collect())
    }

    async fn find_department(&self, id: Uuid) -> Result<Option<Department>, PlatformError> {
        let model = departments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find department by id")?;
        Ok(model.map(department_from_model))
    }

    async fn attach_department(
        &self,
        faculty_id: Uuid,
        department_id: Uuid,
    ) -> Result<bool, PlatformError> {
        let link = department_faculties::ActiveModel::attach(Uuid::now_v7(), department_id, faculty_id);
        let inserted = department_faculties::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([
                    department_faculties::Column::DepartmentId,
                    department_faculties::Column::FacultyId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("attach department to faculty")?;
        Ok(inserted > 0)
    }
}

fn department_from_model(model: departments::Model) -> Department {
    Department {
        id: model.id,
        name: model.name,
    }
}

// ── Membership repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMembershipRepository {
    pub db: DatabaseConnection,
}

impl MembershipRepository for DbMembershipRepository {
    async fn department_faculty_exists(&self, id: Uuid) -> Result<bool, PlatformError> {
        let count = department_faculties::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count department faculty")?;
        Ok(count > 0)
    }

    async fn course_department_faculty_exists(&self, id: Uuid) -> Result<bool, PlatformError> {
        let count = course_department_faculties::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count course department faculty")?;
        Ok(count > 0)
    }

    async fn join_department_faculty(
        &self,
        user_id: Uuid,
        department_faculty_id: Uuid,
    ) -> Result<(), PlatformError> {
        department_faculty_users::Entity::insert(department_faculty_users::ActiveModel::attach(
            user_id,
            department_faculty_id,
        ))
        .on_conflict(
            OnConflict::columns([
                department_faculty_users::Column::UserId,
                department_faculty_users::Column::DepartmentFacultyId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("join department faculty")?;
        Ok(())
    }

    async fn leave_department_faculty(
        &self,
        user_id: Uuid,
        department_faculty_id: Uuid,
    ) -> Result<bool, PlatformError> {
        let result = department_faculty_users::Entity::delete_many()
            .filter(department_faculty_users::Column::UserId.eq(user_id))
            .filter(department_faculty_users::Column::DepartmentFacultyId.eq(department_faculty_id))
            .exec(&self.db)
            .await
            .context("leave department faculty")?;
        Ok(result.rows_affected > 0)
    }

    async fn join_course_department_faculty(
        &self,
        user_id: Uuid,
        course_department_faculty_id: Uuid,
    ) -> Result<(), PlatformError> {
        course_department_faculty_users::Entity::insert(
            course_department_faculty_users::ActiveModel::attach(
                user_id,
                course_department_faculty_id,
            ),
        )
        .on_conflict(
            OnConflict::columns([
                course_department_faculty_users::Column::UserId,
                course_department_faculty_users::Column::CourseDepartmentFacultyId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("join course department faculty")?;
        Ok(())
    }

    async fn leave_course_department_faculty(
        &self,
        user_id: Uuid,
        course_department_faculty_id: Uuid,
    ) -> Result<bool, PlatformError> {
        let result = course_department_faculty_users::Entity::delete_many()
            .filter(course_department_faculty_users::Column::UserId.eq(user_id))
            .filter(
                course_department_faculty_users::Column::CourseDepartmentFacultyId
                    .eq(course_department_faculty_id),
            )
            .exec(&self.db)
            .await
            .context("leave course department faculty")?;
        Ok(result.rows_affected > 0)
    }
}

// ── Engagement repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEngagementRepository {
    pub db: DatabaseConnection,
}

impl EngagementRepository for DbEngagementRepository {
    async fn event_exists(&self, id: Uuid) -> Result<bool, PlatformError> {
        let count = events::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count event")?;
        Ok(count > 0)
    }

    async fn comment_exists(&self, id: Uuid) -> Result<bool, PlatformError> {
        let count = comments::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count comment")?;
        Ok(count > 0)
    }

    async fn add_interest(&self, user_id: Uuid, event_id: Uuid) -> Result<(), PlatformError> {
        interests::Entity::insert(interests::ActiveModel::attach(user_id, event_id))
            .on_conflict(
                OnConflict::columns([interests::Column::UserId, interests::Column::EventId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("add interest")?;
        Ok(())
    }

    async fn remove_interest(&self, user_id: Uuid, event_id: Uuid) -> Result<bool, PlatformError> {
        let result = interests::Entity::delete_many()
            .filter(interests::Column::UserId.eq(user_id))
            .filter(interests::Column::EventId.eq(event_id))
            .exec(&self.db)
            .await
            .context("remove interest")?;
        Ok(result.rows_affected > 0)
    }

    async fn upsert_rate(
        &self,
        user_id: Uuid,
        comment_id: Uuid,
        rate: i16,
    ) -> Result<(), PlatformError> {
        rates::Entity::insert(rates::ActiveModel::attach(user_id, comment_id, rate))
            .on_conflict(
                OnConflict::columns([rates::Column::UserId, rates::Column::CommentId])
                    .update_columns([rates::Column::Rate, rates::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert rate")?;
        Ok(())
    }
}

// ── User graph (cascade) ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserGraphRepository {
    pub db: DatabaseConnection,
}

impl UserGraphRepository for DbUserGraphRepository {
    type Unit = DbCascadeUnit;

    async fn begin(&self) -> Result<DbCascadeUnit, PlatformError> {
        let txn = self.db.begin().await.context("begin user cascade")?;
        Ok(DbCascadeUnit { txn })
    }
}

/// A user cascade running inside one database transaction.
pub struct DbCascadeUnit {
    txn: DatabaseTransaction,
}

impl CascadeUnit for DbCascadeUnit {
    async fn lock_user(&mut self, user_id: Uuid) -> Result<Option<User>, PlatformError> {
        let model = users::Entity::find_by_id(user_id)
            .lock_exclusive()
            .one(&self.txn)
            .await
            .context("lock user row")?;
        Ok(model.map(user_from_model))
    }

    async fn apply(
        &mut self,
        user_id: Uuid,
        step: CascadeStep,
    ) -> Result<StepOutcome, PlatformError> {
        let outcome = run_step(&self.txn, user_id, step)
            .await
            .with_context(|| format!("cascade step {}", step.name()))?;
        Ok(outcome)
    }

    async fn remove_user(&mut self, user_id: Uuid) -> Result<bool, PlatformError> {
        let Some(user) = users::Entity::find_by_id(user_id)
            .one(&self.txn)
            .await
            .context("load user for removal")?
        else {
            return Ok(false);
        };
        let profile = ProfileRef::from_columns(user.profileable_type.as_deref(), user.profileable_id);
        let result = user.delete(&self.txn).await.context("delete user row")?;
        if let Ok(reference) = profile {
            delete_profile(&self.txn, reference)
                .await
                .context("delete user profile")?;
        }
        Ok(result.rows_affected > 0)
    }

    async fn commit(self) -> Result<(), PlatformError> {
        self.txn.commit().await.context("commit user cascade")?;
        Ok(())
    }
}

async fn run_step<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    step: CascadeStep,
) -> Result<StepOutcome, DbErr> {
    match step {
        CascadeStep::DetachDepartmentFaculties => {
            let result = department_faculty_users::Entity::delete_many()
                .filter(department_faculty_users::Column::UserId.eq(user_id))
                .exec(conn)
                .await?;
            Ok(StepOutcome::rows(result.rows_affected))
        }
        CascadeStep::DetachCourseDepartmentFaculties => {
            let result = course_department_faculty_users::Entity::delete_many()
                .filter(course_department_faculty_users::Column::UserId.eq(user_id))
                .exec(conn)
                .await?;
            Ok(StepOutcome::rows(result.rows_affected))
        }
        CascadeStep::DeleteComments => {
            let ids: Vec<Uuid> = comments::Entity::find()
                .select_only()
                .column(comments::Column::Id)
                .filter(comments::Column::UserId.eq(user_id))
                .into_tuple()
                .all(conn)
                .await?;
            Ok(StepOutcome::rows(delete_comments(conn, ids).await?))
        }
        CascadeStep::DeletePosts => {
            let owned = posts::Entity::find()
                .filter(posts::Column::UserId.eq(user_id))
                .all(conn)
                .await?;
            let mut outcome = StepOutcome::default();
            for post in owned {
                outcome.affected += delete_post(conn, post.id).await?;
                outcome.released_files.extend(stored_file(post.image));
            }
            Ok(outcome)
        }
        CascadeStep::DetachInterests => {
            let result = interests::Entity::delete_many()
                .filter(interests::Column::UserId.eq(user_id))
                .exec(conn)
                .await?;
            Ok(StepOutcome::rows(result.rows_affected))
        }
        CascadeStep::DeleteEvents => {
            let owned = events::Entity::find()
                .filter(events::Column::UserId.eq(user_id))
                .all(conn)
                .await?;
            let mut outcome = StepOutcome::default();
            for event in owned {
                outcome.affected += delete_event(conn, event.id).await?;
                outcome.released_files.extend(stored_file(event.cover));
            }
            Ok(outcome)
        }
        CascadeStep::DeleteQuestions => {
            let ids: Vec<Uuid> = questions::Entity::find()
                .select_only()
                .column(questions::Column::Id)
                .filter(questions::Column::UserId.eq(user_id))
                .into_tuple()
                .all(conn)
                .await?;
            let mut affected = 0;
            for id in ids {
                let (_, rows) = delete_question(conn, id).await?;
                affected += rows;
            }
            Ok(StepOutcome::rows(affected))
        }
        CascadeStep::DeleteTools => {
            let owned = tools::Entity::find()
                .filter(tools::Column::UserId.eq(user_id))
                .all(conn)
                .await?;
            let mut outcome = StepOutcome::default();
            for tool in owned {
                outcome.affected += tools::Entity::delete_by_id(tool.id)
                    .exec(conn)
                    .await?
                    .rows_affected;
                outcome.released_files.extend(stored_file(tool.file));
            }
            Ok(outcome)
        }
        CascadeStep::DetachRates => {
            let result = rates::Entity::delete_many()
                .filter(rates::Column::UserId.eq(user_id))
                .exec(conn)
                .await?;
            Ok(StepOutcome::rows(result.rows_affected))
        }
        CascadeStep::DeleteCoursePosts => {
            let result = course_posts::Entity::delete_many()
                .filter(course_posts::Column::UserId.eq(user_id))
                .exec(conn)
                .await?;
            Ok(StepOutcome::rows(result.rows_affected))
        }
        CascadeStep::DeleteMessages => {
            let result = messages::Entity::delete_many()
                .filter(
                    Condition::any()
                        .add(messages::Column::FromUserId.eq(user_id))
                        .add(messages::Column::ToUserId.eq(user_id)),
                )
                .exec(conn)
                .await?;
            Ok(StepOutcome::rows(result.rows_affected))
        }
    }
}

fn stored_file(path: Option<String>) -> Option<String> {
    path.filter(|p| !p.is_empty())
}

/// Delete comments and every rate left on them.
async fn delete_comments<C: ConnectionTrait>(conn: &C, ids: Vec<Uuid>) -> Result<u64, DbErr> {
    if ids.is_empty() {
        return Ok(0);
    }
    let rates_removed = rates::Entity::delete_many()
        .filter(rates::Column::CommentId.is_in(ids.clone()))
        .exec(conn)
        .await?
        .rows_affected;
    let comments_removed = comments::Entity::delete_many()
        .filter(comments::Column::Id.is_in(ids))
        .exec(conn)
        .await?
        .rows_affected;
    Ok(rates_removed + comments_removed)
}

async fn delete_post<C: ConnectionTrait>(conn: &C, post_id: Uuid) -> Result<u64, DbErr> {
    let comment_ids: Vec<Uuid> = comments::Entity::find()
        .select_only()
        .column(comments::Column::Id)
        .filter(comments::Column::PostId.eq(post_id))
        .into_tuple()
        .all(conn)
        .await?;
    let dependents = delete_comments(conn, comment_ids).await?;
    let removed = posts::Entity::delete_by_id(post_id)
        .exec(conn)
        .await?
        .rows_affected;
    Ok(dependents + removed)
}

async fn delete_event<C: ConnectionTrait>(conn: &C, event_id: Uuid) -> Result<u64, DbErr> {
    let detached = interests::Entity::delete_many()
        .filter(interests::Column::EventId.eq(event_id))
        .exec(conn)
        .await?
        .rows_affected;
    let removed = events::Entity::delete_by_id(event_id)
        .exec(conn)
        .await?
        .rows_affected;
    Ok(detached + removed)
}

/// Delete a question with its tag links and answers.
/// Returns whether the question row existed and the total rows removed.
async fn delete_question<C: ConnectionTrait>(
    conn: &C,
    question_id: Uuid,
) -> Result<(bool, u64), DbErr> {
    let unlinked = question_tags::Entity::delete_many()
        .filter(question_tags::Column::QuestionId.eq(question_id))
        .exec(conn)
        .await?
        .rows_affected;
    let comment_ids: Vec<Uuid> = comments::Entity::find()
        .select_only()
        .column(comments::Column::Id)
        .filter(comments::Column::QuestionId.eq(question_id))
        .into_tuple()
        .all(conn)
        .await?;
    let answers = delete_comments(conn, comment_ids).await?;
    let removed = questions::Entity::delete_by_id(question_id)
        .exec(conn)
        .await?
        .rows_affected;
    Ok((removed > 0, unlinked + answers + removed))
}
