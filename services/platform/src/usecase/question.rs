use chrono::Utc;
use uuid::Uuid;

use campus_domain::pagination::PageRequest;
use campus_domain::policy::{Actor, QuestionPolicy};

use crate::domain::repository::QuestionRepository;
use crate::domain::types::{Question, Tag};
use crate::error::PlatformError;

async fn load_question<R: QuestionRepository>(
    repo: &R,
    question_id: Uuid,
) -> Result<Question, PlatformError> {
    repo.find_by_id(question_id)
        .await?
        .ok_or(PlatformError::QuestionNotFound)
}

async fn load_tag<R: QuestionRepository>(repo: &R, tag_id: Uuid) -> Result<Tag, PlatformError> {
    repo.find_tag(tag_id).await?.ok_or(PlatformError::TagNotFound)
}

// ── CreateQuestion ───────────────────────────────────────────────────────────

pub struct CreateQuestionInput {
    pub title: String,
    pub body: String,
}

pub struct CreateQuestionUseCase<R: QuestionRepository> {
    pub repo: R,
}

impl<R: QuestionRepository> CreateQuestionUseCase<R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        input: CreateQuestionInput,
    ) -> Result<Question, PlatformError> {
        if !QuestionPolicy::create(actor) {
            return Err(PlatformError::Forbidden);
        }
        if input.title.trim().is_empty() || input.body.trim().is_empty() {
            return Err(PlatformError::MissingData);
        }
        let now = Utc::now();
        let question = Question {
            id: Uuid::now_v7(),
            user_id: actor.id.0,
            title: input.title,
            body: input.body,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&question).await?;
        Ok(question)
    }
}

// ── GetQuestion ──────────────────────────────────────────────────────────────

pub struct QuestionDetails {
    pub question: Question,
    pub tags: Vec<Tag>,
}

pub struct GetQuestionUseCase<R: QuestionRepository> {
    pub repo: R,
}

impl<R: QuestionRepository> GetQuestionUseCase<R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        question_id: Uuid,
    ) -> Result<QuestionDetails, PlatformError> {
        let question = load_question(&self.repo, question_id).await?;
        if !QuestionPolicy::view(actor, &question) {
            return Err(PlatformError::Forbidden);
        }
        let tags = self.repo.list_tags(question_id).await?;
        Ok(QuestionDetails { question, tags })
    }
}

// ── ListQuestions ────────────────────────────────────────────────────────────

pub struct ListQuestionsUseCase<R: QuestionRepository> {
    pub repo: R,
}

impl<R: QuestionRepository> ListQuestionsUseCase<R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        page: PageRequest,
    ) -> Result<Vec<Question>, PlatformError> {
        if !QuestionPolicy::view_any(actor) {
            return Err(PlatformError::Forbidden);
        }
        self.repo.list(page.clamped()).await
    }
}

// ── UpdateQuestion ───────────────────────────────────────────────────────────

pub struct UpdateQuestionInput {
    pub title: Option<String>,
    pub body: Option<String>,
}

pub struct UpdateQuestionUseCase<R: QuestionRepository> {
    pub repo: R,
}

impl<R: QuestionRepository> UpdateQuestionUseCase<R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        question_id: Uuid,
        input: UpdateQuestionInput,
    ) -> Result<(), PlatformError> {
        if input.title.is_none() && input.body.is_none() {
            return Err(PlatformError::MissingData);
        }
        let question = load_question(&self.repo, question_id).await?;
        if !QuestionPolicy::update(actor, &question) {
            return Err(PlatformError::Forbidden);
        }
        self.repo
            .update(question_id, input.title.as_deref(), input.body.as_deref())
            .await
    }
}

// ── DeleteQuestion ───────────────────────────────────────────────────────────

pub struct DeleteQuestionUseCase<R: QuestionRepository> {
    pub repo: R,
}

impl<R: QuestionRepository> DeleteQuestionUseCase<R> {
    pub async fn execute(&self, actor: &Actor, question_id: Uuid) -> Result<(), PlatformError> {
        let question = load_question(&self.repo, question_id).await?;
        if !QuestionPolicy::delete(actor, &question) {
            return Err(PlatformError::Forbidden);
        }
        if !self.repo.delete(question_id).await? {
            return Err(PlatformError::QuestionNotFound);
        }
        Ok(())
    }
}

// ── AttachQuestionTag ────────────────────────────────────────────────────────

pub struct AttachQuestionTagUseCase<R: QuestionRepository> {
    pub repo: R,
}

impl<R: QuestionRepository> AttachQuestionTagUseCase<R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        question_id: Uuid,
        tag_id: Uuid,
    ) -> Result<(), PlatformError> {
        let question = load_question(&self.repo, question_id).await?;
        let tag = load_tag(&self.repo, tag_id).await?;
        if !QuestionPolicy::attach(actor, &question, &tag) {
            return Err(PlatformError::Forbidden);
        }
        if !self.repo.attach_tag(question_id, tag_id).await? {
            return Err(PlatformError::TagAlreadyAttached);
        }
        Ok(())
    }
}

// ── DetachQuestionTag ────────────────────────────────────────────────────────

pub struct DetachQuestionTagUseCase<R: QuestionRepository> {
    pub repo: R,
}

impl<R: QuestionRepository> DetachQuestionTagUseCase<R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        question_id: Uuid,
        tag_id: Uuid,
    ) -> Result<(), PlatformError> {
        let question = load_question(&self.repo, question_id).await?;
        let tag = load_tag(&self.repo, tag_id).await?;
        if !QuestionPolicy::detach(actor, &question, &tag) {
            return Err(PlatformError::Forbidden);
        }
        if !self.repo.detach_tag(question_id, tag_id).await? {
            return Err(PlatformError::QuestionTagNotFound);
        }
        Ok(())
    }
}
