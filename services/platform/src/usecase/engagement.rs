use uuid::Uuid;

use campus_domain::policy::Actor;

use crate::domain::repository::EngagementRepository;
use crate::error::PlatformError;

pub const MIN_RATE: i16 = 1;
pub const MAX_RATE: i16 = 5;

// ── AddInterest ──────────────────────────────────────────────────────────────

pub struct AddInterestUseCase<R: EngagementRepository> {
    pub repo: R,
}

impl<R: EngagementRepository> AddInterestUseCase<R> {
    pub async fn execute(&self, actor: &Actor, event_id: Uuid) -> Result<(), PlatformError> {
        if !self.repo.event_exists(event_id).await? {
            return Err(PlatformError::EventNotFound);
        }
        self.repo.add_interest(actor.id.0, event_id).await
    }
}

// ── RemoveInterest ───────────────────────────────────────────────────────────

pub struct RemoveInterestUseCase<R: EngagementRepository> {
    pub repo: R,
}

impl<R: EngagementRepository> RemoveInterestUseCase<R> {
    pub async fn execute(&self, actor: &Actor, event_id: Uuid) -> Result<(), PlatformError> {
        if !self.repo.remove_interest(actor.id.0, event_id).await? {
            return Err(PlatformError::InterestNotFound);
        }
        Ok(())
    }
}

// ── RateComment ──────────────────────────────────────────────────────────────

/// One rate per user and comment; rating again overwrites.
pub struct RateCommentUseCase<R: EngagementRepository> {
    pub repo: R,
}

impl<R: EngagementRepository> RateCommentUseCase<R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        comment_id: Uuid,
        rate: i16,
    ) -> Result<(), PlatformError> {
        if !(MIN_RATE..=MAX_RATE).contains(&rate) {
            return Err(PlatformError::InvalidRate);
        }
        if !self.repo.comment_exists(comment_id).await? {
            return Err(PlatformError::CommentNotFound);
        }
        self.repo.upsert_rate(actor.id.0, comment_id, rate).await
    }
}
