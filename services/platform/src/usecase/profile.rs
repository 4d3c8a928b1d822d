use uuid::Uuid;

use campus_domain::profile::ResolutionError;

use crate::domain::repository::{ProfileRepository, UserRepository};
use crate::domain::types::{Profile, User};
use crate::error::PlatformError;

/// Resolve the user's profile pair to its record.
///
/// Broken pairs and dangling ids are logged and yield `None`; a user without a
/// profile type is not an error.
pub async fn resolve_profile<P: ProfileRepository>(
    profiles: &P,
    user: &User,
) -> Result<Option<Profile>, PlatformError> {
    let reference = match user.profile_ref() {
        Ok(reference) => reference,
        Err(ResolutionError::TypeUnset) => {
            tracing::debug!(user_id = %user.id, "user has no profile");
            return Ok(None);
        }
        Err(e) => {
            tracing::warn!(user_id = %user.id, error = %e, "unresolvable profile reference");
            return Ok(None);
        }
    };
    let profile = profiles.find(reference).await?;
    if profile.is_none() {
        tracing::warn!(
            user_id = %user.id,
            kind = ?reference.kind(),
            profile_id = %reference.id(),
            "profile row not found"
        );
    }
    Ok(profile)
}

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<U: UserRepository, P: ProfileRepository> {
    pub users: U,
    pub profiles: P,
}

impl<U: UserRepository, P: ProfileRepository> GetProfileUseCase<U, P> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Profile, PlatformError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(PlatformError::UserNotFound)?;
        resolve_profile(&self.profiles, &user)
            .await?
            .ok_or(PlatformError::ProfileNotFound)
    }
}
