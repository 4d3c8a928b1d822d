use uuid::Uuid;

use campus_domain::policy::Actor;

use crate::domain::cascade::CASCADE_STEPS;
use crate::domain::repository::{CascadeUnit, FileStorage, UserGraphRepository};
use crate::domain::upload::is_avatar_path;
use crate::error::PlatformError;

// ── DeleteUser ───────────────────────────────────────────────────────────────

/// Summary of a finished cascade.
#[derive(Debug, Default)]
pub struct DeleteUserOutput {
    /// Dependent rows deleted or detached.
    pub affected: u64,
    /// Stored files actually removed, avatar first.
    pub removed_files: Vec<String>,
}

/// Removes a user and everything hanging off it.
///
/// Every cascade step and the row removal share one unit of work holding an
/// exclusive lock on the user row; a concurrent deleter blocks on the lock and
/// then finds no row. Stored files are only touched after commit, so a failed
/// cascade leaves them in place. Storage failures are logged and ignored.
pub struct DeleteUserUseCase<G: UserGraphRepository, S: FileStorage> {
    pub graph: G,
    pub storage: S,
}

impl<G: UserGraphRepository, S: FileStorage> DeleteUserUseCase<G, S> {
    pub async fn execute(
        &self,
        actor: &Actor,
        user_id: Uuid,
    ) -> Result<DeleteUserOutput, PlatformError> {
        if actor.id.0 != user_id && !actor.is_admin() {
            return Err(PlatformError::Forbidden);
        }

        let mut unit = self.graph.begin().await?;
        let user = unit
            .lock_user(user_id)
            .await?
            .ok_or(PlatformError::UserNotFound)?;

        let mut output = DeleteUserOutput::default();
        let mut released = Vec::new();
        for step in CASCADE_STEPS {
            let outcome = unit.apply(user_id, step).await?;
            tracing::debug!(
                user_id = %user_id,
                step = step.name(),
                affected = outcome.affected,
                released = outcome.released_files.len(),
                "cascade step applied"
            );
            output.affected += outcome.affected;
            released.extend(outcome.released_files);
        }

        if !unit.remove_user(user_id).await? {
            return Err(PlatformError::UserNotFound);
        }
        unit.commit().await?;
        tracing::info!(user_id = %user_id, affected = output.affected, "user deleted");

        // Only files under the avatar directory belong to the account itself.
        let avatar = user.avatar.filter(|path| !path.is_empty()).filter(|path| {
            let owned = is_avatar_path(path);
            if !owned {
                tracing::warn!(user_id = %user_id, path = %path, "stored avatar outside avatar dir left in place");
            }
            owned
        });
        for path in avatar.into_iter().chain(released) {
            match self.storage.delete(&path).await {
                Ok(true) => output.removed_files.push(path),
                Ok(false) => tracing::debug!(path = %path, "stored file already absent"),
                Err(e) => tracing::warn!(path = %path, error = %e, "failed to remove stored file"),
            }
        }
        Ok(output)
    }
}
