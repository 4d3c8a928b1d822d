pub mod engagement;
pub mod faculty;
pub mod health;
pub mod membership;
pub mod question;
pub mod user;

use campus_auth_types::identity::IdentityHeaders;
use campus_domain::policy::Actor;

use crate::error::PlatformError;
use crate::state::AppState;
use crate::usecase::user::ResolveActorUseCase;

/// Load the caller's user row and derive its role.
pub(crate) async fn caller(
    state: &AppState,
    identity: &IdentityHeaders,
) -> Result<Actor, PlatformError> {
    let usecase = ResolveActorUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(identity.user_id).await
}
