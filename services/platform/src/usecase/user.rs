use chrono::Utc;
use uuid::Uuid;

use campus_domain::gender::Gender;
use campus_domain::policy::Actor;

use crate::domain::password::{hash_password, verify_password};
use crate::domain::repository::{FileStorage, ProfileRepository, UserRepository};
use crate::domain::types::{NewProfile, Profile, User, UserChanges};
use crate::domain::upload::is_avatar_path;
use crate::error::PlatformError;
use crate::usecase::profile::resolve_profile;

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: i16,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub profile: Option<NewProfile>,
    /// Caller registering the account, when one is identified.
    pub registrar: Option<Actor>,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, PlatformError> {
        if input.name.trim().is_empty() || input.password.is_empty() {
            return Err(PlatformError::MissingData);
        }
        if !input.email.contains('@') {
            return Err(PlatformError::InvalidEmail);
        }
        if Gender::from_code(input.gender).is_none() {
            return Err(PlatformError::InvalidGender);
        }
        // Staff profiles are handed out by admins only.
        let staff = matches!(
            input.profile,
            Some(NewProfile::Moderator { .. } | NewProfile::Admin)
        );
        if staff && !input.registrar.as_ref().is_some_and(Actor::is_admin) {
            return Err(PlatformError::Forbidden);
        }
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(PlatformError::UserAlreadyExists);
        }

        let now = Utc::now();
        let profile = input
            .profile
            .map(|p| p.into_profile(Uuid::now_v7(), now));
        let columns = profile.as_ref().map(|p| p.reference().to_columns());
        let user = User {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            email_verified_at: None,
            password_hash: hash_password(&input.password)?,
            gender: input.gender,
            blocked: false,
            address: input.address,
            mobile: input.mobile,
            avatar: None,
            profileable_type: columns.map(|(discriminator, _)| discriminator.to_owned()),
            profileable_id: columns.map(|(_, id)| id),
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user, profile.as_ref()).await?;
        let kind = profile.as_ref().map(Profile::kind);
        tracing::info!(user_id = %user.id, kind = ?kind, "user registered");
        Ok(user)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

/// A user together with its resolved profile, when one resolves.
pub struct UserDetails {
    pub user: User,
    pub profile: Option<Profile>,
}

pub struct GetUserUseCase<U: UserRepository, P: ProfileRepository> {
    pub users: U,
    pub profiles: P,
}

impl<U: UserRepository, P: ProfileRepository> GetUserUseCase<U, P> {
    pub async fn execute(&self, user_id: Uuid) -> Result<UserDetails, PlatformError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(PlatformError::UserNotFound)?;
        let profile = resolve_profile(&self.profiles, &user).await?;
        Ok(UserDetails { user, profile })
    }
}

// ── ResolveActor ─────────────────────────────────────────────────────────────

/// Turns the caller id injected by the gateway into an [`Actor`].
pub struct ResolveActorUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ResolveActorUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Actor, PlatformError> {
        match self.repo.find_by_id(user_id).await? {
            Some(user) => Ok(user.actor()),
            None => Err(PlatformError::Forbidden),
        }
    }
}

// ── UpdateMe ─────────────────────────────────────────────────────────────────

/// Applies a partial profile update. An avatar must be a file under `avatars/`
/// (an empty string clears it); the replaced avatar file is released afterwards.
pub struct UpdateMeUseCase<R: UserRepository, S: FileStorage> {
    pub repo: R,
    pub storage: S,
}

impl<R: UserRepository, S: FileStorage> UpdateMeUseCase<R, S> {
    pub async fn execute(&self, user_id: Uuid, changes: UserChanges) -> Result<(), PlatformError> {
        if changes.is_empty() {
            return Err(PlatformError::MissingData);
        }
        if let Some(code) = changes.gender {
            if Gender::from_code(code).is_none() {
                return Err(PlatformError::InvalidGender);
            }
        }
        if let Some(avatar) = changes.avatar.as_deref() {
            if !avatar.is_empty() && !is_avatar_path(avatar) {
                return Err(PlatformError::InvalidAvatar);
            }
        }
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(PlatformError::UserNotFound)?;
        self.repo.update(user_id, &changes).await?;

        let replaced = match (user.avatar, changes.avatar.as_deref()) {
            (Some(old), Some(new)) if old != new && is_avatar_path(&old) => Some(old),
            _ => None,
        };
        if let Some(path) = replaced {
            match self.storage.delete(&path).await {
                Ok(_) => tracing::debug!(user_id = %user_id, path = %path, "previous avatar released"),
                Err(e) => tracing::warn!(path = %path, error = %e, "failed to remove previous avatar"),
            }
        }
        Ok(())
    }
}

// ── ChangePassword ───────────────────────────────────────────────────────────

pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

pub struct ChangePasswordUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ChangePasswordUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: ChangePasswordInput,
    ) -> Result<(), PlatformError> {
        if input.new_password.is_empty() {
            return Err(PlatformError::MissingData);
        }
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(PlatformError::UserNotFound)?;
        if !verify_password(&input.current_password, &user.password_hash) {
            return Err(PlatformError::InvalidPassword);
        }
        let hash = hash_password(&input.new_password)?;
        self.repo.update_password(user_id, &hash).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use campus_domain::id::UserId;
    use campus_domain::profile::{ProfileKind, ProfileRef};

    use crate::error::StorageError;

    #[derive(Default)]
    struct MockUserRepo {
        users: Mutex<Vec<User>>,
        created_profiles: Mutex<Vec<Profile>>,
        updates: Mutex<Vec<UserChanges>>,
    }

    impl MockUserRepo {
        fn with(user: User) -> Self {
            Self {
                users: Mutex::new(vec![user]),
                ..Default::default()
            }
        }

        fn stored(&self, id: Uuid) -> User {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .unwrap()
        }
    }

    impl UserRepository for MockUserRepo {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, PlatformError> {
            Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
        }
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, PlatformError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }
        async fn create(&self, user: &User, profile: Option<&Profile>) -> Result<(), PlatformError> {
            self.users.lock().unwrap().push(user.clone());
            if let Some(profile) = profile {
                self.created_profiles.lock().unwrap().push(profile.clone());
            }
            Ok(())
        }
        async fn update(&self, _id: Uuid, changes: &UserChanges) -> Result<(), PlatformError> {
            self.updates.lock().unwrap().push(changes.clone());
            Ok(())
        }
        async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), PlatformError> {
            let mut users = self.users.lock().unwrap();
            if let Some(user) = users.iter_mut().find(|u| u.id == id) {
                user.password_hash = password_hash.to_owned();
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockStorage {
        deleted: Mutex<Vec<String>>,
    }

    impl FileStorage for MockStorage {
        async fn delete(&self, path: &str) -> Result<bool, StorageError> {
            self.deleted.lock().unwrap().push(path.to_owned());
            Ok(true)
        }
    }

    /// Loses the race against a concurrent registration with the same email.
    struct RacingUserRepo;

    impl UserRepository for RacingUserRepo {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, PlatformError> {
            Ok(None)
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, PlatformError> {
            Ok(None)
        }
        async fn create(&self, _user: &User, _profile: Option<&Profile>) -> Result<(), PlatformError> {
            Err(PlatformError::UserAlreadyExists)
        }
        async fn update(&self, _id: Uuid, _changes: &UserChanges) -> Result<(), PlatformError> {
            Ok(())
        }
        async fn update_password(&self, _id: Uuid, _password_hash: &str) -> Result<(), PlatformError> {
            Ok(())
        }
    }

    struct NoProfiles;

    impl ProfileRepository for NoProfiles {
        async fn find(&self, _reference: ProfileRef) -> Result<Option<Profile>, PlatformError> {
            Ok(None)
        }
    }

    fn test_user(password: &str) -> User {
        User {
            id: Uuid::now_v7(),
            name: "Omar Nasser".into(),
            email: "omar@example.test".into(),
            email_verified_at: None,
            password_hash: hash_password(password).unwrap(),
            gender: 0,
            blocked: false,
            address: None,
            mobile: None,
            avatar: None,
            profileable_type: None,
            profileable_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn register_input(email: &str) -> RegisterUserInput {
        RegisterUserInput {
            name: "Lina Haddad".into(),
            email: email.into(),
            password: "abc123".into(),
            gender: 1,
            address: Some("12 University Ave".into()),
            mobile: Some("+963912345678".into()),
            profile: None,
            registrar: None,
        }
    }

    #[tokio::test]
    async fn should_hash_password_on_register() {
        let usecase = RegisterUserUseCase {
            repo: MockUserRepo::default(),
        };
        let user = usecase.execute(register_input("lina@example.test")).await.unwrap();

        let stored = usecase.repo.stored(user.id);
        assert_ne!(stored.password_hash, "abc123");
        assert!(verify_password("abc123", &stored.password_hash));
    }

    #[tokio::test]
    async fn should_store_profile_columns_on_register() {
        let usecase = RegisterUserUseCase {
            repo: MockUserRepo::default(),
        };
        let mut input = register_input("mod@example.test");
        input.profile = Some(NewProfile::Moderator {
            faculty_id: Uuid::now_v7(),
        });
        input.registrar = Some(Actor::new(UserId(Uuid::now_v7()), Some("Admin".into())));
        let user = usecase.execute(input).await.unwrap();

        assert_eq!(user.profileable_type.as_deref(), Some("App\\ModeratorProfile"));
        assert_eq!(user.type_label().as_deref(), Some("Moderator"));
        let profiles = usecase.repo.created_profiles.lock().unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].kind(), ProfileKind::Moderator);
        assert_eq!(Some(profiles[0].reference().id()), user.profileable_id);
    }

    #[tokio::test]
    async fn should_forbid_staff_profile_without_admin_registrar() {
        let usecase = RegisterUserUseCase {
            repo: MockUserRepo::default(),
        };
        let mut input = register_input("self-made-admin@example.test");
        input.profile = Some(NewProfile::Admin);
        let result = usecase.execute(input).await;
        assert!(matches!(result, Err(PlatformError::Forbidden)));
        assert!(usecase.repo.users.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_let_anyone_register_as_student() {
        let usecase = RegisterUserUseCase {
            repo: MockUserRepo::default(),
        };
        let mut input = register_input("student@example.test");
        input.profile = Some(NewProfile::Student {
            faculty_id: Uuid::now_v7(),
            academic_year: 2,
        });
        let user = usecase.execute(input).await.unwrap();
        assert_eq!(user.type_label().as_deref(), Some("Student"));
    }

    #[tokio::test]
    async fn should_reject_email_without_at_sign() {
        let usecase = RegisterUserUseCase {
            repo: MockUserRepo::default(),
        };
        let result = usecase.execute(register_input("lina.example.test")).await;
        assert!(matches!(result, Err(PlatformError::InvalidEmail)));
    }

    #[tokio::test]
    async fn should_reject_unknown_gender_code() {
        let usecase = RegisterUserUseCase {
            repo: MockUserRepo::default(),
        };
        let mut input = register_input("lina@example.test");
        input.gender = 7;
        let result = usecase.execute(input).await;
        assert!(matches!(result, Err(PlatformError::InvalidGender)));
    }

    #[tokio::test]
    async fn should_reject_duplicate_email() {
        let existing = test_user("secret");
        let usecase = RegisterUserUseCase {
            repo: MockUserRepo::with(existing.clone()),
        };
        let result = usecase.execute(register_input(&existing.email)).await;
        assert!(matches!(result, Err(PlatformError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn should_report_conflict_when_email_taken_concurrently() {
        let usecase = RegisterUserUseCase {
            repo: RacingUserRepo,
        };
        let result = usecase.execute(register_input("lina@example.test")).await;
        assert!(matches!(result, Err(PlatformError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn should_return_user_not_found() {
        let usecase = GetUserUseCase {
            users: MockUserRepo::default(),
            profiles: NoProfiles,
        };
        let result = usecase.execute(Uuid::now_v7()).await;
        assert!(matches!(result, Err(PlatformError::UserNotFound)));
    }

    #[tokio::test]
    async fn should_omit_unresolvable_profile() {
        let mut user = test_user("secret");
        user.profileable_type = Some("App\\GhostProfile".into());
        user.profileable_id = Some(Uuid::now_v7());
        let usecase = GetUserUseCase {
            users: MockUserRepo::with(user.clone()),
            profiles: NoProfiles,
        };
        let details = usecase.execute(user.id).await.unwrap();
        assert_eq!(details.user.id, user.id);
        assert!(details.profile.is_none());
    }

    #[tokio::test]
    async fn should_forbid_unknown_caller() {
        let usecase = ResolveActorUseCase {
            repo: MockUserRepo::default(),
        };
        let result = usecase.execute(Uuid::now_v7()).await;
        assert!(matches!(result, Err(PlatformError::Forbidden)));
    }

    #[tokio::test]
    async fn should_return_missing_data_for_empty_update() {
        let user = test_user("secret");
        let usecase = UpdateMeUseCase {
            repo: MockUserRepo::with(user.clone()),
            storage: MockStorage::default(),
        };
        let result = usecase.execute(user.id, UserChanges::default()).await;
        assert!(matches!(result, Err(PlatformError::MissingData)));
    }

    #[tokio::test]
    async fn should_apply_partial_update() {
        let user = test_user("secret");
        let usecase = UpdateMeUseCase {
            repo: MockUserRepo::with(user.clone()),
            storage: MockStorage::default(),
        };
        let changes = UserChanges {
            address: Some("4 Shaalan St".into()),
            gender: Some(1),
            ..Default::default()
        };
        usecase.execute(user.id, changes).await.unwrap();

        let updates = usecase.repo.updates.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].address.as_deref(), Some("4 Shaalan St"));
        assert!(updates[0].name.is_none());
    }

    #[tokio::test]
    async fn should_reject_avatar_outside_avatar_dir() {
        let mut user = test_user("secret");
        user.avatar = Some("avatars/mine.png".into());
        let usecase = UpdateMeUseCase {
            repo: MockUserRepo::with(user.clone()),
            storage: MockStorage::default(),
        };
        for path in ["posts/x.png", "/avatars/x.png", "avatars/../posts/x.png"] {
            let changes = UserChanges {
                avatar: Some(path.into()),
                ..Default::default()
            };
            let result = usecase.execute(user.id, changes).await;
            assert!(
                matches!(result, Err(PlatformError::InvalidAvatar)),
                "{path:?} should be rejected"
            );
        }
        assert!(usecase.repo.updates.lock().unwrap().is_empty());
        assert!(usecase.storage.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_release_previous_avatar_after_replacing_it() {
        let mut user = test_user("secret");
        user.avatar = Some("avatars/old.png".into());
        let usecase = UpdateMeUseCase {
            repo: MockUserRepo::with(user.clone()),
            storage: MockStorage::default(),
        };
        let changes = UserChanges {
            avatar: Some("avatars/new.png".into()),
            ..Default::default()
        };
        usecase.execute(user.id, changes).await.unwrap();

        assert_eq!(
            usecase.repo.updates.lock().unwrap()[0].avatar.as_deref(),
            Some("avatars/new.png")
        );
        assert_eq!(*usecase.storage.deleted.lock().unwrap(), vec!["avatars/old.png"]);
    }

    #[tokio::test]
    async fn should_keep_avatar_file_when_unchanged_or_untouched() {
        let mut user = test_user("secret");
        user.avatar = Some("avatars/same.png".into());
        let usecase = UpdateMeUseCase {
            repo: MockUserRepo::with(user.clone()),
            storage: MockStorage::default(),
        };
        let same = UserChanges {
            avatar: Some("avatars/same.png".into()),
            ..Default::default()
        };
        let name_only = UserChanges {
            name: Some("Omar N.".into()),
            ..Default::default()
        };
        usecase.execute(user.id, same).await.unwrap();
        usecase.execute(user.id, name_only).await.unwrap();

        assert!(usecase.storage.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_rehash_password_after_verifying_current() {
        let user = test_user("old-secret");
        let usecase = ChangePasswordUseCase {
            repo: MockUserRepo::with(user.clone()),
        };
        usecase
            .execute(
                user.id,
                ChangePasswordInput {
                    current_password: "old-secret".into(),
                    new_password: "new-secret".into(),
                },
            )
            .await
            .unwrap();

        let stored = usecase.repo.stored(user.id);
        assert!(verify_password("new-secret", &stored.password_hash));
        assert!(!verify_password("old-secret", &stored.password_hash));
    }

    #[tokio::test]
    async fn should_reject_wrong_current_password() {
        let user = test_user("old-secret");
        let usecase = ChangePasswordUseCase {
            repo: MockUserRepo::with(user.clone()),
        };
        let result = usecase
            .execute(
                user.id,
                ChangePasswordInput {
                    current_password: "guess".into(),
                    new_password: "new-secret".into(),
                },
            )
            .await;
        assert!(matches!(result, Err(PlatformError::InvalidPassword)));
    }
}
