use uuid::Uuid;

use campus_platform::domain::password::verify_password;
use campus_platform::domain::types::NewProfile;
use campus_platform::error::PlatformError;
use campus_platform::usecase::profile::GetProfileUseCase;
use campus_platform::usecase::user::{
    ChangePasswordInput, ChangePasswordUseCase, GetUserUseCase, RegisterUserInput,
    RegisterUserUseCase, ResolveActorUseCase,
};
use campus_testing::factory::{DEFAULT_PASSWORD, UserAttributes, UserFactory};

use crate::helpers::InMemoryGraph;

fn register_input(attrs: &UserAttributes) -> RegisterUserInput {
    RegisterUserInput {
        name: attrs.name.clone(),
        email: attrs.email.clone(),
        password: attrs.password.clone(),
        gender: attrs.gender.code(),
        address: Some(attrs.address.clone()),
        mobile: Some(attrs.mobile.clone()),
        profile: None,
        registrar: None,
    }
}

#[tokio::test]
async fn should_register_factory_users_with_hashed_passwords() {
    let graph = InMemoryGraph::default();
    let usecase = RegisterUserUseCase {
        repo: graph.clone(),
    };

    for attrs in UserFactory::make_many(5) {
        let user = usecase.execute(register_input(&attrs)).await.unwrap();
        assert_ne!(user.password_hash, DEFAULT_PASSWORD);
        assert!(verify_password(DEFAULT_PASSWORD, &user.password_hash));
        assert!(user.gender_label().is_some());
    }
    assert_eq!(graph.snapshot().users.len(), 5);
}

#[tokio::test]
async fn should_resolve_registered_student_profile() {
    let graph = InMemoryGraph::default();
    let register = RegisterUserUseCase {
        repo: graph.clone(),
    };
    let mut input = register_input(&UserFactory::make());
    input.profile = Some(NewProfile::Student {
        faculty_id: Uuid::now_v7(),
        academic_year: 3,
    });
    let user = register.execute(input).await.unwrap();

    let get = GetUserUseCase {
        users: graph.clone(),
        profiles: graph.clone(),
    };
    let details = get.execute(user.id).await.unwrap();
    assert_eq!(details.user.type_label().as_deref(), Some("Student"));

    let profile = GetProfileUseCase {
        users: graph.clone(),
        profiles: graph.clone(),
    }
    .execute(user.id)
    .await
    .unwrap();
    assert_eq!(Some(profile), details.profile);
}

#[tokio::test]
async fn should_change_password_end_to_end() {
    let graph = InMemoryGraph::default();
    let user = RegisterUserUseCase {
        repo: graph.clone(),
    }
    .execute(register_input(&UserFactory::make()))
    .await
    .unwrap();

    let change = ChangePasswordUseCase {
        repo: graph.clone(),
    };
    let wrong = change
        .execute(
            user.id,
            ChangePasswordInput {
                current_password: "not-it".into(),
                new_password: "abc123".into(),
            },
        )
        .await;
    assert!(matches!(wrong, Err(PlatformError::InvalidPassword)));

    change
        .execute(
            user.id,
            ChangePasswordInput {
                current_password: DEFAULT_PASSWORD.into(),
                new_password: "abc123".into(),
            },
        )
        .await
        .unwrap();

    let stored = graph
        .snapshot()
        .users
        .into_iter()
        .find(|u| u.id == user.id)
        .unwrap();
    assert_ne!(stored.password_hash, "abc123");
    assert!(verify_password("abc123", &stored.password_hash));
    assert!(!verify_password(DEFAULT_PASSWORD, &stored.password_hash));
}

#[tokio::test]
async fn should_resolve_admin_actor_for_admin_registered_by_admin() {
    let graph = InMemoryGraph::default();
    let register = RegisterUserUseCase {
        repo: graph.clone(),
    };
    let first = register
        .execute(register_input(&UserFactory::make()))
        .await
        .unwrap();

    // Promote the first account by hand, then let it register a second admin.
    {
        let mut tables = graph.tables.lock().unwrap();
        let row = tables.users.iter_mut().find(|u| u.id == first.id).unwrap();
        row.profileable_type = Some("App\\AdminProfile".into());
        row.profileable_id = Some(Uuid::now_v7());
    }
    let resolve = ResolveActorUseCase {
        repo: graph.clone(),
    };
    let admin = resolve.execute(first.id).await.unwrap();
    assert!(admin.is_admin());

    let mut input = register_input(&UserFactory::make());
    input.profile = Some(NewProfile::Admin);
    input.registrar = Some(admin);
    let second = register.execute(input).await.unwrap();
    assert!(resolve.execute(second.id).await.unwrap().is_admin());
}
