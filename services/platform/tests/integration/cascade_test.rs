use uuid::Uuid;

use campus_domain::id::UserId;
use campus_domain::policy::Actor;
use campus_platform::domain::types::UserChanges;
use campus_platform::error::PlatformError;
use campus_platform::usecase::delete_user::DeleteUserUseCase;
use campus_platform::usecase::user::UpdateMeUseCase;
use campus_testing::factory::UserFactory;

use crate::helpers::{CommentRow, InMemoryGraph, MessageRow, RecordingStorage, seed_graph, user_from};

fn usecase(
    graph: &InMemoryGraph,
    storage: &RecordingStorage,
) -> DeleteUserUseCase<InMemoryGraph, RecordingStorage> {
    DeleteUserUseCase {
        graph: graph.clone(),
        storage: storage.clone(),
    }
}

fn actor_for(user_id: Uuid) -> Actor {
    Actor::new(UserId(user_id), None)
}

// ── Storage calls ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_avatar_exactly_once() {
    let mut user = user_from(&UserFactory::make());
    user.avatar = Some("avatars/one.png".into());
    let graph = InMemoryGraph::default();
    graph.tables.lock().unwrap().users.push(user.clone());
    let storage = RecordingStorage::default();

    usecase(&graph, &storage)
        .execute(&actor_for(user.id), user.id)
        .await
        .unwrap();

    let avatar_calls = storage
        .calls()
        .into_iter()
        .filter(|p| p == "avatars/one.png")
        .count();
    assert_eq!(avatar_calls, 1);
}

#[tokio::test]
async fn should_release_owned_files_after_avatar() {
    let mut user = user_from(&UserFactory::make());
    user.avatar = Some("avatars/a.png".into());
    let graph = InMemoryGraph::default();
    {
        let mut tables = graph.tables.lock().unwrap();
        tables.users.push(user.clone());
        seed_graph(&mut tables, user.id, "a");
    }
    let storage = RecordingStorage::default();

    let output = usecase(&graph, &storage)
        .execute(&actor_for(user.id), user.id)
        .await
        .unwrap();

    assert_eq!(
        storage.calls(),
        vec!["avatars/a.png", "posts/a.png", "events/a.png", "tools/a.pdf"]
    );
    assert_eq!(output.removed_files.len(), 4);
}

#[tokio::test]
async fn should_not_call_storage_without_avatar_or_files() {
    let user = user_from(&UserFactory::make());
    let graph = InMemoryGraph::default();
    graph.tables.lock().unwrap().users.push(user.clone());
    let storage = RecordingStorage::default();

    usecase(&graph, &storage)
        .execute(&actor_for(user.id), user.id)
        .await
        .unwrap();

    assert!(storage.calls().is_empty());
}

#[tokio::test]
async fn should_keep_other_users_files_when_avatar_points_at_them() {
    let attacker = user_from(&UserFactory::make());
    let victim = user_from(&UserFactory::make());
    let graph = InMemoryGraph::default();
    {
        let mut tables = graph.tables.lock().unwrap();
        tables.users.push(attacker.clone());
        tables.users.push(victim.clone());
        seed_graph(&mut tables, victim.id, "victim");
    }
    let storage = RecordingStorage::default();

    let update = UpdateMeUseCase {
        repo: graph.clone(),
        storage: storage.clone(),
    };
    let result = update
        .execute(
            attacker.id,
            UserChanges {
                avatar: Some("posts/victim.png".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(PlatformError::InvalidAvatar)));

    usecase(&graph, &storage)
        .execute(&actor_for(attacker.id), attacker.id)
        .await
        .unwrap();

    assert!(storage.calls().is_empty());
    assert!(graph.snapshot().references(victim.id));
}

// ── Graph cleanup ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_leave_no_row_referencing_the_user() {
    let user = user_from(&UserFactory::make());
    let other = user_from(&UserFactory::make());
    let graph = InMemoryGraph::default();
    {
        let mut tables = graph.tables.lock().unwrap();
        tables.users.push(user.clone());
        tables.users.push(other.clone());
        seed_graph(&mut tables, user.id, "mine");
        tables.messages.push(MessageRow {
            id: Uuid::now_v7(),
            from_user_id: other.id,
            to_user_id: user.id,
        });
    }

    usecase(&graph, &RecordingStorage::default())
        .execute(&actor_for(user.id), user.id)
        .await
        .unwrap();

    let tables = graph.snapshot();
    assert!(!tables.references(user.id));
    assert!(tables.question_tags.is_empty());
    assert!(tables.users.iter().any(|u| u.id == other.id));
}

#[tokio::test]
async fn should_remove_foreign_dependents_of_owned_content() {
    let user = user_from(&UserFactory::make());
    let other = user_from(&UserFactory::make());
    let graph = InMemoryGraph::default();
    {
        let mut tables = graph.tables.lock().unwrap();
        tables.users.push(user.clone());
        tables.users.push(other.clone());
        let (post_id, event_id, question_id) = seed_graph(&mut tables, user.id, "owned");

        let reply = CommentRow {
            id: Uuid::now_v7(),
            user_id: other.id,
            post_id: Some(post_id),
            question_id: None,
        };
        let answer = CommentRow {
            id: Uuid::now_v7(),
            user_id: other.id,
            post_id: None,
            question_id: Some(question_id),
        };
        tables.rates.push((other.id, answer.id));
        tables.comments.push(reply);
        tables.comments.push(answer);
        tables.interests.push((other.id, event_id));
    }

    usecase(&graph, &RecordingStorage::default())
        .execute(&actor_for(user.id), user.id)
        .await
        .unwrap();

    let tables = graph.snapshot();
    assert!(tables.comments.is_empty());
    assert!(tables.rates.is_empty());
    assert!(tables.interests.is_empty());
}

#[tokio::test]
async fn should_keep_other_users_data() {
    let user = user_from(&UserFactory::make());
    let other = user_from(&UserFactory::make());
    let graph = InMemoryGraph::default();
    {
        let mut tables = graph.tables.lock().unwrap();
        tables.users.push(user.clone());
        tables.users.push(other.clone());
        seed_graph(&mut tables, user.id, "gone");
        seed_graph(&mut tables, other.id, "kept");
    }
    let before = graph.snapshot();

    usecase(&graph, &RecordingStorage::default())
        .execute(&actor_for(user.id), user.id)
        .await
        .unwrap();

    let after = graph.snapshot();
    assert!(after.references(other.id));
    assert_eq!(after.posts.len(), before.posts.len() - 1);
    assert_eq!(after.tools.len(), before.tools.len() - 1);
    assert_eq!(after.comments.len(), before.comments.len() - 1);
    assert_eq!(after.rates.len(), before.rates.len() - 1);
}

// ── Access and repeat deletes ────────────────────────────────────────────────

#[tokio::test]
async fn should_report_user_not_found_on_second_delete() {
    let user = user_from(&UserFactory::make());
    let graph = InMemoryGraph::default();
    graph.tables.lock().unwrap().users.push(user.clone());
    let storage = RecordingStorage::default();
    let uc = usecase(&graph, &storage);

    uc.execute(&actor_for(user.id), user.id).await.unwrap();
    let second = uc.execute(&actor_for(user.id), user.id).await;

    assert!(matches!(second, Err(PlatformError::UserNotFound)));
}

#[tokio::test]
async fn should_forbid_non_admin_deleting_another_user() {
    let user = user_from(&UserFactory::make());
    let graph = InMemoryGraph::default();
    {
        let mut tables = graph.tables.lock().unwrap();
        tables.users.push(user.clone());
        seed_graph(&mut tables, user.id, "safe");
    }
    let before = graph.snapshot();
    let stranger = Actor::new(UserId(Uuid::now_v7()), Some("Moderator".into()));

    let result = usecase(&graph, &RecordingStorage::default())
        .execute(&stranger, user.id)
        .await;

    assert!(matches!(result, Err(PlatformError::Forbidden)));
    assert_eq!(graph.snapshot().posts.len(), before.posts.len());
}
