use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::{InternalError, RoleError};
use crate::services::role_service::{BulkDirection, BulkOutcome};
use crate::test::utils::{create_test_user, setup_app_data};
use crate::types::internal::activity::ActivityAction;
use crate::types::internal::context::RequestContext;
use crate::types::internal::roles::AppRole;

async fn setup_admin(app_data: &Arc<AppData>) -> (String, RequestContext) {
    let admin_id = create_test_user(app_data, "admin@example.com").await;
    app_data
        .role_store
        .add_role(&admin_id, AppRole::Admin)
        .await
        .unwrap();
    let ctx = RequestContext::for_tests(&admin_id);
    (admin_id, ctx)
}

#[tokio::test]
async fn user_without_rows_has_empty_role_set() {
    let app_data = setup_app_data().await;
    let user_id = create_test_user(&app_data, "plain@example.com").await;

    let roles = app_data.role_service.roles_for_user(&user_id).await.unwrap();
    assert!(roles.is_empty());
    assert!(!app_data.role_service.is_admin(&user_id).await.unwrap());
}

#[tokio::test]
async fn add_then_remove_round_trip() {
    let app_data = setup_app_data().await;
    let (_, ctx) = setup_admin(&app_data).await;
    let target = create_test_user(&app_data, "target@example.com").await;

    app_data
        .role_service
        .add_role(&ctx, &target, AppRole::Moderator)
        .await
        .unwrap();
    let roles = app_data.role_service.roles_for_user(&target).await.unwrap();
    assert!(roles.contains(AppRole::Moderator));

    app_data
        .role_service
        .remove_role(&ctx, &target, AppRole::Moderator)
        .await
        .unwrap();
    let roles = app_data.role_service.roles_for_user(&target).await.unwrap();
    assert!(!roles.contains(AppRole::Moderator));
}

#[tokio::test]
async fn duplicate_add_is_rejected_without_second_row() {
    let app_data = setup_app_data().await;
    let (_, ctx) = setup_admin(&app_data).await;
    let target = create_test_user(&app_data, "target@example.com").await;

    app_data
        .role_service
        .add_role(&ctx, &target, AppRole::Moderator)
        .await
        .unwrap();

    let result = app_data
        .role_service
        .add_role(&ctx, &target, AppRole::Moderator)
        .await;
    assert!(matches!(
        result,
        Err(InternalError::Role(RoleError::AlreadyAssigned { .. }))
    ));

    // Still exactly one observable moderator role
    let roles = app_data.role_service.roles_for_user(&target).await.unwrap();
    assert_eq!(roles.len(), 1);
}

#[tokio::test]
async fn self_mutation_is_rejected_before_any_store_call() {
    let app_data = setup_app_data().await;
    let (admin_id, ctx) = setup_admin(&app_data).await;

    let result = app_data
        .role_service
        .add_role(&ctx, &admin_id, AppRole::Moderator)
        .await;
    assert!(matches!(
        result,
        Err(InternalError::Role(RoleError::SelfModificationDenied))
    ));

    let result = app_data
        .role_service
        .remove_role(&ctx, &admin_id, AppRole::Admin)
        .await;
    assert!(matches!(
        result,
        Err(InternalError::Role(RoleError::SelfModificationDenied))
    ));

    // The admin role row is untouched
    let roles = app_data
        .role_service
        .roles_for_user(&admin_id)
        .await
        .unwrap();
    assert!(roles.is_admin());
    assert!(!roles.contains(AppRole::Moderator));
}

#[tokio::test]
async fn single_mutations_write_activity_entries() {
    let app_data = setup_app_data().await;
    let (_, ctx) = setup_admin(&app_data).await;
    let target = create_test_user(&app_data, "target@example.com").await;

    app_data
        .role_service
        .add_role(&ctx, &target, AppRole::Moderator)
        .await
        .unwrap();
    app_data
        .role_service
        .remove_role(&ctx, &target, AppRole::Moderator)
        .await
        .unwrap();

    let entries = app_data
        .activity_log_store
        .list(None, 10, 0)
        .await
        .unwrap();
    assert_eq!(entries.len(), 2);
    // Newest first
    assert_eq!(entries[0].action, "role_removed");
    assert_eq!(entries[1].action, "role_added");
    assert_eq!(entries[1].target_user_id.as_deref(), Some(target.as_str()));
    assert_eq!(entries[1].actor_id, ctx.actor_id);
}

#[tokio::test]
async fn bulk_add_skips_actor_and_already_satisfied_members() {
    let app_data = setup_app_data().await;
    let (admin_id, ctx) = setup_admin(&app_data).await;

    let u1 = create_test_user(&app_data, "u1@example.com").await;
    let u2 = create_test_user(&app_data, "u2@example.com").await;
    app_data
        .role_store
        .add_role(&u2, AppRole::Moderator)
        .await
        .unwrap();

    let targets = vec![admin_id.clone(), u1.clone(), u2.clone()];
    let outcome = app_data
        .role_service
        .bulk_mutate(&ctx, &targets, BulkDirection::Add, AppRole::Moderator)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        BulkOutcome {
            mutated: 1,
            skipped: 2,
            failed: 0
        }
    );

    // u1 gained the role, u2 kept its single row, the actor was untouched
    for id in [&u1, &u2] {
        let roles = app_data.role_service.roles_for_user(id).await.unwrap();
        assert!(roles.contains(AppRole::Moderator));
    }
    let admin_roles = app_data
        .role_service
        .roles_for_user(&admin_id)
        .await
        .unwrap();
    assert!(!admin_roles.contains(AppRole::Moderator));

    // Exactly one aggregate entry with the mutated count
    let entries = app_data
        .activity_log_store
        .list(Some(ActivityAction::BulkRoleAdded), 10, 0)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    let details: serde_json::Value = serde_json::from_str(&entries[0].details).unwrap();
    assert_eq!(details["bulk_count"], 1);
    assert_eq!(details["role"], "moderator");
}

#[tokio::test]
async fn bulk_batch_continues_past_failing_member() {
    let app_data = setup_app_data().await;
    let (_, ctx) = setup_admin(&app_data).await;

    let u1 = create_test_user(&app_data, "u1@example.com").await;
    let u2 = create_test_user(&app_data, "u2@example.com").await;
    // No profile row: the foreign key rejects the role insert
    let ghost = "00000000-0000-0000-0000-000000000000".to_string();

    let targets = vec![u1.clone(), ghost, u2.clone()];
    let outcome = app_data
        .role_service
        .bulk_mutate(&ctx, &targets, BulkDirection::Add, AppRole::Moderator)
        .await
        .unwrap();

    assert_eq!(outcome.mutated, 2);
    assert_eq!(outcome.failed, 1);

    // Members after the failure were still attempted
    let roles = app_data.role_service.roles_for_user(&u2).await.unwrap();
    assert!(roles.contains(AppRole::Moderator));
}

#[tokio::test]
async fn bulk_remove_skips_members_without_the_role() {
    let app_data = setup_app_data().await;
    let (_, ctx) = setup_admin(&app_data).await;

    let u1 = create_test_user(&app_data, "u1@example.com").await;
    let u2 = create_test_user(&app_data, "u2@example.com").await;
    app_data
        .role_store
        .add_role(&u1, AppRole::Moderator)
        .await
        .unwrap();

    let targets = vec![u1.clone(), u2.clone()];
    let outcome = app_data
        .role_service
        .bulk_mutate(&ctx, &targets, BulkDirection::Remove, AppRole::Moderator)
        .await
        .unwrap();

    assert_eq!(outcome.mutated, 1);
    assert_eq!(outcome.skipped, 1);

    let entries = app_data
        .activity_log_store
        .list(Some(ActivityAction::BulkRoleRemoved), 10, 0)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn bulk_with_empty_selection_is_a_noop() {
    let app_data = setup_app_data().await;
    let (_, ctx) = setup_admin(&app_data).await;

    let outcome = app_data
        .role_service
        .bulk_mutate(&ctx, &[], BulkDirection::Add, AppRole::Moderator)
        .await
        .unwrap();

    assert_eq!(outcome, BulkOutcome::default());

    let entries = app_data
        .activity_log_store
        .list(None, 10, 0)
        .await
        .unwrap();
    assert!(entries.is_empty());
}
