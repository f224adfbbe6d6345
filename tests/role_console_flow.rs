// Admin console flows: user listing, role mutations, activity trail

mod common;

use std::sync::Arc;

use showroom_backend::app_data::AppData;
use showroom_backend::services::{BulkDirection, BulkOutcome};
use showroom_backend::types::internal::activity::ActivityAction;
use showroom_backend::types::internal::context::RequestContext;
use showroom_backend::types::internal::roles::AppRole;

const PASSWORD: &str = "hunter2hunter2";

/// Register an admin, grant the role directly, and log in so the request
/// context comes from a real token the way the API layer builds it.
async fn setup_admin(app_data: &Arc<AppData>) -> (String, RequestContext) {
    let admin_id = common::register_user(app_data, "admin@example.com", PASSWORD).await;
    app_data
        .role_store
        .add_role(&admin_id, AppRole::Admin)
        .await
        .unwrap();

    let outcome = app_data
        .auth_service
        .login("admin@example.com", PASSWORD, None)
        .await
        .unwrap();
    let claims = app_data
        .auth_service
        .validate_token(&outcome.access_token)
        .unwrap();

    (admin_id, RequestContext::from_claims(&claims, None))
}

#[tokio::test]
async fn admin_gate_resolves_roles_fresh_per_request() {
    let app_data = common::setup().await;
    let (admin_id, _ctx) = setup_admin(&app_data).await;
    let target = common::register_user(&app_data, "mod@example.com", PASSWORD).await;

    assert!(app_data.role_service.is_admin(&admin_id).await.unwrap());
    assert!(!app_data.role_service.is_admin(&target).await.unwrap());

    // Revoking admin cuts access immediately, token lifetime notwithstanding
    let second_admin = common::register_user(&app_data, "admin2@example.com", PASSWORD).await;
    app_data
        .role_store
        .add_role(&second_admin, AppRole::Admin)
        .await
        .unwrap();
    let ctx2 = RequestContext {
        actor_id: second_admin.clone(),
        actor_email: "admin2@example.com".to_string(),
        user_agent: None,
    };
    app_data
        .role_service
        .remove_role(&ctx2, &admin_id, AppRole::Admin)
        .await
        .unwrap();
    assert!(!app_data.role_service.is_admin(&admin_id).await.unwrap());
}

#[tokio::test]
async fn user_listing_carries_resolved_role_sets() {
    let app_data = common::setup().await;
    let (admin_id, ctx) = setup_admin(&app_data).await;

    let u1 = common::register_user(&app_data, "one@example.com", PASSWORD).await;
    common::register_user(&app_data, "two@example.com", PASSWORD).await;
    app_data
        .role_service
        .add_role(&ctx, &u1, AppRole::Moderator)
        .await
        .unwrap();

    let profiles = app_data.profile_store.list(None, 50, 0).await.unwrap();
    assert_eq!(profiles.len(), 3);

    let ids: Vec<String> = profiles.iter().map(|p| p.id.clone()).collect();
    let role_map = app_data.role_store.roles_for_users(&ids).await.unwrap();

    assert!(role_map.get(&admin_id).unwrap().is_admin());
    assert!(role_map
        .get(&u1)
        .unwrap()
        .contains(AppRole::Moderator));
    // Plain users have no entry at all; the empty set is implied
    assert_eq!(role_map.len(), 2);

    // Search narrows by email substring
    let found = app_data
        .profile_store
        .list(Some("one@"), 50, 0)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, u1);
}

#[tokio::test]
async fn bulk_mutation_full_accounting_and_single_log_entry() {
    let app_data = common::setup().await;
    let (admin_id, ctx) = setup_admin(&app_data).await;

    let mut targets = vec![admin_id.clone()];
    for i in 0..4 {
        let id =
            common::register_user(&app_data, &format!("member{i}@example.com"), PASSWORD).await;
        targets.push(id);
    }
    // One member already holds the role
    app_data
        .role_store
        .add_role(&targets[1], AppRole::Moderator)
        .await
        .unwrap();

    let outcome = app_data
        .role_service
        .bulk_mutate(&ctx, &targets, BulkDirection::Add, AppRole::Moderator)
        .await
        .unwrap();
    assert_eq!(
        outcome,
        BulkOutcome {
            mutated: 3,
            skipped: 2,
            failed: 0
        }
    );

    // One aggregate log entry for the whole batch
    let entries = app_data
        .activity_log_store
        .list(Some(ActivityAction::BulkRoleAdded), 10, 0)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].actor_id, ctx.actor_id);
    let details: serde_json::Value = serde_json::from_str(&entries[0].details).unwrap();
    assert_eq!(details["bulk_count"], 3);
    assert_eq!(details["selection_size"], 5);

    // Re-running the same batch is a pure skip
    let outcome = app_data
        .role_service
        .bulk_mutate(&ctx, &targets, BulkDirection::Add, AppRole::Moderator)
        .await
        .unwrap();
    assert_eq!(outcome.mutated, 0);
    assert_eq!(outcome.skipped, 5);
}

#[tokio::test]
async fn activity_log_filters_and_paginates() {
    let app_data = common::setup().await;
    let (_, ctx) = setup_admin(&app_data).await;

    let mut users = Vec::new();
    for i in 0..3 {
        let id = common::register_user(&app_data, &format!("u{i}@example.com"), PASSWORD).await;
        users.push(id);
    }

    for user in &users {
        app_data
            .role_service
            .add_role(&ctx, user, AppRole::Moderator)
            .await
            .unwrap();
    }
    app_data
        .role_service
        .remove_role(&ctx, &users[0], AppRole::Moderator)
        .await
        .unwrap();

    // Unfiltered: all four entries, newest first
    let all = app_data.activity_log_store.list(None, 10, 0).await.unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].action, "role_removed");

    // Filtered: only the grants
    let adds = app_data
        .activity_log_store
        .list(Some(ActivityAction::RoleAdded), 10, 0)
        .await
        .unwrap();
    assert_eq!(adds.len(), 3);
    assert_eq!(
        app_data
            .activity_log_store
            .count(Some(ActivityAction::RoleAdded))
            .await
            .unwrap(),
        3
    );

    // Pagination walks without overlap
    let page1 = app_data.activity_log_store.list(None, 2, 0).await.unwrap();
    let page2 = app_data.activity_log_store.list(None, 2, 2).await.unwrap();
    assert_eq!(page1.len(), 2);
    assert_eq!(page2.len(), 2);
    let mut ids: Vec<i64> = page1.iter().chain(page2.iter()).map(|e| e.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}
