// End-to-end login and lockout behavior across the auth and lockout services

mod common;

use std::time::Duration;

use showroom_backend::config::LockoutPolicy;
use showroom_backend::services::LoginError;

const PASSWORD: &str = "hunter2hunter2";

#[tokio::test]
async fn lockout_blocks_login_then_clears_after_cooldown() {
    // Tight policy so the test can wait out a real cooldown
    let policy = LockoutPolicy {
        max_failures: 2,
        window: Duration::from_secs(60),
        cooldown: Duration::from_secs(1),
    };
    let app_data = common::setup_with_policy(policy).await;
    common::register_user(&app_data, "buyer@example.com", PASSWORD).await;

    for _ in 0..2 {
        let result = app_data
            .auth_service
            .login("buyer@example.com", "wrong", None)
            .await;
        assert!(result.is_err());
    }

    // Locked: even the correct password is refused
    let result = app_data
        .auth_service
        .login("buyer@example.com", PASSWORD, None)
        .await;
    assert!(matches!(result, Err(LoginError::Locked { .. })));

    tokio::time::sleep(Duration::from_secs(2)).await;

    // Cooldown elapsed: the same credentials now work
    let outcome = app_data
        .auth_service
        .login("buyer@example.com", PASSWORD, None)
        .await
        .expect("Login should succeed after cooldown");
    assert!(!outcome.access_token.is_empty());
}

#[tokio::test]
async fn lockout_status_is_recomputed_not_cached() {
    let policy = LockoutPolicy {
        max_failures: 1,
        window: Duration::from_secs(60),
        cooldown: Duration::from_secs(1),
    };
    let app_data = common::setup_with_policy(policy).await;
    common::register_user(&app_data, "buyer@example.com", PASSWORD).await;

    let _ = app_data
        .auth_service
        .login("buyer@example.com", "wrong", None)
        .await;

    let status = app_data
        .lockout_service
        .status("buyer@example.com")
        .await
        .unwrap();
    assert!(status.locked);
    assert!(status.remaining_seconds > 0);

    tokio::time::sleep(Duration::from_secs(2)).await;

    // No mutation happened in between; the derived state simply moved on
    let status = app_data
        .lockout_service
        .status("buyer@example.com")
        .await
        .unwrap();
    assert!(!status.locked);
    assert_eq!(status.remaining_seconds, 0);
}

#[tokio::test]
async fn successful_login_issues_token_that_validates() {
    let app_data = common::setup().await;
    let user_id = common::register_user(&app_data, "buyer@example.com", PASSWORD).await;

    let outcome = app_data
        .auth_service
        .login("buyer@example.com", PASSWORD, Some("integration-test".to_string()))
        .await
        .unwrap();

    let claims = app_data
        .auth_service
        .validate_token(&outcome.access_token)
        .expect("Token should validate");
    assert_eq!(claims.sub, user_id);

    let attempts = app_data
        .lockout_service
        .recent_attempts("buyer@example.com", 5)
        .await
        .unwrap();
    assert_eq!(attempts.len(), 1);
    assert!(attempts[0].success);
}
