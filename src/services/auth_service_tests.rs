use crate::errors::{InternalError, ProfileError};
use crate::services::auth_service::LoginError;
use crate::test::utils::setup_app_data;

#[tokio::test]
async fn register_then_login_issues_valid_token() {
    let app_data = setup_app_data().await;

    let profile = app_data
        .auth_service
        .register("buyer@example.com".to_string(), "hunter2hunter2", None, None)
        .await
        .unwrap();

    let outcome = app_data
        .auth_service
        .login("buyer@example.com", "hunter2hunter2", None)
        .await
        .unwrap();

    let claims = app_data
        .auth_service
        .validate_token(&outcome.access_token)
        .expect("Token should validate");
    assert_eq!(claims.sub, profile.id);
    assert_eq!(claims.email, "buyer@example.com");
    assert!(outcome.expires_in > 0);
}

#[tokio::test]
async fn duplicate_email_registration_is_rejected() {
    let app_data = setup_app_data().await;

    app_data
        .auth_service
        .register("buyer@example.com".to_string(), "hunter2hunter2", None, None)
        .await
        .unwrap();

    let result = app_data
        .auth_service
        .register("buyer@example.com".to_string(), "different-pass", None, None)
        .await;
    assert!(matches!(
        result,
        Err(InternalError::Profile(ProfileError::DuplicateEmail(_)))
    ));
}

#[tokio::test]
async fn wrong_password_reports_invalid_credentials_with_status() {
    let app_data = setup_app_data().await;

    app_data
        .auth_service
        .register("buyer@example.com".to_string(), "hunter2hunter2", None, None)
        .await
        .unwrap();

    let result = app_data
        .auth_service
        .login("buyer@example.com", "wrong", None)
        .await;

    match result {
        Err(LoginError::InvalidCredentials { status }) => {
            assert_eq!(status.failed_in_window, 1);
            assert!(!status.locked);
        }
        other => panic!("Expected InvalidCredentials, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn unknown_email_failures_are_still_recorded() {
    let app_data = setup_app_data().await;

    let result = app_data
        .auth_service
        .login("nobody@example.com", "whatever", None)
        .await;
    assert!(matches!(
        result,
        Err(LoginError::InvalidCredentials { .. })
    ));

    let attempts = app_data
        .lockout_service
        .recent_attempts("nobody@example.com", 5)
        .await
        .unwrap();
    assert_eq!(attempts.len(), 1);
    assert!(!attempts[0].success);
}

#[tokio::test]
async fn fifth_failure_locks_and_blocks_even_correct_password() {
    let app_data = setup_app_data().await;

    app_data
        .auth_service
        .register("buyer@example.com".to_string(), "hunter2hunter2", None, None)
        .await
        .unwrap();

    for attempt in 1..=5u64 {
        let result = app_data
            .auth_service
            .login("buyer@example.com", "wrong", None)
            .await;
        match result {
            Err(LoginError::InvalidCredentials { status }) => {
                assert!(attempt < 5, "fifth failure should lock");
                assert_eq!(status.failed_in_window, attempt);
            }
            Err(LoginError::Locked { status }) => {
                assert_eq!(attempt, 5);
                assert!(status.remaining_seconds > 0);
            }
            other => panic!("Unexpected result: {:?}", other.err()),
        }
    }

    // Correct password is blocked while locked, and no success row is logged
    let result = app_data
        .auth_service
        .login("buyer@example.com", "hunter2hunter2", None)
        .await;
    assert!(matches!(result, Err(LoginError::Locked { .. })));

    let attempts = app_data
        .lockout_service
        .recent_attempts("buyer@example.com", 10)
        .await
        .unwrap();
    assert_eq!(attempts.len(), 5);
    assert!(attempts.iter().all(|a| !a.success));
}

#[tokio::test]
async fn successful_login_is_recorded_with_user_id() {
    let app_data = setup_app_data().await;

    let profile = app_data
        .auth_service
        .register("buyer@example.com".to_string(), "hunter2hunter2", None, None)
        .await
        .unwrap();

    app_data
        .auth_service
        .login("buyer@example.com", "hunter2hunter2", Some("test-agent".to_string()))
        .await
        .unwrap();

    let attempts = app_data
        .lockout_service
        .recent_attempts("buyer@example.com", 5)
        .await
        .unwrap();
    assert_eq!(attempts.len(), 1);
    assert!(attempts[0].success);
    assert_eq!(attempts[0].user_id.as_deref(), Some(profile.id.as_str()));
    assert_eq!(attempts[0].user_agent.as_deref(), Some("test-agent"));
}

#[tokio::test]
async fn garbage_tokens_do_not_validate() {
    let app_data = setup_app_data().await;
    assert!(app_data.auth_service.validate_token("not-a-jwt").is_none());
}
