use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::config::LockoutPolicy;
use crate::services::LockoutService;
use crate::stores::LoginAttemptStore;
use crate::test::utils::setup_test_db;
use crate::types::db::login_attempt;

const EMAIL: &str = "x@y.com";

fn service(db: &DatabaseConnection, policy: LockoutPolicy) -> LockoutService {
    LockoutService::new(Arc::new(LoginAttemptStore::new(db.clone())), policy)
}

/// Insert an attempt row directly so tests can control its timestamp
async fn insert_attempt(db: &DatabaseConnection, email: &str, success: bool, age_secs: i64) {
    let attempt = login_attempt::ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        email: Set(email.to_owned()),
        success: Set(success),
        failure_reason: Set(if success {
            None
        } else {
            Some("invalid_credentials".to_owned())
        }),
        user_id: Set(None),
        user_agent: Set(None),
        created_at: Set(Utc::now().timestamp() - age_secs),
    };
    attempt.insert(db).await.unwrap();
}

#[tokio::test]
async fn below_threshold_is_not_locked() {
    let db = setup_test_db().await;
    let lockout = service(&db, LockoutPolicy::default());

    for _ in 0..4 {
        lockout
            .record_attempt(EMAIL, false, Some("invalid_credentials".to_owned()), None, None)
            .await
            .unwrap();
    }

    let status = lockout.status(EMAIL).await.unwrap();
    assert!(!status.locked);
    assert_eq!(status.remaining_seconds, 0);
    assert_eq!(status.failed_in_window, 4);
}

#[tokio::test]
async fn reaching_threshold_locks_with_positive_remaining() {
    let db = setup_test_db().await;
    let lockout = service(&db, LockoutPolicy::default());

    let mut last_status = None;
    for _ in 0..5 {
        let status = lockout
            .record_attempt(EMAIL, false, Some("invalid_credentials".to_owned()), None, None)
            .await
            .unwrap();
        last_status = Some(status);
    }

    // The fifth failure locks in the same recomputation
    let status = last_status.unwrap();
    assert!(status.locked);
    assert!(status.remaining_seconds > 0);

    assert!(lockout.is_locked(EMAIL).await.unwrap());
    assert!(lockout.remaining_seconds(EMAIL).await.unwrap() > 0);
}

#[tokio::test]
async fn successful_attempts_do_not_count_toward_lockout() {
    let db = setup_test_db().await;
    let lockout = service(&db, LockoutPolicy::default());

    for _ in 0..10 {
        lockout
            .record_attempt(EMAIL, true, None, Some("user-1".to_owned()), None)
            .await
            .unwrap();
    }

    let status = lockout.status(EMAIL).await.unwrap();
    assert!(!status.locked);
    assert_eq!(status.failed_in_window, 0);
}

#[tokio::test]
async fn failures_older_than_window_and_cooldown_are_ignored() {
    let db = setup_test_db().await;
    let policy = LockoutPolicy::default();
    let lockout = service(&db, policy);

    let outside = policy.window.max(policy.cooldown).as_secs() as i64 + 60;
    for _ in 0..5 {
        insert_attempt(&db, EMAIL, false, outside).await;
    }

    let status = lockout.status(EMAIL).await.unwrap();
    assert!(!status.locked);
    assert_eq!(status.failed_in_window, 0);
}

#[tokio::test]
async fn lock_holds_for_the_full_cooldown_after_the_window_rolls_past() {
    let db = setup_test_db().await;
    // Cooldown much longer than the window
    let policy = LockoutPolicy {
        max_failures: 2,
        window: Duration::from_secs(60),
        cooldown: Duration::from_secs(600),
    };
    let lockout = service(&db, policy);

    // Two failures in quick succession, both now older than the window but
    // well inside the cooldown measured from the newest one
    insert_attempt(&db, EMAIL, false, 125).await;
    insert_attempt(&db, EMAIL, false, 120).await;

    let status = lockout.status(EMAIL).await.unwrap();
    assert!(status.locked);
    // 600s cooldown minus ~120s since the newest failure
    assert!(status.remaining_seconds <= 480);
    assert!(status.remaining_seconds >= 475);
}

#[tokio::test]
async fn failures_spread_wider_than_the_window_never_lock() {
    let db = setup_test_db().await;
    let policy = LockoutPolicy {
        max_failures: 2,
        window: Duration::from_secs(60),
        cooldown: Duration::from_secs(600),
    };
    let lockout = service(&db, policy);

    // 200s apart: no single window ending at a failure holds both
    insert_attempt(&db, EMAIL, false, 300).await;
    insert_attempt(&db, EMAIL, false, 100).await;

    let status = lockout.status(EMAIL).await.unwrap();
    assert!(!status.locked);
    assert_eq!(status.remaining_seconds, 0);
}

#[tokio::test]
async fn lock_clears_once_cooldown_elapses() {
    let db = setup_test_db().await;
    // Wide window so aged failures still count; short cooldown already elapsed
    let policy = LockoutPolicy {
        max_failures: 5,
        window: Duration::from_secs(3600),
        cooldown: Duration::from_secs(120),
    };
    let lockout = service(&db, policy);

    for _ in 0..5 {
        insert_attempt(&db, EMAIL, false, 300).await;
    }

    let status = lockout.status(EMAIL).await.unwrap();
    assert!(!status.locked);
    assert_eq!(status.remaining_seconds, 0);
    assert_eq!(status.failed_in_window, 5);
}

#[tokio::test]
async fn remaining_seconds_derive_from_most_recent_failure() {
    let db = setup_test_db().await;
    let policy = LockoutPolicy {
        max_failures: 2,
        window: Duration::from_secs(3600),
        cooldown: Duration::from_secs(600),
    };
    let lockout = service(&db, policy);

    insert_attempt(&db, EMAIL, false, 500).await;
    insert_attempt(&db, EMAIL, false, 100).await;

    let status = lockout.status(EMAIL).await.unwrap();
    assert!(status.locked);
    // 600s cooldown minus ~100s since the newest failure
    assert!(status.remaining_seconds <= 500);
    assert!(status.remaining_seconds >= 495);
}

#[tokio::test]
async fn lockout_state_is_per_email() {
    let db = setup_test_db().await;
    let lockout = service(&db, LockoutPolicy::default());

    for _ in 0..5 {
        lockout
            .record_attempt(EMAIL, false, Some("invalid_credentials".to_owned()), None, None)
            .await
            .unwrap();
    }

    assert!(lockout.is_locked(EMAIL).await.unwrap());
    assert!(!lockout.is_locked("other@y.com").await.unwrap());
}

#[tokio::test]
async fn recent_attempts_returns_newest_first() {
    let db = setup_test_db().await;
    let lockout = service(&db, LockoutPolicy::default());

    insert_attempt(&db, EMAIL, false, 30).await;
    insert_attempt(&db, EMAIL, true, 20).await;
    insert_attempt(&db, EMAIL, false, 10).await;

    let attempts = lockout.recent_attempts(EMAIL, 2).await.unwrap();
    assert_eq!(attempts.len(), 2);
    assert!(!attempts[0].success);
    assert!(attempts[1].success);
    assert!(attempts[0].created_at >= attempts[1].created_at);
}
