//! HTTP-level integration tests for notifications.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{assert_error, body_json, create_test_user, get_auth, post_json_auth, token_for};
use compass_db::repositories::NotificationRepo;

/// Seed a few notifications for a user directly in the database.
async fn seed_notifications(pool: &PgPool, user_id: i64, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let id = NotificationRepo::create(
            pool,
            user_id,
            &format!("Notification {i}"),
            "Something happened",
            "system",
        )
        .await
        .unwrap();
        ids.push(id);
    }
    ids
}

// ---------------------------------------------------------------------------
// Listing and counting
// ---------------------------------------------------------------------------

/// Listing returns the user's notifications; unread_only filters read ones.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_and_filter_notifications(pool: PgPool) {
    let user = create_test_user(&pool, "notified", "free").await;
    let token = token_for(&user);
    let ids = seed_notifications(&pool, user.id, 3).await;

    // Mark one read.
    NotificationRepo::mark_read(&pool, ids[0], user.id).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/notifications", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let all = body_json(response).await["data"].clone();
    assert_eq!(all.as_array().unwrap().len(), 3);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/notifications?unread_only=true", &token).await;
    let unread = body_json(response).await["data"].clone();
    assert_eq!(unread.as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/notifications/unread-count", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["unread"], 2);
}

/// Pagination clamps limit and applies offset.
#[sqlx::test(migrations = "../db/migrations")]
async fn listing_respects_limit_and_offset(pool: PgPool) {
    let user = create_test_user(&pool, "paginator", "free").await;
    let token = token_for(&user);
    seed_notifications(&pool, user.id, 5).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/notifications?limit=2", &token).await;
    let page = body_json(response).await["data"].clone();
    assert_eq!(page.as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/notifications?limit=2&offset=4", &token).await;
    let page = body_json(response).await["data"].clone();
    assert_eq!(page.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Marking read
// ---------------------------------------------------------------------------

/// Marking all read clears the unread count.
#[sqlx::test(migrations = "../db/migrations")]
async fn mark_all_read_clears_unread(pool: PgPool) {
    let user = create_test_user(&pool, "cleaner", "free").await;
    let token = token_for(&user);
    seed_notifications(&pool, user.id, 4).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/notifications/read-all",
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["updated"], 4);

    let remaining = NotificationRepo::unread_count(&pool, user.id).await.unwrap();
    assert_eq!(remaining, 0);
}

/// A user cannot mark another user's notification as read.
#[sqlx::test(migrations = "../db/migrations")]
async fn mark_read_is_owner_scoped(pool: PgPool) {
    let owner = create_test_user(&pool, "notifowner", "free").await;
    let other = create_test_user(&pool, "snooper", "free").await;
    let other_token = token_for(&other);
    let ids = seed_notifications(&pool, owner.id, 1).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/notifications/{}/read", ids[0]),
        &other_token,
        serde_json::json!({}),
    )
    .await;

    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}
