use api::{App, AppState};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use messenger_core::create_repositories;
use serde_json::{Value, json};
use tower::util::ServiceExt;

async fn test_router() -> Router {
    let repositories = create_repositories("sqlite::memory:")
        .await
        .expect("in-memory database should open");
    App::router(AppState::new(repositories.into_service()))
}

async fn post(router: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(router: &Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn messenger_rpc_flow() {
    let router = test_router().await;

    // authorize two users, one of them twice
    let (status, _) = post(
        &router,
        "/messenger/authorize-user",
        json!({"name": "alice", "email": "alice@example.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = post(
        &router,
        "/messenger/authorize-user",
        json!({"name": "alice", "email": "alice@example.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, users) = get(&router, "/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users, json!([{"name": "alice"}, {"name": "alice"}]));

    // add a message to group g1
    let (status, body) = post(
        &router,
        "/messenger/add-message",
        json!({"sender": "a", "target": "g1", "text": "hi", "is_personal": false}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let message_id = body["message_id"].as_i64().expect("message_id assigned");
    assert_eq!(message_id, 1);

    // history shows it
    let (status, history) = post(&router, "/messenger/history", json!({"group_name": "g1"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history, json!([{"id": 1, "text": "hi"}]));

    // mark read, twice (idempotent)
    for _ in 0..2 {
        let (status, _) = post(
            &router,
            "/messenger/read-message",
            json!({"message_id": message_id}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    // edit text; history reflects the new text
    let (status, _) = post(
        &router,
        "/messenger/change-text-message",
        json!({"message_id": message_id, "text": "hi there"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, history) = post(&router, "/messenger/history", json!({"group_name": "g1"})).await;
    assert_eq!(history, json!([{"id": 1, "text": "hi there"}]));

    // soft delete; history is empty afterwards
    let (status, _) = post(
        &router,
        "/messenger/delete-message",
        json!({"message_id": message_id}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, history) = post(&router, "/messenger/history", json!({"group_name": "g1"})).await;
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn unknown_message_id_maps_to_404() {
    let router = test_router().await;

    for (path, body) in [
        ("/messenger/read-message", json!({"message_id": 42})),
        (
            "/messenger/change-text-message",
            json!({"message_id": 42, "text": "x"}),
        ),
        ("/messenger/delete-message", json!({"message_id": 42})),
    ] {
        let (status, body) = post(&router, path, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "resource not found");
    }
}

#[tokio::test]
async fn history_of_unknown_group_is_empty() {
    let router = test_router().await;

    let (status, history) = post(
        &router,
        "/messenger/history",
        json!({"group_name": "nobody-here"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn health_endpoint_responds() {
    let router = test_router().await;

    let (status, _) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
}
