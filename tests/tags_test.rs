mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn create_list_get_tag() {
    let app = TestApp::new().await;
    let token = app.register("a@x.com").await;

    let tag = app.create_tag(&token, "  work  ").await;
    assert_eq!(tag["name"], "work");

    let (status, body) = app.get("/api/tags", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tags"].as_array().unwrap().len(), 1);

    let (status, body) = app
        .get(&format!("/api/tags/{}", tag["id"].as_str().unwrap()), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tag"]["id"], tag["id"]);
}

#[tokio::test]
async fn second_tag_with_same_trimmed_name_conflicts() {
    let app = TestApp::new().await;
    let token = app.register("a@x.com").await;
    app.create_tag(&token, "work").await;

    let (status, body) = app
        .post("/api/tags", Some(&token), json!({ "name": " work " }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn blank_tag_name_is_rejected() {
    let app = TestApp::new().await;
    let token = app.register("a@x.com").await;

    for body in [json!({ "name": "   " }), json!({})] {
        let (status, _) = app.post("/api/tags", Some(&token), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn tags_are_shared_between_users() {
    let app = TestApp::new().await;
    let alice = app.register("alice@x.com").await;
    let bob = app.register("bob@x.com").await;

    let tag = app.create_tag(&alice, "shared").await;
    let id = tag["id"].as_str().unwrap();

    let (status, body) = app
        .send(
            Method::PUT,
            &format!("/api/tags/{id}"),
            Some(&bob),
            Some(json!({ "name": "renamed" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tag"]["name"], "renamed");
}

#[tokio::test]
async fn update_accepts_put_and_post() {
    let app = TestApp::new().await;
    let token = app.register("a@x.com").await;
    let tag = app.create_tag(&token, "one").await;
    let uri = format!("/api/tags/{}", tag["id"].as_str().unwrap());

    let (status, body) = app
        .send(Method::PUT, &uri, Some(&token), Some(json!({ "name": "two" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tag"]["name"], "two");

    let (status, body) = app.post(&uri, Some(&token), json!({ "name": "three" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tag"]["name"], "three");
}

#[tokio::test]
async fn update_errors() {
    let app = TestApp::new().await;
    let token = app.register("a@x.com").await;
    app.create_tag(&token, "taken").await;
    let tag = app.create_tag(&token, "mine").await;
    let uri = format!("/api/tags/{}", tag["id"].as_str().unwrap());

    let (status, _) = app.post(&uri, Some(&token), json!({ "name": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post(&uri, Some(&token), json!({ "name": "taken" })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .post("/api/tags/missing", Some(&token), json!({ "name": "x" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 자기 자신의 이름으로 바꾸는 것은 중복이 아닙니다.
    let (status, _) = app.post(&uri, Some(&token), json!({ "name": "mine" })).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_returns_tag_then_404() {
    let app = TestApp::new().await;
    let token = app.register("a@x.com").await;
    let tag = app.create_tag(&token, "temp").await;
    let uri = format!("/api/tags/{}", tag["id"].as_str().unwrap());

    let (status, body) = app.delete(&uri, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tag"]["name"], "temp");

    let (status, _) = app.delete(&uri, &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get(&uri, &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_tag_detaches_it_from_tasks() {
    let app = TestApp::new().await;
    let token = app.register("a@x.com").await;
    let tag = app.create_tag(&token, "soon-gone").await;
    let tag_id = tag["id"].as_str().unwrap();

    let task = app
        .create_task(&token, json!({ "title": "tagged", "tag": tag_id }))
        .await;
    assert_eq!(task["tag"], tag_id);

    let (status, _) = app.delete(&format!("/api/tags/{tag_id}"), &token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .get(&format!("/api/tasks/{}", task["id"].as_str().unwrap()), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["task"]["tag"].is_null());

    let (_, body) = app.get("/api/tasks", &token).await;
    assert!(body["tasks"][0]["tag"].is_null());
}
