mod common;

use exercise_tracker::domain::day::{format_day, today};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_log_exercise_with_date() {
    let app = common::TestApp::spawn().await;
    let username = common::unique_name("runner");
    let user_id = app.create_user_id(&username).await;

    let resp =
        app.log_exercise(&user_id, &[("description", "run"), ("duration", "30"), ("date", "2023-01-15")]).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["username"], username.as_str());
    assert_eq!(body["description"], "run");
    assert_eq!(body["duration"], 30);
    assert!(body["duration"].is_number());
    assert_eq!(body["date"], "Sun Jan 15 2023");
    assert_eq!(body["_id"], user_id.as_str());
}

#[tokio::test]
async fn test_log_exercise_defaults_to_today() {
    let app = common::TestApp::spawn().await;
    let user_id = app.create_user_id(&common::unique_name("today")).await;

    let before = format_day(today());
    let resp = app.log_exercise(&user_id, &[("description", "walk"), ("duration", "15")]).await;
    let after = format_day(today());
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    let date = body["date"].as_str().unwrap();
    assert!(date == before || date == after, "Unexpected default date {date}");
}

#[tokio::test]
async fn test_log_exercise_empty_date_defaults_to_today() {
    let app = common::TestApp::spawn().await;
    let user_id = app.create_user_id(&common::unique_name("blank_date")).await;

    let before = format_day(today());
    let resp = app.log_exercise(&user_id, &[("description", "walk"), ("duration", "15"), ("date", "")]).await;
    let after = format_day(today());
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    let date = body["date"].as_str().unwrap();
    assert!(date == before || date == after);
}

#[tokio::test]
async fn test_log_exercise_rejects_invalid_input() {
    let app = common::TestApp::spawn().await;
    let user_id = app.create_user_id(&common::unique_name("invalid")).await;

    let cases: [(&[(&str, &str)], &str); 4] = [
        (&[("description", "run"), ("duration", "thirty")], "duration must be an integer: thirty"),
        (&[("duration", "30")], "description is required"),
        (&[("description", "run")], "duration is required"),
        (&[("description", "run"), ("duration", "30"), ("date", "someday")], "Invalid date: someday"),
    ];

    for (form, message) in cases {
        let resp = app.log_exercise(&user_id, form).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], message);
    }

    // Nothing was stored by the rejected requests
    let log: Value = app.get_logs(&user_id, &[]).await.json().await.unwrap();
    assert_eq!(log["count"], 0);
}

#[tokio::test]
async fn test_log_exercise_for_unknown_user() {
    let app = common::TestApp::spawn().await;
    let missing = uuid::Uuid::new_v4().to_string();

    let resp = app.log_exercise(&missing, &[("description", "run"), ("duration", "30")]).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_log_exercise_with_malformed_user_id() {
    let app = common::TestApp::spawn().await;

    let resp = app.log_exercise("not-a-uuid", &[("description", "run"), ("duration", "30")]).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_log_exercise_rejects_duplicated_field() {
    let app = common::TestApp::spawn().await;
    let user_id = app.create_user_id(&common::unique_name("dupfield")).await;

    let resp = app.log_exercise(&user_id, &[("description", "a"), ("description", "b"), ("duration", "30")]).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string(), "Rejection must use the JSON error shape: {body}");

    let log: Value = app.get_logs(&user_id, &[]).await.json().await.unwrap();
    assert_eq!(log["count"], 0);
}
