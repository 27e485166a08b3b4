mod common;

use reqwest::StatusCode;

// Kept as the only test in this binary: a reset wipes every row, so it must not overlap other tests.
#[tokio::test]
async fn test_reset_on_boot_clears_store() {
    let app = common::TestApp::spawn().await;
    let user_id = app.create_user_id(&common::unique_name("doomed")).await;
    let resp = app.log_exercise(&user_id, &[("description", "run"), ("duration", "30")]).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let untouched = common::TestApp::spawn().await;
    assert_eq!(untouched.get_logs(&user_id, &[]).await.status(), StatusCode::OK);

    let mut config = common::get_test_config();
    config.reset_on_boot = true;
    let reset = common::TestApp::spawn_with_config(config).await;

    assert_eq!(reset.get_logs(&user_id, &[]).await.status(), StatusCode::NOT_FOUND);

    let users: Vec<serde_json::Value> =
        reset.client.get(format!("{}/api/users", reset.server_url)).send().await.unwrap().json().await.unwrap();
    assert!(users.is_empty());
}
