mod common;

use serde_json::{Value, json};

use common::{create_media, spawn_app};

#[tokio::test]
async fn review_lifecycle() {
    let app = spawn_app().await;
    let media = create_media(&app.server, "Dark", "2017", "series").await;
    let id = media["id"].as_str().unwrap().to_string();

    // No reviews yet: empty array, not an error.
    let empty = app.server.get(&format!("/media/{id}/reviews")).await;
    empty.assert_status_ok();
    assert!(empty.json::<Value>().as_array().unwrap().is_empty());

    let first = app
        .server
        .post(&format!("/media/{id}/reviews"))
        .json(&json!({"comment": "gripping", "rate": 5}))
        .await;
    first.assert_status_ok();

    let second = app
        .server
        .post(&format!("/media/{id}/reviews"))
        .json(&json!({"comment": "confusing", "rate": 3}))
        .await;
    second.assert_status_ok();

    // The updated record comes back with both reviews in insertion
    // order and the back-reference bound to this media id.
    let record = second.json::<Value>();
    let reviews = record["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    let last = &reviews[1];
    assert_eq!(last["comment"], "confusing");
    assert_eq!(last["rate"], 3);
    assert_eq!(last["elementId"], id.as_str());
    assert!(last["createdAt"].as_str().is_some());
    assert_ne!(reviews[0]["_id"], reviews[1]["_id"]);

    // Delete the first review; the second survives.
    let target = reviews[0]["_id"].as_str().unwrap();
    let after_delete = app
        .server
        .delete(&format!("/media/{id}/reviews/{target}"))
        .await;
    after_delete.assert_status_ok();
    let remaining = after_delete.json::<Value>();
    let remaining = remaining["reviews"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["comment"], "confusing");
}

#[tokio::test]
async fn review_validation_reports_both_fields() {
    let app = spawn_app().await;
    let media = create_media(&app.server, "Heat", "1995", "movie").await;
    let id = media["id"].as_str().unwrap();

    let response = app
        .server
        .post(&format!("/media/{id}/reviews"))
        .json(&json!({"rate": "five"}))
        .await;
    response.assert_status_bad_request();

    let body = response.json::<Value>();
    let fields: Vec<&str> = body["error"]["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["comment", "rate"]);
}

#[tokio::test]
async fn reviews_of_unknown_media_name_the_requested_id() {
    let app = spawn_app().await;
    let missing = "7d55a4dc-5f1c-40cc-84e6-bd3d71a5dcc1";

    let response =
        app.server.get(&format!("/media/{missing}/reviews")).await;
    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains(missing)
    );
}

#[tokio::test]
async fn deleting_unknown_review_id_is_a_no_op() {
    let app = spawn_app().await;
    let media = create_media(&app.server, "Alien", "1979", "movie").await;
    let id = media["id"].as_str().unwrap();

    app.server
        .post(&format!("/media/{id}/reviews"))
        .json(&json!({"comment": "keep me", "rate": 4}))
        .await
        .assert_status_ok();

    let response = app
        .server
        .delete(&format!(
            "/media/{id}/reviews/11111111-2222-3333-4444-555555555555"
        ))
        .await;
    response.assert_status_ok();
    let record = response.json::<Value>();
    assert_eq!(record["reviews"].as_array().unwrap().len(), 1);
}
