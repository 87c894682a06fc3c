mod common;

use axum::http::{StatusCode, header};
use axum_test::multipart::{MultipartForm, Part};
use serde_json::Value;

use common::{create_media, spawn_app};

fn poster_form(bytes: &[u8]) -> MultipartForm {
    MultipartForm::new().add_part(
        "poster",
        Part::bytes(bytes.to_vec())
            .file_name("poster.png")
            .mime_type("image/png"),
    )
}

#[tokio::test]
async fn local_poster_upload_updates_record_and_serves_the_file() {
    let app = spawn_app().await;
    let media = create_media(&app.server, "Alien", "1979", "movie").await;
    let id = media["id"].as_str().unwrap().to_string();

    let response = app
        .server
        .put(&format!("/media/{id}/uploadPoster"))
        .multipart(poster_form(b"png bytes"))
        .await;
    response.assert_status_ok();

    let record = response.json::<Value>();
    let poster = record["Poster"].as_str().unwrap();
    assert_eq!(
        poster,
        format!("http://localhost:3000/public/img/{id}.png")
    );

    // The merge is persisted, not just echoed.
    let fetched = app.server.get(&format!("/media/{id}")).await;
    assert_eq!(fetched.json::<Value>()["Poster"], poster);

    // And the bytes resolve through the static tree.
    let served = app
        .server
        .get(&format!("/public/img/{id}.png"))
        .await;
    served.assert_status_ok();
    assert_eq!(served.as_bytes().as_ref(), &b"png bytes"[..]);
}

#[tokio::test]
async fn poster_upload_requires_the_poster_field() {
    let app = spawn_app().await;
    let media = create_media(&app.server, "Heat", "1995", "movie").await;
    let id = media["id"].as_str().unwrap();

    let form = MultipartForm::new().add_part(
        "attachment",
        Part::bytes(b"whatever".to_vec()).file_name("x.png"),
    );
    let response = app
        .server
        .put(&format!("/media/{id}/uploadPoster"))
        .multipart(form)
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn poster_upload_for_unknown_media_is_a_miss() {
    let app = spawn_app().await;
    let response = app
        .server
        .put("/media/0d4907eb-43bc-4e18-a7a6-2e02f8a66f87/uploadPoster")
        .multipart(poster_form(b"png bytes"))
        .await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn remote_poster_route_reports_missing_provider() {
    let app = spawn_app().await;
    let media = create_media(&app.server, "Dark", "2017", "series").await;
    let id = media["id"].as_str().unwrap();

    let response = app
        .server
        .put(&format!("/media/{id}/poster"))
        .multipart(poster_form(b"png bytes"))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn pdf_download_streams_an_attachment() {
    let app = spawn_app().await;
    let media =
        create_media(&app.server, "The Matrix", "1999", "movie").await;
    let id = media["id"].as_str().unwrap();

    let response =
        app.server.get(&format!("/media/{id}/PDFDownload")).await;
    response.assert_status_ok();

    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/pdf")
    );
    assert_eq!(
        headers
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"media.pdf\"")
    );
    assert!(response.as_bytes().starts_with(b"%PDF"));
}

#[tokio::test]
async fn pdf_download_for_unknown_media_is_a_miss() {
    let app = spawn_app().await;
    let response = app
        .server
        .get("/media/7d55a4dc-5f1c-40cc-84e6-bd3d71a5dcc1/PDFDownload")
        .await;
    response.assert_status_not_found();
}
