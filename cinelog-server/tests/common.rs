use axum_test::TestServer;
use serde_json::{Value, json};
use tempfile::TempDir;
use url::Url;

use cinelog_server::{AppState, Config, create_app};

pub const ALLOWED_ORIGIN: &str = "http://frontend.test";

// Used by test modules, but not in every one of them
#[allow(unused)]
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    _tempdir: TempDir,
}

#[allow(unused)]
pub async fn spawn_app() -> TestApp {
    let tempdir = TempDir::new().unwrap();
    let config = Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        data_file: tempdir.path().join("media.json"),
        image_dir: tempdir.path().join("img"),
        public_base_url: Url::parse("http://localhost:3000").unwrap(),
        cors_allowed_origins: vec![ALLOWED_ORIGIN.to_string()],
        dev_mode: false,
        poster_upload_url: None,
        poster_public_url: None,
    };
    config.ensure_storage().unwrap();

    let state = AppState::from_config(config);
    state.catalog.store().ensure_exists().await.unwrap();

    let server = TestServer::new(create_app(state.clone())).unwrap();
    TestApp {
        server,
        state,
        _tempdir: tempdir,
    }
}

#[allow(unused)]
pub async fn create_media(
    server: &TestServer,
    title: &str,
    year: &str,
    media_type: &str,
) -> Value {
    let response = server
        .post("/media")
        .json(&json!({
            "Title": title,
            "Year": year,
            "Type": media_type,
        }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}
