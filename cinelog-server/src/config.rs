use std::{env, fs, path::PathBuf};

use anyhow::Context;
use url::Url;

/// Server configuration loaded from environment variables (with a
/// `.env` file honoured when present).
#[derive(Debug, Clone)]
pub struct Config {
    // Server settings
    pub server_host: String,
    pub server_port: u16,

    // Storage settings
    pub data_file: PathBuf,
    pub image_dir: PathBuf,

    /// Base address baked into locally stored poster URLs.
    pub public_base_url: Url,

    // CORS settings
    pub cors_allowed_origins: Vec<String>,

    // Development settings
    pub dev_mode: bool,

    // Remote poster storage (optional; the /poster route needs both)
    pub poster_upload_url: Option<Url>,
    pub poster_public_url: Option<Url>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let public_base_url = Url::parse(&public_base_url)
            .context("PUBLIC_BASE_URL is not a valid URL")?;

        Ok(Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            data_file: env::var("DATA_FILE")
                .unwrap_or_else(|_| "./data/media.json".to_string())
                .into(),
            image_dir: env::var("IMAGE_DIR")
                .unwrap_or_else(|_| "./public/img".to_string())
                .into(),

            public_base_url,

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| {
                    "http://localhost:3000,http://localhost:5173"
                        .to_string()
                })
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),

            dev_mode: env::var("DEV_MODE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),

            poster_upload_url: parse_optional_url("POSTER_UPLOAD_URL")?,
            poster_public_url: parse_optional_url("POSTER_PUBLIC_URL")?,
        })
    }

    /// Create the image directory and the data file's parent so the
    /// first write cannot fail on a missing path.
    pub fn ensure_storage(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.image_dir).with_context(|| {
            format!(
                "failed to create image directory {}",
                self.image_dir.display()
            )
        })?;
        if let Some(parent) = self.data_file.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!(
                    "failed to create data directory {}",
                    parent.display()
                )
            })?;
        }
        Ok(())
    }
}

fn parse_optional_url(var: &str) -> anyhow::Result<Option<Url>> {
    match env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => {
            let url = Url::parse(raw.trim())
                .with_context(|| format!("{var} is not a valid URL"))?;
            Ok(Some(url))
        }
        _ => Ok(None),
    }
}
