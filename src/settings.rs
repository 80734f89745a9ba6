use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::core::emoji::DEFAULT_EMOJI_BASE_URL;

const DEFAULT_FONTS_DIR: &str = "assets/fonts";

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub env: String, // file / server
    pub host: String,
    pub port: u16,
    pub prefix: Option<String>,
    pub fonts_dir: Option<PathBuf>,
    pub emoji_base_url: Option<String>,
    pub html_debug: Option<bool>,
}

impl Config {
    pub fn fonts_dir(&self) -> PathBuf {
        self.fonts_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FONTS_DIR))
    }

    pub fn emoji_base_url(&self) -> Result<String> {
        let raw = self
            .emoji_base_url
            .as_deref()
            .unwrap_or(DEFAULT_EMOJI_BASE_URL);
        let url = Url::parse(raw).with_context(|| format!("invalid emoji_base_url: {}", raw))?;
        Ok(url.to_string())
    }

    pub fn html_debug(&self) -> bool {
        self.html_debug.unwrap_or(false)
    }
}

pub fn get_config() -> Result<Config> {
    let env_var = env::var("env").unwrap_or("file".to_string());
    if env_var == "file" {
        info!("using .env file as environment variable");
        let _ = dotenvy::dotenv();
    } else {
        info!("using server environment as environment variable");
    }
    envy::from_env::<Config>().context("failed to read configuration from environment")
}
