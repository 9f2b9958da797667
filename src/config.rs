// src/config.rs

pub mod file;

use self::file::{load_or_create_external_config, resolve_base_url};
use crate::{
    cli::Cli,
    constants,
    error::{AppError, AppResult},
};
use log::info;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NetworkConfig {
    pub base_url: Option<String>,
    pub search_path: Option<String>,
    pub popular_path: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
}

/// リセット後に一覧をどう扱うか
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResetBehavior {
    /// 表示中の一覧を消す
    #[default]
    Clear,
    /// 人気の授業を読み込み直す
    ReloadPopular,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub reset_behavior: ResetBehavior,
}

impl ExternalConfig {
    pub fn default_app_config() -> Self {
        Self {
            network: NetworkConfig {
                base_url: Some(constants::api::DEFAULT_BASE_URL.into()),
                search_path: Some(constants::api::SEARCH_PATH.into()),
                popular_path: Some(constants::api::POPULAR_PATH.into()),
                connect_timeout_secs: Some(10),
                timeout_secs: Some(30),
                // 自動再送はしない。必要なら設定ファイルで有効にする
                max_retries: Some(0),
            },
            reset_behavior: ResetBehavior::Clear,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    pub search_path: String,
    pub popular_path: String,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_retries: u32,
    pub reset_behavior: ResetBehavior,
}

impl AppConfig {
    pub fn new(args: &Cli) -> AppResult<Self> {
        let external_config = load_or_create_external_config()?;
        let (base_url, source) =
            resolve_base_url(args.base_url.as_deref(), external_config.network.base_url.as_deref());
        info!("API のベース URL を {} から読み込みました: {}", source, base_url);
        Self::from_external(external_config, &base_url)
    }

    pub fn from_external(external_config: ExternalConfig, base_url: &str) -> AppResult<Self> {
        let network = external_config.network;
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            search_path: network
                .search_path
                .unwrap_or_else(|| constants::api::SEARCH_PATH.into()),
            popular_path: network
                .popular_path
                .unwrap_or_else(|| constants::api::POPULAR_PATH.into()),
            user_agent: constants::USER_AGENT.into(),
            connect_timeout: Duration::from_secs(network.connect_timeout_secs.unwrap_or(10)),
            timeout: Duration::from_secs(network.timeout_secs.unwrap_or(30)),
            max_retries: network.max_retries.unwrap_or(0),
            reset_behavior: external_config.reset_behavior,
        })
    }

    /// エンドポイントの完全な URL。先頭の '/' はベース URL のパスを消さないよう取り除く
    pub fn endpoint(&self, path: &str) -> AppResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

/// `Url::join` が最後のセグメントを置き換えないよう、末尾を '/' で揃える
fn normalize_base_url(raw: &str) -> AppResult<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("API のベース URL が空です".into()));
    }
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let url = Url::parse(&with_slash)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Config(format!(
            "サポートされていないスキームです: {}",
            url.scheme()
        )));
    }
    Ok(url)
}

#[cfg(feature = "testing")]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://127.0.0.1:8000/api/").expect("固定 URL"),
            search_path: constants::api::SEARCH_PATH.into(),
            popular_path: constants::api::POPULAR_PATH.into(),
            user_agent: "test-agent/1.0".to_string(),
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(15),
            max_retries: 0,
            reset_behavior: ResetBehavior::Clear,
        }
    }
}
