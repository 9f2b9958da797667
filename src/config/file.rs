// src/config/file.rs

use crate::{
    config::ExternalConfig,
    constants,
    error::{AppError, AppResult},
};
use anyhow::{Context, anyhow};
use log::{debug, info};
use std::{fs, path::PathBuf};

pub(crate) fn get_config_dir() -> AppResult<PathBuf> {
    let dir = dirs::home_dir()
        .ok_or_else(|| AppError::Other(anyhow!("ユーザーのホームディレクトリを取得できません")))?
        .join(constants::CONFIG_DIR_NAME);
    Ok(dir)
}

pub(super) fn get_config_path() -> AppResult<PathBuf> {
    Ok(get_config_dir()?.join(constants::CONFIG_FILE_NAME))
}

pub(crate) fn load_or_create_external_config() -> AppResult<ExternalConfig> {
    let config_path = get_config_path()?;
    if config_path.is_file() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("設定ファイル '{}' の読み込みに失敗しました", config_path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("設定ファイル '{}' の解析に失敗しました", config_path.display()))
            .map_err(AppError::from)
    } else {
        info!("設定ファイル {:?} が存在しないため、既定の設定で作成します。", config_path);
        let config = ExternalConfig::default_app_config();

        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir)?;
        }

        let json_content = serde_json::to_string_pretty(&config)?;
        fs::write(&config_path, json_content)?;

        Ok(config)
    }
}

/// ベース URL を決める。優先順位はコマンドライン引数、環境変数、設定ファイル、既定値
pub fn resolve_base_url(cli_value: Option<&str>, file_value: Option<&str>) -> (String, String) {
    let env_value = std::env::var(constants::ENV_API_BASE).ok();
    pick_base_url(cli_value, env_value.as_deref(), file_value)
}

fn pick_base_url(
    cli_value: Option<&str>,
    env_value: Option<&str>,
    file_value: Option<&str>,
) -> (String, String) {
    if let Some(url) = cli_value && !url.is_empty() {
        debug!("コマンドライン引数のベース URL を使用します");
        return (url.to_string(), "コマンドライン引数".to_string());
    }
    if let Some(url) = env_value && !url.is_empty() {
        debug!("環境変数 {} のベース URL を使用します", constants::ENV_API_BASE);
        return (url.to_string(), format!("環境変数 ({})", constants::ENV_API_BASE));
    }
    if let Some(url) = file_value && !url.is_empty() {
        debug!("設定ファイルのベース URL を使用します");
        return (url.to_string(), "設定ファイル".to_string());
    }
    (constants::api::DEFAULT_BASE_URL.to_string(), "既定値".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_precedence() {
        let cli = Some("http://cli/api");
        let env = Some("http://env/api");
        let file = Some("http://file/api");

        assert_eq!(pick_base_url(cli, env, file).0, "http://cli/api");
        assert_eq!(pick_base_url(None, env, file).0, "http://env/api");
        assert_eq!(pick_base_url(Some(""), None, file).0, "http://file/api");
        assert_eq!(
            pick_base_url(None, Some(""), None).0,
            constants::api::DEFAULT_BASE_URL
        );
    }
}
