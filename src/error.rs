// src/error.rs

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ネットワーク要求に失敗しました: {0}")]
    Network(#[from] reqwest::Error),
    #[error("ネットワークミドルウェアのエラー: {0}")]
    NetworkMiddleware(#[from] reqwest_middleware::Error),
    #[error("サーバーがエラーを返しました ({status}): {url}")]
    Status { status: StatusCode, url: String },
    #[error("'{url}' からの API 応答を解析できません: {source}")]
    ApiParseFailed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O エラー: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 解析エラー: {0}")]
    Json(#[from] serde_json::Error),
    #[error("URL 解析エラー: {0}")]
    Url(#[from] url::ParseError),
    #[error("設定エラー: {0}")]
    Config(String),
    #[error("{0}")] // 内部メッセージのみを表示する
    UserInputError(String),
    #[error("不明なエラー: {0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// 検索一回分の失敗かどうか。再送信で回復できる種類のエラー
    pub fn is_search_failure(&self) -> bool {
        matches!(
            self,
            AppError::Network(_)
                | AppError::NetworkMiddleware(_)
                | AppError::Status { .. }
                | AppError::ApiParseFailed { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
