// src/client.rs

use crate::{
    config::AppConfig,
    error::*,
    models::{Course, SearchParams},
};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Response;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use std::sync::Arc;

/// 検索コントローラが依存する外部の検索処理
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, params: &SearchParams) -> AppResult<Vec<Course>>;
    async fn popular(&self) -> AppResult<Vec<Course>>;
}

#[derive(Clone)]
pub struct SyllabusApi {
    client: ClientWithMiddleware,
    config: Arc<AppConfig>,
}

impl SyllabusApi {
    pub fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()?;
        let mut builder = ClientBuilder::new(inner);
        if config.max_retries > 0 {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
            builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }
        Ok(Self {
            client: builder.build(),
            config,
        })
    }

    fn check_status(res: Response) -> AppResult<Response> {
        let status = res.status();
        if !status.is_success() {
            return Err(AppError::Status {
                status,
                url: res.url().to_string(),
            });
        }
        Ok(res)
    }

    async fn decode_courses(res: Response) -> AppResult<Vec<Course>> {
        let url = res.url().to_string();
        let body = res.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| {
            error!("'{}' の応答を解析できません: {}", url, source);
            AppError::ApiParseFailed { url, source }
        })
    }
}

#[async_trait]
impl SearchBackend for SyllabusApi {
    async fn search(&self, params: &SearchParams) -> AppResult<Vec<Course>> {
        let url = self.config.endpoint(&self.config.search_path)?;
        debug!("POST {} {:?}", url, params);
        let res = self.client.post(url).json(params).send().await?;
        let courses = Self::decode_courses(Self::check_status(res)?).await?;
        debug!("検索結果 {} 件", courses.len());
        Ok(courses)
    }

    async fn popular(&self) -> AppResult<Vec<Course>> {
        let url = self.config.endpoint(&self.config.popular_path)?;
        debug!("GET {}", url);
        let res = self.client.get(url).send().await?;
        Self::decode_courses(Self::check_status(res)?).await
    }
}
