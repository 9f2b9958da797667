// src/session.rs

//! 検索コントローラと表示中の一覧をまとめる親側の状態。
//! 検索に失敗した場合、表示中の一覧はそのまま残す。

use crate::{
    client::SearchBackend,
    config::ResetBehavior,
    controller::{ResetAction, SearchController},
    error::{AppError, AppResult},
    models::{CourseListing, ListingKind, SearchOutcome},
};
use log::info;
use std::sync::Arc;

pub struct SearchSession {
    controller: SearchController,
    listing: CourseListing,
}

impl SearchSession {
    pub fn new(backend: Arc<dyn SearchBackend>, reset_behavior: ResetBehavior) -> Self {
        Self {
            controller: SearchController::new(backend, reset_behavior),
            listing: CourseListing::default(),
        }
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SearchController {
        &mut self.controller
    }

    pub fn listing(&self) -> &CourseListing {
        &self.listing
    }

    /// 検索を実行し、成功したときだけ一覧を差し替える
    pub async fn submit(&mut self) -> AppResult<()> {
        self.submit_with(|_| {}).await
    }

    /// `submit` と同じ。送信中フラグが立った直後に、その時点のボタン表示名で `on_start` を呼ぶ
    pub async fn submit_with(&mut self, on_start: impl FnOnce(&str)) -> AppResult<()> {
        let outcome = match self.controller.start_search() {
            Some(pending) => {
                on_start(self.controller.submit_label());
                pending.finish().await
            }
            None => SearchOutcome::InFlight,
        };
        match outcome {
            SearchOutcome::Loaded(courses) => {
                self.listing = CourseListing::new(ListingKind::Search, courses);
                Ok(())
            }
            SearchOutcome::Failed(e) => Err(e),
            SearchOutcome::InFlight => Err(AppError::UserInputError(
                "前の検索がまだ完了していません。".into(),
            )),
        }
    }

    pub async fn load_popular(&mut self) -> AppResult<()> {
        let courses = self.controller.backend().popular().await?;
        info!("人気の授業 {} 件を読み込みました", courses.len());
        self.listing = CourseListing::new(ListingKind::Popular, courses);
        Ok(())
    }

    /// 条件をリセットし、設定に従って一覧を消すか人気の授業を読み込み直す
    pub async fn reset(&mut self) -> AppResult<()> {
        let action = self.controller.reset();
        self.listing = CourseListing::default();
        match action {
            ResetAction::ClearResults => Ok(()),
            ResetAction::ReloadPopular => self.load_popular().await,
        }
    }
}
