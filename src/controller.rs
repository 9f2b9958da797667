// src/controller.rs

use crate::{
    client::SearchBackend,
    config::ResetBehavior,
    constants,
    form::SearchForm,
    models::{SearchOutcome, SearchParams},
};
use log::{error, info, warn};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// リセット後に呼び出し側が一覧に対して行うこと
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetAction {
    ClearResults,
    ReloadPopular,
}

impl From<ResetBehavior> for ResetAction {
    fn from(behavior: ResetBehavior) -> Self {
        match behavior {
            ResetBehavior::Clear => ResetAction::ClearResults,
            ResetBehavior::ReloadPopular => ResetAction::ReloadPopular,
        }
    }
}

/// 送信中フラグを保持し、drop 時に一度だけ解除する
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LoadingGuard(flag))
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// 開始済みの検索。完了するか drop されると送信中フラグが解除される
pub struct PendingSearch<'a> {
    _guard: LoadingGuard<'a>,
    params: SearchParams,
    backend: &'a dyn SearchBackend,
}

impl PendingSearch<'_> {
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub async fn finish(self) -> SearchOutcome {
        match self.backend.search(&self.params).await {
            Ok(courses) => {
                info!("検索完了: {} 件", courses.len());
                SearchOutcome::Loaded(courses)
            }
            Err(e) => {
                error!("授業の検索に失敗しました: {}", e);
                SearchOutcome::Failed(e)
            }
        }
    }
}

pub struct SearchController {
    form: SearchForm,
    loading: AtomicBool,
    backend: Arc<dyn SearchBackend>,
    reset_behavior: ResetBehavior,
}

impl SearchController {
    pub fn new(backend: Arc<dyn SearchBackend>, reset_behavior: ResetBehavior) -> Self {
        Self {
            form: SearchForm::new(),
            loading: AtomicBool::new(false),
            backend,
            reset_behavior,
        }
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    /// フォームの編集には `&mut` が必要なため、検索の待機中に条件が書き換わることはない
    pub fn form_mut(&mut self) -> &mut SearchForm {
        &mut self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            constants::LABEL_SUBMIT_LOADING
        } else {
            constants::LABEL_SUBMIT
        }
    }

    /// 送信中フラグを立て、現在の条件を確定して検索を開始する。
    /// すでに送信中なら `None` を返し、要求は出さない。
    pub fn start_search(&self) -> Option<PendingSearch<'_>> {
        let Some(guard) = LoadingGuard::acquire(&self.loading) else {
            warn!("検索が送信中のため、新しい検索要求を無視しました");
            return None;
        };
        let params = self.form.to_params();
        info!("検索を送信: {:?}", params);
        Some(PendingSearch {
            _guard: guard,
            params,
            backend: self.backend.as_ref(),
        })
    }

    /// 現在の条件で検索する。
    ///
    /// 送信中に再度呼ばれた場合は要求を出さずに `InFlight` を返す。
    /// 失敗は空の一覧にせず `Failed` として返す。
    pub async fn search(&self) -> SearchOutcome {
        match self.start_search() {
            Some(pending) => pending.finish().await,
            None => SearchOutcome::InFlight,
        }
    }

    /// すべての項目を初期値に戻し、一覧の扱いを呼び出し側へ返す
    pub fn reset(&mut self) -> ResetAction {
        self.form.reset();
        info!("検索条件をリセットしました");
        self.reset_behavior.into()
    }

    pub fn backend(&self) -> &Arc<dyn SearchBackend> {
        &self.backend
    }
}
