// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod client;
pub mod command;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod render;
pub mod session;
pub mod symbols;
pub mod ui;
pub mod utils;
pub mod workflows;

use crate::{
    cli::Cli,
    client::{SearchBackend, SyllabusApi},
    config::AppConfig,
    error::AppResult,
};
use log::debug;
use std::sync::Arc;

/// 各モードが共有する実行コンテキスト
#[derive(Clone)]
pub struct SearchJobContext {
    pub config: Arc<AppConfig>,
    pub backend: Arc<dyn SearchBackend>,
    pub args: Arc<Cli>,
}

/// ライブラリの公開エントリポイント。`main.rs` から呼ばれる
pub async fn run_from_cli(args: Arc<Cli>) -> AppResult<()> {
    debug!("CLI 引数: {:?}", args);
    if args.list_options {
        workflows::print_options();
        return Ok(());
    }

    let config = Arc::new(AppConfig::new(&args)?);
    debug!("読み込んだ設定: {:?}", config);

    let backend: Arc<dyn SearchBackend> = Arc::new(SyllabusApi::new(config.clone())?);
    let context = SearchJobContext {
        config,
        backend,
        args: args.clone(),
    };

    if args.interactive {
        workflows::run_interactive(context).await
    } else if args.popular {
        workflows::run_popular(context).await
    } else {
        workflows::run_search(context).await
    }
}
