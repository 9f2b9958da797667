// src/main.rs

use clap::{CommandFactory, FromArgMatches};
use colored::*;
use syllabus_search::{
    cli::Cli,
    logging::setup_logging,
    run_from_cli,
    workflows::describe_error,
};
use std::{env, sync::Arc, time::Duration};

#[tokio::main]
async fn main() {
    // Windows 端末で ANSI カラーを有効にする
    #[cfg(windows)]
    {
        colored::control::set_virtual_terminal(true).ok();
    }
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n{} ユーザーがプログラムを中断しました。", "[!]".yellow());
            tokio::time::sleep(Duration::from_millis(100)).await;
            std::process::exit(130);
        }
    });

    let bin_name = env::var("CARGO_BIN_NAME").unwrap_or_else(|_| "syllabus-search".to_string());

    let after_help = format!(
        "例:\n  # 対話モードで条件を編集して検索 (おすすめ)\n  {bin} -i\n\n  # 経済学部の月曜1限・火曜2限の授業を検索\n  {bin} -d 経済学部 -s 月1 -s 火2\n\n  # キーワードで検索し JSON で出力\n  {bin} -q プログラミング --json\n\n  # 人気の授業を表示\n  {bin} --popular",
        bin = bin_name
    );

    let cmd = Cli::command().after_help(after_help);
    let args = match Cli::from_arg_matches(&cmd.get_matches()) {
        Ok(args) => Arc::new(args),
        Err(e) => e.exit(),
    };

    setup_logging(args.log_level);

    if let Err(e) = run_from_cli(args).await {
        eprintln!("\n{} {}", "[X]".red(), describe_error(&e).red());
        std::process::exit(1);
    }
}
