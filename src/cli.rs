// src/cli.rs

use clap::{Parser, ValueEnum, command, crate_version};

/// ログ出力レベル
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Parser, Debug, Clone)]
#[command(
    version = crate_version!(),
    about,
    long_about = None,
    arg_required_else_help = true,
    disable_help_flag = true,
    disable_version_flag = true,
)]
pub struct Cli {
    // --- 実行モード (Mode) ---
    /// 対話モードで検索条件を一つずつ編集する
    #[arg(short, long, action = clap::ArgAction::SetTrue, help_heading = "Mode", conflicts_with = "popular")]
    pub interactive: bool,
    /// 人気の授業を表示する
    #[arg(long, action = clap::ArgAction::SetTrue, help_heading = "Mode")]
    pub popular: bool,
    /// 選択肢 (学部・学科・学期など) の一覧を表示して終了する
    #[arg(long, action = clap::ArgAction::SetTrue, help_heading = "Mode")]
    pub list_options: bool,

    // --- 検索条件 (Filters) ---
    /// 年度
    #[arg(long, help_heading = "Filters")]
    pub year: Option<String>,
    /// 学部
    #[arg(short, long, help_heading = "Filters")]
    pub department: Option<String>,
    /// 学科 (--department と併用)
    #[arg(short, long, help_heading = "Filters", requires = "department")]
    pub major: Option<String>,
    /// 学期
    #[arg(long, help_heading = "Filters")]
    pub semester: Option<String>,
    /// 授業名
    #[arg(short = 'n', long, help_heading = "Filters")]
    pub course_name: Option<String>,
    /// 教員名
    #[arg(short = 't', long, help_heading = "Filters")]
    pub instructor: Option<String>,
    /// 曜日・時限 (例: 月1, 火-2, 水曜3限)。複数指定可
    #[arg(short, long = "slot", value_name = "SLOT", help_heading = "Filters")]
    pub slots: Vec<String>,
    /// 授業形態
    #[arg(long, help_heading = "Filters")]
    pub class_type: Option<String>,
    /// 使用言語
    #[arg(long, help_heading = "Filters")]
    pub language: Option<String>,
    /// レベル
    #[arg(long, help_heading = "Filters")]
    pub level: Option<String>,
    /// 学問分野
    #[arg(long, help_heading = "Filters")]
    pub academic_field: Option<String>,
    /// 自由検索キーワード
    #[arg(short, long, help_heading = "Filters")]
    pub query: Option<String>,

    // --- オプション (Options) ---
    /// 結果をカードではなく JSON で出力する
    #[arg(long, action = clap::ArgAction::SetTrue, help_heading = "Options")]
    pub json: bool,
    /// API のベース URL (環境変数 SYLLABUS_API_BASE より優先)
    #[arg(long, value_name = "URL", help_heading = "Options")]
    pub base_url: Option<String>,

    // --- 共通オプション (General) ---
    /// このヘルプを表示して終了する
    #[arg(short = 'h', long, action = clap::ArgAction::Help, global = true, help_heading = "General")]
    _help: Option<bool>,
    /// バージョンを表示して終了する
    #[arg(short = 'V', long, action = clap::ArgAction::Version, global = true, help_heading = "General")]
    _version: Option<bool>,
    /// (隠しオプション) ログファイルの出力レベル
    #[arg(long, value_enum, default_value_t = LogLevel::Off, global = true, hide = true)]
    pub log_level: LogLevel,
}
