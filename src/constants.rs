// src/constants.rs

pub const UI_WIDTH: usize = 72;
pub const TITLE_TRUNCATE_LENGTH: usize = 56;
pub const CONFIG_DIR_NAME: &str = concat!(".", clap::crate_name!());
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = concat!(clap::crate_name!(), ".log");
pub const LOG_FALLBACK_FILE_NAME: &str = "fallback.log";
pub const USER_AGENT: &str = concat!(clap::crate_name!(), "/", clap::crate_version!());

/// 年度の初期値。リセット時もこの値に戻る
pub const DEFAULT_YEAR: &str = "2024";
pub const RATING_SCALE: usize = 5;

pub const LABEL_SUBMIT: &str = "検索する";
pub const LABEL_SUBMIT_LOADING: &str = "検索中...";

pub const HEADING_SEARCH_RESULTS: &str = "検索結果";
pub const HEADING_POPULAR: &str = "人気の授業";

pub const ENV_API_BASE: &str = "SYLLABUS_API_BASE";

pub mod api {
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
    pub const SEARCH_PATH: &str = "courses/search/";
    pub const POPULAR_PATH: &str = "courses/popular/";
}

pub const HELP_INTERACTIVE: &str = r#"
set <項目> <値>   項目に値を設定 (例: set department 経済学部)
clear <項目>      項目を空に戻す
slot <曜日><時限> 曜日・時限の選択を切り替え (例: slot 月1, slot 火-2)
show              現在の検索条件を表示
search            検索を実行
reset             すべての条件を初期値に戻す
popular           人気の授業を表示
options           選択肢の一覧を表示
help              このヘルプを表示
(空行で終了)

項目: year, department, major, semester, course_name, instructor,
      class_type, language, level, academic_field, query"#;
