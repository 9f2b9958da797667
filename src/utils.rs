// src/utils.rs

use crate::{
    catalog,
    error::{AppError, AppResult},
    models::TimeSlot,
};
use regex::Regex;
use std::sync::LazyLock;

// 月1 / 月-1 / 月:1 / 月曜1限 / 月曜日1限 のいずれも受け付ける
static SLOT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<day>[^\s\d:\-曜]+)(?:曜日?)?\s*[-:]?\s*(?P<period>\d+)\s*限?\s*$").unwrap()
});

/// 曜日・時限の指定を解析する。グリッドにないマスはエラー
pub fn parse_slot(input: &str) -> AppResult<TimeSlot> {
    let caps = SLOT_PATTERN.captures(input).ok_or_else(|| {
        AppError::UserInputError(format!(
            "曜日・時限 '{}' を解析できません (例: 月1, 火-2, 水曜3限)",
            input
        ))
    })?;
    let day = &caps["day"];
    let period = &caps["period"];
    if !catalog::is_grid_day(day) {
        return Err(AppError::UserInputError(format!(
            "曜日 '{}' は選択できません。選択肢: {}",
            day,
            catalog::DAYS.join(", ")
        )));
    }
    if !catalog::is_grid_period(period) {
        return Err(AppError::UserInputError(format!(
            "時限 '{}' は選択できません。選択肢: {}",
            period,
            catalog::PERIODS.join(", ")
        )));
    }
    Ok(TimeSlot::new(day, period))
}

/// 表示幅で切り詰める。全角文字は幅 2 として数える
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(char_width).sum();
    if total <= max_width {
        return text.to_string();
    }
    let mut width = 0;
    let mut end_pos = 0;
    for (i, c) in text.char_indices() {
        width += char_width(c);
        if width > max_width.saturating_sub(3) {
            end_pos = i;
            break;
        }
    }
    format!("{}...", &text[..end_pos])
}

fn char_width(c: char) -> usize {
    if c.is_ascii() { 1 } else { 2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slot_formats() {
        let expected = TimeSlot::new("月", "1");
        assert_eq!(parse_slot("月1").unwrap(), expected);
        assert_eq!(parse_slot("月-1").unwrap(), expected);
        assert_eq!(parse_slot("月:1").unwrap(), expected);
        assert_eq!(parse_slot("月曜1限").unwrap(), expected);
        assert_eq!(parse_slot(" 月曜日 1 限 ").unwrap(), expected);
        assert_eq!(parse_slot("金5").unwrap(), TimeSlot::new("金", "5"));
    }

    #[test]
    fn test_parse_slot_rejects_cells_outside_grid() {
        assert!(matches!(parse_slot("土1"), Err(AppError::UserInputError(_))));
        assert!(parse_slot("月6").is_err());
        assert!(parse_slot("月").is_err());
        assert!(parse_slot("").is_err());
        assert!(parse_slot("1").is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghijkl", 10), "abcdefg...");
        // 全角 6 文字 = 幅 12
        assert_eq!(truncate_text("線形代数学演習", 10), "線形代...");
        assert_eq!(truncate_text("線形代数", 8), "線形代数");
    }
}
