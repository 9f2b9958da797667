// src/render.rs

//! 授業一覧をカード形式の文字列にする。状態は持たない。

use crate::{
    catalog,
    constants::{self, RATING_SCALE},
    form::{FormField, SearchForm},
    models::{Course, CourseListing, ListingKind},
    symbols, utils,
};
use clap::ValueEnum;
use colored::*;
use itertools::Itertools;
use std::fmt::Write;

/// 評価値を 5 段階の星に変換する。位置 i は i < rating のとき塗りつぶし。
/// 値がない・NaN・範囲外でも落ちずに 0..=5 に丸める
pub fn star_states(rating: Option<f32>) -> [bool; RATING_SCALE] {
    let value = match rating {
        Some(v) if v.is_finite() => v.clamp(0.0, RATING_SCALE as f32),
        _ => 0.0,
    };
    std::array::from_fn(|i| (i as f32) < value)
}

pub fn star_row(rating: Option<f32>) -> String {
    star_states(rating)
        .iter()
        .map(|filled| {
            if *filled {
                symbols::STAR_FILLED.yellow().to_string()
            } else {
                symbols::STAR_EMPTY.dimmed().to_string()
            }
        })
        .collect()
}

pub fn heading(kind: ListingKind) -> Option<&'static str> {
    match kind {
        ListingKind::Search => Some(constants::HEADING_SEARCH_RESULTS),
        ListingKind::Popular => Some(constants::HEADING_POPULAR),
        ListingKind::Empty => None,
    }
}

pub fn render_card(course: &Course) -> String {
    let mut out = String::new();
    let rule = "─".repeat(constants::UI_WIDTH - 2);

    let _ = writeln!(out, "┌{}┐", rule);
    let _ = writeln!(
        out,
        "  {} {}",
        format!("[{}]", course.code).on_bright_black().bold(),
        utils::truncate_text(&course.title, constants::TITLE_TRUNCATE_LENGTH).bold()
    );
    if !course.department.is_empty() {
        let _ = writeln!(out, "  {}", course.department.dimmed());
    }
    let _ = writeln!(out, "├{}┤", rule);

    if let Some(count) = course.enrollment_count {
        let _ = writeln!(out, "  履修者数：{}人", count);
    }

    let mut meta = Vec::new();
    if !course.semester.is_empty() {
        meta.push(course.semester.clone());
    }
    if !course.instructor.is_empty() {
        meta.push(course.instructor.clone());
    }
    meta.push(format!("{} {}件", symbols::STAR_FILLED.yellow(), course.reviews.unwrap_or(0)));
    let _ = writeln!(out, "  {}", meta.join("  "));

    if course.rating.is_some() {
        let _ = writeln!(out, "  総合評価    {}", star_row(course.rating));
    }
    let _ = writeln!(out, "  内容充実度  {}", star_row(course.content_rating));
    let _ = writeln!(out, "  単位取得度  {}", star_row(course.difficulty_rating));

    let extras: Vec<String> = [
        course.credits.map(|c| format!("{}単位", c)),
        course.class_type.clone(),
        course.language.clone(),
        course.level.clone(),
        course.academic_field.clone(),
    ]
    .into_iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .collect();
    if !extras.is_empty() {
        let _ = writeln!(out, "  {}", extras.join(" / ").cyan());
    }
    if !course.schedule.is_empty() {
        let _ = writeln!(out, "  時間割: {}", course.schedule.iter().join(", "));
    }
    if let Some(url) = course.url.as_deref().filter(|u| !u.is_empty()) {
        let _ = writeln!(out, "  {}", url.underline());
    }
    let _ = write!(out, "└{}┘", rule);
    out
}

/// 一覧全体を描画する。検索結果が 0 件のときは見出しの下にその旨を出す
pub fn render_listing(listing: &CourseListing) -> String {
    let Some(title) = heading(listing.kind) else {
        return format!("{} 条件を指定して検索してください。", *symbols::INFO);
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", "═".repeat(constants::UI_WIDTH));
    let _ = writeln!(
        out,
        " {} {}",
        title.cyan().bold(),
        format!("({}件)", listing.courses.len()).dimmed()
    );
    let _ = write!(out, "{}", "═".repeat(constants::UI_WIDTH));

    if listing.courses.is_empty() {
        if listing.is_search_results() {
            let _ = write!(out, "\n{} 該当する授業が見つかりませんでした。", *symbols::INFO);
        } else {
            let _ = write!(out, "\n{} 表示できる授業がありません。", *symbols::INFO);
        }
        return out;
    }

    for course in &listing.courses {
        let _ = write!(out, "\n{}", render_card(course));
    }
    out
}

/// 現在の検索条件と曜日・時限グリッドを描画する
pub fn render_form(form: &SearchForm, submit_label: &str) -> String {
    let mut out = String::new();
    let unset = "(指定なし)".dimmed().to_string();

    for field in FormField::value_variants() {
        let value = form.get(*field);
        let shown = if value.is_empty() { unset.clone() } else { value.to_string() };
        let _ = writeln!(out, "  {:<10} {}", field.label(), shown);
        if *field == FormField::Major && !form.available_majors().is_empty() {
            let _ = writeln!(
                out,
                "  {:<10} {}",
                "",
                format!("選択肢: {}", form.available_majors().join(", ")).dimmed()
            );
        }
    }

    let _ = writeln!(out, "\n  曜日・時限");
    let _ = writeln!(out, "      {}", catalog::DAYS.join("  "));
    for period in catalog::PERIODS {
        let cells = catalog::DAYS
            .iter()
            .map(|day| {
                if form.is_selected(day, period) {
                    symbols::SLOT_ON.green().to_string()
                } else {
                    symbols::SLOT_OFF.to_string()
                }
            })
            .join("  ");
        let _ = writeln!(out, "  {}限  {}", period, cells);
    }
    let _ = write!(out, "\n  [{}]", submit_label.bold());
    out
}
