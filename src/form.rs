// src/form.rs

//! 検索フォームの状態。値の変更は `set_field` / `toggle` / `reset` だけを通す。

use crate::{
    catalog,
    constants::DEFAULT_YEAR,
    error::{AppError, AppResult},
    models::{SearchParams, TimeSlot},
};
use clap::ValueEnum;
use itertools::Itertools;
use log::debug;
use serde::Serialize;

/// フォームの単一値項目
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[value(rename_all = "snake_case")]
pub enum FormField {
    Year,
    Department,
    Major,
    Semester,
    CourseName,
    Instructor,
    ClassType,
    Language,
    Level,
    AcademicField,
    Query,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Year => "年度",
            FormField::Department => "学部",
            FormField::Major => "学科",
            FormField::Semester => "学期",
            FormField::CourseName => "授業名",
            FormField::Instructor => "教員名",
            FormField::ClassType => "授業形態",
            FormField::Language => "使用言語",
            FormField::Level => "レベル",
            FormField::AcademicField => "学問分野",
            FormField::Query => "自由検索",
        }
    }

    /// 選択式の項目なら固定の選択肢を返す。学科は学部に依存するので `SearchForm::available_majors` を使う
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self {
            FormField::Year => Some(catalog::YEARS),
            FormField::Department => Some(catalog::DEPARTMENTS),
            FormField::Semester => Some(catalog::SEMESTERS),
            FormField::ClassType => Some(catalog::CLASS_TYPES),
            FormField::Language => Some(catalog::LANGUAGES),
            FormField::Level => Some(catalog::LEVELS),
            FormField::AcademicField => Some(catalog::ACADEMIC_FIELDS),
            FormField::Major | FormField::CourseName | FormField::Instructor | FormField::Query => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchForm {
    year: String,
    department: String,
    major: String,
    semester: String,
    course_name: String,
    instructor: String,
    class_type: String,
    language: String,
    level: String,
    academic_field: String,
    query: String,
    selected_slots: Vec<TimeSlot>,
    available_majors: Vec<String>,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR.to_string(),
            department: String::new(),
            major: String::new(),
            semester: String::new(),
            course_name: String::new(),
            instructor: String::new(),
            class_type: String::new(),
            language: String::new(),
            level: String::new(),
            academic_field: String::new(),
            query: String::new(),
            selected_slots: Vec::new(),
            available_majors: Vec::new(),
        }
    }
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Year => &self.year,
            FormField::Department => &self.department,
            FormField::Major => &self.major,
            FormField::Semester => &self.semester,
            FormField::CourseName => &self.course_name,
            FormField::Instructor => &self.instructor,
            FormField::ClassType => &self.class_type,
            FormField::Language => &self.language,
            FormField::Level => &self.level,
            FormField::AcademicField => &self.academic_field,
            FormField::Query => &self.query,
        }
    }

    /// 項目に値を設定する。
    ///
    /// 学部を設定すると学科の選択肢を引き直し、学科は無条件に空へ戻る。
    /// 学科は現在の選択肢にない値を受け付けない。
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> AppResult<()> {
        let value = value.into();
        match field {
            FormField::Year => self.year = value,
            FormField::Department => {
                self.department = value;
                self.refresh_majors();
            }
            FormField::Major => {
                if !value.is_empty() && !self.available_majors.contains(&value) {
                    return Err(AppError::UserInputError(if self.available_majors.is_empty() {
                        format!("学科 '{}' を選ぶには先に学部を選択してください。", value)
                    } else {
                        format!(
                            "学科 '{}' は {} にありません。選択肢: {}",
                            value,
                            self.department,
                            self.available_majors.join(", ")
                        )
                    }));
                }
                self.major = value;
            }
            FormField::Semester => self.semester = value,
            FormField::CourseName => self.course_name = value,
            FormField::Instructor => self.instructor = value,
            FormField::ClassType => self.class_type = value,
            FormField::Language => self.language = value,
            FormField::Level => self.level = value,
            FormField::AcademicField => self.academic_field = value,
            FormField::Query => self.query = value,
        }
        Ok(())
    }

    fn refresh_majors(&mut self) {
        self.available_majors = catalog::majors_for(&self.department)
            .iter()
            .map(|m| m.to_string())
            .collect();
        self.major.clear();
        debug!(
            "学部 '{}' の学科候補: {:?}",
            self.department, self.available_majors
        );
    }

    pub fn available_majors(&self) -> &[String] {
        &self.available_majors
    }

    pub fn is_selected(&self, day: &str, period: &str) -> bool {
        self.selected_slots
            .iter()
            .any(|s| s.day == day && s.period == period)
    }

    /// 選択済みなら外し、未選択なら追加する。戻り値は切り替え後に選択されているかどうか
    pub fn toggle(&mut self, slot: TimeSlot) -> bool {
        if self.is_selected(&slot.day, &slot.period) {
            self.selected_slots.retain(|s| *s != slot);
            false
        } else {
            self.selected_slots.push(slot);
            true
        }
    }

    pub fn selected_slots(&self) -> &[TimeSlot] {
        &self.selected_slots
    }

    /// 現在の値から検索条件を組み立てる。曜日と時限はそれぞれ重複を除き、選択順を保つ
    pub fn to_params(&self) -> SearchParams {
        SearchParams {
            year: self.year.clone(),
            department: self.department.clone(),
            major: self.major.clone(),
            semester: self.semester.clone(),
            course_name: self.course_name.clone(),
            instructor: self.instructor.clone(),
            days: self
                .selected_slots
                .iter()
                .map(|s| s.day.clone())
                .unique()
                .collect(),
            periods: self
                .selected_slots
                .iter()
                .map(|s| s.period.clone())
                .unique()
                .collect(),
            class_type: self.class_type.clone(),
            language: self.language.clone(),
            level: self.level.clone(),
            academic_field: self.academic_field.clone(),
            query: self.query.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 年度以外の条件が一つでも入っているか
    pub fn has_filters(&self) -> bool {
        let mut params = self.to_params();
        params.year = DEFAULT_YEAR.to_string();
        params != Self::default().to_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: &str, period: &str) -> TimeSlot {
        TimeSlot::new(day, period)
    }

    #[test]
    fn test_toggle_parity() {
        let mut form = SearchForm::new();
        let sequence = [
            ("月", "1"),
            ("火", "2"),
            ("月", "1"),
            ("水", "3"),
            ("月", "1"),
            ("火", "2"),
            ("火", "2"),
        ];
        for (d, p) in sequence {
            form.toggle(slot(d, p));
        }
        // 月1: 3回, 火2: 3回, 水3: 1回 → すべて奇数回
        assert!(form.is_selected("月", "1"));
        assert!(form.is_selected("火", "2"));
        assert!(form.is_selected("水", "3"));
        assert_eq!(form.selected_slots().len(), 3);

        assert!(!form.toggle(slot("水", "3")));
        assert!(!form.is_selected("水", "3"));
        assert_eq!(form.selected_slots().len(), 2);
    }

    #[test]
    fn test_params_days_and_periods_are_unique() {
        let mut form = SearchForm::new();
        for (d, p) in [("月", "1"), ("月", "2"), ("火", "1"), ("火", "2"), ("金", "2")] {
            form.toggle(slot(d, p));
        }
        let params = form.to_params();
        assert_eq!(params.days, vec!["月", "火", "金"]);
        assert_eq!(params.periods, vec!["1", "2"]);
    }

    #[test]
    fn test_department_change_resets_major() {
        let mut form = SearchForm::new();
        form.set_field(FormField::Department, "法学部").unwrap();
        assert_eq!(form.available_majors(), &["法律学科", "政治学科"]);
        form.set_field(FormField::Major, "政治学科").unwrap();
        assert_eq!(form.get(FormField::Major), "政治学科");

        form.set_field(FormField::Department, "経済学部").unwrap();
        assert_eq!(form.get(FormField::Major), "");
        assert_eq!(form.available_majors(), &["経済学科"]);

        // 同じ学部を選び直しても学科は消える
        form.set_field(FormField::Major, "経済学科").unwrap();
        form.set_field(FormField::Department, "経済学部").unwrap();
        assert_eq!(form.get(FormField::Major), "");

        form.set_field(FormField::Department, "存在しない学部").unwrap();
        assert!(form.available_majors().is_empty());
        form.set_field(FormField::Department, "").unwrap();
        assert!(form.available_majors().is_empty());
    }

    #[test]
    fn test_major_outside_options_is_rejected() {
        let mut form = SearchForm::new();
        assert!(matches!(
            form.set_field(FormField::Major, "経済学科"),
            Err(AppError::UserInputError(_))
        ));
        form.set_field(FormField::Department, "法学部").unwrap();
        assert!(form.set_field(FormField::Major, "経済学科").is_err());
        assert_eq!(form.get(FormField::Major), "");
        // 空文字列はいつでも許可
        assert!(form.set_field(FormField::Major, "").is_ok());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = SearchForm::new();
        form.set_field(FormField::Year, "2025").unwrap();
        form.set_field(FormField::Department, "理工学部").unwrap();
        form.set_field(FormField::Major, "情報工学科").unwrap();
        form.set_field(FormField::Query, "機械学習").unwrap();
        form.set_field(FormField::Language, "英語").unwrap();
        form.toggle(slot("木", "4"));

        form.reset();

        assert_eq!(form, SearchForm::default());
        assert_eq!(form.get(FormField::Year), DEFAULT_YEAR);
        assert!(form.selected_slots().is_empty());
        assert!(form.available_majors().is_empty());
        assert!(!form.has_filters());
    }

    #[test]
    fn test_has_filters() {
        let mut form = SearchForm::new();
        assert!(!form.has_filters());
        form.toggle(slot("月", "1"));
        assert!(form.has_filters());
        form.toggle(slot("月", "1"));
        assert!(!form.has_filters());
        form.set_field(FormField::Instructor, "藤田").unwrap();
        assert!(form.has_filters());
    }
}
