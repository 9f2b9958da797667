// src/models/mod.rs

pub mod course;

pub use course::{Course, CourseListing, ListingKind};

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 曜日・時限グリッドの一マス
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: String,
    pub period: String,
}

impl TimeSlot {
    pub fn new(day: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            period: period.into(),
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}曜{}限", self.day, self.period)
    }
}

/// バックエンドへ送る検索条件。送信のたびに新しく組み立てる
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub year: String,
    pub department: String,
    pub major: String,
    pub semester: String,
    pub course_name: String,
    pub instructor: String,
    pub days: Vec<String>,
    pub periods: Vec<String>,
    pub class_type: String,
    pub language: String,
    pub level: String,
    pub academic_field: String,
    pub query: String,
}

/// 検索一回分の結果。一覧・失敗・送信中の三通り
#[derive(Debug)]
pub enum SearchOutcome {
    Loaded(Vec<Course>),
    Failed(AppError),
    InFlight,
}

impl SearchOutcome {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SearchOutcome::InFlight)
    }
}
