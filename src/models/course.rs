// src/models/course.rs

use super::TimeSlot;
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};

/// バックエンドから受け取る授業一件。受信後は変更しない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub schedule: Vec<TimeSlot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academic_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_type: Option<String>,
}

/// 表示中の一覧が何を表しているか
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingKind {
    #[default]
    Empty,
    Search,
    Popular,
}

#[derive(Debug, Clone, Default)]
pub struct CourseListing {
    pub kind: ListingKind,
    pub courses: Vec<Course>,
}

impl CourseListing {
    /// 受信した一覧から作る。同じ id が重複していれば最初の一件だけ残す
    pub fn new(kind: ListingKind, courses: Vec<Course>) -> Self {
        let total = courses.len();
        let courses: Vec<Course> = courses.into_iter().unique_by(|c| c.id.clone()).collect();
        if courses.len() < total {
            warn!(
                "応答に重複した id が {} 件含まれていたため除外しました",
                total - courses.len()
            );
        }
        Self { kind, courses }
    }

    pub fn is_search_results(&self) -> bool {
        self.kind == ListingKind::Search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, title: &str) -> Course {
        serde_json::from_value(serde_json::json!({ "id": id, "title": title })).unwrap()
    }

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{
            "id": "1",
            "code": "金",
            "title": "金融リテラシー（寄附講座）",
            "department": "経済学部",
            "instructor": "藤田康範",
            "semester": "金曜4限",
            "enrollment_count": 726,
            "rating": 4,
            "difficulty_rating": 4.0,
            "content_rating": 3,
            "reviews": 10
        }"#;
        let c: Course = serde_json::from_str(json).unwrap();
        assert_eq!(c.title, "金融リテラシー（寄附講座）");
        assert_eq!(c.enrollment_count, Some(726));
        assert_eq!(c.content_rating, Some(3.0));
        assert!(c.schedule.is_empty());
        assert!(c.url.is_none());
    }

    #[test]
    fn test_name_alias_and_schedule() {
        let json = r#"{"id": "x", "name": "線形代数", "schedule": [{"day": "月", "period": "1"}]}"#;
        let c: Course = serde_json::from_str(json).unwrap();
        assert_eq!(c.title, "線形代数");
        assert_eq!(c.schedule, vec![TimeSlot::new("月", "1")]);
    }

    #[test]
    fn test_listing_drops_duplicate_ids() {
        let listing = CourseListing::new(
            ListingKind::Search,
            vec![course("1", "A"), course("2", "B"), course("1", "A'")],
        );
        let titles: Vec<_> = listing.courses.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert!(listing.is_search_results());
    }
}
