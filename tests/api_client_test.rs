// tests/api_client_test.rs

use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;
use syllabus_search::{
    client::{SearchBackend, SyllabusApi},
    config::{AppConfig, ResetBehavior},
    error::AppError,
    form::FormField,
    models::{ListingKind, SearchOutcome, TimeSlot},
    session::SearchSession,
};
use url::Url;

fn config_for(server_url: &str) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        base_url: Url::parse(&format!("{}/api/", server_url)).unwrap(),
        ..AppConfig::default()
    })
}

fn sample_courses() -> serde_json::Value {
    json!([
        {
            "id": "1",
            "code": "金",
            "title": "金融リテラシー（寄附講座）",
            "department": "経済学部",
            "instructor": "藤田康範",
            "semester": "金曜4限",
            "enrollment_count": 726,
            "rating": 4,
            "difficulty_rating": 4,
            "content_rating": 4,
            "reviews": 10
        },
        {
            "id": "2",
            "code": "経",
            "title": "経済政策のミクロ分析a",
            "department": "経済学部",
            "instructor": "藤田浩範",
            "semester": "月曜1限",
            "enrollment_count": 595,
            "rating": 4,
            "difficulty_rating": 4,
            "content_rating": 4,
            "reviews": 5
        }
    ])
}

#[tokio::test]
async fn test_search_posts_params_and_decodes_courses() {
    // --- 1. Arrange ---
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/courses/search/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "year": "2024",
            "department": "経済学部",
            "major": "",
            "semester": "",
            "course_name": "",
            "instructor": "",
            "days": ["月", "火"],
            "periods": ["1", "2"],
            "class_type": "",
            "language": "",
            "level": "",
            "academic_field": "",
            "query": ""
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sample_courses().to_string())
        .create_async()
        .await;

    let api = Arc::new(SyllabusApi::new(config_for(&server.url())).unwrap());
    let mut session = SearchSession::new(api, ResetBehavior::Clear);
    {
        let form = session.controller_mut().form_mut();
        form.set_field(FormField::Department, "経済学部").unwrap();
        form.toggle(TimeSlot::new("月", "1"));
        form.toggle(TimeSlot::new("火", "2"));
    }

    // --- 2. Act ---
    session.submit().await.expect("検索は成功するはず");

    // --- 3. Assert ---
    mock.assert_async().await;
    let listing = session.listing();
    assert_eq!(listing.kind, ListingKind::Search);
    assert_eq!(listing.courses.len(), 2);
    assert_eq!(listing.courses[1].title, "経済政策のミクロ分析a");
    assert_eq!(listing.courses[0].content_rating, Some(4.0));

    // リセット後は既定の条件と空の選択に戻る
    session.reset().await.unwrap();
    assert!(session.controller().form().selected_slots().is_empty());
    assert_eq!(session.listing().kind, ListingKind::Empty);
}

#[tokio::test]
async fn test_non_success_status_is_a_typed_failure() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/courses/search/")
        .with_status(500)
        .with_body("Internal Server Error")
        .expect(1)
        .create_async()
        .await;

    let api = SyllabusApi::new(config_for(&server.url())).unwrap();
    let params = syllabus_search::form::SearchForm::new().to_params();
    let err = api.search(&params).await.unwrap_err();

    mock.assert_async().await;
    match err {
        AppError::Status { status, url } => {
            assert_eq!(status.as_u16(), 500);
            assert!(url.ends_with("/api/courses/search/"));
        }
        other => panic!("Status エラーを期待しましたが {:?} でした", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/courses/search/")
        .with_status(200)
        .with_body(r#"{"results": "not an array"}"#)
        .create_async()
        .await;

    let api = Arc::new(SyllabusApi::new(config_for(&server.url())).unwrap());
    let controller =
        syllabus_search::controller::SearchController::new(api, ResetBehavior::Clear);
    let outcome = controller.search().await;

    assert!(matches!(
        outcome,
        SearchOutcome::Failed(AppError::ApiParseFailed { .. })
    ));
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn test_empty_result_is_not_a_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/courses/search/")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let api = Arc::new(SyllabusApi::new(config_for(&server.url())).unwrap());
    let controller =
        syllabus_search::controller::SearchController::new(api, ResetBehavior::Clear);
    assert!(matches!(controller.search().await, SearchOutcome::Loaded(ref c) if c.is_empty()));
}

#[tokio::test]
async fn test_popular_listing_and_reload_on_reset() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/courses/popular/")
        .with_status(200)
        .with_body(sample_courses().to_string())
        .expect(2)
        .create_async()
        .await;

    let api = Arc::new(SyllabusApi::new(config_for(&server.url())).unwrap());
    let mut session = SearchSession::new(api, ResetBehavior::ReloadPopular);
    session.load_popular().await.unwrap();
    assert_eq!(session.listing().kind, ListingKind::Popular);

    session.reset().await.unwrap();
    assert_eq!(session.listing().kind, ListingKind::Popular);
    assert_eq!(session.listing().courses.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_retry_by_default() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/courses/popular/")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let api = SyllabusApi::new(config_for(&server.url())).unwrap();
    assert!(api.popular().await.is_err());
    mock.assert_async().await;
}
