// src/catalog.rs

//! フォームの選択肢となる静的データ。学部→学科の対応表もここに置く。

pub const DAYS: [&str; 5] = ["月", "火", "水", "木", "金"];
pub const PERIODS: [&str; 5] = ["1", "2", "3", "4", "5"];

pub const YEARS: &[&str] = &["2024"];

pub const DEPARTMENTS: &[&str] = &[
    "文学部",
    "経済学部",
    "法学部",
    "商学部",
    "医学部",
    "理工学部",
    "総合政策学部",
    "環境情報学部",
    "看護医療学部",
    "薬学部",
];

static MAJORS_BY_DEPARTMENT: &[(&str, &[&str])] = &[
    ("文学部", &["人文社会学科"]),
    ("経済学部", &["経済学科"]),
    ("法学部", &["法律学科", "政治学科"]),
    ("商学部", &["商学科"]),
    ("医学部", &["医学科"]),
    (
        "理工学部",
        &[
            "機械工学科",
            "電気情報工学科",
            "応用化学科",
            "物理情報工学科",
            "管理工学科",
            "数理科学科",
            "物理学科",
            "化学科",
            "システムデザイン工学科",
            "情報工学科",
            "生命情報学科",
        ],
    ),
    ("総合政策学部", &["総合政策学科"]),
    ("環境情報学部", &["環境情報学科"]),
    ("看護医療学部", &["看護学科"]),
    ("薬学部", &["薬学科", "薬科学科"]),
];

pub const SEMESTERS: &[&str] = &["春学期", "秋学期", "通年", "春学期前半", "春学期後半", "秋学期前半", "秋学期後半"];
pub const CLASS_TYPES: &[&str] = &["講義", "演習", "実験・実習", "オンライン", "ハイブリッド"];
pub const LANGUAGES: &[&str] = &["日本語", "英語", "その他"];
pub const LEVELS: &[&str] = &["初級", "中級", "上級", "大学院"];
pub const ACADEMIC_FIELDS: &[&str] = &[
    "人文科学",
    "社会科学",
    "自然科学",
    "工学",
    "情報科学",
    "医療・健康",
    "外国語",
];

/// 学部に対応する学科の一覧。空文字列や未知の学部は空スライスを返す。
pub fn majors_for(department: &str) -> &'static [&'static str] {
    MAJORS_BY_DEPARTMENT
        .iter()
        .find(|(dept, _)| *dept == department)
        .map(|(_, majors)| *majors)
        .unwrap_or(&[])
}

pub fn is_grid_day(day: &str) -> bool {
    DAYS.contains(&day)
}

pub fn is_grid_period(period: &str) -> bool {
    PERIODS.contains(&period)
}
