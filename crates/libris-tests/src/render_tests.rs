use libris_web::utils::{category_color, category_dot_color, format_time};

#[test]
fn test_format_time_slices_iso_timestamp() {
    assert_eq!(format_time("2024-01-01T00:00:00Z"), "00:00:00");
    assert_eq!(format_time("2025-01-14T12:30:45.123456Z"), "12:30:45");
}

#[test]
fn test_format_time_falls_back_to_raw_value() {
    assert_eq!(format_time("just now"), "just now");
}

#[test]
fn test_known_categories_have_distinct_accents() {
    let tags = [
        "connection",
        "bookCreated",
        "bookUpdated",
        "bookDeleted",
        "error",
    ];
    for (i, a) in tags.iter().enumerate() {
        for b in &tags[i + 1..] {
            assert_ne!(category_color(a), category_color(b), "{a} vs {b}");
        }
        assert_ne!(category_color(a), category_color("message"));
    }
}

#[test]
fn test_unknown_category_falls_back_to_default_accent() {
    assert_eq!(category_color("bookArchived"), category_color("message"));
    assert_eq!(category_dot_color("weird"), category_dot_color("message"));
}
