//! Rendering tests for course card components
//!
//! Each test builds a VirtualDom around a component and inspects the
//! server-rendered HTML.

use coursecard_core::Course;
use coursecard_ui::{CourseCard, CourseCardList, CourseCardListProps, CourseCardProps};
use dioxus::prelude::*;
use serde_json::json;

// ============================================================================
// Test Utilities
// ============================================================================

fn render_card(course: Course, initially_visible: bool) -> String {
    let mut dom = VirtualDom::new_with_props(
        CourseCard,
        CourseCardProps {
            course,
            initially_visible,
            on_toggle: None,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_list(courses: Vec<Course>) -> String {
    let mut dom = VirtualDom::new_with_props(
        CourseCardList,
        CourseCardListProps {
            courses,
            lessons_visible: true,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn list_items(html: &str) -> usize {
    html.matches("<li").count()
}

fn cs101() -> Course {
    Course::new("CS101", "Introduction to Programming", "Ada Lovelace", ["L1", "L2"])
}

// ============================================================================
// CourseCard
// ============================================================================

#[test]
fn test_card_structure() {
    let html = render_card(cs101(), false);

    assert!(html.contains("class=\"card mb-4 shadow-sm bg-success text-white\""));
    assert!(html.contains("class=\"card-body\""));
    assert!(html.contains("Introduction to Programming"));
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("class=\"btn btn-light\""));
}

#[test]
fn test_hidden_by_default() {
    let html = render_card(cs101(), false);

    assert!(html.contains("Show Lessons"));
    assert!(!html.contains("Hide Lessons"));
    assert!(!html.contains("list-group"));
    assert_eq!(list_items(&html), 0);
}

#[test]
fn test_visible_lessons_in_order() {
    let html = render_card(cs101(), true);

    assert!(html.contains("Hide Lessons"));
    assert!(html.contains("class=\"list-group list-group-flush mt-3\""));
    assert_eq!(list_items(&html), 2);

    let first = html.find(">L1<").expect("L1 rendered");
    let second = html.find(">L2<").expect("L2 rendered");
    assert!(first < second);
}

#[test]
fn test_duplicate_lessons_render_separately() {
    let course = cs101().with_lessons(json!(["Review", "Review", "Review"]));
    let html = render_card(course, true);

    assert_eq!(list_items(&html), 3);
    assert_eq!(html.matches(">Review<").count(), 3);
}

#[test]
fn test_empty_lessons_render_empty_list() {
    let course = cs101().with_lessons(json!([]));
    let html = render_card(course, true);

    assert!(html.contains("list-group"));
    assert_eq!(list_items(&html), 0);
}

#[test]
fn test_missing_lessons_do_not_break_card() {
    let course = cs101().with_lessons(serde_json::Value::Null);
    let html = render_card(course, true);

    assert!(html.contains("Introduction to Programming"));
    assert_eq!(list_items(&html), 0);
}

#[test]
fn test_malformed_lessons_do_not_break_card() {
    for lessons in [json!(7), json!({"a": "b"}), json!("not json"), json!([{"x": 1}])] {
        let course = cs101().with_lessons(lessons);
        let html = render_card(course, true);

        assert!(html.contains("Hide Lessons"));
        assert_eq!(list_items(&html), 0);
    }
}

#[test]
fn test_absent_names_render_empty() {
    let course: Course = serde_json::from_value(json!({ "lessons": ["L1"] })).unwrap();
    let html = render_card(course, false);

    // Empty id hashes to zero, the first palette entry
    assert!(html.contains("bg-primary"));
    assert!(html.contains("card-title"));
    assert!(html.contains("card-subtitle mb-2"));
}

#[test]
fn test_numeric_id_is_coerced() {
    let numeric = cs101().with_course_id(json!(150));
    let string = cs101().with_course_id(json!("150"));

    let accent = string.accent().class();
    assert!(render_card(numeric, false).contains(accent));
    assert!(render_card(string, false).contains(accent));
}

#[test]
fn test_same_id_same_accent_across_renders() {
    let first = render_card(cs101(), false);
    let second = render_card(cs101(), true);

    assert!(first.contains("bg-success"));
    assert!(second.contains("bg-success"));
}

// ============================================================================
// CourseCardList
// ============================================================================

#[test]
fn test_list_renders_each_course() {
    let courses = vec![
        cs101(),
        Course::new("ART101", "Foundations of Drawing", "Hilma af Klint", ["Line"]),
    ];
    let html = render_list(courses);

    assert!(html.contains("course-card-list"));
    assert_eq!(html.matches("card-body").count(), 2);
    assert!(html.contains("bg-success"));
    assert!(html.contains("bg-info"));
    assert_eq!(list_items(&html), 3);
}

#[test]
fn test_empty_list_message() {
    let html = render_list(Vec::new());

    assert!(html.contains("No courses available"));
    assert!(!html.contains("card-body"));
}
