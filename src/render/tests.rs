use super::*;
use crate::aggregate::sorted_tags;
use crate::search::testing::RecordingTarget;
use crate::types::TagCount;

fn sample_cloud() -> TagCloud {
    let tags = sorted_tags(["rust,wasm", "rust,cli", "wasm,rust", "cli"]);
    build_tag_cloud(&tags, &TagCloudConfig::default())
}

// -------------------------------------------------------------------------
// Tree shape
// -------------------------------------------------------------------------
#[test]
fn test_wrapper_starts_collapsed() {
    let cloud = sample_cloud();
    let root = cloud.root();
    assert_eq!(root.tag_name, "div");
    assert_eq!(root.classes, vec!["tags-wrapper", "collapsed"]);
    assert_eq!(cloud.state(), CollapseState::Collapsed);
}

#[test]
fn test_one_button_per_tag_in_order() {
    let cloud = sample_cloud();
    let labels: Vec<&str> = cloud
        .tag_buttons()
        .iter()
        .filter_map(|n| n.text.as_deref())
        .collect();
    assert_eq!(labels, vec!["rust (3)", "wasm (2)", "cli (2)"]);

    for node in cloud.tag_buttons() {
        assert_eq!(node.tag_name, "span");
        assert!(node.has_class("tag-button"));
        assert!(matches!(node.action, Some(Action::SearchTag(_))));
    }
}

#[test]
fn test_toggle_button_is_last_child() {
    let cloud = sample_cloud();
    assert_eq!(cloud.root().children.len(), 2);
    let toggle = cloud.toggle_button();
    assert_eq!(toggle.tag_name, "button");
    assert!(toggle.has_class("toggle-tags-btn"));
    assert_eq!(toggle.text.as_deref(), Some("Show more"));
    assert_eq!(toggle.action, Some(Action::ToggleCollapse));
    assert!(!toggle.hidden);
}

#[test]
fn test_empty_tags_zero_buttons_hidden_toggle() {
    let tags = sorted_tags(Vec::<&str>::new());
    let mut cloud = build_tag_cloud(&tags, &TagCloudConfig::default());
    assert!(cloud.tag_buttons().is_empty());

    // Nothing to lay out, so the estimate reports zero height
    assert!(cloud.measure_and_adjust(&RowEstimate::default()));
    assert!(cloud.is_toggle_hidden());
}

// -------------------------------------------------------------------------
// Measurement
// -------------------------------------------------------------------------
#[test]
fn test_threshold_is_inclusive() {
    let mut cloud = sample_cloud();
    assert!(cloud.measure_and_adjust(&FixedHeight(49.0)));
    assert!(cloud.is_toggle_hidden());
}

#[test]
fn test_tall_container_keeps_toggle() {
    let mut cloud = sample_cloud();
    assert!(!cloud.measure_and_adjust(&FixedHeight(49.5)));
    assert!(!cloud.is_toggle_hidden());
}

#[test]
fn test_measure_closure_sees_container() {
    let mut cloud = sample_cloud();
    let measure = |container: &ElementNode| container.children.len() as f64 * 40.0;
    // 3 buttons * 40 = 120 > 49
    assert!(!cloud.measure_and_adjust(&measure));
}

#[test]
fn test_row_estimate_wraps() {
    let estimate = RowEstimate {
        row_height: 30.0,
        per_row: 2,
    };
    let tags: TagCounts = (0..5).map(|i| TagCount::new(format!("t{}", i), 2)).collect();
    let cloud = build_tag_cloud(&tags, &TagCloudConfig::default());
    assert_eq!(estimate.container_height(cloud.container()), 90.0);
}

// -------------------------------------------------------------------------
// Toggle
// -------------------------------------------------------------------------
#[test]
fn test_toggle_expands_and_relabels() {
    let mut cloud = sample_cloud();
    assert_eq!(cloud.toggle(), CollapseState::Expanded);
    assert!(!cloud.root().has_class("collapsed"));
    assert!(cloud.root().has_class("tags-wrapper"));
    assert_eq!(cloud.toggle_button().text.as_deref(), Some("Show less"));
}

#[test]
fn test_toggle_twice_restores_original() {
    let mut cloud = sample_cloud();
    let original = cloud.root().clone();
    cloud.toggle();
    cloud.toggle();
    assert_eq!(cloud.state(), CollapseState::Collapsed);
    assert_eq!(cloud.root(), &original);
}

// -------------------------------------------------------------------------
// Click
// -------------------------------------------------------------------------
#[test]
fn test_click_tag_writes_query() {
    let tags: TagCounts = vec![TagCount::new("rust", 2)].into();
    let cloud = build_tag_cloud(&tags, &TagCloudConfig::default());
    let bar = RecordingTarget::default();

    let query = cloud.click_tag("rust", &bar).unwrap();
    assert_eq!(query.as_deref(), Some("#rust"));
    assert_eq!(*bar.value.borrow(), "#rust");
    assert_eq!(bar.events.borrow().len(), 1);
}

#[test]
fn test_click_unknown_tag_does_nothing() {
    let cloud = sample_cloud();
    let bar = RecordingTarget::default();
    assert_eq!(cloud.click_tag("missing", &bar).unwrap(), None);
    assert!(bar.value.borrow().is_empty());
    assert!(bar.events.borrow().is_empty());
}

// -------------------------------------------------------------------------
// Snapshots
// -------------------------------------------------------------------------
#[test]
fn test_html_snapshot() {
    let tags: TagCounts = vec![TagCount::new("a", 3), TagCount::new("b", 2)].into();
    let mut cloud = build_tag_cloud(&tags, &TagCloudConfig::default());
    assert_eq!(
        cloud.to_html(),
        concat!(
            r#"<div class="tags-wrapper collapsed">"#,
            r#"<div class="tags-container">"#,
            r#"<span class="tag-button">a (3)</span>"#,
            r#"<span class="tag-button">b (2)</span>"#,
            r#"</div>"#,
            r#"<button class="toggle-tags-btn">Show more</button>"#,
            r#"</div>"#,
        )
    );

    cloud.measure_and_adjust(&FixedHeight(20.0));
    assert!(cloud
        .to_html()
        .contains(r#"<button class="toggle-tags-btn" style="display: none;">"#));
}

#[test]
fn test_html_escapes_tag_text() {
    let tags: TagCounts = vec![TagCount::new("<b>&co", 2)].into();
    let cloud = build_tag_cloud(&tags, &TagCloudConfig::default());
    assert!(cloud.to_html().contains("&lt;b&gt;&amp;co (2)"));
}

#[test]
fn test_json_snapshot() {
    let tags: TagCounts = vec![TagCount::new("a", 2)].into();
    let cloud = build_tag_cloud(&tags, &TagCloudConfig::default());
    let value = serde_json::to_value(&cloud).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "root": {
                "tag_name": "div",
                "classes": ["tags-wrapper", "collapsed"],
                "children": [
                    {
                        "tag_name": "div",
                        "classes": ["tags-container"],
                        "children": [
                            {
                                "tag_name": "span",
                                "classes": ["tag-button"],
                                "text": "a (2)",
                                "action": { "SearchTag": "a" }
                            }
                        ]
                    },
                    {
                        "tag_name": "button",
                        "classes": ["toggle-tags-btn"],
                        "text": "Show more",
                        "action": "ToggleCollapse"
                    }
                ]
            },
            "state": "Collapsed"
        })
    );
}

#[test]
fn test_custom_classes_and_labels() {
    let config = TagCloudConfig {
        wrapper_class: "cloud".to_string(),
        collapsed_class: "folded".to_string(),
        show_more_label: "More".to_string(),
        show_less_label: "Less".to_string(),
        ..Default::default()
    };
    let tags: TagCounts = vec![TagCount::new("x", 2)].into();
    let mut cloud = build_tag_cloud(&tags, &config);
    assert_eq!(cloud.root().classes, vec!["cloud", "folded"]);
    cloud.toggle();
    assert_eq!(cloud.root().classes, vec!["cloud"]);
    assert_eq!(cloud.toggle_button().text.as_deref(), Some("Less"));
}
