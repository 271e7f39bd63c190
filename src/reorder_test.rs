use super::*;
use crate::action::pushes;

#[test]
fn default_options_serialize_for_library() {
    let value = serde_json::to_value(SortableOptions::default()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "animation": 150,
            "handle": "[data-drag-handle]",
            "ghostClass": "opacity-50",
        })
    );
}

#[test]
fn on_end_reports_ids_in_dom_order() {
    let actions = on_end(vec![Some("t3".to_owned()), Some("t1".to_owned()), Some("t2".to_owned())]);
    assert_eq!(
        pushes(&actions),
        vec![&Outbound::ReorderTags { tag_ids: vec!["t3".into(), "t1".into(), "t2".into()] }]
    );
}

#[test]
fn on_end_skips_children_without_id() {
    let actions = on_end(vec![None, Some("a".to_owned()), None, Some("b".to_owned())]);
    assert_eq!(pushes(&actions), vec![&Outbound::ReorderTags { tag_ids: vec!["a".into(), "b".into()] }]);
}

#[test]
fn on_end_empty_list_still_reports() {
    let actions = on_end(Vec::<Option<String>>::new());
    assert_eq!(pushes(&actions), vec![&Outbound::ReorderTags { tag_ids: vec![] }]);
}
