use super::*;

#[test]
fn modifiers_default_does_not_zoom() {
    assert!(!Modifiers::default().zooms());
}

#[test]
fn ctrl_or_meta_zooms() {
    assert!(Modifiers { ctrl: true, ..Default::default() }.zooms());
    assert!(Modifiers { meta: true, ..Default::default() }.zooms());
    assert!(Modifiers { ctrl: true, meta: true }.zooms());
}

#[test]
fn key_escape_detection() {
    assert!(Key("Escape".into()).is_escape());
    assert!(!Key("Enter".into()).is_escape());
    assert!(!Key("escape".into()).is_escape());
}

#[test]
fn selector_css_strings() {
    assert_eq!(Selector::Card.css(), "[data-card-id]");
    assert_eq!(Selector::Button.css(), "button");
    assert_eq!(Selector::ConnectionSource.css(), "[data-connection-source]");
    assert_eq!(Selector::ConnectionTarget.css(), "[data-connection-target]");
}

#[test]
fn bare_canvas_starts_pan() {
    assert!(starts_pan(&NoTarget));
}

#[test]
fn card_button_and_endpoints_block_pan() {
    assert!(!starts_pan(&[Selector::Card]));
    assert!(!starts_pan(&[Selector::Button]));
    assert!(!starts_pan(&[Selector::ConnectionSource]));
    assert!(!starts_pan(&[Selector::ConnectionTarget]));
}

#[test]
fn card_body_starts_card_drag() {
    assert!(starts_card_drag(&[Selector::Card]));
    assert!(starts_card_drag(&NoTarget));
}

#[test]
fn button_and_endpoints_block_card_drag() {
    assert!(!starts_card_drag(&[Selector::Card, Selector::Button]));
    assert!(!starts_card_drag(&[Selector::Card, Selector::ConnectionSource]));
    assert!(!starts_card_drag(&[Selector::Card, Selector::ConnectionTarget]));
}

#[test]
fn slice_target_query() {
    let ancestors: &[Selector] = &[Selector::Button];
    assert!(ancestors.closest(Selector::Button));
    assert!(!ancestors.closest(Selector::Card));
}
