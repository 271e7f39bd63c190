use super::*;

#[test]
fn click_toggles_request() {
    assert_eq!(on_click(false), FullscreenRequest::Enter);
    assert_eq!(on_click(true), FullscreenRequest::Exit);
}

#[test]
fn label_tracks_state() {
    assert_eq!(label(false), "[FULLSCREEN]");
    assert_eq!(label(true), "[EXIT FS]");
}

#[test]
fn rejection_carries_browser_reason() {
    let err = rejection("Permissions check failed");
    assert!(matches!(err, HookError::Fullscreen(_)));
    assert_eq!(err.to_string(), "fullscreen request rejected: Permissions check failed");
}

