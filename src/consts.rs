//! Shared constants for the hooks crate.

// ── Viewport ────────────────────────────────────────────────────

/// Smallest allowed canvas zoom factor.
pub const ZOOM_MIN: f64 = 0.25;

/// Largest allowed canvas zoom factor.
pub const ZOOM_MAX: f64 = 2.0;

/// Zoom change applied per modified wheel notch.
pub const ZOOM_STEP: f64 = 0.1;

/// Background grid cell size in CSS pixels at zoom 1.
pub const GRID_SIZE_PX: f64 = 40.0;

/// Quiet period before a viewport report is sent.
pub const VIEWPORT_SAVE_DEBOUNCE_MS: f64 = 500.0;

// ── Cards ───────────────────────────────────────────────────────

/// Inline `z-index` for a card while it is being dragged.
pub const DRAGGING_Z_INDEX: &str = "100";

// ── Save indicator ──────────────────────────────────────────────

/// How long `[SAVED]` stays visible before clearing.
pub const SAVED_CLEAR_MS: f64 = 2000.0;

// ── Sortable ────────────────────────────────────────────────────

/// Reorder animation duration handed to the sortable library.
pub const SORT_ANIMATION_MS: u32 = 150;

// ── Selectors ───────────────────────────────────────────────────

/// Attribute carried by every card wrapper.
pub const CARD_SELECTOR: &str = "[data-card-id]";

/// Connection drag sources on a card.
pub const CONNECTION_SOURCE_SELECTOR: &str = "[data-connection-source]";

/// Connection drop targets on a card.
pub const CONNECTION_TARGET_SELECTOR: &str = "[data-connection-target]";

/// The transformed child of the canvas.
pub const CANVAS_CONTROLLER_SELECTOR: &str = "[data-canvas-controller]";

/// The background grid layer.
pub const CANVAS_GRID_SELECTOR: &str = "#canvas-grid";

/// Id of the canvas element whose `data-zoom` cards read while dragging.
pub const CANVAS_ELEMENT_ID: &str = "plan-canvas";

/// Drag handle inside a card.
pub const CARD_HANDLE_SELECTOR: &str = ".cursor-move";

/// Drag handle inside a sortable tag row.
pub const SORT_HANDLE_SELECTOR: &str = "[data-drag-handle]";

/// Class applied to the placeholder while a tag row is dragged.
pub const SORT_GHOST_CLASS: &str = "opacity-50";

/// Status text element inside the save indicator.
pub const SAVE_STATUS_SELECTOR: &str = "#save-status";

// ── Labels ──────────────────────────────────────────────────────

/// Prompt message for the courses subtask prompt.
pub const COURSES_PROMPT_MESSAGE: &str = "Add to courses:";

/// Fullscreen button label while not fullscreen.
pub const FULLSCREEN_ENTER_LABEL: &str = "[FULLSCREEN]";

/// Fullscreen button label while fullscreen.
pub const FULLSCREEN_EXIT_LABEL: &str = "[EXIT FS]";
