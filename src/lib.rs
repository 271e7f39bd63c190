//! Browser interaction hooks for the plan board.
//!
//! This crate is compiled to WebAssembly and runs in the browser next to a
//! server-driven page. It translates raw DOM pointer, touch, wheel, and
//! keyboard events into local visual updates (canvas pan/zoom, card
//! positions, save status) and forwards committed state to the server over
//! the page's existing socket. The server owns canonical state; nothing here
//! persists anything.
//!
//! Every hook is split in two. The core (always compiled) is a plain struct
//! whose input methods return [`action::Action`]s, so it can be tested
//! without a browser. The [`web`] bindings (feature `hydrate`) attach a core
//! to a DOM element and apply the actions it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`viewport`] | Canvas pan/zoom controller |
//! | [`card`] | Draggable card controller |
//! | [`reorder`] | Sortable tag list adapter |
//! | [`prompt`] | "Add to courses" prompt adapter |
//! | [`fullscreen`] | Fullscreen toggle |
//! | [`status`] | Save-status indicator state machine |
//! | [`action`] | Host actions returned by the cores |
//! | [`camera`] | Viewport math and CSS transform rendering |
//! | [`input`] | Input event types and target filtering |
//! | [`timer`] | Single-slot debounce deadline |
//! | [`outbound`] | Notifications sent to the server |
//! | [`attrs`] | Lenient data-attribute parsing |
//! | [`config`] | Tunables supplied by the host page |
//! | [`consts`] | Shared constants (zoom limits, selectors, labels) |
//! | [`error`] | Crate error type |

pub mod action;
pub mod attrs;
pub mod camera;
pub mod card;
pub mod config;
pub mod consts;
pub mod error;
pub mod fullscreen;
pub mod input;
pub mod outbound;
pub mod prompt;
pub mod reorder;
pub mod status;
pub mod timer;
pub mod viewport;
#[cfg(feature = "hydrate")]
pub mod web;
