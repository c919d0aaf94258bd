// KramerPrefs - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: core (read-only view model, messages), egui.
// Must NOT depend on: app, platform, direct I/O.
//
// Panels never mutate state; they push `PanelMessage`s into an outbox that
// the app routes through the controller after the frame is laid out.

pub mod panels;
pub mod theme;
