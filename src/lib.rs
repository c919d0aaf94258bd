// KramerPrefs - lib.rs
//
// Library entry point, exposing all non-GUI modules for integration testing.
//
// The eframe app and desktop host live in `gui.rs`, compiled into the binary
// only, and are not part of the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
