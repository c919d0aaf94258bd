// KramerPrefs - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories crate, toml.
// Must NOT depend on: app, ui.

pub mod config;
