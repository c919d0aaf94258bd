// KramerPrefs - core/mod.rs
//
// Core business logic layer: data model, messages, controller.
// Dependencies: standard library, serde, chrono, util.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod controller;
pub mod message;
pub mod model;
