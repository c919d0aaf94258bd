// KramerPrefs - app/mod.rs
//
// Application layer: backend client, host environment, request worker,
// and the context that wires them to the controller.
// Dependencies: core layer, util.
// Must NOT depend on: ui, egui.

pub mod backend;
pub mod context;
pub mod host;
pub mod http;
pub mod worker;
