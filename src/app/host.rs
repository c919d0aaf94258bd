// KramerPrefs - app/host.rs
//
// The surrounding host runtime: identity, viewport and theming primitives.
//
// The panel only consumes this contract; the desktop binary provides an
// implementation bound to the eframe viewport (see gui.rs), and tests use
// recording fakes.

use crate::core::model::ThemeParams;
use crate::util::constants::PLACEHOLDER_IDENTITY;

pub trait HostEnvironment {
    /// Tell the host the panel has finished booting. Sent once at startup.
    fn signal_ready(&self);

    /// Ask the host for the full viewport. Sent once at startup.
    fn request_expand(&self);

    /// Opaque per-session identity token, if the host has one.
    fn identity_token(&self) -> Option<String>;

    /// Optional colour overrides.
    fn theme_params(&self) -> Option<ThemeParams>;
}

/// Identity values read from the CLI / config.toml, shared by host
/// implementations that have no runtime source of their own.
#[derive(Debug, Clone, Default)]
pub struct HostSettings {
    pub identity_token: Option<String>,
    pub theme: Option<ThemeParams>,
}

/// The token to attach to requests, substituting the placeholder when the
/// host has none (degraded/test mode).
pub fn resolve_identity(host: &dyn HostEnvironment) -> String {
    match host.identity_token().filter(|t| !t.trim().is_empty()) {
        Some(token) => token,
        None => {
            tracing::warn!(
                "Host supplied no identity token; using placeholder (test mode only)"
            );
            PLACEHOLDER_IDENTITY.to_string()
        }
    }
}
