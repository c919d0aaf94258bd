// KramerPrefs - util/constants.rs
//
// Single source of truth for all named constants, wire names, and
// user-facing strings.

use std::time::Duration;

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "KramerPrefs";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "KramerPrefs";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file name, resolved one level above the platform config dir.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log level when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Backend
// =============================================================================

/// Base URL used when neither the CLI nor config.toml supply one.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080/api";

/// Header carrying the host identity token on every request.
pub const IDENTITY_HEADER: &str = "X-Telegram-Init-Data";

/// Substituted when the host supplies no identity token.
/// Degraded/test mode only; the backend must never accept it in production.
pub const PLACEHOLDER_IDENTITY: &str = "dummy-init-data-for-testing";

pub const PATH_PREFERENCES: &str = "/preferences";
pub const PATH_KEYWORDS_ADD: &str = "/keywords/add";
pub const PATH_KEYWORDS_REMOVE: &str = "/keywords/remove";
pub const PATH_TEST_NOTIFICATION: &str = "/test";

// =============================================================================
// User-facing text
// =============================================================================

pub const MSG_LOAD_FAILED: &str = "Could not load your preferences. Please try again later.";
pub const MSG_ADD_FALLBACK: &str = "Could not add keyword.";
pub const MSG_REMOVE_FALLBACK: &str = "Could not remove keyword.";
pub const MSG_TEST_FALLBACK: &str = "Could not send test notification.";
pub const MSG_TEST_SENT: &str = "Test notification sent!";
pub const MSG_NO_KEYWORDS: &str = "No keywords added yet.";

/// Prefix applied to every message shown in the error region.
pub const ERROR_PREFIX: &str = "Error: ";

pub const LABEL_TEST_IDLE: &str = "Send Test Notification";
pub const LABEL_TEST_BUSY: &str = "Sending...";

// =============================================================================
// Timing
// =============================================================================

/// How long the success banner stays visible before it is dismissed.
pub const BANNER_DURATION: Duration = Duration::from_secs(3);

/// Repaint cadence while requests are outstanding or a banner is pending.
pub const IN_FLIGHT_REPAINT_MS: u64 = 100;
