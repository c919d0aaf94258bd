// KramerPrefs - core/message.rs
//
// The two vocabularies of the controller:
//   - `PanelMessage`: everything that can change panel state. UI events
//     from the panels and outcomes of backend calls both arrive here.
//   - `Command`: side effects the controller asks the context to perform.
//     Each command produces exactly one outcome message when it completes.

use crate::core::model::{KeywordList, PreferenceKey, PreferenceSet};
use crate::util::error::ApiError;

/// Input to `PanelController::update`.
#[derive(Debug)]
pub enum PanelMessage {
    // ---- UI events -------------------------------------------------------
    /// Startup, or the Reload control in the error view.
    Initialize,

    /// A preference toggle was flipped to `value`.
    ToggleChanged { key: PreferenceKey, value: bool },

    /// The keyword input box was edited.
    KeywordInputChanged(String),

    /// Add button clicked or Enter pressed in the keyword input.
    AddKeywordRequested,

    /// Remove control clicked; carries the exact keyword bound at render time.
    RemoveKeywordRequested(String),

    /// Test notification button clicked.
    TestNotificationRequested,

    // ---- Backend outcomes ------------------------------------------------
    PreferencesLoaded(Result<PreferenceSet, ApiError>),

    PreferenceUpdated {
        key: PreferenceKey,
        previous: bool,
        seq: u64,
        result: Result<(), ApiError>,
    },

    KeywordAdded {
        keyword: String,
        result: Result<KeywordList, ApiError>,
    },

    KeywordRemoved {
        keyword: String,
        result: Result<KeywordList, ApiError>,
    },

    TestNotificationSent(Result<(), ApiError>),
}

/// A backend request issued by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchPreferences,

    /// `previous` and `seq` are echoed back in the outcome so a failure can
    /// be reverted only if no newer toggle of the same key was issued.
    UpdatePreference {
        key: PreferenceKey,
        value: bool,
        previous: bool,
        seq: u64,
    },

    AddKeyword(String),

    RemoveKeyword(String),

    SendTestNotification,
}

impl Command {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Command::FetchPreferences => "fetch_preferences",
            Command::UpdatePreference { .. } => "update_preference",
            Command::AddKeyword(_) => "add_keyword",
            Command::RemoveKeyword(_) => "remove_keyword",
            Command::SendTestNotification => "send_test_notification",
        }
    }
}
