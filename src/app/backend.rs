// KramerPrefs - app/backend.rs
//
// The preferences service as seen by the panel. `HttpBackend` is the real
// implementation; tests substitute in-memory fakes.
//
// `execute` is the bridge between the controller's `Command`s and the
// backend: it performs one call and wraps the result in the matching
// outcome message, so every issued command is answered exactly once.

use crate::core::message::{Command, PanelMessage};
use crate::core::model::{KeywordList, PreferenceKey, PreferenceSet};
use crate::util::constants::{
    PATH_KEYWORDS_ADD, PATH_KEYWORDS_REMOVE, PATH_PREFERENCES, PATH_TEST_NOTIFICATION,
};
use crate::util::error::ApiError;

/// Remote preferences/keywords service.
///
/// Every call carries `identity`, the opaque host token proving the user.
/// Implementations must be shareable across the per-request worker threads.
pub trait PreferencesBackend: Send + Sync {
    fn fetch_preferences(&self, identity: &str) -> Result<PreferenceSet, ApiError>;

    fn update_preference(
        &self,
        identity: &str,
        key: PreferenceKey,
        value: bool,
    ) -> Result<(), ApiError>;

    fn add_keyword(&self, identity: &str, keyword: &str) -> Result<KeywordList, ApiError>;

    fn remove_keyword(&self, identity: &str, keyword: &str) -> Result<KeywordList, ApiError>;

    fn send_test_notification(&self, identity: &str) -> Result<(), ApiError>;
}

/// Run one command against `backend` and produce its outcome message.
pub fn execute(
    backend: &dyn PreferencesBackend,
    command: Command,
    identity: &str,
) -> PanelMessage {
    match command {
        Command::FetchPreferences => {
            PanelMessage::PreferencesLoaded(backend.fetch_preferences(identity))
        }
        Command::UpdatePreference {
            key,
            value,
            previous,
            seq,
        } => PanelMessage::PreferenceUpdated {
            key,
            previous,
            seq,
            result: backend.update_preference(identity, key, value),
        },
        Command::AddKeyword(keyword) => {
            let result = backend.add_keyword(identity, &keyword);
            PanelMessage::KeywordAdded { keyword, result }
        }
        Command::RemoveKeyword(keyword) => {
            let result = backend.remove_keyword(identity, &keyword);
            PanelMessage::KeywordRemoved { keyword, result }
        }
        Command::SendTestNotification => {
            PanelMessage::TestNotificationSent(backend.send_test_notification(identity))
        }
    }
}

/// Outcome for a command that never reached the backend (e.g. its request
/// thread could not be started). Reported as a transport failure.
pub fn failure_outcome(command: Command, detail: String) -> PanelMessage {
    let endpoint = endpoint_of(&command);
    let error = ApiError::Transport { endpoint, detail };
    match command {
        Command::FetchPreferences => PanelMessage::PreferencesLoaded(Err(error)),
        Command::UpdatePreference {
            key, previous, seq, ..
        } => PanelMessage::PreferenceUpdated {
            key,
            previous,
            seq,
            result: Err(error),
        },
        Command::AddKeyword(keyword) => PanelMessage::KeywordAdded {
            keyword,
            result: Err(error),
        },
        Command::RemoveKeyword(keyword) => PanelMessage::KeywordRemoved {
            keyword,
            result: Err(error),
        },
        Command::SendTestNotification => PanelMessage::TestNotificationSent(Err(error)),
    }
}

fn endpoint_of(command: &Command) -> &'static str {
    match command {
        Command::FetchPreferences | Command::UpdatePreference { .. } => PATH_PREFERENCES,
        Command::AddKeyword(_) => PATH_KEYWORDS_ADD,
        Command::RemoveKeyword(_) => PATH_KEYWORDS_REMOVE,
        Command::SendTestNotification => PATH_TEST_NOTIFICATION,
    }
}
