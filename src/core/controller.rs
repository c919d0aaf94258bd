// KramerPrefs - core/controller.rs
//
// Preferences panel controller: the single owner of panel state.
//
// Every state change goes through `PanelController::update`, which takes a
// `PanelMessage` (UI event or backend outcome) and returns the `Command`s the
// context must execute. Because outcomes are applied one message at a time on
// the UI thread, overlapping requests can never interleave partial writes;
// whichever response arrives last wins.
//
// The controller performs no I/O and holds no handles, so it is driven
// directly by the unit tests below.

use crate::core::message::{Command, PanelMessage};
use crate::core::model::{normalize_keyword, PreferenceKey, PreferenceSet};
use crate::util::constants::{
    BANNER_DURATION, ERROR_PREFIX, LABEL_TEST_BUSY, LABEL_TEST_IDLE, MSG_ADD_FALLBACK,
    MSG_LOAD_FAILED, MSG_NO_KEYWORDS, MSG_REMOVE_FALLBACK, MSG_TEST_FALLBACK, MSG_TEST_SENT,
};
use crate::util::error::ApiError;
use chrono::{DateTime, Local};
use std::time::Instant;

// =============================================================================
// View model types
// =============================================================================

/// Which content region is visible. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// Content of the shared message region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub shown_at: Instant,
}

impl Notice {
    /// Text as rendered: errors carry the `Error: ` prefix, banners do not.
    pub fn display_text(&self) -> String {
        match self.kind {
            NoticeKind::Error => format!("{ERROR_PREFIX}{}", self.text),
            NoticeKind::Success => self.text.clone(),
        }
    }
}

/// What the keyword list should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordRows<'a> {
    /// Empty list: a single inactive hint line.
    Placeholder(&'static str),
    /// One row per keyword, each with its own remove control.
    Entries(&'a [String]),
}

// =============================================================================
// Controller
// =============================================================================

#[derive(Debug)]
pub struct PanelController {
    view: ViewState,
    prefs: PreferenceSet,
    notice: Option<Notice>,
    keyword_input: String,
    adding_keyword: bool,
    sending_test: bool,
    /// Sequence number of the latest toggle issued per key (0 = none since
    /// the last load).
    toggle_seq: [u64; 4],
    next_seq: u64,
    last_synced: Option<DateTime<Local>>,
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelController {
    pub fn new() -> Self {
        Self {
            view: ViewState::Loading,
            prefs: PreferenceSet::default(),
            notice: None,
            keyword_input: String::new(),
            adding_keyword: false,
            sending_test: false,
            toggle_seq: [0; 4],
            next_seq: 1,
            last_synced: None,
        }
    }

    // ---- read access for the UI -----------------------------------------

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.prefs
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn keyword_input(&self) -> &str {
        &self.keyword_input
    }

    pub fn keyword_rows(&self) -> KeywordRows<'_> {
        if self.prefs.keywords.is_empty() {
            KeywordRows::Placeholder(MSG_NO_KEYWORDS)
        } else {
            KeywordRows::Entries(&self.prefs.keywords)
        }
    }

    pub fn add_enabled(&self) -> bool {
        !self.adding_keyword
    }

    pub fn test_enabled(&self) -> bool {
        !self.sending_test
    }

    pub fn test_label(&self) -> &'static str {
        if self.sending_test {
            LABEL_TEST_BUSY
        } else {
            LABEL_TEST_IDLE
        }
    }

    /// Local time of the last successful backend response.
    pub fn last_synced(&self) -> Option<DateTime<Local>> {
        self.last_synced
    }

    /// True while a success banner is waiting to be dismissed.
    pub fn banner_pending(&self) -> bool {
        matches!(&self.notice, Some(n) if n.kind == NoticeKind::Success)
    }

    // ---- state transitions ----------------------------------------------

    /// Apply one message. Returns the backend requests to issue, in order.
    pub fn update(&mut self, message: PanelMessage) -> Vec<Command> {
        match message {
            PanelMessage::Initialize => {
                tracing::debug!("Loading preferences");
                self.view = ViewState::Loading;
                self.notice = None;
                vec![Command::FetchPreferences]
            }

            PanelMessage::ToggleChanged { key, value } => {
                let previous = self.prefs.get(key);
                self.prefs.set(key, value);
                let seq = self.next_seq;
                self.next_seq += 1;
                self.toggle_seq[key.index()] = seq;
                tracing::info!(key = %key, value, "Updating preference");
                vec![Command::UpdatePreference {
                    key,
                    value,
                    previous,
                    seq,
                }]
            }

            PanelMessage::KeywordInputChanged(text) => {
                self.keyword_input = text;
                Vec::new()
            }

            PanelMessage::AddKeywordRequested => {
                if self.adding_keyword {
                    tracing::debug!("Add already in flight; ignoring");
                    return Vec::new();
                }
                let Some(keyword) = normalize_keyword(&self.keyword_input) else {
                    return Vec::new();
                };
                tracing::info!(keyword = %keyword, "Adding keyword");
                self.adding_keyword = true;
                vec![Command::AddKeyword(keyword)]
            }

            PanelMessage::RemoveKeywordRequested(keyword) => {
                tracing::info!(keyword = %keyword, "Removing keyword");
                vec![Command::RemoveKeyword(keyword)]
            }

            PanelMessage::TestNotificationRequested => {
                if self.sending_test {
                    return Vec::new();
                }
                tracing::info!("Sending test notification");
                self.sending_test = true;
                vec![Command::SendTestNotification]
            }

            PanelMessage::PreferencesLoaded(result) => {
                match result {
                    Ok(prefs) => {
                        tracing::info!(
                            keywords = prefs.keywords.len(),
                            "Preferences loaded"
                        );
                        self.prefs = prefs;
                        // Outstanding toggles predate this snapshot and must
                        // not revert it.
                        self.toggle_seq = [0; 4];
                        self.view = ViewState::Ready;
                        self.mark_synced();
                    }
                    Err(e) => {
                        tracing::error!(
                            endpoint = e.endpoint(),
                            status = ?e.status_code(),
                            error = %e,
                            "Failed to fetch preferences"
                        );
                        self.show_error(MSG_LOAD_FAILED.to_string());
                    }
                }
                Vec::new()
            }

            PanelMessage::PreferenceUpdated {
                key,
                previous,
                seq,
                result,
            } => {
                match result {
                    Ok(()) => {
                        tracing::info!(key = %key, "Preference updated");
                        self.mark_synced();
                    }
                    Err(e) => {
                        tracing::error!(
                            key = %key,
                            status = ?e.status_code(),
                            error = %e,
                            "Failed to update preference"
                        );
                        if self.toggle_seq[key.index()] == seq {
                            self.prefs.set(key, previous);
                        }
                        self.show_error(format!("Failed to update {key}. Please try reloading."));
                    }
                }
                Vec::new()
            }

            PanelMessage::KeywordAdded { keyword, result } => {
                self.adding_keyword = false;
                match result {
                    Ok(list) => {
                        tracing::info!(keyword = %keyword, total = list.keywords.len(), "Keyword added");
                        self.prefs.keywords = list.keywords;
                        self.keyword_input.clear();
                        self.mark_synced();
                    }
                    Err(e) => {
                        tracing::error!(keyword = %keyword, error = %e, "Failed to add keyword");
                        self.show_error(user_message(&e, "Failed to add keyword", MSG_ADD_FALLBACK));
                    }
                }
                Vec::new()
            }

            PanelMessage::KeywordRemoved { keyword, result } => {
                match result {
                    Ok(list) => {
                        tracing::info!(keyword = %keyword, total = list.keywords.len(), "Keyword removed");
                        self.prefs.keywords = list.keywords;
                        self.mark_synced();
                    }
                    Err(e) => {
                        tracing::error!(keyword = %keyword, error = %e, "Failed to remove keyword");
                        self.show_error(user_message(
                            &e,
                            "Failed to remove keyword",
                            MSG_REMOVE_FALLBACK,
                        ));
                    }
                }
                Vec::new()
            }

            PanelMessage::TestNotificationSent(result) => {
                self.sending_test = false;
                match result {
                    Ok(()) => {
                        tracing::info!("Test notification request accepted");
                        self.mark_synced();
                        // The error view keeps its message until reload.
                        if self.view == ViewState::Error {
                            return Vec::new();
                        }
                        self.notice = Some(Notice {
                            kind: NoticeKind::Success,
                            text: MSG_TEST_SENT.to_string(),
                            shown_at: Instant::now(),
                        });
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to send test notification");
                        self.show_error(user_message(
                            &e,
                            "Failed to send test notification",
                            MSG_TEST_FALLBACK,
                        ));
                    }
                }
                Vec::new()
            }
        }
    }

    /// Dismiss an expired success banner. Returns true if anything changed.
    ///
    /// Only a banner is ever dismissed; an error shown after the banner
    /// stays until the next message replaces it.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = matches!(
            &self.notice,
            Some(n) if n.kind == NoticeKind::Success
                && now.saturating_duration_since(n.shown_at) >= BANNER_DURATION
        );
        if expired {
            self.notice = None;
        }
        expired
    }

    /// Show an error in the shared region and hide the loading/content regions.
    /// Preference data is kept; it is shown again on the next successful load.
    fn show_error(&mut self, text: String) {
        self.view = ViewState::Error;
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            text,
            shown_at: Instant::now(),
        });
    }

    fn mark_synced(&mut self) {
        self.last_synced = Some(Local::now());
    }
}

/// `"<context>: <server body>"` for protocol failures with a body, otherwise
/// the generic fallback.
fn user_message(err: &ApiError, context: &str, fallback: &str) -> String {
    match err.server_message() {
        Some(body) => format!("{context}: {body}"),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::KeywordList;
    use std::time::Duration;

    fn sample_prefs() -> PreferenceSet {
        PreferenceSet {
            ozb_good: true,
            ozb_super: false,
            amz_daily: true,
            amz_weekly: false,
            keywords: vec!["cpu".to_string(), "gpu".to_string()],
        }
    }

    fn status(endpoint: &'static str, code: u16, body: &str) -> ApiError {
        ApiError::Status {
            endpoint,
            code,
            body: body.to_string(),
        }
    }

    fn transport(endpoint: &'static str) -> ApiError {
        ApiError::Transport {
            endpoint,
            detail: "connection refused".to_string(),
        }
    }

    fn keywords(list: &[&str]) -> KeywordList {
        KeywordList {
            keywords: list.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Controller after a successful initial load of `sample_prefs()`.
    fn ready_controller() -> PanelController {
        let mut c = PanelController::new();
        assert_eq!(c.update(PanelMessage::Initialize), vec![Command::FetchPreferences]);
        c.update(PanelMessage::PreferencesLoaded(Ok(sample_prefs())));
        assert_eq!(c.view(), ViewState::Ready);
        c
    }

    // ---- initialize ------------------------------------------------------

    #[test]
    fn test_starts_loading() {
        let c = PanelController::new();
        assert_eq!(c.view(), ViewState::Loading);
        assert!(c.notice().is_none());
    }

    #[test]
    fn test_initial_load_renders_all_fields() {
        let c = ready_controller();
        let prefs = c.preferences();
        assert!(prefs.ozb_good);
        assert!(!prefs.ozb_super);
        assert!(prefs.amz_daily);
        assert!(!prefs.amz_weekly);
        match c.keyword_rows() {
            KeywordRows::Entries(rows) => assert_eq!(rows, ["cpu", "gpu"]),
            other => panic!("expected entries, got {other:?}"),
        }
        assert!(c.last_synced().is_some());
    }

    #[test]
    fn test_load_failure_shows_generic_message_only() {
        let mut c = PanelController::new();
        c.update(PanelMessage::Initialize);
        c.update(PanelMessage::PreferencesLoaded(Err(status(
            "/preferences",
            500,
            "db down",
        ))));
        assert_eq!(c.view(), ViewState::Error);
        let notice = c.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(
            notice.display_text(),
            "Error: Could not load your preferences. Please try again later."
        );
        assert!(!notice.display_text().contains("db down"));
    }

    #[test]
    fn test_reload_after_error_clears_notice() {
        let mut c = PanelController::new();
        c.update(PanelMessage::Initialize);
        c.update(PanelMessage::PreferencesLoaded(Err(transport("/preferences"))));
        assert_eq!(c.view(), ViewState::Error);

        let cmds = c.update(PanelMessage::Initialize);
        assert_eq!(cmds, vec![Command::FetchPreferences]);
        assert_eq!(c.view(), ViewState::Loading);
        assert!(c.notice().is_none());
    }

    // ---- toggles ---------------------------------------------------------

    #[test]
    fn test_toggle_success_keeps_sent_value_for_every_key() {
        let mut c = ready_controller();
        for &key in PreferenceKey::all() {
            let value = !c.preferences().get(key);
            let cmds = c.update(PanelMessage::ToggleChanged { key, value });
            let [Command::UpdatePreference {
                key: k,
                value: v,
                previous,
                seq,
            }] = cmds.as_slice()
            else {
                panic!("expected one update command, got {cmds:?}");
            };
            assert_eq!((*k, *v, *previous), (key, value, !value));
            c.update(PanelMessage::PreferenceUpdated {
                key,
                previous: *previous,
                seq: *seq,
                result: Ok(()),
            });
            assert_eq!(c.preferences().get(key), value);
        }
        assert_eq!(c.view(), ViewState::Ready);
    }

    #[test]
    fn test_toggle_failure_reverts_and_names_field() {
        let mut c = ready_controller();
        let cmds = c.update(PanelMessage::ToggleChanged {
            key: PreferenceKey::OzbSuper,
            value: true,
        });
        assert!(c.preferences().ozb_super, "optimistic update");
        let Command::UpdatePreference { previous, seq, .. } = cmds[0] else {
            panic!("unexpected command");
        };
        c.update(PanelMessage::PreferenceUpdated {
            key: PreferenceKey::OzbSuper,
            previous,
            seq,
            result: Err(status("/preferences", 500, "boom")),
        });
        assert!(!c.preferences().ozb_super, "reverted");
        assert_eq!(
            c.notice().unwrap().text,
            "Failed to update ozbSuper. Please try reloading."
        );
        // Other data survives the failure.
        assert!(c.preferences().ozb_good);
        assert_eq!(c.preferences().keywords, vec!["cpu", "gpu"]);
    }

    #[test]
    fn test_stale_toggle_failure_does_not_revert_newer_value() {
        let mut c = ready_controller();
        let first = c.update(PanelMessage::ToggleChanged {
            key: PreferenceKey::AmzWeekly,
            value: true,
        });
        let second = c.update(PanelMessage::ToggleChanged {
            key: PreferenceKey::AmzWeekly,
            value: false,
        });
        let second = second.into_iter().next();
        let Some(Command::UpdatePreference { seq: second_seq, previous: second_prev, .. }) = second
        else {
            panic!("unexpected command");
        };
        let Command::UpdatePreference { previous, seq, .. } = first[0] else {
            panic!("unexpected command");
        };

        // Second succeeds first, then the first one fails late.
        c.update(PanelMessage::PreferenceUpdated {
            key: PreferenceKey::AmzWeekly,
            previous: second_prev,
            seq: second_seq,
            result: Ok(()),
        });
        c.update(PanelMessage::PreferenceUpdated {
            key: PreferenceKey::AmzWeekly,
            previous,
            seq,
            result: Err(transport("/preferences")),
        });
        assert!(!c.preferences().amz_weekly);
        assert_eq!(c.view(), ViewState::Error);
    }

    // ---- keywords --------------------------------------------------------

    #[test]
    fn test_add_normalizes_input() {
        let mut c = ready_controller();
        c.update(PanelMessage::KeywordInputChanged("Foo Bar ".to_string()));
        let cmds = c.update(PanelMessage::AddKeywordRequested);
        assert_eq!(cmds, vec![Command::AddKeyword("foo bar".to_string())]);
        assert!(!c.add_enabled());
    }

    #[test]
    fn test_add_sends_long_keyword_untruncated() {
        let mut c = ready_controller();
        let long = "graphics card ".repeat(20);
        c.update(PanelMessage::KeywordInputChanged(long.clone()));
        let cmds = c.update(PanelMessage::AddKeywordRequested);
        assert_eq!(cmds, vec![Command::AddKeyword(long.trim().to_string())]);
        assert!(long.trim().chars().count() > 200);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut c = ready_controller();
        c.update(PanelMessage::KeywordInputChanged("   ".to_string()));
        assert!(c.update(PanelMessage::AddKeywordRequested).is_empty());
        assert!(c.add_enabled());
        assert_eq!(c.preferences().keywords, vec!["cpu", "gpu"]);
    }

    #[test]
    fn test_add_ignored_while_in_flight() {
        let mut c = ready_controller();
        c.update(PanelMessage::KeywordInputChanged("ssd".to_string()));
        assert_eq!(c.update(PanelMessage::AddKeywordRequested).len(), 1);
        assert!(c.update(PanelMessage::AddKeywordRequested).is_empty());
    }

    #[test]
    fn test_add_success_replaces_list_and_clears_input() {
        let mut c = ready_controller();
        c.update(PanelMessage::KeywordInputChanged("SSD".to_string()));
        c.update(PanelMessage::AddKeywordRequested);
        // Server order is authoritative, even if it differs from local order.
        c.update(PanelMessage::KeywordAdded {
            keyword: "ssd".to_string(),
            result: Ok(keywords(&["ssd", "cpu", "gpu"])),
        });
        assert_eq!(c.preferences().keywords, vec!["ssd", "cpu", "gpu"]);
        assert_eq!(c.keyword_input(), "");
        assert!(c.add_enabled());
    }

    #[test]
    fn test_add_failure_uses_server_message_and_reenables() {
        let mut c = ready_controller();
        c.update(PanelMessage::KeywordInputChanged("cpu".to_string()));
        c.update(PanelMessage::AddKeywordRequested);
        c.update(PanelMessage::KeywordAdded {
            keyword: "cpu".to_string(),
            result: Err(status("/keywords/add", 409, "keyword already exists")),
        });
        assert!(c.add_enabled());
        assert_eq!(
            c.notice().unwrap().text,
            "Failed to add keyword: keyword already exists"
        );
        assert_eq!(c.keyword_input(), "cpu", "input kept for retry");
        assert_eq!(c.preferences().keywords, vec!["cpu", "gpu"]);
    }

    #[test]
    fn test_add_transport_failure_uses_fallback() {
        let mut c = ready_controller();
        c.update(PanelMessage::KeywordInputChanged("ram".to_string()));
        c.update(PanelMessage::AddKeywordRequested);
        c.update(PanelMessage::KeywordAdded {
            keyword: "ram".to_string(),
            result: Err(transport("/keywords/add")),
        });
        assert!(c.add_enabled());
        assert_eq!(c.notice().unwrap().text, "Could not add keyword.");
    }

    #[test]
    fn test_remove_replaces_list_with_server_list() {
        let mut c = ready_controller();
        let cmds = c.update(PanelMessage::RemoveKeywordRequested("cpu".to_string()));
        assert_eq!(cmds, vec![Command::RemoveKeyword("cpu".to_string())]);
        c.update(PanelMessage::KeywordRemoved {
            keyword: "cpu".to_string(),
            result: Ok(keywords(&["gpu"])),
        });
        match c.keyword_rows() {
            KeywordRows::Entries(rows) => assert_eq!(rows, ["gpu"]),
            other => panic!("expected entries, got {other:?}"),
        }
    }

    #[test]
    fn test_remove_sends_exact_value() {
        let mut c = ready_controller();
        let cmds = c.update(PanelMessage::RemoveKeywordRequested(" Mixed Case ".to_string()));
        assert_eq!(cmds, vec![Command::RemoveKeyword(" Mixed Case ".to_string())]);
    }

    #[test]
    fn test_remove_last_keyword_shows_placeholder() {
        let mut c = ready_controller();
        c.update(PanelMessage::KeywordRemoved {
            keyword: "gpu".to_string(),
            result: Ok(keywords(&[])),
        });
        assert_eq!(c.keyword_rows(), KeywordRows::Placeholder("No keywords added yet."));
    }

    #[test]
    fn test_remove_failure_keeps_list() {
        let mut c = ready_controller();
        c.update(PanelMessage::KeywordRemoved {
            keyword: "cpu".to_string(),
            result: Err(status("/keywords/remove", 404, "")),
        });
        assert_eq!(c.notice().unwrap().text, "Could not remove keyword.");
        assert_eq!(c.preferences().keywords, vec!["cpu", "gpu"]);
    }

    // ---- test notification ----------------------------------------------

    #[test]
    fn test_notification_busy_label_then_restored_on_success() {
        let mut c = ready_controller();
        assert_eq!(c.test_label(), "Send Test Notification");
        let cmds = c.update(PanelMessage::TestNotificationRequested);
        assert_eq!(cmds, vec![Command::SendTestNotification]);
        assert!(!c.test_enabled());
        assert_eq!(c.test_label(), "Sending...");

        c.update(PanelMessage::TestNotificationSent(Ok(())));
        assert!(c.test_enabled());
        assert_eq!(c.test_label(), "Send Test Notification");
        let notice = c.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.display_text(), "Test notification sent!");
        assert_eq!(c.view(), ViewState::Ready, "banner does not hide content");
    }

    #[test]
    fn test_notification_restored_on_failure() {
        let mut c = ready_controller();
        c.update(PanelMessage::TestNotificationRequested);
        c.update(PanelMessage::TestNotificationSent(Err(status("/test", 503, "bot offline"))));
        assert!(c.test_enabled());
        assert_eq!(c.test_label(), "Send Test Notification");
        assert_eq!(
            c.notice().unwrap().display_text(),
            "Error: Failed to send test notification: bot offline"
        );
    }

    #[test]
    fn test_banner_dismissed_after_duration() {
        let mut c = ready_controller();
        c.update(PanelMessage::TestNotificationRequested);
        c.update(PanelMessage::TestNotificationSent(Ok(())));
        let shown_at = c.notice().unwrap().shown_at;

        assert!(!c.tick(shown_at + Duration::from_secs(1)));
        assert!(c.banner_pending());
        assert!(c.tick(shown_at + BANNER_DURATION));
        assert!(c.notice().is_none());
    }

    #[test]
    fn test_banner_expiry_never_hides_later_error() {
        let mut c = ready_controller();
        c.update(PanelMessage::TestNotificationRequested);
        c.update(PanelMessage::TestNotificationSent(Ok(())));
        c.update(PanelMessage::RemoveKeywordRequested("cpu".to_string()));
        c.update(PanelMessage::KeywordRemoved {
            keyword: "cpu".to_string(),
            result: Err(transport("/keywords/remove")),
        });
        assert!(!c.tick(Instant::now() + Duration::from_secs(10)));
        assert_eq!(c.notice().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn test_notification_success_keeps_error_view_message() {
        let mut c = ready_controller();
        c.update(PanelMessage::TestNotificationRequested);
        c.update(PanelMessage::ToggleChanged {
            key: PreferenceKey::OzbGood,
            value: false,
        });
        c.update(PanelMessage::PreferenceUpdated {
            key: PreferenceKey::OzbGood,
            previous: true,
            seq: 1,
            result: Err(status("/preferences", 500, "")),
        });
        assert_eq!(c.view(), ViewState::Error);

        c.update(PanelMessage::TestNotificationSent(Ok(())));
        assert!(c.test_enabled());
        assert!(!c.banner_pending());
        assert!(!c.tick(Instant::now() + Duration::from_secs(10)));
        let notice = c.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Failed to update ozbGood. Please try reloading.");
    }

    #[test]
    fn test_later_error_overwrites_earlier() {
        let mut c = ready_controller();
        c.update(PanelMessage::KeywordRemoved {
            keyword: "cpu".to_string(),
            result: Err(transport("/keywords/remove")),
        });
        c.update(PanelMessage::TestNotificationSent(Err(transport("/test"))));
        assert_eq!(c.notice().unwrap().text, "Could not send test notification.");
    }
}
