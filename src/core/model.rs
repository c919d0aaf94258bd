// KramerPrefs - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers, and double as
// the JSON wire shapes of the preferences backend.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Preference set (full snapshot returned by GET /preferences)
// =============================================================================

/// The full snapshot of a user's notification settings and keyword filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSet {
    /// Good deals from OzBargain.
    pub ozb_good: bool,
    /// Super deals from OzBargain.
    pub ozb_super: bool,
    /// Amazon daily deals.
    pub amz_daily: bool,
    /// Amazon weekly deals.
    pub amz_weekly: bool,
    /// Keyword filters, in server order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,
}

impl PreferenceSet {
    /// Current value of one boolean preference.
    pub fn get(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::OzbGood => self.ozb_good,
            PreferenceKey::OzbSuper => self.ozb_super,
            PreferenceKey::AmzDaily => self.amz_daily,
            PreferenceKey::AmzWeekly => self.amz_weekly,
        }
    }

    /// Overwrite one boolean preference.
    pub fn set(&mut self, key: PreferenceKey, value: bool) {
        let field = match key {
            PreferenceKey::OzbGood => &mut self.ozb_good,
            PreferenceKey::OzbSuper => &mut self.ozb_super,
            PreferenceKey::AmzDaily => &mut self.amz_daily,
            PreferenceKey::AmzWeekly => &mut self.amz_weekly,
        };
        *field = value;
    }
}

/// Body of the add/remove keyword responses: the authoritative list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,
}

/// The backend encodes an empty list as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Preference keys
// =============================================================================

/// The four boolean notification preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    OzbGood,
    OzbSuper,
    AmzDaily,
    AmzWeekly,
}

impl PreferenceKey {
    /// All keys in display order.
    pub fn all() -> &'static [PreferenceKey] {
        &[
            PreferenceKey::OzbGood,
            PreferenceKey::OzbSuper,
            PreferenceKey::AmzDaily,
            PreferenceKey::AmzWeekly,
        ]
    }

    /// Field name used on the wire and in user-facing error text.
    pub fn wire_name(self) -> &'static str {
        match self {
            PreferenceKey::OzbGood => "ozbGood",
            PreferenceKey::OzbSuper => "ozbSuper",
            PreferenceKey::AmzDaily => "amzDaily",
            PreferenceKey::AmzWeekly => "amzWeekly",
        }
    }

    /// Label shown next to the toggle.
    pub fn label(self) -> &'static str {
        match self {
            PreferenceKey::OzbGood => "OzBargain good deals",
            PreferenceKey::OzbSuper => "OzBargain super deals",
            PreferenceKey::AmzDaily => "Amazon daily deals",
            PreferenceKey::AmzWeekly => "Amazon weekly deals",
        }
    }

    /// Position in `all()`, used to index per-key bookkeeping arrays.
    pub fn index(self) -> usize {
        match self {
            PreferenceKey::OzbGood => 0,
            PreferenceKey::OzbSuper => 1,
            PreferenceKey::AmzDaily => 2,
            PreferenceKey::AmzWeekly => 3,
        }
    }
}

impl std::fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

// =============================================================================
// Keywords
// =============================================================================

/// Normalise raw keyword input: trim surrounding whitespace and lower-case.
///
/// Returns `None` when nothing is left, in which case no request is made.
/// Uniqueness is the backend's concern.
pub fn normalize_keyword(raw: &str) -> Option<String> {
    let keyword = raw.trim().to_lowercase();
    (!keyword.is_empty()).then_some(keyword)
}

// =============================================================================
// Host theme
// =============================================================================

/// Optional colour overrides supplied by the host, as `#rrggbb` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeParams {
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
    pub hint_color: Option<String>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
}

impl ThemeParams {
    /// True when no colour is set.
    pub fn is_empty(&self) -> bool {
        self.bg_color.is_none()
            && self.text_color.is_none()
            && self.hint_color.is_none()
            && self.button_color.is_none()
            && self.button_text_color.is_none()
    }
}
