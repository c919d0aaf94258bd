// KramerPrefs - ui/panels/mod.rs

pub mod keywords;
pub mod notice;
pub mod test_notification;
pub mod toggles;
