// KramerPrefs - ui/theme.rs
//
// Colour scheme, host theme application, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::ThemeParams;
use egui::Color32;

/// Default error-region text colour.
pub const ERROR_COLOUR: Color32 = Color32::from_rgb(220, 53, 69); // Bootstrap danger
/// Success banner text colour.
pub const SUCCESS_COLOUR: Color32 = Color32::from_rgb(40, 167, 69); // Bootstrap success
/// Hint text when the host supplies none.
pub const DEFAULT_HINT_COLOUR: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500

/// Layout constants.
pub const WINDOW_SIZE: [f32; 2] = [480.0, 720.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [360.0, 480.0];
pub const SECTION_SPACING: f32 = 12.0;
pub const KEYWORD_INPUT_WIDTH: f32 = 220.0;

/// Colours the panels need beyond egui's visuals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub hint: Color32,
    pub error: Color32,
    pub success: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            hint: DEFAULT_HINT_COLOUR,
            error: ERROR_COLOUR,
            success: SUCCESS_COLOUR,
        }
    }
}

impl Palette {
    pub fn from_theme(theme: Option<&ThemeParams>) -> Self {
        let hint = theme
            .and_then(|t| t.hint_color.as_deref())
            .and_then(parse_hex)
            .unwrap_or(DEFAULT_HINT_COLOUR);
        Self {
            hint,
            ..Self::default()
        }
    }
}

/// Parse `#rrggbb`. Anything else is `None`.
pub fn parse_hex(value: &str) -> Option<Color32> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Perceived-luminance test used to pick the dark or light base visuals.
pub fn is_dark(colour: Color32) -> bool {
    let luma = 0.299 * colour.r() as f32 + 0.587 * colour.g() as f32 + 0.114 * colour.b() as f32;
    luma < 128.0
}

/// Apply host colour overrides to the egui context. No-op without a theme.
pub fn apply(ctx: &egui::Context, theme: Option<&ThemeParams>) {
    let Some(theme) = theme else {
        return;
    };
    let colour = |value: &Option<String>| value.as_deref().and_then(parse_hex);

    let bg = colour(&theme.bg_color);
    let mut visuals = match bg {
        Some(bg) if is_dark(bg) => egui::Visuals::dark(),
        Some(_) => egui::Visuals::light(),
        None => ctx.style().visuals.clone(),
    };

    if let Some(bg) = bg {
        visuals.panel_fill = bg;
        visuals.window_fill = bg;
    }
    if let Some(text) = colour(&theme.text_color) {
        visuals.override_text_color = Some(text);
    }
    if let Some(button) = colour(&theme.button_color) {
        visuals.widgets.inactive.weak_bg_fill = button;
        visuals.widgets.inactive.bg_fill = button;
        visuals.widgets.hovered.weak_bg_fill = button.gamma_multiply(0.9);
        visuals.selection.bg_fill = button;
    }
    if let Some(button_text) = colour(&theme.button_text_color) {
        visuals.widgets.inactive.fg_stroke.color = button_text;
        visuals.widgets.hovered.fg_stroke.color = button_text;
    }

    ctx.set_visuals(visuals);
    tracing::debug!("Host theme applied");
}
