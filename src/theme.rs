//! Theme mode, derived palette and shared styling helpers.
//! Colors that change with the mode live on [`Palette`]; sizes and
//! mode-independent colors are constants here.

use egui::Color32;
use serde::{Deserialize, Serialize};

// =============================================================================
// COLORS - Mode independent
// =============================================================================
pub const PRIMARY: Color32 = Color32::from_rgb(0x19, 0x76, 0xd2); // blue-700
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf4, 0x43, 0x36); // red-500
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50); // green-500
pub const ON_PRIMARY: Color32 = Color32::WHITE;

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_DISPLAY: f32 = 30.0;
pub const FONT_TITLE: f32 = 20.0;
pub const FONT_HEADING: f32 = 17.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 12.0;
pub const FONT_CAPTION: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const DRAWER_WIDTH: f32 = 240.0;
pub const APP_BAR_HEIGHT: f32 = 52.0;
pub const NAV_ITEM_HEIGHT: f32 = 44.0;
pub const NAV_ACCENT_WIDTH: f32 = 4.0;
pub const LOCK_BUTTON_SIZE: f32 = 220.0;
pub const LOCK_BUTTON_HOVER_SCALE: f32 = 1.05;
pub const STATUS_DOT_SIZE: f32 = 12.0;
pub const SWITCH_SIZE: (f32, f32) = (36.0, 20.0);

// =============================================================================
// CORNER RADIUS / SPACING
// =============================================================================
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 16.0;
pub const SPACING_XL: f32 = 24.0;
pub const SPACING_XXL: f32 = 32.0;

// =============================================================================
// MODE
// =============================================================================

/// Light or dark appearance. Stored as `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Map the OS preference reported by the windowing backend. Unknown means light.
    pub fn from_system(system: Option<egui::Theme>) -> Self {
        match system {
            Some(egui::Theme::Dark) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn egui_theme(self) -> egui::Theme {
        match self {
            ThemeMode::Light => egui::Theme::Light,
            ThemeMode::Dark => egui::Theme::Dark,
        }
    }

    /// Label of the switch row: it names the mode the switch leads to.
    pub fn switch_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark Mode",
            ThemeMode::Dark => "Light Mode",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

/// Saved preference wins, then the system preference.
pub fn resolve_initial_mode(saved: Option<ThemeMode>, system: Option<egui::Theme>) -> ThemeMode {
    saved.unwrap_or_else(|| ThemeMode::from_system(system))
}

// =============================================================================
// PALETTE
// =============================================================================

/// Colors derived from a [`ThemeMode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color32,
    pub background: Color32,
    pub paper: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub drawer_bg: Color32,
    pub divider: Color32,
    pub nav_selected: Color32,
    pub nav_hover: Color32,
    pub error: Color32,
    pub success: Color32,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                primary: PRIMARY,
                background: Color32::from_rgb(0x12, 0x12, 0x12),
                paper: Color32::from_rgb(0x1e, 0x1e, 0x1e),
                text_primary: Color32::WHITE,
                text_secondary: Color32::from_rgb(0xb0, 0xb0, 0xb0),
                drawer_bg: Color32::from_rgb(0x1a, 0x1a, 0x1a),
                divider: Color32::from_rgb(0x33, 0x33, 0x33),
                nav_selected: Color32::from_rgba_unmultiplied(0x19, 0x76, 0xd2, 41), // 16%
                nav_hover: Color32::from_white_alpha(20),
                error: STATUS_ERROR,
                success: STATUS_SUCCESS,
            },
            ThemeMode::Light => Self {
                primary: PRIMARY,
                background: Color32::from_rgb(0xf8, 0xf9, 0xfa),
                paper: Color32::WHITE,
                text_primary: Color32::from_rgb(0x33, 0x33, 0x33),
                text_secondary: Color32::from_rgb(0x66, 0x66, 0x66),
                drawer_bg: Color32::from_rgb(0xf8, 0xf9, 0xfa),
                divider: Color32::from_rgb(0xe0, 0xe0, 0xe0),
                nav_selected: Color32::from_rgba_unmultiplied(0x19, 0x76, 0xd2, 20), // 8%
                nav_hover: Color32::from_black_alpha(10),
                error: STATUS_ERROR,
                success: STATUS_SUCCESS,
            },
        }
    }
}

/// Current mode plus the palette derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeState {
    mode: ThemeMode,
    palette: Palette,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            palette: Palette::for_mode(mode),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Flip the mode and recompute the palette. Returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        *self = Self::new(self.mode.toggled());
        self.mode
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_theme(self.mode.egui_theme());
        apply_visuals(ctx, self.mode, &self.palette);
    }
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, mode: ThemeMode, palette: &Palette) {
    let mut visuals = match mode {
        ThemeMode::Dark => egui::Visuals::dark(),
        ThemeMode::Light => egui::Visuals::light(),
    };

    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.paper;
    visuals.extreme_bg_color = palette.background;
    visuals.faint_bg_color = palette.paper;
    visuals.hyperlink_color = palette.primary;
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);

    visuals.selection.bg_fill = palette.primary.linear_multiply(0.3);
    visuals.selection.stroke.color = palette.primary;

    visuals.widgets.noninteractive.fg_stroke.color = palette.text_primary;
    visuals.widgets.noninteractive.bg_stroke.color = palette.divider;
    visuals.widgets.inactive.fg_stroke.color = palette.text_primary;
    visuals.widgets.inactive.bg_stroke.color = palette.divider;
    visuals.widgets.hovered.fg_stroke.color = palette.text_primary;
    visuals.widgets.active.fg_stroke.color = palette.text_primary;

    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.paper)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, palette.divider))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
        .shadow(egui::epaint::Shadow {
            offset: [0, 1],
            blur: 4,
            spread: 0,
            color: Color32::from_black_alpha(20),
        })
}

pub fn drawer_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.drawer_bg)
        .inner_margin(egui::Margin::same(0))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, palette.divider))
}

pub fn app_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(PRIMARY)
        .inner_margin(egui::Margin::symmetric(SPACING_LG as i8, 0))
        .shadow(egui::epaint::Shadow {
            offset: [0, 2],
            blur: 4,
            spread: 0,
            color: Color32::from_black_alpha(40),
        })
}

pub fn footer_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.background)
        .inner_margin(egui::Margin::symmetric(SPACING_XL as i8, SPACING_LG as i8))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, palette.divider))
}

pub fn content_frame(palette: &Palette, compact: bool) -> egui::Frame {
    let margin = if compact { SPACING_LG } else { SPACING_XXL };
    egui::Frame::new()
        .fill(palette.background)
        .inner_margin(egui::Margin::same(margin as i8))
}

// =============================================================================
// HELPER - Interaction feedback
// =============================================================================

/// Returns (fill, draw_rect) for a custom-painted control with hover/press effects.
/// Darkens on hover, darkens further and shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (darken(base_fill, 0.2), rect.shrink(1.5))
    } else if response.hovered() {
        (darken(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

pub fn darken(c: Color32, amount: f32) -> Color32 {
    let scale = 1.0 - amount.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (c.r() as f32 * scale) as u8,
        (c.g() as f32 * scale) as u8,
        (c.b() as f32 * scale) as u8,
        c.a(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_preference_beats_system() {
        assert_eq!(
            resolve_initial_mode(Some(ThemeMode::Light), Some(egui::Theme::Dark)),
            ThemeMode::Light
        );
        assert_eq!(
            resolve_initial_mode(Some(ThemeMode::Dark), Some(egui::Theme::Light)),
            ThemeMode::Dark
        );
    }

    #[test]
    fn test_system_preference_used_without_saved() {
        assert_eq!(resolve_initial_mode(None, Some(egui::Theme::Dark)), ThemeMode::Dark);
        assert_eq!(resolve_initial_mode(None, Some(egui::Theme::Light)), ThemeMode::Light);
        assert_eq!(resolve_initial_mode(None, None), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_recomputes_palette() {
        let mut state = ThemeState::new(ThemeMode::Light);
        let light_bg = state.palette().background;

        assert_eq!(state.toggle(), ThemeMode::Dark);
        assert!(state.is_dark());
        assert_eq!(*state.palette(), Palette::for_mode(ThemeMode::Dark));
        assert_ne!(state.palette().background, light_bg);
        assert_ne!(state.palette().text_primary, Palette::for_mode(ThemeMode::Light).text_primary);

        assert_eq!(state.toggle(), ThemeMode::Light);
        assert_eq!(state.palette().background, light_bg);
    }

    #[test]
    fn test_switch_label_names_target_mode() {
        assert_eq!(ThemeMode::Light.switch_label(), "Dark Mode");
        assert_eq!(ThemeMode::Dark.switch_label(), "Light Mode");
    }

    #[test]
    fn test_apply_sets_egui_dark_mode() {
        let ctx = egui::Context::default();

        ThemeState::new(ThemeMode::Dark).apply(&ctx);
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.panel_fill, Palette::for_mode(ThemeMode::Dark).background);

        ThemeState::new(ThemeMode::Light).apply(&ctx);
        assert!(!ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.panel_fill, Palette::for_mode(ThemeMode::Light).background);
    }

    #[test]
    fn test_darken_keeps_alpha() {
        let c = darken(Color32::from_rgb(200, 100, 50), 0.5);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (100, 50, 25, 255));
    }
}
