//! App module - contains the main application state and logic

mod door;
mod drawer;
mod navigation;
mod views;

pub use navigation::is_compact;

use crate::settings::Settings;
use crate::theme::{self, ThemeMode, ThemeState};
use door::DoorLock;
use eframe::egui;
use navigation::Navigation;
use std::path::PathBuf;
use tracing::{debug, info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) theme: ThemeState,
    /// Explicit user choice; `None` follows the system theme
    pub(crate) saved_theme: Option<ThemeMode>,
    pub(crate) theme_resolved: bool,
    pub(crate) door: DoorLock,
    pub(crate) nav: Navigation,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        Self::with_context(&cc.egui_ctx, settings, data_dir)
    }

    pub(crate) fn with_context(ctx: &egui::Context, settings: Settings, data_dir: PathBuf) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        ctx.set_fonts(fonts);

        let theme = ThemeState::new(settings.theme.unwrap_or_default());
        theme.apply(ctx);

        Self {
            theme,
            saved_theme: settings.theme,
            // Following the system needs the first frame's input
            theme_resolved: settings.theme.is_some(),
            door: DoorLock::new(),
            nav: Navigation::default(),
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            theme: self.saved_theme,
        };
        if let Err(e) = settings.save(&self.data_dir) {
            warn!(error = %e, "Failed to save settings");
        }
    }

    /// Pick up the OS theme once input is available, unless the user chose one.
    fn resolve_system_theme(&mut self, ctx: &egui::Context) {
        if self.theme_resolved {
            return;
        }
        self.theme_resolved = true;

        let system = ctx.input(|i| i.raw.system_theme);
        let mode = theme::resolve_initial_mode(self.saved_theme, system);
        debug!(?system, %mode, "Resolved initial theme");
        if mode != self.theme.mode() {
            self.theme = ThemeState::new(mode);
            self.theme.apply(ctx);
        }
    }

    /// Flip light/dark, restyle, and persist the choice right away.
    pub(crate) fn toggle_theme(&mut self, ctx: &egui::Context) {
        let mode = self.theme.toggle();
        self.theme.apply(ctx);
        self.saved_theme = Some(mode);
        info!(%mode, "Theme changed");
        self.save_settings();
    }

    pub(crate) fn toggle_door(&mut self) {
        self.door.toggle();
    }

    // ========================================================================
    // FRAME
    // ========================================================================

    pub(crate) fn render(&mut self, ctx: &egui::Context) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        self.resolve_system_theme(ctx);

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        let screen_width = ctx.screen_rect().width();
        let compact = is_compact(screen_width);

        if !compact || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.nav.close_drawer();
        }

        // Side/top/bottom panels must be added BEFORE CentralPanel
        if compact {
            self.render_app_bar(ctx);
        } else {
            self.render_permanent_drawer(ctx);
        }
        self.render_footer(ctx);

        let palette = *self.theme.palette();
        egui::CentralPanel::default()
            .frame(theme::content_frame(&palette, compact))
            .show(ctx, |ui| match self.nav.page() {
                crate::types::Page::Home => self.render_home_page(ui),
                crate::types::Page::Instructions => {
                    self.render_instructions_page(ui, screen_width)
                }
            });

        if compact && self.nav.drawer_open() {
            self.render_drawer_overlay(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LockState, Page};
    use crate::ui::components;
    use tempfile::TempDir;

    const WIDE: f32 = 1280.0;
    const COMPACT: f32 = 480.0;

    fn raw_input(width: f32, height: f32) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, height),
            )),
            ..Default::default()
        }
    }

    fn test_app(ctx: &egui::Context, dir: &TempDir, settings: Settings) -> App {
        App::with_context(ctx, settings, dir.path().to_path_buf())
    }

    #[test]
    fn test_toggle_theme_persists_and_flips_colors() {
        let dir = TempDir::new().unwrap();
        let ctx = egui::Context::default();
        let settings = Settings {
            theme: Some(ThemeMode::Light),
            ..Default::default()
        };
        let mut app = test_app(&ctx, &dir, settings);
        let light_fill = ctx.style().visuals.panel_fill;

        app.toggle_theme(&ctx);

        assert!(app.theme.is_dark());
        assert!(ctx.style().visuals.dark_mode);
        assert_ne!(ctx.style().visuals.panel_fill, light_fill);
        assert_eq!(Settings::load(dir.path()).theme, Some(ThemeMode::Dark));

        app.toggle_theme(&ctx);
        assert_eq!(Settings::load(dir.path()).theme, Some(ThemeMode::Light));
        assert_eq!(ctx.style().visuals.panel_fill, light_fill);
    }

    #[test]
    fn test_system_theme_applies_without_saved_choice() {
        let dir = TempDir::new().unwrap();
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx, &dir, Settings::default());

        let mut input = raw_input(1200.0, 800.0);
        input.system_theme = Some(egui::Theme::Dark);
        let _ = ctx.run(input, |ctx| app.render(ctx));

        assert_eq!(app.theme.mode(), ThemeMode::Dark);
        assert_eq!(app.saved_theme, None);
    }

    #[test]
    fn test_saved_theme_ignores_system() {
        let dir = TempDir::new().unwrap();
        let ctx = egui::Context::default();
        let settings = Settings {
            theme: Some(ThemeMode::Light),
            ..Default::default()
        };
        let mut app = test_app(&ctx, &dir, settings);

        let mut input = raw_input(1200.0, 800.0);
        input.system_theme = Some(egui::Theme::Dark);
        let _ = ctx.run(input, |ctx| app.render(ctx));

        assert_eq!(app.theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_door_toggle_is_not_persisted() {
        let dir = TempDir::new().unwrap();
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx, &dir, Settings::default());

        app.toggle_door();
        assert_eq!(app.door.state(), LockState::Unlocked);
        assert!(!dir.path().join(crate::constants::SETTINGS_FILE).exists());
    }

    #[test]
    fn test_renders_every_page_in_both_layouts() {
        let dir = TempDir::new().unwrap();
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx, &dir, Settings::default());

        for (width, compact) in [(1280.0, false), (480.0, true)] {
            for page in Page::ALL {
                app.nav.select(page, compact);
                if compact {
                    app.nav.toggle_drawer();
                }
                let _ = ctx.run(raw_input(width, 800.0), |ctx| app.render(ctx));
                assert_eq!(app.nav.page(), page);
            }
        }
    }

    #[test]
    fn test_wide_layout_closes_stale_drawer() {
        let dir = TempDir::new().unwrap();
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx, &dir, Settings::default());

        app.nav.toggle_drawer();
        let _ = ctx.run(raw_input(1280.0, 800.0), |ctx| app.render(ctx));
        assert!(!app.nav.drawer_open());
    }

    #[test]
    fn test_escape_closes_compact_drawer() {
        let dir = TempDir::new().unwrap();
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx, &dir, Settings::default());

        app.nav.toggle_drawer();
        let mut input = raw_input(480.0, 800.0);
        input.events.push(egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        });
        let _ = ctx.run(input, |ctx| app.render(ctx));
        assert!(!app.nav.drawer_open());
    }

    fn run_frame(ctx: &egui::Context, app: &mut App, width: f32, events: Vec<egui::Event>) {
        let mut input = raw_input(width, 800.0);
        input.events = events;
        let _ = ctx.run(input, |ctx| app.render(ctx));
    }

    /// A few idle frames so areas finish their sizing pass and layout settles
    fn settle(ctx: &egui::Context, app: &mut App, width: f32) {
        for _ in 0..3 {
            run_frame(ctx, app, width, Vec::new());
        }
    }

    fn widget_center(ctx: &egui::Context, id: egui::Id) -> egui::Pos2 {
        ctx.read_response(id)
            .map(|r| r.rect.center())
            .expect("widget was not laid out in the last frame")
    }

    fn click(ctx: &egui::Context, app: &mut App, width: f32, pos: egui::Pos2) {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        run_frame(ctx, app, width, vec![egui::Event::PointerMoved(pos)]);
        run_frame(ctx, app, width, vec![button(true)]);
        run_frame(ctx, app, width, vec![button(false)]);
    }

    #[test]
    fn test_clicking_lock_button_flips_label() {
        let dir = TempDir::new().unwrap();
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx, &dir, Settings::default());
        settle(&ctx, &mut app, WIDE);

        let pos = widget_center(&ctx, components::lock_toggle_id());
        click(&ctx, &mut app, WIDE, pos);
        assert_eq!(app.door.state().label(), "UNLOCKED");

        click(&ctx, &mut app, WIDE, pos);
        assert_eq!(app.door.state().label(), "LOCKED");
    }

    #[test]
    fn test_clicking_theme_switch_persists_mode() {
        let dir = TempDir::new().unwrap();
        let ctx = egui::Context::default();
        let settings = Settings {
            theme: Some(ThemeMode::Light),
            ..Default::default()
        };
        let mut app = test_app(&ctx, &dir, settings);
        settle(&ctx, &mut app, WIDE);

        let pos = widget_center(&ctx, components::theme_switch_id());
        click(&ctx, &mut app, WIDE, pos);

        assert!(app.theme.is_dark());
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(Settings::load(dir.path()).theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn test_compact_overlay_selection_closes_drawer() {
        let dir = TempDir::new().unwrap();
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx, &dir, Settings::default());
        app.nav.toggle_drawer();
        settle(&ctx, &mut app, COMPACT);
        assert!(app.nav.drawer_open());

        let pos = widget_center(&ctx, components::nav_item_id(Page::Instructions));
        click(&ctx, &mut app, COMPACT, pos);

        assert_eq!(app.nav.page(), Page::Instructions);
        assert!(!app.nav.drawer_open());
    }

    #[test]
    fn test_backdrop_click_closes_drawer_only() {
        let dir = TempDir::new().unwrap();
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx, &dir, Settings::default());
        app.nav.toggle_drawer();
        settle(&ctx, &mut app, COMPACT);

        // Right of the drawer, over the dimmed page
        let pos = egui::pos2(COMPACT - 20.0, 400.0);
        assert!(ctx
            .read_response(super::drawer::drawer_backdrop_id())
            .is_some_and(|r| r.rect.contains(pos)));
        click(&ctx, &mut app, COMPACT, pos);

        assert!(!app.nav.drawer_open());
        assert_eq!(app.nav.page(), Page::Home);
        assert_eq!(app.door.state(), LockState::Locked);
    }

    #[test]
    fn test_home_content_height_is_measured() {
        let dir = TempDir::new().unwrap();
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx, &dir, Settings::default());
        settle(&ctx, &mut app, WIDE);

        let height_id = super::views::home_content_height_id();
        let first = ctx.data(|d| d.get_temp::<f32>(height_id)).unwrap();
        assert!(first > crate::theme::LOCK_BUTTON_SIZE);

        run_frame(&ctx, &mut app, WIDE, Vec::new());
        let second = ctx.data(|d| d.get_temp::<f32>(height_id)).unwrap();
        assert!((first - second).abs() <= 0.5);
    }
}
