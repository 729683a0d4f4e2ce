//! Reusable UI components
//!
//! Custom-painted widgets shared by the drawer, app bar and pages.

use crate::theme::{self, Palette};
use crate::types::{LockState, Page};
use eframe::egui;

// Fixed ids so responses can be read back with `Context::read_response`
pub fn lock_toggle_id() -> egui::Id {
    egui::Id::new("lock_toggle")
}

pub fn theme_switch_id() -> egui::Id {
    egui::Id::new("theme_switch")
}

pub fn nav_item_id(page: Page) -> egui::Id {
    egui::Id::new(("nav_item", page))
}

/// Large circular lock toggle. Grows slightly and darkens on hover.
pub fn lock_toggle_button(
    ui: &mut egui::Ui,
    id: egui::Id,
    state: LockState,
    palette: &Palette,
) -> egui::Response {
    let size = theme::LOCK_BUTTON_SIZE * theme::LOCK_BUTTON_HOVER_SCALE;
    let (_, rect) = ui.allocate_space(egui::vec2(size, size));
    let response = ui.interact(rect, id, egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if ui.is_rect_visible(rect) {
        let hover_t = ui
            .ctx()
            .animate_bool(response.id.with("hover"), response.hovered());
        let scale = 1.0 + (theme::LOCK_BUTTON_HOVER_SCALE - 1.0) * hover_t;
        let radius = theme::LOCK_BUTTON_SIZE / 2.0 * scale;
        let (fill, _) = theme::button_visual(&response, state.color(palette), rect);

        let painter = ui.painter();
        let shadow_offset = egui::vec2(0.0, 4.0 + 4.0 * hover_t);
        painter.circle_filled(
            rect.center() + shadow_offset,
            radius,
            egui::Color32::from_black_alpha((25.0 + 25.0 * hover_t) as u8),
        );
        painter.circle_filled(rect.center(), radius, fill);

        painter.text(
            rect.center() - egui::vec2(0.0, 18.0),
            egui::Align2::CENTER_CENTER,
            state.icon(),
            egui::FontId::proportional(32.0),
            theme::ON_PRIMARY,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 22.0),
            egui::Align2::CENTER_CENTER,
            state.label(),
            egui::FontId::proportional(theme::FONT_TITLE),
            theme::ON_PRIMARY,
        );
    }

    response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Button, ui.is_enabled(), state.label())
    });
    response
}

/// Small filled circle used as a status indicator
pub fn status_dot(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(theme::STATUS_DOT_SIZE, theme::STATUS_DOT_SIZE),
        egui::Sense::hover(),
    );
    ui.painter()
        .circle_filled(rect.center(), theme::STATUS_DOT_SIZE / 2.0, color);
}

/// Drawer navigation row. Returns true if clicked.
pub fn nav_item(
    ui: &mut egui::Ui,
    id: egui::Id,
    icon: &str,
    label: &str,
    selected: bool,
    palette: &Palette,
) -> bool {
    let width = ui.available_width();
    let (_, rect) = ui.allocate_space(egui::vec2(width, theme::NAV_ITEM_HEIGHT));
    let response = ui.interact(rect, id, egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let painter = ui.painter();
    if selected {
        painter.rect_filled(rect, 0.0, palette.nav_selected);
        let bar = egui::Rect::from_min_size(rect.min, egui::vec2(theme::NAV_ACCENT_WIDTH, rect.height()));
        painter.rect_filled(bar, 0.0, palette.primary);
    } else if response.hovered() {
        painter.rect_filled(rect, 0.0, palette.nav_hover);
    }

    let icon_color = if selected { palette.primary } else { palette.text_primary };
    painter.text(
        rect.left_center() + egui::vec2(theme::SPACING_LG + 4.0, 0.0),
        egui::Align2::LEFT_CENTER,
        icon,
        egui::FontId::proportional(20.0),
        icon_color,
    );

    // No bold face in the default fonts; selected rows get the strong color instead.
    let (label_color, label_size) = if selected {
        (palette.text_primary, theme::FONT_BODY + 1.0)
    } else {
        (palette.text_secondary, theme::FONT_BODY)
    };
    painter.text(
        rect.left_center() + egui::vec2(theme::SPACING_LG + 44.0, 0.0),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(label_size),
        label_color,
    );

    response.clicked()
}

/// Pill switch. Returns true if clicked.
pub fn switch(ui: &mut egui::Ui, id: egui::Id, on: bool, palette: &Palette) -> bool {
    let (w, h) = theme::SWITCH_SIZE;
    let (_, rect) = ui.allocate_space(egui::vec2(w, h));
    let response = ui.interact(rect, id, egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if ui.is_rect_visible(rect) {
        let t = ui.ctx().animate_bool(response.id, on);
        let track = if on {
            palette.text_secondary
        } else {
            palette.divider
        };
        let painter = ui.painter();
        painter.rect_filled(rect, h / 2.0, track);
        let knob_x = egui::lerp((rect.left() + h / 2.0)..=(rect.right() - h / 2.0), t);
        painter.circle_filled(egui::pos2(knob_x, rect.center().y), h / 2.0 - 3.0, egui::Color32::WHITE);
    }

    response.widget_info(|| egui::WidgetInfo::selected(egui::WidgetType::Checkbox, ui.is_enabled(), on, ""));
    response.clicked()
}

/// Frameless icon button for the app bar. Returns the response.
pub fn icon_button(ui: &mut egui::Ui, icon: &str, color: egui::Color32) -> egui::Response {
    let response = ui.add(
        egui::Button::new(egui::RichText::new(icon).size(22.0).color(color)).frame(false),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Dense list row with a leading icon, a title and secondary text
pub fn icon_list_row(ui: &mut egui::Ui, icon: &str, title: &str, detail: &str, palette: &Palette) {
    ui.horizontal(|ui| {
        ui.add_sized(
            egui::vec2(32.0, 20.0),
            egui::Label::new(egui::RichText::new(icon).size(16.0).color(palette.text_secondary)),
        );
        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 2.0;
            ui.label(egui::RichText::new(title).size(theme::FONT_BODY).color(palette.text_primary));
            ui.label(egui::RichText::new(detail).size(theme::FONT_SMALL).color(palette.text_secondary));
        });
    });
}
