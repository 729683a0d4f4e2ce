//! Page rendering (home, instructions) and the app bar / footer chrome

use super::App;
use crate::constants::*;
use crate::theme::{self, Palette};
use crate::ui::components;
use eframe::egui;

/// Temp-memory key for the home content height measured on the previous frame
pub(crate) fn home_content_height_id() -> egui::Id {
    egui::Id::new("home_content_height")
}

impl App {
    pub(crate) fn render_app_bar(&mut self, ctx: &egui::Context) {
        let title = self.nav.page().title();
        let menu_icon = if self.nav.drawer_open() {
            egui_phosphor::regular::X
        } else {
            egui_phosphor::regular::LIST
        };

        egui::TopBottomPanel::top("app_bar")
            .exact_height(theme::APP_BAR_HEIGHT)
            .show_separator_line(false)
            .frame(theme::app_bar_frame())
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    if components::icon_button(ui, menu_icon, theme::ON_PRIMARY).clicked() {
                        self.nav.toggle_drawer();
                    }
                    ui.add_space(theme::SPACING_MD);
                    ui.label(
                        egui::RichText::new(title)
                            .size(theme::FONT_TITLE)
                            .color(theme::ON_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(egui_phosphor::regular::HOUSE)
                                .size(22.0)
                                .color(theme::ON_PRIMARY),
                        );
                    });
                });
            });
    }

    pub(crate) fn render_footer(&self, ctx: &egui::Context) {
        let palette = self.theme.palette();
        egui::TopBottomPanel::bottom("footer")
            .show_separator_line(false)
            .frame(theme::footer_frame(palette))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(FOOTER_TEXT)
                            .size(theme::FONT_BODY)
                            .color(palette.text_secondary),
                    );
                });
            });
    }

    pub(crate) fn render_home_page(&mut self, ui: &mut egui::Ui) {
        let palette = *self.theme.palette();
        let state = self.door.state();

        // Center vertically using last frame's measured height
        let height_id = home_content_height_id();
        let measured = ui.ctx().data(|d| d.get_temp::<f32>(height_id));
        ui.add_space(((ui.available_height() - measured.unwrap_or(0.0)) / 2.0).max(0.0));

        let content = ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Main Door Access")
                    .size(theme::FONT_DISPLAY)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.add_space(theme::SPACING_XXL);

            let toggle = components::lock_toggle_button(ui, components::lock_toggle_id(), state, &palette);
            if toggle.clicked() {
                self.toggle_door();
            }
            // Re-read so the hint and status match the button this frame
            let state = self.door.state();

            ui.add_space(theme::SPACING_LG);
            ui.label(
                egui::RichText::new(state.action_hint())
                    .size(theme::FONT_BODY)
                    .color(palette.text_secondary),
            );
            ui.add_space(theme::SPACING_XXL);

            // Status row: dot + "Door Status: LOCKED", centered as a unit
            let prefix = "Door Status:";
            let font = egui::FontId::proportional(theme::FONT_HEADING);
            let text_width = ui.fonts(|f| {
                let prefix_w = f
                    .layout_no_wrap(prefix.to_owned(), font.clone(), palette.text_primary)
                    .rect
                    .width();
                let label_w = f
                    .layout_no_wrap(state.label().to_owned(), font.clone(), palette.text_primary)
                    .rect
                    .width();
                prefix_w + label_w
            });
            let row_width = theme::STATUS_DOT_SIZE + text_width + 3.0 * theme::SPACING_MD + 4.0;
            ui.allocate_ui_with_layout(
                egui::vec2(row_width, 24.0),
                egui::Layout::left_to_right(egui::Align::Center),
                |ui| {
                    components::status_dot(ui, state.color(&palette));
                    ui.label(
                        egui::RichText::new(prefix)
                            .font(font.clone())
                            .color(palette.text_primary),
                    );
                    ui.label(
                        egui::RichText::new(state.label())
                            .font(font.clone())
                            .strong()
                            .color(state.color(&palette)),
                    );
                },
            );
        });

        let height = content.response.rect.height();
        if measured.map_or(true, |h| (h - height).abs() > 0.5) {
            ui.ctx().data_mut(|d| d.insert_temp(height_id, height));
            ui.ctx().request_repaint();
        }
    }

    pub(crate) fn render_instructions_page(&mut self, ui: &mut egui::Ui, screen_width: f32) {
        let palette = *self.theme.palette();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{}  How to Use the Access System",
                        egui_phosphor::regular::SHIELD_CHECK
                    ))
                    .size(theme::FONT_DISPLAY)
                    .color(palette.text_primary),
                );
                ui.add_space(theme::SPACING_XL);
                ui.separator();
                ui.add_space(theme::SPACING_XL);

                if screen_width >= CARD_COLUMNS_BREAKPOINT {
                    ui.columns(2, |cols| {
                        basic_operation_card(&mut cols[0], &palette);
                        troubleshooting_card(&mut cols[1], &palette);
                    });
                } else {
                    basic_operation_card(ui, &palette);
                    ui.add_space(theme::SPACING_XL);
                    troubleshooting_card(ui, &palette);
                }
            });
    }
}

fn card_heading(ui: &mut egui::Ui, icon: &str, title: &str, palette: &Palette) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon).size(theme::FONT_TITLE).color(palette.primary));
        ui.label(
            egui::RichText::new(title)
                .size(theme::FONT_HEADING)
                .strong()
                .color(palette.text_primary),
        );
    });
    ui.add_space(theme::SPACING_MD);
}

fn basic_operation_card(ui: &mut egui::Ui, palette: &Palette) {
    theme::card_frame(palette).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        card_heading(ui, egui_phosphor::regular::LOCK, "Basic Operation", palette);
        for (icon, title, detail) in BASIC_OPERATION {
            components::icon_list_row(ui, icon, title, detail, palette);
            ui.add_space(theme::SPACING_SM);
        }
    });
}

fn troubleshooting_card(ui: &mut egui::Ui, palette: &Palette) {
    let subtitle = |ui: &mut egui::Ui, text: &str| {
        ui.label(
            egui::RichText::new(text)
                .size(theme::FONT_BODY)
                .strong()
                .color(palette.primary),
        );
    };
    let body = |ui: &mut egui::Ui, text: &str| {
        ui.label(
            egui::RichText::new(text)
                .size(theme::FONT_SMALL)
                .color(palette.text_secondary),
        );
    };

    theme::card_frame(palette).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        card_heading(ui, egui_phosphor::regular::BATTERY_FULL, "Troubleshooting", palette);

        subtitle(ui, "Door not responding?");
        for (i, step) in TROUBLESHOOTING_STEPS.iter().enumerate() {
            body(ui, &format!("{}. {}", i + 1, step));
        }
        ui.add_space(theme::SPACING_LG);

        subtitle(ui, "Need help?");
        body(ui, &format!("Contact support: {}", SUPPORT_EMAIL));
        body(ui, &format!("Emergency: {}", EMERGENCY_PHONE));
    });
}
