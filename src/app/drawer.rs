//! Navigation drawer: permanent side panel in the wide layout, overlay in the compact one

use super::App;
use crate::constants::{DRAWER_SUBTITLE, DRAWER_TITLE, TEAM_CAPTION};
use crate::theme;
use crate::types::Page;
use crate::ui::components;
use eframe::egui;

pub(crate) fn drawer_backdrop_id() -> egui::Id {
    egui::Id::new("nav_drawer_backdrop_click")
}

impl App {
    pub(crate) fn render_permanent_drawer(&mut self, ctx: &egui::Context) {
        let palette = *self.theme.palette();
        egui::SidePanel::left("nav_drawer")
            .exact_width(theme::DRAWER_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(theme::drawer_frame(&palette))
            .show(ctx, |ui| self.render_drawer_contents(ui, false));
    }

    /// Temporary drawer over a dimmed backdrop. Clicking the backdrop closes it.
    pub(crate) fn render_drawer_overlay(&mut self, ctx: &egui::Context) {
        let palette = *self.theme.palette();
        let screen = ctx.screen_rect();

        let backdrop_clicked = egui::Area::new(egui::Id::new("nav_drawer_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (_, rect) = ui.allocate_space(screen.size());
                let response = ui.interact(rect, drawer_backdrop_id(), egui::Sense::click());
                ui.painter()
                    .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(128));
                response.clicked()
            })
            .inner;

        egui::Area::new(egui::Id::new("nav_drawer_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                theme::drawer_frame(&palette).show(ui, |ui| {
                    ui.set_min_size(egui::vec2(theme::DRAWER_WIDTH, screen.height()));
                    ui.set_max_width(theme::DRAWER_WIDTH);
                    self.render_drawer_contents(ui, true);
                });
            });

        if backdrop_clicked {
            self.nav.close_drawer();
        }
    }

    fn render_drawer_contents(&mut self, ui: &mut egui::Ui, compact: bool) {
        let palette = *self.theme.palette();
        ui.spacing_mut().item_spacing.y = 0.0;

        // Header
        egui::Frame::new()
            .fill(palette.primary)
            .inner_margin(egui::Margin::same(theme::SPACING_LG as i8))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.spacing_mut().item_spacing.y = theme::SPACING_SM;
                ui.label(
                    egui::RichText::new(format!(
                        "{}  {}",
                        egui_phosphor::regular::SHIELD_CHECK,
                        DRAWER_TITLE
                    ))
                    .size(theme::FONT_TITLE)
                    .color(theme::ON_PRIMARY),
                );
                ui.label(
                    egui::RichText::new(DRAWER_SUBTITLE)
                        .size(theme::FONT_CAPTION)
                        .color(theme::ON_PRIMARY),
                );
            });

        // Navigation items
        let current = self.nav.page();
        for page in Page::ALL {
            let id = components::nav_item_id(page);
            if components::nav_item(ui, id, page.icon(), page.nav_label(), current == page, &palette) {
                self.nav.select(page, compact);
            }
        }

        // Theme switch and caption pinned to the bottom
        let mut theme_clicked = false;
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(theme::SPACING_LG);
            ui.label(
                egui::RichText::new(TEAM_CAPTION)
                    .size(theme::FONT_CAPTION)
                    .color(palette.text_secondary),
            );
            ui.add_space(theme::SPACING_LG);

            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(theme::SPACING_LG as i8, theme::SPACING_MD as i8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let label = ui.add(
                            egui::Label::new(
                                egui::RichText::new(self.theme.mode().switch_label())
                                    .size(theme::FONT_BODY)
                                    .color(palette.text_primary),
                            )
                            .sense(egui::Sense::click()),
                        );
                        let switched = ui
                            .with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                components::switch(ui, components::theme_switch_id(), self.theme.is_dark(), &palette)
                            })
                            .inner;
                        theme_clicked = label.clicked() || switched;
                    });
                });
            ui.separator();
        });

        if theme_clicked {
            self.toggle_theme(ui.ctx());
        }
    }
}
