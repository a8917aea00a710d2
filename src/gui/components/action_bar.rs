// src/gui/components/action_bar.rs

use eframe::egui::{self, widgets::Spinner};

use crate::{config::options::Refresh, gui::actions, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();

    ui.horizontal(|ui| {
        let green = egui::Color32::from_rgb(0, 106, 78);
        let refresh = ui
            .add_enabled(
                !app.running,
                egui::Button::new(egui::RichText::new("REFRESH").color(egui::Color32::WHITE).strong())
                    .fill(green),
            )
            .on_hover_text("Download the routine page, then parse it");
        if refresh.clicked() {
            actions::load(app, &ctx, Refresh::Always);
        }

        if ui
            .add_enabled(!app.running, egui::Button::new("Reparse cache"))
            .on_hover_text("Parse the last downloaded page without going online")
            .clicked()
        {
            actions::load(app, &ctx, Refresh::Never);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }
        ui.label(app.status_text());
    });

    ui.horizontal(|ui| {
        ui.label("Output:");
        ui.add(
            egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(260.0),
        );
        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            actions::open_folder(app);
        }
        ui.checkbox(&mut app.state.options.export.pretty, "Pretty");

        if ui.add_enabled(app.document.is_some(), egui::Button::new("Export JSON")).clicked() {
            actions::export(app);
        }
        if ui.add_enabled(!app.running, egui::Button::new("Open JSON")).clicked() {
            actions::open_json(app);
        }

        ui.separator();
        ui.checkbox(&mut app.state.gui.show_legend, "Legend");
    });
}
