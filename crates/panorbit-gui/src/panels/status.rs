use crate::app::PanorbitApp;
use crate::panels::menu_bar;

pub fn show(ctx: &egui::Context, app: &mut PanorbitApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            // The drop hint doubles as the picker trigger. A click that
            // ends a drag gesture must not open the dialog.
            let hint = ui.link("Drop an image anywhere, or click to browse");
            if hint.clicked() && !app.gestures.suppresses_click() {
                menu_bar::open_image_dialog(app);
            }

            ui.separator();

            if app.ui_state.loading {
                ui.spinner();
                ui.label("Loading...");
                ui.separator();
            }

            match &app.ui_state.current_label {
                Some(label) => ui.label(label),
                None => ui.label("No panorama loaded"),
            };

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(msg) = app.ui_state.log_messages.last() {
                    ui.small(msg);
                }
            });
        });
        ui.add_space(2.0);
    });
}
