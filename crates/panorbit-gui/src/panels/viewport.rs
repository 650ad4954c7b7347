use panorbit_core::consts::{KEY_ROTATE_DEG_PER_SEC, SCROLL_ZOOM_RATE};
use panorbit_core::viewport::Viewport;

use crate::app::PanorbitApp;
use crate::scene::SphereCallback;

pub fn show(ctx: &egui::Context, app: &mut PanorbitApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();

            // Aspect comes from the panel's content rect, swapped on
            // quarter-turned displays.
            let viewport = Viewport::new(rect.width(), rect.height())
                .oriented(app.config.display_rotation());
            app.camera.set_viewport(viewport);

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            let mut interacting = false;

            if response.dragged_by(egui::PointerButton::Primary) {
                let d = response.drag_delta();
                if d != egui::Vec2::ZERO {
                    app.camera.rotate(d.x, d.y, rect.height());
                    interacting = true;
                }
            }

            if response.hovered() {
                // zoom_delta() also absorbs two-finger pinch, so
                // multi-touch drives the orbit zoom instead of fighting
                // it.
                let scroll = ui.input(|i| i.smooth_scroll_delta.y);
                let pinch = ui.input(|i| i.zoom_delta());
                let factor = (-scroll * SCROLL_ZOOM_RATE).exp() / pinch;
                if factor != 1.0 {
                    app.camera.zoom_by(factor);
                    interacting = true;
                }
            }

            interacting |= handle_arrow_keys(ui, app);

            if app.config.auto_rotate && !interacting {
                let dt = ui.input(|i| i.stable_dt);
                app.camera.auto_rotate(dt, app.config.auto_rotate_speed);
            }

            ui.painter().add(egui_wgpu::Callback::new_paint_callback(
                rect,
                SphereCallback {
                    view_proj: app.camera.view_proj(),
                },
            ));

            if ctx.input(|i| !i.raw.hovered_files.is_empty()) {
                draw_drop_overlay(ui, rect);
            }
        });
}

fn handle_arrow_keys(ui: &egui::Ui, app: &mut PanorbitApp) -> bool {
    let (dt, left, right, up, down) = ui.input(|i| {
        (
            i.stable_dt,
            i.key_down(egui::Key::ArrowLeft),
            i.key_down(egui::Key::ArrowRight),
            i.key_down(egui::Key::ArrowUp),
            i.key_down(egui::Key::ArrowDown),
        )
    });

    let step = KEY_ROTATE_DEG_PER_SEC.to_radians() * dt;
    let dyaw = (right as i32 - left as i32) as f32 * step;
    let dpitch = (up as i32 - down as i32) as f32 * step;
    if dyaw != 0.0 || dpitch != 0.0 {
        app.camera.rotate_by_angles(dyaw, dpitch);
        true
    } else {
        false
    }
}

fn draw_drop_overlay(ui: &egui::Ui, rect: egui::Rect) {
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(120));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Drop an image anywhere",
        egui::FontId::proportional(24.0),
        egui::Color32::from_white_alpha(220),
    );
}
