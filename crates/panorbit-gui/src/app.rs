use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Context as _;
use panorbit_core::camera::OrbitCamera;
use panorbit_core::config::ViewerConfig;
use panorbit_core::gesture::GestureTracker;

use crate::messages::{PanoramaSource, WorkerCommand, WorkerResult};
use crate::panels;
use crate::scene::SphereRenderer;
use crate::state::UiState;
use crate::worker;

pub struct PanorbitApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub render_state: egui_wgpu::RenderState,
    pub camera: OrbitCamera,
    pub config: ViewerConfig,
    pub gestures: GestureTracker,
    pub ui_state: UiState,
    pub show_about: bool,
}

impl PanorbitApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: ViewerConfig,
        initial_image: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        let render_state = cc
            .wgpu_render_state
            .clone()
            .context("wgpu render state is required for the sphere viewport")?;

        render_state
            .renderer
            .write()
            .callback_resources
            .insert(SphereRenderer::new(
                &render_state.device,
                &render_state.queue,
                render_state.target_format,
            ));

        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, cc.egui_ctx.clone());

        let mut app = Self {
            cmd_tx,
            result_rx,
            render_state,
            camera: OrbitCamera::default(),
            config,
            gestures: GestureTracker::default(),
            ui_state: UiState::default(),
            show_about: false,
        };

        if let Some(path) = initial_image {
            app.request_load(PanoramaSource::Path(path));
        }

        Ok(app)
    }

    pub fn request_load(&mut self, source: PanoramaSource) {
        self.ui_state.loading = true;
        self.ui_state.add_log(format!("Loading {}...", source.label()));
        let _ = self.cmd_tx.send(WorkerCommand::LoadPanorama { source });
    }

    /// Drain all pending results from the decode worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            self.ui_state.loading = false;
            match result {
                WorkerResult::PanoramaLoaded { panorama, label } => {
                    // Applied in completion order: the last decode to
                    // finish owns the sphere.
                    if let Some(renderer) = self
                        .render_state
                        .renderer
                        .write()
                        .callback_resources
                        .get_mut::<SphereRenderer>()
                    {
                        renderer.set_panorama(
                            &self.render_state.device,
                            &self.render_state.queue,
                            &panorama,
                        );
                    }
                    self.ui_state.add_log(format!(
                        "Loaded {} ({}x{})",
                        label, panorama.width, panorama.height
                    ));
                    self.ui_state.current_label = Some(label);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    /// Feed window-global pointer state into the drag/click tracker.
    fn track_gestures(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if i.pointer.primary_pressed() {
                self.gestures.on_pointer_down();
            }
            if i.pointer.delta() != egui::Vec2::ZERO {
                self.gestures.on_pointer_moved();
            }
            if i.pointer.primary_released() {
                self.gestures.on_pointer_up();
            }
        });
    }

    /// First dropped file wins; an empty drop is a no-op.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };
        let source = if let Some(path) = file.path {
            PanoramaSource::Path(path)
        } else if let Some(bytes) = file.bytes {
            PanoramaSource::Bytes {
                name: file.name,
                bytes,
            }
        } else {
            return;
        };
        self.request_load(source);
    }
}

impl eframe::App for PanorbitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.track_gestures(ctx);
        self.handle_dropped_files(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Panorbit")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Panorbit");
                        ui.label("360° Panorama Viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }

        self.gestures.end_tick();

        // Continuous render loop for the lifetime of the window.
        ctx.request_repaint();
    }
}
