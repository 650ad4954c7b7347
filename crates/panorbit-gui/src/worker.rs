use std::sync::mpsc;

use panorbit_core::panorama::Panorama;
use tracing::{info, warn};

use crate::messages::{PanoramaSource, WorkerCommand, WorkerResult};

/// Spawn the decode worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("panorbit-decode".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn decode thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadPanorama { source } => handle_load(&source, &tx, &ctx),
        }
    }
}

fn handle_load(source: &PanoramaSource, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let label = source.label();
    let decoded = match source {
        PanoramaSource::Path(path) => Panorama::from_path(path),
        PanoramaSource::Bytes { bytes, .. } => Panorama::from_bytes(bytes),
    };

    match decoded {
        Ok(panorama) => {
            info!(
                label = %label,
                width = panorama.width,
                height = panorama.height,
                "panorama decoded"
            );
            send(tx, ctx, WorkerResult::PanoramaLoaded { panorama, label });
        }
        Err(e) => {
            warn!(label = %label, error = %e, "panorama decode failed");
            send(
                tx,
                ctx,
                WorkerResult::Error {
                    message: format!("Failed to load {label}: {e}"),
                },
            );
        }
    }
}
