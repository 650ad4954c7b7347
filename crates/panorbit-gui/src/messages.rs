use std::path::PathBuf;
use std::sync::Arc;

use panorbit_core::panorama::Panorama;

/// Where a requested panorama comes from.
pub enum PanoramaSource {
    /// A file on disk (picker, CLI argument, or a drop carrying a path).
    Path(PathBuf),
    /// In-memory bytes for drops that carry no path.
    Bytes { name: String, bytes: Arc<[u8]> },
}

impl PanoramaSource {
    /// Short display name for logs and the status bar.
    pub fn label(&self) -> String {
        match self {
            PanoramaSource::Path(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            PanoramaSource::Bytes { name, .. } => name.clone(),
        }
    }
}

/// Commands sent from UI thread to the decode worker.
pub enum WorkerCommand {
    /// Read and decode one image, then hand it back for upload.
    LoadPanorama { source: PanoramaSource },
}

/// Results sent from the decode worker back to the UI thread.
pub enum WorkerResult {
    /// Exactly one per successful load.
    PanoramaLoaded { panorama: Panorama, label: String },
    Error { message: String },
}
