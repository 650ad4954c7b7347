use std::path::Path;

use tracing::debug;

use crate::consts::PLACEHOLDER_GREY;
use crate::error::{PanoError, Result};

/// A decoded panorama image, RGBA8, row-major from the top-left.
#[derive(Clone, Debug)]
pub struct Panorama {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Panorama {
    /// Decode any format the `image` crate recognizes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;
        let rgba = img.to_rgba8();
        let (width, height) = (rgba.width(), rgba.height());
        if width == 0 || height == 0 {
            return Err(PanoError::InvalidDimensions { width, height });
        }
        debug!(width, height, "decoded panorama");
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Neutral grey stand-in shown until the first image loads.
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![PLACEHOLDER_GREY, PLACEHOLDER_GREY, PLACEHOLDER_GREY, 0xff],
        }
    }
}
