use serde::{Deserialize, Serialize};

use crate::consts::AUTO_ROTATE_DEG_PER_SEC;
use crate::viewport::DisplayRotation;

/// User-tunable viewer settings, loaded from a TOML file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Physical rotation of the display in degrees (0, 90, 180, 270).
    /// Quarter turns swap the viewport axes before the projection
    /// aspect is computed.
    pub display_rotation_deg: i32,

    /// Slowly yaw the view while the user is not interacting.
    pub auto_rotate: bool,

    /// Auto-rotation rate in degrees per second.
    pub auto_rotate_speed: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            display_rotation_deg: 0,
            auto_rotate: true,
            auto_rotate_speed: AUTO_ROTATE_DEG_PER_SEC,
        }
    }
}

impl ViewerConfig {
    pub fn display_rotation(&self) -> DisplayRotation {
        DisplayRotation::from_degrees(self.display_rotation_deg)
    }
}
