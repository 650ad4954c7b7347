/// Physical rotation of the display the window lives on.
///
/// Desktop platforms report the window content rect already rotated by
/// the compositor, except on sideways-mounted screens driven without a
/// rotating compositor (kiosk setups). For those the configuration can
/// declare the rotation and the viewport swaps its axes to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayRotation {
    None,
    Cw90,
    Ccw90,
    Flip180,
}

impl DisplayRotation {
    pub fn from_degrees(deg: i32) -> Self {
        match deg.rem_euclid(360) {
            90 => DisplayRotation::Cw90,
            180 => DisplayRotation::Flip180,
            270 => DisplayRotation::Ccw90,
            _ => DisplayRotation::None,
        }
    }

    /// Quarter-turn rotations exchange the viewport axes.
    pub fn swaps_axes(self) -> bool {
        matches!(self, DisplayRotation::Cw90 | DisplayRotation::Ccw90)
    }
}

/// Render surface dimensions in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Swap width/height when the display is quarter-turned so the
    /// projection aspect matches the physical orientation rather than
    /// the reported box.
    pub fn oriented(self, rotation: DisplayRotation) -> Self {
        if rotation.swaps_axes() {
            Self {
                width: self.height,
                height: self.width,
            }
        } else {
            self
        }
    }

    /// Width over height. A degenerate (zero or negative height)
    /// viewport yields 1.0 so the projection stays finite.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 && self.width > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}
