/// Vertical field of view of the perspective camera, in degrees.
pub const FOV_Y_DEGREES: f32 = 60.0;

/// Near clip plane distance.
pub const Z_NEAR: f32 = 0.1;

/// Far clip plane distance.
pub const Z_FAR: f32 = 1000.0;

/// Closest the camera may orbit to the pivot.
pub const MIN_DISTANCE: f32 = 0.1;

/// Farthest the camera may orbit from the pivot.
pub const MAX_DISTANCE: f32 = 2.0;

/// Drag-to-rotation speed. Negative so the view follows the pointer
/// ("grab and pull") instead of the raw orbit direction.
pub const ROTATE_SPEED: f32 = -0.7;

/// Idle auto-rotation rate in degrees per second.
pub const AUTO_ROTATE_DEG_PER_SEC: f32 = 3.0;

/// Keyboard rotation rate in degrees per second.
pub const KEY_ROTATE_DEG_PER_SEC: f32 = 45.0;

/// Pitch is clamped this many radians short of the poles to keep the
/// view matrix well conditioned.
pub const PITCH_LIMIT_MARGIN: f32 = 0.017;

/// Longitudinal segments of the panorama sphere.
pub const SPHERE_SEGMENTS: u32 = 32;

/// Latitudinal rings of the panorama sphere.
pub const SPHERE_RINGS: u32 = 32;

/// Exponent scale converting scroll pixels to a zoom factor.
pub const SCROLL_ZOOM_RATE: f32 = 0.0015;

/// Placeholder material grey level (8-bit), shown before the first
/// panorama loads.
pub const PLACEHOLDER_GREY: u8 = 0x33;
