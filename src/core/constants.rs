// Venue-canvas and pattern tuning constants shared by the core and the
// web frontend.

// Canvas
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

// Pattern sizing
pub const BASE_RADIUS: f32 = 80.0; // pickup pattern radius at scale 1.0
pub const CONE_HALF_ANGLE_DEG: i32 = 45; // speaker beam half-width
pub const CONE_RADIUS_PER_VOLUME: f32 = 5.0; // cone radius = volume * this

// Speaker collection
pub const MAX_SPEAKERS: usize = 5;
pub const MIN_SPEAKERS: usize = 1;

// Shared volume slider range
pub const VOLUME_MIN: i32 = 10;
pub const VOLUME_MAX: i32 = 100;
pub const VOLUME_DEFAULT: i32 = 50;

// Default layout
pub const MIC_DEFAULT_POS: [f32; 2] = [400.0, 500.0];
pub const SPEAKER_ROW_Y: f32 = 150.0;
pub const SPEAKER_COLUMN_SPACING: f32 = 100.0;

// Icons
pub const ICON_SIZE: f32 = 40.0;
pub const ICON_HIT_RADIUS: f32 = 20.0; // drag hit-test radius around a center
// Empirical offsets matching the icon artwork's "up" axis.
pub const SPEAKER_ICON_ROTATION_OFFSET_DEG: f32 = -90.0;
pub const MIC_ICON_ROTATION_OFFSET_DEG: f32 = 90.0;

// Opaque marker colors for the off-screen coverage composite. Cosmetic:
// only the alpha channel carries meaning.
pub const MASK_CONE_RGBA: [u8; 4] = [0, 255, 0, 255];
pub const MASK_PICKUP_RGBA: [u8; 4] = [0, 0, 255, 255];
pub const OVERLAP_RGBA: [u8; 4] = [255, 0, 0, 255];

// Translucent fills for the visible layer
pub const FILL_CONE_RGBA: [u8; 4] = [0, 255, 0, 77];
pub const FILL_PICKUP_RGBA: [u8; 4] = [135, 206, 235, 77]; // sky blue
