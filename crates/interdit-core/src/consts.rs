/// Size in bytes of one stored sample (IEEE-754 single precision).
pub const SAMPLE_BYTES: usize = 4;

/// A zoom selection must be strictly wider and taller than this many image
/// pixels to be applied; anything smaller is treated as an accidental click.
pub const DEFAULT_ZOOM_MIN_EXTENT: f32 = 2.0;

/// Upper bound of the 8-bit display range.
pub const DISPLAY_MAX: f32 = 255.0;

/// Window width added above the value of a constant volume so that the
/// initial window level is renderable.
pub const FLAT_VOLUME_WINDOW: f32 = 1.0;

/// Default GUI window size in logical points.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];
