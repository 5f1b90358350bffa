pub const DEFAULT_WINDOW_WIDTH: u32 = 640;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 400;

pub const DEFAULT_CELL_SIZE: u32 = 32;
pub const MIN_CELL_SIZE: u32 = 16;
pub const MAX_CELL_SIZE: u32 = 64;

/// Radius of a ray handle as drawn (pixels).
pub const HANDLE_RADIUS: f32 = 5.0;
/// Radius within which a click grabs a ray handle (pixels).
pub const HANDLE_CLICK_RADIUS: f32 = 12.0;
/// Default end handle offset from the start handle (pixels).
pub const DEFAULT_RAY_OFFSET: f32 = 100.0;
