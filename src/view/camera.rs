//! Pan and zoom state mapping window pixels onto grid cells.

use glam::{IVec2, UVec2, Vec2};

use crate::grid::Grid2d;
use crate::loaders::SceneConfig;
use crate::types::{
    DEFAULT_CELL_SIZE, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MAX_CELL_SIZE, MIN_CELL_SIZE,
    TraversalError,
};

/// Window-space view of a grid that always covers the whole viewport.
///
/// Panning scrolls the grid lines by whole pixels; only the pan offset modulo
/// the cell size is visible. Cell `c` spans pixels
/// `[c * cell_size - shift, (c + 1) * cell_size - shift)` on each axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pan: IVec2,
    cell_size: u32,
    default_cell_size: u32,
    min_cell_size: u32,
    max_cell_size: u32,
    viewport: UVec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(
            UVec2::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            DEFAULT_CELL_SIZE,
            MIN_CELL_SIZE,
            MAX_CELL_SIZE,
        )
    }
}

impl ViewState {
    /// Limits are expected to satisfy `0 < min <= max`; the cell size is clamped into them.
    pub fn new(viewport: UVec2, cell_size: u32, min_cell_size: u32, max_cell_size: u32) -> Self {
        let min_cell_size = min_cell_size.max(1);
        let max_cell_size = max_cell_size.max(min_cell_size);
        let cell_size = cell_size.clamp(min_cell_size, max_cell_size);
        Self {
            pan: IVec2::ZERO,
            cell_size,
            default_cell_size: cell_size,
            min_cell_size,
            max_cell_size,
            viewport,
        }
    }

    pub fn from_scene(scene: &SceneConfig) -> Self {
        Self::new(
            scene.viewport(),
            scene.cell_size,
            scene.min_cell_size,
            scene.max_cell_size,
        )
    }

    pub fn pan(&self) -> IVec2 {
        self.pan
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn viewport(&self) -> UVec2 {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: UVec2) {
        self.viewport = viewport;
    }

    pub fn translate(&mut self, delta: IVec2) {
        self.pan += delta;
    }

    pub fn reset_position(&mut self) {
        self.pan = IVec2::ZERO;
    }

    /// Grow or shrink cells by `amount` pixels, clamped to the zoom limits.
    pub fn zoom(&mut self, amount: i32) {
        let size = (self.cell_size as i64 + amount as i64)
            .clamp(self.min_cell_size as i64, self.max_cell_size as i64);
        self.cell_size = size as u32;
    }

    pub fn reset_zoom(&mut self) {
        self.cell_size = self.default_cell_size;
    }

    /// Number of cells needed to cover the viewport, including the partial
    /// cell introduced by panning.
    pub fn grid_dims(&self) -> UVec2 {
        self.viewport / self.cell_size + UVec2::ONE
    }

    /// Pixel offset of the grid lines, in `[0, cell_size)`.
    pub fn offset(&self) -> IVec2 {
        let size = self.cell_size as i32;
        IVec2::new(self.pan.x.rem_euclid(size), self.pan.y.rem_euclid(size))
    }

    /// How far cell 0 starts before the window edge, in `[0, cell_size)`.
    pub fn shift(&self) -> IVec2 {
        let size = self.cell_size as i32;
        let offset = self.offset();
        IVec2::new(
            (size - offset.x).rem_euclid(size),
            (size - offset.y).rem_euclid(size),
        )
    }

    /// Convert a window position (pixels) into cell-space coordinates.
    pub fn pixel_to_cell(&self, pixel: Vec2) -> Vec2 {
        (pixel + self.shift().as_vec2()) / self.cell_size as f32
    }

    /// Convert a window-space displacement into a cell-space direction.
    pub fn pixel_delta_to_cell(&self, delta: Vec2) -> Vec2 {
        delta / self.cell_size as f32
    }

    /// Window position (pixels) of the top-left corner of `cell`.
    pub fn cell_to_pixel(&self, cell: IVec2) -> IVec2 {
        cell * self.cell_size as i32 - self.shift()
    }

    /// Resize `grid` so it covers the viewport at the current zoom.
    pub fn sync_grid(&self, grid: &mut Grid2d) -> Result<(), TraversalError> {
        let dims = self.grid_dims();
        grid.resize(dims.x, dims.y)
    }
}
