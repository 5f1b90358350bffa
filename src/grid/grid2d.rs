use glam::{IVec2, UVec2, Vec2};
use log::{debug, trace, warn};

use crate::raycast::Traversal;
use crate::types::{GridInfo, TraversalError};

/// A bounded 2D grid of `width x height` unit cells with no cell contents.
///
/// The grid only bounds traversals; rays are cast in cell-space coordinates
/// where cell `(x, y)` covers `[x, x + 1) x [y, y + 1)`.
#[derive(Debug, Clone)]
pub struct Grid2d {
    info: GridInfo,
}

impl Grid2d {
    pub fn new(width: u32, height: u32) -> Result<Self, TraversalError> {
        let info = GridInfo::new(width, height)?;
        debug!("created {width}x{height} traversal grid");
        Ok(Self { info })
    }

    pub fn info(&self) -> &GridInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width()
    }

    pub fn height(&self) -> u32 {
        self.info.height()
    }

    pub fn size(&self) -> UVec2 {
        self.info.size()
    }

    /// Replace the grid extents for all subsequent casts.
    ///
    /// On error the previous extents are kept.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TraversalError> {
        let info = match GridInfo::new(width, height) {
            Ok(info) => info,
            Err(err) => {
                warn!(
                    "rejected resize to {width}x{height}, keeping {}x{}",
                    self.info.width(), self.info.height()
                );
                return Err(err);
            }
        };

        if info != self.info {
            debug!(
                "resized traversal grid {}x{} -> {width}x{height}",
                self.info.width(), self.info.height()
            );
            self.info = info;
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        self.info.contains(cell)
    }

    /// Walk every cell crossed by the ray `origin + t * dir` for `t >= 0`,
    /// starting at the cell containing `origin`.
    ///
    /// `dir` does not need to be normalized.
    pub fn cast(&self, origin: Vec2, dir: Vec2) -> Traversal<'_> {
        trace!("cast from {origin} along {dir}");
        Traversal::new(&self.info, origin, dir)
    }

    /// Walk the cells crossed by the segment from `start` to `end`.
    pub fn cast_segment(&self, start: Vec2, end: Vec2) -> Traversal<'_> {
        self.cast(start, end - start).with_max_t(1.0)
    }
}
