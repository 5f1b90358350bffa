//! Grid metadata.

use glam::{IVec2, UVec2};

use crate::types::TraversalError;

/// Extents of a traversal grid, in cells.
///
/// Only obtainable through [`GridInfo::new`], so both extents are always
/// non-zero and addressable with `i32` cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridInfo {
    width: u32,
    height: u32,
}

impl GridInfo {
    pub fn new(width: u32, height: u32) -> Result<Self, TraversalError> {
        let info = Self { width, height };
        info.validate()?;
        Ok(info)
    }

    fn validate(&self) -> Result<(), TraversalError> {
        // Cells are addressed with i32, so the extents must fit as well.
        if self.width == 0
            || self.height == 0
            || self.width > i32::MAX as u32
            || self.height > i32::MAX as u32
        {
            return Err(TraversalError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Returns true if `cell` lies within `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        // equivalent to (x >= 0 && x < width) for signed x
        (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_extents() {
        assert!(matches!(
            GridInfo::new(0, 4),
            Err(TraversalError::InvalidDimension {
                width: 0,
                height: 4
            })
        ));
        assert!(GridInfo::new(4, 0).is_err());
        assert!(GridInfo::new(u32::MAX, 1).is_err());
        assert!(GridInfo::new(1, 1).is_ok());
    }

    #[test]
    fn accepts_largest_addressable_extent() {
        let info = GridInfo::new(i32::MAX as u32, 1).unwrap();
        assert_eq!(info.width(), i32::MAX as u32);
        assert_eq!(info.height(), 1);
        assert!(!info.contains(IVec2::new(-1, 0)));
        assert!(info.contains(IVec2::new(i32::MAX - 1, 0)));
        assert!(GridInfo::new(i32::MAX as u32 + 1, 1).is_err());
    }

    #[test]
    fn contains_handles_negative_cells() {
        let info = GridInfo::new(3, 2).unwrap();
        assert!(info.contains(IVec2::new(0, 0)));
        assert!(info.contains(IVec2::new(2, 1)));
        assert!(!info.contains(IVec2::new(3, 1)));
        assert!(!info.contains(IVec2::new(2, 2)));
        assert!(!info.contains(IVec2::new(-1, 0)));
        assert!(!info.contains(IVec2::new(0, -1)));
    }
}
