use std::iter::FusedIterator;

use glam::{IVec2, Vec2};

use crate::raycast::utils::{axis_params, just_out, scale_exp2, step_sign, unit_exponent};
use crate::types::GridInfo;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    Origin,
    Walking,
    Done,
}

/// Fast voxel traversal (Amanatides & Woo) over every cell a ray crosses.
///
/// The floored origin cell is always yielded first, even when it lies outside
/// the grid. Each following cell is one step from its predecessor along a
/// single axis, and the walk ends without yielding as soon as a step leaves
/// `[0, width) x [0, height)`.
///
/// When `t_max.x == t_max.y` the y axis advances first.
///
/// A zero direction yields only the origin cell: neither axis ever reaches a
/// boundary. Any other direction is first scaled by a power of two so its
/// largest component lies in `[1, 2)`, which keeps `t` finite for tiny or huge
/// directions without changing which cells are visited.
///
/// The iterator borrows the grid, so the grid cannot be resized while a walk
/// is in progress. Cells are computed on demand and the walk cannot be
/// restarted; cast again instead.
#[derive(Debug)]
pub struct Traversal<'a> {
    info: &'a GridInfo,
    /// Current cell. Signed as the origin may lie outside the grid.
    cell: IVec2,
    /// Step direction along each axis, +1 or -1.
    step: IVec2,
    /// Parametric distance to the next cell boundary along each axis.
    t_max: Vec2,
    /// Parametric distance covered by crossing one whole cell along each axis.
    t_delta: Vec2,
    /// Cell index along each axis that ends the walk.
    just_out: IVec2,
    /// Set once the walk is inside the grid, after which `just_out` alone
    /// decides termination.
    contained: bool,
    /// `dir` was scaled by `2^scale_exp`; `t` values are in the scaled units.
    scale_exp: i32,
    entry_t: f32,
    max_t: f32,
    phase: Phase,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(info: &'a GridInfo, origin: Vec2, dir: Vec2) -> Self {
        let cell = origin.floor().as_ivec2();

        let scale_exp = unit_exponent(dir);
        let dir = scale_exp2(dir, scale_exp);

        let step = IVec2::new(step_sign(dir.x), step_sign(dir.y));
        let (t_delta_x, t_max_x) = axis_params(origin.x, dir.x, step.x);
        let (t_delta_y, t_max_y) = axis_params(origin.y, dir.y, step.y);

        Self {
            info,
            cell,
            step,
            t_max: Vec2::new(t_max_x, t_max_y),
            t_delta: Vec2::new(t_delta_x, t_delta_y),
            just_out: IVec2::new(
                just_out(step.x, info.width()),
                just_out(step.y, info.height()),
            ),
            contained: info.contains(cell),
            scale_exp,
            entry_t: 0.0,
            max_t: f32::INFINITY,
            phase: Phase::Origin,
        }
    }

    /// Stop before any cell entered beyond `max_t`, measured in units of the
    /// cast direction. The origin cell is still yielded.
    pub fn with_max_t(mut self, max_t: f32) -> Self {
        self.max_t = (max_t as f64 * 2f64.powi(-self.scale_exp)) as f32;
        self
    }

    /// Parametric distance at which the last yielded cell was entered, in
    /// units of the cast direction. Zero for the origin cell.
    ///
    /// Saturates to infinity when the direction is so short that the distance
    /// exceeds `f32::MAX`.
    pub fn entry_t(&self) -> f32 {
        (self.entry_t as f64 * 2f64.powi(self.scale_exp)) as f32
    }

    fn finish(&mut self) -> Option<IVec2> {
        self.phase = Phase::Done;
        None
    }
}

impl Iterator for Traversal<'_> {
    type Item = IVec2;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Done => return None,
            Phase::Origin => {
                self.phase = Phase::Walking;
                return Some(self.cell);
            }
            Phase::Walking => {}
        }

        let t;
        let left;
        if self.t_max.x < self.t_max.y {
            t = self.t_max.x;
            self.t_max.x += self.t_delta.x;
            self.cell.x = self.cell.x.saturating_add(self.step.x);
            left = self.cell.x == self.just_out.x;
        } else {
            t = self.t_max.y;
            self.t_max.y += self.t_delta.y;
            self.cell.y = self.cell.y.saturating_add(self.step.y);
            left = self.cell.y == self.just_out.y;
        }

        // An infinite t means neither axis ever crosses a boundary.
        if left || !t.is_finite() || t > self.max_t {
            return self.finish();
        }

        if !self.contained {
            if !self.info.contains(self.cell) {
                return self.finish();
            }
            self.contained = true;
        }

        self.entry_t = t;
        Some(self.cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Done => (0, Some(0)),
            Phase::Origin => (
                1,
                Some(self.info.width() as usize + self.info.height() as usize),
            ),
            Phase::Walking => (
                0,
                Some(self.info.width() as usize + self.info.height() as usize),
            ),
        }
    }
}

impl FusedIterator for Traversal<'_> {}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn walk(width: u32, height: u32, origin: Vec2, dir: Vec2) -> Vec<(i32, i32)> {
        let info = GridInfo::new(width, height).expect("valid grid");
        Traversal::new(&info, origin, dir)
            .map(|c| (c.x, c.y))
            .collect()
    }

    #[test]
    fn axis_aligned_positive_x() {
        let cells = walk(10, 10, Vec2::new(0.5, 0.5), Vec2::new(1.0, 0.0));
        let expected: Vec<_> = (0..10).map(|x| (x, 0)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn axis_aligned_negative_y() {
        let cells = walk(4, 6, Vec2::new(2.5, 5.5), Vec2::new(0.0, -3.0));
        assert_eq!(
            cells,
            vec![(2, 5), (2, 4), (2, 3), (2, 2), (2, 1), (2, 0)]
        );
    }

    #[test]
    fn zero_direction_yields_origin_only() {
        let cells = walk(10, 10, Vec2::new(3.2, 7.9), Vec2::ZERO);
        assert_eq!(cells, vec![(3, 7)]);
    }

    #[test]
    fn diagonal_tie_advances_y_first() {
        let cells = walk(5, 5, Vec2::new(4.5, 4.5), Vec2::new(-1.0, -1.0));
        assert_eq!(
            cells,
            vec![
                (4, 4),
                (4, 3),
                (3, 3),
                (3, 2),
                (2, 2),
                (2, 1),
                (1, 1),
                (1, 0),
                (0, 0)
            ]
        );
    }

    #[test]
    fn shallow_slope() {
        // Enters y = 1 at t = 2.5, after crossing x = 1 and x = 2.
        let cells = walk(5, 5, Vec2::new(0.5, 0.5), Vec2::new(1.0, 0.2));
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn boundary_origin_negative_step() {
        let cells = walk(5, 1, Vec2::new(3.0, 0.5), Vec2::new(-1.0, 0.0));
        assert_eq!(cells, vec![(3, 0), (2, 0), (1, 0), (0, 0)]);
    }

    #[test]
    fn boundary_origin_positive_step() {
        let cells = walk(5, 1, Vec2::new(3.0, 0.5), Vec2::new(1.0, 0.0));
        assert_eq!(cells, vec![(3, 0), (4, 0)]);
    }

    #[test]
    fn outside_origin_heading_away() {
        let cells = walk(5, 5, Vec2::new(-2.5, 1.5), Vec2::new(-1.0, 0.0));
        assert_eq!(cells, vec![(-3, 1)]);
    }

    #[test]
    fn outside_origin_heading_in_on_first_step() {
        let cells = walk(3, 3, Vec2::new(-0.5, 1.5), Vec2::new(1.0, 0.0));
        assert_eq!(cells, vec![(-1, 1), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn outside_origin_far_away_stops_on_first_step() {
        let cells = walk(3, 3, Vec2::new(-5.5, 1.5), Vec2::new(1.0, 0.0));
        assert_eq!(cells, vec![(-6, 1)]);
    }

    #[test]
    fn entry_t_tracks_crossings() {
        let info = GridInfo::new(10, 10).unwrap();
        let mut walk = Traversal::new(&info, Vec2::new(0.5, 0.5), Vec2::new(2.0, 0.0));
        assert_eq!(walk.next(), Some(IVec2::new(0, 0)));
        assert_relative_eq!(walk.entry_t(), 0.0);
        assert_eq!(walk.next(), Some(IVec2::new(1, 0)));
        assert_relative_eq!(walk.entry_t(), 0.25);
        assert_eq!(walk.next(), Some(IVec2::new(2, 0)));
        assert_relative_eq!(walk.entry_t(), 0.75);
    }

    #[test]
    fn max_t_clips_the_walk() {
        let info = GridInfo::new(10, 10).unwrap();
        let cells: Vec<_> = Traversal::new(&info, Vec2::new(0.5, 0.5), Vec2::new(3.0, 0.0))
            .with_max_t(1.0)
            .collect();
        assert_eq!(
            cells,
            vec![IVec2::new(0, 0), IVec2::new(1, 0), IVec2::new(2, 0), IVec2::new(3, 0)]
        );
    }

    #[test]
    fn tiny_directions_walk_like_unit_ones() {
        let origin = Vec2::new(0.5, 0.5);
        let diagonal = walk(10, 10, origin, Vec2::new(1.0, 1.0));
        assert_eq!(diagonal.len(), 19);
        assert_eq!(diagonal.last(), Some(&(9, 9)));
        assert_eq!(walk(10, 10, origin, Vec2::new(1e-38, 1e-38)), diagonal);

        let row = walk(10, 10, origin, Vec2::new(1.0, 0.0));
        assert_eq!(row.len(), 10);
        assert_eq!(walk(10, 10, origin, Vec2::new(1e-40, 0.0)), row);
        assert_eq!(walk(10, 10, origin, Vec2::new(f32::from_bits(1), 0.0)), row);
    }

    #[test]
    fn huge_directions_walk_like_unit_ones() {
        let origin = Vec2::new(0.5, 0.5);
        let diagonal = walk(10, 10, origin, Vec2::new(1.0, 1.0));
        assert_eq!(walk(10, 10, origin, Vec2::new(3e38, 3e38)), diagonal);
        assert_eq!(
            walk(10, 10, origin, Vec2::new(f32::MAX, 0.0)),
            walk(10, 10, origin, Vec2::X)
        );
    }

    #[test]
    fn entry_t_stays_in_caller_units_for_short_directions() {
        let info = GridInfo::new(10, 10).unwrap();
        let dir = Vec2::new(2f32.powi(-100), 0.0);
        let mut walk = Traversal::new(&info, Vec2::new(0.5, 0.5), dir);
        walk.next();
        assert_eq!(walk.next(), Some(IVec2::new(1, 0)));
        assert_relative_eq!(walk.entry_t(), 0.5 * 2f32.powi(100), max_relative = 1e-6);

        // Ends at x = 2.5.
        let cells: Vec<_> = Traversal::new(&info, Vec2::new(0.5, 0.5), Vec2::new(1e-30, 0.0))
            .with_max_t(2.0e30)
            .collect();
        assert_eq!(cells, vec![IVec2::new(0, 0), IVec2::new(1, 0), IVec2::new(2, 0)]);
    }

    #[test]
    fn fused_after_exit() {
        let info = GridInfo::new(2, 2).unwrap();
        let mut walk = Traversal::new(&info, Vec2::new(0.5, 0.5), Vec2::new(1.0, 0.0));
        assert_eq!(walk.next(), Some(IVec2::new(0, 0)));
        assert_eq!(walk.next(), Some(IVec2::new(1, 0)));
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
        assert_eq!(walk.size_hint(), (0, Some(0)));
    }
}
