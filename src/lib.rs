//! Amanatides & Woo grid traversal.
//!
//! [`Grid2d::cast`] walks every cell a ray crosses, in order, until the ray
//! leaves the grid:
//!
//! ```
//! use glam::{IVec2, Vec2};
//! use voxel_traverse::Grid2d;
//!
//! let grid = Grid2d::new(10, 10)?;
//! let cells: Vec<IVec2> = grid.cast(Vec2::new(0.5, 0.5), Vec2::new(1.0, 0.0)).collect();
//! assert_eq!(cells.len(), 10);
//! assert_eq!(cells[9], IVec2::new(9, 0));
//! # Ok::<(), voxel_traverse::TraversalError>(())
//! ```
//!
//! The [`view`] and [`visualization`] modules drive the `viewer` and
//! `snapshot` binaries that display a traversal.

pub mod grid;
pub mod loaders;
pub mod raycast;
pub mod types;
pub mod view;
pub mod visualization;

pub use grid::Grid2d;
pub use loaders::{SceneConfig, load_scene};
pub use raycast::Traversal;
pub use types::{GridInfo, TraversalError};
