//! Interactive view state for displaying a traversal in a window.
//!
//! Nothing here depends on a windowing system; the `viewer` binary translates
//! its events into [`InputEvent`]s and renders with [`crate::visualization`].

pub mod camera;
pub mod controller;
pub mod handles;

pub use camera::ViewState;
pub use controller::{CursorHint, InputEvent, MouseButton, ViewController};
pub use handles::{Handle, RayHandles};
