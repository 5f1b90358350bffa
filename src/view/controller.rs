use glam::{IVec2, Vec2};

use crate::grid::Grid2d;
use crate::loaders::SceneConfig;
use crate::view::{RayHandles, ViewState};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Other,
}

/// Window-system independent input, in window pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    MouseDown { button: MouseButton, pos: Vec2 },
    MouseUp { button: MouseButton, pos: Vec2 },
    MouseMove { pos: Vec2, delta: Vec2 },
    /// Wheel movement in lines, positive away from the user.
    Scroll(i32),
    ResetView,
    ToggleSegment,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CursorHint {
    Arrow,
    Hand,
    Move,
}

/// Interaction state for the ray viewer.
///
/// Right-drag pans the grid, left-drag moves a ray handle, the wheel zooms.
/// A pan and a handle drag never run at the same time.
#[derive(Debug, Clone)]
pub struct ViewController {
    view: ViewState,
    handles: RayHandles,
    panning: bool,
    dragging_ray: bool,
    segment_only: bool,
}

impl ViewController {
    pub fn new(view: ViewState, handles: RayHandles, segment_only: bool) -> Self {
        Self {
            view,
            handles,
            panning: false,
            dragging_ray: false,
            segment_only,
        }
    }

    pub fn from_scene(scene: &SceneConfig) -> Self {
        Self::new(
            ViewState::from_scene(scene),
            scene.handles(),
            scene.segment_only,
        )
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn handles(&self) -> &RayHandles {
        &self.handles
    }

    pub fn segment_only(&self) -> bool {
        self.segment_only
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    pub fn is_dragging_ray(&self) -> bool {
        self.dragging_ray
    }

    /// Apply one input event. Returns the cursor to show, or `None` to leave it unchanged.
    pub fn handle(&mut self, event: InputEvent) -> Option<CursorHint> {
        match event {
            InputEvent::MouseDown {
                button: MouseButton::Left,
                pos,
            } => {
                if !self.panning && self.handles.hit_test(pos).is_some() {
                    self.dragging_ray = true;
                }
                None
            }
            InputEvent::MouseDown {
                button: MouseButton::Right,
                ..
            } => {
                if self.dragging_ray {
                    return None;
                }
                self.panning = true;
                Some(CursorHint::Move)
            }
            InputEvent::MouseUp {
                button: MouseButton::Left,
                ..
            } => {
                self.dragging_ray = false;
                None
            }
            InputEvent::MouseUp {
                button: MouseButton::Right,
                pos,
            } => {
                self.panning = false;
                Some(self.hover_hint(pos))
            }
            InputEvent::MouseDown { .. } | InputEvent::MouseUp { .. } => None,
            InputEvent::MouseMove { pos, delta } => {
                if self.panning {
                    self.view.translate(delta.round().as_ivec2());
                    None
                } else if self.dragging_ray {
                    self.handles.translate(delta);
                    None
                } else {
                    Some(self.hover_hint(pos))
                }
            }
            InputEvent::Scroll(lines) => {
                self.view.zoom(lines);
                None
            }
            InputEvent::ResetView => {
                self.view.reset_position();
                self.view.reset_zoom();
                None
            }
            InputEvent::ToggleSegment => {
                self.segment_only = !self.segment_only;
                None
            }
        }
    }

    fn hover_hint(&mut self, pos: Vec2) -> CursorHint {
        if self.handles.hit_test(pos).is_some() {
            CursorHint::Hand
        } else {
            CursorHint::Arrow
        }
    }

    /// Cells crossed by the displayed ray, in traversal order.
    pub fn traverse(&self, grid: &Grid2d) -> Vec<IVec2> {
        let origin = self.view.pixel_to_cell(self.handles.start);
        if self.segment_only {
            let end = self.view.pixel_to_cell(self.handles.end);
            grid.cast_segment(origin, end).collect()
        } else {
            let dir = self.view.pixel_delta_to_cell(self.handles.direction());
            grid.cast(origin, dir).collect()
        }
    }
}
