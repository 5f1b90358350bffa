use std::path::Path;

use glam::{UVec2, Vec2};
use log::debug;
use serde::Deserialize;

use crate::types::{
    DEFAULT_CELL_SIZE, DEFAULT_RAY_OFFSET, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    MAX_CELL_SIZE, MIN_CELL_SIZE, TraversalError,
};
use crate::view::RayHandles;

/// Viewer scene description.
///
/// Every key is optional; missing keys take the defaults of [`SceneConfig::default`].
///
/// ```yaml
/// window: [640, 400]
/// cell_size: 32
/// min_cell_size: 16
/// max_cell_size: 64
/// ray:
///   start: [320.0, 200.0]
///   end: [420.0, 300.0]
/// segment_only: false
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Window size in pixels.
    pub window: [u32; 2],
    /// Initial cell size in pixels, also the size restored on a view reset.
    pub cell_size: u32,
    pub min_cell_size: u32,
    pub max_cell_size: u32,
    pub ray: RayConfig,
    /// Clip the traversal at the end handle instead of running to the grid edge.
    pub segment_only: bool,
}

/// Initial ray handle positions in window pixels.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RayConfig {
    pub start: Option<[f32; 2]>,
    pub end: Option<[f32; 2]>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window: [DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT],
            cell_size: DEFAULT_CELL_SIZE,
            min_cell_size: MIN_CELL_SIZE,
            max_cell_size: MAX_CELL_SIZE,
            ray: RayConfig::default(),
            segment_only: false,
        }
    }
}

impl SceneConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TraversalError> {
        let scene: SceneConfig = serde_yaml::from_str(yaml)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn validate(&self) -> Result<(), TraversalError> {
        if self.window[0] == 0 || self.window[1] == 0 {
            return Err(TraversalError::InvalidConfig(format!(
                "window must be non-empty, got {}x{}",
                self.window[0], self.window[1]
            )));
        }

        if self.min_cell_size == 0 {
            return Err(TraversalError::InvalidConfig(
                "min_cell_size must be positive".to_string(),
            ));
        }

        if !(self.min_cell_size..=self.max_cell_size).contains(&self.cell_size) {
            return Err(TraversalError::InvalidConfig(format!(
                "cell_size {} must lie within [{}, {}]",
                self.cell_size, self.min_cell_size, self.max_cell_size
            )));
        }

        Ok(())
    }

    pub fn viewport(&self) -> UVec2 {
        UVec2::from_array(self.window)
    }

    /// Ray handles with defaults filled in: the start at the window center and
    /// the end offset diagonally from the start.
    pub fn handles(&self) -> RayHandles {
        let start = self
            .ray
            .start
            .map(Vec2::from_array)
            .unwrap_or_else(|| RayHandles::centered(self.viewport()).start);
        let end = self
            .ray
            .end
            .map(Vec2::from_array)
            .unwrap_or(start + Vec2::splat(DEFAULT_RAY_OFFSET));
        RayHandles::new(start, end)
    }
}

pub fn load_scene(yaml_path: impl AsRef<Path>) -> Result<SceneConfig, TraversalError> {
    let yaml_path = yaml_path.as_ref();
    let yaml_str = std::fs::read_to_string(yaml_path)?;
    let scene = SceneConfig::from_yaml_str(&yaml_str)?;
    debug!("loaded scene {}: {scene:?}", yaml_path.display());
    Ok(scene)
}
