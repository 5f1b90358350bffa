pub mod scene;

pub use scene::{RayConfig, SceneConfig, load_scene};
