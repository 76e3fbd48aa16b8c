pub mod config;
pub mod display;
pub mod error;
pub mod physics;
pub mod render;
pub mod scene;
pub mod simulated_scene;
pub mod utils;

pub use config::SceneConfig;
pub use display::{display_scene, DisplayOptions};
pub use error::{Result, SceneError};
pub use scene::{CameraInfo, DebugAction, Scene, SceneGenerator};
pub use simulated_scene::{SimulatedScene, SimulatedSceneGenerator};
