pub mod base;
pub mod factory;
pub mod spawner;
pub mod tracker;

pub use base::{SimulatedScene, SimulatedSceneGenerator};
pub use factory::SceneContext;
pub use spawner::Spawner;
pub use tracker::{ObjectTracker, TrackedObject};
