use kiss3d::scene::SceneNode;
use nalgebra::Point3;

#[derive(Clone, Debug, PartialEq)]
pub struct CameraInfo {
  pub eye: Point3<f32>,
  pub at: Point3<f32>,
  /// Vertical field of view in radians.
  pub fov: f32,
  pub znear: f32,
  pub zfar: f32,
}

/// Runtime tweaks triggered from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugAction {
  SpawnSphere,
  SpawnBox,
  Reset,
}

pub trait Scene {
  fn update(&mut self, delta_secs: f32);

  fn handle_action(&mut self, _action: DebugAction) {}
}

pub trait SceneGenerator {
  type S: Scene;

  fn init_objects(&self, node: &mut SceneNode) -> Self::S;

  fn default_camera_info(&self) -> CameraInfo;

  /// `None` keeps the light attached to the camera.
  fn light_position(&self) -> Option<Point3<f32>>;
}
