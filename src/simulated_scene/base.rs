use crate::{
  config::{ObjectConfig, SceneConfig},
  physics::{FixedStepper, PhysicsWorld, RigidBodyHandle},
  render::{Kiss3dNodes, NodeFactory},
  simulated_scene::{ObjectTracker, SceneContext, Spawner},
  CameraInfo, DebugAction, Result, Scene, SceneGenerator,
};
use kiss3d::scene::SceneNode;
use nalgebra::Point3;

pub struct SimulatedSceneGenerator {
  config: SceneConfig,
}

impl SimulatedSceneGenerator {
  pub fn new(config: SceneConfig) -> Result<Self> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn config(&self) -> &SceneConfig {
    &self.config
  }

  /// Creates the floor, then every configured object, on both the render
  /// and the physics side.
  pub fn build<F: NodeFactory>(&self, mut nodes: F) -> SimulatedScene<F> {
    let config = &self.config;

    let mut world = PhysicsWorld::new(
      config.gravity(),
      config.world.contact_material.into(),
      config.step.time_step,
    );

    world.add_floor();
    let floor_node = nodes.add_floor(config.floor.size, config.floor.color);

    let mut scene = SimulatedScene {
      nodes,
      _floor_node: floor_node,
      world,
      tracker: ObjectTracker::new(),
      stepper: FixedStepper::from(&config.step),
      spawner: Spawner::new(config.debug.seed),
    };

    for object in &config.objects {
      scene.spawn(object);
    }

    log::info!(
      "scene ready: {} objects, {} bodies",
      scene.tracker.len(),
      scene.world.body_count()
    );

    scene
  }
}

pub struct SimulatedScene<F: NodeFactory> {
  nodes: F,
  _floor_node: F::Node,
  world: PhysicsWorld,
  tracker: ObjectTracker<F::Node>,
  stepper: FixedStepper,
  spawner: Spawner,
}

impl<F: NodeFactory> SimulatedScene<F> {
  pub fn world(&self) -> &PhysicsWorld {
    &self.world
  }

  pub fn tracker(&self) -> &ObjectTracker<F::Node> {
    &self.tracker
  }

  fn context(&mut self) -> SceneContext<'_, F> {
    SceneContext {
      nodes: &mut self.nodes,
      world: &mut self.world,
      tracker: &mut self.tracker,
    }
  }

  pub fn spawn(&mut self, object: &ObjectConfig) -> RigidBodyHandle {
    self.context().create_object(object)
  }

  /// Drops every tracked object; the floor stays.
  pub fn reset(&mut self) {
    self.tracker.clear(&mut self.world);
  }
}

impl<F: NodeFactory> Scene for SimulatedScene<F> {
  fn update(&mut self, delta_secs: f32) {
    let steps = self.stepper.advance(delta_secs);
    log::trace!("frame {:.4}s -> {} physics steps", delta_secs, steps);

    self.world.n_steps(steps);
    self.tracker.sync(&self.world);
  }

  fn handle_action(&mut self, action: DebugAction) {
    log::info!("debug action {:?}", action);

    match action {
      DebugAction::SpawnSphere => {
        let object = self.spawner.random_sphere();
        self.spawn(&object);
      }
      DebugAction::SpawnBox => {
        let object = self.spawner.random_box();
        self.spawn(&object);
      }
      DebugAction::Reset => self.reset(),
    }
  }
}

impl SceneGenerator for SimulatedSceneGenerator {
  type S = SimulatedScene<Kiss3dNodes>;

  fn init_objects(&self, node: &mut SceneNode) -> Self::S {
    self.build(Kiss3dNodes::new(node.add_group()))
  }

  fn default_camera_info(&self) -> CameraInfo {
    let camera = &self.config.camera;

    CameraInfo {
      eye: self.config.camera_eye(),
      at: self.config.camera_at(),
      fov: camera.fov_degrees.to_radians(),
      znear: camera.near,
      zfar: camera.far,
    }
  }

  fn light_position(&self) -> Option<Point3<f32>> {
    Some(Point3::from(self.config.light.position))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Color;
  use crate::physics::Pose;
  use crate::render::recording::{NodeShape, RecordingNodes};
  use crate::SceneError;
  use nalgebra::Translation3;
  use proptest::prelude::*;
  use proptest_derive::Arbitrary;

  fn default_scene() -> (SimulatedScene<RecordingNodes>, RecordingNodes) {
    let nodes = RecordingNodes::default();
    let generator =
      SimulatedSceneGenerator::new(SceneConfig::default()).unwrap();
    (generator.build(nodes.clone()), nodes)
  }

  #[test]
  fn builds_reference_scene() {
    let (scene, nodes) = default_scene();

    assert_eq!(scene.tracker().len(), 5);
    assert_eq!(scene.world().body_count(), 6);

    let records = nodes.records();
    assert_eq!(records.len(), 6);
    assert_eq!(records[0].shape, NodeShape::Floor { size: 10.0 });
    assert_eq!(records[1].shape, NodeShape::Sphere { radius: 0.5 });
    for record in &records[2..] {
      assert_eq!(
        record.shape,
        NodeShape::Box {
          width: 0.2,
          height: 1.0,
          depth: 1.0,
        }
      );
    }

    assert_eq!(
      records[3].pose,
      Some(Pose::from(Translation3::new(-2.0, 2.0, 0.0)))
    );
  }

  #[test]
  fn rejects_invalid_config() {
    let mut config = SceneConfig::default();
    config.step.max_sub_steps = 0;

    assert!(matches!(
      SimulatedSceneGenerator::new(config),
      Err(SceneError::InvalidConfig(_))
    ));
  }

  #[test]
  fn camera_from_config() {
    let generator =
      SimulatedSceneGenerator::new(SceneConfig::default()).unwrap();
    let camera = generator.default_camera_info();

    assert_eq!(camera.eye, Point3::new(-3.0, 3.0, 3.0));
    assert_eq!(camera.at, Point3::origin());
    assert!((camera.fov - 75.0f32.to_radians()).abs() < 1e-6);
    assert_eq!(
      generator.light_position(),
      Some(Point3::new(5.0, 5.0, 5.0))
    );
  }

  #[test]
  fn update_moves_nodes_with_bodies() {
    let (mut scene, nodes) = default_scene();

    for _ in 0..30 {
      scene.update(1.0 / 60.0);
    }

    let sphere = scene.tracker().iter().next().unwrap().body;
    let sphere_pose = scene.world().pose(sphere).unwrap();
    assert!(sphere_pose.translation.vector.y < 3.0);
    assert_eq!(nodes.records()[1].pose, Some(sphere_pose));
  }

  #[test]
  fn first_frame_steps_once() {
    let (mut scene, nodes) = default_scene();

    scene.update(0.0);

    let sphere = scene.tracker().iter().next().unwrap().body;
    let velocity = scene.world().linear_velocity(sphere).unwrap();
    assert!((velocity.y + 9.82 / 60.0).abs() < 1e-4);
    assert_eq!(nodes.records()[1].pose_updates, 2);
  }

  #[test]
  fn sphere_comes_to_rest() {
    let (mut scene, _) = default_scene();

    for _ in 0..600 {
      scene.update(1.0 / 60.0);
    }

    let sphere = scene.tracker().iter().next().unwrap().body;
    let height = scene.world().pose(sphere).unwrap().translation.vector.y;
    assert!((height - 0.5).abs() < 0.05, "sphere centre at {}", height);
  }

  #[test]
  fn debug_actions_spawn_and_reset() {
    let (mut scene, nodes) = default_scene();

    scene.handle_action(DebugAction::SpawnSphere);
    scene.handle_action(DebugAction::SpawnBox);
    assert_eq!(scene.tracker().len(), 7);
    assert_eq!(scene.world().body_count(), 8);

    scene.handle_action(DebugAction::Reset);
    assert!(scene.tracker().is_empty());
    assert_eq!(scene.world().body_count(), 1);

    let live = nodes.live();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].shape, NodeShape::Floor { size: 10.0 });

    scene.update(1.0 / 60.0);
    scene.handle_action(DebugAction::SpawnSphere);
    assert_eq!(scene.tracker().len(), 1);
  }

  #[derive(Debug, Clone, Copy, Arbitrary)]
  enum SpawnKind {
    Sphere,
    Box,
  }

  proptest! {
    #[test]
    fn nodes_match_bodies_after_update(
      kind in any::<SpawnKind>(),
      size in prop::array::uniform3(0.05f32..2.0),
      x in -4.0f32..4.0,
      y in 2.0f32..10.0,
      z in -4.0f32..4.0,
      frame in 0.0f32..0.1,
    ) {
      let nodes = RecordingNodes::default();
      let mut config = SceneConfig::default();
      config.objects.clear();
      let mut scene =
        SimulatedSceneGenerator::new(config).unwrap().build(nodes.clone());

      let object = match kind {
        SpawnKind::Sphere => ObjectConfig::Sphere {
          radius: size[0],
          position: [x, y, z],
          mass: 1.0,
          color: Color::WHITE,
        },
        SpawnKind::Box => ObjectConfig::cuboid(size, [x, y, z]),
      };
      let body = scene.spawn(&object);

      scene.update(frame);

      let record = nodes.records().pop().unwrap();
      prop_assert_eq!(record.pose, scene.world().pose(body));
    }
  }
}
