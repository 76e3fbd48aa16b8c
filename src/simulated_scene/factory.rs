use crate::config::{Color, ObjectConfig};
use crate::physics::{PhysicsWorld, RigidBodyHandle};
use crate::render::{NodeFactory, RenderNode};
use crate::simulated_scene::ObjectTracker;
use nalgebra::{Translation3, Vector3};

/// Everything an object needs to exist on both sides: a node to draw, a
/// body to simulate, and the list that keeps them in step.
pub struct SceneContext<'a, F: NodeFactory> {
  pub nodes: &'a mut F,
  pub world: &'a mut PhysicsWorld,
  pub tracker: &'a mut ObjectTracker<F::Node>,
}

impl<'a, F: NodeFactory> SceneContext<'a, F> {
  fn track(
    &mut self,
    mut node: F::Node,
    body: RigidBodyHandle,
    position: Vector3<f32>,
  ) -> RigidBodyHandle {
    node.set_pose(&Translation3::from(position).into());
    self.tracker.push(node, body);
    body
  }

  pub fn create_sphere(
    &mut self,
    radius: f32,
    position: Vector3<f32>,
    mass: f32,
    color: Color,
  ) -> RigidBodyHandle {
    log::debug!("creating sphere r={} at {:?}", radius, position);

    let node = self.nodes.add_sphere(radius, color);
    let body = self.world.add_sphere(radius, mass, position);
    self.track(node, body, position)
  }

  pub fn create_box(
    &mut self,
    width: f32,
    height: f32,
    depth: f32,
    position: Vector3<f32>,
    mass: f32,
    color: Color,
  ) -> RigidBodyHandle {
    log::debug!(
      "creating box {}x{}x{} at {:?}",
      width,
      height,
      depth,
      position
    );

    let node = self.nodes.add_box(width, height, depth, color);
    let body = self.world.add_box(
      Vector3::new(width, height, depth) * 0.5,
      mass,
      position,
    );
    self.track(node, body, position)
  }

  pub fn create_object(&mut self, object: &ObjectConfig) -> RigidBodyHandle {
    let position = object.position();
    match *object {
      ObjectConfig::Sphere {
        radius,
        mass,
        color,
        ..
      } => self.create_sphere(radius, position, mass, color),
      ObjectConfig::Box {
        size: [width, height, depth],
        mass,
        color,
        ..
      } => self.create_box(width, height, depth, position, mass, color),
    }
  }
}
