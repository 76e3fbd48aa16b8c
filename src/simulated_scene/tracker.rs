use crate::physics::{PhysicsWorld, RigidBodyHandle};
use crate::render::RenderNode;

pub struct TrackedObject<N> {
  pub node: N,
  pub body: RigidBodyHandle,
}

/// Render nodes paired with the bodies that drive them.
pub struct ObjectTracker<N> {
  objects: Vec<TrackedObject<N>>,
}

impl<N> Default for ObjectTracker<N> {
  fn default() -> Self {
    Self {
      objects: Vec::new(),
    }
  }
}

impl<N: RenderNode> ObjectTracker<N> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, node: N, body: RigidBodyHandle) {
    self.objects.push(TrackedObject { node, body });
  }

  pub fn len(&self) -> usize {
    self.objects.len()
  }

  pub fn is_empty(&self) -> bool {
    self.objects.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &TrackedObject<N>> {
    self.objects.iter()
  }

  /// Copies every body's position and orientation onto its node.
  pub fn sync(&mut self, world: &PhysicsWorld) {
    for object in &mut self.objects {
      match world.pose(object.body) {
        Some(pose) => object.node.set_pose(&pose),
        None => log::warn!("tracked body {:?} is missing", object.body),
      }
    }
  }

  /// Removes every tracked body from `world` and every node from the scene.
  pub fn clear(&mut self, world: &mut PhysicsWorld) {
    log::info!("removing {} tracked objects", self.objects.len());

    for TrackedObject { node, body } in self.objects.drain(..) {
      world.remove(body);
      node.remove();
    }
  }
}
