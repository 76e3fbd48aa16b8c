use crate::config::Color;
use crate::physics::Pose;
use crate::render::{NodeFactory, RenderNode};
use kiss3d::nalgebra as kna;
use kiss3d::scene::SceneNode;
use std::f32::consts::FRAC_PI_2;

/// Adds nodes under a single kiss3d group.
pub struct Kiss3dNodes {
  group: SceneNode,
}

impl Kiss3dNodes {
  pub fn new(group: SceneNode) -> Self {
    Self { group }
  }

  fn finish(mut node: SceneNode, color: Color) -> SceneNode {
    node.set_color(color.r, color.g, color.b);
    node
  }
}

fn to_kiss3d_isometry(pose: &Pose) -> kna::Isometry3<f32> {
  let t = pose.translation.vector;
  let q = pose.rotation.quaternion().coords;

  kna::Isometry3::from_parts(
    kna::Translation3::new(t.x, t.y, t.z),
    kna::UnitQuaternion::new_unchecked(kna::Quaternion::new(
      q.w, q.x, q.y, q.z,
    )),
  )
}

/// Turns the generated XY quad into a floor facing +Y.
fn floor_rotation() -> kna::UnitQuaternion<f32> {
  kna::UnitQuaternion::from_axis_angle(&kna::Vector3::x_axis(), -FRAC_PI_2)
}

impl RenderNode for SceneNode {
  fn set_pose(&mut self, pose: &Pose) {
    self.set_local_transformation(to_kiss3d_isometry(pose));
  }

  fn remove(mut self) {
    self.unlink();
  }
}

impl NodeFactory for Kiss3dNodes {
  type Node = SceneNode;

  fn add_floor(&mut self, size: f32, color: Color) -> SceneNode {
    // quads are generated in the XY plane
    let mut node = self.group.add_quad(size, size, 1, 1);
    node.set_local_rotation(floor_rotation());
    node.enable_backface_culling(false);

    Self::finish(node, color)
  }

  fn add_sphere(&mut self, radius: f32, color: Color) -> SceneNode {
    Self::finish(self.group.add_sphere(radius), color)
  }

  fn add_box(
    &mut self,
    width: f32,
    height: f32,
    depth: f32,
    color: Color,
  ) -> SceneNode {
    // the cube's extents live in its local scale, untouched by set_pose
    Self::finish(self.group.add_cube(width, height, depth), color)
  }
}
