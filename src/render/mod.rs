//! Creating and moving the visible half of each simulated object.
//!
//! The physics side never touches the window directly: scenes are built
//! against a [`NodeFactory`], and [`Kiss3dNodes`] is the one that draws.

pub mod kiss3d_nodes;
#[cfg(test)]
pub mod recording;

pub use kiss3d_nodes::Kiss3dNodes;

use crate::config::Color;
use crate::physics::Pose;

pub trait RenderNode {
  /// Replaces position and orientation, keeping the node's scale.
  fn set_pose(&mut self, pose: &Pose);

  fn remove(self);
}

pub trait NodeFactory {
  type Node: RenderNode;

  /// Square of side `size` lying in the XZ plane, facing +Y.
  fn add_floor(&mut self, size: f32, color: Color) -> Self::Node;

  fn add_sphere(&mut self, radius: f32, color: Color) -> Self::Node;

  fn add_box(
    &mut self,
    width: f32,
    height: f32,
    depth: f32,
    color: Color,
  ) -> Self::Node;
}
