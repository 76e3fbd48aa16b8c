use crate::config::Color;
use crate::physics::Pose;
use crate::render::{NodeFactory, RenderNode};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum NodeShape {
  Floor { size: f32 },
  Sphere { radius: f32 },
  Box { width: f32, height: f32, depth: f32 },
}

#[derive(Clone, Debug)]
pub struct NodeRecord {
  pub shape: NodeShape,
  pub color: Color,
  pub pose: Option<Pose>,
  pub pose_updates: usize,
  pub removed: bool,
}

type Records = Rc<RefCell<Vec<NodeRecord>>>;

/// Remembers every node it hands out so tests can inspect them later.
#[derive(Clone, Default)]
pub struct RecordingNodes {
  records: Records,
}

pub struct RecordingNode {
  idx: usize,
  records: Records,
}

impl RecordingNodes {
  pub fn records(&self) -> Vec<NodeRecord> {
    self.records.borrow().clone()
  }

  pub fn live(&self) -> Vec<NodeRecord> {
    self
      .records
      .borrow()
      .iter()
      .filter(|record| !record.removed)
      .cloned()
      .collect()
  }

  fn push(&mut self, shape: NodeShape, color: Color) -> RecordingNode {
    let mut records = self.records.borrow_mut();
    records.push(NodeRecord {
      shape,
      color,
      pose: None,
      pose_updates: 0,
      removed: false,
    });

    RecordingNode {
      idx: records.len() - 1,
      records: self.records.clone(),
    }
  }
}

impl RecordingNode {
  pub fn record(&self) -> NodeRecord {
    self.records.borrow()[self.idx].clone()
  }
}

impl RenderNode for RecordingNode {
  fn set_pose(&mut self, pose: &Pose) {
    let mut records = self.records.borrow_mut();
    let record = &mut records[self.idx];
    assert!(!record.removed, "pose set on a removed node");
    record.pose = Some(*pose);
    record.pose_updates += 1;
  }

  fn remove(self) {
    self.records.borrow_mut()[self.idx].removed = true;
  }
}

impl NodeFactory for RecordingNodes {
  type Node = RecordingNode;

  fn add_floor(&mut self, size: f32, color: Color) -> RecordingNode {
    self.push(NodeShape::Floor { size }, color)
  }

  fn add_sphere(&mut self, radius: f32, color: Color) -> RecordingNode {
    self.push(NodeShape::Sphere { radius }, color)
  }

  fn add_box(
    &mut self,
    width: f32,
    height: f32,
    depth: f32,
    color: Color,
  ) -> RecordingNode {
    self.push(
      NodeShape::Box {
        width,
        height,
        depth,
      },
      color,
    )
  }
}
