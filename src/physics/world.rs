use crate::physics::ContactMaterial;
use nalgebra::{Isometry3, Vector3};
use rapier3d::prelude::*;

pub type Pose = Isometry3<f32>;

/// Owns every rapier set needed to step a world with one shared material.
pub struct PhysicsWorld {
  gravity: Vector3<f32>,
  material: ContactMaterial,
  integration_parameters: IntegrationParameters,
  pipeline: PhysicsPipeline,
  island_manager: IslandManager,
  broad_phase: BroadPhase,
  narrow_phase: NarrowPhase,
  bodies: RigidBodySet,
  colliders: ColliderSet,
  impulse_joints: ImpulseJointSet,
  multibody_joints: MultibodyJointSet,
  ccd_solver: CCDSolver,
}

impl PhysicsWorld {
  pub fn new(
    gravity: Vector3<f32>,
    material: ContactMaterial,
    time_step: f32,
  ) -> Self {
    let mut integration_parameters = IntegrationParameters::default();
    integration_parameters.dt = time_step;

    log::debug!(
      "creating physics world: gravity {:?}, {:?}, step {}s",
      gravity,
      material,
      time_step
    );

    Self {
      gravity,
      material,
      integration_parameters,
      pipeline: PhysicsPipeline::new(),
      island_manager: IslandManager::new(),
      broad_phase: BroadPhase::new(),
      narrow_phase: NarrowPhase::new(),
      bodies: RigidBodySet::new(),
      colliders: ColliderSet::new(),
      impulse_joints: ImpulseJointSet::new(),
      multibody_joints: MultibodyJointSet::new(),
      ccd_solver: CCDSolver::new(),
    }
  }

  pub fn gravity(&self) -> Vector3<f32> {
    self.gravity
  }

  pub fn material(&self) -> ContactMaterial {
    self.material
  }

  pub fn time_step(&self) -> f32 {
    self.integration_parameters.dt
  }

  pub fn body_count(&self) -> usize {
    self.bodies.len()
  }

  fn insert(
    &mut self,
    body: RigidBody,
    collider: ColliderBuilder,
  ) -> RigidBodyHandle {
    let handle = self.bodies.insert(body);
    self.colliders.insert_with_parent(
      self.material.apply(collider).build(),
      handle,
      &mut self.bodies,
    );
    handle
  }

  /// Static infinite plane through the origin facing +Y.
  pub fn add_floor(&mut self) -> RigidBodyHandle {
    self.insert(
      RigidBodyBuilder::fixed().build(),
      ColliderBuilder::halfspace(Vector3::y_axis()),
    )
  }

  pub fn add_sphere(
    &mut self,
    radius: f32,
    mass: f32,
    position: Vector3<f32>,
  ) -> RigidBodyHandle {
    self.insert(
      RigidBodyBuilder::dynamic().translation(position).build(),
      ColliderBuilder::ball(radius).mass(mass),
    )
  }

  pub fn add_box(
    &mut self,
    half_extents: Vector3<f32>,
    mass: f32,
    position: Vector3<f32>,
  ) -> RigidBodyHandle {
    self.insert(
      RigidBodyBuilder::dynamic().translation(position).build(),
      ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
        .mass(mass),
    )
  }

  /// Removes the body and every collider attached to it.
  pub fn remove(&mut self, handle: RigidBodyHandle) -> bool {
    self
      .bodies
      .remove(
        handle,
        &mut self.island_manager,
        &mut self.colliders,
        &mut self.impulse_joints,
        &mut self.multibody_joints,
        true,
      )
      .is_some()
  }

  pub fn pose(&self, handle: RigidBodyHandle) -> Option<Pose> {
    self.bodies.get(handle).map(|body| *body.position())
  }

  pub fn linear_velocity(
    &self,
    handle: RigidBodyHandle,
  ) -> Option<Vector3<f32>> {
    self.bodies.get(handle).map(|body| *body.linvel())
  }

  pub fn step(&mut self) {
    self.pipeline.step(
      &self.gravity,
      &self.integration_parameters,
      &mut self.island_manager,
      &mut self.broad_phase,
      &mut self.narrow_phase,
      &mut self.bodies,
      &mut self.colliders,
      &mut self.impulse_joints,
      &mut self.multibody_joints,
      &mut self.ccd_solver,
      None,
      &(),
      &(),
    );
  }

  pub fn n_steps(&mut self, steps: usize) {
    for _ in 0..steps {
      self.step();
    }
  }
}
