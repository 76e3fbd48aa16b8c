use crate::config::ContactMaterialConfig;
use rapier3d::geometry::ColliderBuilder;

/// Friction and restitution shared by every collider in the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactMaterial {
  pub friction: f32,
  pub restitution: f32,
}

impl ContactMaterial {
  pub fn apply(&self, builder: ColliderBuilder) -> ColliderBuilder {
    builder
      .friction(self.friction)
      .restitution(self.restitution)
  }
}

impl Default for ContactMaterial {
  fn default() -> Self {
    ContactMaterialConfig::default().into()
  }
}

impl From<ContactMaterialConfig> for ContactMaterial {
  fn from(config: ContactMaterialConfig) -> Self {
    Self {
      friction: config.friction,
      restitution: config.restitution,
    }
  }
}
