use crate::config::{Color, ObjectConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SPAWN_HEIGHT: f32 = 3.0;
const SPAWN_HALF_SPREAD: f32 = 1.5;

/// Random objects dropped in from the debug keys.
pub struct Spawner {
  rng: StdRng,
}

impl Spawner {
  pub fn new(seed: u64) -> Self {
    Self {
      rng: StdRng::seed_from_u64(seed),
    }
  }

  fn position(&mut self) -> [f32; 3] {
    [
      self.rng.gen_range(-SPAWN_HALF_SPREAD..SPAWN_HALF_SPREAD),
      SPAWN_HEIGHT,
      self.rng.gen_range(-SPAWN_HALF_SPREAD..SPAWN_HALF_SPREAD),
    ]
  }

  fn color(&mut self) -> Color {
    Color {
      r: self.rng.gen_range(0.3..1.0),
      g: self.rng.gen_range(0.3..1.0),
      b: self.rng.gen_range(0.3..1.0),
    }
  }

  pub fn random_sphere(&mut self) -> ObjectConfig {
    ObjectConfig::Sphere {
      radius: self.rng.gen_range(0.1..0.5),
      position: self.position(),
      mass: 1.0,
      color: self.color(),
    }
  }

  pub fn random_box(&mut self) -> ObjectConfig {
    let mut side = || self.rng.gen_range(0.1..1.0);
    let size = [side(), side(), side()];

    ObjectConfig::Box {
      size,
      position: self.position(),
      mass: 10.0,
      color: self.color(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::SceneConfig;

  #[test]
  fn same_seed_same_objects() {
    let mut a = Spawner::new(7);
    let mut b = Spawner::new(7);

    for _ in 0..10 {
      assert_eq!(a.random_sphere(), b.random_sphere());
      assert_eq!(a.random_box(), b.random_box());
    }
  }

  #[test]
  fn spawned_objects_are_valid() {
    let mut spawner = Spawner::new(0);
    let mut config = SceneConfig::default();
    config.objects = (0..100)
      .flat_map(|_| vec![spawner.random_sphere(), spawner.random_box()])
      .collect();

    config.validate().unwrap();

    for object in &config.objects {
      let position = object.position();
      assert_eq!(position.y, SPAWN_HEIGHT);
      assert!(position.x.abs() <= SPAWN_HALF_SPREAD);
      assert!(position.z.abs() <= SPAWN_HALF_SPREAD);
    }
  }
}
