//! Scene configuration, loaded from TOML.
//!
//! Every section is optional. Missing values fall back to the reference
//! scene: a 10x10 floor, one sphere dropped from 3 units up, and four thin
//! boxes scattered around it.

use crate::{Result, SceneError};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
  pub r: f32,
  pub g: f32,
  pub b: f32,
}

impl Color {
  pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
  };

  pub fn from_hex(hex: &str) -> Option<Self> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
      return None;
    }

    let channel = |idx: usize| {
      u8::from_str_radix(&digits[idx..idx + 2], 16)
        .ok()
        .map(|v| v as f32 / 255.0)
    };

    Some(Color {
      r: channel(0)?,
      g: channel(2)?,
      b: channel(4)?,
    })
  }
}

impl TryFrom<String> for Color {
  type Error = String;

  fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
    Color::from_hex(&value)
      .ok_or_else(|| format!("expected a #rrggbb colour, got {:?}", value))
  }
}

impl From<Color> for String {
  fn from(color: Color) -> String {
    color.to_string()
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let to_byte = |v: f32| (v.max(0.0).min(1.0) * 255.0).round() as u8;
    write!(
      f,
      "#{:02x}{:02x}{:02x}",
      to_byte(self.r),
      to_byte(self.g),
      to_byte(self.b)
    )
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMaterialConfig {
  pub friction: f32,
  pub restitution: f32,
}

impl Default for ContactMaterialConfig {
  fn default() -> Self {
    Self {
      friction: 0.1,
      restitution: 0.7,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
  pub gravity: [f32; 3],
  pub contact_material: ContactMaterialConfig,
}

impl Default for WorldConfig {
  fn default() -> Self {
    Self {
      gravity: [0.0, -9.82, 0.0],
      contact_material: ContactMaterialConfig::default(),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepConfig {
  pub time_step: f32,
  pub max_sub_steps: usize,
}

impl Default for StepConfig {
  fn default() -> Self {
    Self {
      time_step: 1.0 / 60.0,
      max_sub_steps: 3,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
  pub eye: [f32; 3],
  pub at: [f32; 3],
  pub fov_degrees: f32,
  pub near: f32,
  pub far: f32,
}

impl Default for CameraConfig {
  fn default() -> Self {
    Self {
      eye: [-3.0, 3.0, 3.0],
      at: [0.0, 0.0, 0.0],
      fov_degrees: 75.0,
      near: 0.1,
      far: 100.0,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
  pub position: [f32; 3],
}

impl Default for LightConfig {
  fn default() -> Self {
    Self {
      position: [5.0, 5.0, 5.0],
    }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorConfig {
  pub size: f32,
  pub color: Color,
}

impl Default for FloorConfig {
  fn default() -> Self {
    Self {
      size: 10.0,
      color: Color {
        r: 0x77 as f32 / 255.0,
        g: 0x77 as f32 / 255.0,
        b: 0x77 as f32 / 255.0,
      },
    }
  }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
  pub seed: u64,
}

fn default_color() -> Color {
  Color::WHITE
}

fn default_sphere_mass() -> f32 {
  1.0
}

fn default_box_mass() -> f32 {
  10.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ObjectConfig {
  Sphere {
    radius: f32,
    position: [f32; 3],
    #[serde(default = "default_sphere_mass")]
    mass: f32,
    #[serde(default = "default_color")]
    color: Color,
  },
  Box {
    size: [f32; 3],
    position: [f32; 3],
    #[serde(default = "default_box_mass")]
    mass: f32,
    #[serde(default = "default_color")]
    color: Color,
  },
}

impl ObjectConfig {
  pub fn sphere(radius: f32, position: [f32; 3]) -> Self {
    ObjectConfig::Sphere {
      radius,
      position,
      mass: default_sphere_mass(),
      color: default_color(),
    }
  }

  pub fn cuboid(size: [f32; 3], position: [f32; 3]) -> Self {
    ObjectConfig::Box {
      size,
      position,
      mass: default_box_mass(),
      color: default_color(),
    }
  }

  pub fn position(&self) -> Vector3<f32> {
    match self {
      ObjectConfig::Sphere { position, .. }
      | ObjectConfig::Box { position, .. } => Vector3::from(*position),
    }
  }
}

fn default_objects() -> Vec<ObjectConfig> {
  vec![
    ObjectConfig::sphere(0.5, [0.0, 3.0, 0.0]),
    ObjectConfig::cuboid([0.2, 1.0, 1.0], [2.0, 1.0, 0.0]),
    ObjectConfig::cuboid([0.2, 1.0, 1.0], [-2.0, 2.0, 0.0]),
    ObjectConfig::cuboid([0.2, 1.0, 1.0], [0.0, 3.0, -3.0]),
    ObjectConfig::cuboid([0.2, 1.0, 1.0], [2.0, 3.0, 3.0]),
  ]
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
  pub world: WorldConfig,
  pub step: StepConfig,
  pub camera: CameraConfig,
  pub light: LightConfig,
  pub floor: FloorConfig,
  pub debug: DebugConfig,
  pub objects: Vec<ObjectConfig>,
}

impl Default for SceneConfig {
  fn default() -> Self {
    Self {
      world: WorldConfig::default(),
      step: StepConfig::default(),
      camera: CameraConfig::default(),
      light: LightConfig::default(),
      floor: FloorConfig::default(),
      debug: DebugConfig::default(),
      objects: default_objects(),
    }
  }
}

fn positive(name: &str, value: f32) -> Result<()> {
  if value.is_finite() && value > 0.0 {
    Ok(())
  } else {
    Err(SceneError::InvalidConfig(format!(
      "{} must be positive and finite, got {}",
      name, value
    )))
  }
}

fn finite(name: &str, values: &[f32]) -> Result<()> {
  if values.iter().all(|v| v.is_finite()) {
    Ok(())
  } else {
    Err(SceneError::InvalidConfig(format!(
      "{} must be finite, got {:?}",
      name, values
    )))
  }
}

impl SceneConfig {
  pub fn from_toml_str(contents: &str) -> Result<Self> {
    let config: SceneConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
  }

  pub fn from_toml_file(path: &Path) -> Result<Self> {
    log::info!("loading scene config from {}", path.display());
    Self::from_toml_str(&fs::read_to_string(path)?)
  }

  pub fn to_toml_string(&self) -> Result<String> {
    Ok(toml::to_string_pretty(self)?)
  }

  pub fn gravity(&self) -> Vector3<f32> {
    Vector3::from(self.world.gravity)
  }

  pub fn camera_eye(&self) -> Point3<f32> {
    Point3::from(self.camera.eye)
  }

  pub fn camera_at(&self) -> Point3<f32> {
    Point3::from(self.camera.at)
  }

  pub fn validate(&self) -> Result<()> {
    finite("world.gravity", &self.world.gravity)?;

    let material = &self.world.contact_material;
    if !(material.friction.is_finite() && material.friction >= 0.0) {
      return Err(SceneError::InvalidConfig(format!(
        "world.contact_material.friction must be non-negative, got {}",
        material.friction
      )));
    }
    if !(0.0..=1.0).contains(&material.restitution) {
      return Err(SceneError::InvalidConfig(format!(
        "world.contact_material.restitution must be within [0, 1], got {}",
        material.restitution
      )));
    }

    positive("step.time_step", self.step.time_step)?;
    if self.step.max_sub_steps == 0 {
      return Err(SceneError::InvalidConfig(
        "step.max_sub_steps must be at least 1".to_string(),
      ));
    }

    finite("camera.eye", &self.camera.eye)?;
    finite("camera.at", &self.camera.at)?;
    if !(self.camera.fov_degrees > 0.0 && self.camera.fov_degrees < 180.0) {
      return Err(SceneError::InvalidConfig(format!(
        "camera.fov_degrees must be within (0, 180), got {}",
        self.camera.fov_degrees
      )));
    }
    positive("camera.near", self.camera.near)?;
    positive("camera.far", self.camera.far)?;
    if self.camera.near >= self.camera.far {
      return Err(SceneError::InvalidConfig(format!(
        "camera.near ({}) must be less than camera.far ({})",
        self.camera.near, self.camera.far
      )));
    }

    finite("light.position", &self.light.position)?;

    // TOML integers are signed
    if self.debug.seed > i64::MAX as u64 {
      return Err(SceneError::InvalidConfig(format!(
        "debug.seed must be at most {}, got {}",
        i64::MAX,
        self.debug.seed
      )));
    }
    positive("floor.size", self.floor.size)?;

    for (idx, object) in self.objects.iter().enumerate() {
      match object {
        ObjectConfig::Sphere {
          radius,
          position,
          mass,
          ..
        } => {
          positive(&format!("objects[{}].radius", idx), *radius)?;
          positive(&format!("objects[{}].mass", idx), *mass)?;
          finite(&format!("objects[{}].position", idx), position)?;
        }
        ObjectConfig::Box {
          size,
          position,
          mass,
          ..
        } => {
          for side in size {
            positive(&format!("objects[{}].size", idx), *side)?;
          }
          positive(&format!("objects[{}].mass", idx), *mass)?;
          finite(&format!("objects[{}].position", idx), position)?;
        }
      }
    }

    Ok(())
  }
}
