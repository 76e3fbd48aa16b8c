use clap::Parser;
use physics_scene::{
  display_scene, DisplayOptions, SceneConfig, SceneError,
  SimulatedSceneGenerator,
};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(version = "1.0", author = "Ryan G.")]
struct Opts {
  /// TOML scene description; the reference scene is used when omitted
  #[clap(short = 'c', long = "config")]
  config: Option<PathBuf>,

  #[clap(short = 'H', long = "hide")]
  hide: bool,

  #[clap(short = 'r', long = "record-image-dir")]
  record_image_dir: Option<PathBuf>,

  #[clap(short = 'l', long = "frame-limit")]
  frame_limit: Option<usize>,

  #[clap(long = "force-sim-fps")]
  force_sim_fps: Option<f32>,

  /// Seed for objects spawned with the debug keys
  #[clap(
    long = "seed",
    value_parser = clap::value_parser!(u64).range(0..=i64::MAX as u64)
  )]
  seed: Option<u64>,

  /// Print the effective scene config and exit
  #[clap(long = "dump-config")]
  dump_config: bool,
}

fn run(opts: Opts) -> Result<(), SceneError> {
  let mut config = match &opts.config {
    Some(path) => SceneConfig::from_toml_file(path)?,
    None => SceneConfig::default(),
  };

  if let Some(seed) = opts.seed {
    config.debug.seed = seed;
  }

  let generator = SimulatedSceneGenerator::new(config)?;

  if opts.dump_config {
    print!("{}", generator.config().to_toml_string()?);
    return Ok(());
  }

  if let Some(fps) = opts.force_sim_fps {
    if !(fps.is_finite() && fps > 0.0) {
      return Err(SceneError::InvalidConfig(format!(
        "--force-sim-fps must be positive, got {}",
        fps
      )));
    }
  }

  display_scene(
    "physics scene",
    &DisplayOptions {
      hide: opts.hide,
      record_image_dir: opts.record_image_dir,
      frame_limit: opts.frame_limit,
      force_sim_fps: opts.force_sim_fps,
    },
    &generator,
  )
}

fn main() {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("info"),
  )
  .init();

  if let Err(e) = run(Opts::parse()) {
    log::error!("{}", e);
    eprintln!("error: {}", e);
    std::process::exit(1);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seed_limited_to_toml_integers() {
    let max = i64::MAX.to_string();
    let opts =
      Opts::try_parse_from(&["physics-scene", "--seed", max.as_str()]);
    assert_eq!(opts.unwrap().seed, Some(i64::MAX as u64));

    let too_big = (i64::MAX as u64 + 1).to_string();
    let opts =
      Opts::try_parse_from(&["physics-scene", "--seed", too_big.as_str()]);
    assert!(opts.is_err());
  }

  #[test]
  fn errors_report_their_message() {
    let mut config = SceneConfig::default();
    config.step.max_sub_steps = 0;

    let err = match SimulatedSceneGenerator::new(config) {
      Err(e) => e,
      Ok(_) => panic!("zero sub steps should be rejected"),
    };
    assert_eq!(
      err.to_string(),
      "invalid scene config: step.max_sub_steps must be at least 1"
    );
  }
}
