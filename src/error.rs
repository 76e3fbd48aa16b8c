use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
  #[error("io error: {0}")]
  Io(#[from] io::Error),

  #[error("failed to parse scene config: {0}")]
  ConfigParse(#[from] toml::de::Error),

  #[error("failed to serialize scene config: {0}")]
  ConfigSerialize(#[from] toml::ser::Error),

  #[error("invalid scene config: {0}")]
  InvalidConfig(String),

  #[error("record image path {0} exists and isn't a directory")]
  RecordDirNotDir(PathBuf),

  #[error("failed to save frame: {0}")]
  Snapshot(String),
}

pub type Result<T> = std::result::Result<T, SceneError>;
