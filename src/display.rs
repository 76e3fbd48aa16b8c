use crate::{CameraInfo, DebugAction, Result, Scene, SceneError, SceneGenerator};
use indicatif::ProgressBar;
use kiss3d::camera::ArcBall;
use kiss3d::event::{Action, Key, WindowEvent};
use kiss3d::light::Light;
use kiss3d::nalgebra as kna;
use kiss3d::window::Window;
use nalgebra::Point3;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Clone, Debug, Default)]
pub struct DisplayOptions {
  pub hide: bool,
  pub record_image_dir: Option<PathBuf>,
  pub frame_limit: Option<usize>,
  pub force_sim_fps: Option<f32>,
}

pub fn debug_action(key: Key) -> Option<DebugAction> {
  match key {
    Key::S => Some(DebugAction::SpawnSphere),
    Key::B => Some(DebugAction::SpawnBox),
    Key::R => Some(DebugAction::Reset),
    _ => None,
  }
}

fn to_kiss3d_point(p: &Point3<f32>) -> kna::Point3<f32> {
  kna::Point3::new(p.x, p.y, p.z)
}

fn prepare_record_dir(record_image_dir: &Path) -> Result<()> {
  if record_image_dir.exists() {
    if !record_image_dir.is_dir() {
      return Err(SceneError::RecordDirNotDir(record_image_dir.to_path_buf()));
    }
  } else {
    log::info!("creating {}", record_image_dir.display());
    create_dir_all(record_image_dir)?;
  }

  Ok(())
}

pub fn display_scene<S: SceneGenerator>(
  window_name: &str,
  options: &DisplayOptions,
  scene_gen: &S,
) -> Result<()> {
  let record_image_dir = options.record_image_dir.as_deref();
  if let Some(record_image_dir) = record_image_dir {
    prepare_record_dir(record_image_dir)?;
  }

  let mut window = Window::new_hidden(window_name);

  if !options.hide {
    window.show();
  }

  let mut scene = scene_gen.init_objects(&mut window.add_group());

  window.set_light(
    scene_gen
      .light_position()
      .map(|p| Light::Absolute(to_kiss3d_point(&p)))
      .unwrap_or(Light::StickToCamera),
  );

  let CameraInfo {
    eye,
    at,
    fov,
    znear,
    zfar,
  } = scene_gen.default_camera_info();

  let mut cam = ArcBall::new_with_frustrum(
    fov,
    znear,
    zfar,
    to_kiss3d_point(&eye),
    to_kiss3d_point(&at),
  );

  let mut time_since_last: Option<Instant> = None;

  let mut iters = 0;

  let mut frame_limit_bar = options
    .frame_limit
    .map(|frame_limit| (frame_limit, ProgressBar::new(frame_limit as u64)));

  log::info!("starting render loop");

  while window.render_with_camera(&mut cam) {
    // the very first tick sees no elapsed time
    let delta_time = options.force_sim_fps.map(|fps| 1.0 / fps).unwrap_or_else(
      || {
        time_since_last
          .map(|last| last.elapsed().as_secs_f32())
          .unwrap_or(0.0)
      },
    );
    time_since_last = Some(Instant::now());

    for event in window.events().iter() {
      match event.value {
        WindowEvent::Key(key, Action::Press, _) => {
          if let Some(action) = debug_action(key) {
            scene.handle_action(action);
          }
        }
        WindowEvent::FramebufferSize(width, height) => {
          log::debug!("resized to {}x{}", width, height);
        }
        _ => {}
      }
    }

    if let Some(record_image_dir) = record_image_dir {
      window
        .snap_image()
        .save(record_image_dir.join(format!("output_{}.png", iters)))
        .map_err(|e| SceneError::Snapshot(e.to_string()))?;
    }

    iters += 1;

    if let Some((frame_limit, p_bar)) = &mut frame_limit_bar {
      if iters >= *frame_limit {
        break;
      }
      p_bar.inc(1);
    }

    scene.update(delta_time);
  }

  if let Some((_, p_bar)) = &mut frame_limit_bar {
    p_bar.finish();
  }

  log::info!("render loop finished after {} frames", iters);

  Ok(())
}
