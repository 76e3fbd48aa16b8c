use crate::config::StepConfig;

/// Turns variable frame times into a whole number of fixed-size steps.
#[derive(Clone, Debug)]
pub struct FixedStepper {
  time_step: f32,
  max_sub_steps: usize,
  accumulator: f32,
}

impl FixedStepper {
  pub fn new(time_step: f32, max_sub_steps: usize) -> Self {
    debug_assert!(time_step > 0.0);
    debug_assert!(max_sub_steps > 0);

    Self {
      time_step,
      max_sub_steps,
      accumulator: 0.0,
    }
  }

  pub fn accumulator(&self) -> f32 {
    self.accumulator
  }

  /// Number of fixed steps to run for `elapsed` seconds of frame time.
  ///
  /// A zero elapsed time (the very first frame) still runs one step. Time
  /// left over after `max_sub_steps` steps is dropped so a stalled frame
  /// cannot leave a backlog for the following frames.
  pub fn advance(&mut self, elapsed: f32) -> usize {
    let elapsed = if elapsed.is_finite() && elapsed >= 0.0 {
      elapsed
    } else {
      log::warn!("ignoring invalid frame time {}", elapsed);
      0.0
    };

    if elapsed == 0.0 {
      return 1;
    }

    self.accumulator += elapsed;

    let mut steps = 0;
    while self.accumulator >= self.time_step && steps < self.max_sub_steps {
      self.accumulator -= self.time_step;
      steps += 1;
    }

    if self.accumulator >= self.time_step {
      log::debug!(
        "dropping {:.4}s of simulation backlog after {} sub steps",
        self.accumulator,
        steps
      );
      self.accumulator %= self.time_step;
    }

    steps
  }
}

impl From<&StepConfig> for FixedStepper {
  fn from(config: &StepConfig) -> Self {
    Self::new(config.time_step, config.max_sub_steps)
  }
}
