/// Exact fraction `position / resolution` along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    position: usize,
    resolution: usize,
}

impl Progress {
    pub const ZERO: Progress = Progress {
        position: 0,
        resolution: 1,
    };

    /// `position` wraps into `[0, resolution)`; a zero resolution is treated
    /// as one.
    pub fn new(position: usize, resolution: usize) -> Self {
        let resolution = resolution.max(1);
        Self {
            position: position % resolution,
            resolution,
        }
    }

    pub fn fraction(&self) -> f64 {
        self.position as f64 / self.resolution as f64
    }

    /// `floor(progress * buckets)` in integer arithmetic.
    pub fn scaled(&self, buckets: usize) -> usize {
        self.position * buckets / self.resolution
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::ZERO
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    is_playing: bool,
    progress: Progress,
    step_count: usize,
    current_step: usize,
}

impl PlaybackState {
    pub fn new(step_count: usize) -> Self {
        Self {
            is_playing: false,
            progress: Progress::ZERO,
            step_count: step_count.max(1),
            current_step: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Stores `progress` and re-derives the step. Returns the new step when it
    /// differs from the previous one.
    pub fn set_progress(&mut self, progress: Progress) -> Option<usize> {
        self.progress = progress;
        let step = progress.scaled(self.step_count).min(self.step_count - 1);
        if step == self.current_step {
            return None;
        }
        self.current_step = step;
        Some(step)
    }
}
