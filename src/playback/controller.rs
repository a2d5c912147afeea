use std::sync::atomic::{AtomicU64, Ordering};

use flume::Sender;
use tracing::{debug, trace};

use crate::{
    event::events::Event,
    geo::GeoPoint,
    playback::{
        commands::PlaybackCommand,
        state::{PlaybackState, Progress},
        surface::MapSurface,
        ticker::FrameTicker,
    },
};

// Shared by every session so a tick still in flight from a discarded session
// can never match a later one.
static GENERATIONS: AtomicU64 = AtomicU64::new(0);

fn next_generation() -> u64 {
    GENERATIONS.fetch_add(1, Ordering::Relaxed) + 1
}

/// Drives a marker along one route's points, one point per frame tick.
///
/// A controller lives for one navigation session. Dropping it drops the
/// ticker, which releases the frame loop.
pub struct RoutePlayback<S, T>
where
    S: MapSurface,
    T: FrameTicker,
{
    points: Vec<GeoPoint>,
    state: PlaybackState,
    current_index: usize,
    generation: u64,
    surface: S,
    ticker: T,
    event_tx: Sender<Event>,
}

impl<S, T> RoutePlayback<S, T>
where
    S: MapSurface,
    T: FrameTicker,
{
    pub fn new(
        points: Vec<GeoPoint>,
        step_count: usize,
        mut surface: S,
        ticker: T,
        event_tx: Sender<Event>,
    ) -> Self {
        if let Some(first) = points.first() {
            surface.set_marker_position(*first);
        }

        Self {
            points,
            state: PlaybackState::new(step_count),
            current_index: 0,
            generation: 0,
            surface,
            ticker,
            event_tx,
        }
    }

    pub fn handle_command(&mut self, cmd: PlaybackCommand) {
        match cmd {
            PlaybackCommand::Start => self.start(),
            PlaybackCommand::Stop => self.stop(),
            PlaybackCommand::Toggle => self.toggle(),
            PlaybackCommand::JumpToStep(step) => self.jump_to_step(step),
        }
    }

    pub fn start(&mut self) {
        if self.state.is_playing() || self.points.is_empty() {
            return;
        }

        self.generation = next_generation();
        self.state.set_playing(true);
        self.ticker.arm(self.generation);
        debug!(
            "Playback started at point {}/{}",
            self.current_index,
            self.points.len()
        );
    }

    pub fn stop(&mut self) {
        self.ticker.disarm();
        if self.state.is_playing() {
            self.state.set_playing(false);
            debug!("Playback stopped at point {}", self.current_index);
        }
    }

    pub fn toggle(&mut self) {
        if self.state.is_playing() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Moves to the first point of `step`, clamped into the valid range. The
    /// play state is left untouched and no step notification is sent.
    pub fn jump_to_step(&mut self, step: isize) {
        if self.points.is_empty() {
            return;
        }

        let last = self.state.step_count() as isize - 1;
        let step = step.clamp(0, last) as usize;
        let progress = Progress::new(step, self.state.step_count());

        self.state.set_progress(progress);
        self.current_index = progress.scaled(self.points.len());
        self.show(self.points[self.current_index]);
        debug!("Jumped to step {} (point {})", step, self.current_index);
    }

    /// Handles one frame tick. Ticks from a previous `start` or arriving after
    /// `stop` are ignored.
    pub fn on_frame(&mut self, generation: u64) {
        if !self.state.is_playing() || generation != self.generation || self.points.is_empty() {
            return;
        }
        self.advance();
    }

    fn advance(&mut self) {
        let total = self.points.len();
        // wraps to the first point; playback loops until stopped
        let next = (self.current_index + 1) % total;
        self.current_index = next;

        if let Some(step) = self.state.set_progress(Progress::new(next, total)) {
            trace!("Step changed to {}", step);
            let _ = self.event_tx.send(Event::StepChanged(step));
        }

        self.show(self.points[next]);
    }

    fn show(&mut self, point: GeoPoint) {
        self.surface.set_marker_position(point);
        self.surface.center_on(point);
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn progress(&self) -> f64 {
        self.state.progress().fraction()
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step()
    }

    pub fn step_count(&self) -> usize {
        self.state.step_count()
    }

    /// Generation of the most recent `start`; 0 before the first one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_point(&self) -> Option<GeoPoint> {
        self.points.get(self.current_index).copied()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<S, T> Drop for RoutePlayback<S, T>
where
    S: MapSurface,
    T: FrameTicker,
{
    fn drop(&mut self) {
        self.ticker.disarm();
    }
}
