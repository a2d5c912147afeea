pub mod commands;
pub mod controller;
pub mod state;
pub mod surface;
pub mod ticker;

pub use commands::PlaybackCommand;
pub use controller::RoutePlayback;
pub use state::{PlaybackState, Progress};
pub use surface::{MapSurface, PathStyle};
pub use ticker::{FrameTicker, IntervalTicker};
