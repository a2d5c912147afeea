pub mod config;
pub mod event;
pub mod geo;
pub mod playback;
pub mod routes;
pub mod ui;
pub mod util;
