use crate::routes::Route;

#[derive(Debug, Clone)]
pub enum Event {
    RoutesFetched {
        routes: Vec<Route>,
        origin: &'static str,
    },
    FetchError(String),
    /// Emitted by the armed frame ticker; carries the playback generation that
    /// armed it.
    FrameTick(u64),
    StepChanged(usize),
}
