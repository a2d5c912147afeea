use flume::Sender;

use crate::{config::NavConfig, event::events::Event, routes::RouteCatalog};

pub struct AppContext {
    pub catalog: RouteCatalog,
    pub config: NavConfig,
    pub event_tx: Sender<Event>,
}
