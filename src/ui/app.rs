use flume::Receiver;
use tracing::info;

use crate::{
    config::NavConfig,
    event::events::Event,
    routes::RouteCatalog,
    util::task::TaskManager,
};

use super::{
    context::AppContext,
    layout::AppLayout,
    message::AppMessage,
    router::Router,
    state::AppState,
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
    views::RouteList,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub state: AppState,
    pub router: Router,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: NavConfig) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            event_rx,
            ctx: AppContext {
                catalog: RouteCatalog::default(),
                config,
                event_tx,
            },
            state: AppState::default(),
            router: Router::new(Box::new(RouteList::new())),
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new(self.ctx.config.frame_interval)?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        while !self.should_quit {
            if self.has_focus {
                tui.draw(|f| {
                    let area = f.area();
                    AppLayout::new(self).render(f, area);
                })?;
            }
            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        info!("Exited cleanly");
        Ok(())
    }

    pub async fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::GoBack => {
                self.router.pop();
            }
            AppMessage::ReloadRoutes => EventHandler::spawn_route_fetch(self, true),
            AppMessage::DismissError => self.state.error_message = None,
        }
    }
}
