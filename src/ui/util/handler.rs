use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, error, info};

use crate::{
    event::events::Event,
    routes::source::load_configured,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        traits::Action,
        tui::{TerminalEvent, Tui},
        views::Navigation,
    },
};

enum Incoming {
    Terminal(TerminalEvent),
    App(Event),
    Closed,
}

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal or application event, then drains whatever
    /// else is queued on the application channel.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let incoming = tokio::select! {
            Some(evt) = tui.next() => Incoming::Terminal(evt),
            Ok(evt) = app.event_rx.recv_async() => Incoming::App(evt),
            else => Incoming::Closed,
        };

        let mut should_render = match incoming {
            Incoming::Terminal(evt) => Self::handle_event(app, evt, tui).await?,
            Incoming::App(evt) => {
                Self::handle_action(app, evt).await;
                true
            }
            Incoming::Closed => {
                app.should_quit = true;
                return Ok(false);
            }
        };

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => Self::spawn_route_fetch(app, false),
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Render => return Ok(app.has_focus),
            TerminalEvent::Resize(..) | TerminalEvent::Error => {}
        }

        Ok(true)
    }

    pub async fn handle_action(app: &mut App, evt: Event) {
        app.router.on_event(&evt, &app.ctx).await;

        match evt {
            Event::RoutesFetched { routes, origin } => {
                info!("{} routes ready from {}", routes.len(), origin);
                app.ctx.catalog.replace(routes);
                app.state.is_loading = false;
                app.state.origin = Some(origin);
            }
            Event::FetchError(message) => {
                app.state.is_loading = false;
                app.state.error_message = Some(message);
            }
            Event::StepChanged(step) => debug!("Reached step {}", step + 1),
            Event::FrameTick(_) => {}
        }
    }

    pub fn spawn_route_fetch(app: &mut App, refresh: bool) {
        app.state.is_loading = true;
        app.state.error_message = None;

        let tx = app.ctx.event_tx.clone();
        let config = app.ctx.config.clone();

        app.task_manager.spawn(
            "fetch_routes",
            tokio::spawn(async move {
                match load_configured(&config, refresh).await {
                    Ok(loaded) => {
                        if let Some(reason) = loaded.degraded {
                            let _ = tx.send(Event::FetchError(format!(
                                "{reason}; showing {} routes",
                                loaded.origin
                            )));
                        }
                        let _ = tx.send(Event::RoutesFetched {
                            routes: loaded.routes,
                            origin: loaded.origin,
                        });
                    }
                    Err(e) => {
                        error!("Failed to load routes: {}", e);
                        let message = format!("Failed to load route data: {e}");
                        let _ = tx.send(Event::FetchError(message));
                    }
                }
            }),
        );
    }

    async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        if evt.code == KeyCode::Char('c') && evt.modifiers == KeyModifiers::CONTROL {
            app.update(AppMessage::Quit).await;
            return;
        }

        let action = app.router.handle_input(evt, &app.state, &app.ctx).await;
        if let Some(action) = action {
            Self::dispatch_action(app, action).await;
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt) {
            app.update(msg).await;
        }
    }

    async fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::Back => {
                app.router.pop();
            }
            Action::OpenRoute(index) => {
                app.ctx.catalog.select(index);
                match Navigation::new(&app.ctx) {
                    Some(view) => app.router.push(Box::new(view)),
                    None => debug!("No route at index {}", index),
                }
            }
            Action::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::NavConfig, routes::builtin::builtin_routes};

    fn app() -> App {
        App::new(NavConfig::default())
    }

    #[tokio::test]
    async fn fetched_routes_fill_the_catalog() {
        let mut app = app();
        app.state.is_loading = true;

        EventHandler::handle_action(
            &mut app,
            Event::RoutesFetched {
                routes: builtin_routes().to_vec(),
                origin: "built-in",
            },
        )
        .await;

        assert_eq!(app.ctx.catalog.len(), 5);
        assert!(!app.state.is_loading);
        assert_eq!(app.state.origin, Some("built-in"));
    }

    #[tokio::test]
    async fn fetch_errors_are_surfaced() {
        let mut app = app();
        EventHandler::handle_action(&mut app, Event::FetchError("offline".into())).await;
        assert_eq!(app.state.error_message.as_deref(), Some("offline"));

        app.update(AppMessage::DismissError).await;
        assert!(app.state.error_message.is_none());
    }

    #[tokio::test]
    async fn opening_a_route_pushes_and_back_pops_the_session() {
        let mut app = app();
        app.ctx.catalog.replace(builtin_routes().to_vec());

        EventHandler::dispatch_action(&mut app, Action::OpenRoute(2)).await;
        assert_eq!(app.router.depth(), 2);
        assert_eq!(app.ctx.catalog.active_index(), 2);
        assert_eq!(
            app.router.active_view().map(|v| v.title()).as_deref(),
            Some("Canteen to Engineering Lab")
        );

        EventHandler::dispatch_action(&mut app, Action::Back).await;
        assert_eq!(app.router.depth(), 1);
        app.update(AppMessage::GoBack).await;
        assert_eq!(app.router.depth(), 1);
    }

    #[tokio::test]
    async fn opening_with_an_empty_catalog_does_nothing() {
        let mut app = app();
        EventHandler::dispatch_action(&mut app, Action::OpenRoute(0)).await;
        assert_eq!(app.router.depth(), 1);
    }

    #[tokio::test]
    async fn offline_fetch_delivers_builtin_routes() {
        let mut app = App::new(NavConfig {
            offline: true,
            ..Default::default()
        });

        EventHandler::spawn_route_fetch(&mut app, false);
        assert!(app.state.is_loading);

        let wait = std::time::Duration::from_secs(5);
        let event = tokio::time::timeout(wait, app.event_rx.recv_async())
            .await
            .unwrap()
            .unwrap();
        EventHandler::handle_action(&mut app, event).await;

        assert_eq!(app.ctx.catalog.len(), 5);
        assert_eq!(app.state.origin, Some("built-in"));
    }

    #[tokio::test]
    async fn reload_key_refetches_routes() {
        let mut app = App::new(NavConfig {
            offline: true,
            ..Default::default()
        });
        app.state.error_message = Some("stale".into());

        let reload = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        EventHandler::handle_key_event(&mut app, reload).await;
        assert!(app.state.is_loading);
        assert!(app.state.error_message.is_none());

        let wait = std::time::Duration::from_secs(5);
        let event = tokio::time::timeout(wait, app.event_rx.recv_async())
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(event, Event::RoutesFetched { .. }));
        EventHandler::handle_action(&mut app, event).await;
        assert!(!app.state.is_loading);
        assert_eq!(app.ctx.catalog.len(), 5);
    }
}
