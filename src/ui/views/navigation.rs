use async_trait::async_trait;
use flume::Sender;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, ListState, Paragraph},
};
use tracing::debug;

use crate::{
    config::{CAMPUS_CENTER, NavConfig},
    event::events::Event,
    geo::Bounds,
    playback::{IntervalTicker, MapSurface, PathStyle, PlaybackCommand, RoutePlayback},
    routes::{Route, RouteStep},
    ui::{
        components::{map::MapView, steps::StepsWidget, spinner::spinner_frame},
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

/// One navigation session: the active route on the map, its directions, and
/// the playback controller moving the marker.
pub struct Navigation {
    route: Route,
    steps: Vec<RouteStep>,
    playback: RoutePlayback<MapView, IntervalTicker>,
    steps_state: ListState,
    active_step: usize,
    fullscreen: bool,
}

impl Navigation {
    pub fn new(ctx: &AppContext) -> Option<Self> {
        let route = ctx.catalog.active_route()?.clone();
        let map = build_map(&route, ctx.catalog.all_routes(), &ctx.config);
        let ticker = IntervalTicker::new(ctx.config.frame_interval, ctx.event_tx.clone());
        Some(Self::with_ticker(route, map, ticker, ctx.event_tx.clone()))
    }

    pub fn with_ticker(
        route: Route,
        map: MapView,
        ticker: IntervalTicker,
        event_tx: Sender<Event>,
    ) -> Self {
        let steps = route.steps();
        let playback =
            RoutePlayback::new(route.points.clone(), steps.len(), map, ticker, event_tx);
        debug!(
            "Navigation session for '{}' ({} points, {} steps)",
            route.name,
            route.points.len(),
            steps.len()
        );

        Self {
            route,
            steps,
            playback,
            steps_state: ListState::default(),
            active_step: 0,
            fullscreen: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    fn jump(&mut self, step: isize) {
        self.playback.handle_command(PlaybackCommand::JumpToStep(step));
        self.active_step = self.playback.current_step();
    }

    fn recenter(&mut self) {
        if let Some(point) = self.playback.current_point() {
            self.playback.surface_mut().center_on(point);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let category = self.route.category;
        let status = if self.playback.is_playing() {
            Span::styled(
                format!("{} navigating", spinner_frame()),
                Style::default().fg(colors::ACCENT),
            )
        } else {
            Span::styled("⏸ paused", Style::default().fg(colors::NEUTRAL))
        };

        let line = Line::from(vec![
            Span::styled(
                self.route.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", category.label()),
                Style::default().fg(colors::BACKGROUND).bg(category.color()),
            ),
            Span::raw("  "),
            status,
            Span::styled(
                format!("  {:>3.0}%", self.playback.progress() * 100.0),
                Style::default().fg(colors::NEUTRAL),
            ),
        ]);

        f.render_widget(
            Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM)),
            area,
        );
    }
}

fn build_map(active: &Route, all: &[Route], config: &NavConfig) -> MapView {
    let color = active.category.color();
    let mut map = MapView::new(
        active.points.first().copied().unwrap_or(CAMPUS_CENTER),
        config.map_span_deg,
        config.zoom_factor,
    );

    for route in all.iter().filter(|r| r.name != active.name) {
        map.draw_path(&route.points, PathStyle::muted(route.category.color()));
    }
    map.draw_path(&active.points, PathStyle::highlighted(color));

    if let (Some(start), Some(end)) = (active.points.first(), active.points.last()) {
        let pin = Style::default()
            .fg(colors::BACKGROUND)
            .bg(color)
            .add_modifier(Modifier::BOLD);
        map.add_pin(*start, "S", pin);
        map.add_pin(*end, "E", pin);
    }
    if let Some(bounds) = Bounds::from_points(&active.points) {
        map.fit_bounds(&bounds);
    }

    map
}

#[async_trait]
impl View for Navigation {
    fn title(&self) -> String {
        self.route.name.clone()
    }

    fn key_hints(&self) -> &'static str {
        "space play/pause  ↑↓ step  1-9 jump  +/- zoom  c center  f fullscreen  esc back"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(area);
        self.render_header(f, rows[0]);

        let body = if self.fullscreen {
            vec![rows[1]]
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(rows[1])
                .to_vec()
        };

        let map_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title_top(" Map ");
        let map_area = map_block.inner(body[0]);
        f.render_widget(map_block, body[0]);
        f.render_widget(self.playback.surface(), map_area);

        if let Some(&steps_area) = body.get(1) {
            let button = if self.playback.is_playing() {
                " ⏸ Pause ".fg(colors::ERROR)
            } else {
                " ▶ Play ".fg(colors::PRIMARY)
            };
            let steps_block = Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .title_top(" Route Steps ")
                .title_top(Line::from(button).right_aligned());
            let inner = steps_block.inner(steps_area);
            f.render_widget(steps_block, steps_area);
            f.render_stateful_widget(
                StepsWidget::new(&self.steps, self.active_step, self.route.category.color()),
                inner,
                &mut self.steps_state,
            );
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Char('p') => {
                self.playback.handle_command(PlaybackCommand::Toggle);
            }
            KeyCode::Down | KeyCode::Char('j') => self.jump(self.active_step as isize + 1),
            KeyCode::Up | KeyCode::Char('k') => self.jump(self.active_step as isize - 1),
            KeyCode::Char(c @ '1'..='9') => self.jump(c as isize - '1' as isize),
            KeyCode::Char('f') => self.fullscreen = !self.fullscreen,
            KeyCode::Char('+') | KeyCode::Char('=') => self.playback.surface_mut().zoom_in(),
            KeyCode::Char('-') => self.playback.surface_mut().zoom_out(),
            KeyCode::Char('c') => self.recenter(),
            KeyCode::Esc | KeyCode::Backspace => {
                self.playback.handle_command(PlaybackCommand::Stop);
                return Some(Action::Back);
            }
            _ => return None,
        }
        Some(Action::None)
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::FrameTick(generation) => self.playback.on_frame(*generation),
            // a jump may have superseded a step change still in the queue
            Event::StepChanged(step) if *step == self.playback.current_step() => {
                self.active_step = *step;
            }
            _ => {}
        }
    }
}
