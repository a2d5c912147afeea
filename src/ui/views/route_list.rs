use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    ui::{
        components::{route_card::RouteCard, spinner::Spinner},
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

/// Searchable list of every loaded route with a detail pane.
#[derive(Default)]
pub struct RouteList {
    list_state: ListState,
    query: String,
    is_filtering: bool,
}

impl RouteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    fn visible(&self, ctx: &AppContext) -> Vec<usize> {
        ctx.catalog.filter(&self.query)
    }

    fn selected_route(&self, ctx: &AppContext) -> Option<usize> {
        let visible = self.visible(ctx);
        self.list_state
            .selected()
            .and_then(|i| visible.get(i).copied())
    }

    fn move_selection(&mut self, len: usize, delta: isize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.list_state.select(Some(next));
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char(c) => self.query.push(c),
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Enter | KeyCode::Esc => self.is_filtering = false,
            _ => {}
        }
        self.list_state.select(Some(0));
        Some(Action::None)
    }

    fn render_search(&self, f: &mut Frame, area: Rect, found: usize) {
        let cursor = if self.is_filtering { "▏" } else { "" };
        let query = if self.query.is_empty() && !self.is_filtering {
            Span::styled(
                "press / to search routes or locations",
                Style::default().fg(colors::NEUTRAL),
            )
        } else {
            Span::raw(format!("{}{cursor}", self.query))
        };

        let line = Line::from(vec![
            Span::styled(" ", Style::default().fg(colors::PRIMARY)),
            query,
        ]);
        let count = format!(" {found} route{} ", if found == 1 { "" } else { "s" });

        let block = Block::default()
            .borders(Borders::ALL)
            .title_top(Line::from(count).right_aligned())
            .border_style(if self.is_filtering {
                Style::default().fg(colors::PRIMARY)
            } else {
                Style::default().fg(colors::NEUTRAL)
            });
        f.render_widget(Paragraph::new(line).block(block), area);
    }
}

#[async_trait]
impl View for RouteList {
    fn title(&self) -> String {
        "Campus Routes".to_string()
    }

    fn key_hints(&self) -> &'static str {
        "/ search  ↑↓ select  ⏎ navigate  R reload  q quit"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        if ctx.catalog.is_empty() {
            if state.is_loading {
                f.render_widget(
                    Spinner::new("Loading routes...")
                        .with_style(Style::default().fg(colors::PRIMARY)),
                    area,
                );
            } else {
                f.render_widget(
                    Paragraph::new("No routes available. Press R to retry.").centered(),
                    area,
                );
            }
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);

        let visible = self.visible(ctx);
        self.render_search(f, rows[0], visible.len());

        if visible.is_empty() {
            f.render_widget(
                Paragraph::new(vec![
                    Line::from("No routes found".bold()),
                    Line::from("Try adjusting your search criteria".fg(colors::NEUTRAL)),
                ])
                .centered(),
                rows[1],
            );
            return;
        }

        match self.list_state.selected() {
            Some(i) if i < visible.len() => {}
            _ => self.list_state.select(Some(0)),
        }

        let items: Vec<ListItem> = visible
            .iter()
            .filter_map(|&i| ctx.catalog.get(i))
            .map(|route| {
                let mut meta = format!(
                    "   {} · {:.2} km",
                    route.category.label(),
                    route.distance_km()
                );
                if let Some(details) = &route.details {
                    meta.push_str(&format!(" · {} min", details.estimated_minutes));
                }
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled("● ", Style::default().fg(route.category.color())),
                        Span::raw(route.name.as_str()),
                    ]),
                    Line::from(Span::styled(meta, Style::default().fg(colors::NEUTRAL))),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::RIGHT))
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(list, columns[0], &mut self.list_state);

        if let Some(route) = self.selected_route(ctx).and_then(|i| ctx.catalog.get(i)) {
            let padded = Rect {
                x: columns[1].x + 2,
                width: columns[1].width.saturating_sub(2),
                ..columns[1]
            };
            f.render_widget(RouteCard::new(route), padded);
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.is_filtering {
            return self.handle_filter_key(key);
        }

        let len = self.visible(ctx).len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(len, 1);
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(len, -1);
                Some(Action::None)
            }
            KeyCode::Char('g') => {
                self.move_selection(len, isize::MIN / 2);
                Some(Action::None)
            }
            KeyCode::Char('G') => {
                self.move_selection(len, isize::MAX / 2);
                Some(Action::None)
            }
            KeyCode::Char('/') => {
                self.is_filtering = true;
                Some(Action::None)
            }
            KeyCode::Esc if !self.query.is_empty() => {
                self.query.clear();
                self.list_state.select(Some(0));
                Some(Action::None)
            }
            KeyCode::Enter => self.selected_route(ctx).map(Action::OpenRoute),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::NavConfig,
        routes::{RouteCatalog, builtin::builtin_routes},
    };
    use ratatui::crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    fn ctx() -> AppContext {
        let (event_tx, _rx) = flume::unbounded();
        AppContext {
            catalog: RouteCatalog::new(builtin_routes().to_vec()),
            config: NavConfig::default(),
            event_tx,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn typing_filters_and_enter_opens_the_match() {
        let ctx = ctx();
        let state = AppState::default();
        let mut view = RouteList::new();

        let action = view.handle_input(key(KeyCode::Char('/')), &state, &ctx).await;
        assert_eq!(action, Some(Action::None));
        for c in "audit".chars() {
            view.handle_input(key(KeyCode::Char(c)), &state, &ctx).await;
        }
        view.handle_input(key(KeyCode::Enter), &state, &ctx).await;
        assert_eq!(view.query(), "audit");

        let action = view.handle_input(key(KeyCode::Enter), &state, &ctx).await;
        assert_eq!(action, Some(Action::OpenRoute(3)));
    }

    #[tokio::test]
    async fn selection_stays_in_range() {
        let ctx = ctx();
        let state = AppState::default();
        let mut view = RouteList::new();

        for _ in 0..10 {
            view.handle_input(key(KeyCode::Down), &state, &ctx).await;
        }
        assert_eq!(view.list_state.selected(), Some(4));
        view.handle_input(key(KeyCode::Char('g')), &state, &ctx).await;
        assert_eq!(view.list_state.selected(), Some(0));
        view.handle_input(key(KeyCode::Char('G')), &state, &ctx).await;
        assert_eq!(view.list_state.selected(), Some(4));
    }

    #[tokio::test]
    async fn search_hint_matches_searchable_fields() {
        let ctx = ctx();
        let state = AppState::default();
        let mut view = RouteList::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();

        terminal
            .draw(|f| view.render(f, f.area(), &state, &ctx))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("search routes or locations"));

        view.handle_input(key(KeyCode::Char('/')), &state, &ctx).await;
        for c in "fountain".chars() {
            view.handle_input(key(KeyCode::Char(c)), &state, &ctx).await;
        }
        assert!(view.visible(&ctx).is_empty());
    }

    #[tokio::test]
    async fn unhandled_keys_fall_through() {
        let ctx = ctx();
        let mut view = RouteList::new();
        let action = view
            .handle_input(key(KeyCode::Char('q')), &AppState::default(), &ctx)
            .await;
        assert!(action.is_none());
    }
}
