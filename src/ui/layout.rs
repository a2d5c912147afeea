use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    ui::{app::App, components::spinner::spinner_frame},
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        f.render_widget(Paragraph::new(self.status_line()), chunks[0]);

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title_top(Line::from(format!(" {} ", self.view_title())).centered());
        let content_inner = content_block.inner(chunks[1]);
        f.render_widget(content_block, chunks[1]);

        self.app
            .router
            .render(f, content_inner, &self.app.state, &self.app.ctx);

        let hints = self
            .app
            .router
            .active_view()
            .map(|view| view.key_hints())
            .unwrap_or_default();
        f.render_widget(
            Paragraph::new(Span::styled(hints, Style::default().fg(colors::NEUTRAL))).centered(),
            chunks[2],
        );
    }

    fn view_title(&self) -> String {
        self.app
            .router
            .active_view()
            .map(|view| view.title())
            .unwrap_or_default()
    }

    fn status_line(&self) -> Line<'static> {
        let state = &self.app.state;
        let mut spans = vec![Span::styled(
            " Campus Navigator ",
            Style::default()
                .fg(colors::BACKGROUND)
                .bg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )];

        if state.is_loading {
            spans.push(Span::raw(format!("  {} loading routes", spinner_frame())));
        } else if let Some(origin) = state.origin {
            spans.push(Span::styled(
                format!("  {} routes · {}", self.app.ctx.catalog.len(), origin),
                Style::default().fg(colors::NEUTRAL),
            ));
        }

        if let Some(error) = &state.error_message {
            spans.push(Span::styled(
                format!("  ⚠ {error} (x to dismiss)"),
                Style::default().fg(colors::ERROR),
            ));
        }

        Line::from(spans)
    }
}
