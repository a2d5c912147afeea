use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget},
};

use crate::{routes::RouteStep, util::colors};

pub struct StepsWidget<'a> {
    steps: &'a [RouteStep],
    active: usize,
    accent: ratatui::style::Color,
}

impl<'a> StepsWidget<'a> {
    pub fn new(steps: &'a [RouteStep], active: usize, accent: ratatui::style::Color) -> Self {
        Self {
            steps,
            active,
            accent,
        }
    }
}

impl StatefulWidget for StepsWidget<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let items: Vec<ListItem> = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let is_active = i == self.active;
                let number_style = if is_active {
                    Style::default()
                        .fg(colors::BACKGROUND)
                        .bg(self.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };

                let mut spans = vec![
                    Span::styled(format!(" {:>2} ", step.number), number_style),
                    Span::raw(" "),
                    Span::raw(step.instruction.as_str()),
                ];
                if let Some(distance) = &step.distance {
                    spans.push(Span::styled(
                        format!("  ({distance})"),
                        Style::default().fg(colors::NEUTRAL),
                    ));
                }

                let item = ListItem::new(Line::from(spans));
                if is_active {
                    item.style(Style::default().add_modifier(Modifier::BOLD))
                } else {
                    item
                }
            })
            .collect();

        state.select(if self.steps.is_empty() {
            None
        } else {
            Some(self.active.min(self.steps.len() - 1))
        });

        StatefulWidget::render(List::new(items), area, buf, state);
    }
}
