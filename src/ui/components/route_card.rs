use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{routes::Route, util::colors};

/// Summary of one route: metadata, landmarks and directions.
pub struct RouteCard<'a> {
    route: &'a Route,
}

impl<'a> RouteCard<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }
}

impl Widget for RouteCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let route = self.route;
        let label = Style::default().fg(colors::NEUTRAL);

        let mut lines = vec![
            Line::from(Span::styled(
                route.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!(" {} ", route.category.label()),
                    Style::default().fg(colors::BACKGROUND).bg(route.category.color()),
                ),
            ]),
            Line::default(),
        ];

        if let Some(description) = &route.description {
            lines.push(Line::from(description.as_str()));
            lines.push(Line::default());
        }

        lines.push(Line::from(vec![
            Span::styled("Distance   ", label),
            Span::raw(format!("{:.2} km", route.distance_km())),
        ]));

        if let Some(details) = &route.details {
            lines.push(Line::from(vec![
                Span::styled("Est. time  ", label),
                Span::raw(format!("{} min", details.estimated_minutes)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Difficulty ", label),
                Span::raw(details.difficulty.label()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("From       ", label),
                Span::raw(details.start_location.as_str()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("To         ", label),
                Span::raw(details.end_location.as_str()),
            ]));
            if !details.waypoints.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("Via        ", label),
                    Span::raw(details.waypoints.join(" → ")),
                ]));
            }
            if !details.landmarks.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("Landmarks  ", label),
                    Span::raw(details.landmarks.join(", ")),
                ]));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from("Directions".fg(colors::PRIMARY).bold()));
        for step in route.steps() {
            lines.push(Line::from(format!("{:>2}. {}", step.number, step.instruction)));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
