use ratatui::style::Color;

use crate::geo::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    pub color: Color,
    pub width: u16,
    pub opacity: f32,
}

impl PathStyle {
    pub fn highlighted(color: Color) -> Self {
        Self {
            color,
            width: 6,
            opacity: 1.0,
        }
    }

    pub fn muted(color: Color) -> Self {
        Self {
            color,
            width: 3,
            opacity: 0.3,
        }
    }
}

/// Something that can show a route and a moving position on a map.
pub trait MapSurface {
    fn draw_path(&mut self, points: &[GeoPoint], style: PathStyle);
    fn set_marker_position(&mut self, point: GeoPoint);
    fn center_on(&mut self, point: GeoPoint);
}
