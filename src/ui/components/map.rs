use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Widget,
        canvas::{Canvas, Context, Line as Segment, Points},
    },
};

use crate::{
    geo::{Bounds, GeoPoint},
    playback::surface::{MapSurface, PathStyle},
    util::colors,
};

const MIN_SPAN_DEG: f64 = 0.0005;
const MAX_SPAN_DEG: f64 = 0.5;
const FIT_PADDING: f64 = 1.3;

#[derive(Debug, Clone)]
struct DrawnPath {
    points: Vec<GeoPoint>,
    style: PathStyle,
}

#[derive(Debug, Clone)]
struct Pin {
    point: GeoPoint,
    label: &'static str,
    style: Style,
}

/// In-memory map scene drawn onto a braille canvas.
#[derive(Debug, Clone)]
pub struct MapView {
    paths: Vec<DrawnPath>,
    pins: Vec<Pin>,
    marker: Option<GeoPoint>,
    center: GeoPoint,
    span: f64,
    zoom_factor: f64,
}

impl MapView {
    pub fn new(center: GeoPoint, span: f64, zoom_factor: f64) -> Self {
        Self {
            paths: Vec::new(),
            pins: Vec::new(),
            marker: None,
            center,
            span: span.clamp(MIN_SPAN_DEG, MAX_SPAN_DEG),
            zoom_factor: zoom_factor.max(1.01),
        }
    }

    pub fn add_pin(&mut self, point: GeoPoint, label: &'static str, style: Style) {
        self.pins.push(Pin {
            point,
            label,
            style,
        });
    }

    pub fn fit_bounds(&mut self, bounds: &Bounds) {
        let center = bounds.center();
        let lat_scale = center.latitude.to_radians().cos().max(0.01);
        let span = bounds.width().max(bounds.height() / lat_scale) * FIT_PADDING;

        self.center = center;
        self.span = span.clamp(MIN_SPAN_DEG, MAX_SPAN_DEG);
    }

    pub fn zoom_in(&mut self) {
        self.span = (self.span / self.zoom_factor).max(MIN_SPAN_DEG);
    }

    pub fn zoom_out(&mut self) {
        self.span = (self.span * self.zoom_factor).min(MAX_SPAN_DEG);
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn marker(&self) -> Option<GeoPoint> {
        self.marker
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Visible `(x_bounds, y_bounds)` for a canvas of `area`, keeping
    /// distances roughly true on a terminal whose cells are twice as tall as
    /// they are wide.
    fn viewport(&self, area: Rect) -> ([f64; 2], [f64; 2]) {
        let half_x = self.span / 2.0;
        let lat_scale = self.center.latitude.to_radians().cos();
        let aspect = (area.height.max(1) as f64 * 2.0) / area.width.max(1) as f64;
        let half_y = half_x * lat_scale * aspect;

        (
            [self.center.longitude - half_x, self.center.longitude + half_x],
            [self.center.latitude - half_y, self.center.latitude + half_y],
        )
    }

    fn draw_route(ctx: &mut Context, path: &DrawnPath, y_nudge: f64) {
        let color = colors::fade(path.style.color, path.style.opacity);

        if let [only] = path.points.as_slice() {
            ctx.draw(&Points {
                coords: &[(only.longitude, only.latitude)],
                color,
            });
            return;
        }

        // wide strokes are approximated by parallel passes
        let passes: &[f64] = if path.style.width >= 5 {
            &[-1.0, 0.0, 1.0]
        } else {
            &[0.0]
        };

        for offset in passes {
            for pair in path.points.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                ctx.draw(&Segment::new(
                    a.longitude,
                    a.latitude + offset * y_nudge,
                    b.longitude,
                    b.latitude + offset * y_nudge,
                    color,
                ));
            }
        }
    }
}

impl MapSurface for MapView {
    fn draw_path(&mut self, points: &[GeoPoint], style: PathStyle) {
        if points.is_empty() {
            return;
        }
        self.paths.push(DrawnPath {
            points: points.to_vec(),
            style,
        });
    }

    fn set_marker_position(&mut self, point: GeoPoint) {
        self.marker = Some(point);
    }

    fn center_on(&mut self, point: GeoPoint) {
        self.center = point;
    }
}

impl Widget for &MapView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (x_bounds, y_bounds) = self.viewport(area);
        // one braille dot row
        let y_nudge = (y_bounds[1] - y_bounds[0]) / (area.height as f64 * 4.0);

        let mut order: Vec<&DrawnPath> = self.paths.iter().collect();
        order.sort_by_key(|p| p.style.width);

        Canvas::default()
            .background_color(colors::BACKGROUND)
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                for path in &order {
                    MapView::draw_route(ctx, path, y_nudge);
                }
                ctx.layer();

                for pin in &self.pins {
                    ctx.print(
                        pin.point.longitude,
                        pin.point.latitude,
                        Span::styled(pin.label, pin.style),
                    );
                }
                if let Some(marker) = self.marker {
                    ctx.print(
                        marker.longitude,
                        marker.latitude,
                        Span::styled(
                            "●",
                            Style::default()
                                .fg(colors::MARKER)
                                .add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campus() -> GeoPoint {
        GeoPoint::new(18.4574, 73.8677)
    }

    #[test]
    fn surface_calls_update_the_scene() {
        let mut map = MapView::new(campus(), 0.006, 1.5);
        map.draw_path(&[], PathStyle::muted(colors::PRIMARY));
        assert_eq!(map.path_count(), 0);

        map.draw_path(&[campus()], PathStyle::highlighted(colors::PRIMARY));
        let elsewhere = GeoPoint::new(18.4580, 73.8690);
        map.set_marker_position(elsewhere);
        map.center_on(elsewhere);

        assert_eq!(map.path_count(), 1);
        assert_eq!(map.marker(), Some(elsewhere));
        assert_eq!(map.center(), elsewhere);
    }

    #[test]
    fn fit_bounds_centers_and_pads() {
        let mut map = MapView::new(GeoPoint::new(0.0, 0.0), 0.006, 1.5);
        let bounds = Bounds::from_points(&[
            GeoPoint::new(18.4560, 73.8660),
            GeoPoint::new(18.4580, 73.8700),
        ])
        .unwrap();
        map.fit_bounds(&bounds);

        assert!((map.center().latitude - 18.4570).abs() < 1e-9);
        assert!((map.center().longitude - 73.8680).abs() < 1e-9);
        assert!((map.span() - 0.004 * FIT_PADDING).abs() < 1e-9);
    }

    #[test]
    fn zoom_is_bounded() {
        let mut map = MapView::new(campus(), 0.006, 2.0);
        map.zoom_in();
        assert!((map.span() - 0.003).abs() < 1e-12);
        for _ in 0..50 {
            map.zoom_in();
        }
        assert_eq!(map.span(), MIN_SPAN_DEG);
        for _ in 0..50 {
            map.zoom_out();
        }
        assert_eq!(map.span(), MAX_SPAN_DEG);
    }

    #[test]
    fn renders_marker_at_the_center() {
        let mut map = MapView::new(campus(), 0.006, 1.5);
        let route = [
            GeoPoint::new(18.4570, 73.8670),
            campus(),
            GeoPoint::new(18.4578, 73.8684),
        ];
        map.draw_path(&route, PathStyle::highlighted(colors::PRIMARY));
        map.draw_path(&route[..2], PathStyle::muted(colors::NEUTRAL));
        map.set_marker_position(campus());

        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        (&map).render(area, &mut buf);

        let rendered: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert!(rendered.contains('●'));
    }

    #[test]
    fn empty_area_is_skipped() {
        let map = MapView::new(campus(), 0.006, 1.5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
        (&map).render(Rect::new(0, 0, 0, 0), &mut buf);
    }
}
