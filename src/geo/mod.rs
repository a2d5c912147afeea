use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in kilometres.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), other.latitude.to_radians());
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

pub fn path_length_km(points: &[GeoPoint]) -> f64 {
    points.windows(2).map(|w| w[0].distance_km(&w[1])).sum()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            south: first.latitude,
            west: first.longitude,
            north: first.latitude,
            east: first.longitude,
        };

        Some(points.iter().skip(1).fold(init, |b, p| Self {
            south: b.south.min(p.latitude),
            west: b.west.min(p.longitude),
            north: b.north.max(p.latitude),
            east: b.east.max(p.longitude),
        }))
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_every_point() {
        let points = [
            GeoPoint::new(18.4570, 73.8670),
            GeoPoint::new(18.4590, 73.8665),
            GeoPoint::new(18.4565, 73.8690),
        ];
        let bounds = Bounds::from_points(&points).unwrap();

        assert_eq!(bounds.south, 18.4565);
        assert_eq!(bounds.north, 18.4590);
        assert_eq!(bounds.west, 73.8665);
        assert_eq!(bounds.east, 73.8690);
        assert!((bounds.center().latitude - 18.45775).abs() < 1e-9);
    }

    #[test]
    fn empty_slice_has_no_bounds() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn one_hundredth_degree_of_latitude_is_about_a_kilometre() {
        let a = GeoPoint::new(18.45, 73.86);
        let b = GeoPoint::new(18.46, 73.86);
        let d = a.distance_km(&b);
        assert!((d - 1.112).abs() < 0.01, "got {d}");
        assert_eq!(path_length_km(&[a]), 0.0);
        assert!((path_length_km(&[a, b, a]) - 2.0 * d).abs() < 1e-9);
    }
}
