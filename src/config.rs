use std::time::Duration;

use crate::geo::GeoPoint;

/// Where the map opens when a route has no points to frame.
pub const CAMPUS_CENTER: GeoPoint = GeoPoint::new(18.4574, 73.8677);

pub const DEFAULT_GEOJSON_URL: &str = "https://gist.githubusercontent.com/Dharshini0177/26784fd66c27f17ea6710c98890048aa/raw/c253a1cdc9f029c4613aa882d041978a2b38340a/college_map.geojson";

#[derive(Debug, Clone)]
pub struct NavConfig {
    pub frame_interval: Duration,
    pub geojson_url: String,
    pub cache_file: String,
    /// Skip the network source and use the built-in routes only.
    pub offline: bool,
    /// Longitude span, in degrees, shown by the map at its default zoom.
    pub map_span_deg: f64,
    pub zoom_factor: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(33),
            geojson_url: DEFAULT_GEOJSON_URL.to_string(),
            cache_file: "routes.geojson".to_string(),
            offline: false,
            map_span_deg: 0.006,
            zoom_factor: 1.5,
        }
    }
}

impl NavConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("CAMPUSNAV_GEOJSON_URL").filter(|u| !u.trim().is_empty()) {
            config.geojson_url = url;
        }
        if let Some(ms) = lookup("CAMPUSNAV_FRAME_MS").and_then(|v| v.trim().parse::<u64>().ok()) {
            config.frame_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(flag) = lookup("CAMPUSNAV_OFFLINE") {
            config.offline = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        config
    }
}
