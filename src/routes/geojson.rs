use serde::Deserialize;
use tracing::debug;

use crate::{
    geo::GeoPoint,
    routes::{
        RouteError,
        model::{Category, Route, RouteStep},
    },
};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Properties>,
    geometry: Option<Geometry>,
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    steps: Option<Vec<StepProperties>>,
}

#[derive(Debug, Deserialize)]
struct StepProperties {
    number: usize,
    instruction: String,
    #[serde(default)]
    distance: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    LineString { coordinates: Vec<Vec<f64>> },
    #[serde(other)]
    Unsupported,
}

/// Parses a FeatureCollection into routes. Only `LineString` features become
/// routes; positions are `[longitude, latitude, ...]`.
pub fn parse_routes(document: &str) -> Result<Vec<Route>, RouteError> {
    let collection: FeatureCollection = serde_json::from_str(document)?;
    let total = collection.features.len();

    let routes: Vec<Route> = collection
        .features
        .into_iter()
        .enumerate()
        .filter_map(|(index, feature)| feature.into_route(index))
        .collect();

    debug!("Parsed {} routes from {} features", routes.len(), total);

    if routes.is_empty() {
        return Err(RouteError::EmptyDocument);
    }
    Ok(routes)
}

impl Feature {
    fn into_route(self, index: usize) -> Option<Route> {
        let Some(Geometry::LineString { coordinates }) = self.geometry else {
            return None;
        };

        let points = coordinates
            .iter()
            .filter(|position| position.len() >= 2)
            .map(|position| GeoPoint::new(position[1], position[0]))
            .collect();

        let props = self.properties.unwrap_or_default();
        let mut route = Route::new(
            props.name.unwrap_or_else(|| format!("Route {}", index + 1)),
            props
                .category
                .as_deref()
                .map(Category::from_label)
                .unwrap_or_default(),
            points,
        );
        route.description = props.description;
        route.steps = props.steps.map(|steps| {
            steps
                .into_iter()
                .map(|s| RouteStep {
                    number: s.number,
                    instruction: s.instruction,
                    distance: s.distance,
                })
                .collect()
        });

        Some(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "Library to Temple", "category": "religious" },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[73.8677, 18.4574], [73.8680, 18.4579, 560.0], [73.8690]]
                }
            },
            {
                "type": "Feature",
                "properties": { "name": "Main Gate" },
                "geometry": { "type": "Point", "coordinates": [73.8665, 18.4561] }
            },
            {
                "type": "Feature",
                "properties": {
                    "name": "Hostel to Mess",
                    "category": "hostel",
                    "description": "Evening walk",
                    "steps": [
                        { "number": 1, "instruction": "Leave the hostel", "distance": "40 m" },
                        { "number": 2, "instruction": "Enter the mess" }
                    ]
                },
                "geometry": { "type": "LineString", "coordinates": [[73.8661, 18.4559]] }
            }
        ]
    }"#;

    #[test]
    fn keeps_line_strings_and_swaps_axis_order() {
        let routes = parse_routes(DOCUMENT).unwrap();
        assert_eq!(routes.len(), 2);

        let temple = &routes[0];
        assert_eq!(temple.category, Category::Religious);
        assert_eq!(
            temple.points,
            vec![GeoPoint::new(18.4574, 73.8677), GeoPoint::new(18.4579, 73.8680)]
        );
        assert!(temple.steps.is_none());
    }

    #[test]
    fn reads_explicit_steps() {
        let routes = parse_routes(DOCUMENT).unwrap();
        let mess = &routes[1];
        let steps = mess.steps();

        assert_eq!(mess.description.as_deref(), Some("Evening walk"));
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].distance.as_deref(), Some("40 m"));
        assert_eq!(steps[1].instruction, "Enter the mess");
    }

    #[test]
    fn document_without_paths_is_an_error() {
        let doc = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[0,0]}}
        ]}"#;
        assert!(matches!(parse_routes(doc), Err(RouteError::EmptyDocument)));
        assert!(matches!(parse_routes("{"), Err(RouteError::Decode(_))));
    }

    #[test]
    fn unnamed_features_get_positional_names() {
        let doc = r#"{"features":[{"geometry":{"type":"LineString","coordinates":[[1,2]]}}]}"#;
        let routes = parse_routes(doc).unwrap();
        assert_eq!(routes[0].name, "Route 1");
        assert_eq!(routes[0].category, Category::General);
    }
}
