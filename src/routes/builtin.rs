use async_trait::async_trait;
use lazy_static::lazy_static;

use crate::{
    geo::GeoPoint,
    routes::{
        RouteError,
        model::{Category, Difficulty, Route, RouteDetails, RouteStep},
        source::RouteSource,
    },
};

struct Entry {
    name: &'static str,
    description: &'static str,
    category: Category,
    start: &'static str,
    end: &'static str,
    distance_km: f64,
    minutes: u32,
    waypoints: &'static [&'static str],
    instructions: &'static [&'static str],
    landmarks: &'static [&'static str],
    difficulty: Difficulty,
    path: &'static [(f64, f64)],
}

const ENTRIES: &[Entry] = &[
    Entry {
        name: "Library to Computer Lab",
        description: "Navigate from the Central Library to the main Computer Lab complex for lab sessions",
        category: Category::Academic,
        start: "Bajrangdas Lohiya Central Library",
        end: "Computer Lab Block A",
        distance_km: 0.35,
        minutes: 6,
        waypoints: &["Academic Block", "Plaza Area"],
        instructions: &[
            "Exit the library building through the main entrance",
            "Head straight towards the plaza area",
            "Turn right at the intersection near the academic block",
            "Continue for 150 meters",
            "Computer Lab Block A is on your left",
        ],
        landmarks: &["Central Fountain", "Academic Block", "Student Plaza"],
        difficulty: Difficulty::Easy,
        path: &[
            (18.45740, 73.86770),
            (18.45762, 73.86781),
            (18.45785, 73.86790),
            (18.45801, 73.86812),
            (18.45806, 73.86845),
            (18.45811, 73.86878),
            (18.45828, 73.86893),
        ],
    },
    Entry {
        name: "Main Gate to Girls Hostel",
        description: "Route from the main entrance gate to the Girls Hostel building",
        category: Category::Hostel,
        start: "Main Entrance Gate",
        end: "Girls Hostel",
        distance_km: 0.52,
        minutes: 9,
        waypoints: &["Administration Building", "Sports Complex"],
        instructions: &[
            "Enter through the main gate",
            "Head towards the administration building",
            "Pass by the sports complex on your right",
            "Continue towards the residential area",
            "Girls Hostel is the first residential building on your left",
        ],
        landmarks: &["Administration Building", "Sports Complex", "Main Parking Area"],
        difficulty: Difficulty::Easy,
        path: &[
            (18.45612, 73.86655),
            (18.45640, 73.86672),
            (18.45671, 73.86688),
            (18.45702, 73.86701),
            (18.45733, 73.86695),
            (18.45768, 73.86688),
            (18.45801, 73.86679),
            (18.45838, 73.86671),
            (18.45869, 73.86660),
            (18.45897, 73.86652),
        ],
    },
    Entry {
        name: "Canteen to Engineering Lab",
        description: "Route from the campus canteen to the Engineering Laboratory Block",
        category: Category::Academic,
        start: "Campus Canteen",
        end: "Engineering Lab Block",
        distance_km: 0.68,
        minutes: 11,
        waypoints: &["Student Center", "Mechanical Lab", "Electrical Lab"],
        instructions: &[
            "Exit the canteen and turn right",
            "Walk towards the student center plaza",
            "Head past the mechanical engineering lab building",
            "Continue straight towards the engineering complex",
            "Turn left at the signboard for Engineering Labs",
            "Engineering Lab Block is the main building ahead",
        ],
        landmarks: &["Student Center", "Mechanical Lab", "Electrical Workshop"],
        difficulty: Difficulty::Medium,
        path: &[
            (18.45688, 73.86842),
            (18.45699, 73.86875),
            (18.45712, 73.86909),
            (18.45726, 73.86941),
            (18.45741, 73.86972),
            (18.45770, 73.86985),
            (18.45802, 73.86996),
            (18.45833, 73.87008),
            (18.45851, 73.87036),
            (18.45862, 73.87061),
        ],
    },
    Entry {
        name: "Entrance Gate to Auditorium",
        description: "Navigate from the main entrance to the campus auditorium for events and seminars",
        category: Category::Events,
        start: "Main Entrance Gate",
        end: "Campus Auditorium",
        distance_km: 0.81,
        minutes: 14,
        waypoints: &["Information Desk", "Central Plaza", "Green Lawn"],
        instructions: &[
            "Enter through the main gate",
            "Stop at the information desk for directions if needed",
            "Walk through the central plaza area",
            "Continue towards the green lawn section",
            "The auditorium building is visible with 'Auditorium' signage",
            "Enter through the main entrance",
        ],
        landmarks: &["Information Desk", "Central Plaza", "Green Lawn", "Admin Block"],
        difficulty: Difficulty::Easy,
        path: &[
            (18.45612, 73.86655),
            (18.45634, 73.86690),
            (18.45655, 73.86727),
            (18.45681, 73.86760),
            (18.45707, 73.86792),
            (18.45729, 73.86829),
            (18.45748, 73.86866),
            (18.45772, 73.86902),
            (18.45798, 73.86934),
            (18.45821, 73.86968),
            (18.45846, 73.86999),
        ],
    },
    Entry {
        name: "Boys Hostel to Main Campus",
        description: "Route from the Boys Hostel (located 2-3km away) to the main campus via shuttle stop",
        category: Category::Hostel,
        start: "Boys Hostel",
        end: "Bus Stand / Shuttle Stop",
        distance_km: 2.5,
        minutes: 45,
        waypoints: &["Hostel Exit", "Main Road", "Bus Stand"],
        instructions: &[
            "Exit the boys hostel premises",
            "Head towards the main road",
            "Walk along the road towards the bus stop",
            "The campus shuttle stops here regularly",
            "Board the shuttle to reach the main campus",
        ],
        landmarks: &["Boys Hostel Gate", "Main Road", "VSEZ Area", "Bus Stand"],
        difficulty: Difficulty::Hard,
        path: &[
            (18.47380, 73.86210),
            (18.47145, 73.86262),
            (18.46902, 73.86318),
            (18.46660, 73.86371),
            (18.46418, 73.86425),
            (18.46177, 73.86480),
            (18.45935, 73.86536),
            (18.45731, 73.86590),
            (18.45612, 73.86655),
        ],
    },
];

lazy_static! {
    static ref BUILTIN_ROUTES: Vec<Route> = ENTRIES.iter().map(Entry::to_route).collect();
}

impl Entry {
    fn to_route(&self) -> Route {
        let points = self
            .path
            .iter()
            .map(|&(lat, lon)| GeoPoint::new(lat, lon))
            .collect();
        let steps = self
            .instructions
            .iter()
            .enumerate()
            .map(|(i, text)| RouteStep::new(i + 1, *text))
            .collect();
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Route {
            name: self.name.to_string(),
            category: self.category,
            description: Some(self.description.to_string()),
            points,
            steps: Some(steps),
            details: Some(RouteDetails {
                start_location: self.start.to_string(),
                end_location: self.end.to_string(),
                distance_km: self.distance_km,
                estimated_minutes: self.minutes,
                waypoints: owned(self.waypoints),
                landmarks: owned(self.landmarks),
                difficulty: self.difficulty,
            }),
        }
    }
}

pub fn builtin_routes() -> &'static [Route] {
    &BUILTIN_ROUTES
}

/// The curated campus routes compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticRoutes;

#[async_trait]
impl RouteSource for StaticRoutes {
    fn name(&self) -> &'static str {
        "built-in"
    }

    async fn fetch_routes(&self) -> Result<Vec<Route>, RouteError> {
        Ok(builtin_routes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_builtin_route_is_playable() {
        let routes = builtin_routes();
        assert_eq!(routes.len(), 5);

        for route in routes {
            assert!(route.points.len() >= 2, "{} has no path", route.name);
            let details = route.details.as_ref().unwrap();
            assert!(details.distance_km > 0.0);
            assert_eq!(route.steps().len(), route.steps.as_ref().unwrap().len());
        }

        let names: HashSet<_> = routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), routes.len());
    }

    #[test]
    fn endpoints_come_from_details() {
        let route = &builtin_routes()[4];
        assert_eq!(
            route.endpoints(),
            (Some("Boys Hostel"), Some("Bus Stand / Shuttle Stop"))
        );
        assert_eq!(route.details.as_ref().unwrap().difficulty, Difficulty::Hard);
    }

    #[tokio::test]
    async fn static_source_returns_the_curated_list() {
        let routes = StaticRoutes.fetch_routes().await.unwrap();
        assert_eq!(routes[0].name, "Library to Computer Lab");
        assert_eq!(routes[0].category, Category::Academic);
    }
}
