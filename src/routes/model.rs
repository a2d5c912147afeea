use ratatui::style::Color;

use crate::geo::{GeoPoint, path_length_km};

/// Number of directions derived for routes that ship without explicit steps.
pub const SYNTHETIC_STEP_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    Academic,
    Hostel,
    Religious,
    Events,
    #[default]
    General,
}

impl Category {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "academic" => Self::Academic,
            "hostel" => Self::Hostel,
            "religious" => Self::Religious,
            "events" => Self::Events,
            _ => Self::General,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Hostel => "hostel",
            Self::Religious => "religious",
            Self::Events => "events",
            Self::General => "general",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Academic => Color::from_u32(0x003b82f6),
            Self::Hostel => Color::from_u32(0x0010b981),
            Self::Religious => Color::from_u32(0x00f97316),
            Self::Events => Color::from_u32(0x00a855f7),
            Self::General => Color::from_u32(0x006b7280),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteStep {
    pub number: usize,
    pub instruction: String,
    pub distance: Option<String>,
}

impl RouteStep {
    pub fn new(number: usize, instruction: impl Into<String>) -> Self {
        Self {
            number,
            instruction: instruction.into(),
            distance: None,
        }
    }
}

/// Metadata only the curated route list carries.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDetails {
    pub start_location: String,
    pub end_location: String,
    pub distance_km: f64,
    pub estimated_minutes: u32,
    pub waypoints: Vec<String>,
    pub landmarks: Vec<String>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub name: String,
    pub category: Category,
    pub description: Option<String>,
    pub points: Vec<GeoPoint>,
    pub steps: Option<Vec<RouteStep>>,
    pub details: Option<RouteDetails>,
}

impl Route {
    pub fn new(name: impl Into<String>, category: Category, points: Vec<GeoPoint>) -> Self {
        Self {
            name: name.into(),
            category,
            description: None,
            points,
            steps: None,
            details: None,
        }
    }

    /// Origin and destination names, taken from the details when present and
    /// otherwise from a name of the form "A to B".
    pub fn endpoints(&self) -> (Option<&str>, Option<&str>) {
        if let Some(details) = &self.details {
            return (
                Some(details.start_location.as_str()),
                Some(details.end_location.as_str()),
            );
        }

        let mut parts = self.name.splitn(2, " to ");
        let from = parts.next().filter(|s| !s.is_empty());
        let to = parts.next().filter(|s| !s.is_empty());
        (from, to)
    }

    pub fn steps(&self) -> Vec<RouteStep> {
        match &self.steps {
            Some(steps) if !steps.is_empty() => steps.clone(),
            _ => {
                let mut parts = self.name.splitn(2, " to ");
                let from = parts.next().filter(|s| !s.is_empty()).unwrap_or("start point");
                let to = parts.next().filter(|s| !s.is_empty()).unwrap_or("destination");
                let synthetic: [RouteStep; SYNTHETIC_STEP_COUNT] = [
                    RouteStep::new(1, format!("Start at {from}")),
                    RouteStep::new(2, "Follow the marked path"),
                    RouteStep::new(3, format!("Arrive at {to}")),
                ];
                synthetic.into()
            }
        }
    }

    pub fn distance_km(&self) -> f64 {
        match &self.details {
            Some(details) => details.distance_km,
            None => path_length_km(&self.points),
        }
    }

    /// Case-insensitive substring match over name, endpoints and description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        let (from, to) = self.endpoints();
        [
            Some(self.name.as_str()),
            from,
            to,
            self.description.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(name: &str) -> Route {
        Route::new(name, Category::Academic, vec![GeoPoint::new(18.4574, 73.8677)])
    }

    #[test]
    fn synthetic_steps_name_both_ends() {
        let steps = route("Library to Computer Lab").steps();
        assert_eq!(steps.len(), SYNTHETIC_STEP_COUNT);
        assert_eq!(steps[0].instruction, "Start at Library");
        assert_eq!(steps[1].instruction, "Follow the marked path");
        assert_eq!(steps[2].instruction, "Arrive at Computer Lab");
    }

    #[test]
    fn synthetic_steps_fall_back_without_separator() {
        let steps = route("Campus Loop").steps();
        assert_eq!(steps[0].instruction, "Start at Campus Loop");
        assert_eq!(steps[2].instruction, "Arrive at destination");
    }

    #[test]
    fn empty_explicit_steps_are_replaced() {
        let mut r = route("Gate to Hall");
        r.steps = Some(vec![]);
        assert_eq!(r.steps().len(), SYNTHETIC_STEP_COUNT);

        r.steps = Some(vec![RouteStep::new(1, "Walk")]);
        assert_eq!(r.steps().len(), 1);
    }

    #[test]
    fn unknown_category_is_general() {
        assert_eq!(Category::from_label("Hostel"), Category::Hostel);
        assert_eq!(Category::from_label("sports"), Category::General);
        assert_eq!(Category::General.color(), Color::from_u32(0x006b7280));
    }

    #[test]
    fn search_covers_endpoints_and_description() {
        let mut r = route("Library to Computer Lab");
        r.description = Some("Head for the lab sessions".into());

        assert!(r.matches("computer"));
        assert!(r.matches("LIBRARY"));
        assert!(r.matches("sessions"));
        assert!(r.matches("  "));
        assert!(!r.matches("hostel"));
    }
}
