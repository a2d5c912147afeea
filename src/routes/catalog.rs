use crate::routes::model::Route;

/// The routes currently loaded plus the one selected for navigation.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    routes: Vec<Route>,
    active: usize,
}

impl RouteCatalog {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes, active: 0 }
    }

    pub fn replace(&mut self, routes: Vec<Route>) {
        self.routes = routes;
        self.active = 0;
    }

    pub fn all_routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_route(&self) -> Option<&Route> {
        self.routes.get(self.active)
    }

    /// Selects the route at `index`, or the first route when the index is out
    /// of range.
    pub fn select(&mut self, index: usize) -> Option<&Route> {
        self.active = if index < self.routes.len() { index } else { 0 };
        self.active_route()
    }

    /// Indices of the routes matching `query`, in catalog order.
    pub fn filter(&self, query: &str) -> Vec<usize> {
        self.routes
            .iter()
            .enumerate()
            .filter(|(_, route)| route.matches(query))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
