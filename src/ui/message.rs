#[derive(Debug, Clone)]
pub enum AppMessage {
    // User Input
    Quit,
    GoBack,
    ReloadRoutes,
    DismissError,
}
