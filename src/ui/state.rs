#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// Which route source the catalog came from.
    pub origin: Option<&'static str>,
}
