use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed route document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Route cache error: {0}")]
    Cache(#[from] std::io::Error),

    #[error("Route document contains no LineString features")]
    EmptyDocument,
}
