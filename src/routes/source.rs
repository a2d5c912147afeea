use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    config::NavConfig,
    routes::{
        RouteError, builtin::StaticRoutes, cache::RouteCache, geojson::parse_routes, model::Route,
    },
    util::log::cache_directory,
};

#[async_trait]
pub trait RouteSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch_routes(&self) -> Result<Vec<Route>, RouteError>;
}

/// Routes published as a remote GeoJSON FeatureCollection.
pub struct GeoJsonSource {
    client: reqwest::Client,
    url: String,
    cache: Option<RouteCache>,
}

impl GeoJsonSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: RouteCache) -> Self {
        self.cache = Some(cache);
        self
    }

    async fn download(&self) -> Result<String, RouteError> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl RouteSource for GeoJsonSource {
    fn name(&self) -> &'static str {
        "geojson"
    }

    async fn fetch_routes(&self) -> Result<Vec<Route>, RouteError> {
        if let Some(cache) = &self.cache {
            if let Some(document) = cache.load().await {
                match parse_routes(&document) {
                    Ok(routes) => {
                        info!("Loaded {} routes from {}", routes.len(), cache.path().display());
                        return Ok(routes);
                    }
                    Err(e) => warn!("Discarding unreadable route cache: {}", e),
                }
            }
        }

        let document = self.download().await?;
        let routes = parse_routes(&document)?;
        info!("Fetched {} routes from {}", routes.len(), self.url);

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.store(&document).await {
                warn!("Failed to cache route document: {}", e);
            }
        }

        Ok(routes)
    }
}

#[derive(Debug)]
pub struct LoadedRoutes {
    pub routes: Vec<Route>,
    pub origin: &'static str,
    /// Why the primary source was skipped, if it was.
    pub degraded: Option<RouteError>,
}

pub async fn load_with_fallback(
    primary: &dyn RouteSource,
    fallback: &dyn RouteSource,
) -> Result<LoadedRoutes, RouteError> {
    match primary.fetch_routes().await {
        Ok(routes) => Ok(LoadedRoutes {
            routes,
            origin: primary.name(),
            degraded: None,
        }),
        Err(e) => {
            warn!(
                "Route source '{}' failed, using '{}': {}",
                primary.name(),
                fallback.name(),
                e
            );
            let routes = fallback.fetch_routes().await?;
            Ok(LoadedRoutes {
                routes,
                origin: fallback.name(),
                degraded: Some(e),
            })
        }
    }
}

/// Loads routes the way the app is configured to: built-in only when
/// offline, otherwise the GeoJSON document (cache first unless `refresh`)
/// with the built-in list as fallback.
pub async fn load_configured(
    config: &NavConfig,
    refresh: bool,
) -> Result<LoadedRoutes, RouteError> {
    if config.offline {
        return Ok(LoadedRoutes {
            routes: StaticRoutes.fetch_routes().await?,
            origin: StaticRoutes.name(),
            degraded: None,
        });
    }

    let cache = RouteCache::new(cache_directory().join(&config.cache_file));
    if refresh {
        if let Err(e) = cache.clear().await {
            warn!("Failed to clear route cache: {}", e);
        }
    }

    let primary = GeoJsonSource::new(config.geojson_url.clone()).with_cache(cache);
    load_with_fallback(&primary, &StaticRoutes).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geo::GeoPoint, routes::model::Category};

    struct Broken;

    #[async_trait]
    impl RouteSource for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn fetch_routes(&self) -> Result<Vec<Route>, RouteError> {
            Err(RouteError::EmptyDocument)
        }
    }

    struct Fixed;

    #[async_trait]
    impl RouteSource for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn fetch_routes(&self) -> Result<Vec<Route>, RouteError> {
            Ok(vec![Route::new(
                "A to B",
                Category::Events,
                vec![GeoPoint::new(1.0, 2.0)],
            )])
        }
    }

    #[tokio::test]
    async fn primary_wins_when_it_succeeds() {
        let loaded = load_with_fallback(&Fixed, &StaticRoutes).await.unwrap();
        assert_eq!(loaded.origin, "fixed");
        assert_eq!(loaded.routes.len(), 1);
        assert!(loaded.degraded.is_none());
    }

    #[tokio::test]
    async fn failure_falls_back_and_keeps_the_reason() {
        let loaded = load_with_fallback(&Broken, &StaticRoutes).await.unwrap();
        assert_eq!(loaded.origin, "built-in");
        assert_eq!(loaded.routes.len(), 5);
        assert!(matches!(loaded.degraded, Some(RouteError::EmptyDocument)));
    }

    #[tokio::test]
    async fn offline_config_uses_builtin_routes() {
        let config = NavConfig {
            offline: true,
            ..Default::default()
        };
        let loaded = load_configured(&config, true).await.unwrap();
        assert_eq!(loaded.origin, "built-in");
        assert!(loaded.degraded.is_none());
    }

    #[tokio::test]
    async fn both_failing_is_an_error() {
        assert!(load_with_fallback(&Broken, &Broken).await.is_err());
    }

    #[tokio::test]
    async fn cached_document_skips_the_network() {
        let dir = std::env::temp_dir().join(format!("campusnav-src-{}", std::process::id()));
        let cache = RouteCache::new(dir.join("routes.geojson"));
        let document = r#"{"features":[{
            "properties": {"name": "X to Y"},
            "geometry": {"type": "LineString", "coordinates": [[73.0, 18.0]]}
        }]}"#;
        cache.store(document).await.unwrap();

        let source = GeoJsonSource::new("http://127.0.0.1:9/unreachable").with_cache(cache.clone());
        let routes = source.fetch_routes().await.unwrap();
        assert_eq!(routes[0].name, "X to Y");
        assert_eq!(routes[0].points[0], GeoPoint::new(18.0, 73.0));

        cache.clear().await.unwrap();
    }
}
