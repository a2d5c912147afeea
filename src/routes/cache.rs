use std::path::{Path, PathBuf};

use tracing::debug;

use crate::routes::RouteError;

/// On-disk copy of the last fetched route document.
#[derive(Debug, Clone)]
pub struct RouteCache {
    path: PathBuf,
}

impl RouteCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Option<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                debug!("No cached routes at {}: {}", self.path.display(), e);
                None
            }
        }
    }

    pub async fn store(&self, document: &str) -> Result<(), RouteError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, document).await?;
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), RouteError> {
        match tokio::fs::remove_file(&self.path).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir()
            .join(format!("campusnav-{}-{nanos}", std::process::id()))
            .join(name)
    }

    #[tokio::test]
    async fn stores_then_loads() {
        let cache = RouteCache::new(scratch_path("routes.geojson"));
        assert!(cache.load().await.is_none());

        cache.store(r#"{"features":[]}"#).await.unwrap();
        assert_eq!(cache.load().await.as_deref(), Some(r#"{"features":[]}"#));

        cache.clear().await.unwrap();
        assert!(cache.load().await.is_none());
        cache.clear().await.unwrap();
    }

    #[tokio::test]
    async fn blank_file_counts_as_missing() {
        let cache = RouteCache::new(scratch_path("blank.geojson"));
        cache.store("  \n").await.unwrap();
        assert!(cache.load().await.is_none());
    }
}
