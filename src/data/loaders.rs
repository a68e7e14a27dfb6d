use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::data::DataLoader;
use crate::error::{ChartError, ChartResult};

/// Reads data urls from the filesystem.
///
/// Accepts plain paths and `file://` urls. Relative paths resolve against
/// `base_dir` when one is set.
#[derive(Debug, Clone, Default)]
pub struct FileDataLoader {
    base_dir: Option<PathBuf>,
}

impl FileDataLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    fn resolve(&self, url: &str) -> PathBuf {
        let raw = url.strip_prefix("file://").unwrap_or(url);
        let path = Path::new(raw);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl DataLoader for FileDataLoader {
    fn fetch(&self, url: &str) -> ChartResult<String> {
        let path = self.resolve(url);
        std::fs::read_to_string(&path).map_err(|err| ChartError::DataLoad {
            url: url.to_owned(),
            reason: format!("{}: {err}", path.display()),
        })
    }
}

/// Serves registered bodies by exact url; useful for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataLoader {
    resources: HashMap<String, String>,
}

impl InMemoryDataLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_resource(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.resources.insert(url.into(), body.into());
        self
    }
}

impl DataLoader for InMemoryDataLoader {
    fn fetch(&self, url: &str) -> ChartResult<String> {
        self.resources
            .get(url)
            .cloned()
            .ok_or_else(|| ChartError::DataLoad {
                url: url.to_owned(),
                reason: "resource not registered".to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{FileDataLoader, InMemoryDataLoader};
    use crate::data::DataLoader;
    use crate::error::ChartError;

    #[test]
    fn file_urls_resolve_against_base_dir() {
        let loader = FileDataLoader::new().with_base_dir("/srv/data");
        assert_eq!(
            loader.resolve("file://example.csv"),
            std::path::PathBuf::from("/srv/data/example.csv")
        );
        assert_eq!(
            loader.resolve("/abs/example.csv"),
            std::path::PathBuf::from("/abs/example.csv")
        );
    }

    #[test]
    fn missing_resource_is_a_load_error() {
        let loader = InMemoryDataLoader::new().with_resource("a.csv", "key,year,value\n");
        assert!(loader.fetch("a.csv").is_ok());
        assert!(matches!(
            loader.fetch("b.csv"),
            Err(ChartError::DataLoad { .. })
        ));
    }
}
