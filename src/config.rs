//! Catalog source resolution.
//!
//! Order: `--catalog` path, then `<data_dir>/coursecard/catalog.json` if it
//! exists, then the embedded sample. A file that fails to load is logged and
//! skipped; startup never aborts over course data.

use std::path::{Path, PathBuf};

use coursecard_core::Catalog;

/// Default catalog location under the platform data directory
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("coursecard").join("catalog.json"))
}

/// Load the catalog to display
pub fn load_catalog(explicit: Option<&Path>, default_path: Option<&Path>) -> Catalog {
    let candidate = explicit.or_else(|| default_path.filter(|p| p.exists()));

    if let Some(path) = candidate {
        match Catalog::from_path(path) {
            Ok(catalog) => return catalog,
            Err(e) => {
                tracing::error!("Failed to load catalog {:?}: {}", path, e);
            }
        }
    }

    tracing::info!("Using built-in sample catalog");
    Catalog::sample().unwrap_or_else(|e| {
        tracing::error!("Failed to parse sample catalog: {}", e);
        Catalog::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ONE_COURSE: &str = r#"[{"courseId": "X1", "courseName": "Only", "lessons": []}]"#;

    #[test]
    fn explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("explicit.json");
        let default = dir.path().join("default.json");
        std::fs::write(&explicit, ONE_COURSE).unwrap();
        std::fs::write(&default, "[]").unwrap();

        let catalog = load_catalog(Some(&explicit), Some(&default));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.courses()[0].name(), "Only");
    }

    #[test]
    fn default_path_used_when_present() {
        let dir = TempDir::new().unwrap();
        let default = dir.path().join("catalog.json");
        std::fs::write(&default, ONE_COURSE).unwrap();

        let catalog = load_catalog(None, Some(&default));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn falls_back_to_sample() {
        let dir = TempDir::new().unwrap();
        let sample = Catalog::sample().unwrap();

        // Missing default file
        let catalog = load_catalog(None, Some(&dir.path().join("absent.json")));
        assert_eq!(catalog, sample);

        // Broken explicit file
        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{not json").unwrap();
        assert_eq!(load_catalog(Some(&broken), None), sample);
    }

    #[test]
    fn default_path_is_under_coursecard() {
        if let Some(path) = default_catalog_path() {
            assert!(path.ends_with("coursecard/catalog.json"));
        }
    }
}
