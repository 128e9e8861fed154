//! Vite manifest resolution and asset tag rendering.
//!
//! In dev mode tags point at the Vite dev server, which serves modules and
//! injects CSS through the module graph. In production the build manifest
//! maps entry names to hashed filenames under `static/dist/`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::Deserialize;

use crate::config::Settings;

/// Bundle entry name produced by the frontend build.
pub const VITE_ENTRY: &str = "src/main.ts";

/// URL prefix the built bundle is served under.
const DIST_URL_PREFIX: &str = "/static/dist";

/// One entry from a Vite build manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub file: String,
    #[serde(default)]
    pub css: Vec<String>,
}

type Manifest = HashMap<String, ManifestEntry>;

/// Parsed-manifest cache keyed by the (primary, fallback) path pair.
///
/// A deployed bundle only changes together with a process restart, so
/// entries are never invalidated at runtime.
#[derive(Default)]
pub struct ManifestCache {
    entries: RwLock<HashMap<(PathBuf, PathBuf), Manifest>>,
}

impl ManifestCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached manifest, or None if this path pair has not been loaded.
    fn get(&self, key: &(PathBuf, PathBuf)) -> Option<Manifest> {
        self.entries
            .read()
            .ok()
            .and_then(|guard| guard.get(key).cloned())
    }

    /// Store a loaded manifest.
    fn set(&self, key: (PathBuf, PathBuf), manifest: Manifest) {
        if let Ok(mut guard) = self.entries.write() {
            guard.insert(key, manifest);
        }
    }
}

/// Resolves frontend bundle entries to HTML tags.
pub struct ViteAssets {
    dev: bool,
    dev_server: String,
    manifest_path: PathBuf,
    fallback_path: PathBuf,
    cache: ManifestCache,
}

impl ViteAssets {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            dev: settings.vite_dev,
            dev_server: settings.vite_dev_server.clone(),
            manifest_path: settings.manifest_path(),
            fallback_path: settings.manifest_fallback_path(),
            cache: ManifestCache::new(),
        }
    }

    /// Stylesheet tags for a bundle entry.
    ///
    /// Empty in dev mode; also empty when the manifest is missing or the
    /// entry has no css files, so pages render before the first build.
    pub fn css_tags(&self, entry: &str) -> String {
        if self.dev {
            return String::new();
        }
        let manifest = self.manifest();
        let Some(entry) = manifest.get(entry) else {
            return String::new();
        };
        entry
            .css
            .iter()
            .map(|css_file| {
                format!(r#"<link rel="stylesheet" href="{DIST_URL_PREFIX}/{css_file}">"#)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Script tags for a bundle entry.
    ///
    /// Dev mode yields exactly two module scripts: the Vite client and the
    /// entry itself, both on the dev-server origin.
    pub fn script_tags(&self, entry: &str) -> String {
        if self.dev {
            let origin = self.dev_server.trim_end_matches('/');
            return [
                format!(r#"<script type="module" src="{origin}/@vite/client"></script>"#),
                format!(r#"<script type="module" src="{origin}/{entry}"></script>"#),
            ]
            .join("\n");
        }
        let manifest = self.manifest();
        match manifest.get(entry) {
            Some(entry) => {
                format!(
                    r#"<script type="module" src="{DIST_URL_PREFIX}/{file}"></script>"#,
                    file = entry.file
                )
            }
            None => String::new(),
        }
    }

    /// Load the manifest through the cache.
    fn manifest(&self) -> Manifest {
        let key = (self.manifest_path.clone(), self.fallback_path.clone());
        if let Some(manifest) = self.cache.get(&key) {
            return manifest;
        }
        let manifest = read_manifest(&self.manifest_path, &self.fallback_path);
        self.cache.set(key, manifest.clone());
        manifest
    }
}

/// Read and parse the first manifest path that exists.
///
/// The fallback is only consulted when the primary path is absent. Missing
/// files and parse failures degrade to an empty manifest.
fn read_manifest(primary: &Path, fallback: &Path) -> Manifest {
    let path = if primary.exists() {
        primary
    } else if fallback.exists() {
        fallback
    } else {
        return Manifest::new();
    };

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!("Failed to read asset manifest {}: {}", path.display(), e);
            return Manifest::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::warn!("Failed to parse asset manifest {}: {}", path.display(), e);
            Manifest::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"{
        "src/main.ts": {
            "file": "assets/main-C4ne1syq.js",
            "css": ["assets/main-Dq7h2Ipk.css"]
        }
    }"#;

    fn dev_assets() -> ViteAssets {
        ViteAssets {
            dev: true,
            dev_server: "http://localhost:5173/".to_string(),
            manifest_path: PathBuf::from("/nonexistent/.vite/manifest.json"),
            fallback_path: PathBuf::from("/nonexistent/manifest.json"),
            cache: ManifestCache::new(),
        }
    }

    fn prod_assets(dist: &Path) -> ViteAssets {
        ViteAssets {
            dev: false,
            dev_server: "http://localhost:5173".to_string(),
            manifest_path: dist.join(".vite").join("manifest.json"),
            fallback_path: dist.join("manifest.json"),
            cache: ManifestCache::new(),
        }
    }

    #[test]
    fn dev_scripts_point_at_dev_server() {
        let assets = dev_assets();
        let tags = assets.script_tags(VITE_ENTRY);

        let lines: Vec<&str> = tags.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"<script type="module" src="http://localhost:5173/@vite/client"></script>"#
        );
        assert_eq!(
            lines[1],
            r#"<script type="module" src="http://localhost:5173/src/main.ts"></script>"#
        );
    }

    #[test]
    fn dev_css_is_empty() {
        assert_eq!(dev_assets().css_tags(VITE_ENTRY), "");
    }

    #[test]
    fn missing_manifest_renders_no_tags() {
        let dir = tempdir().unwrap();
        let assets = prod_assets(dir.path());
        assert_eq!(assets.script_tags(VITE_ENTRY), "");
        assert_eq!(assets.css_tags(VITE_ENTRY), "");
    }

    #[test]
    fn manifest_resolves_hashed_filenames() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".vite")).unwrap();
        std::fs::write(dir.path().join(".vite").join("manifest.json"), MANIFEST).unwrap();

        let assets = prod_assets(dir.path());
        assert_eq!(
            assets.script_tags(VITE_ENTRY),
            r#"<script type="module" src="/static/dist/assets/main-C4ne1syq.js"></script>"#
        );
        assert_eq!(
            assets.css_tags(VITE_ENTRY),
            r#"<link rel="stylesheet" href="/static/dist/assets/main-Dq7h2Ipk.css">"#
        );
    }

    #[test]
    fn unknown_entry_renders_no_tags() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".vite")).unwrap();
        std::fs::write(dir.path().join(".vite").join("manifest.json"), MANIFEST).unwrap();

        let assets = prod_assets(dir.path());
        assert_eq!(assets.script_tags("src/other.ts"), "");
        assert_eq!(assets.css_tags("src/other.ts"), "");
    }

    #[test]
    fn fallback_used_when_primary_missing() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("manifest.json"), MANIFEST).unwrap();

        let assets = prod_assets(dir.path());
        assert!(assets
            .script_tags(VITE_ENTRY)
            .contains("assets/main-C4ne1syq.js"));
    }

    #[test]
    fn primary_wins_over_fallback() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".vite")).unwrap();
        std::fs::write(dir.path().join(".vite").join("manifest.json"), MANIFEST).unwrap();
        std::fs::write(
            dir.path().join("manifest.json"),
            r#"{"src/main.ts": {"file": "assets/stale.js"}}"#,
        )
        .unwrap();

        let assets = prod_assets(dir.path());
        assert!(assets.script_tags(VITE_ENTRY).contains("main-C4ne1syq.js"));
        assert!(!assets.script_tags(VITE_ENTRY).contains("stale.js"));
    }

    #[test]
    fn malformed_manifest_degrades_to_empty() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".vite")).unwrap();
        std::fs::write(dir.path().join(".vite").join("manifest.json"), "{not json").unwrap();

        let assets = prod_assets(dir.path());
        assert_eq!(assets.script_tags(VITE_ENTRY), "");
    }

    #[test]
    fn manifest_is_cached_until_restart() {
        let dir = tempdir().unwrap();
        let manifest_path = dir.path().join(".vite").join("manifest.json");
        std::fs::create_dir_all(manifest_path.parent().unwrap()).unwrap();
        std::fs::write(&manifest_path, MANIFEST).unwrap();

        let assets = prod_assets(dir.path());
        let before = assets.script_tags(VITE_ENTRY);
        assert!(before.contains("main-C4ne1syq.js"));

        // A rewritten manifest is not picked up by a running process.
        std::fs::write(
            &manifest_path,
            r#"{"src/main.ts": {"file": "assets/rebuilt.js"}}"#,
        )
        .unwrap();
        assert_eq!(assets.script_tags(VITE_ENTRY), before);
    }

    #[test]
    fn css_entry_without_styles_renders_no_links() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".vite")).unwrap();
        std::fs::write(
            dir.path().join(".vite").join("manifest.json"),
            r#"{"src/main.ts": {"file": "assets/main.js"}}"#,
        )
        .unwrap();

        let assets = prod_assets(dir.path());
        assert_eq!(assets.css_tags(VITE_ENTRY), "");
        assert!(assets.script_tags(VITE_ENTRY).contains("assets/main.js"));
    }
}
