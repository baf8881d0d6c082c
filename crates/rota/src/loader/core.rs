//! Catalog parsing and the [`CatalogStore`]: current rotation plus optional hot-reload.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{info, warn};

use crate::catalog::Rotation;
use crate::schema::{RotationDocument, ROTATION_KIND};
use crate::validation::validate_document;

use super::error::{CatalogError, Result};
use super::watcher::handle_fs_event;

/// Parse YAML into a [`RotationDocument`] without further checks.
pub fn parse_document(yaml: &str) -> Result<RotationDocument> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Read and parse a catalog file into a [`RotationDocument`].
pub fn load_document(path: &Path) -> Result<RotationDocument> {
    let contents = fs::read_to_string(path)?;
    parse_document(&contents)
}

/// Parse YAML into a ready-to-use [`Rotation`].
///
/// Rejects a wrong `kind` or empty `metadata.id`, a cycle map that is not
/// exactly `week1..week4` (as `OpsError::Configuration`), and any other
/// validation error. Validation warnings are logged and do not fail.
pub fn parse_str(yaml: &str) -> Result<Rotation> {
    build_rotation(parse_document(yaml)?)
}

/// Read a catalog file into a [`Rotation`]. See [`parse_str`].
pub fn load_file(path: &Path) -> Result<Rotation> {
    let rotation = build_rotation(load_document(path)?)?;
    info!(
        rotation_id = %rotation.metadata.id,
        assets = rotation.reference.asset_count(),
        teams = rotation.reference.teams().len(),
        path = %path.display(),
        "loaded rotation catalog"
    );
    if !rotation.is_enabled() {
        warn!(
            rotation_id = %rotation.metadata.id,
            "rotation is disabled, views will show no maintenance"
        );
    }
    Ok(rotation)
}

fn build_rotation(doc: RotationDocument) -> Result<Rotation> {
    if doc.kind != ROTATION_KIND {
        return Err(CatalogError::Validation(format!(
            "kind must be '{}', got '{}'",
            ROTATION_KIND, doc.kind
        )));
    }
    if doc.metadata.id.trim().is_empty() {
        return Err(CatalogError::Validation(
            "rotation metadata.id must not be empty".to_string(),
        ));
    }

    let report = validate_document(&doc);
    for warning in &report.warnings {
        warn!(
            rotation_id = %doc.metadata.id,
            path = %warning.path,
            suggestion = warning.suggestion.as_deref().unwrap_or(""),
            "{}",
            warning.message
        );
    }

    let rotation = doc.into_rotation()?;

    if !report.valid {
        let errors: Vec<String> = report
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect();
        return Err(CatalogError::Validation(errors.join("; ")));
    }
    Ok(rotation)
}

/// Re-read `path` into `current`, bumping `generation` on success.
/// On failure the previous rotation stays in place.
pub(super) fn reload_into(
    path: &Path,
    current: &RwLock<Arc<Rotation>>,
    generation: &AtomicU64,
) -> Result<u64> {
    match load_file(path) {
        Ok(rotation) => {
            *current.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(rotation);
            let next = generation.fetch_add(1, Ordering::SeqCst) + 1;
            info!(path = %path.display(), generation = next, "rotation catalog swapped");
            Ok(next)
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "failed to reload rotation catalog, keeping previous version"
            );
            Err(e)
        }
    }
}

/// Holds the active [`Rotation`] loaded from one catalog file.
///
/// Readers take a [`snapshot`](CatalogStore::snapshot) and work on that `Arc`
/// without holding the lock. [`watch`](CatalogStore::watch) reloads on file
/// changes from the watcher thread.
pub struct CatalogStore {
    /// Catalog file backing this store.
    path: PathBuf,
    pub(super) current: Arc<RwLock<Arc<Rotation>>>,
    /// Incremented on every successful load, starting at 1.
    pub(super) generation: Arc<AtomicU64>,
    /// Active filesystem watcher (held to keep it alive).
    _watcher: Option<RecommendedWatcher>,
}

impl CatalogStore {
    /// Load `path`; fails if the initial load fails.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let rotation = load_file(&path)?;
        Ok(Self {
            path,
            current: Arc::new(RwLock::new(Arc::new(rotation))),
            generation: Arc::new(AtomicU64::new(1)),
            _watcher: None,
        })
    }

    /// Current rotation.
    pub fn snapshot(&self) -> Arc<Rotation> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Re-read the file now. Returns the new generation.
    pub fn reload(&self) -> Result<u64> {
        reload_into(&self.path, &self.current, &self.generation)
    }

    /// Watch the catalog's directory and reload when the catalog file is
    /// created, written or renamed into place. Other files are ignored.
    pub fn watch(&mut self) -> Result<()> {
        let current = Arc::clone(&self.current);
        let generation = Arc::clone(&self.generation);
        let target = self.path.clone();

        let mut watcher = notify::recommended_watcher(
            move |res: std::result::Result<notify::Event, notify::Error>| match res {
                Ok(event) => handle_fs_event(&event, &target, &current, &generation),
                Err(e) => warn!(error = %e, "filesystem watcher error"),
            },
        )?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        info!(path = %self.path.display(), "watching rotation catalog for changes");
        self._watcher = Some(watcher);
        Ok(())
    }

    pub fn is_watching(&self) -> bool {
        self._watcher.is_some()
    }

    /// Catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
