use crate::recipes::types::Recipe;

use anyhow::{Context, Result};
use dashmap::DashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Storage seam used by maintenance passes that scan and repair whole collections.
pub trait RecipeRepository: Send + Sync {
    /// Every stored recipe, ordered by creation time then id.
    fn scan(&self) -> Vec<Recipe>;

    /// Runs `repair` against the current stored document for `id`.
    ///
    /// `repair` returns whether it changed the document. Returns `Ok(false)` when the
    /// id no longer exists. Changes become durable on the next `commit`.
    fn repair(&self, id: &str, repair: &mut dyn FnMut(&mut Recipe) -> bool) -> Result<bool>;

    /// Persists every change made through `repair` since the last commit.
    fn commit(&self) -> Result<()>;
}

/// Concurrent recipe document store backed by an optional JSON snapshot file.
///
/// Creates, updates and deletes rewrite the snapshot immediately. View counts and
/// backfill repairs only mark the store dirty; they are written by `flush_if_dirty`.
pub struct RecipeStore {
    recipes: DashMap<String, Recipe>,
    snapshot_path: Option<PathBuf>,
    flush_lock: Mutex<()>,
    dirty: AtomicBool,
}

impl RecipeStore {
    /// A store that lives only in memory.
    pub fn in_memory() -> Self {
        Self {
            recipes: DashMap::new(),
            snapshot_path: None,
            flush_lock: Mutex::new(()),
            dirty: AtomicBool::new(false),
        }
    }

    /// Opens the snapshot at `path`.
    ///
    /// A missing file yields an empty store that will create the file on the first
    /// write. An unreadable or malformed file is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let recipes = DashMap::new();

        if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read snapshot {}", path.display()))?;
            let documents: Vec<Recipe> = if raw.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&raw)
                    .with_context(|| format!("malformed snapshot {}", path.display()))?
            };
            for recipe in documents {
                recipes.insert(recipe.id.clone(), recipe);
            }
            tracing::info!("Loaded {} recipes from {}", recipes.len(), path.display());
        } else {
            tracing::info!("No snapshot at {}, starting empty", path.display());
        }

        Ok(Self {
            recipes,
            snapshot_path: Some(path),
            flush_lock: Mutex::new(()),
            dirty: AtomicBool::new(false),
        })
    }

    pub fn get(&self, id: &str) -> Option<Recipe> {
        self.recipes.get(id).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, recipe: Recipe) -> Result<()> {
        self.recipes.insert(recipe.id.clone(), recipe);
        self.flush()
    }

    /// Applies a fallible edit to the stored document while holding its entry lock.
    ///
    /// The snapshot is rewritten only when `apply` succeeds. Returns `Ok(None)` for an
    /// unknown id. `apply` must leave the document untouched when it fails.
    pub fn try_update<F, E>(&self, id: &str, apply: F) -> Result<Option<Recipe>, E>
    where
        F: FnOnce(&mut Recipe) -> Result<(), E>,
        E: From<anyhow::Error>,
    {
        let updated = match self.recipes.get_mut(id) {
            Some(mut entry) => {
                apply(entry.value_mut())?;
                entry.value().clone()
            }
            None => return Ok(None),
        };

        self.flush()?;
        Ok(Some(updated))
    }

    /// Increments the view counter of a recipe without rewriting the snapshot.
    pub fn record_view(&self, id: &str) -> Option<Recipe> {
        let mut entry = self.recipes.get_mut(id)?;
        let recipe = entry.value_mut();
        recipe.view_count = Some(recipe.view_count.unwrap_or(0) + 1);
        let viewed = recipe.clone();
        drop(entry);

        self.dirty.store(true, Ordering::SeqCst);
        Some(viewed)
    }

    pub fn remove(&self, id: &str) -> Result<Option<Recipe>> {
        let removed = self.recipes.remove(id).map(|(_, recipe)| recipe);
        if removed.is_some() {
            self.flush()?;
        }
        Ok(removed)
    }

    /// Removes every recipe whose title is in `titles`. Returns how many were removed.
    pub fn remove_by_titles(&self, titles: &[&str]) -> Result<usize> {
        let before = self.recipes.len();
        self.recipes
            .retain(|_, recipe| !titles.contains(&recipe.title.as_str()));
        let removed = before - self.recipes.len();

        if removed > 0 {
            self.flush()?;
        }
        Ok(removed)
    }

    pub fn list(&self) -> Vec<Recipe> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        recipes.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    /// True when in-memory changes have not reached the snapshot yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Writes the snapshot if deferred changes are pending. Returns whether it wrote.
    pub fn flush_if_dirty(&self) -> Result<bool> {
        if !self.is_dirty() {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    /// Writes the whole collection to the snapshot file (temp file, then rename).
    fn flush(&self) -> Result<()> {
        let Some(path) = &self.snapshot_path else {
            self.dirty.store(false, Ordering::SeqCst);
            return Ok(());
        };

        let _guard = self
            .flush_lock
            .lock()
            .map_err(|_| anyhow::anyhow!("snapshot lock poisoned"))?;

        // Cleared before listing: anything changed after this point marks it again.
        self.dirty.store(false, Ordering::SeqCst);
        if let Err(e) = self.write_snapshot(path) {
            self.dirty.store(true, Ordering::SeqCst);
            return Err(e);
        }
        Ok(())
    }

    fn write_snapshot(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(&self.list())?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to replace {}", path.display()))?;

        tracing::debug!("Flushed {} recipes to {}", self.recipes.len(), path.display());
        Ok(())
    }
}

impl RecipeRepository for RecipeStore {
    fn scan(&self) -> Vec<Recipe> {
        self.list()
    }

    fn repair(&self, id: &str, repair: &mut dyn FnMut(&mut Recipe) -> bool) -> Result<bool> {
        let Some(mut entry) = self.recipes.get_mut(id) else {
            return Ok(false);
        };
        let changed = repair(entry.value_mut());
        drop(entry);

        if changed {
            self.dirty.store(true, Ordering::SeqCst);
        }
        Ok(changed)
    }

    fn commit(&self) -> Result<()> {
        self.flush_if_dirty().map(|_| ())
    }
}
