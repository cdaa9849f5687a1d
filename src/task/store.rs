//! Task store - JSON file persistence
//!
//! Loads the backing file once at construction and rewrites the whole file
//! after every mutation. The file is a pretty-printed array of
//! `{id, title, status}` records.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::error::{Result, StoreError};
use super::model::Task;

pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    dirty: bool,
}

impl TaskStore {
    /// Open the store at `path`, loading existing tasks if the file exists.
    /// A missing file is the normal first-run state, not an error; a file
    /// that exists but fails to parse is fatal.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let tasks = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StoreError::Load {
                path: path.clone(),
                source,
            })?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
        } else {
            Vec::new()
        };

        debug!(count = tasks.len(), path = %path.display(), "loaded task file");

        Ok(Self {
            path,
            tasks,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the last persist failed, leaving the on-disk copy behind the
    /// in-memory state. The next successful mutation clears this, since
    /// every persist rewrites the whole file.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Next id is max(existing) + 1, never collection length: length-based
    /// numbering hands out a duplicate after a delete followed by an add.
    /// `None` when the id space is exhausted (a hand-edited file can hold
    /// `u32::MAX`; wrapping would hand out a duplicate).
    fn next_id(&self) -> Option<u32> {
        self.tasks
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
    }

    /// Add a pending task with a fresh id and persist. Empty or
    /// whitespace-only titles are rejected.
    pub fn add(&mut self, title: &str) -> Result<&Task> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let id = self.next_id().ok_or(StoreError::IdsExhausted)?;

        self.tasks.push(Task::new(id, title));
        self.persist()?;
        Ok(self.tasks.last().expect("just pushed task"))
    }

    /// Remove the task with `id` and persist. A missing id is a silent
    /// no-op; returns whether a task was actually removed.
    pub fn delete(&mut self, id: u32) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        self.persist()?;
        Ok(removed)
    }

    /// Transition the task with `id` to Done and persist. Idempotent; a
    /// missing id is a silent no-op.
    pub fn mark_done(&mut self, id: u32) -> Result<()> {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.complete();
        }
        self.persist()
    }

    /// All current tasks in insertion order, or `None` when the store holds
    /// nothing so callers render the empty case distinctly.
    pub fn list(&self) -> Option<&[Task]> {
        if self.tasks.is_empty() {
            None
        } else {
            Some(&self.tasks)
        }
    }

    /// Rewrite the whole backing file. On failure the in-memory state keeps
    /// the attempted mutation and the store is flagged dirty.
    fn persist(&mut self) -> Result<()> {
        match self.write_atomic() {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(err) => {
                self.dirty = true;
                warn!(path = %self.path.display(), "persist failed: {}", err);
                Err(err)
            }
        }
    }

    /// Write to a temp file in the target directory, then rename into
    /// place, so a crash mid-write leaves the previous file intact.
    fn write_atomic(&self) -> Result<()> {
        let persist_err = |source: std::io::Error| StoreError::Persist {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let tmp = NamedTempFile::new_in(dir).map_err(persist_err)?;
        serde_json::to_writer_pretty(tmp.as_file(), &self.tasks)
            .map_err(|e| persist_err(std::io::Error::other(e)))?;
        tmp.persist(&self.path).map_err(|e| persist_err(e.error))?;
        Ok(())
    }
}
