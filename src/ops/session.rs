use std::path::{Path, PathBuf};

use crate::io::{config_io, store_io};
use crate::io::store_io::StoreError;
use crate::model::config::Config;
use crate::model::task::{Priority, Task};
use crate::ops::filter::{self, Filter};
use crate::ops::selection::SelectionSet;
use crate::ops::store::{Counts, TaskStore};

/// One open task list: the store, the selection, the active filter, and the
/// persistence mirror, owned together so every mutation path runs through a
/// single `&mut Session`.
///
/// Each store mutation triggers a fire-and-forget write of the full list.
/// A failed write never fails the mutation; when `warn_on_save_failure` is
/// set, the last write error is kept for front ends to show as a
/// non-blocking warning. Selection and filter changes never touch disk.
pub struct Session {
    store: TaskStore,
    selection: SelectionSet,
    filter: Filter,
    data_dir: PathBuf,
    config: Config,
    save_warning: Option<String>,
}

impl Session {
    /// Open the task list in `data_dir`: read config, then load the
    /// persisted snapshot per the configured decode-failure policy.
    pub fn open(data_dir: &Path) -> Result<Session, StoreError> {
        let config = config_io::read_config(data_dir)?;
        let tasks = store_io::load_tasks(data_dir, config.on_corrupt)?;
        Ok(Session {
            store: TaskStore::from_tasks(tasks),
            selection: SelectionSet::default(),
            filter: Filter::default(),
            data_dir: data_dir.to_path_buf(),
            config,
            save_warning: None,
        })
    }

    // --- Task Store operations ---

    /// Add a task (newest first). Whitespace-only text is silently rejected.
    /// Returns the created task.
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<Task> {
        let task = self.store.add(text, priority)?.clone();
        self.persist();
        Some(task)
    }

    /// Delete a task by id; a no-op for unknown ids.
    pub fn delete(&mut self, id: u64) -> bool {
        let removed = self.store.delete(id);
        self.persist();
        removed
    }

    /// Complete (remove) every selected task and clear the selection, as one
    /// state transition with one persistence write. Returns the removed count.
    pub fn complete_selection(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let removed = self.store.bulk_complete(self.selection.ids());
        self.selection.clear();
        self.persist();
        removed
    }

    // --- Selection Set operations (never persisted) ---

    /// Flip selection membership for `id`; stale ids are tolerated.
    pub fn toggle(&mut self, id: u64) -> bool {
        self.selection.toggle(id)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    // --- Filter (transient, never persisted) ---

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    // --- Reads (always fresh from the store) ---

    /// The current filter projection, recomputed on every call.
    pub fn visible(&self) -> Vec<&Task> {
        filter::apply(self.store.tasks(), self.filter)
    }

    /// Full ordered snapshot.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn counts(&self) -> Counts {
        self.store.counts()
    }

    /// Last persistence write error, if the config asks to surface them.
    pub fn save_warning(&self) -> Option<&str> {
        self.save_warning.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn persist(&mut self) {
        match store_io::save_tasks(&self.data_dir, self.store.tasks()) {
            Ok(()) => self.save_warning = None,
            Err(e) => {
                if self.config.warn_on_save_failure {
                    self.save_warning = Some(e.to_string());
                }
            }
        }
    }
}
