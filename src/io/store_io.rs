use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::config::CorruptPolicy;
use crate::model::task::Task;

/// Name of the data directory discovered at or above the working directory
pub const DATA_DIR: &str = ".triage";
/// The single storage key for the task list
pub const TASKS_FILE: &str = "tasks.json";
pub const CONFIG_FILE: &str = "config.toml";

/// Error type for storage I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no task list here: no {DATA_DIR}/ directory found (run `tri init`)")]
    NotFound,
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("corrupt task data in {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discover the data directory by walking up from the given directory,
/// looking for a `.triage/` subdirectory.
pub fn discover_data_dir(start: &Path) -> Result<PathBuf, StoreError> {
    let mut current = start.to_path_buf();
    loop {
        let data_dir = current.join(DATA_DIR);
        if data_dir.is_dir() {
            return Ok(data_dir);
        }
        if !current.pop() {
            return Err(StoreError::NotFound);
        }
    }
}

/// Create the data directory under `root` with an empty task list.
pub fn init_data_dir(root: &Path, force: bool) -> Result<PathBuf, StoreError> {
    let data_dir = root.join(DATA_DIR);
    if data_dir.is_dir() && !force {
        return Ok(data_dir);
    }
    fs::create_dir_all(&data_dir)?;
    save_tasks(&data_dir, &[])?;
    Ok(data_dir)
}

/// Load the persisted task list. An absent file means no prior state (empty
/// list). A file that fails to decode is handled per the configured policy:
/// `Reset` also degrades to empty, `Fail` surfaces the decode error.
pub fn load_tasks(data_dir: &Path, on_corrupt: CorruptPolicy) -> Result<Vec<Task>, StoreError> {
    let path = data_dir.join(TASKS_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path).map_err(|e| StoreError::Read {
        path: path.clone(),
        source: e,
    })?;
    match serde_json::from_str(&content) {
        Ok(tasks) => Ok(tasks),
        Err(e) => match on_corrupt {
            CorruptPolicy::Reset => Ok(Vec::new()),
            CorruptPolicy::Fail => Err(StoreError::Corrupt { path, source: e }),
        },
    }
}

/// Serialize the full task list to the storage key, unconditionally
/// overwriting prior content. Callers treat failure as non-fatal: the
/// in-memory store stays authoritative regardless.
pub fn save_tasks(data_dir: &Path, tasks: &[Task]) -> io::Result<()> {
    let path = data_dir.join(TASKS_FILE);
    let content = serde_json::to_string_pretty(tasks)?;
    atomic_write(&path, content.as_bytes())
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
