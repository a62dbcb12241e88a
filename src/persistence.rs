use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::Serialize;
use thiserror::Error;

use crate::task::Task;
use crate::tasklist::TaskList;

/// Why an import contributed no tasks. Each variant maps to one console
/// message; none of them aborts the process.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("File '{0}' does not exist.")]
    Missing(PathBuf),
    #[error("Could not read '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("File '{path}' is not a valid task list: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn default_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "taskman", "taskman")
        .ok_or_else(|| anyhow!("Cannot determine data directory"))?;
    Ok(proj.data_dir().join("tasks.json"))
}

/// Reads the backing file. A missing, unreadable, or unparsable file means
/// "start fresh": an empty list, with a log diagnostic but no console noise,
/// since every save rewrites the full file anyway.
pub fn load(path: &Path) -> TaskList {
    if !path.exists() {
        return TaskList::default();
    }
    match fs::read(path) {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(list) => list,
            Err(err) => {
                log::warn!(
                    "backing file {} is not a valid task list, starting fresh: {err}",
                    path.display()
                );
                TaskList::default()
            }
        },
        Err(err) => {
            log::warn!("could not read backing file {}: {err}", path.display());
            TaskList::default()
        }
    }
}

/// Rewrites the backing file in full, via tmp-file + rename.
pub fn save(path: &Path, list: &TaskList) -> Result<()> {
    let bytes = to_pretty_json(list)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &bytes)?;
    fs::rename(&tmp, path)?;
    log::debug!("saved {} task(s) to {}", list.len(), path.display());
    Ok(())
}

/// Writes the list to an arbitrary target file; the backing file is untouched.
pub fn export(path: &Path, list: &TaskList) -> Result<()> {
    let bytes = to_pretty_json(list)?;
    fs::write(path, &bytes).with_context(|| format!("Could not write '{}'", path.display()))?;
    Ok(())
}

/// Reads tasks from an arbitrary JSON file. Deserialization is schema-checked:
/// a record missing a field, or carrying a status outside todo/done, is a
/// `Malformed` import, not a silently merged one. Imported ids are overwritten
/// by renumbering on merge either way.
pub fn import(path: &Path) -> Result<Vec<Task>, ImportError> {
    if !path.exists() {
        return Err(ImportError::Missing(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| ImportError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ImportError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

// The on-disk format uses 4-space indentation; serde_json's default pretty
// printer uses two. Non-ASCII text is written literally in both.
fn to_pretty_json(list: &TaskList) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    list.serialize(&mut ser)?;
    Ok(buf)
}
