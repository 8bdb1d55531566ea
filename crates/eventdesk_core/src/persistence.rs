//! Optional JSON snapshot of the event list. Loaded at start, rewritten
//! after every successful mutation.

use crate::error::StoreError;
use crate::models::Event;
use crate::store::EventStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub fn load(path: &Path) -> Result<Vec<Event>, StoreError> {
    let raw = fs::read_to_string(path)?;
    let events: Vec<Event> = serde_json::from_str(&raw)?;
    info!(path = %path.display(), count = events.len(), "snapshot loaded");
    Ok(events)
}

/// Writes `<path>.tmp` and renames it over `path`.
pub fn save(path: &Path, events: &[Event]) -> Result<(), StoreError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(events)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    info!(path = %path.display(), count = events.len(), "snapshot saved");
    Ok(())
}

/// Snapshot contents when the file exists, otherwise the seeded store.
pub fn open_or_seed(path: &Path) -> Result<EventStore, StoreError> {
    if !path.exists() {
        info!(path = %path.display(), "no snapshot yet, starting from sample events");
        return Ok(EventStore::seeded());
    }
    Ok(EventStore::from_events(load(path)?))
}

/// Moves an unreadable snapshot aside to the first free `<file>.corrupt-<n>`
/// so a later `save` cannot overwrite it. Returns the new location.
pub fn quarantine(path: &Path) -> Result<PathBuf, StoreError> {
    let mut n = 1u32;
    let target = loop {
        let candidate = suffixed(path, &format!(".corrupt-{}", n));
        if !candidate.exists() {
            break candidate;
        }
        n += 1;
    };
    fs::rename(path, &target)?;
    warn!(from = %path.display(), to = %target.display(), "unreadable snapshot moved aside");
    Ok(target)
}

fn tmp_path(path: &Path) -> PathBuf {
    suffixed(path, ".tmp")
}

fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}
