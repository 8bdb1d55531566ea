//! Glue between the screens and the core `EventStore`: opens it at start and
//! rewrites the snapshot file (when configured) after each mutation.

use crate::config::AppConfig;
use eventdesk_core::persistence;
use eventdesk_core::{Event, EventId, EventPatch, EventStore, NewEvent, StoreError};
use std::path::Path;
use tracing::{error, info, warn};

/// Snapshot when configured and readable, otherwise the sample events.
///
/// An unreadable snapshot is moved aside before the sample events take over.
/// If that move fails, `config.data_file` is cleared so no flush in this
/// session can overwrite the file.
pub fn open(config: &mut AppConfig) -> EventStore {
    let Some(path) = config.data_file.clone() else {
        return EventStore::seeded();
    };
    match persistence::open_or_seed(&path) {
        Ok(store) => store,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read snapshot, using sample events");
            if let Err(e) = persistence::quarantine(&path) {
                error!(path = %path.display(), error = %e, "could not move snapshot aside, saving disabled");
                config.data_file = None;
            }
            EventStore::seeded()
        }
    }
}

pub fn flush(store: &EventStore, data_file: Option<&Path>) {
    let Some(path) = data_file else {
        return;
    };
    if let Err(e) = persistence::save(path, store.list()) {
        error!(path = %path.display(), error = %e, "snapshot write failed");
    }
}

pub fn add_event(store: &mut EventStore, data_file: Option<&Path>, new: NewEvent) -> Event {
    let event = store.add(new);
    info!(id = %event.id, "created event \"{}\"", event.title);
    flush(store, data_file);
    event
}

pub fn update_event(
    store: &mut EventStore,
    data_file: Option<&Path>,
    id: &EventId,
    patch: EventPatch,
) -> Result<(), StoreError> {
    store.update(id, patch)?;
    flush(store, data_file);
    Ok(())
}

pub fn delete_event(store: &mut EventStore, data_file: Option<&Path>, id: &EventId) -> Result<Event, StoreError> {
    let removed = store.delete(id)?;
    info!(id = %id, "deleted event \"{}\"", removed.title);
    flush(store, data_file);
    Ok(removed)
}
