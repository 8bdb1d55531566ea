//! In-memory event store. Owns the collection; consumers get slices or
//! copies and mutate only through `add`, `update` and `delete`.

use crate::error::StoreError;
use crate::form::EventDraft;
use crate::ids::EventId;
use crate::models::{Event, EventPatch, NewEvent};
use crate::seed;
use tracing::{debug, warn};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the fixed sample events.
    pub fn seeded() -> Self {
        Self::from_events(seed::sample_events())
    }

    /// Later duplicates of an id already present are dropped.
    pub fn from_events(events: Vec<Event>) -> Self {
        let mut store = Self::new();
        for event in events {
            if store.contains(&event.id) {
                warn!(id = %event.id, "from_events: duplicate id skipped");
                continue;
            }
            store.events.push(event);
        }
        store
    }

    pub fn add(&mut self, new: NewEvent) -> Event {
        let mut id = EventId::generate();
        while self.contains(&id) {
            id = EventId::generate();
        }
        let event = Event::from_new(id, new);
        debug!(id = %event.id, title = %event.title, "event added");
        self.events.push(event.clone());
        event
    }

    /// Validates form input and adds it. Nothing is stored on failure.
    pub fn add_draft(&mut self, draft: &EventDraft) -> Result<Event, StoreError> {
        let new = draft.validate()?;
        Ok(self.add(new))
    }

    pub fn update(&mut self, id: &EventId, patch: EventPatch) -> Result<&Event, StoreError> {
        match self.events.iter_mut().find(|e| &e.id == id) {
            Some(event) => {
                event.apply(patch);
                debug!(id = %id, "event updated");
                Ok(event)
            }
            None => {
                warn!(id = %id, "update: no such event");
                Err(StoreError::NotFound(id.clone()))
            }
        }
    }

    pub fn delete(&mut self, id: &EventId) -> Result<Event, StoreError> {
        match self.events.iter().position(|e| &e.id == id) {
            Some(idx) => {
                let removed = self.events.remove(idx);
                debug!(id = %id, "event deleted");
                Ok(removed)
            }
            None => {
                warn!(id = %id, "delete: no such event");
                Err(StoreError::NotFound(id.clone()))
            }
        }
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.get(id).is_some()
    }

    /// Insertion order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
