//! EventDesk core: event models, the in-memory event store and the pure
//! queries the dashboard screens are built from. No UI dependencies.

pub mod calendar;
pub mod error;
pub mod form;
pub mod ids;
pub mod models;
pub mod persistence;
pub mod queries;
pub mod seed;
pub mod settings;
pub mod store;

pub use error::{StoreError, ValidationError};
pub use ids::EventId;
pub use models::{Event, EventCategory, EventPatch, EventStatus, NewEvent};
pub use store::EventStore;
