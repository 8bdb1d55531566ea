mod category;
mod event;
mod status;

pub use category::EventCategory;
pub use event::{Event, EventPatch, NewEvent};
pub use status::EventStatus;
