mod calendar;
mod dashboard;
mod event_form;
mod events;
mod settings;

pub use calendar::CalendarScreen;
pub use dashboard::DashboardScreen;
pub use event_form::EventForm;
pub use events::EventsScreen;
pub use settings::SettingsScreen;
