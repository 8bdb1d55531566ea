//! Settings panel model. Client-only; nothing here is persisted.

use crate::error::ValidationError;
use crate::form::FormField;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettings {
    pub name: String,
    pub email: String,
    pub timezone: String,
    pub calendar_sync: bool,
}

impl Default for AccountSettings {
    fn default() -> Self {
        AccountSettings {
            name: "Event Manager Admin".to_string(),
            email: "admin@eventmanager.com".to_string(),
            timezone: "UTC-05:00 Eastern Time (US & Canada)".to_string(),
            calendar_sync: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub new_events: bool,
    pub event_updates: bool,
    pub event_reminders: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            enabled: true,
            new_events: true,
            event_updates: true,
            event_reminders: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarViewMode {
    Day,
    #[default]
    Week,
    Month,
}

impl CalendarViewMode {
    pub const ALL: [CalendarViewMode; 3] = [CalendarViewMode::Day, CalendarViewMode::Week, CalendarViewMode::Month];

    pub fn label(&self) -> &'static str {
        match self {
            CalendarViewMode::Day => "Day",
            CalendarViewMode::Week => "Week",
            CalendarViewMode::Month => "Month",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceSettings {
    pub dark_mode: bool,
    pub default_calendar_view: CalendarViewMode,
    pub items_per_page: u32,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        AppearanceSettings {
            dark_mode: false,
            default_calendar_view: CalendarViewMode::Week,
            items_per_page: 10,
        }
    }
}

impl AppearanceSettings {
    /// Accepts a positive whole number; anything else leaves the value as is.
    pub fn set_items_per_page(&mut self, raw: &str) -> Result<(), ValidationError> {
        match raw.trim().parse::<u32>() {
            Ok(n) if n > 0 => {
                self.items_per_page = n;
                Ok(())
            }
            _ => Err(ValidationError::new(
                FormField::ItemsPerPage,
                "must be a positive number",
            )),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub account: AccountSettings,
    pub notifications: NotificationSettings,
    pub appearance: AppearanceSettings,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SettingsSection {
    #[default]
    Account,
    Notifications,
    Appearance,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 3] = [
        SettingsSection::Account,
        SettingsSection::Notifications,
        SettingsSection::Appearance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsSection::Account => "Account",
            SettingsSection::Notifications => "Notifications",
            SettingsSection::Appearance => "Appearance",
        }
    }

    pub fn saved_message(&self) -> &'static str {
        match self {
            SettingsSection::Account => "Account settings saved successfully",
            SettingsSection::Notifications => "Notification settings saved successfully",
            SettingsSection::Appearance => "Appearance settings saved successfully",
        }
    }
}
