use eventdesk_core::settings::{AppSettings, CalendarViewMode, SettingsSection};
use pretty_assertions::assert_eq;

#[test]
fn defaults_match_panel() {
    let s = AppSettings::default();
    assert_eq!(s.account.name, "Event Manager Admin");
    assert_eq!(s.account.email, "admin@eventmanager.com");
    assert!(!s.account.calendar_sync);
    assert!(s.notifications.enabled);
    assert!(s.notifications.event_reminders);
    assert!(!s.appearance.dark_mode);
    assert_eq!(s.appearance.default_calendar_view, CalendarViewMode::Week);
    assert_eq!(s.appearance.items_per_page, 10);
}

#[test]
fn items_per_page_rejects_bad_input() {
    let mut s = AppSettings::default();
    s.appearance.set_items_per_page(" 25 ").unwrap();
    assert_eq!(s.appearance.items_per_page, 25);

    assert!(s.appearance.set_items_per_page("0").is_err());
    assert!(s.appearance.set_items_per_page("ten").is_err());
    assert_eq!(s.appearance.items_per_page, 25);
}

#[test]
fn saved_messages() {
    let msgs: Vec<&str> = SettingsSection::ALL.iter().map(|s| s.saved_message()).collect();
    assert_eq!(
        msgs,
        vec![
            "Account settings saved successfully",
            "Notification settings saved successfully",
            "Appearance settings saved successfully",
        ]
    );
}
