use dioxus::prelude::*;
use eventdesk_core::settings::AppSettings;
use eventdesk_core::EventStore;
use crate::config::AppConfig;
use crate::event_store;
use crate::screens::{CalendarScreen, DashboardScreen, EventsScreen, SettingsScreen};
use crate::theme::{spacing, AppColors};
use crate::widgets::SideNav;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Events,
    Calendar,
    Settings,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Dashboard, Route::Events, Route::Calendar, Route::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Events => "Events",
            Route::Calendar => "Calendar",
            Route::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard => "▦",
            Route::Events => "☰",
            Route::Calendar => "📅",
            Route::Settings => "⚙",
        }
    }
}

/// Root component. Owns the store, settings and config and hands them to
/// the screens through context.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| {
        let mut config = AppConfig::from_env();
        provide_context(Signal::new(event_store::open(&mut config)));
        config
    });
    let dark_default = config.dark_mode;
    let settings = use_context_provider(move || {
        let mut settings = AppSettings::default();
        settings.appearance.dark_mode = dark_default;
        Signal::new(settings)
    });
    let mut route = use_signal(|| Route::Dashboard);

    let is_dark = settings.read().appearance.dark_mode;
    let background = AppColors::background(is_dark);
    let on_surface = AppColors::on_surface(is_dark);

    let current_screen = match route() {
        Route::Dashboard => rsx! { DashboardScreen { is_dark } },
        Route::Events => rsx! { EventsScreen { is_dark } },
        Route::Calendar => rsx! { CalendarScreen { is_dark } },
        Route::Settings => rsx! { SettingsScreen { is_dark } },
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif; min-height: 100vh; display: flex; background: {background}; color: {on_surface};",
            SideNav {
                active: route(),
                on_navigate: move |r| route.set(r),
            }
            main { style: "flex: 1; padding: {spacing::LG}; margin-left: {spacing::SIDEBAR_WIDTH};",
                {current_screen}
            }
        }
    }
}

/// Shared store signal provided by `App`.
pub fn use_store() -> Signal<EventStore> {
    use_context::<Signal<EventStore>>()
}

pub fn use_settings() -> Signal<AppSettings> {
    use_context::<Signal<AppSettings>>()
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}
