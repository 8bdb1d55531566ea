//! Dashboard theme: palette, status badge colors and spacing.

use eventdesk_core::EventStatus;

/// Light/dark palette selected at runtime from the appearance settings.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_BACKGROUND: &'static str = "#F8FAFC";
    pub const LIGHT_SURFACE: &'static str = "#FFFFFF";
    pub const LIGHT_ON_SURFACE: &'static str = "#0F172A";
    pub const LIGHT_MUTED: &'static str = "#64748B";
    pub const LIGHT_BORDER: &'static str = "#E2E8F0";

    // Dark
    pub const DARK_BACKGROUND: &'static str = "#0B1120";
    pub const DARK_SURFACE: &'static str = "#1E293B";
    pub const DARK_ON_SURFACE: &'static str = "#E2E8F0";
    pub const DARK_MUTED: &'static str = "#94A3B8";
    pub const DARK_BORDER: &'static str = "#334155";

    /// Accent for event highlights (primary buttons, calendar dots).
    pub const EVENT: &'static str = "#7C3AED";
    pub const EVENT_HOVER: &'static str = "#6D28D9";
    pub const DESTRUCTIVE: &'static str = "#DC2626";
    pub const SUCCESS: &'static str = "#16A34A";

    pub const SIDEBAR: &'static str = "#1E1B4B";
    pub const SIDEBAR_ACCENT: &'static str = "#312E81";
    pub const SIDEBAR_TEXT: &'static str = "#E0E7FF";

    pub fn background(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_BACKGROUND
        } else {
            Self::LIGHT_BACKGROUND
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn muted(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_MUTED
        } else {
            Self::LIGHT_MUTED
        }
    }
    pub fn border(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_BORDER
        } else {
            Self::LIGHT_BORDER
        }
    }

    pub fn status(status: EventStatus) -> &'static str {
        match status {
            EventStatus::Upcoming => "#3B82F6",
            EventStatus::Ongoing => "#22C55E",
            EventStatus::Completed => "#6B7280",
            EventStatus::Cancelled => "#EF4444",
        }
    }
}

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const CARD_PADDING: &str = "24px";
    pub const SIDEBAR_WIDTH: &str = "256px";
}
