mod badge;
mod card;
mod event_meta;
mod page;
mod side_nav;

pub use badge::{CategoryBadge, StatusBadge};
pub use card::Card;
pub use event_meta::EventMeta;
pub use page::Page;
pub use side_nav::SideNav;
