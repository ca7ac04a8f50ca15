//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const PORTFOLIO_CSS: Asset = asset!("/assets/styling/portfolio.css");

mod session;
pub use session::{notify_applied, update_session, use_config, use_notifier, use_session, PortfolioProvider};

pub mod notifications;
pub use notifications::{use_toasts, NotificationStack, ToastNotifier, Toasts};

mod clock;

pub mod sortable;
pub use sortable::{SortableItem, SortableList};

mod brand_icon;
pub use brand_icon::BrandIcon;

mod header;
pub use header::Header;

pub mod sections;
pub mod edit;

mod portfolio;
pub use portfolio::Portfolio;

pub mod views;
