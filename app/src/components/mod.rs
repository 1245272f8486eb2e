mod nav;
mod stat_card;
mod status_badge;

pub use nav::{back_link_target, NavShell};
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
