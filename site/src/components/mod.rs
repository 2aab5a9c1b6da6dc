//! Reusable view components shared by the index and detail pages.

pub mod project_card;
pub mod tech_badge;
pub mod theme_toggle;
