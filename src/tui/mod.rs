//! Terminal UI for the quote-request dashboard.
//!
//! The root component owns the current route and the query caches; the
//! list and detail screens render purely from props.

pub mod app;
pub mod components;
pub mod detail;
pub mod format;
pub mod list;
pub mod theme;

#[cfg(test)]
mod tests;

pub use app::DashboardApp;
