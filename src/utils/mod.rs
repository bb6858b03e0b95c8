//! Browser utilities.
//!
//! Provides:
//! - [`fetch_json`] - JSON GET over `gloo-net` with [`FetchError`](wynn_core::FetchError) mapping
//! - [`dom`] - Window access, section scrolling, viewport metrics
//! - [`clipboard`] - Async clipboard writes
//! - [`SmoothScroll`] - Inertia scrolling for the whole page

pub mod clipboard;
pub mod dom;
mod fetch;
mod smooth_scroll;

pub use fetch::fetch_json;
pub use smooth_scroll::SmoothScroll;
