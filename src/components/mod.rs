//! UI components built with Leptos.
//!
//! - [`navbar`] - Fixed top bar with the live market-cap badge
//! - [`hero`] - Landing banner and contract-address copy widget
//! - [`sections`] - About, roadmap, chart, call to action, footer
//! - [`reveal`] - One-shot scroll-reveal wrapper
//! - [`preview`] - Full-screen image preview
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod hero;
pub mod icons;
pub mod navbar;
pub mod preview;
pub mod reveal;
pub mod sections;

#[cfg(all(test, target_arch = "wasm32"))]
mod testing;
