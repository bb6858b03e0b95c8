//! Static page sections below the hero.
//!
//! - [`About`] - Project blurb, headline stats, parallax artwork
//! - [`Roadmap`] - Three-phase plan
//! - [`Chart`] - Embedded live chart
//! - [`Buy`] - Call to action
//! - [`Footer`] - Socials, risk disclaimer, credits

mod about;
mod buy;
mod chart;
mod footer;
mod roadmap;

use leptos::prelude::*;
use wynn_core::merge_classes;

pub use about::About;
pub use buy::Buy;
pub use chart::Chart;
pub use footer::Footer;
pub use roadmap::Roadmap;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

/// Anchored, padded page section with a centered container.
#[component]
pub fn Section(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=merge_classes([Some(css::section), Some(class)])>
            <div class=css::container>{children()}</div>
        </section>
    }
}
