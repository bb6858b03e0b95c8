//! Root application module.
//!
//! Composes the page and owns the two page-scoped resources: the
//! smooth-scroll controller and the image preview state.

use leptos::prelude::*;
use wynn_core::PreviewState;

use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::preview::ImagePreview;
use crate::components::sections::{About, Buy, Chart, Footer, Roadmap};
use crate::utils::SmoothScroll;

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component.
///
/// Installs smooth scrolling for the page and removes it on cleanup, and
/// owns the preview state shared by the hero image and the overlay.
#[component]
pub fn App() -> impl IntoView {
    let scroller = StoredValue::new_local(SmoothScroll::start());
    on_cleanup(move || {
        scroller.try_update_value(|slot| slot.take());
    });

    let preview = RwSignal::new(PreviewState::default());

    view! {
        <div class=css::page>
            <Navbar />
            <Hero preview=preview />
            <About />
            <Roadmap />
            <Chart />
            <Buy />
            <Footer />
            <ImagePreview state=preview />
        </div>
    }
}
