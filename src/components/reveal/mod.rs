//! Scroll-reveal wrapper.
//!
//! Wraps arbitrary children in a block that starts transparent and shifted
//! down, then fades and slides into place the first time it enters the
//! viewport. The observer disconnects after the first hit, so content
//! never hides again when scrolled away.

use leptos::html;
use leptos::prelude::*;
use leptos_use::{UseIntersectionObserverOptions, use_intersection_observer_with_options};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};
use wynn_core::{RevealState, merge_classes};

use crate::config::reveal::ROOT_MARGIN;

stylance::import_crate_style!(css, "src/components/reveal/reveal.module.css");

/// Fade/slide-in container.
///
/// # Props
/// - `delay`: transition delay in seconds (for staggering siblings)
/// - `class`: extra classes for the wrapper
/// - `margin`: observer root margin; negative values trigger before the
///   element is fully visible
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] delay: f64,
    #[prop(optional)] class: &'static str,
    #[prop(default = ROOT_MARGIN)] margin: &'static str,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let state = RwSignal::new(RevealState::default());

    use_intersection_observer_with_options(
        target,
        move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            let revealed = state
                .try_update(|s| s.observe(intersecting))
                .unwrap_or(false);
            if revealed {
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().root_margin(margin.to_string()),
    );

    let wrapper_class = move || {
        let phase = if state.get().is_shown() {
            css::shown
        } else {
            css::pending
        };
        merge_classes([Some(css::reveal), Some(phase), Some(class)])
    };

    view! {
        <div
            node_ref=target
            class=wrapper_class
            style=format!("transition-delay: {}s", delay)
        >
            {children()}
        </div>
    }
}
