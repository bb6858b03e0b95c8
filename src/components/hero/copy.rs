//! Contract-address copy widget.

use gloo_timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;
use wynn_core::CopyConfirmation;

use crate::components::icons as ic;
use crate::config::{CONTRACT_ADDRESS, COPY_RESET_MS};
use crate::utils::clipboard;

use super::css;

/// Click-to-copy contract address with a transient check mark.
///
/// Each successful copy replaces the pending reset timer, so the check
/// mark disappears [`COPY_RESET_MS`] after the most recent copy. A rejected
/// clipboard write (no permission) is ignored.
#[component]
pub fn CopyAddress() -> impl IntoView {
    let state = RwSignal::new(CopyConfirmation::new());
    let pending_reset = StoredValue::new_local(None::<Timeout>);

    on_cleanup(move || {
        pending_reset.try_update_value(|slot| slot.take());
    });

    let on_copy = move |_: MouseEvent| {
        spawn_local(async move {
            if clipboard::write_text(CONTRACT_ADDRESS).await.is_err() {
                return;
            }
            let Some(ticket) = state.try_update(|s| s.confirm()) else {
                return;
            };
            let reset = Timeout::new(COPY_RESET_MS, move || {
                state.try_update(|s| s.expire(ticket));
            });
            // replacing the slot drops (and cancels) the previous timer
            pending_reset.try_set_value(Some(reset));
        });
    };

    let copied = Signal::derive(move || state.get().is_shown());

    view! {
        <div class=css::copyAddress on:click=on_copy role="button" title="Copy contract address">
            <span class=css::address>{CONTRACT_ADDRESS}</span>
            {move || {
                if copied.get() {
                    view! { <span class=css::copied><Icon icon=ic::CHECK /></span> }.into_any()
                } else {
                    view! { <span class=css::copyIcon><Icon icon=ic::COPY /></span> }.into_any()
                }
            }}
        </div>
    }
}
