//! Full-screen image preview.
//!
//! Closed by the backdrop or the close button. Clicks on the image itself
//! stop at the frame so they never reach the backdrop.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use wynn_core::PreviewState;

use crate::components::icons as ic;
use crate::config::PREVIEW_IMAGE;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

#[component]
pub fn ImagePreview(state: RwSignal<PreviewState>) -> impl IntoView {
    let close = move |_: MouseEvent| state.update(PreviewState::close);

    view! {
        <Show when=move || state.get().is_open()>
            <div class=css::backdrop on:click=close>
                <div class=css::frame on:click=|ev: MouseEvent| ev.stop_propagation()>
                    <button class=css::close on:click=close aria-label="Close preview">
                        <Icon icon=ic::CLOSE />
                    </button>
                    <img src=PREVIEW_IMAGE alt="Full Preview" class=css::image />
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::components::testing::{find, mount, settle};
    use wasm_bindgen_test::wasm_bindgen_test;

    fn open_preview() -> (RwSignal<PreviewState>, web_sys::HtmlElement) {
        let state = RwSignal::new(PreviewState::Open);
        let root = mount(move || view! { <ImagePreview state=state /> });
        (state, root)
    }

    #[wasm_bindgen_test]
    fn test_image_click_keeps_preview_open() {
        let (state, root) = open_preview();

        find(&root, css::image).expect("image rendered").click();
        assert!(state.get_untracked().is_open());

        find(&root, css::frame).expect("frame rendered").click();
        assert!(state.get_untracked().is_open());
    }

    #[wasm_bindgen_test]
    async fn test_backdrop_click_closes_preview() {
        let (state, root) = open_preview();

        find(&root, css::backdrop).expect("backdrop rendered").click();
        assert!(!state.get_untracked().is_open());

        settle().await;
        assert!(find(&root, css::backdrop).is_none());
    }

    #[wasm_bindgen_test]
    fn test_close_button_closes_preview() {
        let (state, root) = open_preview();

        find(&root, css::close).expect("close button rendered").click();
        assert!(!state.get_untracked().is_open());
    }
}
