//! Hero banner.
//!
//! Headline, trading shortcut, contract-address copy widget and the coin
//! artwork, which drifts with scroll and opens the full-size preview.

mod copy;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_window_scroll;
use wynn_core::PreviewState;

use crate::components::icons as ic;
use crate::components::reveal::Reveal;
use crate::config::{BUY_SECTION_ID, HERO_IMAGE, HERO_PARALLAX, TOKEN_SYMBOL};
use crate::utils::dom::scroll_to_section;

pub use copy::CopyAddress;

stylance::import_crate_style!(css, "src/components/hero/hero.module.css");

#[component]
pub fn Hero(preview: RwSignal<PreviewState>) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let image_style = move || format!("transform: {}", HERO_PARALLAX.transform(scroll_y.get()));

    let start_trading = move |_: MouseEvent| scroll_to_section(BUY_SECTION_ID);
    let open_preview = move |_: MouseEvent| preview.update(PreviewState::open);

    view! {
        <section class=css::hero>
            <div class=css::backdrop>
                <div class=css::glowAccent></div>
                <div class=css::glowSecondary></div>
            </div>

            <div class=css::grid>
                <div class=css::copyColumn>
                    <Reveal>
                        <div class=css::liveBadge>
                            <span class=css::ping></span>
                            "Live on PumpFun"
                        </div>
                        <h1 class=css::title>
                            "The Future of " <br />
                            <span class=css::gradientText>"Meme Finance"</span>
                        </h1>
                        <p class=css::lead>
                            "James Wynn Real official meme token. No intrinsic value, just pure vibes and community. Professional grade shitcoin."
                        </p>
                        <div class=css::actions>
                            <button class=css::primary on:click=start_trading>
                                "Start Trading"
                                <Icon icon=ic::ARROW_RIGHT />
                            </button>
                            <CopyAddress />
                        </div>
                    </Reveal>
                </div>

                <div class=css::imageColumn style=image_style>
                    <div class=css::imageFrame on:click=open_preview>
                        <div class=css::imageGlow></div>
                        <img src=HERO_IMAGE alt=format!("{} Coin", TOKEN_SYMBOL) class=css::image />
                        <div class=css::expandHint>
                            <span>"Click to Expand"</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
