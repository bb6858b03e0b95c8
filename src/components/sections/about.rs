use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::{Section, css};
use crate::components::reveal::Reveal;
use crate::config::{ABOUT_IMAGE, ABOUT_PARALLAX, TOKEN_SYMBOL};

#[component]
pub fn About() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let parallax = move || format!("transform: {}", ABOUT_PARALLAX.transform(scroll_y.get()));
    let alt = format!("About {}", TOKEN_SYMBOL);

    view! {
        <Section id="about" class=css::tinted>
            <div class=css::split>
                // Mobile artwork (no parallax)
                <div class=css::mobileOnly>
                    <AboutImage alt=alt.clone() />
                </div>

                <div class=css::desktopOnly style=parallax>
                    <AboutImage alt=alt zoom=true />
                </div>

                <div>
                    <Reveal>
                        <h2 class=css::heading>"About The Project"</h2>
                        <div class=css::prose>
                            <p>
                                "$WYNN is not just another token. It represents a movement of pure community-driven value. "
                                "While we state there is no intrinsic value, the value lies in the network of believers."
                            </p>
                            <p>
                                "We are building a robust ecosystem where memes meet professional execution. "
                                "Transparency, community engagement, and viral potential are our core pillars."
                            </p>
                            <div class=css::stats>
                                <div>
                                    <h4 class=css::statValue>"100%"</h4>
                                    <p class=css::statLabel>"Fair Launch"</p>
                                </div>
                                <div>
                                    <h4 class=css::statValue>"0%"</h4>
                                    <p class=css::statLabel>"Tax"</p>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn AboutImage(alt: String, #[prop(optional)] zoom: bool) -> impl IntoView {
    view! {
        <div class=css::artwork>
            <div class=css::shadeBottom></div>
            <div class=css::shadeLeft></div>
            <img
                src=ABOUT_IMAGE
                alt=alt
                class={if zoom { css::artworkImageZoom } else { css::artworkImage }}
            />
        </div>
    }
}
