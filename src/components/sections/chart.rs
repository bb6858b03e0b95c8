use leptos::prelude::*;
use wynn_core::market_cap::chart_embed_url;

use super::{Section, css};
use crate::components::reveal::Reveal;
use crate::config::{PAIR_ADDRESS, PAIR_CHAIN, TOKEN_SYMBOL};

#[component]
pub fn Chart() -> impl IntoView {
    view! {
        <Section id="chart">
            <Reveal class=css::intro>
                <h2 class=css::heading>"Live Chart"</h2>
                <p class=css::subheading>
                    {format!("Track {} performance in real-time.", TOKEN_SYMBOL)}
                </p>
            </Reveal>

            <div class=css::chartFrame>
                <div class=css::chartEmbed>
                    <iframe
                        src=chart_embed_url(PAIR_CHAIN, PAIR_ADDRESS)
                        title=format!("{} chart", TOKEN_SYMBOL)
                    ></iframe>
                </div>
            </div>
        </Section>
    }
}
