use leptos::prelude::*;
use leptos_icons::Icon;
use wynn_core::market_cap::pair_page_url;

use crate::components::icons as ic;
use crate::config::{
    AUTHOR_HANDLE, AUTHOR_URL, PAIR_ADDRESS, PAIR_CHAIN, TELEGRAM_URL, TOKEN_SYMBOL,
    TOKEN_TAGLINE, TWITTER_URL,
};
use crate::utils::dom::current_year;

use super::css;

const DISCLAIMER: &str = "\"This is a stupid silly meme coin with no intrinsic value, there is no guarantee of gain or loss. \
Wear your bigboy pants this is a shitcoin it could go to zero. \
Have fun, trade responsibly, take profits and only invest what you can afford to lose and if you understand the extreme volatility shitcoins bring.\"";

#[component]
pub fn Footer() -> impl IntoView {
    let socials = [
        ("Twitter", TWITTER_URL.to_string()),
        ("Telegram", TELEGRAM_URL.to_string()),
        ("DexScreener", pair_page_url(PAIR_CHAIN, PAIR_ADDRESS)),
    ];

    view! {
        <footer class=css::footer>
            <div class=css::container>
                <div class=css::footerTop>
                    <div>
                        <h4 class=css::footerBrand>{TOKEN_SYMBOL}</h4>
                        <p class=css::footerTagline>{TOKEN_TAGLINE}</p>
                    </div>
                    <div class=css::socials>
                        {socials
                            .into_iter()
                            .map(|(label, href)| {
                                view! {
                                    <a href=href target="_blank" rel="noopener noreferrer" class=css::social>
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class=css::disclaimer>
                    <span class=css::disclaimerIcon><Icon icon=ic::WARNING /></span>
                    <div class=css::disclaimerText>
                        <strong class=css::disclaimerTitle>"Risk Disclaimer"</strong>
                        {DISCLAIMER}
                        <span class=css::disclaimerSignature>"- Wynn"</span>
                    </div>
                </div>

                <div class=css::legal>
                    <p>{format!("© {} {}. All rights reserved.", current_year(), TOKEN_SYMBOL)}</p>
                    <p>
                        "Website by "
                        <a href=AUTHOR_URL target="_blank" rel="noopener noreferrer" class=css::credit>
                            {AUTHOR_HANDLE}
                        </a>
                    </p>
                </div>
            </div>
        </footer>
    }
}
