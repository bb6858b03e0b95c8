//! Fixed top navigation bar.
//!
//! Shows the logo, the live market-cap badge, in-page links and a
//! "Get Started" shortcut. Turns compact and opaque once the page is
//! scrolled; collapses the links into a toggle menu on small screens.

mod market_cap;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_window_scroll;
use wynn_core::{MenuState, is_scrolled, merge_classes};

use crate::components::icons as ic;
use crate::config::{BUY_SECTION_ID, NAV_LINKS, SCROLLED_THRESHOLD_PX, TOKEN_SYMBOL};
use crate::utils::dom::scroll_to_section;

pub use market_cap::{MarketCapBadge, use_market_cap};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

#[component]
pub fn Navbar() -> impl IntoView {
    let market_cap = use_market_cap();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || is_scrolled(scroll_y.get(), SCROLLED_THRESHOLD_PX));
    let menu = RwSignal::new(MenuState::default());

    let nav_class = move || merge_classes([Some(css::nav), scrolled.get().then_some(css::scrolled)]);
    let toggle_menu = move |_: MouseEvent| menu.update(MenuState::toggle);
    let get_started = move |_: MouseEvent| scroll_to_section(BUY_SECTION_ID);

    view! {
        <nav class=nav_class>
            <div class=css::inner>
                <a href="#" class=css::logo>{TOKEN_SYMBOL}</a>

                // Desktop
                <div class=css::desktop>
                    <MarketCapBadge value=market_cap />
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class=css::link>{link.label}</a> })
                        .collect_view()}
                    <button class=css::cta on:click=get_started>"Get Started"</button>
                </div>

                // Mobile toggle
                <button
                    class=css::menuToggle
                    on:click=toggle_menu
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                >
                    {move || {
                        if menu.get().is_open() {
                            view! { <Icon icon=ic::CLOSE /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::MENU /> }.into_any()
                        }
                    }}
                </button>
            </div>

            <MobileMenu menu=menu />
        </nav>
    }
}

/// Stacked links shown while the menu is open. Following a link closes it.
#[component]
fn MobileMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <Show when=move || menu.get().is_open()>
            <div class=css::mobileMenu>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                class=css::mobileLink
                                on:click=move |_| menu.update(MenuState::close)
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}
