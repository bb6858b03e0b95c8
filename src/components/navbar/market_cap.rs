//! Market-cap polling hook and badge.
//!
//! [`use_market_cap`] owns a [`PollLoop`] for the lifetime of the calling
//! component. Each tick spawns one [`run_cycle`]; dropping the loop on
//! cleanup cancels the interval and revokes the cycle guard, so results
//! landing after unmount are dropped without touching the signal.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;
use wynn_core::market_cap::pair_api_url;
use wynn_core::{
    CycleOutcome, FetchError, Liveness, MarketCapFeed, MarketCapSource, PairsResponse, PollLoop,
    Ticker, format_market_cap, run_cycle,
};

use crate::components::icons as ic;
use crate::config::{MARKET_CAP_POLL_MS, PAIR_ADDRESS, PAIR_CHAIN, PRICE_API_BASE};
use crate::utils::fetch_json;

use super::css;

/// Price API pair lookup.
struct PairEndpoint {
    url: String,
}

impl PairEndpoint {
    fn new(chain: &str, pair: &str) -> Self {
        Self {
            url: pair_api_url(PRICE_API_BASE, chain, pair),
        }
    }
}

impl MarketCapSource for PairEndpoint {
    async fn fetch_pairs(&self) -> Result<PairsResponse, FetchError> {
        fetch_json(&self.url).await
    }
}

struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }
}

/// Poll the tracked pair's market cap.
///
/// Fetches once immediately, then every [`MARKET_CAP_POLL_MS`]. The signal
/// stays `None` until the first successful cycle and keeps its last value
/// through failures.
pub fn use_market_cap() -> Signal<Option<f64>> {
    let market_cap = RwSignal::new(None::<f64>);
    let feed = Rc::new(RefCell::new(MarketCapFeed::new()));
    let source = Rc::new(PairEndpoint::new(PAIR_CHAIN, PAIR_ADDRESS));
    let liveness = Liveness::new();

    let poll = {
        let liveness = liveness.clone();
        move || {
            let feed = Rc::clone(&feed);
            let source = Rc::clone(&source);
            let liveness = liveness.clone();
            spawn_local(async move {
                match run_cycle(source.as_ref(), &feed, &liveness).await {
                    CycleOutcome::Applied(value) => market_cap.set(Some(value)),
                    CycleOutcome::Failed(e) => web_sys::console::warn_1(
                        &format!("Failed to fetch market cap: {}", e).into(),
                    ),
                    CycleOutcome::Superseded => web_sys::console::log_1(
                        &"Dropped market cap from an outdated request".into(),
                    ),
                    CycleOutcome::Detached => {}
                }
            });
        }
    };

    let poller = StoredValue::new_local(Some(PollLoop::start(
        &IntervalTicker,
        MARKET_CAP_POLL_MS,
        liveness,
        poll,
    )));

    on_cleanup(move || {
        poller.try_update_value(|slot| slot.take());
    });

    market_cap.into()
}

/// Pill showing the formatted market cap. Renders nothing until a value
/// is available.
#[component]
pub fn MarketCapBadge(#[prop(into)] value: Signal<Option<f64>>) -> impl IntoView {
    move || {
        value.get().map(|v| {
            view! {
                <div class=css::badge>
                    <Icon icon=ic::TRENDING_UP />
                    <span>"MCap: " {format_market_cap(v)}</span>
                </div>
            }
        })
    }
}
