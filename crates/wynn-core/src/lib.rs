//! Browser-independent logic for the $WYNN site.
//!
//! Everything here compiles and tests on native targets. The root crate
//! wires these types into Leptos components.
//!
//! - [`market_cap`] - Price API response model, URL builders, display format
//! - [`poller`] - Market-cap poll schedule and cycles with stale-result suppression
//! - [`copy`] - Clipboard confirmation window
//! - [`scroll`] - Inertia physics for the smooth-scroll controller
//! - [`state`] - Small UI state machines (menu, preview, reveal)
//! - [`motion`] - Scroll-linked parallax offsets
//! - [`classes`] - Conditional class-name merging

pub mod classes;
pub mod copy;
pub mod error;
pub mod market_cap;
pub mod motion;
pub mod poller;
pub mod scroll;
pub mod state;

pub use classes::merge_classes;
pub use copy::{CopyConfirmation, ResetTicket};
pub use error::FetchError;
pub use market_cap::{PairsResponse, format_market_cap};
pub use motion::Parallax;
pub use poller::{
    CycleOutcome, CycleTicket, Liveness, MarketCapFeed, MarketCapSource, PollLoop, Ticker,
    run_cycle,
};
pub use scroll::ScrollPhysics;
pub use state::{MenuState, PreviewState, RevealState, is_scrolled};
