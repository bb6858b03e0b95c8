//! Market-cap poll cycles and the schedule that issues them.
//!
//! A cycle is one fetch from issue to settlement. Cycles may settle out of
//! order, so each one carries a [`CycleTicket`] and [`MarketCapFeed`] drops
//! any result older than the newest value it has already applied. A
//! [`Liveness`] flag, revoked when the owning view is torn down, stops
//! late results from touching state at all.
//!
//! [`PollLoop`] issues cycles: one on start, then one per [`Ticker`] tick
//! until it is stopped or dropped.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use crate::error::FetchError;
use crate::market_cap::PairsResponse;

/// Anything that can produce a pair lookup.
pub trait MarketCapSource {
    fn fetch_pairs(&self) -> impl Future<Output = Result<PairsResponse, FetchError>>;
}

/// Identifies a cycle by issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleTicket(u64);

/// How a cycle ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// New value is now current.
    Applied(f64),
    /// A newer cycle already applied its value; this result was dropped.
    Superseded,
    /// Fetch or decode failed; the current value is unchanged.
    Failed(FetchError),
    /// Owning view was gone by the time the result arrived.
    Detached,
}

/// Latest market cap plus the bookkeeping to keep it monotonic in cycle order.
#[derive(Debug, Clone, Default)]
pub struct MarketCapFeed {
    issued: u64,
    applied: Option<CycleTicket>,
    value: Option<f64>,
}

impl MarketCapFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest successfully applied value.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Start a new cycle.
    pub fn begin_cycle(&mut self) -> CycleTicket {
        self.issued += 1;
        CycleTicket(self.issued)
    }

    /// Record the result of a cycle.
    pub fn settle(&mut self, ticket: CycleTicket, result: Result<f64, FetchError>) -> CycleOutcome {
        match result {
            Err(e) => CycleOutcome::Failed(e),
            Ok(_) if self.applied.is_some_and(|applied| applied > ticket) => {
                CycleOutcome::Superseded
            }
            Ok(value) => {
                self.applied = Some(ticket);
                self.value = Some(value);
                CycleOutcome::Applied(value)
            }
        }
    }
}

/// Shared "view still mounted" flag.
///
/// Cloned into every pending callback; the view revokes it on cleanup.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one poll cycle against `source`.
///
/// The feed is only borrowed around the synchronous begin/settle steps,
/// never across the fetch, so overlapping cycles can share it.
pub async fn run_cycle<S: MarketCapSource>(
    source: &S,
    feed: &RefCell<MarketCapFeed>,
    liveness: &Liveness,
) -> CycleOutcome {
    let ticket = feed.borrow_mut().begin_cycle();

    let result = source
        .fetch_pairs()
        .await
        .and_then(|resp| resp.market_cap().ok_or(FetchError::MissingMarketCap));

    if !liveness.is_alive() {
        return CycleOutcome::Detached;
    }

    feed.borrow_mut().settle(ticket, result)
}

/// Repeating timer that drives a [`PollLoop`].
pub trait Ticker {
    /// Keeps the ticks coming; dropping it stops them.
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// A running poll schedule.
///
/// Owns the ticker handle and the [`Liveness`] flag its cycles check.
/// Stopping (or dropping) the loop revokes the flag first, then drops the
/// handle, so no further cycles are issued and in-flight ones detach.
pub struct PollLoop<H> {
    handle: Option<H>,
    liveness: Liveness,
}

impl<H> PollLoop<H> {
    /// Run `tick` now, then every `period_ms`.
    pub fn start<T>(
        ticker: &T,
        period_ms: u32,
        liveness: Liveness,
        mut tick: impl FnMut() + 'static,
    ) -> Self
    where
        T: Ticker<Handle = H>,
    {
        tick();
        let handle = ticker.every(period_ms, Box::new(tick));
        Self {
            handle: Some(handle),
            liveness,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn stop(&mut self) {
        self.liveness.revoke();
        self.handle = None;
    }
}

impl<H> Drop for PollLoop<H> {
    fn drop(&mut self) {
        self.stop();
    }
}
