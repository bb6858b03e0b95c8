//! Clipboard confirmation window.
//!
//! Every successful copy shows the confirmation and hands out a
//! [`ResetTicket`]. The browser layer schedules one timer per ticket; only
//! the newest ticket can hide the confirmation again, so copying twice in a
//! row keeps it visible until the reset delay has passed since the last copy.

/// Token for the pending reset of one confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyConfirmation {
    shown: bool,
    generation: u64,
}

impl CopyConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Show the confirmation, invalidating any earlier ticket.
    pub fn confirm(&mut self) -> ResetTicket {
        self.shown = true;
        self.generation += 1;
        ResetTicket(self.generation)
    }

    /// Hide the confirmation if `ticket` is still the latest.
    ///
    /// Returns `true` if the flag was cleared.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if ticket.0 == self.generation && self.shown {
            self.shown = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESET_MS: u64 = 2000;

    /// Minimal timer queue: (fire_at, ticket).
    struct Clock {
        now: u64,
        pending: Vec<(u64, ResetTicket)>,
    }

    impl Clock {
        fn new() -> Self {
            Self { now: 0, pending: Vec::new() }
        }

        fn copy(&mut self, state: &mut CopyConfirmation) {
            let ticket = state.confirm();
            // replacing the timer: only one reset is ever pending
            self.pending.clear();
            self.pending.push((self.now + RESET_MS, ticket));
        }

        fn advance_to(&mut self, t: u64, state: &mut CopyConfirmation) {
            self.now = t;
            let (due, rest): (Vec<_>, Vec<_>) =
                self.pending.drain(..).partition(|(at, _)| *at <= t);
            self.pending = rest;
            for (_, ticket) in due {
                state.expire(ticket);
            }
        }
    }

    #[test]
    fn test_initially_hidden() {
        assert!(!CopyConfirmation::new().is_shown());
    }

    #[test]
    fn test_confirm_then_expire() {
        let mut state = CopyConfirmation::new();
        let ticket = state.confirm();
        assert!(state.is_shown());
        assert!(state.expire(ticket));
        assert!(!state.is_shown());
        assert!(!state.expire(ticket));
    }

    #[test]
    fn test_old_ticket_cannot_expire() {
        let mut state = CopyConfirmation::new();
        let first = state.confirm();
        let second = state.confirm();
        assert!(!state.expire(first));
        assert!(state.is_shown());
        assert!(state.expire(second));
    }

    #[test]
    fn test_resets_after_exactly_window() {
        let mut state = CopyConfirmation::new();
        let mut clock = Clock::new();

        clock.copy(&mut state);
        clock.advance_to(1999, &mut state);
        assert!(state.is_shown());
        clock.advance_to(2000, &mut state);
        assert!(!state.is_shown());
    }

    #[test]
    fn test_second_copy_restarts_window() {
        let mut state = CopyConfirmation::new();
        let mut clock = Clock::new();

        clock.copy(&mut state);
        clock.advance_to(1500, &mut state);
        clock.copy(&mut state);

        clock.advance_to(2000, &mut state);
        assert!(state.is_shown());
        clock.advance_to(3499, &mut state);
        assert!(state.is_shown());
        clock.advance_to(3500, &mut state);
        assert!(!state.is_shown());
    }

    #[test]
    fn test_stray_timer_from_earlier_copy_is_ignored() {
        // Timer cancellation can race with a timer already queued to run.
        let mut state = CopyConfirmation::new();
        let first = state.confirm();
        let _second = state.confirm();
        state.expire(first);
        assert!(state.is_shown());
    }
}
