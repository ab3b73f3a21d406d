// web_app/state/debounce.rs - Debounce primitive
//
// Timer-agnostic: every pushed value gets a ticket, and only the newest
// ticket may settle. Whoever owns the timer (see hooks::use_debounced)
// calls `settle` when the delay elapses. A ticket that was superseded or
// cancelled settles nothing, so an intermediate value is never observed.

/// Handle for one scheduled update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    settled: T,
    pending: Option<T>,
    generation: u64,
}

impl<T> Debouncer<T> {
    pub fn new(initial: T) -> Self {
        Self {
            settled: initial,
            pending: None,
            generation: 0,
        }
    }

    /// Replace any pending value; older tickets become stale
    pub fn push(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Promote the pending value if `ticket` is still the newest one.
    ///
    /// Returns the newly settled value, or `None` for a stale ticket.
    pub fn settle(&mut self, ticket: Ticket) -> Option<&T> {
        if ticket.0 != self.generation {
            return None;
        }
        let value = self.pending.take()?;
        self.settled = value;
        Some(&self.settled)
    }

    /// Drop the pending value (teardown)
    pub fn cancel(&mut self) {
        self.pending = None;
        self.generation += 1;
    }

    pub fn value(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T: Default> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
