//! Bookkeeping for in-flight reads: which response is still wanted, and how
//! to stop one that is not.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{ListKey, Mutation};

/// Identifies one issued request within a [`RequestSequence`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic request counter. Only the response holding the most recently
/// issued ticket may be applied.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[derive(Default)]
struct CancelInner {
    cancelled: Cell<bool>,
    on_cancel: RefCell<Vec<Box<dyn FnOnce()>>>,
}

/// Single-threaded cancellation token shared by a screen and the requests it
/// started. Clones observe the same state.
#[derive(Clone, Default)]
pub struct CancellationToken {
    inner: Rc<CancelInner>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Register work to run on cancellation, e.g. aborting a browser fetch.
    /// Runs immediately if the token is already cancelled.
    pub fn on_cancel(&self, hook: impl FnOnce() + 'static) {
        if self.is_cancelled() {
            hook();
        } else {
            self.inner.on_cancel.borrow_mut().push(Box::new(hook));
        }
    }

    /// Idempotent; hooks run once, on the first call.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let hooks = std::mem::take(&mut *self.inner.on_cancel.borrow_mut());
        for hook in hooks {
            hook();
        }
    }
}

impl fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Per-list generation counters. A list's generation is part of its fetch
/// dependencies, so bumping it re-triggers the fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListGenerations {
    generations: HashMap<ListKey, u32>,
}

impl ListGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self, key: ListKey) -> u32 {
        self.generations.get(&key).copied().unwrap_or(0)
    }

    pub fn bump(&mut self, key: ListKey) {
        let generation = self.generations.entry(key).or_insert(0);
        *generation = generation.wrapping_add(1);
    }

    /// Mark every list the write can have changed as stale
    pub fn invalidate(&mut self, mutation: &Mutation) {
        for key in mutation.affected_lists() {
            self.bump(*key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LeaveDecision;

    #[test]
    fn test_only_latest_ticket_is_applied() {
        let mut sequence = RequestSequence::new();
        let first = sequence.issue();
        let second = sequence.issue();

        assert!(first < second);
        assert!(!sequence.is_latest(first));
        assert!(sequence.is_latest(second));
    }

    #[test]
    fn test_stale_response_resolving_last_is_discarded() {
        // Two rapid dependency changes; the older response arrives after the newer one
        let mut sequence = RequestSequence::new();
        let older = sequence.issue();
        let newer = sequence.issue();

        let mut applied = Vec::new();
        for (ticket, body) in [(newer, "new"), (older, "old")] {
            if sequence.is_latest(ticket) {
                applied.push(body);
            }
        }
        assert_eq!(applied, vec!["new"]);
    }

    #[test]
    fn test_cancel_runs_hooks_once() {
        let token = CancellationToken::new();
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            token.on_cancel(move || calls.set(calls.get() + 1));
        }

        let observer = token.clone();
        assert!(!observer.is_cancelled());

        token.cancel();
        token.cancel();
        assert!(observer.is_cancelled());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_hook_registered_after_cancel_runs_immediately() {
        let token = CancellationToken::new();
        token.cancel();

        let ran = Rc::new(Cell::new(false));
        {
            let ran = ran.clone();
            token.on_cancel(move || ran.set(true));
        }
        assert!(ran.get());
    }

    #[test]
    fn test_invalidate_bumps_only_affected_lists() {
        let mut generations = ListGenerations::new();
        generations.invalidate(&Mutation::DecideLeaveRequest {
            id: "1".to_string(),
            decision: LeaveDecision::Reject,
        });
        generations.invalidate(&Mutation::CreateLeaveRequest);

        assert_eq!(generations.generation(ListKey::PendingLeaveRequests), 2);
        assert_eq!(generations.generation(ListKey::PendingMedicineRequests), 0);
        assert_eq!(generations.generation(ListKey::Messages), 0);
    }

    #[test]
    fn test_untouched_generations_compare_equal() {
        let mut a = ListGenerations::new();
        let b = ListGenerations::new();
        assert_eq!(a, b);

        a.bump(ListKey::Album);
        assert_ne!(a, b);
        assert_eq!(a.generation(ListKey::Album), 1);
    }
}
