//! Guards the display regions against responses that arrive out of order.
//!
//! Every submission takes a ticket. Only the most recent ticket may settle,
//! and only once: a response and a timeout for the same request race, and
//! whichever settles first wins.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
    settled: bool,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new ticket; every earlier ticket becomes stale.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.settled = false;
        RequestTicket(self.latest)
    }

    /// Whether `ticket` may still write its result.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest && !self.settled
    }

    /// Claims the right to write the result for `ticket`.
    ///
    /// Returns `false` when the ticket is stale or already settled; the
    /// caller must then drop its result.
    pub fn settle(&mut self, ticket: RequestTicket) -> bool {
        if self.is_current(ticket) {
            self.settled = true;
            true
        } else {
            debug!(
                ticket = ticket.0,
                latest = self.latest,
                settled = self.settled,
                "discarding stale completion"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_request_settles_once() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin();

        assert!(tracker.is_current(ticket));
        assert!(tracker.settle(ticket));
        assert!(!tracker.is_current(ticket));
        assert!(!tracker.settle(ticket));
    }

    #[test]
    fn test_overlapping_requests_latest_wins() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();

        // The first response arrives after the second submission.
        assert!(!tracker.settle(first));
        assert!(tracker.settle(second));
    }

    #[test]
    fn test_out_of_order_completion() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(tracker.settle(second));
        // A slow first response must not overwrite the second one.
        assert!(!tracker.settle(first));
    }

    #[test]
    fn test_timeout_then_late_response() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin();

        // Timeout fires first.
        assert!(tracker.settle(ticket));
        // Response arrives afterwards and is dropped.
        assert!(!tracker.settle(ticket));
    }

    #[test]
    fn test_tickets_increase() {
        let mut tracker = RequestTracker::new();
        let a = tracker.begin();
        let b = tracker.begin();
        assert!(b > a);
        assert_eq!(b.generation(), a.generation() + 1);
    }
}
