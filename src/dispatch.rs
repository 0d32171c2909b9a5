//! Coalescing snapshot dispatcher
//!
//! The calculators run synchronously on every input change, but outbound
//! persistence writes are coalesced: within the window only the latest
//! snapshot is kept, and it is delivered when the window elapses or on an
//! explicit flush (blur/save). The timing policy lives here, fully
//! decoupled from the calculation.

use std::time::{Duration, Instant};

/// Windowed dispatcher holding at most one pending snapshot
pub struct SnapshotDispatcher<T> {
    window: Duration,
    pending: Option<T>,
    last_delivery: Option<Instant>,
    sink: Box<dyn FnMut(T)>,
}

impl<T> SnapshotDispatcher<T> {
    pub fn new(window: Duration, sink: impl FnMut(T) + 'static) -> Self {
        Self {
            window,
            pending: None,
            last_delivery: None,
            sink: Box::new(sink),
        }
    }

    /// Submit the latest snapshot. Delivers immediately if the window has
    /// elapsed since the last delivery; otherwise replaces any pending
    /// snapshot.
    pub fn submit(&mut self, snapshot: T) {
        self.submit_at(snapshot, Instant::now());
    }

    /// Deliver the pending snapshot if the window has elapsed
    pub fn poll(&mut self) {
        self.poll_at(Instant::now());
    }

    /// Force delivery of any pending snapshot (blur / explicit save)
    pub fn flush(&mut self) {
        if let Some(snapshot) = self.pending.take() {
            self.deliver(snapshot, Instant::now());
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn window_elapsed(&self, now: Instant) -> bool {
        match self.last_delivery {
            None => true,
            Some(last) => now.duration_since(last) >= self.window,
        }
    }

    fn deliver(&mut self, snapshot: T, now: Instant) {
        (self.sink)(snapshot);
        self.last_delivery = Some(now);
    }

    // Clock-injected variants used by tests
    fn submit_at(&mut self, snapshot: T, now: Instant) {
        if self.window_elapsed(now) {
            self.pending = None;
            self.deliver(snapshot, now);
        } else {
            self.pending = Some(snapshot);
        }
    }

    fn poll_at(&mut self, now: Instant) {
        if self.window_elapsed(now) {
            if let Some(snapshot) = self.pending.take() {
                self.deliver(snapshot, now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn collector() -> (Rc<RefCell<Vec<u32>>>, SnapshotDispatcher<u32>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let dispatcher = SnapshotDispatcher::new(Duration::from_millis(500), move |v| {
            sink.borrow_mut().push(v);
        });
        (seen, dispatcher)
    }

    #[test]
    fn test_first_submit_delivers_immediately() {
        let (seen, mut dispatcher) = collector();
        dispatcher.submit_at(1, Instant::now());
        assert_eq!(*seen.borrow(), vec![1]);
        assert!(!dispatcher.has_pending());
    }

    #[test]
    fn test_coalesces_within_window() {
        let (seen, mut dispatcher) = collector();
        let t0 = Instant::now();
        dispatcher.submit_at(1, t0);
        dispatcher.submit_at(2, t0 + Duration::from_millis(100));
        dispatcher.submit_at(3, t0 + Duration::from_millis(200));

        // Only the first delivered; 3 replaced 2 as pending
        assert_eq!(*seen.borrow(), vec![1]);
        assert!(dispatcher.has_pending());

        dispatcher.poll_at(t0 + Duration::from_millis(600));
        assert_eq!(*seen.borrow(), vec![1, 3]);
        assert!(!dispatcher.has_pending());
    }

    #[test]
    fn test_flush_forces_delivery() {
        let (seen, mut dispatcher) = collector();
        let t0 = Instant::now();
        dispatcher.submit_at(1, t0);
        dispatcher.submit_at(2, t0 + Duration::from_millis(50));

        dispatcher.flush();
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert!(!dispatcher.has_pending());

        // Flush with nothing pending is a no-op
        dispatcher.flush();
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_submit_after_window_delivers_latest() {
        let (seen, mut dispatcher) = collector();
        let t0 = Instant::now();
        dispatcher.submit_at(1, t0);
        dispatcher.submit_at(2, t0 + Duration::from_millis(100));
        dispatcher.submit_at(3, t0 + Duration::from_millis(700));

        // 3 arrived after the window: delivered directly, superseding 2
        assert_eq!(*seen.borrow(), vec![1, 3]);
        assert!(!dispatcher.has_pending());
    }
}
