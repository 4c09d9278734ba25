//! Debounce bookkeeping, independent of any timer implementation.
//!
//! The caller owns the clock: it calls [`Debouncer::push`] on every input
//! change, arms a timer for [`Debouncer::delay_ms`], and calls
//! [`Debouncer::fire`] with the ticket when the timer elapses. Only the
//! newest ticket yields a value, so a superseded timer that still fires is
//! harmless.

/// Identifies one scheduled propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Holds the newest input until it has been stable for the whole window.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u32,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    /// New debouncer; a zero delay is clamped to 1 ms.
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms: delay_ms.max(1),
            generation: 0,
            pending: None,
        }
    }

    /// Quiet window in milliseconds.
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Record a new input value, superseding whatever was pending.
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// Timer callback: returns the value only for the newest ticket.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Forget the pending value; any outstanding ticket becomes a no-op.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Whether a value is waiting for its window to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::*;

    #[test]
    fn only_latest_value_propagates() {
        let mut debouncer = Debouncer::new(400);
        let a = debouncer.push("a");
        let ab = debouncer.push("ab");
        let abc = debouncer.push("abc");

        assert_eq!(debouncer.fire(a), None);
        assert_eq!(debouncer.fire(ab), None);
        assert_eq!(debouncer.fire(abc), Some("abc"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn ticket_fires_once() {
        let mut debouncer = Debouncer::new(300);
        let ticket = debouncer.push(1);
        assert_eq!(debouncer.fire(ticket), Some(1));
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn cancel_discards_pending() {
        let mut debouncer = Debouncer::new(300);
        let ticket = debouncer.push("x");
        debouncer.cancel();
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn zero_delay_is_clamped() {
        assert_eq!(Debouncer::<()>::new(0).delay_ms(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn typing_inside_the_window_fires_once() {
        let debouncer = Rc::new(RefCell::new(Debouncer::new(400)));
        let fired = Rc::new(RefCell::new(Vec::new()));
        let local = tokio::task::LocalSet::new();

        local
            .run_until(async {
                for text in ["a", "ab", "abc"] {
                    let ticket = debouncer.borrow_mut().push(text);
                    let delay = u64::from(debouncer.borrow().delay_ms());
                    let debouncer = debouncer.clone();
                    let fired = fired.clone();
                    tokio::task::spawn_local(async move {
                        tokio::time::sleep(Duration::from_millis(delay)).await;
                        if let Some(value) = debouncer.borrow_mut().fire(ticket) {
                            fired.borrow_mut().push(value);
                        }
                    });
                    tokio::time::sleep(Duration::from_millis(120)).await;
                }
                tokio::time::sleep(Duration::from_millis(1_000)).await;
            })
            .await;

        assert_eq!(*fired.borrow(), vec!["abc"]);
    }
}
