/// A single-slot deferred task, driven by the host's clock.
///
/// Scheduling replaces whatever was pending, so at most one task is ever outstanding; this
/// gives both debouncing (reschedule on every notification) and "latest wins" activation.
/// Nothing runs on its own: the host calls [`Deferred::poll`] with the current time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deferred<T = ()> {
    pending: Option<(u64, T)>,
}

impl<T> Deferred<T> {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedules `payload` to become due `delay_ms` after `now_ms`, replacing any pending task.
    ///
    /// Returns the replaced payload, if any.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, payload: T) -> Option<T> {
        let due = now_ms.saturating_add(delay_ms);
        self.pending.replace((due, payload)).map(|(_, p)| p)
    }

    /// Cancels the pending task. Cancelling when nothing is pending is a no-op.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, p)| p)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, p)| p)
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    /// Takes the pending payload if it is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        if self.due_ms().is_some_and(|due| now_ms >= due) {
            self.cancel()
        } else {
            None
        }
    }
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self::new()
    }
}
