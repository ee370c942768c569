//! Single-threaded timer queue
//!
//! All animation in the desktop runs off one queue that the host drains from
//! its frame or interval callback. Entries are one-shot: a repeating task
//! re-arms itself from its own handler and receives a fresh handle, so an
//! owner that clears its stored handle before cancelling can never be hit by
//! a stale firing.

use std::collections::BTreeMap;
use serde::Serialize;

/// Handle to a scheduled timer entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TimerHandle(u64);

/// Timed work requested by a terminal session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionTask {
    /// Print the next boot line
    Boot,
    /// Emit one round of cracking output
    Crack,
}

/// Scheduling seam used by [`crate::TerminalSession`]
pub trait Scheduler {
    /// Current time in milliseconds since the Unix epoch
    fn now_ms(&self) -> f64;

    /// Run `task` once after `delay_ms`
    fn schedule(&mut self, delay_ms: f64, task: SessionTask) -> TimerHandle;

    /// Cancel a pending entry; unknown or already-fired handles are ignored
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Clone, Debug)]
struct Entry<K> {
    deadline: f64,
    task: K,
}

/// Deadline-ordered queue of one-shot timers
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    entries: BTreeMap<TimerHandle, Entry<K>>,
    next_handle: u64,
    now_ms: f64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<K> TimerQueue<K> {
    /// Create an empty queue starting at `now_ms`
    pub fn new(now_ms: f64) -> Self {
        Self {
            entries: BTreeMap::new(),
            next_handle: 1,
            now_ms,
        }
    }

    /// Current queue time
    ///
    /// While draining, this is the deadline of the entry being handled, so
    /// re-armed timers keep their cadence even if the host ticks late.
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Schedule `task` to fire `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: f64, task: K) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        let deadline = self.now_ms + delay_ms.max(0.0);
        self.entries.insert(handle, Entry { deadline, task });
        handle
    }

    /// Cancel an entry, returning whether it was still pending
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.entries.remove(&handle).is_some()
    }


    /// Remove and return the earliest entry due at `now_ms`
    ///
    /// Ties fire in scheduling order.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(TimerHandle, K)> {
        let handle = self
            .entries
            .iter()
            .filter(|(_, e)| e.deadline <= now_ms)
            .min_by(|(ha, a), (hb, b)| a.deadline.total_cmp(&b.deadline).then(ha.cmp(hb)))
            .map(|(h, _)| *h)?;

        let entry = self.entries.remove(&handle)?;
        self.now_ms = self.now_ms.max(entry.deadline);
        Some((handle, entry.task))
    }

    /// Advance queue time once draining is done
    pub fn settle(&mut self, now_ms: f64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Deadline of the earliest pending entry
    pub fn next_deadline(&self) -> Option<f64> {
        self.entries.values().map(|e| e.deadline).min_by(f64::total_cmp)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Scheduler for TimerQueue<SessionTask> {
    fn now_ms(&self) -> f64 {
        TimerQueue::now_ms(self)
    }

    fn schedule(&mut self, delay_ms: f64, task: SessionTask) -> TimerHandle {
        TimerQueue::schedule(self, delay_ms, task)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        TimerQueue::cancel(self, handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_due_in_deadline_order() {
        let mut q = TimerQueue::new(0.0);
        let late = q.schedule(50.0, "late");
        let early = q.schedule(10.0, "early");

        assert!(q.pop_due(5.0).is_none());
        assert_eq!(q.pop_due(100.0), Some((early, "early")));
        assert_eq!(q.pop_due(100.0), Some((late, "late")));
        assert!(q.pop_due(100.0).is_none());
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut q = TimerQueue::new(0.0);
        let a = q.schedule(10.0, 'a');
        let b = q.schedule(10.0, 'b');
        assert_eq!(q.pop_due(10.0).map(|(h, _)| h), Some(a));
        assert_eq!(q.pop_due(10.0).map(|(h, _)| h), Some(b));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut q = TimerQueue::new(0.0);
        let h = q.schedule(10.0, ());
        assert!(q.cancel(h));
        assert!(!q.cancel(h));
        assert!(q.pop_due(1000.0).is_none());
    }

    #[test]
    fn test_handles_are_never_reused() {
        let mut q = TimerQueue::new(0.0);
        let a = q.schedule(0.0, ());
        q.pop_due(0.0);
        let b = q.schedule(0.0, ());
        assert_ne!(a, b);
    }

    #[test]
    fn test_rearm_keeps_cadence_when_draining_late() {
        let mut q = TimerQueue::new(0.0);
        q.schedule(100.0, ());

        let mut fired = 0;
        while q.pop_due(350.0).is_some() {
            fired += 1;
            q.schedule(100.0, ());
        }
        q.settle(350.0);

        assert_eq!(fired, 3);
        assert_eq!(q.next_deadline(), Some(400.0));
    }

    #[test]
    fn test_negative_delay_fires_immediately() {
        let mut q = TimerQueue::new(500.0);
        q.schedule(-20.0, ());
        assert!(q.pop_due(500.0).is_some());
    }
}
