//! Virtual-time scheduler.
//!
//! The clock only moves when the queue is drained with [`start`], [`advance_to`]
//! or [`advance_by`], or when it is pushed with [`sleep`]. Items are popped in
//! `(due_time, sequence)` order, so items due on the same tick run in the
//! order they were scheduled.
//!
//! [`start`]: VirtualTimeScheduler::start
//! [`advance_to`]: VirtualTimeScheduler::advance_to
//! [`advance_by`]: VirtualTimeScheduler::advance_by
//! [`sleep`]: VirtualTimeScheduler::sleep
use std::{
  cell::RefCell,
  cmp::Ordering,
  collections::BinaryHeap,
  fmt::{Debug, Formatter},
  rc::Rc,
};

use tracing::{debug, trace};

use super::{Scheduler, VirtualTime};
use crate::{
  disposable::{BooleanDisposable, Disposable},
  error::SchedulerError,
};

// ==================== Queue Items ====================

/// A unit of work owned by the queue until it runs or is discarded.
pub struct ScheduledItem {
  due_time: VirtualTime,
  sequence: u64,
  action: Box<dyn FnOnce()>,
  cancelled: BooleanDisposable,
}

impl ScheduledItem {
  #[inline]
  pub fn due_time(&self) -> VirtualTime { self.due_time }

  #[inline]
  pub fn sequence(&self) -> u64 { self.sequence }

  #[inline]
  pub fn is_cancelled(&self) -> bool { self.cancelled.is_disposed() }
}

impl PartialEq for ScheduledItem {
  fn eq(&self, other: &Self) -> bool {
    self.due_time == other.due_time && self.sequence == other.sequence
  }
}

impl Eq for ScheduledItem {}

impl PartialOrd for ScheduledItem {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for ScheduledItem {
  fn cmp(&self, other: &Self) -> Ordering {
    // Min-heap: earlier times first, then FIFO by sequence
    other.due_time.cmp(&self.due_time).then_with(|| other.sequence.cmp(&self.sequence))
  }
}

impl Debug for ScheduledItem {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ScheduledItem")
      .field("due_time", &self.due_time)
      .field("sequence", &self.sequence)
      .field("cancelled", &self.is_cancelled())
      .finish()
  }
}

// ==================== Internal State ====================

#[derive(Default)]
struct ClockState {
  clock: VirtualTime,
  queue: BinaryHeap<ScheduledItem>,
  next_sequence: u64,
  running: bool,
  stop_requested: bool,
}

/// Clears the running flag when a drain ends, including by unwinding out of a
/// panicking action.
struct DrainGuard<'a>(&'a RefCell<ClockState>);

impl Drop for DrainGuard<'_> {
  fn drop(&mut self) {
    if let Ok(mut state) = self.0.try_borrow_mut() {
      state.running = false;
      state.stop_requested = false;
    }
  }
}

// ==================== VirtualTimeScheduler ====================

/// A single-threaded scheduler driven by an explicit virtual clock.
///
/// Clones share the same clock and queue.
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use rxrust_vt::prelude::*;
///
/// let scheduler = VirtualTimeScheduler::new();
/// let log = Rc::new(RefCell::new(vec![]));
///
/// let c_log = log.clone();
/// scheduler.schedule_absolute(20, move || c_log.borrow_mut().push("late"));
/// let c_log = log.clone();
/// scheduler.schedule_absolute(10, move || c_log.borrow_mut().push("early"));
///
/// scheduler.start().unwrap();
/// assert_eq!(*log.borrow(), ["early", "late"]);
/// assert_eq!(scheduler.now(), 20);
/// ```
#[derive(Clone, Default)]
pub struct VirtualTimeScheduler(Rc<RefCell<ClockState>>);

impl VirtualTimeScheduler {
  pub fn new() -> Self { Self::default() }

  /// Creates a scheduler whose clock starts at `initial`.
  pub fn with_clock(initial: VirtualTime) -> Self {
    let scheduler = Self::default();
    scheduler.0.borrow_mut().clock = initial;
    scheduler
  }

  /// Number of queued items, cancelled ones included until they are popped.
  pub fn pending_count(&self) -> usize { self.0.borrow().queue.len() }

  pub fn is_empty(&self) -> bool { self.0.borrow().queue.is_empty() }

  pub fn is_running(&self) -> bool { self.0.borrow().running }

  /// Due time of the next queued item, if any.
  pub fn next_due_time(&self) -> Option<VirtualTime> {
    self.0.borrow().queue.peek().map(ScheduledItem::due_time)
  }

  /// Drains the whole queue.
  ///
  /// Returns [`SchedulerError::AlreadyRunning`] when called from inside an
  /// executing action.
  pub fn start(&self) -> Result<(), SchedulerError> { self.drain(None) }

  /// Runs every item due at or before `target`, then sets the clock to
  /// `target`.
  pub fn advance_to(&self, target: VirtualTime) -> Result<(), SchedulerError> {
    let now = self.now();
    if target < now {
      return Err(SchedulerError::TimeRewind { now, target });
    }
    self.drain(Some(target))
  }

  pub fn advance_by(&self, delta: VirtualTime) -> Result<(), SchedulerError> {
    self.advance_to(self.now().saturating_add(delta))
  }

  /// Asks the current drain to return once the executing action finishes.
  ///
  /// Queued items are kept. Outside a drain this does nothing.
  pub fn stop(&self) {
    let mut state = self.0.borrow_mut();
    if state.running {
      state.stop_requested = true;
    }
  }

  /// Moves the clock forward without running anything.
  pub fn sleep(&self, delta: VirtualTime) {
    let mut state = self.0.borrow_mut();
    state.clock = state.clock.saturating_add(delta);
    debug!(now = state.clock, "virtual clock slept");
  }

  fn drain(&self, limit: Option<VirtualTime>) -> Result<(), SchedulerError> {
    {
      let mut state = self.0.borrow_mut();
      if state.running {
        return Err(SchedulerError::AlreadyRunning);
      }
      state.running = true;
      state.stop_requested = false;
      debug!(now = state.clock, ?limit, pending = state.queue.len(), "drain started");
    }
    let _guard = DrainGuard(&self.0);

    let mut stopped = false;
    loop {
      let next = {
        let mut state = self.0.borrow_mut();
        if state.stop_requested {
          stopped = true;
          break;
        }
        let due = match state.queue.peek() {
          Some(item) => item.due_time,
          None => break,
        };
        if limit.is_some_and(|limit| due > limit) {
          break;
        }
        state.queue.pop()
      };
      let Some(item) = next else { break };

      if item.is_cancelled() {
        trace!(due_time = item.due_time, sequence = item.sequence, "skipped cancelled item");
        continue;
      }

      {
        // Items queued before a `sleep` run at the current clock.
        let mut state = self.0.borrow_mut();
        state.clock = state.clock.max(item.due_time);
      }
      trace!(due_time = item.due_time, sequence = item.sequence, "executing item");
      let ScheduledItem { action, cancelled, .. } = item;
      cancelled.dispose();
      action();
    }

    let mut state = self.0.borrow_mut();
    if let Some(limit) = limit.filter(|_| !stopped) {
      state.clock = state.clock.max(limit);
    }
    debug!(now = state.clock, pending = state.queue.len(), stopped, "drain finished");
    Ok(())
  }
}

impl Scheduler for VirtualTimeScheduler {
  #[inline]
  fn now(&self) -> VirtualTime { self.0.borrow().clock }

  fn schedule_absolute(
    &self,
    due_time: VirtualTime,
    action: impl FnOnce() + 'static,
  ) -> BooleanDisposable {
    let cancelled = BooleanDisposable::new();
    let mut state = self.0.borrow_mut();
    let due_time = due_time.max(state.clock);
    let sequence = state.next_sequence;
    state.next_sequence += 1;
    trace!(due_time, sequence, "scheduled item");
    state.queue.push(ScheduledItem {
      due_time,
      sequence,
      action: Box::new(action),
      cancelled: cancelled.clone(),
    });
    cancelled
  }
}

impl Debug for VirtualTimeScheduler {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let state = self.0.borrow();
    f.debug_struct("VirtualTimeScheduler")
      .field("clock", &state.clock)
      .field("pending", &state.queue.len())
      .field("running", &state.running)
      .finish()
  }
}
