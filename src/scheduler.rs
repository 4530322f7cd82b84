//! Scheduling on a virtual clock.
//!
//! Every timed behavior in this crate goes through a [`Scheduler`]. The only
//! implementation shipped here is the [`VirtualTimeScheduler`], whose clock
//! moves only when it is driven, so a whole run is reproducible tick for tick.
use std::{cell::RefCell, rc::Rc};

use crate::disposable::{BooleanDisposable, Disposable, SerialDisposable};

mod virtual_time;
pub use virtual_time::*;

/// A point on the virtual clock, counted in ticks.
pub type VirtualTime = u64;

/// The distance between two consecutive notifications of a creation operator.
pub const TICK: VirtualTime = 1;

/// Marks a subscription window that was never closed.
pub const INFINITE: VirtualTime = VirtualTime::MAX;

/// Orders and executes time-stamped work.
///
/// Work is never executed inline: an action scheduled for a time at or before
/// the current clock runs on the next pop of the queue, after the caller has
/// returned.
pub trait Scheduler: Clone + 'static {
  fn now(&self) -> VirtualTime;

  /// Enqueues `action` to run when the clock reaches `due_time`.
  ///
  /// Disposing the returned handle before the action runs cancels it.
  fn schedule_absolute(
    &self,
    due_time: VirtualTime,
    action: impl FnOnce() + 'static,
  ) -> BooleanDisposable;

  #[inline]
  fn schedule_relative(
    &self,
    delay: VirtualTime,
    action: impl FnOnce() + 'static,
  ) -> BooleanDisposable {
    self.schedule_absolute(self.now().saturating_add(delay), action)
  }

  /// Enqueues `action` at the current tick.
  #[inline]
  fn schedule(&self, action: impl FnOnce() + 'static) -> BooleanDisposable {
    self.schedule_relative(0, action)
  }

  /// Runs `action` every `delay` ticks, threading a state through the steps.
  ///
  /// The first step runs `delay` ticks from now. A step returns
  /// `Some(next_state)` to run again, or `None` to stop. Disposing the returned
  /// handle cancels whichever step is pending.
  fn schedule_recursive<St, F>(&self, delay: VirtualTime, state: St, action: F) -> SerialDisposable
  where
    St: 'static,
    F: FnMut(St) -> Option<St> + 'static,
  {
    let serial = SerialDisposable::new();
    recursive_step(self.clone(), serial.clone(), delay, state, Rc::new(RefCell::new(action)));
    serial
  }
}

fn recursive_step<S, St, F>(
  scheduler: S,
  serial: SerialDisposable,
  delay: VirtualTime,
  state: St,
  action: Rc<RefCell<F>>,
) where
  S: Scheduler,
  St: 'static,
  F: FnMut(St) -> Option<St> + 'static,
{
  let c_scheduler = scheduler.clone();
  let c_serial = serial.clone();
  let handle = scheduler.schedule_relative(delay, move || {
    if c_serial.is_disposed() {
      return;
    }
    let next = (*action.borrow_mut())(state);
    if let Some(next) = next {
      recursive_step(c_scheduler, c_serial, delay, next, action);
    }
  });
  serial.set(handle);
}
