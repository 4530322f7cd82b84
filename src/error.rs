//! Error types.
//!
//! There are two families of errors:
//!
//! - [`Fault`] is *data*. It travels through the `error` channel of an
//!   [`Observer`](crate::observer::Observer) like any other notification.
//! - [`SchedulerError`] and [`DisposableError`] are contract violations
//!   returned to the caller that broke the contract. They never enter a
//!   notification stream.
use std::borrow::Cow;

use crate::scheduler::VirtualTime;

/// The canonical error payload of the notification channel.
///
/// Equality compares the message, so two faults built from the same text are
/// interchangeable in a notification log.
///
/// ```
/// use rxrust_vt::prelude::*;
///
/// let ex = Fault::new("ex");
/// assert_eq!(ex, Fault::from("ex"));
/// assert_eq!(ex.to_string(), "ex");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{0}")]
pub struct Fault(Cow<'static, str>);

impl Fault {
  pub fn new(message: impl Into<Cow<'static, str>>) -> Self { Fault(message.into()) }

  #[inline]
  pub fn message(&self) -> &str { &self.0 }
}

impl From<&'static str> for Fault {
  fn from(message: &'static str) -> Self { Fault(Cow::Borrowed(message)) }
}

impl From<String> for Fault {
  fn from(message: String) -> Self { Fault(Cow::Owned(message)) }
}

/// Misuse of a [`VirtualTimeScheduler`](crate::scheduler::VirtualTimeScheduler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
  /// Virtual time never decreases.
  #[error("cannot move the virtual clock back from {now} to {target}")]
  TimeRewind { now: VirtualTime, target: VirtualTime },
  /// The queue is already being drained further up the stack.
  #[error("the scheduler is already draining its queue")]
  AlreadyRunning,
}

/// Misuse of a disposable container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DisposableError {
  #[error("a single-assignment disposable can only be assigned once")]
  AlreadyAssigned,
}
