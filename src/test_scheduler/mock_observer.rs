use crate::{
  observer::Observer,
  rc::{MutRc, RcDeref, RcDerefMut},
  scheduler::Scheduler,
  test_scheduler::{Notification, Recorded, TestScheduler},
};

/// An observer that records every notification with the virtual time it
/// arrived at.
///
/// Clones share one log.
pub struct MockObserver<T, E> {
  scheduler: TestScheduler,
  messages: MutRc<Vec<Recorded<Notification<T, E>>>>,
}

impl<T, E> MockObserver<T, E> {
  pub(crate) fn new(scheduler: TestScheduler) -> Self {
    MockObserver { scheduler, messages: MutRc::own(vec![]) }
  }

  /// A copy of the log so far.
  pub fn messages(&self) -> Vec<Recorded<Notification<T, E>>>
  where
    T: Clone,
    E: Clone,
  {
    self.messages.rc_deref().clone()
  }

  pub fn len(&self) -> usize { self.messages.rc_deref().len() }

  pub fn is_empty(&self) -> bool { self.messages.rc_deref().is_empty() }

  fn record(&self, notification: Notification<T, E>) {
    let time = self.scheduler.now();
    self.messages.rc_deref_mut().push(Recorded::new(time, notification));
  }
}

impl<T, E> Clone for MockObserver<T, E> {
  fn clone(&self) -> Self {
    MockObserver { scheduler: self.scheduler.clone(), messages: self.messages.clone() }
  }
}

impl<T, E> Observer<T, E> for MockObserver<T, E> {
  fn next(&mut self, value: T) { self.record(Notification::Next(value)) }

  fn error(&mut self, err: E) { self.record(Notification::Error(err)) }

  fn complete(&mut self) { self.record(Notification::Completed) }
}
