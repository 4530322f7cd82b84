//! Virtual-time test harness.
//!
//! [`TestScheduler`] is a [`VirtualTimeScheduler`] that can also script
//! sources and record what an observer sees:
//!
//! ```
//! use rxrust_vt::{prelude::*, test_scheduler::*};
//!
//! let scheduler = TestScheduler::new();
//! let xs: ColdObservable<i32, Fault> =
//!   scheduler.create_cold_observable(vec![on_next(100, 1), on_completed(150)]);
//!
//! let c_xs = xs.clone();
//! let results = scheduler.start_with_create(move || c_xs).unwrap();
//!
//! assert_eq!(results.messages(), [on_next(300, 1), on_completed(350)]);
//! assert_eq!(xs.subscriptions(), [subscription(200, 350)]);
//! ```
use std::{cell::RefCell, ops::Deref, rc::Rc};

use tracing::debug;

use crate::{
  disposable::BooleanDisposable,
  error::SchedulerError,
  observable::{Observable, ObservableExt},
  scheduler::{Scheduler, VirtualTime, VirtualTimeScheduler},
  subscriber::Subscription,
};

mod cold;
pub use cold::*;
mod hot;
pub use hot::*;
mod mock_observer;
pub use mock_observer::*;
mod notification;
pub use notification::*;

/// Default time at which `start_*` creates the observable under test.
pub const CREATED: VirtualTime = 100;
/// Default time at which `start_*` subscribes.
pub const SUBSCRIBED: VirtualTime = 200;
/// Default time at which `start_*` disposes the subscription.
pub const DISPOSED: VirtualTime = 1000;

/// Timing of a `start_*` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartConfig {
  created: VirtualTime,
  subscribed: VirtualTime,
  disposed: VirtualTime,
}

impl StartConfig {
  pub fn new() -> Self { Self { created: CREATED, subscribed: SUBSCRIBED, disposed: DISPOSED } }

  pub fn created(mut self, at: VirtualTime) -> Self {
    self.created = at;
    self
  }

  pub fn subscribed(mut self, at: VirtualTime) -> Self {
    self.subscribed = at;
    self
  }

  pub fn disposed(mut self, at: VirtualTime) -> Self {
    self.disposed = at;
    self
  }
}

impl Default for StartConfig {
  fn default() -> Self { Self::new() }
}

/// A virtual-time scheduler with scripting and recording helpers.
///
/// Derefs to [`VirtualTimeScheduler`] for clock control.
#[derive(Clone, Debug, Default)]
pub struct TestScheduler(VirtualTimeScheduler);

impl TestScheduler {
  pub fn new() -> Self { Self::default() }

  /// A source whose message times are offsets from each subscription.
  pub fn create_cold_observable<T, E>(
    &self,
    messages: Vec<Recorded<Notification<T, E>>>,
  ) -> ColdObservable<T, E> {
    ColdObservable::new(self.clone(), messages)
  }

  /// A source whose messages fire at absolute times, scheduled right away.
  pub fn create_hot_observable<T, E>(
    &self,
    messages: Vec<Recorded<Notification<T, E>>>,
  ) -> HotObservable<T, E>
  where
    T: Clone + 'static,
    E: Clone + 'static,
  {
    HotObservable::new(self.clone(), messages)
  }

  pub fn create_observer<T, E>(&self) -> MockObserver<T, E> { MockObserver::new(self.clone()) }

  /// Runs `create` with the default timing.
  pub fn start_with_create<O, F>(
    &self,
    create: F,
  ) -> Result<MockObserver<O::Item, O::Err>, SchedulerError>
  where
    F: FnOnce() -> O + 'static,
    O: Observable + 'static,
    O::Item: 'static,
    O::Err: 'static,
  {
    self.start_with_timing(create, StartConfig::default())
  }

  /// Runs `create` with the default timing, disposing at `disposed`.
  pub fn start_with_dispose<O, F>(
    &self,
    create: F,
    disposed: VirtualTime,
  ) -> Result<MockObserver<O::Item, O::Err>, SchedulerError>
  where
    F: FnOnce() -> O + 'static,
    O: Observable + 'static,
    O::Item: 'static,
    O::Err: 'static,
  {
    self.start_with_timing(create, StartConfig::default().disposed(disposed))
  }

  /// Creates the observable at `config.created`, subscribes a fresh
  /// [`MockObserver`] at `config.subscribed` and disposes the subscription at
  /// `config.disposed`, then drains the queue.
  pub fn start_with_timing<O, F>(
    &self,
    create: F,
    config: StartConfig,
  ) -> Result<MockObserver<O::Item, O::Err>, SchedulerError>
  where
    F: FnOnce() -> O + 'static,
    O: Observable + 'static,
    O::Item: 'static,
    O::Err: 'static,
  {
    let observer = self.create_observer();
    let source: Rc<RefCell<Option<O>>> = Rc::default();
    let subscription: Rc<RefCell<Option<Subscription>>> = Rc::default();

    let c_source = source.clone();
    self.schedule_absolute(config.created, move || {
      let created = create();
      *c_source.borrow_mut() = Some(created);
    });

    let c_observer = observer.clone();
    let c_subscription = subscription.clone();
    self.schedule_absolute(config.subscribed, move || {
      let subscribed = source.borrow().as_ref().map(|source| source.subscribe_with(c_observer));
      *c_subscription.borrow_mut() = subscribed;
    });

    self.schedule_absolute(config.disposed, move || {
      let taken = subscription.borrow_mut().take();
      if let Some(subscription) = taken {
        subscription.unsubscribe();
      }
    });

    debug!(?config, "harness run scheduled");
    self.start()?;
    Ok(observer)
  }
}

impl Deref for TestScheduler {
  type Target = VirtualTimeScheduler;

  #[inline]
  fn deref(&self) -> &Self::Target { &self.0 }
}

impl Scheduler for TestScheduler {
  #[inline]
  fn now(&self) -> VirtualTime { self.0.now() }

  #[inline]
  fn schedule_absolute(
    &self,
    due_time: VirtualTime,
    action: impl FnOnce() + 'static,
  ) -> BooleanDisposable {
    self.0.schedule_absolute(due_time, action)
  }
}
