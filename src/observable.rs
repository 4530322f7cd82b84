//! Observables and their creation operators.
//!
//! An [`Observable`] is a reusable description of a push-based sequence. It
//! is subscribed through `&self`, so the same value can be subscribed any
//! number of times and every subscription runs independently.
//!
//! Timed creation operators deliver their first notification one [`TICK`]
//! after the subscription and space later ones one tick apart.
//!
//! [`TICK`]: crate::scheduler::TICK
use std::rc::Rc;

use crate::{
  disposable::BoxDisposable,
  observer::{Ignore, Observer, ObserverAll},
  ops::{box_it::BoxObservable, repeat::Repeat, retry::Retry},
  scheduler::Scheduler,
  subscriber::{Subscriber, Subscription},
};

mod create;
pub use create::*;
mod defer;
pub use defer::*;
mod from_iter;
pub use from_iter::*;
mod generate;
pub use generate::*;
mod of;
pub use of::*;
mod trivial;
pub use trivial::*;

/// A factory of independent subscriptions.
pub trait Observable {
  type Item;
  type Err;

  /// Starts a subscription delivering to `subscriber` and returns the handle
  /// that cancels it.
  ///
  /// Most callers want one of the `subscribe` methods of [`ObservableExt`].
  fn actual_subscribe(&self, subscriber: Subscriber<Self::Item, Self::Err>) -> BoxDisposable;
}

impl<O: Observable + ?Sized> Observable for Box<O> {
  type Item = O::Item;
  type Err = O::Err;

  #[inline]
  fn actual_subscribe(&self, subscriber: Subscriber<Self::Item, Self::Err>) -> BoxDisposable {
    (**self).actual_subscribe(subscriber)
  }
}

impl<O: Observable + ?Sized> Observable for Rc<O> {
  type Item = O::Item;
  type Err = O::Err;

  #[inline]
  fn actual_subscribe(&self, subscriber: Subscriber<Self::Item, Self::Err>) -> BoxDisposable {
    (**self).actual_subscribe(subscriber)
  }
}

/// Subscription entry points and the repetition combinators.
pub trait ObservableExt: Observable + Sized {
  /// Subscribes `observer` behind an auto-detaching [`Subscriber`].
  ///
  /// A panic raised while the subscription is being set up unwinds out of
  /// this call.
  fn subscribe_with<O>(&self, observer: O) -> Subscription
  where
    O: Observer<Self::Item, Self::Err> + 'static,
    Self::Item: 'static,
    Self::Err: 'static,
  {
    let subscriber = Subscriber::new(observer);
    let upstream = self.actual_subscribe(subscriber.clone());
    subscriber.set_upstream(upstream);
    Subscription::new(subscriber)
  }

  fn subscribe<N>(&self, next: N) -> Subscription
  where
    N: FnMut(Self::Item) + 'static,
    Self::Item: 'static,
    Self::Err: 'static,
  {
    self.subscribe_with(ObserverAll::new(next, Ignore, Ignore))
  }

  fn subscribe_err<N, E>(&self, next: N, error: E) -> Subscription
  where
    N: FnMut(Self::Item) + 'static,
    E: FnMut(Self::Err) + 'static,
    Self::Item: 'static,
    Self::Err: 'static,
  {
    self.subscribe_with(ObserverAll::new(next, error, Ignore))
  }

  fn subscribe_complete<N, C>(&self, next: N, complete: C) -> Subscription
  where
    N: FnMut(Self::Item) + 'static,
    C: FnMut() + 'static,
    Self::Item: 'static,
    Self::Err: 'static,
  {
    self.subscribe_with(ObserverAll::new(next, Ignore, complete))
  }

  fn subscribe_all<N, E, C>(&self, next: N, error: E, complete: C) -> Subscription
  where
    N: FnMut(Self::Item) + 'static,
    E: FnMut(Self::Err) + 'static,
    C: FnMut() + 'static,
    Self::Item: 'static,
    Self::Err: 'static,
  {
    self.subscribe_with(ObserverAll::new(next, error, complete))
  }

  /// Resubscribes every time the source completes. Errors stop the loop.
  #[inline]
  fn repeat<S: Scheduler>(self, scheduler: &S) -> Repeat<Self, S> {
    Repeat::new(self, None, scheduler)
  }

  /// Subscribes `count` times in total, one after the other.
  ///
  /// `repeat_count(0, ..)` completes at once without subscribing the source.
  #[inline]
  fn repeat_count<S: Scheduler>(self, count: usize, scheduler: &S) -> Repeat<Self, S> {
    Repeat::new(self, Some(count), scheduler)
  }

  /// Resubscribes every time the source fails. Completion stops the loop.
  #[inline]
  fn retry<S: Scheduler>(self, scheduler: &S) -> Retry<Self, S> {
    Retry::new(self, None, scheduler)
  }

  /// Subscribes at most `count` times; the error of the last attempt is
  /// forwarded.
  #[inline]
  fn retry_count<S: Scheduler>(self, count: usize, scheduler: &S) -> Retry<Self, S> {
    Retry::new(self, Some(count), scheduler)
  }

  /// Erases the concrete observable type.
  #[inline]
  fn box_it(self) -> BoxObservable<'static, Self::Item, Self::Err>
  where
    Self: 'static,
  {
    Box::new(self)
  }
}

impl<O: Observable> ObservableExt for O {}
