//! The observer boundary every notification passes through.
use std::{
  cell::{Cell, RefCell},
  fmt::{Debug, Formatter},
  rc::Rc,
};

use tracing::warn;

use crate::{
  disposable::{Disposable, SingleAssignmentDisposable, SubscriptionGuard},
  observer::{BoxObserver, Observer},
};

/// An auto-detaching observer handle.
///
/// Producers receive a `Subscriber` and may clone and keep it. It enforces the
/// notification grammar: after the first `error` or `complete` every further
/// call is dropped. A terminal notification also disposes the upstream
/// subscription and releases the wrapped observer.
pub struct Subscriber<Item, Err>(Rc<SubscriberInner<Item, Err>>);

struct SubscriberInner<Item, Err> {
  observer: RefCell<Option<BoxObserver<Item, Err>>>,
  stopped: Cell<bool>,
  upstream: SingleAssignmentDisposable,
}

impl<Item, Err> Subscriber<Item, Err> {
  pub fn new(observer: impl Observer<Item, Err> + 'static) -> Self {
    Subscriber(Rc::new(SubscriberInner {
      observer: RefCell::new(Some(Box::new(observer))),
      stopped: Cell::new(false),
      upstream: SingleAssignmentDisposable::new(),
    }))
  }

  /// Attaches the subscription this subscriber receives notifications from.
  ///
  /// If the subscriber already stopped, `upstream` is disposed right away.
  pub fn set_upstream(&self, upstream: impl Disposable + 'static) {
    if let Err(err) = self.0.upstream.set(upstream) {
      warn!(%err, "subscriber upstream assigned twice, the new one was disposed");
    }
  }

  /// Whether a terminal notification was delivered or the subscriber was
  /// disposed.
  #[inline]
  pub fn is_stopped(&self) -> bool { self.0.stopped.get() }

  fn take_observer(&self) -> Option<BoxObserver<Item, Err>> {
    match self.0.observer.try_borrow_mut() {
      Ok(mut observer) => observer.take(),
      Err(_) => {
        warn!("subscriber observer is busy, terminal notification dropped");
        None
      }
    }
  }
}

impl<Item, Err> Observer<Item, Err> for Subscriber<Item, Err> {
  fn next(&mut self, value: Item) {
    if self.is_stopped() {
      return;
    }
    match self.0.observer.try_borrow_mut() {
      Ok(mut observer) => {
        if let Some(observer) = observer.as_mut() {
          observer.next(value);
        }
      }
      Err(_) => warn!("subscriber observer is busy, value dropped"),
    }
    // The observer may have disposed its own subscription.
    if self.is_stopped() {
      drop(self.take_observer());
    }
  }

  fn error(&mut self, err: Err) {
    if self.0.stopped.replace(true) {
      return;
    }
    self.0.upstream.dispose();
    if let Some(mut observer) = self.take_observer() {
      observer.error(err);
    }
  }

  fn complete(&mut self) {
    if self.0.stopped.replace(true) {
      return;
    }
    if let Some(mut observer) = self.take_observer() {
      observer.complete();
    }
    self.0.upstream.dispose();
  }
}

impl<Item, Err> Disposable for Subscriber<Item, Err> {
  fn dispose(&self) {
    self.0.stopped.set(true);
    self.0.upstream.dispose();
    if let Ok(mut observer) = self.0.observer.try_borrow_mut() {
      let released = observer.take();
      drop(observer);
      drop(released);
    }
  }

  #[inline]
  fn is_disposed(&self) -> bool { self.is_stopped() }
}

impl<Item, Err> Clone for Subscriber<Item, Err> {
  #[inline]
  fn clone(&self) -> Self { Subscriber(self.0.clone()) }
}

impl<Item, Err> Debug for Subscriber<Item, Err> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Subscriber")
      .field("stopped", &self.is_stopped())
      .field("upstream", &self.0.upstream)
      .finish()
  }
}

/// The handle returned by `subscribe`.
///
/// Disposing it stops delivery and releases the whole subscription chain.
#[derive(Clone)]
pub struct Subscription(Rc<dyn Disposable>);

impl Subscription {
  pub fn new(disposable: impl Disposable + 'static) -> Self { Subscription(Rc::new(disposable)) }

  #[inline]
  pub fn unsubscribe(&self) { self.0.dispose() }

  #[inline]
  pub fn is_closed(&self) -> bool { self.0.is_disposed() }

  /// Activates "RAII" behavior for this subscription. That means
  /// `unsubscribe()` will be called automatically as soon as the returned
  /// value goes out of scope.
  ///
  /// **Attention:** If you don't assign the return value to a variable,
  /// `unsubscribe()` is called immediately, which is probably not what you
  /// want!
  pub fn unsubscribe_when_dropped(self) -> SubscriptionGuard<Subscription> {
    SubscriptionGuard::new(self)
  }
}

impl Disposable for Subscription {
  #[inline]
  fn dispose(&self) { self.0.dispose() }

  #[inline]
  fn is_disposed(&self) -> bool { self.0.is_disposed() }
}

impl Debug for Subscription {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Subscription").field("closed", &self.is_closed()).finish()
  }
}
