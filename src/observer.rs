//! Observer trait and implementations
//!
//! The Observer trait defines the consumer of data in the reactive pattern.
//! It provides three methods: next (for values), error (for errors), and
//! complete (for stream completion).

// ============================================================================
// Observer Trait
// ============================================================================

/// The three-operation sink consuming an observable's notifications.
///
/// Implementations may assume the grammar `next* (error | complete)?`: every
/// observable in this crate delivers through a
/// [`Subscriber`](crate::subscriber::Subscriber), which drops anything that
/// follows a terminal notification.
pub trait Observer<Item, Err> {
  fn next(&mut self, value: Item);

  fn error(&mut self, err: Err);

  fn complete(&mut self);
}

pub type BoxObserver<Item, Err> = Box<dyn Observer<Item, Err>>;

impl<Item, Err, O> Observer<Item, Err> for Box<O>
where
  O: Observer<Item, Err> + ?Sized,
{
  #[inline]
  fn next(&mut self, value: Item) { (**self).next(value) }

  #[inline]
  fn error(&mut self, err: Err) { (**self).error(err) }

  #[inline]
  fn complete(&mut self) { (**self).complete() }
}

// ============================================================================
// Callback handlers
// ============================================================================

/// Stands in for a callback that was not supplied.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ignore;

/// A callback receiving one argument: a value or an error.
pub trait Handler<Arg> {
  fn call(&mut self, arg: Arg);
}

impl<Arg, F: FnMut(Arg)> Handler<Arg> for F {
  #[inline]
  fn call(&mut self, arg: Arg) { self(arg) }
}

impl<Arg> Handler<Arg> for Ignore {
  #[inline]
  fn call(&mut self, _: Arg) {}
}

/// A callback receiving the completion signal.
pub trait CompleteHandler {
  fn call(&mut self);
}

impl<F: FnMut()> CompleteHandler for F {
  #[inline]
  fn call(&mut self) { self() }
}

impl CompleteHandler for Ignore {
  #[inline]
  fn call(&mut self) {}
}

// ============================================================================
// ObserverAll
// ============================================================================

/// An observer assembled from three callbacks.
///
/// Omitted callbacks are [`Ignore`]. Start from [`ObserverAll::builder`]:
///
/// ```
/// use std::{cell::Cell, rc::Rc};
///
/// use rxrust_vt::prelude::*;
///
/// let sum = Rc::new(Cell::new(0));
/// let c_sum = sum.clone();
/// let mut observer = ObserverAll::builder().on_next(move |v: i32| c_sum.set(c_sum.get() + v));
///
/// Observer::<i32, Fault>::next(&mut observer, 1);
/// Observer::<i32, Fault>::next(&mut observer, 2);
/// Observer::<i32, Fault>::error(&mut observer, Fault::new("ignored"));
/// assert_eq!(sum.get(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ObserverAll<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl ObserverAll<Ignore, Ignore, Ignore> {
  pub fn builder() -> Self { ObserverAll { next: Ignore, error: Ignore, complete: Ignore } }
}

impl<N, E, C> ObserverAll<N, E, C> {
  #[inline]
  pub fn new(next: N, error: E, complete: C) -> Self { ObserverAll { next, error, complete } }

  pub fn on_next<Item, N2: FnMut(Item)>(self, next: N2) -> ObserverAll<N2, E, C> {
    ObserverAll { next, error: self.error, complete: self.complete }
  }

  pub fn on_error<Err, E2: FnMut(Err)>(self, error: E2) -> ObserverAll<N, E2, C> {
    ObserverAll { next: self.next, error, complete: self.complete }
  }

  pub fn on_completed<C2: FnMut()>(self, complete: C2) -> ObserverAll<N, E, C2> {
    ObserverAll { next: self.next, error: self.error, complete }
  }
}

impl<Item, Err, N, E, C> Observer<Item, Err> for ObserverAll<N, E, C>
where
  N: Handler<Item>,
  E: Handler<Err>,
  C: CompleteHandler,
{
  #[inline]
  fn next(&mut self, value: Item) { self.next.call(value) }

  #[inline]
  fn error(&mut self, err: Err) { self.error.call(err) }

  #[inline]
  fn complete(&mut self) { self.complete.call() }
}
