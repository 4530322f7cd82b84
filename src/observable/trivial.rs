use std::marker::PhantomData;

use crate::prelude::*;

/// Creates an observable that produces no values.
///
/// Completes one tick after the subscription. Never emits an error.
pub fn empty<Item, Err, S: Scheduler>(scheduler: &S) -> Empty<Item, Err, S> {
  Empty { scheduler: scheduler.clone(), _marker: PhantomData }
}

/// Creates an observable that never emits anything and never terminates.
///
/// Disposing the subscription is the only way to end it.
pub fn never<Item, Err>() -> Never<Item, Err> { Never(PhantomData) }

/// Creates an observable that emits no items, just terminates with an error
/// one tick after the subscription.
///
/// # Arguments
///
/// * `err` - An error to emit and terminate with
pub fn throw_exception<Item, Err, S: Scheduler>(err: Err, scheduler: &S) -> Throw<Item, Err, S> {
  Throw { err, scheduler: scheduler.clone(), _marker: PhantomData }
}

#[derive(Clone)]
pub struct Empty<Item, Err, S> {
  scheduler: S,
  _marker: PhantomData<fn() -> (Item, Err)>,
}

impl<Item: 'static, Err: 'static, S: Scheduler> Observable for Empty<Item, Err, S> {
  type Item = Item;
  type Err = Err;

  fn actual_subscribe(&self, mut subscriber: Subscriber<Item, Err>) -> BoxDisposable {
    Box::new(self.scheduler.schedule_relative(TICK, move || subscriber.complete()))
  }
}

pub struct Never<Item, Err>(PhantomData<fn() -> (Item, Err)>);

impl<Item, Err> Clone for Never<Item, Err> {
  fn clone(&self) -> Self { Never(PhantomData) }
}

impl<Item, Err> Observable for Never<Item, Err> {
  type Item = Item;
  type Err = Err;

  fn actual_subscribe(&self, _: Subscriber<Item, Err>) -> BoxDisposable {
    Box::new(BooleanDisposable::new())
  }
}

#[derive(Clone)]
pub struct Throw<Item, Err, S> {
  err: Err,
  scheduler: S,
  _marker: PhantomData<fn() -> Item>,
}

impl<Item, Err, S> Observable for Throw<Item, Err, S>
where
  Item: 'static,
  Err: Clone + 'static,
  S: Scheduler,
{
  type Item = Item;
  type Err = Err;

  fn actual_subscribe(&self, mut subscriber: Subscriber<Item, Err>) -> BoxDisposable {
    let err = self.err.clone();
    Box::new(self.scheduler.schedule_relative(TICK, move || subscriber.error(err)))
  }
}
