use std::marker::PhantomData;

use crate::prelude::*;

/// Creates an observable from a subscribe body.
///
/// The body runs synchronously on every subscription. It receives the
/// [`Subscriber`] to emit through and returns a teardown closure that runs
/// when the subscription is disposed or terminates. A panic inside the body
/// unwinds out of `subscribe`; it is never turned into an error notification.
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use rxrust_vt::prelude::*;
///
/// let seen = Rc::new(RefCell::new(vec![]));
/// let c_seen = seen.clone();
/// observable::create(|mut subscriber: Subscriber<i32, Fault>| {
///   subscriber.next(1);
///   subscriber.next(2);
///   subscriber.complete();
///   || {}
/// })
/// .subscribe(move |v| c_seen.borrow_mut().push(v));
///
/// assert_eq!(*seen.borrow(), [1, 2]);
/// ```
pub fn create<Item, Err, F, T>(subscribe: F) -> Create<F, Item, Err>
where
  F: Fn(Subscriber<Item, Err>) -> T,
  T: FnOnce() + 'static,
{
  Create { subscribe, _marker: PhantomData }
}

/// Like [`create`], but the body returns a [`Disposable`] instead of a bare
/// teardown closure.
pub fn create_with_disposable<Item, Err, F, D>(subscribe: F) -> CreateWithDisposable<F, Item, Err>
where
  F: Fn(Subscriber<Item, Err>) -> D,
  D: Disposable + 'static,
{
  CreateWithDisposable { subscribe, _marker: PhantomData }
}

#[derive(Clone)]
pub struct Create<F, Item, Err> {
  subscribe: F,
  _marker: PhantomData<fn() -> (Item, Err)>,
}

impl<F, Item, Err, T> Observable for Create<F, Item, Err>
where
  F: Fn(Subscriber<Item, Err>) -> T,
  T: FnOnce() + 'static,
{
  type Item = Item;
  type Err = Err;

  fn actual_subscribe(&self, subscriber: Subscriber<Item, Err>) -> BoxDisposable {
    Box::new(ClosureDisposable::new((self.subscribe)(subscriber)))
  }
}

#[derive(Clone)]
pub struct CreateWithDisposable<F, Item, Err> {
  subscribe: F,
  _marker: PhantomData<fn() -> (Item, Err)>,
}

impl<F, Item, Err, D> Observable for CreateWithDisposable<F, Item, Err>
where
  F: Fn(Subscriber<Item, Err>) -> D,
  D: Disposable + 'static,
{
  type Item = Item;
  type Err = Err;

  fn actual_subscribe(&self, subscriber: Subscriber<Item, Err>) -> BoxDisposable {
    Box::new((self.subscribe)(subscriber))
  }
}
