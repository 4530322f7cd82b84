use std::marker::PhantomData;

use crate::prelude::*;

/// Creates an observable that emits `value` and completes, both one tick
/// after the subscription.
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use rxrust_vt::prelude::*;
///
/// let scheduler = VirtualTimeScheduler::new();
/// let seen = Rc::new(RefCell::new(vec![]));
/// let c_seen = seen.clone();
/// observable::return_value::<_, Fault, _>(42, &scheduler)
///   .subscribe(move |v| c_seen.borrow_mut().push((v, 1)));
///
/// scheduler.start().unwrap();
/// assert_eq!(*seen.borrow(), [(42, 1)]);
/// ```
pub fn return_value<Item, Err, S>(value: Item, scheduler: &S) -> ReturnValue<Item, Err, S>
where
  S: Scheduler,
{
  ReturnValue { value, scheduler: scheduler.clone(), _marker: PhantomData }
}

/// Emits `value` `count` times, one tick apart, then completes on the tick of
/// the last value.
///
/// `None` repeats forever; `Some(0)` completes at once.
pub fn repeat_value<Item, Err, S>(
  value: Item,
  count: Option<usize>,
  scheduler: &S,
) -> Repeat<ReturnValue<Item, Err, S>, S>
where
  S: Scheduler,
{
  Repeat::new(return_value(value, scheduler), count, scheduler)
}

#[derive(Clone)]
pub struct ReturnValue<Item, Err, S> {
  value: Item,
  scheduler: S,
  _marker: PhantomData<fn() -> Err>,
}

impl<Item, Err, S> Observable for ReturnValue<Item, Err, S>
where
  Item: Clone + 'static,
  Err: 'static,
  S: Scheduler,
{
  type Item = Item;
  type Err = Err;

  fn actual_subscribe(&self, mut subscriber: Subscriber<Item, Err>) -> BoxDisposable {
    let value = self.value.clone();
    let handle = self.scheduler.schedule_relative(TICK, move || {
      subscriber.next(value);
      subscriber.complete();
    });
    Box::new(handle)
  }
}
