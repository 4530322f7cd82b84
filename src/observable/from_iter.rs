use std::{marker::PhantomData, ops::RangeInclusive};

use tracing::warn;

use crate::prelude::*;

/// Creates an observable that emits the values of an iterable, one per tick,
/// then completes on the tick after the last value.
///
/// The iterable is cloned for every subscription.
///
/// # Arguments
///
/// * `iter` - An iterable to get all the values from.
/// * `scheduler` - The scheduler the values are delivered on.
///
/// # Examples
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use rxrust_vt::prelude::*;
///
/// let scheduler = VirtualTimeScheduler::new();
/// let seen = Rc::new(RefCell::new(vec![]));
/// let (c_seen, c_scheduler) = (seen.clone(), scheduler.clone());
/// observable::from_iter::<_, Fault, _>(vec![0, 1, 2], &scheduler)
///   .subscribe(move |v| c_seen.borrow_mut().push((c_scheduler.now(), v)));
///
/// scheduler.start().unwrap();
/// assert_eq!(*seen.borrow(), [(1, 0), (2, 1), (3, 2)]);
/// ```
pub fn from_iter<Iter, Err, S>(iter: Iter, scheduler: &S) -> FromIter<Iter, Err, S>
where
  Iter: IntoIterator + Clone,
  S: Scheduler,
{
  FromIter { iter, scheduler: scheduler.clone(), _marker: PhantomData }
}

/// Emits each item of `items` one tick apart, then completes.
#[inline]
pub fn from_array<Item, Err, S>(items: Vec<Item>, scheduler: &S) -> FromIter<Vec<Item>, Err, S>
where
  Item: Clone,
  S: Scheduler,
{
  from_iter(items, scheduler)
}

/// Emits `count` consecutive integers starting at `start`, one tick apart,
/// then completes. `count == 0` emits only the completion.
///
/// The sequence stops at `i64::MAX`: a `count` reaching past it emits the
/// values up to and including `i64::MAX` and logs a warning.
pub fn range<Err, S>(
  start: i64,
  count: usize,
  scheduler: &S,
) -> FromIter<RangeInclusive<i64>, Err, S>
where
  S: Scheduler,
{
  let Some(offset) = count.checked_sub(1) else {
    return from_iter(RangeInclusive::new(1, 0), scheduler);
  };
  let last = i64::try_from(offset).ok().and_then(|offset| start.checked_add(offset));
  let last = last.unwrap_or_else(|| {
    warn!(start, count, "range truncated at i64::MAX");
    i64::MAX
  });
  from_iter(start..=last, scheduler)
}

#[derive(Clone)]
pub struct FromIter<Iter, Err, S> {
  iter: Iter,
  scheduler: S,
  _marker: PhantomData<fn() -> Err>,
}

impl<Iter, Err, S> Observable for FromIter<Iter, Err, S>
where
  Iter: IntoIterator + Clone,
  Iter::IntoIter: 'static,
  Iter::Item: 'static,
  Err: 'static,
  S: Scheduler,
{
  type Item = Iter::Item;
  type Err = Err;

  fn actual_subscribe(&self, mut subscriber: Subscriber<Iter::Item, Err>) -> BoxDisposable {
    let iter = self.iter.clone().into_iter();
    let handle = self.scheduler.schedule_recursive(TICK, iter, move |mut it| match it.next() {
      Some(value) => {
        subscriber.next(value);
        (!subscriber.is_stopped()).then_some(it)
      }
      None => {
        subscriber.complete();
        None
      }
    });
    Box::new(handle)
  }
}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, rc::Rc};

  use crate::prelude::*;

  fn collect<O>(source: &O, scheduler: &VirtualTimeScheduler) -> Rc<RefCell<Vec<(u64, i64)>>>
  where
    O: Observable<Item = i64, Err = Fault>,
  {
    let log = Rc::new(RefCell::new(vec![]));
    let (l1, l2) = (log.clone(), log.clone());
    let (s1, s2) = (scheduler.clone(), scheduler.clone());
    source.subscribe_complete(
      move |v| l1.borrow_mut().push((s1.now(), v)),
      move || l2.borrow_mut().push((s2.now(), i64::MIN)),
    );
    log
  }

  #[test]
  fn range_emits_then_completes() {
    let scheduler = VirtualTimeScheduler::with_clock(200);
    let log = collect(&observable::range(10, 3, &scheduler), &scheduler);
    scheduler.start().unwrap();
    assert_eq!(*log.borrow(), [(201, 10), (202, 11), (203, 12), (204, i64::MIN)]);
  }

  #[test]
  fn empty_range_only_completes() {
    let scheduler = VirtualTimeScheduler::with_clock(200);
    let log = collect(&observable::range(0, 0, &scheduler), &scheduler);
    scheduler.start().unwrap();
    assert_eq!(*log.borrow(), [(201, i64::MIN)]);
  }

  #[test]
  fn range_reaches_i64_max() {
    let scheduler = VirtualTimeScheduler::new();
    let log = collect(&observable::range(i64::MAX - 1, 2, &scheduler), &scheduler);
    scheduler.start().unwrap();
    assert_eq!(*log.borrow(), [(1, i64::MAX - 1), (2, i64::MAX), (3, i64::MIN)]);
  }

  #[test]
  fn range_past_i64_max_stops_at_max() {
    crate::init_test_logging();
    let scheduler = VirtualTimeScheduler::new();
    let log = collect(&observable::range(i64::MAX - 1, 5, &scheduler), &scheduler);
    scheduler.start().unwrap();
    assert_eq!(*log.borrow(), [(1, i64::MAX - 1), (2, i64::MAX), (3, i64::MIN)]);
  }

  #[test]
  fn dispose_halts_scheduling() {
    let scheduler = VirtualTimeScheduler::new();
    let log = Rc::new(RefCell::new(vec![]));
    let c_log = log.clone();
    let subscription = observable::from_array::<_, Fault, _>(vec![1, 2, 3, 4], &scheduler)
      .subscribe(move |v| c_log.borrow_mut().push(v));
    scheduler.advance_to(2).unwrap();
    subscription.unsubscribe();
    scheduler.start().unwrap();
    assert_eq!(*log.borrow(), [1, 2]);
    assert!(scheduler.is_empty());
  }
}
