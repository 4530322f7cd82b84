use std::{marker::PhantomData, rc::Rc};

use crate::prelude::*;

/// Creates an observable by running a state machine, one step per tick.
///
/// Each step checks `condition`; when it holds, the step emits
/// `selector(&state)` and advances the state with `iterate`, otherwise it
/// completes. The first step runs one tick after the subscription.
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use rxrust_vt::prelude::*;
///
/// let scheduler = VirtualTimeScheduler::new();
/// let seen = Rc::new(RefCell::new(vec![]));
/// let c_seen = seen.clone();
/// let powers = observable::generate::<_, _, Fault, _>(
///   1,
///   |x| *x < 100,
///   |x| x * 3,
///   |x| x.to_string(),
///   &scheduler,
/// );
/// powers.subscribe(move |v| c_seen.borrow_mut().push(v));
///
/// scheduler.start().unwrap();
/// assert_eq!(*seen.borrow(), ["1", "3", "9", "27", "81"]);
/// ```
pub fn generate<St, Item, Err, S>(
  initial: St,
  condition: impl Fn(&St) -> bool + 'static,
  iterate: impl Fn(St) -> St + 'static,
  selector: impl Fn(&St) -> Item + 'static,
  scheduler: &S,
) -> Generate<St, Item, Err, S>
where
  S: Scheduler,
{
  try_generate(
    initial,
    move |st| Ok(condition(st)),
    move |st| Ok(iterate(st)),
    move |st| Ok(selector(st)),
    scheduler,
  )
}

/// Like [`generate`], with fallible callbacks.
///
/// A callback returning `Err` ends the sequence with that error, delivered on
/// the tick of the failing step. Values emitted earlier in the step stay
/// delivered.
pub fn try_generate<St, Item, Err, S>(
  initial: St,
  condition: impl Fn(&St) -> Result<bool, Err> + 'static,
  iterate: impl Fn(St) -> Result<St, Err> + 'static,
  selector: impl Fn(&St) -> Result<Item, Err> + 'static,
  scheduler: &S,
) -> Generate<St, Item, Err, S>
where
  S: Scheduler,
{
  Generate {
    initial,
    steps: Rc::new(GenerateSteps {
      condition: Box::new(condition),
      iterate: Box::new(iterate),
      selector: Box::new(selector),
    }),
    scheduler: scheduler.clone(),
    _marker: PhantomData,
  }
}

struct GenerateSteps<St, Item, Err> {
  condition: Box<dyn Fn(&St) -> Result<bool, Err>>,
  iterate: Box<dyn Fn(St) -> Result<St, Err>>,
  selector: Box<dyn Fn(&St) -> Result<Item, Err>>,
}

impl<St, Item, Err> GenerateSteps<St, Item, Err> {
  /// Runs one step and returns the state of the next one, if any.
  fn step(&self, state: St, subscriber: &mut Subscriber<Item, Err>) -> Option<St> {
    let proceed = match (self.condition)(&state) {
      Ok(proceed) => proceed,
      Err(err) => {
        subscriber.error(err);
        return None;
      }
    };
    if !proceed {
      subscriber.complete();
      return None;
    }
    match (self.selector)(&state) {
      Ok(value) => subscriber.next(value),
      Err(err) => {
        subscriber.error(err);
        return None;
      }
    }
    if subscriber.is_stopped() {
      return None;
    }
    match (self.iterate)(state) {
      Ok(next) => Some(next),
      Err(err) => {
        subscriber.error(err);
        None
      }
    }
  }
}

pub struct Generate<St, Item, Err, S> {
  initial: St,
  steps: Rc<GenerateSteps<St, Item, Err>>,
  scheduler: S,
  _marker: PhantomData<fn() -> (Item, Err)>,
}

impl<St: Clone, Item, Err, S: Clone> Clone for Generate<St, Item, Err, S> {
  fn clone(&self) -> Self {
    Generate {
      initial: self.initial.clone(),
      steps: self.steps.clone(),
      scheduler: self.scheduler.clone(),
      _marker: PhantomData,
    }
  }
}

impl<St, Item, Err, S> Observable for Generate<St, Item, Err, S>
where
  St: Clone + 'static,
  Item: 'static,
  Err: 'static,
  S: Scheduler,
{
  type Item = Item;
  type Err = Err;

  fn actual_subscribe(&self, mut subscriber: Subscriber<Item, Err>) -> BoxDisposable {
    let steps = self.steps.clone();
    let initial = self.initial.clone();
    let handle = self
      .scheduler
      .schedule_recursive(TICK, initial, move |state| steps.step(state, &mut subscriber));
    Box::new(handle)
  }
}
