use std::rc::Rc;

use super::resubscribe::{self, Trigger};
use crate::prelude::*;

/// Resubscribes to its source every time the source completes.
///
/// Created by [`ObservableExt::repeat`] and [`ObservableExt::repeat_count`].
/// An error from the source is forwarded at once and ends the loop.
pub struct Repeat<O, S> {
  source: Rc<O>,
  count: Option<usize>,
  scheduler: S,
}

impl<O, S: Scheduler> Repeat<O, S> {
  /// `count` is the total number of subscriptions, `None` for no limit.
  pub fn new(source: O, count: Option<usize>, scheduler: &S) -> Self {
    Repeat { source: Rc::new(source), count, scheduler: scheduler.clone() }
  }
}

impl<O, S: Clone> Clone for Repeat<O, S> {
  fn clone(&self) -> Self {
    Repeat { source: self.source.clone(), count: self.count, scheduler: self.scheduler.clone() }
  }
}

impl<O, S> Observable for Repeat<O, S>
where
  O: Observable + 'static,
  O::Item: 'static,
  O::Err: 'static,
  S: Scheduler,
{
  type Item = O::Item;
  type Err = O::Err;

  fn actual_subscribe(&self, subscriber: Subscriber<O::Item, O::Err>) -> BoxDisposable {
    resubscribe::run(
      self.source.clone(),
      self.scheduler.clone(),
      self.count,
      Trigger::Completion,
      subscriber,
    )
  }
}
