use std::rc::Rc;

use super::resubscribe::{self, Trigger};
use crate::prelude::*;

/// Resubscribes to its source every time the source fails.
///
/// Created by [`ObservableExt::retry`] and [`ObservableExt::retry_count`].
/// Completion of the source is forwarded at once and ends the loop. When the
/// budget runs out, the error of the last attempt is forwarded.
pub struct Retry<O, S> {
  source: Rc<O>,
  count: Option<usize>,
  scheduler: S,
}

impl<O, S: Scheduler> Retry<O, S> {
  /// `count` is the total number of subscriptions, `None` for no limit.
  pub fn new(source: O, count: Option<usize>, scheduler: &S) -> Self {
    Retry { source: Rc::new(source), count, scheduler: scheduler.clone() }
  }
}

impl<O, S: Clone> Clone for Retry<O, S> {
  fn clone(&self) -> Self {
    Retry { source: self.source.clone(), count: self.count, scheduler: self.scheduler.clone() }
  }
}

impl<O, S> Observable for Retry<O, S>
where
  O: Observable + 'static,
  O::Item: 'static,
  O::Err: 'static,
  S: Scheduler,
{
  type Item = O::Item;
  type Err = O::Err;

  fn actual_subscribe(&self, subscriber: Subscriber<O::Item, O::Err>) -> BoxDisposable {
    let (source, scheduler) = (self.source.clone(), self.scheduler.clone());
    resubscribe::run(source, scheduler, self.count, Trigger::Error, subscriber)
  }
}
