use std::{cell::Cell, rc::Rc};

use smallvec::SmallVec;
use tracing::debug;

use crate::{
  prelude::*,
  rc::{MutRc, RcDeref, RcDerefMut},
  test_scheduler::{Notification, Recorded, SubscriptionLog, TestScheduler},
};

/// A scripted source on an absolute timeline shared by all subscribers.
///
/// Every message is scheduled when the observable is created. A subscriber
/// only sees the messages due after it subscribed.
pub struct HotObservable<T, E>(Rc<HotInner<T, E>>);

struct HotInner<T, E> {
  scheduler: TestScheduler,
  observers: MutRc<SmallVec<[(usize, Subscriber<T, E>); 2]>>,
  next_id: Cell<usize>,
  subscriptions: MutRc<Vec<SubscriptionLog>>,
}

impl<T, E> HotObservable<T, E>
where
  T: Clone + 'static,
  E: Clone + 'static,
{
  pub(crate) fn new(scheduler: TestScheduler, messages: Vec<Recorded<Notification<T, E>>>) -> Self {
    let inner = Rc::new(HotInner {
      scheduler: scheduler.clone(),
      observers: MutRc::own(SmallVec::new()),
      next_id: Cell::new(0),
      subscriptions: MutRc::own(vec![]),
    });
    for Recorded { time, value } in messages {
      let observers = inner.observers.clone();
      scheduler.schedule_absolute(time, move || {
        // Observers may unsubscribe while the notification is delivered.
        let snapshot: SmallVec<[Subscriber<T, E>; 2]> =
          observers.rc_deref().iter().map(|(_, s)| s.clone()).collect();
        for mut subscriber in snapshot {
          value.clone().accept(&mut subscriber);
        }
      });
    }
    HotObservable(inner)
  }
}

impl<T, E> HotObservable<T, E> {
  pub fn subscriptions(&self) -> Vec<SubscriptionLog> { self.0.subscriptions.rc_deref().clone() }

  /// Number of subscribers currently attached.
  pub fn observer_count(&self) -> usize { self.0.observers.rc_deref().len() }
}

impl<T, E> Clone for HotObservable<T, E> {
  fn clone(&self) -> Self { HotObservable(self.0.clone()) }
}

impl<T, E> Observable for HotObservable<T, E>
where
  T: Clone + 'static,
  E: Clone + 'static,
{
  type Item = T;
  type Err = E;

  fn actual_subscribe(&self, subscriber: Subscriber<T, E>) -> BoxDisposable {
    let subscribed_at = self.0.scheduler.now();
    let id = self.0.next_id.get();
    self.0.next_id.set(id + 1);
    self.0.observers.rc_deref_mut().push((id, subscriber));
    let index = {
      let mut subscriptions = self.0.subscriptions.rc_deref_mut();
      subscriptions.push(SubscriptionLog { subscribe: subscribed_at, unsubscribe: INFINITE });
      subscriptions.len() - 1
    };
    debug!(index, subscribe = subscribed_at, "hot observable subscribed");

    let observers = self.0.observers.clone();
    let subscriptions = self.0.subscriptions.clone();
    let scheduler = self.0.scheduler.clone();
    Box::new(ClosureDisposable::new(move || {
      let removed = {
        let mut observers = observers.rc_deref_mut();
        let position = observers.iter().position(|(i, _)| *i == id);
        position.map(|pos| observers.remove(pos))
      };
      drop(removed);
      let unsubscribe = scheduler.now();
      if let Some(log) = subscriptions.rc_deref_mut().get_mut(index) {
        log.unsubscribe = unsubscribe;
      }
      debug!(index, unsubscribe, "hot observable unsubscribed");
    }))
  }
}
