use std::rc::Rc;

use tracing::debug;

use crate::{
  prelude::*,
  rc::{MutRc, RcDeref, RcDerefMut},
  test_scheduler::{Notification, Recorded, SubscriptionLog, TestScheduler},
};

/// A scripted source whose timeline restarts with every subscription.
///
/// Message times are offsets from the subscription time.
pub struct ColdObservable<T, E>(Rc<ColdInner<T, E>>);

struct ColdInner<T, E> {
  scheduler: TestScheduler,
  messages: Vec<Recorded<Notification<T, E>>>,
  subscriptions: MutRc<Vec<SubscriptionLog>>,
}

impl<T, E> ColdObservable<T, E> {
  pub(crate) fn new(scheduler: TestScheduler, messages: Vec<Recorded<Notification<T, E>>>) -> Self {
    ColdObservable(Rc::new(ColdInner { scheduler, messages, subscriptions: MutRc::own(vec![]) }))
  }

  /// Every subscription window so far, in subscription order.
  pub fn subscriptions(&self) -> Vec<SubscriptionLog> { self.0.subscriptions.rc_deref().clone() }
}

impl<T, E> Clone for ColdObservable<T, E> {
  fn clone(&self) -> Self { ColdObservable(self.0.clone()) }
}

impl<T, E> Observable for ColdObservable<T, E>
where
  T: Clone + 'static,
  E: Clone + 'static,
{
  type Item = T;
  type Err = E;

  fn actual_subscribe(&self, subscriber: Subscriber<T, E>) -> BoxDisposable {
    let scheduler = &self.0.scheduler;
    let subscribed_at = scheduler.now();
    let index = {
      let mut subscriptions = self.0.subscriptions.rc_deref_mut();
      subscriptions.push(SubscriptionLog { subscribe: subscribed_at, unsubscribe: INFINITE });
      subscriptions.len() - 1
    };
    debug!(index, subscribe = subscribed_at, "cold observable subscribed");

    let handles = CompositeDisposable::new();
    for message in &self.0.messages {
      let notification = message.value.clone();
      let mut subscriber = subscriber.clone();
      let handle =
        scheduler.schedule_relative(message.time, move || notification.accept(&mut subscriber));
      handles.add(handle);
    }

    let subscriptions = self.0.subscriptions.clone();
    let c_scheduler = scheduler.clone();
    handles.add(ClosureDisposable::new(move || {
      let unsubscribe = c_scheduler.now();
      if let Some(log) = subscriptions.rc_deref_mut().get_mut(index) {
        log.unsubscribe = unsubscribe;
      }
      debug!(index, unsubscribe, "cold observable unsubscribed");
    }));
    Box::new(handles)
  }
}
