//! The resubscription loop shared by `repeat` and `retry`.
//!
//! A loop owns one inner subscription at a time, tracked by a
//! [`SerialDisposable`]. When the inner source delivers the notification the
//! loop reacts to, the next subscription is scheduled on the current tick
//! rather than made from inside the callback, so unbounded loops never grow
//! the stack.
use std::rc::Rc;

use tracing::debug;

use crate::prelude::*;

/// The inner terminal notification that starts another round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Trigger {
  Completion,
  Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
  /// Waiting for a scheduled subscription.
  Idle,
  /// Inside the source's `actual_subscribe`.
  Subscribing,
  Active,
  Completed,
  Failed,
  /// The budget ran out.
  Exhausted,
  Disposed,
}

impl Phase {
  #[inline]
  fn is_finished(self) -> bool {
    matches!(self, Phase::Completed | Phase::Failed | Phase::Exhausted | Phase::Disposed)
  }
}

struct LoopState<O: Observable, S> {
  source: Rc<O>,
  scheduler: S,
  trigger: Trigger,
  phase: Phase,
  /// Subscriptions still allowed, `None` for unbounded.
  remaining: Option<usize>,
  attempt: usize,
  inner: SerialDisposable,
  pending: SerialDisposable,
  downstream: Option<Subscriber<O::Item, O::Err>>,
}

/// Starts a loop delivering to `downstream` and returns its handle.
pub(crate) fn run<O, S>(
  source: Rc<O>,
  scheduler: S,
  count: Option<usize>,
  trigger: Trigger,
  downstream: Subscriber<O::Item, O::Err>,
) -> BoxDisposable
where
  O: Observable + 'static,
  O::Item: 'static,
  O::Err: 'static,
  S: Scheduler,
{
  let state = MutRc::own(LoopState {
    source,
    scheduler,
    trigger,
    phase: Phase::Idle,
    remaining: count,
    attempt: 0,
    inner: SerialDisposable::new(),
    pending: SerialDisposable::new(),
    downstream: Some(downstream),
  });
  subscribe_round(&state);
  Box::new(LoopHandle(state))
}

fn subscribe_round<O, S>(state: &MutRc<LoopState<O, S>>)
where
  O: Observable + 'static,
  O::Item: 'static,
  O::Err: 'static,
  S: Scheduler,
{
  let (source, inner) = {
    let mut s = state.rc_deref_mut();
    if s.phase.is_finished() {
      return;
    }
    if s.remaining == Some(0) {
      s.phase = Phase::Exhausted;
      let downstream = s.downstream.take();
      drop(s);
      if let Some(mut downstream) = downstream {
        downstream.complete();
      }
      return;
    }
    s.remaining = s.remaining.map(|n| n - 1);
    s.attempt += 1;
    s.phase = Phase::Subscribing;
    debug!(
      attempt = s.attempt,
      now = s.scheduler.now(),
      trigger = ?s.trigger,
      "subscribing source"
    );
    (s.source.clone(), s.inner.clone())
  };

  let subscriber = Subscriber::new(LoopObserver(state.clone()));
  inner.set(subscriber.clone());
  let upstream = source.actual_subscribe(subscriber.clone());
  subscriber.set_upstream(upstream);

  let mut s = state.rc_deref_mut();
  if s.phase == Phase::Subscribing {
    s.phase = Phase::Active;
  }
}

/// Schedules the next round, or finishes when the budget is spent.
fn next_round<O, S>(state: &MutRc<LoopState<O, S>>, last_error: Option<O::Err>)
where
  O: Observable + 'static,
  O::Item: 'static,
  O::Err: 'static,
  S: Scheduler,
{
  let mut s = state.rc_deref_mut();
  if s.phase.is_finished() {
    return;
  }
  if s.remaining == Some(0) {
    s.phase = Phase::Exhausted;
    let downstream = s.downstream.take();
    drop(s);
    if let Some(mut downstream) = downstream {
      match last_error {
        Some(err) => downstream.error(err),
        None => downstream.complete(),
      }
    }
    return;
  }
  s.phase = Phase::Idle;
  let pending = s.pending.clone();
  let scheduler = s.scheduler.clone();
  drop(s);

  let c_state = state.clone();
  pending.set(scheduler.schedule(move || subscribe_round(&c_state)));
}

/// Forwards the inner notification downstream and ends the loop.
fn finish<O, S>(state: &MutRc<LoopState<O, S>>, phase: Phase, err: Option<O::Err>)
where
  O: Observable,
{
  let downstream = {
    let mut s = state.rc_deref_mut();
    if s.phase.is_finished() {
      return;
    }
    s.phase = phase;
    s.downstream.take()
  };
  if let Some(mut downstream) = downstream {
    match err {
      Some(err) => downstream.error(err),
      None => downstream.complete(),
    }
  }
}

struct LoopObserver<O: Observable, S>(MutRc<LoopState<O, S>>);

impl<O, S> Observer<O::Item, O::Err> for LoopObserver<O, S>
where
  O: Observable + 'static,
  O::Item: 'static,
  O::Err: 'static,
  S: Scheduler,
{
  fn next(&mut self, value: O::Item) {
    let downstream = self.0.rc_deref().downstream.clone();
    if let Some(mut downstream) = downstream {
      downstream.next(value);
    }
  }

  fn error(&mut self, err: O::Err) {
    let trigger = self.0.rc_deref().trigger;
    match trigger {
      Trigger::Error => next_round(&self.0, Some(err)),
      Trigger::Completion => finish(&self.0, Phase::Failed, Some(err)),
    }
  }

  fn complete(&mut self) {
    let trigger = self.0.rc_deref().trigger;
    match trigger {
      Trigger::Completion => next_round(&self.0, None),
      Trigger::Error => finish(&self.0, Phase::Completed, None),
    }
  }
}

struct LoopHandle<O: Observable, S>(MutRc<LoopState<O, S>>);

impl<O: Observable, S> Disposable for LoopHandle<O, S> {
  fn dispose(&self) {
    let (inner, pending, downstream) = {
      let mut s = self.0.rc_deref_mut();
      if s.phase == Phase::Disposed {
        return;
      }
      if !s.phase.is_finished() {
        s.phase = Phase::Disposed;
      }
      (s.inner.clone(), s.pending.clone(), s.downstream.take())
    };
    inner.dispose();
    pending.dispose();
    drop(downstream);
  }

  fn is_disposed(&self) -> bool { self.0.rc_deref().phase.is_finished() }
}
