use crate::{observer::Observer, scheduler::VirtualTime};

/// One recorded or scripted notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification<T, E> {
  Next(T),
  Error(E),
  Completed,
}

impl<T, E> Notification<T, E> {
  /// Delivers this notification to `observer`.
  pub fn accept<O>(self, observer: &mut O)
  where
    O: Observer<T, E> + ?Sized,
  {
    match self {
      Notification::Next(value) => observer.next(value),
      Notification::Error(err) => observer.error(err),
      Notification::Completed => observer.complete(),
    }
  }

  #[inline]
  pub fn is_terminal(&self) -> bool { !matches!(self, Notification::Next(_)) }
}

/// A value stamped with the virtual time it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recorded<V> {
  pub time: VirtualTime,
  pub value: V,
}

impl<V> Recorded<V> {
  #[inline]
  pub fn new(time: VirtualTime, value: V) -> Self { Recorded { time, value } }
}

/// The window during which a synthetic source had one subscriber.
///
/// `unsubscribe` is [`INFINITE`](crate::scheduler::INFINITE) while the window
/// is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionLog {
  pub subscribe: VirtualTime,
  pub unsubscribe: VirtualTime,
}

pub fn on_next<T, E>(time: VirtualTime, value: T) -> Recorded<Notification<T, E>> {
  Recorded::new(time, Notification::Next(value))
}

pub fn on_error<T, E>(time: VirtualTime, err: E) -> Recorded<Notification<T, E>> {
  Recorded::new(time, Notification::Error(err))
}

pub fn on_completed<T, E>(time: VirtualTime) -> Recorded<Notification<T, E>> {
  Recorded::new(time, Notification::Completed)
}

pub fn subscription(subscribe: VirtualTime, unsubscribe: VirtualTime) -> SubscriptionLog {
  SubscriptionLog { subscribe, unsubscribe }
}
