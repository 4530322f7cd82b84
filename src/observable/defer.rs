use crate::prelude::*;

/// Creates an observable that will on subscription defer to another observable
/// that is supplied by a supplier-function which will be run once at each
/// subscription
///
/// ```rust
/// # use rxrust_vt::prelude::*;
/// let scheduler = VirtualTimeScheduler::new();
/// let c_scheduler = scheduler.clone();
/// let source = observable::defer(move || {
///   println!("Hi!");
///   observable::return_value::<_, Fault, _>("Hello!", &c_scheduler)
/// });
/// source.subscribe(move |v| println!("{}", v));
/// scheduler.start().unwrap();
/// // Prints: Hi!\nHello!\n
/// ```
pub fn defer<F, O>(factory: F) -> Defer<F>
where
  F: Fn() -> O,
  O: Observable,
{
  Defer(factory)
}

/// Like [`defer`], but the factory may fail. A failed factory becomes an error
/// notification delivered during `subscribe`.
pub fn try_defer<F, O>(factory: F) -> TryDefer<F>
where
  F: Fn() -> Result<O, O::Err>,
  O: Observable,
{
  TryDefer(factory)
}

#[derive(Clone)]
pub struct Defer<F>(F);

impl<F, O> Observable for Defer<F>
where
  F: Fn() -> O,
  O: Observable,
{
  type Item = O::Item;
  type Err = O::Err;

  #[inline]
  fn actual_subscribe(&self, subscriber: Subscriber<O::Item, O::Err>) -> BoxDisposable {
    (self.0)().actual_subscribe(subscriber)
  }
}

#[derive(Clone)]
pub struct TryDefer<F>(F);

impl<F, O> Observable for TryDefer<F>
where
  F: Fn() -> Result<O, O::Err>,
  O: Observable,
{
  type Item = O::Item;
  type Err = O::Err;

  fn actual_subscribe(&self, mut subscriber: Subscriber<O::Item, O::Err>) -> BoxDisposable {
    match (self.0)() {
      Ok(source) => source.actual_subscribe(subscriber),
      Err(err) => {
        subscriber.error(err);
        Box::new(EmptyDisposable)
      }
    }
  }
}
