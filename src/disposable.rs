//! Resource-lifetime primitives.
//!
//! Every [`Disposable`] is idempotent: the first `dispose` releases the
//! resource, later calls do nothing. All containers release their own borrow
//! before disposing a child, so a child may reach back into its owner while
//! it is being disposed.
use std::{
  fmt::{Debug, Formatter},
  rc::Rc,
};

mod boolean;
pub use boolean::*;
mod closure;
pub use closure::*;
mod composite;
pub use composite::*;
mod serial;
pub use serial::*;
mod single_assignment;
pub use single_assignment::*;

/// The right to release a resource or cancel pending work, exactly once.
pub trait Disposable {
  /// Releases the resource. Calling it again is a no-op.
  fn dispose(&self);

  fn is_disposed(&self) -> bool;
}

pub type BoxDisposable = Box<dyn Disposable>;

impl Debug for dyn Disposable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("dyn Disposable").field("is_disposed", &self.is_disposed()).finish()
  }
}

/// A disposable with nothing to release.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyDisposable;

impl Disposable for EmptyDisposable {
  #[inline]
  fn dispose(&self) {}

  #[inline]
  fn is_disposed(&self) -> bool { true }
}

impl<T: Disposable + ?Sized> Disposable for Box<T> {
  #[inline]
  fn dispose(&self) { (**self).dispose() }

  #[inline]
  fn is_disposed(&self) -> bool { (**self).is_disposed() }
}

impl<T: Disposable + ?Sized> Disposable for Rc<T> {
  #[inline]
  fn dispose(&self) { (**self).dispose() }

  #[inline]
  fn is_disposed(&self) -> bool { (**self).is_disposed() }
}

/// An RAII wrapper around a disposable. When this structure is dropped (falls
/// out of scope), the wrapped disposable is disposed.
///
/// If you want to drop it immediately, wrap it in its own scope
#[derive(Debug)]
#[must_use]
pub struct SubscriptionGuard<T: Disposable>(pub(crate) T);

impl<T: Disposable> SubscriptionGuard<T> {
  pub fn new(disposable: T) -> SubscriptionGuard<T> { SubscriptionGuard(disposable) }
}

impl<T: Disposable> Drop for SubscriptionGuard<T> {
  #[inline]
  fn drop(&mut self) { self.0.dispose() }
}
