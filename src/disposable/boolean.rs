use std::{cell::Cell, rc::Rc};

use super::Disposable;

/// A disposable that only records whether it has been disposed.
///
/// Clones share the same flag, which makes it the cancellation token of a
/// scheduled item: the scheduler keeps one clone, the caller the other.
#[derive(Clone, Debug, Default)]
pub struct BooleanDisposable(Rc<Cell<bool>>);

impl BooleanDisposable {
  pub fn new() -> Self { Self::default() }
}

impl Disposable for BooleanDisposable {
  #[inline]
  fn dispose(&self) { self.0.set(true) }

  #[inline]
  fn is_disposed(&self) -> bool { self.0.get() }
}
