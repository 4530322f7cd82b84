use std::{
  cell::Cell,
  fmt::{Debug, Formatter},
  rc::Rc,
};

use once_cell::unsync::OnceCell;

use super::{BoxDisposable, Disposable};
use crate::error::DisposableError;

/// A slot that accepts exactly one inner disposable.
///
/// Disposing before the assignment is allowed; the inner disposable is then
/// disposed as soon as it arrives.
#[derive(Clone, Default)]
pub struct SingleAssignmentDisposable(Rc<SingleAssignmentState>);

#[derive(Default)]
struct SingleAssignmentState {
  disposed: Cell<bool>,
  inner: OnceCell<BoxDisposable>,
}

impl SingleAssignmentDisposable {
  pub fn new() -> Self { Self::default() }

  /// Assigns the inner disposable.
  ///
  /// A second assignment is rejected: the rejected disposable is disposed and
  /// [`DisposableError::AlreadyAssigned`] is returned.
  pub fn set(&self, inner: impl Disposable + 'static) -> Result<(), DisposableError> {
    self.set_boxed(Box::new(inner))
  }

  pub fn set_boxed(&self, inner: BoxDisposable) -> Result<(), DisposableError> {
    if let Err(rejected) = self.0.inner.set(inner) {
      rejected.dispose();
      return Err(DisposableError::AlreadyAssigned);
    }
    if self.0.disposed.get() {
      if let Some(inner) = self.0.inner.get() {
        inner.dispose();
      }
    }
    Ok(())
  }

  pub fn is_assigned(&self) -> bool { self.0.inner.get().is_some() }
}

impl Disposable for SingleAssignmentDisposable {
  fn dispose(&self) {
    if self.0.disposed.replace(true) {
      return;
    }
    if let Some(inner) = self.0.inner.get() {
      inner.dispose();
    }
  }

  #[inline]
  fn is_disposed(&self) -> bool { self.0.disposed.get() }
}

impl Debug for SingleAssignmentDisposable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SingleAssignmentDisposable")
      .field("disposed", &self.0.disposed.get())
      .field("assigned", &self.is_assigned())
      .finish()
  }
}
