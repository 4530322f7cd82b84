use std::{
  cell::RefCell,
  fmt::{Debug, Formatter},
  rc::Rc,
};

use super::{BoxDisposable, Disposable};

/// Holds at most one live inner disposable.
///
/// Assigning a new inner disposes the previous one. Once the serial itself is
/// disposed, every later assignment is disposed on the spot.
#[derive(Clone, Default)]
pub struct SerialDisposable(Rc<RefCell<SerialState>>);

#[derive(Default)]
struct SerialState {
  disposed: bool,
  current: Option<BoxDisposable>,
}

impl SerialDisposable {
  pub fn new() -> Self { Self::default() }

  /// Replaces the inner disposable, disposing the one it replaces.
  pub fn set(&self, next: impl Disposable + 'static) { self.set_boxed(Box::new(next)) }

  pub fn set_boxed(&self, next: BoxDisposable) {
    let retired = {
      let mut state = self.0.borrow_mut();
      if state.disposed { Err(next) } else { Ok(state.current.replace(next)) }
    };
    match retired {
      Ok(Some(previous)) => previous.dispose(),
      Ok(None) => {}
      Err(rejected) => rejected.dispose(),
    }
  }

  pub fn has_inner(&self) -> bool { self.0.borrow().current.is_some() }
}

impl Disposable for SerialDisposable {
  fn dispose(&self) {
    let current = {
      let mut state = self.0.borrow_mut();
      if state.disposed {
        return;
      }
      state.disposed = true;
      state.current.take()
    };
    if let Some(current) = current {
      current.dispose();
    }
  }

  #[inline]
  fn is_disposed(&self) -> bool { self.0.borrow().disposed }
}

impl Debug for SerialDisposable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let state = self.0.borrow();
    f.debug_struct("SerialDisposable")
      .field("disposed", &state.disposed)
      .field("has_inner", &state.current.is_some())
      .finish()
  }
}
