use std::{
  cell::RefCell,
  fmt::{Debug, Formatter},
  mem,
  rc::Rc,
};

use smallvec::SmallVec;

use super::{BoxDisposable, Disposable};

/// Owns a group of disposables and disposes all of them together.
#[derive(Clone, Default)]
pub struct CompositeDisposable(Rc<RefCell<CompositeState>>);

#[derive(Default)]
struct CompositeState {
  disposed: bool,
  teardown: SmallVec<[BoxDisposable; 2]>,
}

impl CompositeDisposable {
  pub fn new() -> Self { Self::default() }

  /// Adds a member. Members added after the composite was disposed are
  /// disposed immediately.
  pub fn add(&self, disposable: impl Disposable + 'static) {
    let rejected = {
      let mut state = self.0.borrow_mut();
      if state.disposed {
        Some(disposable)
      } else {
        state.teardown.retain(|d| !d.is_disposed());
        state.teardown.push(Box::new(disposable));
        None
      }
    };
    if let Some(rejected) = rejected {
      rejected.dispose();
    }
  }

  /// Number of members still held.
  pub fn len(&self) -> usize { self.0.borrow().teardown.len() }

  pub fn is_empty(&self) -> bool { self.0.borrow().teardown.is_empty() }
}

impl Disposable for CompositeDisposable {
  fn dispose(&self) {
    let teardown = {
      let mut state = self.0.borrow_mut();
      if state.disposed {
        return;
      }
      state.disposed = true;
      mem::take(&mut state.teardown)
    };
    for d in teardown {
      d.dispose();
    }
  }

  #[inline]
  fn is_disposed(&self) -> bool { self.0.borrow().disposed }
}

impl Debug for CompositeDisposable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let state = self.0.borrow();
    f.debug_struct("CompositeDisposable")
      .field("disposed", &state.disposed)
      .field("teardown_count", &state.teardown.len())
      .finish()
  }
}
