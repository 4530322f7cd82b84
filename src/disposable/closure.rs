use std::{
  cell::RefCell,
  fmt::{Debug, Formatter},
  rc::Rc,
};

use super::Disposable;

/// Runs a teardown closure the first time it is disposed.
#[derive(Clone)]
pub struct ClosureDisposable(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl ClosureDisposable {
  pub fn new(teardown: impl FnOnce() + 'static) -> Self {
    ClosureDisposable(Rc::new(RefCell::new(Some(Box::new(teardown)))))
  }
}

impl Disposable for ClosureDisposable {
  fn dispose(&self) {
    // Taken out first so the teardown may dispose this very handle again.
    let teardown = self.0.borrow_mut().take();
    if let Some(teardown) = teardown {
      teardown();
    }
  }

  #[inline]
  fn is_disposed(&self) -> bool { self.0.borrow().is_none() }
}

impl Debug for ClosureDisposable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ClosureDisposable").field("is_disposed", &self.is_disposed()).finish()
  }
}
