//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

// Disposables
pub use crate::disposable::*;
// Errors
pub use crate::error::{DisposableError, Fault, SchedulerError};
// Core traits and creation operators
pub use crate::observable::{
  self, Create, CreateWithDisposable, Defer, Empty, FromIter, Generate, Never, Observable,
  ObservableExt, ReturnValue, Throw, TryDefer,
};
// Observer
pub use crate::observer::{BoxObserver, Ignore, Observer, ObserverAll};
// Operators
pub use crate::ops::{box_it::BoxObservable, repeat::Repeat, retry::Retry};
// Shared state
pub use crate::rc::{MutRc, RcDeref, RcDerefMut};
// Scheduler
pub use crate::scheduler::{Scheduler, VirtualTime, VirtualTimeScheduler, INFINITE, TICK};
// Subscription
pub use crate::subscriber::{Subscriber, Subscription};
// Test harness
pub use crate::test_scheduler::TestScheduler;
