//! # rxrust-vt: Reactive Extensions on a virtual clock
//!
//! A single-threaded implementation of the Reactive Extensions core where
//! every timed behavior runs on a [`VirtualTimeScheduler`]. Virtual time only
//! moves when the scheduler is driven, so every run is deterministic and can
//! be asserted tick for tick.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxrust_vt::{prelude::*, test_scheduler::*};
//!
//! let scheduler = TestScheduler::new();
//! let c_scheduler = scheduler.clone();
//! let results = scheduler
//!   .start_with_create(move || {
//!     observable::range::<Fault, _>(10, 3, &c_scheduler).repeat_count(2, &c_scheduler)
//!   })
//!   .unwrap();
//!
//! let expected: Vec<_> = vec![
//!   on_next(201, 10),
//!   on_next(202, 11),
//!   on_next(203, 12),
//!   on_next(205, 10),
//!   on_next(206, 11),
//!   on_next(207, 12),
//!   on_completed(208),
//! ];
//! assert_eq!(results.messages(), expected);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | A reusable description of a push-based sequence |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`Subscriber`] | The auto-detaching observer every source emits through |
//! | [`Disposable`] | The right to cancel a subscription or a scheduled action |
//! | [`VirtualTimeScheduler`] | Orders and runs time-stamped work on a virtual clock |
//! | [`TestScheduler`] | Scripts cold and hot sources and records what observers see |
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Subscriber`]: subscriber::Subscriber
//! [`Disposable`]: disposable::Disposable
//! [`VirtualTimeScheduler`]: scheduler::VirtualTimeScheduler
//! [`TestScheduler`]: test_scheduler::TestScheduler
pub mod disposable;
pub mod error;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod rc;
pub mod scheduler;
pub mod subscriber;
pub mod test_scheduler;

// Re-export the prelude module
pub use prelude::*;

#[cfg(test)]
pub(crate) fn init_test_logging() {
  use std::sync::Once;

  static INIT: Once = Once::new();
  INIT.call_once(|| {
    let _ = tracing_subscriber::fmt()
      .with_max_level(tracing::Level::TRACE)
      .with_test_writer()
      .try_init();
  });
}
