use std::{
  cell::{Cell, RefCell},
  rc::Rc,
  sync::Once,
};

use rxrust_vt::{prelude::*, test_scheduler::*};

fn init_logging() {
  static INIT: Once = Once::new();
  INIT.call_once(|| {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
  });
}

fn ex() -> Fault { Fault::new("ex") }

fn harness() -> TestScheduler {
  init_logging();
  TestScheduler::new()
}

// ==================== return_value / empty / never / throw ====================

#[test]
fn return_basic() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_create(move || observable::return_value::<_, Fault, _>(42, &c_scheduler))
    .unwrap();
  assert_eq!(results.messages(), [on_next(201, 42), on_completed(201)]);
}

#[test]
fn return_disposed() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_dispose(move || observable::return_value::<_, Fault, _>(42, &c_scheduler), 200)
    .unwrap();
  assert!(results.messages().is_empty());
}

#[test]
fn return_disposed_after_next() {
  let scheduler = harness();
  let handle = SerialDisposable::new();
  let xs = observable::return_value::<i32, Fault, _>(42, &scheduler);
  let results: MockObserver<i32, Fault> = scheduler.create_observer();

  let (c_handle, c_results) = (handle.clone(), results.clone());
  scheduler.schedule_absolute(100, move || {
    let (d, mut r1, mut r2, mut r3) =
      (c_handle.clone(), c_results.clone(), c_results.clone(), c_results.clone());
    let subscription = xs.subscribe_all(
      move |x| {
        d.dispose();
        r1.next(x);
      },
      move |e| r2.error(e),
      move || r3.complete(),
    );
    c_handle.set(subscription);
  });
  scheduler.start().unwrap();

  assert_eq!(results.messages(), [on_next(101, 42)]);
}

#[test]
#[should_panic(expected = "observer failed")]
fn return_observer_panics_out_of_the_drain() {
  let scheduler = harness();
  observable::return_value::<_, Fault, _>(1, &scheduler)
    .subscribe(|_| panic!("observer failed"));
  let _ = scheduler.start();
}

#[test]
fn never_basic() {
  let scheduler = harness();
  let results: MockObserver<i32, Fault> = scheduler.create_observer();
  observable::never().subscribe_with(results.clone());
  scheduler.start().unwrap();
  assert!(results.messages().is_empty());
}

#[test]
fn throw_exception_basic() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_create(move || observable::throw_exception::<i32, _, _>(ex(), &c_scheduler))
    .unwrap();
  assert_eq!(results.messages(), [on_error(201, ex())]);
}

#[test]
fn throw_disposed() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_dispose(
      move || observable::throw_exception::<i32, _, _>(ex(), &c_scheduler),
      200,
    )
    .unwrap();
  assert!(results.messages().is_empty());
}

#[test]
#[should_panic(expected = "observer failed")]
fn throw_observer_panics_out_of_the_drain() {
  let scheduler = harness();
  observable::throw_exception::<i32, _, _>(ex(), &scheduler)
    .subscribe_err(|_| {}, |_| panic!("observer failed"));
  let _ = scheduler.start();
}

#[test]
fn empty_basic() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_create(move || observable::empty::<i32, Fault, _>(&c_scheduler))
    .unwrap();
  assert_eq!(results.messages(), [on_completed(201)]);
}

#[test]
fn empty_disposed() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_dispose(move || observable::empty::<i32, Fault, _>(&c_scheduler), 200)
    .unwrap();
  assert!(results.messages().is_empty());
}

#[test]
#[should_panic(expected = "observer failed")]
fn empty_observer_panics_out_of_the_drain() {
  let scheduler = harness();
  observable::empty::<i32, Fault, _>(&scheduler)
    .subscribe_complete(|_| {}, || panic!("observer failed"));
  let _ = scheduler.start();
}

// ==================== from_array / generate ====================

#[test]
fn from_array_finite() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_create(move || {
      observable::from_array::<_, Fault, _>(vec![1, 2, 3, 4, 5], &c_scheduler)
    })
    .unwrap();
  assert_eq!(
    results.messages(),
    [
      on_next(201, 1),
      on_next(202, 2),
      on_next(203, 3),
      on_next(204, 4),
      on_next(205, 5),
      on_completed(206)
    ]
  );
}

#[test]
fn generate_finite() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_create(move || {
      observable::generate::<_, _, Fault, _>(0, |x| *x <= 3, |x| x + 1, |x| *x, &c_scheduler)
    })
    .unwrap();
  assert_eq!(
    results.messages(),
    [on_next(201, 0), on_next(202, 1), on_next(203, 2), on_next(204, 3), on_completed(205)]
  );
}

#[test]
fn generate_failing_condition() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_create(move || {
      observable::try_generate(0, |_| Err(ex()), |x: i32| Ok(x + 1), |x| Ok(*x), &c_scheduler)
    })
    .unwrap();
  assert_eq!(results.messages(), [on_error(201, ex())]);
}

#[test]
fn generate_failing_selector() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_create(move || {
      observable::try_generate(
        0,
        |_| Ok(true),
        |x: i32| Ok(x + 1),
        |_| Err::<i32, _>(ex()),
        &c_scheduler,
      )
    })
    .unwrap();
  assert_eq!(results.messages(), [on_error(201, ex())]);
}

#[test]
fn generate_failing_iterate() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_create(move || {
      observable::try_generate(0, |_| Ok(true), |_: i32| Err(ex()), |x| Ok(*x), &c_scheduler)
    })
    .unwrap();
  assert_eq!(results.messages(), [on_next(201, 0), on_error(201, ex())]);
}

#[test]
fn generate_dispose() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_dispose(
      move || observable::generate::<_, _, Fault, _>(0, |_| true, |x| x + 1, |x| *x, &c_scheduler),
      203,
    )
    .unwrap();
  assert_eq!(results.messages(), [on_next(201, 0), on_next(202, 1)]);
}

// ==================== defer ====================

#[test]
fn defer_error() {
  let scheduler = harness();
  let invoked = Rc::new(Cell::new(0));
  let xs: Rc<RefCell<Option<ColdObservable<u64, Fault>>>> = Rc::default();

  let (c_scheduler, c_invoked, c_xs) = (scheduler.clone(), invoked.clone(), xs.clone());
  let results = scheduler
    .start_with_create(move || {
      observable::defer(move || {
        c_invoked.set(c_invoked.get() + 1);
        let cold = c_scheduler
          .create_cold_observable(vec![on_next(100, c_scheduler.now()), on_error(200, ex())]);
        *c_xs.borrow_mut() = Some(cold.clone());
        cold
      })
    })
    .unwrap();

  assert_eq!(results.messages(), [on_next(300, 200), on_error(400, ex())]);
  assert_eq!(invoked.get(), 1);
  let subscriptions = xs.borrow().as_ref().map(ColdObservable::subscriptions);
  assert_eq!(subscriptions, Some(vec![subscription(200, 400)]));
}

#[test]
fn defer_dispose() {
  let scheduler = harness();
  let invoked = Rc::new(Cell::new(0u64));
  let xs: Rc<RefCell<Option<ColdObservable<u64, Fault>>>> = Rc::default();

  let (c_scheduler, c_invoked, c_xs) = (scheduler.clone(), invoked.clone(), xs.clone());
  let results = scheduler
    .start_with_create(move || {
      observable::defer(move || {
        c_invoked.set(c_invoked.get() + 1);
        let cold = c_scheduler.create_cold_observable(vec![
          on_next(100, c_scheduler.now()),
          on_next(200, c_invoked.get()),
          on_next(1100, 1000),
        ]);
        *c_xs.borrow_mut() = Some(cold.clone());
        cold
      })
    })
    .unwrap();

  assert_eq!(results.messages(), [on_next(300, 200), on_next(400, 1)]);
  assert_eq!(invoked.get(), 1);
  let subscriptions = xs.borrow().as_ref().map(ColdObservable::subscriptions);
  assert_eq!(subscriptions, Some(vec![subscription(200, 1000)]));
}

#[test]
fn defer_factory_failure() {
  let scheduler = harness();
  let invoked = Rc::new(Cell::new(0));
  let c_invoked = invoked.clone();
  let results = scheduler
    .start_with_create(move || {
      observable::try_defer(move || {
        c_invoked.set(c_invoked.get() + 1);
        Err::<Never<i32, Fault>, _>(ex())
      })
    })
    .unwrap();
  assert_eq!(results.messages(), [on_error(200, ex())]);
  assert_eq!(invoked.get(), 1);
}

// ==================== create / create_with_disposable ====================

#[test]
fn create_next() {
  let scheduler = harness();
  let results = scheduler
    .start_with_create(|| {
      observable::create(|mut o: Subscriber<i32, Fault>| {
        o.next(1);
        o.next(2);
        || {}
      })
    })
    .unwrap();
  assert_eq!(results.messages(), [on_next(200, 1), on_next(200, 2)]);
}

#[test]
fn create_completed() {
  let scheduler = harness();
  let results = scheduler
    .start_with_create(|| {
      observable::create(|mut o: Subscriber<i32, Fault>| {
        o.complete();
        o.next(100);
        o.error(ex());
        o.complete();
        || {}
      })
    })
    .unwrap();
  assert_eq!(results.messages(), [on_completed(200)]);
}

#[test]
fn create_error() {
  let scheduler = harness();
  let results = scheduler
    .start_with_create(|| {
      observable::create(|mut o: Subscriber<i32, Fault>| {
        o.error(ex());
        o.next(100);
        o.error(Fault::new("foo"));
        o.complete();
        || {}
      })
    })
    .unwrap();
  assert_eq!(results.messages(), [on_error(200, ex())]);
}

#[test]
#[should_panic(expected = "body failed")]
fn create_body_panic_escapes_subscribe() {
  observable::create(|_: Subscriber<i32, Fault>| -> fn() { panic!("body failed") })
    .subscribe(|_| {});
}

#[test]
#[should_panic(expected = "observer failed")]
fn create_observer_panic_escapes_subscribe() {
  observable::create(|mut o: Subscriber<i32, Fault>| {
    o.next(1);
    || {}
  })
  .subscribe(|_| panic!("observer failed"));
}

#[test]
fn create_with_disposable_next() {
  let scheduler = harness();
  let results = scheduler
    .start_with_create(|| {
      observable::create_with_disposable(|mut o: Subscriber<i32, Fault>| {
        o.next(1);
        o.next(2);
        EmptyDisposable
      })
    })
    .unwrap();
  assert_eq!(results.messages(), [on_next(200, 1), on_next(200, 2)]);
}

#[test]
fn create_with_disposable_completed() {
  let scheduler = harness();
  let results = scheduler
    .start_with_create(|| {
      observable::create_with_disposable(|mut o: Subscriber<i32, Fault>| {
        o.complete();
        o.next(100);
        o.error(ex());
        o.complete();
        EmptyDisposable
      })
    })
    .unwrap();
  assert_eq!(results.messages(), [on_completed(200)]);
}

#[test]
fn create_with_disposable_error() {
  let scheduler = harness();
  let results = scheduler
    .start_with_create(|| {
      observable::create_with_disposable(|mut o: Subscriber<i32, Fault>| {
        o.error(ex());
        o.next(100);
        o.error(Fault::new("foo"));
        o.complete();
        EmptyDisposable
      })
    })
    .unwrap();
  assert_eq!(results.messages(), [on_error(200, ex())]);
}

#[test]
fn create_with_disposable_released_on_dispose() {
  let scheduler = harness();
  let upstream = BooleanDisposable::new();
  let c_upstream = upstream.clone();
  let results: MockObserver<i32, Fault> = scheduler
    .start_with_dispose(
      move || {
        observable::create_with_disposable(move |_: Subscriber<i32, Fault>| c_upstream.clone())
      },
      300,
    )
    .unwrap();
  assert!(results.is_empty());
  assert!(upstream.is_disposed());
}

// ==================== range ====================

#[test]
fn range_zero() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results =
    scheduler.start_with_create(move || observable::range::<Fault, _>(0, 0, &c_scheduler)).unwrap();
  assert_eq!(results.messages(), [on_completed(201)]);
}

#[test]
fn range_one() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results =
    scheduler.start_with_create(move || observable::range::<Fault, _>(0, 1, &c_scheduler)).unwrap();
  assert_eq!(results.messages(), [on_next(201, 0), on_completed(202)]);
}

#[test]
fn range_five() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_create(move || observable::range::<Fault, _>(10, 5, &c_scheduler))
    .unwrap();
  assert_eq!(
    results.messages(),
    [
      on_next(201, 10),
      on_next(202, 11),
      on_next(203, 12),
      on_next(204, 13),
      on_next(205, 14),
      on_completed(206)
    ]
  );
}

#[test]
fn range_dispose() {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  let results = scheduler
    .start_with_dispose(move || observable::range::<Fault, _>(-10, 5, &c_scheduler), 204)
    .unwrap();
  assert_eq!(results.messages(), [on_next(201, -10), on_next(202, -9), on_next(203, -8)]);
}

// ==================== repeat ====================

fn cold_123(
  scheduler: &TestScheduler,
  end: Option<Notification<i32, Fault>>,
) -> ColdObservable<i32, Fault> {
  let mut messages = vec![on_next(100, 1), on_next(150, 2), on_next(200, 3)];
  messages.extend(end.map(|value| Recorded::new(250, value)));
  scheduler.create_cold_observable(messages)
}

fn short_cold(
  scheduler: &TestScheduler,
  end: Notification<i32, Fault>,
) -> ColdObservable<i32, Fault> {
  scheduler.create_cold_observable(vec![
    on_next(5, 1),
    on_next(10, 2),
    on_next(15, 3),
    Recorded::new(20, end),
  ])
}

#[test]
fn repeat_observable_basic() {
  let scheduler = harness();
  let xs = cold_123(&scheduler, Some(Notification::Completed));
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results = scheduler.start_with_create(move || c_xs.repeat(&c_scheduler)).unwrap();

  assert_eq!(
    results.messages(),
    [
      on_next(300, 1),
      on_next(350, 2),
      on_next(400, 3),
      on_next(550, 1),
      on_next(600, 2),
      on_next(650, 3),
      on_next(800, 1),
      on_next(850, 2),
      on_next(900, 3)
    ]
  );
  assert_eq!(
    xs.subscriptions(),
    [
      subscription(200, 450),
      subscription(450, 700),
      subscription(700, 950),
      subscription(950, 1000)
    ]
  );
}

#[test]
fn repeat_observable_infinite() {
  let scheduler = harness();
  let xs = cold_123(&scheduler, None);
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results = scheduler.start_with_create(move || c_xs.repeat(&c_scheduler)).unwrap();

  assert_eq!(results.messages(), [on_next(300, 1), on_next(350, 2), on_next(400, 3)]);
  assert_eq!(xs.subscriptions(), [subscription(200, 1000)]);
}

#[test]
fn repeat_observable_error() {
  let scheduler = harness();
  let xs = cold_123(&scheduler, Some(Notification::Error(ex())));
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results = scheduler.start_with_create(move || c_xs.repeat(&c_scheduler)).unwrap();

  assert_eq!(
    results.messages(),
    [on_next(300, 1), on_next(350, 2), on_next(400, 3), on_error(450, ex())]
  );
  assert_eq!(xs.subscriptions(), [subscription(200, 450)]);
}

#[test]
fn repeat_count_basic() {
  let scheduler = harness();
  let xs = short_cold(&scheduler, Notification::Completed);
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results = scheduler.start_with_create(move || c_xs.repeat_count(3, &c_scheduler)).unwrap();

  assert_eq!(
    results.messages(),
    [
      on_next(205, 1),
      on_next(210, 2),
      on_next(215, 3),
      on_next(225, 1),
      on_next(230, 2),
      on_next(235, 3),
      on_next(245, 1),
      on_next(250, 2),
      on_next(255, 3),
      on_completed(260)
    ]
  );
  assert_eq!(
    xs.subscriptions(),
    [subscription(200, 220), subscription(220, 240), subscription(240, 260)]
  );
}

#[test]
fn repeat_count_dispose() {
  let scheduler = harness();
  let xs = short_cold(&scheduler, Notification::Completed);
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results =
    scheduler.start_with_dispose(move || c_xs.repeat_count(3, &c_scheduler), 231).unwrap();

  assert_eq!(
    results.messages(),
    [on_next(205, 1), on_next(210, 2), on_next(215, 3), on_next(225, 1), on_next(230, 2)]
  );
  assert_eq!(xs.subscriptions(), [subscription(200, 220), subscription(220, 231)]);
}

#[test]
fn repeat_count_infinite() {
  let scheduler = harness();
  let xs = cold_123(&scheduler, None);
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results = scheduler.start_with_create(move || c_xs.repeat_count(3, &c_scheduler)).unwrap();

  assert_eq!(results.messages(), [on_next(300, 1), on_next(350, 2), on_next(400, 3)]);
  assert_eq!(xs.subscriptions(), [subscription(200, 1000)]);
}

#[test]
fn repeat_count_error() {
  let scheduler = harness();
  let xs = cold_123(&scheduler, Some(Notification::Error(ex())));
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results = scheduler.start_with_create(move || c_xs.repeat_count(3, &c_scheduler)).unwrap();

  assert_eq!(
    results.messages(),
    [on_next(300, 1), on_next(350, 2), on_next(400, 3), on_error(450, ex())]
  );
  assert_eq!(xs.subscriptions(), [subscription(200, 450)]);
}

#[test]
fn repeat_count_zero_never_subscribes() {
  let scheduler = harness();
  let xs = short_cold(&scheduler, Notification::Completed);
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results = scheduler.start_with_create(move || c_xs.repeat_count(0, &c_scheduler)).unwrap();

  assert_eq!(results.messages(), [on_completed(200)]);
  assert!(xs.subscriptions().is_empty());
}

#[test]
fn repeat_count_one_matches_the_source() {
  let scheduler = harness();
  let xs = short_cold(&scheduler, Notification::Completed);
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results = scheduler.start_with_create(move || c_xs.repeat_count(1, &c_scheduler)).unwrap();

  assert_eq!(
    results.messages(),
    [on_next(205, 1), on_next(210, 2), on_next(215, 3), on_completed(220)]
  );
  assert_eq!(xs.subscriptions(), [subscription(200, 220)]);
}

// ==================== retry ====================

#[test]
fn retry_observable_basic() {
  let scheduler = harness();
  let xs = cold_123(&scheduler, Some(Notification::Completed));
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results = scheduler.start_with_create(move || c_xs.retry(&c_scheduler)).unwrap();

  assert_eq!(
    results.messages(),
    [on_next(300, 1), on_next(350, 2), on_next(400, 3), on_completed(450)]
  );
  assert_eq!(xs.subscriptions(), [subscription(200, 450)]);
}

#[test]
fn retry_observable_infinite() {
  let scheduler = harness();
  let xs = cold_123(&scheduler, None);
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results = scheduler.start_with_create(move || c_xs.retry(&c_scheduler)).unwrap();

  assert_eq!(results.messages(), [on_next(300, 1), on_next(350, 2), on_next(400, 3)]);
  assert_eq!(xs.subscriptions(), [subscription(200, 1000)]);
}

#[test]
fn retry_observable_error() {
  let scheduler = harness();
  let xs = cold_123(&scheduler, Some(Notification::Error(ex())));
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results =
    scheduler.start_with_dispose(move || c_xs.retry(&c_scheduler), 1100).unwrap();

  assert_eq!(
    results.messages(),
    [
      on_next(300, 1),
      on_next(350, 2),
      on_next(400, 3),
      on_next(550, 1),
      on_next(600, 2),
      on_next(650, 3),
      on_next(800, 1),
      on_next(850, 2),
      on_next(900, 3),
      on_next(1050, 1)
    ]
  );
  assert_eq!(
    xs.subscriptions(),
    [
      subscription(200, 450),
      subscription(450, 700),
      subscription(700, 950),
      subscription(950, 1100)
    ]
  );
}

#[test]
fn retry_count_basic() {
  let scheduler = harness();
  let xs = short_cold(&scheduler, Notification::Error(ex()));
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results = scheduler.start_with_create(move || c_xs.retry_count(3, &c_scheduler)).unwrap();

  assert_eq!(
    results.messages(),
    [
      on_next(205, 1),
      on_next(210, 2),
      on_next(215, 3),
      on_next(225, 1),
      on_next(230, 2),
      on_next(235, 3),
      on_next(245, 1),
      on_next(250, 2),
      on_next(255, 3),
      on_error(260, ex())
    ]
  );
  assert_eq!(
    xs.subscriptions(),
    [subscription(200, 220), subscription(220, 240), subscription(240, 260)]
  );
}

#[test]
fn retry_count_infinite() {
  let scheduler = harness();
  let xs = cold_123(&scheduler, None);
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results = scheduler.start_with_create(move || c_xs.retry_count(3, &c_scheduler)).unwrap();

  assert_eq!(results.messages(), [on_next(300, 1), on_next(350, 2), on_next(400, 3)]);
  assert_eq!(xs.subscriptions(), [subscription(200, 1000)]);
}

#[test]
fn retry_count_completes() {
  let scheduler = harness();
  let xs = cold_123(&scheduler, Some(Notification::Completed));
  let (c_xs, c_scheduler) = (xs.clone(), scheduler.clone());
  let results = scheduler.start_with_create(move || c_xs.retry_count(3, &c_scheduler)).unwrap();

  assert_eq!(
    results.messages(),
    [on_next(300, 1), on_next(350, 2), on_next(400, 3), on_completed(450)]
  );
  assert_eq!(xs.subscriptions(), [subscription(200, 450)]);
}

// ==================== repeat_value ====================

fn repeat_value_run(
  count: Option<usize>,
  disposed: VirtualTime,
) -> Vec<Recorded<Notification<i32, Fault>>> {
  let scheduler = harness();
  let c_scheduler = scheduler.clone();
  scheduler
    .start_with_dispose(move || observable::repeat_value(42, count, &c_scheduler), disposed)
    .unwrap()
    .messages()
}

#[test]
fn repeat_value_count_zero() {
  assert_eq!(repeat_value_run(Some(0), DISPOSED), [on_completed(200)]);
}

#[test]
fn repeat_value_count_one() {
  assert_eq!(repeat_value_run(Some(1), DISPOSED), [on_next(201, 42), on_completed(201)]);
}

#[test]
fn repeat_value_count_ten() {
  let mut expected: Vec<_> = (201..=210).map(|t| on_next(t, 42)).collect();
  expected.push(on_completed(210));
  assert_eq!(repeat_value_run(Some(10), DISPOSED), expected);
}

#[test]
fn repeat_value_count_dispose() {
  let expected: Vec<_> = (201..=206).map(|t| on_next(t, 42)).collect();
  assert_eq!(repeat_value_run(Some(10), 207), expected);
}

#[test]
fn repeat_value_unbounded() {
  let expected: Vec<_> = (201..=206).map(|t| on_next(t, 42)).collect();
  assert_eq!(repeat_value_run(None, 207), expected);
}

// ==================== hot sources ====================

#[test]
fn hot_source_is_shared_and_absolute() {
  let scheduler = harness();
  let xs: HotObservable<i32, Fault> = scheduler.create_hot_observable(vec![
    on_next(110, 1),
    on_next(210, 2),
    on_next(310, 3),
    on_completed(400),
  ]);
  let early: MockObserver<i32, Fault> = scheduler.create_observer();
  let c_xs = xs.clone();
  let c_early = early.clone();
  scheduler.schedule_absolute(100, move || {
    c_xs.subscribe_with(c_early);
  });

  let c_xs = xs.clone();
  let late = scheduler
    .start_with_timing(move || c_xs, StartConfig::new().subscribed(300))
    .unwrap();

  assert_eq!(
    early.messages(),
    [on_next(110, 1), on_next(210, 2), on_next(310, 3), on_completed(400)]
  );
  assert_eq!(late.messages(), [on_next(310, 3), on_completed(400)]);
  assert_eq!(xs.subscriptions(), [subscription(100, 400), subscription(300, 400)]);
}
