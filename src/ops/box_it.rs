//! Type erasure for observables.

use crate::observable::Observable;

/// An observable whose concrete type has been erased by
/// [`ObservableExt::box_it`](crate::observable::ObservableExt::box_it).
pub type BoxObservable<'a, Item, Err> = Box<dyn Observable<Item = Item, Err = Err> + 'a>;
