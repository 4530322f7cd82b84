pub mod box_it;
pub mod repeat;
mod resubscribe;
pub mod retry;
