//! Ordering utilities.
//!
//! Merging of already-sorted sequences and ascending numeric sorts that
//! mutate in place and hand the slice back.

mod merge;
mod order;

pub use merge::merge_sorted;
pub use order::{order_arr, order_obj_arr, order_values};
