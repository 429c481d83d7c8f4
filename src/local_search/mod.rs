//! Local search operators for improving delivery paths.
//!
//! - [`two_opt_open`] — 2-opt segment reversal on an open path rooted at the start point

mod two_opt;

pub use two_opt::two_opt_open;
