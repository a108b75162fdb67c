//! # queens
//!
//! Counts the solutions to the N-queens puzzle with an exhaustive
//! backtracking search. The board state is three bitmasks (columns and the
//! two diagonal families), so boards are limited to [`MAX_SIZE`].
//!
//! ```
//! assert_eq!(queens::count_solutions(8).unwrap(), 92);
//! ```

mod error;
mod solver;
pub mod timer;

pub use error::{Error, Result};
pub use solver::{branch_counts, count_solutions, queens, Placement, MAX_SIZE};
