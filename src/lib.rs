//! Outcome-carrying value types.
//!
//! Fallible steps are threaded through `map`, `flat_map`, `compose`,
//! `recover`, `otherwise` and `transform` instead of branching by hand, and
//! the raw value is only pulled out at the very end.
//!
//! * [`Result`] - success or failure of a general computation.
//! * [`Try`] - same, with the error fixed to `anyhow::Error`, plus factories
//!   that capture errors and panics.
//! * [`Either`] - unbiased left/right union.
//! * [`Nullable`] - presence or absence of a value.
//!
//! ```
//! use outcomes::{Outcome, Result, Try};
//!
//! fn parse(input: &str) -> Try<i32> {
//!     Try::to(|| Ok(input.trim().parse::<i32>()?))
//! }
//!
//! let doubled: Result<i32, String> = parse(" 21 ")
//!     .map(|x| x * 2)
//!     .to_result()
//!     .recover(|e| Result::failure(e.to_string()));
//!
//! assert_eq!(doubled.or_else(0), 42);
//! ```

#[macro_use]
mod outcome;

mod attempt;
mod container;
mod either;
mod error;
pub mod interrupt;
mod nullable;
mod result;

pub use attempt::Try;
pub use container::Container;
pub use either::Either;
pub use error::{Interrupted, NoValuePresent, Panicked};
pub use nullable::Nullable;
pub use outcome::Outcome;
pub use result::Result;
