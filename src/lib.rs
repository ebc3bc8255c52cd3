//! Two closed sum types and the combinators to compose them.
//!
//! - [`Alternative`] holds one of two outcomes, `Left` (failure by convention)
//!   or `Right` (success).
//! - [`Optional`] holds a value or nothing, `Present` or `Empty`.
//!
//! Both are plain enums, so every `match` on them is checked for
//! exhaustiveness. Combinators consume the container and build a new one;
//! nothing is ever mutated in place.
//!
//! ```
//! use twofold::{Alternative, Optional};
//!
//! let doubled: Alternative<String, i32> = Alternative::right(5).map_right(|x| x * 2);
//! assert_eq!(doubled.get_or_else(0), 10);
//!
//! let failed: Alternative<String, i32> = Alternative::left("E".to_string());
//! assert_eq!(failed.map_right(|x| x * 2).fold(|l| l, |r| r.to_string()), "E");
//!
//! assert_eq!(Optional::present("Hi").map(str::len), Optional::present(2));
//! assert_eq!(Optional::empty().or_else("W"), "W");
//! ```

extern crate log;
extern crate thiserror;

pub mod alternative;
pub mod error;
pub mod optional;

pub use alternative::Alternative;
pub use error::{ContainerError, Result};
pub use optional::Optional;

/// Borrowing view over the held value, yielding it at most once
pub type Seq<'a, T> = std::option::IntoIter<&'a T>;

/// Owning view over the held value, yielding it at most once
pub type IntoSeq<T> = std::option::IntoIter<T>;
