//! Single-step word transformations.
//!
//! - `adjacency`: the predicate deciding whether two words are one enabled
//!   edit apart. This is the oracle the traversal queries for every pair.
//! - `edit`: the concrete `Edit` between two neighbouring words, its text
//!   rendering (`c,2,x`, `s,0`, `i,3,s`, `d,1`) and replay.
//!
//! Words are compared letter by letter (Unicode scalar values); edit
//! positions count characters.

mod adjacency;
mod edit;

pub use adjacency::{are_adjacent, differs_by_one_char};
pub use edit::{diff, Edit};
