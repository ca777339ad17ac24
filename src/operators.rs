//! Chop and glue implementations for the selector engine.
//!
//! Each chop implements `Chop` (string -> split) and each glue implements
//! `Glue` (split -> output strings).

mod concat;
mod nested;
mod pick;
mod split;

pub use concat::{Concat, ConcatRange};
pub use nested::Nested;
pub use pick::{Pick, PickRange};
pub use split::SplitAnyOf;
