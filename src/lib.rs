//! A small field-extraction language.
//!
//! A selection expression such as `1-5,6+7+8,9-` is parsed into a blend: one
//! tokenization of each line plus the glues that pick and recombine its
//! fields. The blend is compiled once and applied to every line, producing
//! one row of strings per line.
//!
//! ```
//! let blend = scut::parser::parse_expression("1,2[split:-:1,2],3-4").unwrap();
//! let pipeline = scut::interpreter::compile(&blend);
//! assert_eq!(
//!     pipeline.apply("ab-12 cd-34 ab-56 cd-78"),
//!     ["ab-12", "cd", "34", "ab-56", "cd-78"]
//! );
//! ```

pub mod ast;
pub mod error;
pub mod input;
pub mod interpreter;
pub mod operators;
pub mod output;
pub mod parser;
pub mod value;
