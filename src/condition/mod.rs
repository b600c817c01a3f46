//! Condition parsing and evaluation module
//!
//! Parses condition strings like "MNY>=5000 & OPT?[tutor,babysit]"
//! and evaluates them against a PlayerState.

mod ast;
pub mod cache;
mod evaluator;
pub mod parser;


pub use ast::*;
pub use cache::*;
pub use evaluator::*;
pub use parser::*;
