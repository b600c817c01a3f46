//! Achievement checking module

mod checker;

pub use checker::*;
