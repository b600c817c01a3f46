//! Decision content and generation module

mod catalog;
mod generator;
mod model;


pub use catalog::*;
pub use generator::*;
pub use model::*;
