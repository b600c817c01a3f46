//! Whole-life autoplay module

mod engine;
mod strategy;


pub use engine::*;
pub use strategy::*;
