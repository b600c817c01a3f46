//! Player stats: state, effects and judging

mod effects;
mod judge;
mod state;


pub use effects::*;
pub use judge::*;
pub use state::*;
