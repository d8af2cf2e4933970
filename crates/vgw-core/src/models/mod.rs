//! Normalized response shapes shared by every backend

mod energy;
mod engine;
mod vehicle;

pub use energy::*;
pub use engine::*;
pub use vehicle::*;
