//! Domain models shared between the core engine and the backend

pub mod estimate;
pub mod weather;

pub use estimate::*;
pub use weather::*;
