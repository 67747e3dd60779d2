pub mod display;
pub mod error;
pub mod input;
pub mod segment;

pub use display::*;
pub use error::{Error, Result};
pub use input::*;
pub use segment::*;
