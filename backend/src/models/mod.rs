pub mod birth;
pub mod macros;
pub mod sector;
pub mod time;

pub use birth::*;
pub use sector::{MansionIndex, ZodiacIndex};
pub use time::*;
