mod lock;
mod parts;

pub use lock::*;
pub use parts::*;
