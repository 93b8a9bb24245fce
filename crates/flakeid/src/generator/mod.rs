mod constant;
mod interface;
mod overflow;
mod sequential;
mod shifted;
mod snowflake;
mod timestamp;

pub use constant::*;
pub use interface::*;
pub use overflow::*;
pub use sequential::*;
pub use shifted::*;
pub use snowflake::*;
pub use timestamp::*;
