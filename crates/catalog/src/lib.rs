mod board;
mod fetch;
mod normalize;

pub use board::*;
pub use fetch::*;
pub use normalize::*;
