mod fee;
mod wallet;
mod workflow;

pub use fee::*;
pub use wallet::*;
pub use workflow::*;
