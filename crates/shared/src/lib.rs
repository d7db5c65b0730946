mod api;
mod error;
pub mod event;
pub mod user;

pub use api::*;
pub use error::*;
pub use event::*;
pub use user::*;
