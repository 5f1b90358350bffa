pub mod constants;
pub mod error;
pub mod info;

pub use constants::*;
pub use error::TraversalError;
pub use info::GridInfo;
