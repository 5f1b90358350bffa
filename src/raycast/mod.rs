pub mod dda;
mod utils;

pub use dda::Traversal;
