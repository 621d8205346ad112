pub mod campaign;
pub mod filter;

pub use campaign::*;
pub use filter::*;
