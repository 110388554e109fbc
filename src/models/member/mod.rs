pub mod queries;
pub mod roster;
pub mod types;

pub use queries::*;
pub use roster::*;
pub use types::*;
