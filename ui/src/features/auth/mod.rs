pub mod storage;
pub mod types;

pub use storage::*;
pub use types::*;
