mod allocator;
mod storage;

pub use allocator::*;
pub use storage::*;
