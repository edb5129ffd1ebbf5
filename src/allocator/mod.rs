mod allocator;
mod category;
mod identifier;

pub use allocator::*;
pub use category::*;
pub use identifier::*;
