mod record;
mod store;
mod utils;

pub use record::*;
pub use store::*;
pub use utils::*;
