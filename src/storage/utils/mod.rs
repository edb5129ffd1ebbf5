mod category_names;

pub use category_names::*;
