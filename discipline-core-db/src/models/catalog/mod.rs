pub mod violation_category;

pub use violation_category::*;
