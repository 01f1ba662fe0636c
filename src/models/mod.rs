pub mod plant;

pub use plant::*;
