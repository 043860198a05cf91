pub mod kind;
pub mod spec;

pub use kind::*;
pub use spec::*;
