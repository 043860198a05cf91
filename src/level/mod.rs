pub mod builtin;
pub mod catalog;
pub mod conversion;
pub mod definition;
pub mod format;

pub use catalog::*;
pub use conversion::*;
pub use definition::*;
pub use format::*;
