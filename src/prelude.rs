//! Prelude module for convenient imports
//!
//! Re-exports the types most front-ends need to load a catalog and drive the engine.
//!
//! # Example
//!
//! ```rust
//! use flowquest::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut engine = Engine::builder(LevelCatalog::builtin()).build()?;
//! engine.place(0, "set-var")?;
//! engine.place(1, "function")?;
//! engine.place(2, "output")?;
//!
//! let verdict = engine.evaluate();
//! assert!(verdict.pass);
//! assert!(engine.can_advance());
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Engine
pub use crate::engine::{Engine, EngineBuilder, EngineState, Placement, Verdict};
pub use crate::observer::{LevelObserver, NullObserver};

// Levels and nodes
pub use crate::level::{IntoCatalog, LevelCatalog, LevelSpec};
pub use crate::node::{NodeKind, NodeSpec};

// Error types
pub use crate::error::{CatalogError, EngineError};

// Feedback formatting
pub use crate::report::VerdictFormatter;

// Result type alias for convenience
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
