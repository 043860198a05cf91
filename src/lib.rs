//! # FlowQuest - Workflow Puzzle Engine
//!
//! **FlowQuest** is the level and validation engine behind a drag-and-drop
//! workflow puzzle. A learner is given a palette of nodes (triggers, actions,
//! conditions, models, outputs) and a row of empty slots, and has to assemble
//! the nodes into the order the level expects.
//!
//! The engine owns everything except the rendering: the level catalog, the
//! placement state of the active level, the pass/fail check and the
//! progression from one level to the next. A front-end (a web view, a TUI,
//! the bundled `flowquest-cli`) feeds it user gestures and renders the
//! notifications it receives through a [`observer::LevelObserver`].
//!
//! ## Core Workflow
//!
//! 1.  **Load Levels**: Use [`level::LevelCatalog::builtin`], parse the JSON catalog format with
//!     [`level::LevelCatalog::from_json`], or implement [`level::IntoCatalog`] for your own format.
//! 2.  **Build an Engine**: `Engine::builder(catalog)` with your observer. Building loads the start level.
//! 3.  **Play**: Forward drops as `place(slot, node_id)`, the "test" button as `evaluate()`,
//!     and the "reset" button as `reset()`.
//! 4.  **Advance**: After a passing check, `can_advance()` tells you whether to offer the next
//!     level. Call `advance()` once the learner accepts.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowquest::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut engine = Engine::builder(LevelCatalog::builtin()).build()?;
//!     assert_eq!(engine.level().title, "Level 1: Basic Data Flow");
//!
//!     // Wrong order first.
//!     engine.place(0, "function")?;
//!     engine.place(1, "set-var")?;
//!     engine.place(2, "output")?;
//!     let verdict = engine.evaluate();
//!     assert!(!verdict.pass);
//!     println!("{}", VerdictFormatter::format_feedback(&verdict));
//!
//!     // Start over and get it right.
//!     engine.reset();
//!     engine.place(0, "set-var")?;
//!     engine.place(1, "function")?;
//!     engine.place(2, "output")?;
//!     assert!(engine.evaluate().pass);
//!
//!     if engine.can_advance() {
//!         engine.advance()?;
//!     }
//!     assert_eq!(engine.current_level(), 2);
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod level;
pub mod node;
pub mod observer;
pub mod prelude;
pub mod report;

pub use engine::Engine;
pub use level::LevelCatalog;
