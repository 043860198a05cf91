use thiserror::Error;

/// Errors that can occur while building or loading a level catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Failed to parse level catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to read level catalog '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Invalid custom catalog data: {0}")]
    ValidationError(String),

    #[error("Level {level} is defined more than once")]
    DuplicateLevel { level: u32 },

    #[error("The level catalog contains no levels")]
    EmptyCatalog,

    #[error("Level numbering must be contiguous from 1: expected level {expected}, found {found}")]
    NonContiguousLevel { expected: u32, found: u32 },

    #[error("Level {level} has an empty solution")]
    EmptySolution { level: u32 },

    #[error("Level {level} declares node '{node_id}' more than once")]
    DuplicateNodeId { level: u32, node_id: String },

    #[error("Level {level} expects node '{node_id}' in its solution, but it is not available")]
    UnknownSolutionNode { level: u32, node_id: String },

    #[error("Level {level} uses node '{node_id}' more than once in its solution")]
    RepeatedSolutionNode { level: u32, node_id: String },

    #[error("Level {level} lays out {slots} slots, but its solution has {solution} steps")]
    SlotLayoutMismatch {
        level: u32,
        slots: usize,
        solution: usize,
    },
}

/// Errors that can occur while the engine is driven by a front-end.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Level {0} does not exist in the catalog")]
    InvalidLevel(u32),

    #[error("Slot {slot} is out of range, level has {slot_count} slots")]
    SlotOutOfRange { slot: usize, slot_count: usize },

    #[error("Slot {slot} is already occupied by node '{occupant}'")]
    SlotOccupied { slot: usize, occupant: String },

    #[error("Node '{node_id}' is not available in level {level}")]
    UnknownNode { node_id: String, level: u32 },

    #[error("Node '{node_id}' has already been placed in slot {slot}")]
    NodeConsumed { node_id: String, slot: usize },

    #[error("Level {level} has not been passed yet")]
    AdvanceNotAllowed { level: u32 },
}
