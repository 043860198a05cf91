use super::builtin::builtin_levels;
use super::format::RawCatalog;
use super::{IntoCatalog, LevelSpec};
use crate::error::CatalogError;
use ahash::AHashSet;
use std::collections::BTreeMap;
use std::fs;

/// The ordered, read-only set of levels a game is played through.
///
/// Levels are numbered contiguously from 1, so the last level number is
/// also the level count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCatalog {
    levels: BTreeMap<u32, LevelSpec>,
}

impl LevelCatalog {
    /// The levels shipped with the game.
    pub fn builtin() -> Self {
        Self {
            levels: (1..).zip(builtin_levels()).collect(),
        }
    }

    /// Builds a catalog from levels in play order, numbering them from 1.
    pub fn from_levels(levels: Vec<LevelSpec>) -> Result<Self, CatalogError> {
        Self::from_numbered((1..).zip(levels))
    }

    /// Builds a catalog from explicitly numbered levels.
    pub fn from_numbered(
        levels: impl IntoIterator<Item = (u32, LevelSpec)>,
    ) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for (number, level) in levels {
            validate_level(number, &level)?;
            if map.insert(number, level).is_some() {
                return Err(CatalogError::DuplicateLevel { level: number });
            }
        }

        if map.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for (expected, &found) in (1..).zip(map.keys()) {
            if expected != found {
                return Err(CatalogError::NonContiguousLevel { expected, found });
            }
        }

        Ok(Self { levels: map })
    }

    /// Parses a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        RawCatalog::from_json(json)?.into_catalog()
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn get(&self, number: u32) -> Option<&LevelSpec> {
        self.levels.get(&number)
    }

    pub fn contains(&self, number: u32) -> bool {
        self.levels.contains_key(&number)
    }

    /// Number of the final level.
    pub fn max_level(&self) -> u32 {
        self.levels.keys().next_back().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &LevelSpec)> {
        self.levels.iter().map(|(number, level)| (*number, level))
    }

    /// `(number, title)` pairs in play order, for level pickers.
    pub fn summaries(&self) -> Vec<(u32, &str)> {
        self.iter()
            .map(|(number, level)| (number, level.title.as_str()))
            .collect()
    }
}

fn validate_level(number: u32, level: &LevelSpec) -> Result<(), CatalogError> {
    if level.solution.is_empty() {
        return Err(CatalogError::EmptySolution { level: number });
    }

    let mut node_ids = AHashSet::new();
    for node in &level.available_nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(CatalogError::DuplicateNodeId {
                level: number,
                node_id: node.id.clone(),
            });
        }
    }

    let mut seen = AHashSet::new();
    for node_id in &level.solution {
        if !node_ids.contains(node_id.as_str()) {
            return Err(CatalogError::UnknownSolutionNode {
                level: number,
                node_id: node_id.clone(),
            });
        }
        // Nodes are consumed on placement, so a repeated id could never be solved.
        if !seen.insert(node_id.as_str()) {
            return Err(CatalogError::RepeatedSolutionNode {
                level: number,
                node_id: node_id.clone(),
            });
        }
    }

    Ok(())
}
