use super::{IntoCatalog, LevelCatalog, LevelSpec};
use crate::error::CatalogError;
use crate::node::NodeSpec;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Level entry as it appears in a catalog file.
#[derive(Debug, Deserialize, Clone)]
pub struct RawLevel {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(alias = "availableNodes")]
    pub available_nodes: Vec<NodeSpec>,
    /// Optional explicit slot layout. Only its length matters.
    #[serde(default)]
    pub workflow: Option<Vec<String>>,
    pub solution: Vec<String>,
}

/// A complete catalog file: either an ordered list of levels, or an object
/// keyed by level number (`{"1": {...}, "2": {...}}`).
#[derive(Debug)]
pub enum RawCatalog {
    Ordered(Vec<RawLevel>),
    Numbered(BTreeMap<String, RawLevel>),
}

impl RawCatalog {
    /// Picks the shape from the first token so serde reports errors against
    /// the real layout, with line and column.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let parse_error = |e: serde_json::Error| CatalogError::JsonParseError(e.to_string());
        match json.trim_start().chars().next() {
            Some('{') => serde_json::from_str(json)
                .map(RawCatalog::Numbered)
                .map_err(parse_error),
            _ => serde_json::from_str(json)
                .map(RawCatalog::Ordered)
                .map_err(parse_error),
        }
    }
}

impl RawLevel {
    fn into_level(self, number: u32) -> Result<LevelSpec, CatalogError> {
        if let Some(workflow) = &self.workflow {
            if workflow.len() != self.solution.len() {
                return Err(CatalogError::SlotLayoutMismatch {
                    level: number,
                    slots: workflow.len(),
                    solution: self.solution.len(),
                });
            }
        }

        Ok(LevelSpec {
            title: self.title,
            description: self.description,
            available_nodes: self.available_nodes,
            solution: self.solution,
        })
    }
}

impl IntoCatalog for RawCatalog {
    fn into_catalog(self) -> Result<LevelCatalog, CatalogError> {
        let numbered: Vec<(u32, RawLevel)> = match self {
            RawCatalog::Ordered(levels) => (1..).zip(levels).collect(),
            RawCatalog::Numbered(levels) => levels
                .into_iter()
                .map(|(key, level)| {
                    key.trim().parse::<u32>().map(|n| (n, level)).map_err(|_| {
                        CatalogError::ValidationError(format!(
                            "level key '{}' is not a level number",
                            key
                        ))
                    })
                })
                .collect::<Result<_, _>>()?,
        };

        let levels = numbered
            .into_iter()
            .map(|(number, raw)| raw.into_level(number).map(|level| (number, level)))
            .collect::<Result<Vec<_>, _>>()?;

        LevelCatalog::from_numbered(levels)
    }
}
