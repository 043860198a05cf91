use super::NodeKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable step descriptor offered to the learner for placement.
///
/// The `id` is unique within a level. Everything else is presentation data
/// that the engine passes through to the front-end untouched.
///
/// Deserializes from the catalog file's node entries; `subtitle` and `icon`
/// may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: NodeKind,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub icon: String,
}

impl NodeSpec {
    pub fn new(id: &str, kind: NodeKind, title: &str, subtitle: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            icon: icon.to_string(),
        }
    }
}

impl fmt::Display for NodeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.icon, self.title, self.id)
    }
}
