use crate::node::NodeSpec;

/// A self-contained puzzle: a palette of nodes and the ordered solution they must form.
///
/// The number of slots a front-end lays out is always `solution.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSpec {
    pub title: String,
    pub description: Option<String>,
    pub available_nodes: Vec<NodeSpec>,
    pub solution: Vec<String>,
}

impl LevelSpec {
    pub fn new(title: &str, available_nodes: Vec<NodeSpec>, solution: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            available_nodes,
            solution: solution.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Number of drop targets in this level's workflow.
    pub fn slot_count(&self) -> usize {
        self.solution.len()
    }

    /// Looks up a node in this level's palette by id.
    pub fn find_node(&self, node_id: &str) -> Option<&NodeSpec> {
        self.available_nodes.iter().find(|n| n.id == node_id)
    }
}
