use crate::node::NodeSpec;
use ahash::AHashMap;

/// Which node sits in which slot for the level being played.
///
/// Slots are 0-based and may be filled in any order, so the map can have
/// gaps until the workflow is complete. A slot holds at most one node and a
/// node occupies at most one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    slots: AHashMap<usize, NodeSpec>,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: usize) -> Option<&NodeSpec> {
        self.slots.get(&slot)
    }

    pub fn is_occupied(&self, slot: usize) -> bool {
        self.slots.contains_key(&slot)
    }

    /// The slot a node was placed in, if it has been consumed.
    pub fn slot_of(&self, node_id: &str) -> Option<usize> {
        self.slots
            .iter()
            .find(|(_, node)| node.id == node_id)
            .map(|(slot, _)| *slot)
    }

    pub fn is_consumed(&self, node_id: &str) -> bool {
        self.slot_of(node_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Node ids in slot order for `0..slot_count`, `None` for empty slots.
    pub fn sequence(&self, slot_count: usize) -> Vec<Option<&str>> {
        (0..slot_count)
            .map(|slot| self.get(slot).map(|node| node.id.as_str()))
            .collect()
    }

    pub(super) fn insert(&mut self, slot: usize, node: NodeSpec) {
        self.slots.insert(slot, node);
    }

    pub(super) fn clear(&mut self) {
        self.slots.clear();
    }
}
