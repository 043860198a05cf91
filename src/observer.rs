use crate::node::NodeSpec;

/// Receives the engine's outbound notifications so a front-end can update its view.
///
/// Every callback is invoked synchronously from inside the engine operation
/// that caused it, and only after the state change has been applied. Rejected
/// operations never notify. All methods default to doing nothing, so a
/// front-end only implements what it renders.
pub trait LevelObserver {
    /// A level was (re)initialized: show its title and description, and render
    /// the palette and `slot_count` empty drop targets.
    fn on_level_loaded(
        &mut self,
        _level: u32,
        _title: &str,
        _description: Option<&str>,
        _nodes: &[NodeSpec],
        _slot_count: usize,
    ) {
    }

    /// `node` now occupies `slot`: render it there and hide it from the palette.
    fn on_node_placed(&mut self, _slot: usize, _node: &NodeSpec) {}

    /// The workflow was checked. When `pass` is true and the engine reports
    /// `can_advance()`, the front-end may offer to move on.
    fn on_evaluated(&mut self, _pass: bool, _message: &str) {}

    /// All slots were emptied and every palette node is available again.
    fn on_reset(&mut self) {}
}

/// An observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl LevelObserver for NullObserver {}

impl<O: LevelObserver + ?Sized> LevelObserver for &mut O {
    fn on_level_loaded(
        &mut self,
        level: u32,
        title: &str,
        description: Option<&str>,
        nodes: &[NodeSpec],
        slot_count: usize,
    ) {
        (**self).on_level_loaded(level, title, description, nodes, slot_count)
    }

    fn on_node_placed(&mut self, slot: usize, node: &NodeSpec) {
        (**self).on_node_placed(slot, node)
    }

    fn on_evaluated(&mut self, pass: bool, message: &str) {
        (**self).on_evaluated(pass, message)
    }

    fn on_reset(&mut self) {
        (**self).on_reset()
    }
}
