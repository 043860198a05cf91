use crate::error::EngineError;
use crate::level::{LevelCatalog, LevelSpec};
use crate::node::NodeSpec;
use crate::observer::{LevelObserver, NullObserver};

mod placement;
mod verdict;

pub use placement::Placement;
pub use verdict::{EngineState, FAILURE_MESSAGE, SUCCESS_MESSAGE, Verdict};

/// Drives a learner through the levels of a catalog.
///
/// The engine owns the active level and its placement state. A front-end
/// translates gestures into `place`, `evaluate`, `reset`, `select_level`
/// and `advance` calls, and receives view updates through its
/// [`LevelObserver`]. Operations run one at a time and never block.
pub struct Engine<O: LevelObserver = NullObserver> {
    catalog: LevelCatalog,
    current_level: u32,
    level: LevelSpec,
    placement: Placement,
    last_verdict: Option<Verdict>,
    observer: O,
}

pub struct EngineBuilder<O: LevelObserver = NullObserver> {
    catalog: LevelCatalog,
    observer: O,
    start_level: u32,
}

impl EngineBuilder<NullObserver> {
    pub fn new(catalog: LevelCatalog) -> Self {
        Self {
            catalog,
            observer: NullObserver,
            start_level: 1,
        }
    }
}

impl<O: LevelObserver> EngineBuilder<O> {
    pub fn with_observer<P: LevelObserver>(self, observer: P) -> EngineBuilder<P> {
        EngineBuilder {
            catalog: self.catalog,
            observer,
            start_level: self.start_level,
        }
    }

    pub fn start_level(mut self, level: u32) -> Self {
        self.start_level = level;
        self
    }

    /// Creates the engine and loads the start level, notifying the observer.
    pub fn build(self) -> Result<Engine<O>, EngineError> {
        let level = self
            .catalog
            .get(self.start_level)
            .cloned()
            .ok_or(EngineError::InvalidLevel(self.start_level))?;

        let mut engine = Engine {
            catalog: self.catalog,
            current_level: self.start_level,
            level,
            placement: Placement::new(),
            last_verdict: None,
            observer: self.observer,
        };
        engine.initialize(self.start_level)?;
        Ok(engine)
    }
}

impl Engine<NullObserver> {
    pub fn builder(catalog: LevelCatalog) -> EngineBuilder<NullObserver> {
        EngineBuilder::new(catalog)
    }
}

impl<O: LevelObserver> Engine<O> {
    /// Makes `level` the active level with an empty placement.
    ///
    /// Fails with `InvalidLevel` if the catalog has no such level, in which
    /// case the engine is left untouched.
    pub fn initialize(&mut self, level: u32) -> Result<(), EngineError> {
        let spec = self
            .catalog
            .get(level)
            .ok_or(EngineError::InvalidLevel(level))?;

        self.current_level = level;
        self.level = spec.clone();
        self.placement.clear();
        self.last_verdict = None;

        tracing::info!(
            "Loaded level {}/{}: {}",
            level,
            self.catalog.max_level(),
            self.level.title
        );
        self.observer.on_level_loaded(
            level,
            &self.level.title,
            self.level.description.as_deref(),
            &self.level.available_nodes,
            self.level.slot_count(),
        );
        Ok(())
    }

    /// Level selection from a picker. Same as [`Engine::initialize`].
    pub fn select_level(&mut self, level: u32) -> Result<(), EngineError> {
        self.initialize(level)
    }

    /// Puts the node `node_id` into the empty slot `slot`.
    ///
    /// A rejected placement leaves the state unchanged and notifies nobody.
    /// Filled slots cannot be overwritten and placed nodes cannot be reused
    /// until the next reset.
    pub fn place(&mut self, slot: usize, node_id: &str) -> Result<(), EngineError> {
        let node = match self.check_placement(slot, node_id) {
            Ok(node) => node.clone(),
            Err(e) => {
                tracing::warn!("Rejected placement of '{}' in slot {}: {}", node_id, slot, e);
                return Err(e);
            }
        };

        tracing::debug!("Placed node '{}' in slot {}", node.id, slot);
        self.placement.insert(slot, node);
        self.last_verdict = None;

        if let Some(node) = self.placement.get(slot) {
            self.observer.on_node_placed(slot, node);
        }
        Ok(())
    }

    fn check_placement(&self, slot: usize, node_id: &str) -> Result<&NodeSpec, EngineError> {
        let slot_count = self.level.slot_count();
        if slot >= slot_count {
            return Err(EngineError::SlotOutOfRange { slot, slot_count });
        }

        let node = self
            .level
            .find_node(node_id)
            .ok_or_else(|| EngineError::UnknownNode {
                node_id: node_id.to_string(),
                level: self.current_level,
            })?;

        if let Some(occupant) = self.placement.get(slot) {
            return Err(EngineError::SlotOccupied {
                slot,
                occupant: occupant.id.clone(),
            });
        }
        if let Some(used_in) = self.placement.slot_of(node_id) {
            return Err(EngineError::NodeConsumed {
                node_id: node_id.to_string(),
                slot: used_in,
            });
        }

        Ok(node)
    }

    /// Checks the placement against the solution, position by position.
    ///
    /// Passes only if every slot holds exactly the expected node; an empty
    /// slot always fails. The placement itself is not modified.
    pub fn evaluate(&mut self) -> Verdict {
        let actual = self
            .placement
            .sequence(self.level.slot_count())
            .into_iter()
            .map(|id| id.map(str::to_string))
            .collect();
        let verdict = Verdict::judge(&self.level.solution, actual);

        tracing::debug!(
            "Evaluated level {}: pass={} ({}/{} slots filled)",
            self.current_level,
            verdict.pass,
            self.placement.len(),
            self.level.slot_count()
        );
        self.observer.on_evaluated(verdict.pass, verdict.message);
        self.last_verdict = Some(verdict.clone());
        verdict
    }

    /// Empties every slot of the current level and returns all nodes to the palette.
    pub fn reset(&mut self) {
        self.placement.clear();
        self.last_verdict = None;
        tracing::debug!("Reset level {}", self.current_level);
        self.observer.on_reset();
    }

    /// True when the last check passed and a next level exists.
    ///
    /// The front-end decides when and how to ask the learner; the engine only
    /// moves on when [`Engine::advance`] is called.
    pub fn can_advance(&self) -> bool {
        self.passed() && self.current_level < self.catalog.max_level()
    }

    /// Loads the next level. Returns the new level number.
    pub fn advance(&mut self) -> Result<u32, EngineError> {
        if !self.passed() {
            tracing::warn!("Refusing to advance past unsolved level {}", self.current_level);
            return Err(EngineError::AdvanceNotAllowed {
                level: self.current_level,
            });
        }

        let next = self.current_level + 1;
        self.initialize(next)?;
        tracing::info!("Advanced to level {}", next);
        Ok(next)
    }

    fn passed(&self) -> bool {
        self.last_verdict.as_ref().is_some_and(|v| v.pass)
    }

    pub fn state(&self) -> EngineState {
        if self.placement.is_empty() {
            return EngineState::Empty;
        }
        match &self.last_verdict {
            Some(verdict) if self.placement.len() == self.level.slot_count() => {
                if verdict.pass {
                    EngineState::CompletePass
                } else {
                    EngineState::CompleteFail
                }
            }
            _ => EngineState::Partial,
        }
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn max_level(&self) -> u32 {
        self.catalog.max_level()
    }

    /// `(current, max)`, e.g. for a "2/3" indicator.
    pub fn progress(&self) -> (u32, u32) {
        (self.current_level, self.catalog.max_level())
    }

    pub fn level(&self) -> &LevelSpec {
        &self.level
    }

    pub fn slot_count(&self) -> usize {
        self.level.slot_count()
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Palette nodes that have not been placed yet, in catalog order.
    pub fn available_nodes(&self) -> impl Iterator<Item = &NodeSpec> {
        self.level
            .available_nodes
            .iter()
            .filter(|node| !self.placement.is_consumed(&node.id))
    }

    /// The verdict of the last check, cleared by any later change.
    pub fn last_verdict(&self) -> Option<&Verdict> {
        self.last_verdict.as_ref()
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}
