//! Common test utilities for building catalogs and observing the engine.
use flowquest::prelude::*;

/// One outbound notification, as seen by a front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Event {
    LevelLoaded {
        level: u32,
        title: String,
        description: Option<String>,
        node_ids: Vec<String>,
        slot_count: usize,
    },
    NodePlaced {
        slot: usize,
        node_id: String,
    },
    Evaluated {
        pass: bool,
        message: String,
    },
    Reset,
}

/// An observer that records every notification in order.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct RecordingObserver {
    pub events: Vec<Event>,
}

#[allow(dead_code)]
impl RecordingObserver {
    pub fn take(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl LevelObserver for RecordingObserver {
    fn on_level_loaded(
        &mut self,
        level: u32,
        title: &str,
        description: Option<&str>,
        nodes: &[NodeSpec],
        slot_count: usize,
    ) {
        self.events.push(Event::LevelLoaded {
            level,
            title: title.to_string(),
            description: description.map(str::to_string),
            node_ids: nodes.iter().map(|n| n.id.clone()).collect(),
            slot_count,
        });
    }

    fn on_node_placed(&mut self, slot: usize, node: &NodeSpec) {
        self.events.push(Event::NodePlaced {
            slot,
            node_id: node.id.clone(),
        });
    }

    fn on_evaluated(&mut self, pass: bool, message: &str) {
        self.events.push(Event::Evaluated {
            pass,
            message: message.to_string(),
        });
    }

    fn on_reset(&mut self) {
        self.events.push(Event::Reset);
    }
}

/// An engine over the built-in levels, started on level 1.
#[allow(dead_code)]
pub fn builtin_engine() -> Engine {
    Engine::builder(LevelCatalog::builtin())
        .build()
        .expect("built-in level 1 must load")
}

/// An engine over the built-in levels that records its notifications.
#[allow(dead_code)]
pub fn recording_engine(start_level: u32) -> Engine<RecordingObserver> {
    Engine::builder(LevelCatalog::builtin())
        .with_observer(RecordingObserver::default())
        .start_level(start_level)
        .build()
        .expect("built-in level must load")
}

/// Places `ids` into slots `0..ids.len()` in order.
#[allow(dead_code)]
pub fn place_all<O: LevelObserver>(engine: &mut Engine<O>, ids: &[&str]) {
    for (slot, id) in ids.iter().enumerate() {
        engine
            .place(slot, id)
            .unwrap_or_else(|e| panic!("placing '{}' in slot {} failed: {}", id, slot, e));
    }
}

/// A two-level catalog where the palette offers a decoy node.
#[allow(dead_code)]
pub fn create_decoy_catalog() -> LevelCatalog {
    LevelCatalog::from_levels(vec![
        LevelSpec::new(
            "Pick the right two",
            vec![
                NodeSpec::new("start", NodeKind::Trigger, "Start", "", "▶"),
                NodeSpec::new("decoy", NodeKind::Action, "Decoy", "never needed", "🪤"),
                NodeSpec::new("finish", NodeKind::Output, "Finish", "", "🏁"),
            ],
            &["start", "finish"],
        ),
        LevelSpec::new(
            "Single step",
            vec![NodeSpec::new("only", NodeKind::Model, "Only", "", "1")],
            &["only"],
        ),
    ])
    .expect("decoy catalog is valid")
}

/// A minimal catalog in the JSON catalog format, keyed by level number.
#[allow(dead_code)]
pub const NUMBERED_CATALOG_JSON: &str = r#"{
    "1": {
        "title": "First",
        "availableNodes": [
            { "id": "a", "type": "trigger", "title": "A", "subtitle": "first", "icon": "A" },
            { "id": "b", "type": "output", "title": "B", "subtitle": "second", "icon": "B" }
        ],
        "solution": ["a", "b"]
    },
    "2": {
        "title": "Second",
        "description": "Just one node",
        "availableNodes": [
            { "id": "c", "type": "condition", "title": "C" }
        ],
        "workflow": ["c"],
        "solution": ["c"]
    }
}"#;
