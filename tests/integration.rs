//! Integration tests for FlowQuest
//!
//! End-to-end playthroughs across levels, driven the way a front-end would.
mod common;
use common::*;
use flowquest::prelude::*;

#[test]
fn test_full_playthrough_of_builtin_levels() {
    let mut engine = recording_engine(1);
    let catalog = LevelCatalog::builtin();

    loop {
        let solution = engine.level().solution.clone();
        let ids: Vec<&str> = solution.iter().map(String::as_str).collect();
        place_all(&mut engine, &ids);
        assert!(engine.evaluate().pass);

        if !engine.can_advance() {
            break;
        }
        engine.advance().unwrap();
    }

    assert_eq!(engine.current_level(), catalog.max_level());
    let loads = engine
        .observer()
        .events
        .iter()
        .filter(|e| matches!(e, Event::LevelLoaded { .. }))
        .count();
    assert_eq!(loads, 3);
}

#[test]
fn test_mistake_reset_and_retry() {
    let mut engine = builtin_engine();
    engine.select_level(2).unwrap();

    place_all(
        &mut engine,
        &["form-trigger", "send-message", "if-condition", "no-operation"],
    );
    let verdict = engine.evaluate();
    assert!(!verdict.pass);
    assert_eq!(
        VerdictFormatter::format_sequence(&verdict),
        "form-trigger -> send-message (expected if-condition) -> if-condition (expected send-message) -> no-operation"
    );

    engine.reset();
    place_all(
        &mut engine,
        &["form-trigger", "if-condition", "send-message", "no-operation"],
    );
    assert!(engine.evaluate().pass);
    assert!(engine.can_advance());
}

#[test]
fn test_level_selection_discards_progress() {
    let mut engine = builtin_engine();
    place_all(&mut engine, &["set-var", "function", "output"]);
    engine.evaluate();

    engine.select_level(1).unwrap();
    assert!(engine.placement().is_empty());
    assert!(!engine.can_advance());
}

#[test]
fn test_playthrough_from_json_catalog() {
    let catalog = LevelCatalog::from_json(NUMBERED_CATALOG_JSON).unwrap();
    let mut engine = Engine::builder(catalog).build().unwrap();

    engine.place(1, "b").unwrap();
    engine.place(0, "a").unwrap();
    assert!(engine.evaluate().pass);
    assert_eq!(engine.advance(), Ok(2));

    engine.place(0, "c").unwrap();
    assert!(engine.evaluate().pass);
    assert!(!engine.can_advance());
    assert_eq!(engine.progress(), (2, 2));
}

#[test]
fn test_level_descriptions_reach_the_observer() {
    let catalog = LevelCatalog::from_json(NUMBERED_CATALOG_JSON).unwrap();
    let mut engine = Engine::builder(catalog)
        .with_observer(RecordingObserver::default())
        .build()
        .unwrap();
    engine.select_level(2).unwrap();

    let descriptions: Vec<Option<String>> = engine
        .observer()
        .events
        .iter()
        .filter_map(|e| match e {
            Event::LevelLoaded { description, .. } => Some(description.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(descriptions, vec![None, Some("Just one node".to_string())]);
}
