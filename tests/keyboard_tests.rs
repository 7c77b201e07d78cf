mod common;

use common::{qwerty, BoardBuilder, KeyBuilder, EPS, SAMPLE_TEXT};
use keyeval::corpus::Corpus;
use keyeval::geometry::{KeyboardModel, LayoutModel, LogicalKey};
use keyeval::keyboard::{Finger, Hand, Keyboard, Row};
use std::collections::BTreeMap;
use std::sync::Arc;
use strum::IntoEnumIterator;

#[test]
fn test_keys_sorted_by_code() {
    let keyboard = BoardBuilder::new(1.0)
        .key(KeyBuilder::new("KeyZ", 0.0, 0.0).map(0, "z"))
        .key(KeyBuilder::new("KeyA", 1.0, 0.0).map(0, "a"))
        .key(KeyBuilder::new("KeyM", 2.0, 0.0).map(0, "m"))
        .build("");
    let codes: Vec<&str> = keyboard.keys().iter().map(|k| k.key_code.as_str()).collect();
    assert_eq!(codes, vec!["KeyA", "KeyM", "KeyZ"]);
}

#[test]
fn test_physical_key_without_logical_record() {
    let (mut model, layout) = BoardBuilder::new(1.0)
        .key(KeyBuilder::new("KeyA", 0.0, 0.0).map(0, "a"))
        .models();
    let mut extra = model.keyboard["KeyA"].clone();
    extra.x = 5.0;
    model.keyboard.insert("F13".to_string(), extra);

    let keyboard = Keyboard::new(&model, &layout, Arc::new(Corpus::from_text("t", "a"))).unwrap();
    let f13 = keyboard.key_by_code("F13").unwrap();
    assert!(f13.mappings.is_empty());
    assert_eq!(keyboard.key_usage(f13), 0);
    assert_eq!(keyboard.usage(), 1);
}

#[test]
fn test_logical_record_without_physical_key_is_ignored() {
    let (model, mut layout) = BoardBuilder::new(1.0)
        .key(KeyBuilder::new("KeyA", 0.0, 0.0).map(0, "a"))
        .models();
    layout.layout.insert(
        "Ghost".to_string(),
        LogicalKey {
            mappings: BTreeMap::from([(0, "g".to_string())]),
            is_modifier: false,
        },
    );

    let keyboard = Keyboard::new(&model, &layout, Arc::new(Corpus::from_text("t", "ag"))).unwrap();
    assert_eq!(keyboard.keys().len(), 1);
    assert!(keyboard.key_by_mapping('g').is_none());
    assert_eq!(keyboard.usage(), 1);
}

#[test]
fn test_duplicate_mappings_reported_and_later_wins() {
    let keyboard = BoardBuilder::new(1.0)
        .key(KeyBuilder::new("KeyA", 0.0, 0.0).map(0, "x"))
        .key(KeyBuilder::new("KeyB", 1.0, 0.0).map(0, "x"))
        .key(KeyBuilder::new("KeyC", 2.0, 0.0).map(0, "c").map(1, "c"))
        .build("x");

    assert_eq!(keyboard.duplicate_mappings(), &['x']);
    assert_eq!(keyboard.key_by_mapping('x').unwrap().key_code, "KeyB");
}

#[test]
fn test_modifier_labels_are_not_duplicates() {
    let keyboard = BoardBuilder::new(1.0)
        .key(KeyBuilder::new("AltLeft", 0.0, 0.0).map(0, "x").modifier())
        .key(KeyBuilder::new("KeyX", 1.0, 0.0).map(0, "x"))
        .build("x");
    assert!(keyboard.duplicate_mappings().is_empty());
    assert_eq!(keyboard.key_by_mapping('x').unwrap().key_code, "KeyX");
    assert_eq!(keyboard.chars(), "x");
}

#[test]
fn test_frequencies_close_over_fingers_rows_and_hands() {
    let keyboard = qwerty(SAMPLE_TEXT);
    assert!(keyboard.usage() > 0);

    let fingers: f64 = Finger::iter().map(|f| keyboard.finger_frequency(f)).sum();
    let rows: f64 = Row::iter().map(|r| keyboard.row_frequency(r)).sum();
    let hands: f64 = Hand::iter().map(|h| keyboard.hand_frequency(h)).sum();
    assert!((fingers - 1.0).abs() < 1e-9);
    assert!((rows - 1.0).abs() < 1e-9);
    assert!((hands - 1.0).abs() < 1e-9);

    let keys: u64 = keyboard.keys().iter().map(|k| keyboard.key_usage(k)).sum();
    assert_eq!(keys, keyboard.usage());
}

#[test]
fn test_usage_counts() {
    let keyboard = qwerty("Aa ;q");
    let a = keyboard.key_by_mapping('a').unwrap();
    assert_eq!(a.key_code, "KeyA");
    assert_eq!(keyboard.key_usage(a), 2);
    assert_eq!(keyboard.key_max_usage(), 2);
    assert_eq!(keyboard.usage(), 5);
    assert_eq!(keyboard.finger_usage(Finger::LeftPinky), 3);
    assert_eq!(keyboard.finger_usage(Finger::LeftThumb), 1);
    assert_eq!(keyboard.row_usage(Row::Home), 3);
    assert_eq!(keyboard.hand_usage(Hand::Right), 1);
    assert!((keyboard.key_frequency(a) - 0.4).abs() < EPS);
}

#[test]
fn test_empty_corpus_frequencies_are_zero() {
    let keyboard = qwerty("");
    assert_eq!(keyboard.usage(), 0);
    assert_eq!(keyboard.key_max_usage(), 0);
    for f in Finger::iter() {
        assert_eq!(keyboard.finger_frequency(f), 0.0);
    }
    for r in Row::iter() {
        assert_eq!(keyboard.row_frequency(r), 0.0);
    }
    assert_eq!(keyboard.hand_frequency(Hand::Left), 0.0);
}

#[test]
fn test_chars_and_home_keys() {
    let keyboard = qwerty("");
    let chars = keyboard.chars();
    assert!(chars.contains('q'));
    assert!(chars.contains('Q'));
    assert!(chars.contains('7'));
    assert!(chars.contains(' '));
    assert_eq!(chars.matches('s').count(), 1);

    let homes = keyboard.keys_is_home();
    assert_eq!(homes.len(), 9);
    assert!(homes.iter().any(|k| k.key_code == "KeyF"));
    assert!(homes.iter().any(|k| k.key_code == "Space"));
}

#[test]
fn test_info_names_everything() {
    let keyboard = qwerty("abc");
    assert_eq!(keyboard.info(), "Keyboard: ansi\nLayout: qwerty\nCorpus: test");
}

#[test]
fn test_missing_physical_field_fails() {
    let raw = r#"{
        "name": "broken",
        "keyboard": {
            "KeyA": {"x": 0, "y": 0, "w": 40, "h": 40, "finger": 1}
        }
    }"#;
    assert!(serde_json::from_str::<KeyboardModel>(raw).is_err());

    let bad_finger = r#"{
        "name": "broken",
        "keyboard": {
            "KeyA": {"x": 0, "y": 0, "w": 40, "h": 40, "row": "C", "finger": 11}
        }
    }"#;
    assert!(serde_json::from_str::<KeyboardModel>(bad_finger).is_err());
}

#[test]
fn test_models_load_from_json_files() {
    let dir = tempfile::tempdir().unwrap();
    let kb_path = dir.path().join("kb.json");
    let layout_path = dir.path().join("layout.json");
    std::fs::write(
        &kb_path,
        r#"{
            "name": "mini",
            "keyboard": {
                "KeyA": {"x": 0, "y": 0, "w": 40, "h": 40, "row": "C", "finger": 1, "is_home": true},
                "KeyB": {"x": 40, "y": 0, "w": 40, "h": 40, "row": "C", "finger": 2}
            }
        }"#,
    )
    .unwrap();
    std::fs::write(
        &layout_path,
        r#"{"name": "ab", "layout": {"KeyA": {"mappings": {"0": "a"}}, "KeyB": {"mappings": {"0": "b"}}}}"#,
    )
    .unwrap();

    let model = KeyboardModel::load_from_file(&kb_path).unwrap();
    let layout = LayoutModel::load_from_file(&layout_path).unwrap();
    assert_eq!(model.one_unit, 40.0);

    let keyboard = Keyboard::new(&model, &layout, Arc::new(Corpus::from_text("t", "abba"))).unwrap();
    assert_eq!(keyboard.name(), "mini");
    assert_eq!(keyboard.layout_name(), "ab");
    assert_eq!(keyboard.usage(), 4);
    assert_eq!(keyboard.key_by_code("KeyA").unwrap().finger, Finger::LeftPinky);
}
