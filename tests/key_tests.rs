mod common;

use common::{BoardBuilder, KeyBuilder, EPS};
use keyeval::corpus::Corpus;
use keyeval::keyboard::{Finger, Hand, Row};
use rstest::rstest;

#[test]
fn test_center_and_visual_center() {
    let plain = KeyBuilder::new("KeyA", 10.0, 20.0).size(2.0, 4.0).build();
    assert_eq!(plain.center(), (11.0, 22.0));
    assert_eq!(plain.visual_center(), (11.0, 22.0));

    let enter = KeyBuilder::new("Enter", 10.0, 20.0).size(2.0, 4.0).notch(1.0, 2.0).build();
    assert_eq!(enter.center(), (11.0, 22.0));
    assert_eq!(enter.visual_center(), (11.0, 21.0));
}

#[rstest]
#[case(0, Some("a"))]
#[case(1, Some("A"))]
#[case(2, Some("A"))]
#[case(3, Some("ä"))]
#[case(7, Some("ä"))]
fn test_mapping_falls_back_to_lower_layers(#[case] layer: u8, #[case] expected: Option<&str>) {
    let key = KeyBuilder::new("KeyA", 0.0, 0.0)
        .map(0, "a")
        .map(1, "A")
        .map(3, "ä")
        .build();
    assert_eq!(key.mapping(layer), expected);
}

#[test]
fn test_mapping_single_layer_fallback() {
    let key = KeyBuilder::new("KeyA", 0.0, 0.0).map(0, "a").build();
    assert_eq!(key.mapping(1), Some("a"));
}

#[test]
fn test_mapping_without_base_layer() {
    let key = KeyBuilder::new("KeyA", 0.0, 0.0).map(2, "x").build();
    assert_eq!(key.mapping(0), None);
    assert_eq!(key.mapping(1), None);
    assert_eq!(key.mapping(2), Some("x"));
}

#[test]
fn test_layer_usage() {
    let corpus = Corpus::from_text("t", "aaAx");
    let key = KeyBuilder::new("KeyA", 0.0, 0.0).map(0, "a").map(1, "A").build();
    assert_eq!(key.layer_usage(0, &corpus), 2);
    assert_eq!(key.layer_usage(1, &corpus), 1);
    assert_eq!(key.usage(&corpus), 3);

    let shift = KeyBuilder::new("ShiftLeft", 0.0, 0.0).map(0, "x").modifier().build();
    assert_eq!(shift.layer_usage(0, &corpus), 0);
    assert_eq!(shift.usage(&corpus), 0);

    let named = KeyBuilder::new("Enter", 0.0, 0.0).map(0, "enter").build();
    assert_eq!(named.usage(&corpus), 0);

    let unmapped = KeyBuilder::new("F1", 0.0, 0.0).build();
    assert_eq!(unmapped.usage(&corpus), 0);
}

#[test]
fn test_frequency_against_keyboard_total() {
    let keyboard = BoardBuilder::new(1.0)
        .key(KeyBuilder::new("KeyA", 0.0, 0.0).map(0, "a").map(1, "A"))
        .key(KeyBuilder::new("KeyB", 1.0, 0.0).map(0, "b"))
        .build("aAbb");

    let a = keyboard.key_by_code("KeyA").unwrap();
    let b = keyboard.key_by_code("KeyB").unwrap();
    assert!((a.frequency(&keyboard) - 0.5).abs() < EPS);
    assert!((b.frequency(&keyboard) - 0.5).abs() < EPS);
    assert!((a.layer_frequency(1, &keyboard) - 0.25).abs() < EPS);
}

#[test]
fn test_frequency_empty_corpus_is_zero() {
    let keyboard = BoardBuilder::new(1.0)
        .key(KeyBuilder::new("KeyA", 0.0, 0.0).map(0, "a"))
        .build("");
    let a = keyboard.key_by_code("KeyA").unwrap();
    assert_eq!(a.frequency(&keyboard), 0.0);
    assert_eq!(a.layer_frequency(0, &keyboard), 0.0);
}

#[test]
fn test_distance_between_centers() {
    let a = KeyBuilder::new("A", 0.0, 0.0).build();
    let b = KeyBuilder::new("B", 3.0, 4.0).size(1.0, 1.0).build();
    assert!((a.distance_to(&b) - 5.0).abs() < EPS);
    assert!((b.distance_to(&a) - 5.0).abs() < EPS);
    assert_eq!(a.distance_to(&a), 0.0);
}

#[test]
fn test_hand_from_finger() {
    let left = KeyBuilder::new("A", 0.0, 0.0).finger(5).row(Row::Space).build();
    let right = KeyBuilder::new("B", 0.0, 0.0).finger(6).build();
    assert_eq!(left.finger, Finger::LeftThumb);
    assert_eq!(left.hand(), Hand::Left);
    assert_eq!(right.hand(), Hand::Right);
}
