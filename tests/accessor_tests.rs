use std::time::Duration;

use lorekey::{
    Value,
    accessors::*,
    domain::{AnimationType, PlayerDirection, PlayerInventory, PlayerStatus},
};
use pretty_assertions::assert_eq;

fn doc(text: &str) -> Value {
    text.parse().unwrap()
}

fn sprite() -> Value {
    doc(r##"{
        "visible": true,
        "layer": -3,
        "frameCount": 16,
        "seed": 9223372036854775807,
        "hash": 18446744073709551615,
        "scale": 1.5,
        "huge": 1e300,
        "name": "townsfolk",
        "tags": ["npc", 7, true],
        "alias": "cain",
        "frames": [2, 9],
        "frame": 4,
        "rect": [0, 16, 64, 32],
        "area": [0.5, 1, 2.25, 3],
        "tint": "#FF8000",
        "shade": "#10203040",
        "fill": [1, 2, 3],
        "delay": 250,
        "fade": "1:02.5",
        "direction": "backLeft",
        "animation": "playOnce",
        "inventory": "stash",
        "status": "Walk"
    }"##)
}

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn test_bool_key() {
    let elem = sprite();
    assert!(get_bool_key(&elem, "visible", false));
    assert!(get_bool_key(&elem, "missing", true));
    assert!(!get_bool_key(&elem, "name", false));
}

#[test]
fn test_int_keys_are_exact() {
    let elem = sprite();
    assert_eq!(get_int_key(&elem, "layer", 0), -3);
    assert_eq!(get_int_key(&elem, "scale", 9), 9);
    assert_eq!(get_int_key(&elem, "seed", 9), 9);
    assert_eq!(get_uint_key(&elem, "frameCount", 0), 16);
    assert_eq!(get_uint_key(&elem, "layer", 5), 5);
    assert_eq!(get_int64_key(&elem, "seed", 0), i64::MAX);
    assert_eq!(get_int64_key(&elem, "hash", 1), 1);
    assert_eq!(get_uint64_key(&elem, "hash", 0), u64::MAX);
    assert_eq!(get_uint64_key(&elem, "layer", 2), 2);
}

#[test]
fn test_floating_keys() {
    let elem = sprite();
    assert_eq!(get_double_key(&elem, "scale", 0.0), 1.5);
    assert_eq!(get_double_key(&elem, "name", 2.0), 2.0);
    assert_eq!(get_float_key(&elem, "scale", 0.0), 1.5);
    assert_eq!(get_float_key(&elem, "huge", 3.0), 3.0);
}

#[test]
fn test_floating_keys_reject_integers() {
    let elem = sprite();
    assert_eq!(get_double_key(&elem, "frameCount", 0.5), 0.5);
    assert_eq!(get_float_key(&elem, "frameCount", 0.5), 0.5);
    assert_eq!(get_double_val(&Value::Unsigned(u64::MAX), 2.5), 2.5);
    assert_eq!(get_float_val(&Value::Float(16.0), 0.5), 16.0);
}

#[test]
fn test_string_keys() {
    let elem = sprite();
    assert_eq!(get_string_key(&elem, "name", ""), "townsfolk");
    assert_eq!(get_string_key(&elem, "layer", "none"), "none");
    assert_eq!(get_string_view_key(&elem, "alias", ""), "cain");
    assert_eq!(get_string_view_key(&elem, "missing", "fallback"), "fallback");
}

#[test]
fn test_string_vector_key() {
    let elem = sprite();
    assert_eq!(get_string_vector_key(&elem, "tags"), vec!["npc", "7", "true"]);
    assert_eq!(get_string_vector_key(&elem, "alias"), vec!["cain"]);
    assert!(get_string_vector_key(&elem, "layer").is_empty());
    assert!(get_string_vector_key(&elem, "missing").is_empty());
}

// ============================================================================
// Composites
// ============================================================================

#[test]
fn test_frames_key() {
    let elem = sprite();
    assert_eq!(get_frames_key(&elem, "frames", (0, 0)), (2, 9));
    assert_eq!(get_frames_key(&elem, "frame", (0, 0)), (4, 4));
    assert_eq!(get_frames_key(&elem, "layer", (1, 1)), (1, 1));
    assert_eq!(get_frames_key(&elem, "rect", (1, 1)), (1, 1));
}

#[test]
fn test_rect_keys() {
    let elem = sprite();
    assert_eq!(
        get_int_rect_key(&elem, "rect", IntRect::default()),
        IntRect { left: 0, top: 16, width: 64, height: 32 }
    );
    assert_eq!(get_int_rect_key(&elem, "area", IntRect::default()), IntRect::default());
    assert_eq!(
        get_float_rect_key(&elem, "area", FloatRect::default()),
        FloatRect { left: 0.5, top: 1.0, width: 2.25, height: 3.0 }
    );
    assert_eq!(get_float_rect_key(&elem, "frames", FloatRect::default()), FloatRect::default());
}

#[test]
fn test_color_key() {
    let elem = sprite();
    assert_eq!(get_color_key(&elem, "tint", Color::BLACK), Color::rgba(255, 128, 0, 255));
    assert_eq!(get_color_key(&elem, "shade", Color::BLACK), Color::rgba(16, 32, 48, 64));
    assert_eq!(get_color_key(&elem, "fill", Color::BLACK), Color::rgba(1, 2, 3, 255));
    assert_eq!(get_color_key(&elem, "name", Color::WHITE), Color::WHITE);
    assert_eq!(get_color_key(&elem, "rect", Color::TRANSPARENT), Color::rgba(0, 16, 64, 32));
    assert_eq!(get_color_val(&doc("[300, 0, 0]"), Color::WHITE), Color::WHITE);
}

#[test]
fn test_time_key() {
    let elem = sprite();
    assert_eq!(get_time_key(&elem, "delay", Duration::ZERO), Duration::from_millis(250));
    assert_eq!(get_time_key(&elem, "fade", Duration::ZERO), Duration::from_millis(62_500));
    assert_eq!(get_time_val(&doc(r#""1:00:00""#), Duration::ZERO), Duration::from_secs(3600));
    assert_eq!(get_time_val(&doc(r#""3.25""#), Duration::ZERO), Duration::from_millis(3250));
    assert_eq!(get_time_val(&doc(r#""soon""#), Duration::from_secs(1)), Duration::from_secs(1));
    assert_eq!(get_time_val(&doc("-5"), Duration::from_secs(1)), Duration::from_secs(1));
}

#[test]
fn test_keyword_keys() {
    let elem = sprite();
    assert_eq!(get_keyword_key(&elem, "direction", PlayerDirection::Front), PlayerDirection::BackLeft);
    assert_eq!(get_keyword_key(&elem, "animation", AnimationType::Looped), AnimationType::PlayOnce);
    assert_eq!(get_keyword_key(&elem, "inventory", PlayerInventory::Body), PlayerInventory::Stash);
    // keywords are case-sensitive
    assert_eq!(get_keyword_key(&elem, "status", PlayerStatus::Stand), PlayerStatus::Stand);
    assert_eq!(get_keyword_key(&elem, "missing", PlayerDirection::All), PlayerDirection::All);
}
