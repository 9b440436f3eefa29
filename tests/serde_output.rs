//! Serialized form of segmentation output.

#![cfg(feature = "serde")]

use driftcut::{Segment, SplitterConfig};

#[test]
fn segment_json_shape() {
    let seg = Segment::triggered(vec!["A".into(), "B".into()], 0, 0.25);
    let json = serde_json::to_value(&seg).unwrap();

    assert_eq!(json["docs"], serde_json::json!(["A", "B"]));
    assert_eq!(json["start"], 0);
    assert_eq!(json["triggered_score"], 0.25);

    let tail = Segment::trailing(vec!["C".into()], 2);
    let json = serde_json::to_value(&tail).unwrap();
    assert!(json["triggered_score"].is_null());

    let back: Segment = serde_json::from_value(json).unwrap();
    assert_eq!(back, tail);
}

#[test]
fn config_fills_defaults() {
    let config: SplitterConfig = serde_json::from_str(r#"{"score_threshold": 0.6}"#).unwrap();
    assert_eq!(config.name, "cumulative_similarity_splitter");
    assert_eq!(config.score_threshold, 0.6);
}
