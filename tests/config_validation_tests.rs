//! Tests for configuration and slot validation

use jewelry_placement::config::{PlacementConfig, EXAMPLE_CONFIG};
use jewelry_placement::detection::Handedness;
use jewelry_placement::pipeline::PlacementPipeline;
use jewelry_placement::slot::{JewelryCategory, JewelrySlotConfig};
use jewelry_placement::Error;

#[test]
fn test_pipeline_rejects_invalid_config() {
    let mut config = PlacementConfig::default();
    config.smoothing.alpha = 1.5;
    assert!(matches!(PlacementPipeline::new(config), Err(Error::Config(_))));
}

#[test]
fn test_configure_surfaces_bad_finger_synchronously() {
    let mut pipeline = PlacementPipeline::with_defaults().unwrap();
    let mut slot = JewelrySlotConfig::new("ring-01", JewelryCategory::Ring);
    slot.finger_index = Some(5);
    let result = pipeline.configure(vec![slot]);
    assert!(matches!(result, Err(Error::InvalidSlotConfig(_))));
}

#[test]
fn test_ring_without_finger_index_uses_documented_default() {
    // A Ring slot without a finger index defaults to the ring finger
    // rather than erroring
    let mut pipeline = PlacementPipeline::with_defaults().unwrap();
    let slot = JewelrySlotConfig::new("ring-01", JewelryCategory::Ring);
    assert!(pipeline.configure(vec![slot]).is_ok());
}

#[test]
fn test_negative_size_adjustment_rejected() {
    let mut pipeline = PlacementPipeline::with_defaults().unwrap();
    let mut slot = JewelrySlotConfig::new("ear-01", JewelryCategory::Earring);
    slot.size_adjustment = -0.5;
    assert!(pipeline.configure(vec![slot]).is_err());
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("placement.yaml");

    let mut config = PlacementConfig::default();
    config.smoothing.alpha = 0.6;
    config.scale.watch_wrist_factor = 2.0;
    config.to_file(&path).unwrap();

    let loaded = PlacementConfig::from_file(&path).unwrap();
    assert_eq!(loaded.smoothing.alpha, 0.6);
    assert_eq!(loaded.scale.watch_wrist_factor, 2.0);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_missing_config_file_is_io_error() {
    let result = PlacementConfig::from_file("/nonexistent/placement.yaml");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_example_config_is_valid() {
    let config: PlacementConfig = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn test_catalog_yaml_slot_list() {
    // The shape a jewelry catalog hands the pipeline
    let yaml = r"
- item_id: ear-19
  category: earring
  size_adjustment: 1.25
- item_id: watch-03
  category: watch
  preferred_hand: Left
- item_id: ring-07
  category: ring
  finger_index: 2
  smoothing: false
";
    let slots: Vec<JewelrySlotConfig> = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[1].preferred_hand, Some(Handedness::Left));

    let mut pipeline = PlacementPipeline::with_defaults().unwrap();
    assert!(pipeline.configure(slots).is_ok());
}
