//! Configuration management for the placement engine

use crate::constants::{
    DEFAULT_BRACELET_WRIST_FACTOR, DEFAULT_EARRING_BASE_SCALE, DEFAULT_MIN_CONFIDENCE,
    DEFAULT_NECKLACE_WIDTH_FACTOR, DEFAULT_NECK_DROP_FRACTION, DEFAULT_SMOOTHING_ALPHA,
    DEFAULT_STALENESS_THRESHOLD, DEFAULT_WATCH_WRIST_FACTOR,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placement engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlacementConfig {
    /// Temporal smoothing configuration
    pub smoothing: SmoothingConfig,

    /// Per-category scale multipliers
    pub scale: ScaleConfig,

    /// Face mapping configuration
    pub face: FaceMappingConfig,

    /// Detection filtering configuration
    pub detection: DetectionConfig,
}

/// Temporal smoothing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Exponential smoothing factor: weight on the previous value (0..1).
    /// Higher values damp harder.
    pub alpha: f64,

    /// Consecutive missed frames before a held transform is flagged stale
    pub staleness_threshold: u32,
}

/// Per-category scale multipliers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Canvas-independent base scale for earrings
    pub earring_base: f64,

    /// Necklace scale multiplier over the estimated face width. Necklaces
    /// read wider than other items due to their draped shape.
    pub necklace_width_factor: f64,

    /// Bracelet scale multiplier over the estimated wrist width
    pub bracelet_wrist_factor: f64,

    /// Watch scale multiplier over the estimated wrist width
    pub watch_wrist_factor: f64,
}

/// Face mapping parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceMappingConfig {
    /// Fraction of the inter-ear distance the derived neck base point is
    /// pushed below the ear midpoint
    pub neck_drop_fraction: f64,
}

/// Detection filtering parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Detections with confidence below this are ignored (0.0-1.0)
    pub min_confidence: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_SMOOTHING_ALPHA,
            staleness_threshold: DEFAULT_STALENESS_THRESHOLD,
        }
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            earring_base: DEFAULT_EARRING_BASE_SCALE,
            necklace_width_factor: DEFAULT_NECKLACE_WIDTH_FACTOR,
            bracelet_wrist_factor: DEFAULT_BRACELET_WRIST_FACTOR,
            watch_wrist_factor: DEFAULT_WATCH_WRIST_FACTOR,
        }
    }
}

impl Default for FaceMappingConfig {
    fn default() -> Self {
        Self {
            neck_drop_fraction: DEFAULT_NECK_DROP_FRACTION,
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl PlacementConfig {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Config`] when it does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when serialization fails and
    /// [`Error::Io`] when the file cannot be written.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first out-of-range field.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.smoothing.alpha) {
            return Err(Error::Config(
                "Smoothing alpha must be in [0.0, 1.0)".to_string(),
            ));
        }
        if self.smoothing.staleness_threshold == 0 {
            return Err(Error::Config(
                "Staleness threshold must be greater than 0".to_string(),
            ));
        }
        if self.scale.earring_base <= 0.0
            || self.scale.necklace_width_factor <= 0.0
            || self.scale.bracelet_wrist_factor <= 0.0
            || self.scale.watch_wrist_factor <= 0.0
        {
            return Err(Error::Config(
                "Scale multipliers must be greater than 0".to_string(),
            ));
        }
        if self.face.neck_drop_fraction < 0.0 {
            return Err(Error::Config(
                "Neck drop fraction must be non-negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.detection.min_confidence) {
            return Err(Error::Config(
                "Minimum confidence must be between 0.0 and 1.0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Jewelry placement configuration

# Temporal smoothing
smoothing:
  alpha: 0.7
  staleness_threshold: 10

# Per-category scale multipliers
scale:
  earring_base: 1.0
  necklace_width_factor: 1.5
  bracelet_wrist_factor: 1.2
  watch_wrist_factor: 1.5

# Face mapping
face:
  neck_drop_fraction: 0.8

# Detection filtering
detection:
  min_confidence: 0.0
"#;
