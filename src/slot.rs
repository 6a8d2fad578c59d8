//! Jewelry slot configuration and the anchor transform output type.

use crate::detection::Handedness;
use crate::geometry::Point3;
use crate::keypoints::Keypoint;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Jewelry categories with distinct anchor-resolution rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JewelryCategory {
    Earring,
    Necklace,
    Ring,
    Bracelet,
    Watch,
}

/// Fingers indexed the way hand-pose catalogs index them (0 = thumb)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// Build from a catalog finger index (0..=4)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSlotConfig`] for indices outside 0..=4.
    pub fn from_index(index: u8) -> Result<Self> {
        match index {
            0 => Ok(Self::Thumb),
            1 => Ok(Self::Index),
            2 => Ok(Self::Middle),
            3 => Ok(Self::Ring),
            4 => Ok(Self::Pinky),
            other => Err(Error::InvalidSlotConfig(format!(
                "finger index must be 0..=4, got {other}"
            ))),
        }
    }

    /// The two joints a ring anchors between.
    ///
    /// The thumb has no PIP; its IP joint plays the same role.
    #[must_use]
    pub fn ring_joints(&self) -> (Keypoint, Keypoint) {
        match self {
            Self::Thumb => (Keypoint::ThumbMcp, Keypoint::ThumbIp),
            Self::Index => (Keypoint::IndexMcp, Keypoint::IndexPip),
            Self::Middle => (Keypoint::MiddleMcp, Keypoint::MiddlePip),
            Self::Ring => (Keypoint::RingMcp, Keypoint::RingPip),
            Self::Pinky => (Keypoint::PinkyMcp, Keypoint::PinkyPip),
        }
    }
}

/// Which rendered element of a slot a transform belongs to.
///
/// Only earrings fan out to left/right; everything else is `Center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Center,
}

/// Smoother key: the jewelry item plus the rendered side.
///
/// Keying by item id means switching items never blends positions held
/// over from the previous item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub item_id: String,
    pub side: Side,
}

impl SlotKey {
    #[must_use]
    pub fn new(item_id: impl Into<String>, side: Side) -> Self {
        Self {
            item_id: item_id.into(),
            side,
        }
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:?}", self.item_id, self.side)
    }
}

/// Per-item placement configuration, supplied by the jewelry catalog.
///
/// Immutable once handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JewelrySlotConfig {
    /// Catalog id of the jewelry item
    pub item_id: String,

    /// Category selecting the anchor-resolution rule
    pub category: JewelryCategory,

    /// Preferred hand for hand-anchored categories. When that hand is not
    /// detected, any available hand is used instead.
    #[serde(default)]
    pub preferred_hand: Option<Handedness>,

    /// Finger index for rings (0 = thumb .. 4 = pinky). Defaults to 3, the
    /// ring finger.
    #[serde(default)]
    pub finger_index: Option<u8>,

    /// Per-item scale multiplier from the catalog
    #[serde(default = "default_size_adjustment")]
    pub size_adjustment: f64,

    /// Static rotation offset in degrees, applied on top of the resolved
    /// rotation
    #[serde(default)]
    pub rotation_offset_degrees: f64,

    /// Whether temporal smoothing applies to this slot
    #[serde(default = "default_smoothing")]
    pub smoothing: bool,
}

fn default_size_adjustment() -> f64 {
    1.0
}

fn default_smoothing() -> bool {
    true
}

impl JewelrySlotConfig {
    /// Minimal config for a category, catalog defaults for the rest
    #[must_use]
    pub fn new(item_id: impl Into<String>, category: JewelryCategory) -> Self {
        Self {
            item_id: item_id.into(),
            category,
            preferred_hand: None,
            finger_index: None,
            size_adjustment: 1.0,
            rotation_offset_degrees: 0.0,
            smoothing: true,
        }
    }

    /// The ring finger for this slot, falling back to the documented
    /// default (index 3) when the catalog omits it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSlotConfig`] for an out-of-range index.
    pub fn finger(&self) -> Result<Finger> {
        Finger::from_index(self.finger_index.unwrap_or(3))
    }

    /// Validate catalog input before the pipeline accepts it
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSlotConfig`] when a field is out of range
    /// for the slot's category.
    pub fn validate(&self) -> Result<()> {
        if self.item_id.is_empty() {
            return Err(Error::InvalidSlotConfig("item_id is empty".to_string()));
        }
        if self.size_adjustment <= 0.0 || !self.size_adjustment.is_finite() {
            return Err(Error::InvalidSlotConfig(format!(
                "size_adjustment must be a positive finite number, got {}",
                self.size_adjustment
            )));
        }
        if !self.rotation_offset_degrees.is_finite() {
            return Err(Error::InvalidSlotConfig(
                "rotation_offset_degrees must be finite".to_string(),
            ));
        }
        if self.category == JewelryCategory::Ring {
            // Surface a bad finger index at configure time, not mid-frame
            self.finger()?;
        }
        Ok(())
    }
}

/// Resolved placement for one rendered jewelry element.
///
/// Positions are in normalized detector space; the renderer scales to its
/// own viewport. Recomputed every processed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorTransform {
    pub slot: SlotKey,
    pub position: Point3,
    /// Always > 0; a resolver that cannot establish scale emits nothing
    pub scale_factor: f64,
    pub rotation_degrees: f64,
    /// Held from a previous frame past the staleness threshold; renderers
    /// should fade this out rather than show a frozen ghost
    pub stale: bool,
}
