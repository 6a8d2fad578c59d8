//! Per-category anchor resolution.
//!
//! Given one frame's mapped detections and a slot configuration, derive the
//! anchor point, scale reference and rotation for that slot. Missing
//! keypoints are the normal case under partial occlusion and yield no
//! candidate rather than an error; the smoother's hold-last-value policy
//! covers the gap.

use crate::config::{PlacementConfig, ScaleConfig};
use crate::constants::{EPSILON, RING_PIP_WEIGHT};
use crate::detection::{DetectionResult, Handedness};
use crate::geometry::{self, Point3};
use crate::keypoints::{Keypoint, KeypointSet};
use crate::mapping::orientation_roll;
use crate::slot::{JewelryCategory, JewelrySlotConfig, Side, SlotKey};

/// A resolved anchor before temporal smoothing
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorCandidate {
    pub key: SlotKey,
    pub position: Point3,
    pub scale_factor: f64,
    pub rotation_degrees: f64,
}

/// Stateless per-category anchor resolution rules
#[derive(Debug, Clone)]
pub struct AnchorResolver {
    scale: ScaleConfig,
    min_confidence: f64,
}

impl AnchorResolver {
    #[must_use]
    pub fn new(config: &PlacementConfig) -> Self {
        Self {
            scale: config.scale.clone(),
            min_confidence: config.detection.min_confidence,
        }
    }

    /// Resolve anchor candidates for one slot from one frame's detections.
    ///
    /// Earrings yield two candidates (left and right ear); every other
    /// category yields zero or one. An empty result means the required
    /// keypoints were not detected this frame, or no scale reference could
    /// be established.
    #[must_use]
    pub fn resolve(
        &self,
        slot: &JewelrySlotConfig,
        detections: &[DetectionResult],
    ) -> Vec<AnchorCandidate> {
        match slot.category {
            JewelryCategory::Earring => self.resolve_earrings(slot, detections),
            JewelryCategory::Necklace => self.resolve_necklace(slot, detections),
            JewelryCategory::Ring => self.resolve_ring(slot, detections),
            JewelryCategory::Bracelet => {
                self.resolve_wrist_item(slot, detections, Keypoint::BraceletPosition)
            }
            JewelryCategory::Watch => {
                self.resolve_wrist_item(slot, detections, Keypoint::WatchPosition)
            }
        }
    }

    /// First face detection above the confidence floor
    fn select_face<'a>(
        &self,
        detections: &'a [DetectionResult],
    ) -> Option<(&'a KeypointSet, f64)> {
        detections.iter().find_map(|d| match d {
            DetectionResult::Face {
                keypoints,
                confidence,
                rotation_hint,
            } if *confidence >= self.min_confidence => {
                Some((keypoints, rotation_hint.map_or(0.0, |r| r.roll)))
            }
            _ => None,
        })
    }

    /// Pick a hand, preferring the configured handedness.
    ///
    /// When the preferred hand is absent, any available hand is used so the
    /// user still sees the item rather than nothing.
    fn select_hand<'a>(
        &self,
        detections: &'a [DetectionResult],
        preferred: Option<Handedness>,
    ) -> Option<&'a KeypointSet> {
        let hands = detections.iter().filter_map(|d| match d {
            DetectionResult::Hand {
                keypoints,
                handedness,
                confidence,
            } if *confidence >= self.min_confidence => Some((keypoints, *handedness)),
            _ => None,
        });

        let mut fallback = None;
        for (keypoints, handedness) in hands {
            if preferred.is_none() || preferred == Some(handedness) {
                return Some(keypoints);
            }
            if fallback.is_none() {
                fallback = Some(keypoints);
            }
        }
        fallback
    }

    fn resolve_earrings(
        &self,
        slot: &JewelrySlotConfig,
        detections: &[DetectionResult],
    ) -> Vec<AnchorCandidate> {
        let Some((keypoints, roll)) = self.select_face(detections) else {
            return Vec::new();
        };
        let (Some(left), Some(right)) = (
            keypoints.get(Keypoint::LeftEar),
            keypoints.get(Keypoint::RightEar),
        ) else {
            return Vec::new();
        };

        let scale = self.scale.earring_base * slot.size_adjustment;
        if scale <= EPSILON {
            return Vec::new();
        }
        let rotation = roll + slot.rotation_offset_degrees;

        // Same formula applied to each ear point
        [(Side::Left, left), (Side::Right, right)]
            .into_iter()
            .map(|(side, position)| AnchorCandidate {
                key: SlotKey::new(slot.item_id.clone(), side),
                position,
                scale_factor: scale,
                rotation_degrees: rotation,
            })
            .collect()
    }

    fn resolve_necklace(
        &self,
        slot: &JewelrySlotConfig,
        detections: &[DetectionResult],
    ) -> Vec<AnchorCandidate> {
        let Some((keypoints, roll)) = self.select_face(detections) else {
            return Vec::new();
        };
        let Some(neck) = keypoints.get(Keypoint::NeckBase) else {
            return Vec::new();
        };
        // Inter-ear distance stands in for the face/shoulder width
        let (Some(left), Some(right)) = (
            keypoints.get(Keypoint::LeftEar),
            keypoints.get(Keypoint::RightEar),
        ) else {
            return Vec::new();
        };

        let scale =
            geometry::distance(left, right) * slot.size_adjustment * self.scale.necklace_width_factor;
        if scale <= EPSILON {
            return Vec::new();
        }

        vec![AnchorCandidate {
            key: SlotKey::new(slot.item_id.clone(), Side::Center),
            position: neck,
            scale_factor: scale,
            rotation_degrees: roll + slot.rotation_offset_degrees,
        }]
    }

    fn resolve_ring(
        &self,
        slot: &JewelrySlotConfig,
        detections: &[DetectionResult],
    ) -> Vec<AnchorCandidate> {
        let Some(keypoints) = self.select_hand(detections, slot.preferred_hand) else {
            return Vec::new();
        };
        // Finger index was validated at configure time
        let Ok(finger) = slot.finger() else {
            return Vec::new();
        };
        let (mcp_name, pip_name) = finger.ring_joints();
        let (Some(mcp), Some(pip)) = (keypoints.get(mcp_name), keypoints.get(pip_name)) else {
            return Vec::new();
        };

        let scale = geometry::distance(mcp, pip) * slot.size_adjustment;
        if scale <= EPSILON {
            return Vec::new();
        }

        vec![AnchorCandidate {
            key: SlotKey::new(slot.item_id.clone(), Side::Center),
            position: geometry::blend(mcp, pip, RING_PIP_WEIGHT),
            scale_factor: scale,
            // Align with the finger axis
            rotation_degrees: geometry::angle_degrees(mcp, pip) + slot.rotation_offset_degrees,
        }]
    }

    fn resolve_wrist_item(
        &self,
        slot: &JewelrySlotConfig,
        detections: &[DetectionResult],
        anchor_name: Keypoint,
    ) -> Vec<AnchorCandidate> {
        let Some(keypoints) = self.select_hand(detections, slot.preferred_hand) else {
            return Vec::new();
        };
        let Some(position) = keypoints.get(anchor_name) else {
            return Vec::new();
        };
        // Wrist-to-pinky-MCP distance is the wrist-width proxy available
        // from the skeleton
        let (Some(wrist), Some(pinky_mcp)) = (
            keypoints.get(Keypoint::Wrist),
            keypoints.get(Keypoint::PinkyMcp),
        ) else {
            return Vec::new();
        };

        let factor = match slot.category {
            JewelryCategory::Watch => self.scale.watch_wrist_factor,
            _ => self.scale.bracelet_wrist_factor,
        };
        let scale = geometry::distance(wrist, pinky_mcp) * slot.size_adjustment * factor;
        if scale <= EPSILON {
            return Vec::new();
        }

        let roll = orientation_roll(keypoints).unwrap_or(0.0);

        vec![AnchorCandidate {
            key: SlotKey::new(slot.item_id.clone(), Side::Center),
            position,
            scale_factor: scale,
            rotation_degrees: roll + slot.rotation_offset_degrees,
        }]
    }
}
