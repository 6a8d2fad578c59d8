//! Hand skeleton index-to-name mapping.

use crate::constants::{
    RING_MCP_WEIGHT, RING_PIP_WEIGHT, WATCH_PINKY_WEIGHT, WATCH_WRIST_WEIGHT,
};
use crate::geometry::{self, Point3};
use crate::keypoints::{Keypoint, KeypointSet};
use crate::{Error, Result};

/// The 21 MediaPipe-style hand landmarks in detector order
const HAND_INDEX_TABLE: [Keypoint; 21] = [
    Keypoint::Wrist,
    Keypoint::ThumbCmc,
    Keypoint::ThumbMcp,
    Keypoint::ThumbIp,
    Keypoint::ThumbTip,
    Keypoint::IndexMcp,
    Keypoint::IndexPip,
    Keypoint::IndexDip,
    Keypoint::IndexTip,
    Keypoint::MiddleMcp,
    Keypoint::MiddlePip,
    Keypoint::MiddleDip,
    Keypoint::MiddleTip,
    Keypoint::RingMcp,
    Keypoint::RingPip,
    Keypoint::RingDip,
    Keypoint::RingTip,
    Keypoint::PinkyMcp,
    Keypoint::PinkyPip,
    Keypoint::PinkyDip,
    Keypoint::PinkyTip,
];

/// Map raw hand landmarks to named keypoints.
///
/// Derives the jewelry anchor composites when their source joints are
/// present:
/// - `RingPosition` = 0.3 × ringMcp + 0.7 × ringPip
/// - `BraceletPosition` = wrist
/// - `WatchPosition` = 0.8 × wrist + 0.2 × pinkyMcp
///
/// A slice shorter than 21 points yields a partial set.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] when `landmarks` is empty.
pub fn map_hand_landmarks(landmarks: &[Point3]) -> Result<KeypointSet> {
    if landmarks.is_empty() {
        return Err(Error::MalformedInput(
            "hand landmark array is empty".to_string(),
        ));
    }

    let mut set = KeypointSet::new();
    for (index, name) in HAND_INDEX_TABLE.iter().enumerate() {
        if let Some(point) = landmarks.get(index) {
            set.insert(*name, *point);
        }
    }

    if let (Some(mcp), Some(pip)) = (set.get(Keypoint::RingMcp), set.get(Keypoint::RingPip)) {
        // blend(a, b, t) weights b by t, so t is the PIP weight
        debug_assert!((RING_MCP_WEIGHT + RING_PIP_WEIGHT - 1.0).abs() < f64::EPSILON);
        set.insert(Keypoint::RingPosition, geometry::blend(mcp, pip, RING_PIP_WEIGHT));
    }

    if let Some(wrist) = set.get(Keypoint::Wrist) {
        set.insert(Keypoint::BraceletPosition, wrist);
        if let Some(pinky_mcp) = set.get(Keypoint::PinkyMcp) {
            debug_assert!((WATCH_WRIST_WEIGHT + WATCH_PINKY_WEIGHT - 1.0).abs() < f64::EPSILON);
            set.insert(
                Keypoint::WatchPosition,
                geometry::blend(wrist, pinky_mcp, WATCH_PINKY_WEIGHT),
            );
        }
    }

    Ok(set)
}

/// Roll angle of the hand in the image plane, in degrees.
///
/// Uses the wrist-to-middle-MCP axis as the hand's long axis. `None` when
/// either joint is missing.
#[must_use]
pub fn orientation_roll(set: &KeypointSet) -> Option<f64> {
    let wrist = set.get(Keypoint::Wrist)?;
    let middle_mcp = set.get(Keypoint::MiddleMcp)?;
    Some(geometry::angle_degrees(wrist, middle_mcp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EPSILON, NUM_HAND_LANDMARKS};

    fn full_hand() -> Vec<Point3> {
        let mut hand = vec![Point3::new(0.5, 0.5); NUM_HAND_LANDMARKS];
        hand[0] = Point3::new(0.5, 0.8); // wrist
        hand[9] = Point3::new(0.5, 0.5); // middle MCP
        hand[13] = Point3::new(0.0, 0.0); // ring MCP
        hand[14] = Point3::new(10.0, 0.0); // ring PIP
        hand[17] = Point3::new(0.6, 0.75); // pinky MCP
        hand
    }

    #[test]
    fn test_full_hand_maps_all_joints() {
        let set = map_hand_landmarks(&full_hand()).unwrap();
        assert!(set.contains_all(&HAND_INDEX_TABLE));
        assert_eq!(set.len(), NUM_HAND_LANDMARKS + 3);
    }

    #[test]
    fn test_ring_position_blend() {
        let set = map_hand_landmarks(&full_hand()).unwrap();
        let ring = set.get(Keypoint::RingPosition).unwrap();
        // 0.3 * (0,0) + 0.7 * (10,0)
        assert!((ring.x - 7.0).abs() < EPSILON);
        assert!(ring.y.abs() < EPSILON);
    }

    #[test]
    fn test_watch_position_blend() {
        let set = map_hand_landmarks(&full_hand()).unwrap();
        let watch = set.get(Keypoint::WatchPosition).unwrap();
        // 0.8 * wrist(0.5, 0.8) + 0.2 * pinkyMcp(0.6, 0.75)
        assert!((watch.x - 0.52).abs() < EPSILON);
        assert!((watch.y - 0.79).abs() < EPSILON);
    }

    #[test]
    fn test_bracelet_position_is_wrist() {
        let set = map_hand_landmarks(&full_hand()).unwrap();
        assert_eq!(
            set.get(Keypoint::BraceletPosition),
            set.get(Keypoint::Wrist)
        );
    }

    #[test]
    fn test_wrist_only_input() {
        // A single point still maps the wrist and its bracelet alias
        let set = map_hand_landmarks(&[Point3::new(0.5, 0.8)]).unwrap();
        assert!(set.get(Keypoint::Wrist).is_some());
        assert!(set.get(Keypoint::BraceletPosition).is_some());
        assert!(set.get(Keypoint::RingPosition).is_none());
        assert!(set.get(Keypoint::WatchPosition).is_none());
    }

    #[test]
    fn test_empty_input_is_malformed() {
        assert!(matches!(
            map_hand_landmarks(&[]),
            Err(crate::Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_orientation_roll() {
        let set = map_hand_landmarks(&full_hand()).unwrap();
        // Wrist (0.5, 0.8) -> middle MCP (0.5, 0.5): straight up in image
        // coordinates (negative y), so -90 degrees
        let roll = orientation_roll(&set).unwrap();
        assert!((roll + 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_orientation_roll_missing_joint() {
        let set = map_hand_landmarks(&[Point3::new(0.5, 0.8)]).unwrap();
        assert!(orientation_roll(&set).is_none());
    }
}
