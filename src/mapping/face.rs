//! Face mesh index-to-name mapping.

use crate::geometry::{self, Point3};
use crate::keypoints::{Keypoint, KeypointSet};
use crate::{Error, Result};

/// MediaPipe-style face mesh indices for the points the resolvers use.
///
/// "Left"/"right" are from the subject's perspective, as the detector
/// reports them.
const FACE_INDEX_TABLE: [(usize, Keypoint); 7] = [
    (234, Keypoint::LeftEar),
    (454, Keypoint::RightEar),
    (33, Keypoint::LeftEye),
    (263, Keypoint::RightEye),
    (1, Keypoint::NoseTip),
    (13, Keypoint::UpperLip),
    (14, Keypoint::LowerLip),
];

/// Map raw face mesh landmarks to named keypoints.
///
/// Derives `NeckBase` as the ear midpoint pushed down (positive y) by
/// `neck_drop_fraction` of the inter-ear distance. The neck is not part of
/// the face mesh, so this point is an estimate and is only emitted when
/// both ears were detected.
///
/// A slice shorter than the full mesh yields a partial set.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] when `landmarks` is empty.
pub fn map_face_landmarks(landmarks: &[Point3], neck_drop_fraction: f64) -> Result<KeypointSet> {
    if landmarks.is_empty() {
        return Err(Error::MalformedInput(
            "face landmark array is empty".to_string(),
        ));
    }

    let mut set = KeypointSet::new();
    for (index, name) in FACE_INDEX_TABLE {
        if let Some(point) = landmarks.get(index) {
            set.insert(name, *point);
        }
    }

    if let (Some(left), Some(right)) = (set.get(Keypoint::LeftEar), set.get(Keypoint::RightEar)) {
        let mid = geometry::midpoint(left, right);
        let drop = geometry::distance(left, right) * neck_drop_fraction;
        set.insert(Keypoint::NeckBase, Point3::new_3d(mid.x, mid.y + drop, mid.z));
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_NECK_DROP_FRACTION, EPSILON, NUM_FACE_LANDMARKS};

    fn full_mesh() -> Vec<Point3> {
        let mut mesh = vec![Point3::new(0.5, 0.5); NUM_FACE_LANDMARKS];
        mesh[234] = Point3::new(0.3, 0.4);
        mesh[454] = Point3::new(0.7, 0.4);
        mesh[1] = Point3::new(0.5, 0.55);
        mesh
    }

    #[test]
    fn test_full_mesh_maps_all_names() {
        let set = map_face_landmarks(&full_mesh(), DEFAULT_NECK_DROP_FRACTION).unwrap();
        assert!(set.contains_all(&[
            Keypoint::LeftEar,
            Keypoint::RightEar,
            Keypoint::LeftEye,
            Keypoint::RightEye,
            Keypoint::NoseTip,
            Keypoint::UpperLip,
            Keypoint::LowerLip,
            Keypoint::NeckBase,
        ]));
    }

    #[test]
    fn test_neck_base_derivation() {
        let set = map_face_landmarks(&full_mesh(), 0.5).unwrap();
        let neck = set.get(Keypoint::NeckBase).unwrap();
        // Ear midpoint (0.5, 0.4), inter-ear distance 0.4, dropped 0.2
        assert!((neck.x - 0.5).abs() < EPSILON);
        assert!((neck.y - 0.6).abs() < EPSILON);
    }

    #[test]
    fn test_short_input_yields_partial_set() {
        // Only the first 100 points: nose tip and lips resolve, ears do not
        let mesh = full_mesh();
        let set = map_face_landmarks(&mesh[..100], DEFAULT_NECK_DROP_FRACTION).unwrap();
        assert!(set.get(Keypoint::NoseTip).is_some());
        assert!(set.get(Keypoint::LeftEar).is_none());
        assert!(set.get(Keypoint::NeckBase).is_none());
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let result = map_face_landmarks(&[], DEFAULT_NECK_DROP_FRACTION);
        assert!(matches!(result, Err(crate::Error::MalformedInput(_))));
    }
}
