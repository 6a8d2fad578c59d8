//! Landmark index-to-name mapping.
//!
//! Detectors emit flat ordered arrays of points; the tables in this module
//! translate them into the semantic [`Keypoint`](crate::keypoints::Keypoint)
//! vocabulary. Both mappings are pure functions over the raw slice: a slice
//! shorter than the full landmark count yields a partial set (missing keys)
//! rather than an error, but a completely empty slice is rejected as
//! malformed input.

/// Face mesh mapping (ears, eyes, nose tip, lips, derived neck base)
pub mod face;

/// 21-joint hand skeleton mapping and derived jewelry anchor composites
pub mod hand;

pub use face::map_face_landmarks;
pub use hand::{map_hand_landmarks, orientation_roll};
