//! Detector-facing types.
//!
//! The expensive ML inference lives outside this crate. Hosts run whatever
//! face-mesh or hand-pose model they own, then feed its output into the
//! placement pipeline either as [`RawDetection`] (flat indexed landmarks,
//! mapped by this crate) or as an already-mapped [`DetectionResult`].

use crate::geometry::Point3;
use crate::keypoints::KeypointSet;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Which of the subject's hands a detection belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

/// Face orientation hint in degrees.
///
/// Upstream face detectors derive this from a pixel-offset heuristic rather
/// than a true 3D solve, so treat it as approximate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

/// Raw detector output for one subject: an ordered landmark array plus
/// metadata, before semantic mapping.
#[derive(Debug, Clone)]
pub enum RawDetection {
    Face {
        landmarks: Vec<Point3>,
        confidence: f64,
        rotation_hint: Option<EulerAngles>,
    },
    Hand {
        landmarks: Vec<Point3>,
        handedness: Handedness,
        confidence: f64,
    },
}

/// One mapped detection: named keypoints plus metadata.
///
/// Multiple results may arrive in one frame (e.g. two hands); the pipeline
/// processes each independently.
#[derive(Debug, Clone)]
pub enum DetectionResult {
    Face {
        keypoints: KeypointSet,
        confidence: f64,
        rotation_hint: Option<EulerAngles>,
    },
    Hand {
        keypoints: KeypointSet,
        handedness: Handedness,
        confidence: f64,
    },
}

impl DetectionResult {
    /// Detection confidence in 0..1
    #[must_use]
    pub fn confidence(&self) -> f64 {
        match self {
            Self::Face { confidence, .. } | Self::Hand { confidence, .. } => *confidence,
        }
    }

    /// The mapped keypoints
    #[must_use]
    pub fn keypoints(&self) -> &KeypointSet {
        match self {
            Self::Face { keypoints, .. } | Self::Hand { keypoints, .. } => keypoints,
        }
    }
}

/// External landmark detection capability.
///
/// The placement core never calls this itself; the host's capture loop
/// drives it and forwards the results to
/// [`PlacementPipeline::process`](crate::pipeline::PlacementPipeline::process).
/// `Ok(None)` means no subject was found this frame.
///
/// # Errors
///
/// Implementations return [`Error::DetectionUnavailable`](crate::Error) when
/// the underlying model is not loaded.
pub trait LandmarkDetector {
    /// The host's frame type (image buffer, video frame handle, ...)
    type Frame;

    fn detect(&mut self, frame: &Self::Frame) -> Result<Option<Vec<RawDetection>>>;
}
