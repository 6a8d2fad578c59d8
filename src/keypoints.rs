//! Semantic keypoint vocabulary and the per-frame keypoint set.
//!
//! Detectors report landmarks as flat indexed arrays; the mapping stage
//! translates those into named points from the closed vocabulary below.
//! A [`KeypointSet`] is built fresh for every detection frame and never
//! mutated afterwards. A missing key means "not detected this frame" and
//! consumers must treat it as unavailable rather than substituting a
//! default point.

use crate::geometry::Point3;
use std::collections::HashMap;

/// The closed vocabulary of semantic keypoint names.
///
/// Face names cover the subset of the face mesh the resolvers need; hand
/// names follow the 21-joint MediaPipe-style skeleton. `NeckBase`,
/// `RingPosition`, `BraceletPosition` and `WatchPosition` are derived
/// composites, not directly detected points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keypoint {
    // Face
    LeftEar,
    RightEar,
    LeftEye,
    RightEye,
    NoseTip,
    UpperLip,
    LowerLip,
    /// Derived: ear midpoint pushed down by a fraction of the inter-ear
    /// distance. An estimate of where a necklace sits, not ground truth.
    NeckBase,

    // Hand (21-joint skeleton)
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
    /// Derived: weighted blend of the ring finger MCP and PIP joints
    RingPosition,
    /// Derived: alias for the wrist point
    BraceletPosition,
    /// Derived: wrist blended toward the pinky MCP
    WatchPosition,
}

impl Keypoint {
    /// String representation, matching the names used in config and logs
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftEar => "leftEar",
            Self::RightEar => "rightEar",
            Self::LeftEye => "leftEye",
            Self::RightEye => "rightEye",
            Self::NoseTip => "noseTip",
            Self::UpperLip => "upperLip",
            Self::LowerLip => "lowerLip",
            Self::NeckBase => "neckBase",
            Self::Wrist => "wrist",
            Self::ThumbCmc => "thumb.cmc",
            Self::ThumbMcp => "thumb.mcp",
            Self::ThumbIp => "thumb.ip",
            Self::ThumbTip => "thumb.tip",
            Self::IndexMcp => "indexFinger.mcp",
            Self::IndexPip => "indexFinger.pip",
            Self::IndexDip => "indexFinger.dip",
            Self::IndexTip => "indexFinger.tip",
            Self::MiddleMcp => "middleFinger.mcp",
            Self::MiddlePip => "middleFinger.pip",
            Self::MiddleDip => "middleFinger.dip",
            Self::MiddleTip => "middleFinger.tip",
            Self::RingMcp => "ringFinger.mcp",
            Self::RingPip => "ringFinger.pip",
            Self::RingDip => "ringFinger.dip",
            Self::RingTip => "ringFinger.tip",
            Self::PinkyMcp => "pinky.mcp",
            Self::PinkyPip => "pinky.pip",
            Self::PinkyDip => "pinky.dip",
            Self::PinkyTip => "pinky.tip",
            Self::RingPosition => "ringPosition",
            Self::BraceletPosition => "braceletPosition",
            Self::WatchPosition => "watchPosition",
        }
    }
}

/// Named keypoints for one detection frame.
///
/// Keys present depend on detector type and on how many raw landmarks the
/// detector actually reported.
#[derive(Debug, Clone, Default)]
pub struct KeypointSet {
    points: HashMap<Keypoint, Point3>,
}

impl KeypointSet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: HashMap::new(),
        }
    }

    /// Insert a point during construction
    pub fn insert(&mut self, name: Keypoint, point: Point3) {
        self.points.insert(name, point);
    }

    /// Look up a point; `None` means the detector did not report it
    #[must_use]
    pub fn get(&self, name: Keypoint) -> Option<Point3> {
        self.points.get(&name).copied()
    }

    /// Whether all of the given names are present
    #[must_use]
    pub fn contains_all(&self, names: &[Keypoint]) -> bool {
        names.iter().all(|n| self.points.contains_key(n))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(Keypoint, Point3)> for KeypointSet {
    fn from_iter<T: IntoIterator<Item = (Keypoint, Point3)>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
