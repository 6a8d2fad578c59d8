//! Constants used throughout the library

/// Number of landmarks in a full MediaPipe-style face mesh
pub const NUM_FACE_LANDMARKS: usize = 468;

/// Number of landmarks in a MediaPipe-style hand skeleton
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Default exponential smoothing factor (weight on the previous value)
pub const DEFAULT_SMOOTHING_ALPHA: f64 = 0.7;

/// Consecutive missed frames before a held transform is flagged stale
pub const DEFAULT_STALENESS_THRESHOLD: u32 = 10;

/// Ring anchor blend weights between the finger MCP and PIP joints
pub const RING_MCP_WEIGHT: f64 = 0.3;
pub const RING_PIP_WEIGHT: f64 = 0.7;

/// Watch anchor blend weights between the wrist and the pinky MCP
pub const WATCH_WRIST_WEIGHT: f64 = 0.8;
pub const WATCH_PINKY_WEIGHT: f64 = 0.2;

/// Default scale multipliers per category
pub const DEFAULT_EARRING_BASE_SCALE: f64 = 1.0;
pub const DEFAULT_NECKLACE_WIDTH_FACTOR: f64 = 1.5;
pub const DEFAULT_BRACELET_WRIST_FACTOR: f64 = 1.2;
pub const DEFAULT_WATCH_WRIST_FACTOR: f64 = 1.5;

/// Neck base is the ear midpoint pushed down by this fraction of the
/// inter-ear distance
pub const DEFAULT_NECK_DROP_FRACTION: f64 = 0.8;

/// Detections below this confidence are ignored by default
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.0;

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
