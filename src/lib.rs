//! Landmark-driven anchor placement for virtual jewelry try-on.
//!
//! This library converts raw 2D/3D landmark keypoints from an external face
//! mesh or hand pose detector into stable anchor transforms (position,
//! scale, rotation) for rendering jewelry overlays, with exponential
//! smoothing to suppress frame-to-frame jitter.
//!
//! The pipeline consists of:
//! 1. Keypoint mapping: indexed detector output to named semantic points
//! 2. Anchor resolution: per-category placement rules (earring, necklace,
//!    ring, bracelet, watch)
//! 3. Temporal smoothing: per-slot exponential damping with hold-last-value
//!    on occlusion and staleness flagging
//!
//! ML inference and rendering both live outside this crate: the host's
//! capture loop runs a detector and feeds its output in, and the host's
//! renderer consumes the resulting [`AnchorTransform`]s. Coordinates are
//! normalized (0..1 per axis), so the renderer scales to its own viewport.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use jewelry_placement::{
//!     detection::{Handedness, RawDetection},
//!     geometry::Point3,
//!     pipeline::PlacementPipeline,
//!     slot::{JewelryCategory, JewelrySlotConfig},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pipeline = PlacementPipeline::with_defaults()?;
//! pipeline.configure(vec![JewelrySlotConfig::new("watch-01", JewelryCategory::Watch)])?;
//!
//! // Per frame: run your detector, then hand its output to the pipeline
//! let landmarks = vec![Point3::new(0.5, 0.8); 21];
//! let detections = vec![RawDetection::Hand {
//!     landmarks,
//!     handedness: Handedness::Right,
//!     confidence: 0.95,
//! }];
//!
//! for transform in pipeline.process(&detections, 0.033) {
//!     println!(
//!         "{}: pos=({:.2}, {:.2}) scale={:.2} rot={:.1}",
//!         transform.slot,
//!         transform.position.x,
//!         transform.position.y,
//!         transform.scale_factor,
//!         transform.rotation_degrees
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom configuration
//!
//! ```
//! use jewelry_placement::config::PlacementConfig;
//! use jewelry_placement::pipeline::PlacementPipeline;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = PlacementConfig::default();
//! config.smoothing.alpha = 0.5; // lighter damping, more responsive
//! config.detection.min_confidence = 0.6;
//! let pipeline = PlacementPipeline::new(config)?;
//! # Ok(())
//! # }
//! ```

/// Vector math shared by mapping and resolution
pub mod geometry;

/// Semantic keypoint vocabulary and per-frame keypoint sets
pub mod keypoints;

/// Detector-facing types and the `LandmarkDetector` host trait
pub mod detection;

/// Landmark index-to-name mapping for face and hand detectors
pub mod mapping;

/// Jewelry slot configuration and the anchor transform output
pub mod slot;

/// Per-category anchor resolution rules
pub mod resolver;

/// Temporal smoothing of anchor transforms
pub mod smoother;

/// The placement pipeline, the public per-frame surface
pub mod pipeline;

/// Configuration management
pub mod config;

/// Constants used throughout the library
pub mod constants;

/// Error types and result handling
pub mod error;

pub use detection::{DetectionResult, LandmarkDetector, RawDetection};
pub use error::{Error, Result};
pub use pipeline::PlacementPipeline;
pub use slot::AnchorTransform;
