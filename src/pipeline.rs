//! The placement pipeline: the public surface the host application drives.
//!
//! One pipeline instance per try-on session, one `process` call per frame,
//! from whatever frame-delivery loop the host owns. Nothing here blocks or
//! performs I/O; the expensive ML detection happens outside and its results
//! are fed in.

use crate::config::PlacementConfig;
use crate::detection::{DetectionResult, RawDetection};
use crate::mapping::{map_face_landmarks, map_hand_landmarks};
use crate::resolver::AnchorResolver;
use crate::slot::{AnchorTransform, JewelrySlotConfig, SlotKey};
use crate::smoother::TransformSmoother;
use crate::{Error, Result};

/// Orchestrates keypoint mapping, anchor resolution and temporal smoothing
/// for every configured jewelry slot.
pub struct PlacementPipeline {
    config: PlacementConfig,
    slots: Vec<JewelrySlotConfig>,
    resolver: AnchorResolver,
    smoother: TransformSmoother,
}

impl PlacementPipeline {
    /// Create a pipeline with no configured slots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the configuration fails validation.
    pub fn new(config: PlacementConfig) -> Result<Self> {
        config.validate()?;
        let resolver = AnchorResolver::new(&config);
        let smoother = TransformSmoother::new(
            config.smoothing.alpha,
            config.smoothing.staleness_threshold,
        );
        Ok(Self {
            config,
            slots: Vec::new(),
            resolver,
            smoother,
        })
    }

    /// Pipeline with default configuration
    ///
    /// # Errors
    ///
    /// Never fails in practice; kept fallible for API symmetry with
    /// [`PlacementPipeline::new`].
    pub fn with_defaults() -> Result<Self> {
        Self::new(PlacementConfig::default())
    }

    /// Replace the active slot configuration.
    ///
    /// Validates every slot before anything is applied, so a bad catalog
    /// entry leaves the previous configuration intact. Smoother state is
    /// reset for items that were removed or whose configuration changed;
    /// unchanged slots keep their smoothing history.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSlotConfig`] for the first invalid or
    /// duplicated slot.
    pub fn configure(&mut self, slots: Vec<JewelrySlotConfig>) -> Result<()> {
        for slot in &slots {
            slot.validate()?;
            let duplicates = slots.iter().filter(|s| s.item_id == slot.item_id).count();
            if duplicates > 1 {
                return Err(Error::InvalidSlotConfig(format!(
                    "duplicate item_id {:?}",
                    slot.item_id
                )));
            }
        }

        for old in &self.slots {
            let unchanged = slots.iter().any(|new| new == old);
            if !unchanged {
                log::debug!("resetting smoother state for item {}", old.item_id);
                self.smoother.reset_slot(&old.item_id);
            }
        }

        log::debug!("configured {} jewelry slot(s)", slots.len());
        self.slots = slots;
        Ok(())
    }

    /// Process one frame of raw detector output.
    ///
    /// Runs keypoint mapping, anchor resolution and smoothing for every
    /// configured slot and returns the transforms to render. A detection
    /// whose landmark array is malformed is logged and skipped; the rest of
    /// the frame still processes.
    pub fn process(&mut self, raw: &[RawDetection], timestamp: f64) -> Vec<AnchorTransform> {
        let mut detections = Vec::with_capacity(raw.len());
        for detection in raw {
            match self.map_raw(detection) {
                Ok(mapped) => detections.push(mapped),
                Err(e) => log::warn!("skipping malformed detection at t={timestamp:.3}: {e}"),
            }
        }
        self.process_detections(&detections, timestamp)
    }

    /// Process one frame of already-mapped detections.
    ///
    /// For hosts that run their own index-to-name mapping. Deterministic
    /// given identical inputs and prior smoother state, and processes each
    /// slot in configured order, isolated from the others.
    pub fn process_detections(
        &mut self,
        detections: &[DetectionResult],
        timestamp: f64,
    ) -> Vec<AnchorTransform> {
        let mut transforms = Vec::new();
        for slot in &self.slots {
            let candidates = self.resolver.resolve(slot, detections);
            let seen: Vec<SlotKey> = candidates.iter().map(|c| c.key.clone()).collect();
            for candidate in candidates {
                transforms.push(self.smoother.observe(candidate, slot.smoothing));
            }
            transforms.extend(self.smoother.hold_missing(&slot.item_id, &seen));
        }
        log::trace!(
            "frame t={timestamp:.3}: {} detection(s) -> {} transform(s)",
            detections.len(),
            transforms.len()
        );
        transforms
    }

    /// Clear all smoother state, keeping the slot configuration.
    ///
    /// Used when restarting a session or re-seating the camera.
    pub fn reset(&mut self) {
        self.smoother.reset();
    }

    /// The active slot configuration, in processing order
    #[must_use]
    pub fn slots(&self) -> &[JewelrySlotConfig] {
        &self.slots
    }

    /// The pipeline configuration
    #[must_use]
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    fn map_raw(&self, raw: &RawDetection) -> Result<DetectionResult> {
        match raw {
            RawDetection::Face {
                landmarks,
                confidence,
                rotation_hint,
            } => Ok(DetectionResult::Face {
                keypoints: map_face_landmarks(landmarks, self.config.face.neck_drop_fraction)?,
                confidence: *confidence,
                rotation_hint: *rotation_hint,
            }),
            RawDetection::Hand {
                landmarks,
                handedness,
                confidence,
            } => Ok(DetectionResult::Hand {
                keypoints: map_hand_landmarks(landmarks)?,
                handedness: *handedness,
                confidence: *confidence,
            }),
        }
    }
}
