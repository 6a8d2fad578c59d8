//! Temporal smoothing of anchor transforms.
//!
//! Exponential smoothing per position component suppresses frame-to-frame
//! jitter: `smoothed = previous * alpha + current * (1 - alpha)`. Alpha
//! weights the previous value, so the default 0.7 damps heavily, favoring
//! stability over responsiveness for slow head and hand motion.
//!
//! When a slot has no candidate this frame (partial occlusion), the
//! smoother holds its last transform rather than resetting, so detection
//! resuming does not snap the overlay. Held transforms are flagged stale
//! after a configurable number of consecutive misses so renderers can fade
//! them out instead of showing frozen ghosts.

use crate::resolver::AnchorCandidate;
use crate::slot::{AnchorTransform, SlotKey};
use std::collections::HashMap;

struct SlotState {
    last: AnchorTransform,
    consecutive_misses: u32,
}

/// Per-slot exponential smoothing state for one try-on session.
///
/// Single-writer: the owning pipeline drives one `TransformSmoother` per
/// session, one frame at a time.
pub struct TransformSmoother {
    alpha: f64,
    staleness_threshold: u32,
    states: HashMap<SlotKey, SlotState>,
}

impl TransformSmoother {
    /// Create a smoother.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is not in [0, 1) or `staleness_threshold` is 0.
    #[must_use]
    pub fn new(alpha: f64, staleness_threshold: u32) -> Self {
        assert!((0.0..1.0).contains(&alpha), "Alpha must be in [0, 1)");
        assert!(
            staleness_threshold > 0,
            "Staleness threshold must be greater than 0"
        );
        Self {
            alpha,
            staleness_threshold,
            states: HashMap::new(),
        }
    }

    /// Smooth a fresh candidate against the slot's previous transform.
    ///
    /// The first observation for a slot passes through unsmoothed. With
    /// `smoothing_enabled` false the candidate passes through every frame,
    /// but the slot is still tracked for the hold/staleness policy.
    pub fn observe(&mut self, candidate: AnchorCandidate, smoothing_enabled: bool) -> AnchorTransform {
        let position = match self.states.get(&candidate.key) {
            Some(state) if smoothing_enabled => {
                state.last.position * self.alpha + candidate.position * (1.0 - self.alpha)
            }
            _ => candidate.position,
        };

        let transform = AnchorTransform {
            slot: candidate.key.clone(),
            position,
            scale_factor: candidate.scale_factor,
            rotation_degrees: candidate.rotation_degrees,
            stale: false,
        };
        self.states.insert(
            candidate.key,
            SlotState {
                last: transform.clone(),
                consecutive_misses: 0,
            },
        );
        transform
    }

    /// Register a miss for every tracked key of `item_id` not in `seen`
    /// and return the held transforms, stale-flagged past the threshold.
    pub fn hold_missing(&mut self, item_id: &str, seen: &[SlotKey]) -> Vec<AnchorTransform> {
        let mut held = Vec::new();
        for (key, state) in &mut self.states {
            if key.item_id != item_id || seen.contains(key) {
                continue;
            }
            state.consecutive_misses += 1;
            let mut transform = state.last.clone();
            transform.stale = state.consecutive_misses >= self.staleness_threshold;
            held.push(transform);
        }
        // Map iteration order is not deterministic across instances
        held.sort_by_key(|t| t.slot.side);
        held
    }

    /// Drop all state for one jewelry item, called when the item assigned
    /// to a slot changes
    pub fn reset_slot(&mut self, item_id: &str) {
        self.states.retain(|key, _| key.item_id != item_id);
    }

    /// Drop all state (session restart)
    pub fn reset(&mut self) {
        self.states.clear();
    }

    /// Number of slots currently tracked
    #[must_use]
    pub fn tracked_slots(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3;
    use crate::slot::Side;

    fn candidate(key: SlotKey, position: Point3) -> AnchorCandidate {
        AnchorCandidate {
            key,
            position,
            scale_factor: 1.0,
            rotation_degrees: 0.0,
        }
    }

    #[test]
    fn test_first_observation_passes_through() {
        let mut smoother = TransformSmoother::new(0.7, 10);
        let key = SlotKey::new("ring-01", Side::Center);
        let out = smoother.observe(candidate(key, Point3::new(0.4, 0.6)), true);
        assert_eq!(out.position, Point3::new(0.4, 0.6));
        assert!(!out.stale);
    }

    #[test]
    fn test_second_observation_is_damped() {
        let mut smoother = TransformSmoother::new(0.7, 10);
        let key = SlotKey::new("ring-01", Side::Center);
        smoother.observe(candidate(key.clone(), Point3::new(100.0, 100.0)), true);
        let out = smoother.observe(candidate(key, Point3::new(0.0, 0.0)), true);
        // previous * 0.7 + current * 0.3, exactly
        assert_eq!(out.position.x, 70.0);
        assert_eq!(out.position.y, 70.0);
    }

    #[test]
    fn test_z_component_smoothed_independently() {
        let mut smoother = TransformSmoother::new(0.5, 10);
        let key = SlotKey::new("ring-01", Side::Center);
        smoother.observe(candidate(key.clone(), Point3::new_3d(0.0, 0.0, 2.0)), true);
        let out = smoother.observe(candidate(key, Point3::new_3d(1.0, 0.0, 0.0)), true);
        assert_eq!(out.position.x, 0.5);
        assert_eq!(out.position.z, 1.0);
    }

    #[test]
    fn test_smoothing_disabled_passes_through() {
        let mut smoother = TransformSmoother::new(0.7, 10);
        let key = SlotKey::new("ring-01", Side::Center);
        smoother.observe(candidate(key.clone(), Point3::new(100.0, 100.0)), false);
        let out = smoother.observe(candidate(key, Point3::new(0.0, 0.0)), false);
        assert_eq!(out.position, Point3::new(0.0, 0.0));
    }

    #[test]
    fn test_hold_keeps_last_value() {
        let mut smoother = TransformSmoother::new(0.7, 10);
        let key = SlotKey::new("watch-01", Side::Center);
        smoother.observe(candidate(key.clone(), Point3::new(0.5, 0.8)), true);

        let held = smoother.hold_missing("watch-01", &[]);
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].position, Point3::new(0.5, 0.8));
        assert!(!held[0].stale);
    }

    #[test]
    fn test_staleness_after_threshold_misses() {
        let mut smoother = TransformSmoother::new(0.7, 3);
        let key = SlotKey::new("watch-01", Side::Center);
        smoother.observe(candidate(key, Point3::new(0.5, 0.8)), true);

        assert!(!smoother.hold_missing("watch-01", &[])[0].stale);
        assert!(!smoother.hold_missing("watch-01", &[])[0].stale);
        assert!(smoother.hold_missing("watch-01", &[])[0].stale);
    }

    #[test]
    fn test_reobservation_clears_miss_count() {
        let mut smoother = TransformSmoother::new(0.7, 3);
        let key = SlotKey::new("watch-01", Side::Center);
        smoother.observe(candidate(key.clone(), Point3::new(0.5, 0.8)), true);
        smoother.hold_missing("watch-01", &[]);
        smoother.hold_missing("watch-01", &[]);
        smoother.observe(candidate(key, Point3::new(0.5, 0.8)), true);
        // Miss streak restarts after detection resumes
        assert!(!smoother.hold_missing("watch-01", &[])[0].stale);
    }

    #[test]
    fn test_hold_skips_seen_keys() {
        let mut smoother = TransformSmoother::new(0.7, 10);
        let left = SlotKey::new("ear-01", Side::Left);
        let right = SlotKey::new("ear-01", Side::Right);
        smoother.observe(candidate(left.clone(), Point3::new(0.3, 0.4)), true);
        smoother.observe(candidate(right, Point3::new(0.7, 0.4)), true);

        let held = smoother.hold_missing("ear-01", &[left]);
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].slot.side, Side::Right);
    }

    #[test]
    fn test_reset_slot_scoped_to_item() {
        let mut smoother = TransformSmoother::new(0.7, 10);
        smoother.observe(
            candidate(SlotKey::new("ring-01", Side::Center), Point3::new(0.4, 0.6)),
            true,
        );
        smoother.observe(
            candidate(SlotKey::new("watch-01", Side::Center), Point3::new(0.5, 0.8)),
            true,
        );
        smoother.reset_slot("ring-01");
        assert_eq!(smoother.tracked_slots(), 1);
        assert!(smoother.hold_missing("ring-01", &[]).is_empty());
        assert_eq!(smoother.hold_missing("watch-01", &[]).len(), 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut smoother = TransformSmoother::new(0.7, 10);
        smoother.observe(
            candidate(SlotKey::new("ring-01", Side::Center), Point3::new(0.4, 0.6)),
            true,
        );
        smoother.reset();
        assert_eq!(smoother.tracked_slots(), 0);
    }

    #[test]
    #[should_panic(expected = "Alpha must be in [0, 1)")]
    fn test_alpha_of_one_panics() {
        let _ = TransformSmoother::new(1.0, 10);
    }

    #[test]
    #[should_panic(expected = "Staleness threshold must be greater than 0")]
    fn test_zero_threshold_panics() {
        let _ = TransformSmoother::new(0.7, 0);
    }
}
