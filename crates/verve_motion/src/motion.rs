//! Spring-driven motion towards a rest position
//!
//! Owns one solved spring, translates its relative displacement into absolute
//! positions around the rest value, and tracks settling by counting near-zero
//! samples.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::params::SpringParameters;
use crate::solution::{DampingRegime, SpringSolution};

/// Near-zero band treated as "at rest", used for both display snapping and
/// settle detection.
pub const DEFAULT_TOLERANCE_BAND: f64 = 1e-4;

/// Number of near-zero samples required before a motion reports settled.
///
/// A single near-zero sample is weak evidence (oscillating springs cross zero
/// transiently); many cumulative observations approximate "stayed near rest"
/// at the caller's sampling rate.
pub const DEFAULT_SETTLE_SAMPLE_COUNT: u32 = 30;

/// Tolerance configuration for snapping and settle detection
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Tolerance {
    /// Absolute band around zero relative displacement.
    pub band: f64,
    /// Near-zero samples required to settle.
    pub settle_sample_count: u32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            band: DEFAULT_TOLERANCE_BAND,
            settle_sample_count: DEFAULT_SETTLE_SAMPLE_COUNT,
        }
    }
}

impl Tolerance {
    /// Tolerance with a custom near-zero band and the default settle count.
    pub fn with_band(band: f64) -> Self {
        Self {
            band,
            ..Default::default()
        }
    }
}

/// Whether a motion is still moving or has reached its rest position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionState {
    Running,
    Settled,
}

/// Settle bookkeeping, kept apart from the pure solution coefficients.
///
/// Call-order sensitive: every observation counts one sample, and the
/// settled state is one-way.
#[derive(Clone, Copy, Debug, Default)]
struct SettleTracker {
    near_zero_samples: u32,
    settled_at: Option<f64>,
}

impl SettleTracker {
    fn observe(&mut self, near_zero: bool, time: f64, required: u32) -> bool {
        if self.settled_at.is_some() {
            return true;
        }
        if near_zero {
            self.near_zero_samples += 1;
            if self.near_zero_samples >= required {
                self.settled_at = Some(time);
                return true;
            }
        }
        false
    }
}

/// A spring-driven motion from a start position towards a rest position
#[derive(Clone, Copy, Debug)]
pub struct SpringMotion {
    end_position: f64,
    solution: SpringSolution,
    tolerance: Tolerance,
    tracker: SettleTracker,
}

impl SpringMotion {
    /// Create a motion from `start_position` towards `end_position`.
    ///
    /// The solution branch is selected here, once, from the discriminant of
    /// the characteristic equation; nothing about it changes afterwards.
    pub fn new(
        params: SpringParameters,
        start_position: f64,
        end_position: f64,
        initial_velocity: f64,
        tolerance: Tolerance,
    ) -> Result<Self> {
        params.validate()?;
        let distance = start_position - end_position;
        let solution = SpringSolution::new(&params, distance, initial_velocity);
        tracing::debug!(
            "SpringMotion: selected {:?} solution (distance {}, velocity {})",
            solution.regime(),
            distance,
            initial_velocity
        );
        Ok(Self {
            end_position,
            solution,
            tolerance,
            tracker: SettleTracker::default(),
        })
    }

    /// Absolute position at `time` seconds since the motion started.
    ///
    /// Snaps to the rest position once the relative displacement falls inside
    /// the tolerance band, so callers never see a floating-point residue.
    pub fn position(&self, time: f64) -> f64 {
        let rel = self.solution.position(time);
        if rel.abs() < self.tolerance.band {
            self.end_position
        } else {
            self.end_position + rel
        }
    }

    /// Velocity at `time`. Relative and absolute velocity coincide since the
    /// rest position is constant.
    pub fn velocity(&self, time: f64) -> f64 {
        self.solution.velocity(time)
    }

    /// Observe one sampled time step and report whether the motion settled.
    ///
    /// Stateful: each call counts one sample, so call it once per step.
    /// Settled is terminal; later calls return true without further counting.
    pub fn is_settled(&mut self, time: f64) -> bool {
        let already_settled = self.tracker.settled_at.is_some();
        let near_zero = self.solution.position(time).abs() < self.tolerance.band;
        let settled = self
            .tracker
            .observe(near_zero, time, self.tolerance.settle_sample_count);
        if settled && !already_settled {
            tracing::debug!("SpringMotion: settled at t = {}", time);
        }
        settled
    }

    /// The rest position this motion settles to.
    pub fn end_position(&self) -> f64 {
        self.end_position
    }

    /// Damping regime of the owned solution.
    pub fn regime(&self) -> DampingRegime {
        self.solution.regime()
    }

    /// Time at which the motion settled, if it has.
    pub fn settled_at(&self) -> Option<f64> {
        self.tracker.settled_at
    }

    /// Current settle state.
    pub fn state(&self) -> MotionState {
        if self.tracker.settled_at.is_some() {
            MotionState::Settled
        } else {
            MotionState::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpringError;

    const FRAME: f64 = 1.0 / 60.0;

    fn molasses_motion() -> SpringMotion {
        SpringMotion::new(
            SpringParameters::molasses(),
            0.0,
            1.0,
            0.0,
            Tolerance::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_critical_motion_reaches_end_position() {
        let motion = molasses_motion();
        assert_eq!(motion.regime(), DampingRegime::CriticallyDamped);
        assert!((motion.position(0.0) - 0.0).abs() < 1e-12);
        assert_eq!(motion.position(2.0), 1.0);
    }

    #[test]
    fn test_position_snaps_inside_tolerance_band() {
        let motion = molasses_motion();
        // At t = 1 the residue is e^(-10) ≈ 4.5e-5, inside the band.
        assert!(motion.position(0.5) < 1.0);
        assert_eq!(motion.position(1.0), 1.0);
    }

    #[test]
    fn test_velocity_passes_through_solution() {
        let params = SpringParameters::new(100.0, 0.0, 1.0).unwrap();
        let motion = SpringMotion::new(params, 0.0, 0.0, 1.0, Tolerance::default()).unwrap();
        assert!((motion.velocity(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_settles_after_enough_near_zero_samples() {
        let mut motion = molasses_motion();
        let mut settled_step = None;
        for step in 0..600 {
            if motion.is_settled(f64::from(step) * FRAME) {
                settled_step = Some(step);
                break;
            }
        }
        // |rel| = e^(-10t) drops inside the band at step 56; thirty samples
        // later the motion settles.
        assert_eq!(settled_step, Some(85));
        let settled_at = motion.settled_at().unwrap();
        assert!((settled_at - 85.0 * FRAME).abs() < 1e-12);
        assert_eq!(motion.position(settled_at), 1.0);
        assert_eq!(motion.state(), MotionState::Settled);
    }

    #[test]
    fn test_settled_state_is_terminal() {
        // Undamped spring: crosses zero at t = 0, then swings away again.
        let params = SpringParameters::new(100.0, 0.0, 1.0).unwrap();
        let tolerance = Tolerance {
            settle_sample_count: 1,
            ..Default::default()
        };
        let mut motion = SpringMotion::new(params, 0.0, 0.0, 1.0, tolerance).unwrap();

        assert!(motion.is_settled(0.0));
        assert_eq!(motion.settled_at(), Some(0.0));

        // Quarter period: displacement is 0.1, far outside the band, yet the
        // settled state never resets.
        let quarter = std::f64::consts::PI / 20.0;
        assert!(motion.is_settled(quarter));
        assert_eq!(motion.settled_at(), Some(0.0));
        assert_eq!(motion.state(), MotionState::Settled);
    }

    #[test]
    fn test_each_observation_counts_one_sample() {
        let tolerance = Tolerance {
            settle_sample_count: 2,
            ..Default::default()
        };
        let mut motion = SpringMotion::new(
            SpringParameters::molasses(),
            0.0,
            1.0,
            0.0,
            tolerance,
        )
        .unwrap();

        // Observing the same near-zero time twice counts two samples.
        assert!(!motion.is_settled(2.0));
        assert!(motion.is_settled(2.0));
        assert_eq!(motion.settled_at(), Some(2.0));
    }

    #[test]
    fn test_running_until_settled() {
        let mut motion = molasses_motion();
        assert_eq!(motion.state(), MotionState::Running);
        assert_eq!(motion.settled_at(), None);
        assert!(!motion.is_settled(0.0));
    }

    #[test]
    fn test_underdamped_motion_overshoots_rest_position() {
        let params = SpringParameters::new(100.0, 10.0, 1.0).unwrap();
        let mut motion =
            SpringMotion::new(params, 0.0, 1.0, 0.0, Tolerance::default()).unwrap();

        let mut sign_changes = 0;
        let mut previous = motion.position(0.0) - 1.0;
        for step in 1..=40 {
            let current = motion.position(f64::from(step) * 0.05) - 1.0;
            if previous != 0.0 && current != 0.0 && previous.signum() != current.signum() {
                sign_changes += 1;
            }
            previous = current;
        }
        assert!(sign_changes >= 2, "only {sign_changes} sign changes");

        // The same samples eventually settle it.
        for step in 0..600 {
            if motion.is_settled(f64::from(step) * FRAME) {
                break;
            }
        }
        assert_eq!(motion.state(), MotionState::Settled);
    }

    #[test]
    fn test_invalid_parameters_rejected_at_construction() {
        let params = SpringParameters {
            stiffness: 100.0,
            damping: 10.0,
            mass: 0.0,
        };
        let err = SpringMotion::new(params, 0.0, 1.0, 0.0, Tolerance::default()).unwrap_err();
        assert!(matches!(err, SpringError::NonPositiveMass(_)));
    }

    #[test]
    fn test_degenerate_critical_start_yields_non_finite_positions() {
        // Zero initial distance under critical damping divides by zero in the
        // velocity coefficient; evaluation propagates it instead of panicking.
        let motion = SpringMotion::new(
            SpringParameters::molasses(),
            1.0,
            1.0,
            1.0,
            Tolerance::default(),
        )
        .unwrap();
        assert!(!motion.position(1.0).is_finite());
        assert!(!motion.velocity(1.0).is_finite());
    }
}
