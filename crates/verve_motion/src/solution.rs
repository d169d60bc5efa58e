//! Closed-form solutions of the damped harmonic oscillator
//!
//! Each solved spring is one of three branches of the characteristic
//! equation, selected once from the discriminant and carrying a small set of
//! precomputed coefficients. Evaluation is pure math over those coefficients.

use crate::params::SpringParameters;

/// Damping regime of a spring, determined by the discriminant sign
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DampingRegime {
    /// Returns to rest without oscillating, in minimum time.
    CriticallyDamped,
    /// Returns to rest without oscillating, slower than critical.
    Overdamped,
    /// Oscillates with exponentially decaying amplitude.
    Underdamped,
}

/// A solved spring: coefficients for one damping regime
///
/// `distance` below is the initial displacement relative to the rest
/// position; all positions and velocities this type produces are relative to
/// that rest position.
#[derive(Clone, Copy, Debug)]
pub enum SpringSolution {
    Critical { r: f64, c1: f64, c2: f64 },
    Overdamped { r1: f64, r2: f64, c1: f64, c2: f64 },
    Underdamped { w: f64, r: f64, c1: f64, c2: f64 },
}

impl SpringSolution {
    /// Select and solve the closed-form branch for the given initial
    /// conditions.
    pub fn new(params: &SpringParameters, distance: f64, velocity: f64) -> Self {
        let cmk = params.discriminant();
        if cmk == 0.0 {
            Self::critical(params, distance, velocity)
        } else if cmk > 0.0 {
            Self::overdamped(params, cmk, distance, velocity)
        } else {
            Self::underdamped(params, cmk, distance, velocity)
        }
    }

    fn critical(params: &SpringParameters, distance: f64, velocity: f64) -> Self {
        let r = -params.damping / (2.0 * params.mass);
        let c1 = distance;
        // c2 divides by the initial distance; distance == 0 yields a
        // non-finite coefficient that propagates through evaluation.
        let c2 = velocity / (r * distance);
        Self::Critical { r, c1, c2 }
    }

    fn overdamped(params: &SpringParameters, cmk: f64, distance: f64, velocity: f64) -> Self {
        let sq = cmk.sqrt();
        let r1 = (-params.damping - sq) / (2.0 * params.mass);
        let r2 = (-params.damping + sq) / (2.0 * params.mass);
        let c2 = (velocity - r1 * distance) / (r2 - r1);
        let c1 = distance - c2;
        Self::Overdamped { r1, r2, c1, c2 }
    }

    fn underdamped(params: &SpringParameters, cmk: f64, distance: f64, velocity: f64) -> Self {
        let w = (-cmk).sqrt() / (2.0 * params.mass);
        // Decay rate folds mass in as a factor, not a divisor; for non-unit
        // masses the envelope departs from -damping/(2*mass) (pinned in
        // tests).
        let r = -(params.damping / 2.0 * params.mass);
        let c1 = distance;
        let c2 = (velocity - r * distance) / w;
        Self::Underdamped { w, r, c1, c2 }
    }

    /// Displacement relative to the rest position at time `t` (seconds).
    pub fn position(&self, t: f64) -> f64 {
        match *self {
            Self::Critical { r, c1, c2 } => (c1 + c2 * t) * (r * t).exp(),
            Self::Overdamped { r1, r2, c1, c2 } => c1 * (r1 * t).exp() + c2 * (r2 * t).exp(),
            Self::Underdamped { w, r, c1, c2 } => {
                (r * t).exp() * (c1 * (w * t).cos() + c2 * (w * t).sin())
            }
        }
    }

    /// Velocity at time `t` (seconds).
    pub fn velocity(&self, t: f64) -> f64 {
        match *self {
            Self::Critical { r, c1, c2 } => {
                let envelope = (r * t).exp();
                r * (c1 + c2 * t) * envelope + c2 * envelope
            }
            Self::Overdamped { r1, r2, c1, c2 } => {
                c1 * r1 * (r1 * t).exp() + c2 * r2 * (r2 * t).exp()
            }
            Self::Underdamped { w, r, c1, c2 } => {
                let envelope = (r * t).exp();
                let cos = (w * t).cos();
                let sin = (w * t).sin();
                envelope * (c2 * w * cos - c1 * w * sin) + r * envelope * (c2 * sin + c1 * cos)
            }
        }
    }

    /// Which damping regime this solution represents.
    pub fn regime(&self) -> DampingRegime {
        match self {
            Self::Critical { .. } => DampingRegime::CriticallyDamped,
            Self::Overdamped { .. } => DampingRegime::Overdamped,
            Self::Underdamped { .. } => DampingRegime::Underdamped,
        }
    }
}
