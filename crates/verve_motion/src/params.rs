//! Spring parameter descriptions and presets
//!
//! Physical parameters of a damped harmonic oscillator, plus the preset
//! configurations shared across Verve animations.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpringError};

/// Physical description of a spring
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringParameters {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringParameters {
    /// Create a validated spring description.
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Result<Self> {
        let params = Self {
            stiffness,
            damping,
            mass,
        };
        params.validate()?;
        Ok(params)
    }

    /// Fail fast on parameters that would poison every downstream
    /// coefficient: non-finite values, or a mass the math divides by.
    pub(crate) fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
        ] {
            if !value.is_finite() {
                return Err(SpringError::NonFiniteParameter { name, value });
            }
        }
        if self.mass <= 0.0 {
            return Err(SpringError::NonPositiveMass(self.mass));
        }
        Ok(())
    }

    /// A gentle, slow spring (good for page transitions)
    pub fn gentle() -> Self {
        Self {
            stiffness: 120.0,
            damping: 14.0,
            mass: 1.0,
        }
    }

    /// A wobbly spring with overshoot (good for playful UI)
    pub fn wobbly() -> Self {
        Self {
            stiffness: 180.0,
            damping: 12.0,
            mass: 1.0,
        }
    }

    /// A stiff, snappy spring (good for buttons)
    pub fn stiff() -> Self {
        Self {
            stiffness: 400.0,
            damping: 30.0,
            mass: 1.0,
        }
    }

    /// A very stiff spring with minimal oscillation (good for quick responses)
    pub fn snappy() -> Self {
        Self {
            stiffness: 600.0,
            damping: 40.0,
            mass: 1.0,
        }
    }

    /// A slow spring with no overshoot (critically damped)
    pub fn molasses() -> Self {
        Self {
            stiffness: 100.0,
            damping: 20.0,
            mass: 1.0,
        }
    }

    /// Discriminant of the characteristic equation:
    /// `damping² − 4·mass·stiffness`. Its sign selects the damping regime.
    pub fn discriminant(&self) -> f64 {
        self.damping * self.damping - 4.0 * self.mass * self.stiffness
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Check if the spring is critically damped (no oscillation, fastest settling)
    pub fn is_critically_damped(&self) -> bool {
        (self.damping - self.critical_damping()).abs() < 0.01
    }

    /// Check if the spring is overdamped (slow settling, no oscillation)
    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping()
    }
}

impl Default for SpringParameters {
    fn default() -> Self {
        Self::stiff()
    }
}
