//! Verve Motion
//!
//! Closed-form spring physics for driving animation values.
//!
//! Position and velocity at any time come straight from the damped harmonic
//! oscillator's analytic solution, so there is no numeric integration and no
//! per-frame state beyond settle bookkeeping.
//!
//! # Features
//!
//! - **Closed-Form Evaluation**: position/velocity at arbitrary times
//! - **Regime Selection**: critically damped, overdamped, and underdamped
//!   branches chosen once from the discriminant
//! - **Settle Detection**: near-zero sample counting with a terminal settled
//!   state and recorded settle time
//! - **Presets**: gentle/wobbly/stiff/snappy/molasses parameter sets
//! - **Tunable Tolerances**: snapping band and settle threshold as
//!   configuration

pub mod error;
pub mod motion;
pub mod params;
pub mod solution;

pub use error::{Result, SpringError};
pub use motion::{
    MotionState, SpringMotion, Tolerance, DEFAULT_SETTLE_SAMPLE_COUNT, DEFAULT_TOLERANCE_BAND,
};
pub use params::SpringParameters;
pub use solution::{DampingRegime, SpringSolution};
