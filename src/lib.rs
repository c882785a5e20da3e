//! Ogden hyperelastic models under uniaxial loading
//!
//! This crate computes the stress-stretch response of the one-term Ogden model in three formulations:
//!
//! * **Constrained** -- incompressible; closed-form stress
//! * **Unconstrained** -- compressible, coupled volumetric term `k (J - 1)`
//! * **Uncoupled** -- compressible, volumetric term `k ln(J)/J` plus deviatoric projection
//!
//! For the compressible formulations, the Jacobian J that zeroes the lateral stress is found
//! for each axial stretch by root finding or by interpolating tabulated stresses.
//!
//! # Example
//!
//! ```
//! use ogden::prelude::*;
//!
//! fn main() -> Result<(), StrError> {
//!     let param = SampleParams::param_ogden();
//!     let mut config = Config::new();
//!     config.set_applied_stretch(1.3)?.set_n_data_points(11)?;
//!     let sweep = UniaxialSweep::new(&param, &config)?;
//!     let results = sweep.run(Formulation::Unconstrained)?;
//!     assert_eq!(results.states.len(), 11);
//!     assert!(results.max_abs_lateral_stress() < 1e-6);
//!     Ok(())
//! }
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
pub mod util;
