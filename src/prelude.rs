//! Makes available common structures needed to run a uniaxial sweep
//!
//! You may write `use ogden::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, Formulation, ParamOgden, SampleError, SampleParams, Strategy};
pub use crate::base::{DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::material::{EquilibriumState, JacobianSolver, ModelOgden, Plotter, UniaxialSweep};
pub use crate::util::{PolarDecomposition, SweepResults};
pub use crate::StrError;
