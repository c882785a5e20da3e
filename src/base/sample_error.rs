use super::{Formulation, Strategy};
use crate::StrError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Defines the errors that may occur when computing the state of a single stretch sample
#[derive(Clone, Copy, Debug, Error, PartialEq, Serialize)]
pub enum SampleError {
    /// A non-positive stretch or Jacobian was given to a stress law
    #[error("domain error: {0}")]
    Domain(&'static str),

    /// The root finder could not bracket or converge to the equilibrium Jacobian
    #[error("root not found: {0}")]
    RootNotFound(&'static str),

    /// Zero stress is not reachable by interpolating the tabulated lateral stress
    #[error("interpolation domain error: {0}")]
    InterpolationDomain(&'static str),
}

impl SampleError {
    /// Returns the reason without the error kind
    pub fn reason(&self) -> &'static str {
        match self {
            SampleError::Domain(r) => r,
            SampleError::RootNotFound(r) => r,
            SampleError::InterpolationDomain(r) => r,
        }
    }
}

impl From<SampleError> for StrError {
    fn from(error: SampleError) -> Self {
        error.reason()
    }
}

/// Holds the information about a failed stretch sample
#[derive(Clone, Debug, Serialize)]
pub struct SampleFailure {
    /// Index of the sample in the stretch sequence
    pub index: usize,

    /// Axial stretch
    pub lambda3: f64,

    /// Formulation being solved
    pub formulation: Formulation,

    /// Strategy used to find the Jacobian (None if no solver is needed)
    pub strategy: Option<Strategy>,

    /// The error
    pub error: SampleError,
}

impl fmt::Display for SampleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sample {} (λ3 = {:?}) failed with ", self.formulation, self.index, self.lambda3)?;
        match self.strategy {
            Some(strategy) => write!(f, "{}", strategy)?,
            None => write!(f, "closed form")?,
        }
        write!(f, ": {}", self.error)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
