use super::ModelOgden;
use crate::base::{Formulation, SampleError};
use serde::{Deserialize, Serialize};

/// Holds the equilibrium state at one axial stretch sample
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct EquilibriumState {
    /// Axial stretch λ3
    pub lambda3: f64,

    /// Jacobian J = λ1 λ2 λ3 (1.0 for the constrained formulation)
    pub jacobian: f64,

    /// Transverse stretch λ1 = √(J/λ3)
    pub lambda1: f64,

    /// Transverse stretch λ2 = λ1
    pub lambda2: f64,

    /// Lateral stress along direction 1
    pub s1: f64,

    /// Lateral stress along direction 2
    pub s2: f64,

    /// Axial stress
    pub s3: f64,
}

impl EquilibriumState {
    /// Computes the state given the axial stretch and the (solved) Jacobian
    pub fn new(model: &ModelOgden, formulation: Formulation, lambda3: f64, jacobian: f64) -> Result<Self, SampleError> {
        let stress = model.principal(formulation, lambda3, jacobian)?;
        let lambda1 = ModelOgden::transverse_stretch(lambda3, jacobian)?;
        Ok(EquilibriumState {
            lambda3,
            jacobian,
            lambda1,
            lambda2: lambda1,
            s1: stress.s1,
            s2: stress.s2,
            s3: stress.s3,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
