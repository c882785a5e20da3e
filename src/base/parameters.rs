use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the parameters of the one-term Ogden model
///
/// The strain-energy function reads:
///
/// ```text
/// W = (c1/m1²) (λ1^m1 + λ2^m1 + λ3^m1 - 3) + U(J)
/// ```
///
/// where `U(J)` is the volumetric contribution. The meaning of `k`
/// depends on the formulation (see [crate::base::Formulation]).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamOgden {
    /// Shear-modulus-like coefficient (must be > 0)
    pub c1: f64,

    /// Ogden exponent (nonlinearity parameter; must be ≠ 0)
    pub m1: f64,

    /// Bulk-modulus-like coefficient (must be > 0)
    pub k: f64,
}

impl ParamOgden {
    /// Allocates a new instance after validating the parameters
    pub fn new(c1: f64, m1: f64, k: f64) -> Result<Self, StrError> {
        let param = ParamOgden { c1, m1, k };
        param.validate()?;
        Ok(param)
    }

    /// Checks whether the parameters are physically admissible
    pub fn validate(&self) -> Result<(), StrError> {
        if !self.c1.is_finite() || !self.m1.is_finite() || !self.k.is_finite() {
            return Err("Ogden parameters must be finite");
        }
        if self.c1 <= 0.0 {
            return Err("c1 parameter for the Ogden model must be > 0.0");
        }
        if self.m1 == 0.0 {
            return Err("m1 parameter for the Ogden model must be ≠ 0.0");
        }
        if self.k <= 0.0 {
            return Err("k parameter for the Ogden model must be > 0.0");
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
