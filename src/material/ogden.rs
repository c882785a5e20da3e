use crate::base::{Formulation, ParamOgden, SampleError};
use crate::StrError;

/// Holds the three principal stresses (Cauchy) along the loading directions
///
/// **Note:** The components are labelled by direction (3 is the loading direction), not sorted by magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrincipalStresses {
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
}

/// Implements the one-term Ogden model under uniaxial loading
///
/// The transverse stretches are equal (uniaxial symmetry):
///
/// ```text
/// λ1 = λ2 = √(J/λ3)
/// ```
///
/// # Reference
///
/// * Ogden RW (1972) Large deformation isotropic elasticity - on the correlation of theory and
///   experiment for incompressible rubberlike solids. Proc. R. Soc. Lond. A 326, 565-584
#[derive(Clone, Copy, Debug)]
pub struct ModelOgden {
    c1: f64, // shear-modulus-like coefficient
    m1: f64, // Ogden exponent
    k: f64,  // bulk-modulus-like coefficient
}

impl ModelOgden {
    /// Allocates a new instance
    pub fn new(param: &ParamOgden) -> Result<Self, StrError> {
        param.validate()?;
        Ok(ModelOgden {
            c1: param.c1,
            m1: param.m1,
            k: param.k,
        })
    }

    /// Returns the transverse stretch `λ1 = λ2 = √(J/λ3)`
    pub fn transverse_stretch(lambda3: f64, jj: f64) -> Result<f64, SampleError> {
        check_stretch(lambda3)?;
        check_jacobian(jj)?;
        Ok(f64::sqrt(jj / lambda3))
    }

    /// Calculates the stresses of the constrained (incompressible) formulation
    ///
    /// ```text
    /// S1 = S2 = 0
    /// S3 = (c1/m1) (λ3^m1 - λ3^(-m1/2))
    /// ```
    pub fn eval_constrained(&self, lambda3: f64) -> Result<PrincipalStresses, SampleError> {
        check_stretch(lambda3)?;
        let s3 = (self.c1 / self.m1) * (f64::powf(lambda3, self.m1) - f64::powf(lambda3, -self.m1 / 2.0));
        Ok(PrincipalStresses { s1: 0.0, s2: 0.0, s3 })
    }

    /// Calculates the lateral stress of the unconstrained (coupled) formulation
    ///
    /// ```text
    /// S1 = k (J - 1) + (c1/m1) (λ1^m1 - 1) / J
    /// ```
    pub fn lateral_stress_unconstrained(&self, lambda3: f64, jj: f64) -> Result<f64, SampleError> {
        let lambda1 = ModelOgden::transverse_stretch(lambda3, jj)?;
        Ok(self.coupled_component(lambda1, jj))
    }

    /// Calculates all principal stresses of the unconstrained (coupled) formulation
    ///
    /// ```text
    /// Si = k (J - 1) + (c1/m1) (λi^m1 - 1) / J
    /// ```
    pub fn principal_unconstrained(&self, lambda3: f64, jj: f64) -> Result<PrincipalStresses, SampleError> {
        let lambda1 = ModelOgden::transverse_stretch(lambda3, jj)?;
        let s1 = self.coupled_component(lambda1, jj);
        Ok(PrincipalStresses {
            s1,
            s2: s1,
            s3: self.coupled_component(lambda3, jj),
        })
    }

    /// Calculates the lateral stress of the uncoupled formulation
    ///
    /// This is the pre-simplified form using `λ1^m1 = (J/λ3)^(m1/2)`:
    ///
    /// ```text
    /// S1 = k ln(J)/J + (c1/m1) ((J/λ3)^(m1/2) - ⅓ (2 (J/λ3)^(m1/2) + λ3^m1)) / J
    /// ```
    pub fn lateral_stress_uncoupled(&self, lambda3: f64, jj: f64) -> Result<f64, SampleError> {
        check_stretch(lambda3)?;
        check_jacobian(jj)?;
        let a = f64::powf(jj / lambda3, self.m1 / 2.0);
        let b = f64::powf(lambda3, self.m1);
        let dev = a - (2.0 * a + b) / 3.0;
        Ok(self.k * f64::ln(jj) / jj + (self.c1 / self.m1) * dev / jj)
    }

    /// Calculates all principal stresses of the uncoupled formulation
    ///
    /// ```text
    /// Si = k ln(J)/J + (c1/m1) (λi^m1 - ⅓ (λ1^m1 + λ2^m1 + λ3^m1)) / J
    /// ```
    pub fn principal_uncoupled(&self, lambda3: f64, jj: f64) -> Result<PrincipalStresses, SampleError> {
        let lambda1 = ModelOgden::transverse_stretch(lambda3, jj)?;
        let p1 = f64::powf(lambda1, self.m1);
        let p3 = f64::powf(lambda3, self.m1);
        let mean = (p1 + p1 + p3) / 3.0;
        let vol = self.k * f64::ln(jj) / jj;
        let fac = self.c1 / self.m1 / jj;
        let s1 = vol + fac * (p1 - mean);
        Ok(PrincipalStresses {
            s1,
            s2: s1,
            s3: vol + fac * (p3 - mean),
        })
    }

    /// Calculates the lateral stress S1(λ3, J) for a formulation
    ///
    /// The constrained formulation has a zero lateral stress, regardless of `J`.
    pub fn lateral_stress(&self, formulation: Formulation, lambda3: f64, jj: f64) -> Result<f64, SampleError> {
        match formulation {
            Formulation::Constrained => Ok(self.eval_constrained(lambda3)?.s1),
            Formulation::Unconstrained => self.lateral_stress_unconstrained(lambda3, jj),
            Formulation::Uncoupled => self.lateral_stress_uncoupled(lambda3, jj),
        }
    }

    /// Calculates the principal stresses for a formulation
    ///
    /// The constrained formulation ignores `J` (it is 1.0 identically).
    pub fn principal(&self, formulation: Formulation, lambda3: f64, jj: f64) -> Result<PrincipalStresses, SampleError> {
        match formulation {
            Formulation::Constrained => self.eval_constrained(lambda3),
            Formulation::Unconstrained => self.principal_unconstrained(lambda3, jj),
            Formulation::Uncoupled => self.principal_uncoupled(lambda3, jj),
        }
    }

    /// Returns the component `k (J - 1) + (c1/m1) (λ^m1 - 1) / J`
    fn coupled_component(&self, lambda: f64, jj: f64) -> f64 {
        self.k * (jj - 1.0) + (self.c1 / self.m1) * (f64::powf(lambda, self.m1) - 1.0) / jj
    }
}

fn check_stretch(lambda3: f64) -> Result<(), SampleError> {
    if lambda3 > 0.0 && lambda3.is_finite() {
        Ok(())
    } else {
        Err(SampleError::Domain("stretch must be positive and finite"))
    }
}

fn check_jacobian(jj: f64) -> Result<(), SampleError> {
    if jj > 0.0 && jj.is_finite() {
        Ok(())
    } else {
        Err(SampleError::Domain("Jacobian must be positive and finite"))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
