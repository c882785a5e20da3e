use crate::material::EquilibriumState;
use crate::StrError;
use russell_lab::{mat_inverse, mat_mat_mul, mat_svd, mat_t_mat_mul, Matrix, Vector};

/// Implements the polar decomposition of a deformation gradient tensor
///
/// ```text
/// F = R·U = V·R
/// ```
///
/// where R is a rotation, U is the right stretch tensor, and V is the left stretch tensor.
///
/// The decomposition is obtained from the singular value decomposition `F = W·Σ·Pᵀ`:
///
/// ```text
/// R = W·Pᵀ
/// U = P·Σ·Pᵀ
/// V = W·Σ·Wᵀ
/// ```
///
/// The singular values Σ are the principal stretches.
pub struct PolarDecomposition {
    /// Rotation tensor R
    pub rr: Matrix,

    /// Right stretch tensor U
    pub uu: Matrix,

    /// Left stretch tensor V
    pub vv: Matrix,

    /// Principal stretches in decreasing order
    pub stretches: Vector,
}

impl PolarDecomposition {
    /// Computes the polar decomposition of a 3×3 deformation gradient with det(F) > 0
    pub fn new(ff: &Matrix) -> Result<Self, StrError> {
        if ff.dims() != (3, 3) {
            return Err("the deformation gradient must be a 3×3 matrix");
        }
        let mut ff_inv = Matrix::new(3, 3);
        let det =
            mat_inverse(&mut ff_inv, ff).map_err(|_| "the deformation gradient must have a positive determinant")?;
        if !(det > 0.0) {
            return Err("the deformation gradient must have a positive determinant");
        }

        // F = W·Σ·Pᵀ
        let mut a = ff.clone();
        let mut s = Vector::new(3);
        let mut ww = Matrix::new(3, 3);
        let mut pt = Matrix::new(3, 3);
        mat_svd(&mut s, &mut ww, &mut pt, &mut a)?;
        let sigma = Matrix::from(&[[s[0], 0.0, 0.0], [0.0, s[1], 0.0], [0.0, 0.0, s[2]]]);
        let identity = Matrix::from(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

        // R = W·Pᵀ
        let mut rr = Matrix::new(3, 3);
        mat_mat_mul(&mut rr, 1.0, &ww, &pt, 0.0)?;

        // U = P·(Σ·Pᵀ)
        let mut sigma_pt = Matrix::new(3, 3);
        let mut uu = Matrix::new(3, 3);
        mat_mat_mul(&mut sigma_pt, 1.0, &sigma, &pt, 0.0)?;
        mat_t_mat_mul(&mut uu, 1.0, &pt, &sigma_pt, 0.0)?;

        // V = W·(Σ·Wᵀ)
        let mut wt = Matrix::new(3, 3);
        let mut sigma_wt = Matrix::new(3, 3);
        let mut vv = Matrix::new(3, 3);
        mat_t_mat_mul(&mut wt, 1.0, &ww, &identity, 0.0)?;
        mat_mat_mul(&mut sigma_wt, 1.0, &sigma, &wt, 0.0)?;
        mat_mat_mul(&mut vv, 1.0, &ww, &sigma_wt, 0.0)?;

        Ok(PolarDecomposition {
            rr,
            uu,
            vv,
            stretches: s,
        })
    }

    /// Returns the deformation gradient of a uniaxial equilibrium state
    ///
    /// ```text
    /// F = diag(λ1, λ2, λ3)
    /// ```
    pub fn uniaxial_deformation_gradient(state: &EquilibriumState) -> Matrix {
        Matrix::from(&[
            [state.lambda1, 0.0, 0.0],
            [0.0, state.lambda2, 0.0],
            [0.0, 0.0, state.lambda3],
        ])
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::PolarDecomposition;
    use crate::base::{Formulation, SampleParams};
    use crate::material::{EquilibriumState, ModelOgden};
    use russell_lab::{approx_eq, mat_approx_eq, mat_inverse, mat_mat_mul, mat_t_mat_mul, Matrix};

    fn determinant(a: &Matrix) -> f64 {
        let mut ai = Matrix::new(3, 3);
        mat_inverse(&mut ai, a).unwrap()
    }

    fn check_decomposition(ff: &Matrix, pd: &PolarDecomposition) {
        // F = R·U = V·R
        let mut ru = Matrix::new(3, 3);
        let mut vr = Matrix::new(3, 3);
        mat_mat_mul(&mut ru, 1.0, &pd.rr, &pd.uu, 0.0).unwrap();
        mat_mat_mul(&mut vr, 1.0, &pd.vv, &pd.rr, 0.0).unwrap();
        mat_approx_eq(&ru, ff, 1e-13);
        mat_approx_eq(&vr, ff, 1e-13);

        // R is a proper rotation
        let mut rt_r = Matrix::new(3, 3);
        mat_t_mat_mul(&mut rt_r, 1.0, &pd.rr, &pd.rr, 0.0).unwrap();
        mat_approx_eq(&rt_r, &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]], 1e-13);
        approx_eq(determinant(&pd.rr), 1.0, 1e-13);

        // U and V are symmetric
        for i in 0..3 {
            for j in 0..3 {
                approx_eq(pd.uu.get(i, j), pd.uu.get(j, i), 1e-13);
                approx_eq(pd.vv.get(i, j), pd.vv.get(j, i), 1e-13);
            }
        }

        // det(F) = λ1 λ2 λ3
        let s = &pd.stretches;
        approx_eq(s[0] * s[1] * s[2], determinant(ff), 1e-13);
    }

    #[test]
    fn new_captures_errors() {
        let ff = Matrix::new(2, 2);
        assert_eq!(
            PolarDecomposition::new(&ff).err(),
            Some("the deformation gradient must be a 3×3 matrix")
        );
        let ff = Matrix::from(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]]);
        assert_eq!(
            PolarDecomposition::new(&ff).err(),
            Some("the deformation gradient must have a positive determinant")
        );
        let ff = Matrix::from(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]);
        assert_eq!(
            PolarDecomposition::new(&ff).err(),
            Some("the deformation gradient must have a positive determinant")
        );
    }

    #[test]
    fn simple_shear_works() {
        let gamma = 0.5;
        let ff = Matrix::from(&[[1.0, gamma, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let pd = PolarDecomposition::new(&ff).unwrap();
        check_decomposition(&ff, &pd);

        // principal stretches of simple shear: √(1 + γ²/4) ± γ/2 and 1
        let a = f64::sqrt(1.0 + gamma * gamma / 4.0);
        approx_eq(pd.stretches[0], a + gamma / 2.0, 1e-14);
        approx_eq(pd.stretches[1], 1.0, 1e-14);
        approx_eq(pd.stretches[2], a - gamma / 2.0, 1e-14);
    }

    #[test]
    fn rotated_stretch_works() {
        let theta = std::f64::consts::PI / 6.0;
        let (c, s) = (f64::cos(theta), f64::sin(theta));
        let rot = Matrix::from(&[[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]);
        let stretch = Matrix::from(&[[2.0, 0.0, 0.0], [0.0, 0.5, 0.0], [0.0, 0.0, 1.0]]);
        let mut ff = Matrix::new(3, 3);
        mat_mat_mul(&mut ff, 1.0, &rot, &stretch, 0.0).unwrap();
        let pd = PolarDecomposition::new(&ff).unwrap();
        check_decomposition(&ff, &pd);
        mat_approx_eq(&pd.rr, &rot, 1e-13);
        mat_approx_eq(&pd.uu, &stretch, 1e-13);
        approx_eq(pd.stretches[0], 2.0, 1e-14);
        approx_eq(pd.stretches[1], 1.0, 1e-14);
        approx_eq(pd.stretches[2], 0.5, 1e-14);
    }

    #[test]
    fn uniaxial_state_works() {
        let model = ModelOgden::new(&SampleParams::param_ogden()).unwrap();
        let state = EquilibriumState::new(&model, Formulation::Unconstrained, 1.2, 1.0001).unwrap();
        let ff = PolarDecomposition::uniaxial_deformation_gradient(&state);
        let pd = PolarDecomposition::new(&ff).unwrap();
        check_decomposition(&ff, &pd);
        approx_eq(determinant(&ff), 1.0001, 1e-14);
        approx_eq(pd.stretches[0], 1.2, 1e-14);
        mat_approx_eq(&pd.uu, &ff, 1e-14);
    }
}
