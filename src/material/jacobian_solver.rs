use super::ModelOgden;
use crate::base::{Config, Formulation, SampleError, Strategy, JACOBIAN_INITIAL_GUESS};
use crate::util::InterpPchip;
use crate::StrError;
use russell_lab::{RootFinder, Vector};

/// Holds the maximum number of secant iterations to polish the root found by Brent's method
const N_POLISH_MAX: usize = 10;

/// Holds the relative perturbation of J to start the secant polishing
const POLISH_PERTURBATION: f64 = 1e-7;

/// Finds the Jacobian J* that zeroes the lateral stress S1(λ3, J) of a formulation
///
/// Two strategies are available (see [Strategy]):
///
/// 1. Root finding: a bracket around `J = 1` is expanded until a sign change is found,
///    then Brent's method finds J*
/// 2. Interpolation: S1 is tabulated over fixed trial Jacobians and the inverse relation
///    J(S1) is interpolated at zero stress with a monotone piecewise-cubic interpolant
///
/// Each call to [JacobianSolver::solve] is independent; thus, the solver can be shared by threads.
pub struct JacobianSolver {
    /// Holds the stress laws
    model: ModelOgden,

    /// Selected strategy
    strategy: Strategy,

    /// Tolerance on |S1(J*)|
    tolerance: f64,

    /// Maximum number of bracket expansions (root finding)
    n_bracket_max: usize,

    /// Trial Jacobians (interpolation)
    j_test: Vector,
}

impl JacobianSolver {
    /// Allocates a new instance
    pub fn new(model: ModelOgden, config: &Config) -> Result<Self, StrError> {
        config.validate()?;
        let j_test = Vector::linspace(config.j_test_min, config.j_test_max, config.n_test_points)?;
        Ok(JacobianSolver {
            model,
            strategy: config.strategy,
            tolerance: config.tol_stress,
            n_bracket_max: config.n_bracket_max,
            j_test,
        })
    }

    /// Returns the selected strategy
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Finds the equilibrium Jacobian J* for a given axial stretch
    ///
    /// The constrained formulation returns 1.0 without solving anything.
    pub fn solve(&self, formulation: Formulation, lambda3: f64) -> Result<f64, SampleError> {
        if !formulation.needs_solver() {
            self.model.eval_constrained(lambda3)?;
            return Ok(1.0);
        }
        match self.strategy {
            Strategy::RootFinding => self.solve_root_finding(formulation, lambda3),
            Strategy::Interpolation => self.solve_interpolation(formulation, lambda3),
        }
    }

    /// Finds J* by bracketing the root around J = 1 and refining it with Brent's method
    pub fn solve_root_finding(&self, formulation: Formulation, lambda3: f64) -> Result<f64, SampleError> {
        let f = |jj: f64| self.model.lateral_stress(formulation, lambda3, jj);
        let (ja, jb) = match self.find_bracket(formulation, lambda3)? {
            Bracket::Root(jj) => return Ok(jj),
            Bracket::Interval(ja, jb) => (ja, jb),
        };
        let root_finder = RootFinder::new();
        let (jj, _) = root_finder
            .brent(ja, jb, &mut 0, |jj, _| f(jj).map_err(|e| e.reason()))
            .map_err(SampleError::RootNotFound)?;
        let residual = f(jj)?;
        if f64::abs(residual) <= self.tolerance {
            return Ok(jj);
        }
        self.polish(formulation, lambda3, jj, residual)
    }

    /// Finds J* by interpolating the inverse of the tabulated lateral stress at zero
    ///
    /// **Note:** The trial Jacobians must bracket the root; otherwise an error is returned.
    pub fn solve_interpolation(&self, formulation: Formulation, lambda3: f64) -> Result<f64, SampleError> {
        let (j_test, s_test) = self.tabulate(formulation, lambda3)?;
        if s_test.iter().any(|s| !s.is_finite()) {
            return Err(SampleError::InterpolationDomain("tabulated lateral stress is not finite"));
        }
        let increasing = s_test.windows(2).all(|w| w[1] > w[0]);
        let decreasing = s_test.windows(2).all(|w| w[1] < w[0]);
        let (xx, yy) = if increasing {
            (s_test, j_test)
        } else if decreasing {
            (s_test.into_iter().rev().collect(), j_test.into_iter().rev().collect())
        } else {
            return Err(SampleError::InterpolationDomain(
                "lateral stress is not monotonic over the trial Jacobians",
            ));
        };
        let n = xx.len();
        if xx[0] > 0.0 || xx[n - 1] < 0.0 {
            return Err(SampleError::InterpolationDomain(
                "zero lateral stress is outside the range of tabulated values",
            ));
        }
        let interp = InterpPchip::new(&xx, &yy).map_err(SampleError::InterpolationDomain)?;
        let jj = interp.eval(0.0).map_err(SampleError::InterpolationDomain)?;
        let residual = self.model.lateral_stress(formulation, lambda3, jj)?;
        if f64::abs(residual) > self.tolerance {
            return Err(SampleError::RootNotFound(
                "lateral stress at the interpolated Jacobian exceeds the tolerance",
            ));
        }
        Ok(jj)
    }

    /// Evaluates the lateral stress at the trial Jacobians
    ///
    /// Returns `(j_test, s_test)`
    pub fn tabulate(&self, formulation: Formulation, lambda3: f64) -> Result<(Vec<f64>, Vec<f64>), SampleError> {
        let j_test = self.j_test.as_data().clone();
        let s_test = j_test
            .iter()
            .map(|jj| self.model.lateral_stress(formulation, lambda3, *jj))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((j_test, s_test))
    }

    /// Expands an interval around the initial guess until the lateral stress changes sign
    fn find_bracket(&self, formulation: Formulation, lambda3: f64) -> Result<Bracket, SampleError> {
        let f = |jj: f64| self.model.lateral_stress(formulation, lambda3, jj);
        let x0 = JACOBIAN_INITIAL_GUESS;
        let f0 = f(x0)?;
        if f0 == 0.0 {
            return Ok(Bracket::Root(x0));
        }
        let mut dx = x0 / 50.0;
        for _ in 0..self.n_bracket_max {
            // the lower end decays geometrically to keep J > 0; it is dropped
            // once it underflows or the lateral stress overflows there
            let a = x0 * f64::exp(-dx / x0);
            let b = x0 + dx;
            let fa = if a > 0.0 { Some(f(a)?).filter(|v| v.is_finite()) } else { None };
            let fb = f(b)?;
            if let Some(fa) = fa {
                if fa == 0.0 {
                    return Ok(Bracket::Root(a));
                }
                if fa * f0 < 0.0 {
                    return Ok(Bracket::Interval(a, x0));
                }
            }
            if fb == 0.0 {
                return Ok(Bracket::Root(b));
            }
            if fb * f0 < 0.0 {
                return Ok(Bracket::Interval(x0, b));
            }
            dx *= f64::sqrt(2.0);
        }
        Err(SampleError::RootNotFound("cannot bracket the root around the initial guess"))
    }

    /// Runs a few secant iterations starting from the root given by Brent's method
    fn polish(&self, formulation: Formulation, lambda3: f64, jj: f64, residual: f64) -> Result<f64, SampleError> {
        let f = |jj: f64| self.model.lateral_stress(formulation, lambda3, jj);
        let (mut x_prev, mut f_prev) = (jj, residual);
        let mut x = jj * (1.0 + POLISH_PERTURBATION);
        for _ in 0..N_POLISH_MAX {
            let fx = f(x)?;
            if f64::abs(fx) <= self.tolerance {
                return Ok(x);
            }
            let den = fx - f_prev;
            if den == 0.0 {
                break;
            }
            let x_next = x - fx * (x - x_prev) / den;
            if !(x_next > 0.0) || !x_next.is_finite() {
                break;
            }
            (x_prev, f_prev) = (x, fx);
            x = x_next;
        }
        Err(SampleError::RootNotFound("lateral stress at the root exceeds the tolerance"))
    }
}

/// Holds the outcome of the bracket search
enum Bracket {
    /// The root was hit exactly during the search
    Root(f64),

    /// Interval with a sign change
    Interval(f64, f64),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
