use super::{EquilibriumState, JacobianSolver, ModelOgden};
use crate::base::{Config, Formulation, ParamOgden, SampleError, SampleFailure};
use crate::util::SweepResults;
use crate::StrError;
use rayon::prelude::*;
use russell_lab::Vector;

/// Sweeps the axial stretch from 1.0 to the applied stretch and computes the equilibrium states
///
/// Each sample is solved independently. The results are stored in the same order as the stretches,
/// even when the samples are solved in parallel.
pub struct UniaxialSweep {
    /// Holds the parameters
    param: ParamOgden,

    /// Holds the configuration
    config: Config,

    /// Holds the stress laws
    model: ModelOgden,

    /// Finds the equilibrium Jacobian
    solver: JacobianSolver,

    /// Holds the axial stretches λ3
    stretches: Vector,
}

impl UniaxialSweep {
    /// Allocates a new instance
    pub fn new(param: &ParamOgden, config: &Config) -> Result<Self, StrError> {
        let model = ModelOgden::new(param)?;
        let solver = JacobianSolver::new(model, config)?;
        let stretches = Vector::linspace(1.0, config.applied_stretch, config.n_data_points)?;
        Ok(UniaxialSweep {
            param: *param,
            config: config.clone(),
            model,
            solver,
            stretches,
        })
    }

    /// Returns the axial stretches
    pub fn stretches(&self) -> &[f64] {
        self.stretches.as_data()
    }

    /// Returns the Jacobian solver
    pub fn solver(&self) -> &JacobianSolver {
        &self.solver
    }

    /// Computes the equilibrium state of a single sample
    pub fn solve_sample(&self, formulation: Formulation, lambda3: f64) -> Result<EquilibriumState, SampleError> {
        let jacobian = if formulation.needs_solver() {
            self.solver.solve(formulation, lambda3)?
        } else {
            1.0
        };
        EquilibriumState::new(&self.model, formulation, lambda3, jacobian)
    }

    /// Runs the sweep for one formulation
    ///
    /// Failed samples are collected in [SweepResults::failures] and do not stop the sweep,
    /// unless [Config::fail_fast] is set; then, the first failure (in stretch order) is printed
    /// and its reason is returned as an error.
    pub fn run(&self, formulation: Formulation) -> Result<SweepResults, StrError> {
        let stretches = self.stretches.as_data();
        let outcomes: Vec<Result<EquilibriumState, SampleError>> = if self.config.parallel {
            stretches
                .par_iter()
                .map(|lambda3| self.solve_sample(formulation, *lambda3))
                .collect()
        } else if self.config.fail_fast {
            let mut outcomes = Vec::with_capacity(stretches.len());
            for lambda3 in stretches {
                let outcome = self.solve_sample(formulation, *lambda3);
                let failed = outcome.is_err();
                outcomes.push(outcome);
                if failed {
                    break;
                }
            }
            outcomes
        } else {
            stretches
                .iter()
                .map(|lambda3| self.solve_sample(formulation, *lambda3))
                .collect()
        };

        let strategy = if formulation.needs_solver() {
            Some(self.solver.strategy())
        } else {
            None
        };
        let mut results = SweepResults::new(formulation, strategy, self.param);
        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(state) => results.states.push(state),
                Err(error) => {
                    let failure = SampleFailure {
                        index,
                        lambda3: stretches[index],
                        formulation,
                        strategy,
                        error,
                    };
                    if self.config.fail_fast {
                        println!("❌ {}", failure);
                        return Err(error.into());
                    }
                    if self.config.verbose {
                        println!("❌ {}", failure);
                    }
                    results.failures.push(failure);
                }
            }
        }
        if self.config.verbose {
            println!(
                "{}: {} samples solved, {} failed",
                formulation,
                results.states.len(),
                results.failures.len()
            );
        }
        Ok(results)
    }

    /// Runs the sweep for all formulations
    pub fn run_all(&self) -> Result<Vec<SweepResults>, StrError> {
        Formulation::all().iter().map(|f| self.run(*f)).collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
