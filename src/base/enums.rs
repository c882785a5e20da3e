use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines how the volumetric and deviatoric contributions enter the strain-energy function
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Formulation {
    /// Incompressible material with `λ1 = λ2 = λ3^(-1/2)` and `J = 1` identically
    ///
    /// The stress is a closed-form function of the stretch; no Jacobian is solved for.
    Constrained,

    /// Compressible material with volumetric term `k (J - 1)` coupled to the isochoric part
    Unconstrained,

    /// Compressible material with volumetric term `k ln(J)/J` and deviatoric projection
    Uncoupled,
}

impl Formulation {
    /// Returns all formulations in the order they are usually reported
    pub fn all() -> [Formulation; 3] {
        [Formulation::Constrained, Formulation::Unconstrained, Formulation::Uncoupled]
    }

    /// Indicates that the equilibrium Jacobian must be found numerically
    pub fn needs_solver(&self) -> bool {
        match self {
            Formulation::Constrained => false,
            Formulation::Unconstrained | Formulation::Uncoupled => true,
        }
    }

    /// Returns a lowercase key for filenames
    pub fn key(&self) -> &'static str {
        match self {
            Formulation::Constrained => "constrained",
            Formulation::Unconstrained => "unconstrained",
            Formulation::Uncoupled => "uncoupled",
        }
    }
}

impl fmt::Display for Formulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formulation::Constrained => write!(f, "Constrained"),
            Formulation::Unconstrained => write!(f, "Unconstrained"),
            Formulation::Uncoupled => write!(f, "Uncoupled"),
        }
    }
}

/// Defines the method to find the Jacobian that zeroes the lateral stress
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Strategy {
    /// Bracket search around `J = 1` followed by Brent's method
    RootFinding,

    /// Tabulates the lateral stress over a fixed bracket of trial Jacobians and
    /// interpolates the inverse relation at zero stress (monotone piecewise-cubic)
    Interpolation,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::RootFinding => write!(f, "root finding"),
            Strategy::Interpolation => write!(f, "interpolation"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Formulation, Strategy};

    #[test]
    fn formulation_works() {
        let all = Formulation::all();
        assert_eq!(all.len(), 3);
        assert!(!Formulation::Constrained.needs_solver());
        assert!(Formulation::Unconstrained.needs_solver());
        assert!(Formulation::Uncoupled.needs_solver());
        assert_eq!(Formulation::Uncoupled.key(), "uncoupled");
        assert_eq!(format!("{}", Formulation::Unconstrained), "Unconstrained");
    }

    #[test]
    fn derive_works() {
        let strategy = Strategy::Interpolation;
        let clone = strategy.clone();
        assert_eq!(clone, strategy);
        assert_eq!(format!("{:?}", strategy), "Interpolation");
        assert_eq!(format!("{}", Strategy::RootFinding), "root finding");
        let json = serde_json::to_string(&Formulation::Constrained).unwrap();
        assert_eq!(json, "\"Constrained\"");
    }
}
