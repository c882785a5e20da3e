/// Defines the directory where the sweep result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/ogden/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/ogden/test";

/// Initial guess of the Jacobian for the root finding strategy (undeformed state)
pub const JACOBIAN_INITIAL_GUESS: f64 = 1.0;

/// Lower bound of the bracket of trial Jacobians used by the interpolation strategy
pub const DEFAULT_J_TEST_MIN: f64 = 0.9;

/// Upper bound of the bracket of trial Jacobians used by the interpolation strategy
pub const DEFAULT_J_TEST_MAX: f64 = 1.1;

/// Number of trial Jacobians used by the interpolation strategy
pub const DEFAULT_N_TEST_POINTS: usize = 100;

/// Tolerance on the lateral stress at the solved Jacobian
pub const DEFAULT_TOL_STRESS: f64 = 1e-6;

/// Maximum number of bracket expansions before giving up on the root finding strategy
pub const DEFAULT_N_BRACKET_MAX: usize = 50;
