use super::{Strategy, DEFAULT_J_TEST_MAX, DEFAULT_J_TEST_MIN, DEFAULT_N_BRACKET_MAX, DEFAULT_N_TEST_POINTS};
use super::DEFAULT_TOL_STRESS;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds configuration data for the uniaxial sweep and the Jacobian solver
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Maximum axial stretch; the sweep goes from 1.0 to this value (inclusive)
    pub applied_stretch: f64,

    /// Number of stretch samples in the sweep
    pub n_data_points: usize,

    /// Strategy to find the equilibrium Jacobian
    pub strategy: Strategy,

    /// Number of trial Jacobians (interpolation strategy)
    pub n_test_points: usize,

    /// Lower bound of the trial Jacobians (interpolation strategy)
    ///
    /// **Note:** the bracket assumes that the equilibrium Jacobian stays near 1.0.
    /// Material parameters yielding a root outside the bracket are reported as errors.
    pub j_test_min: f64,

    /// Upper bound of the trial Jacobians (interpolation strategy)
    pub j_test_max: f64,

    /// Tolerance on |S1(J*)| at the solved Jacobian (both strategies)
    pub tol_stress: f64,

    /// Maximum number of bracket expansions (root finding strategy)
    pub n_bracket_max: usize,

    /// Stops the sweep at the first failed sample
    pub fail_fast: bool,

    /// Solves the samples in parallel
    pub parallel: bool,

    /// Prints messages
    pub verbose: bool,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            applied_stretch: 1.3,
            n_data_points: 50,
            strategy: Strategy::RootFinding,
            n_test_points: DEFAULT_N_TEST_POINTS,
            j_test_min: DEFAULT_J_TEST_MIN,
            j_test_max: DEFAULT_J_TEST_MAX,
            tol_stress: DEFAULT_TOL_STRESS,
            n_bracket_max: DEFAULT_N_BRACKET_MAX,
            fail_fast: false,
            parallel: false,
            verbose: false,
        }
    }

    /// Sets the maximum axial stretch
    pub fn set_applied_stretch(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0) || !value.is_finite() {
            return Err("applied stretch must be > 0.0");
        }
        self.applied_stretch = value;
        Ok(self)
    }

    /// Sets the number of stretch samples
    pub fn set_n_data_points(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 2 {
            return Err("the number of data points must be ≥ 2");
        }
        self.n_data_points = value;
        Ok(self)
    }

    /// Sets the strategy to find the equilibrium Jacobian
    pub fn set_strategy(&mut self, strategy: Strategy) -> Result<&mut Self, StrError> {
        self.strategy = strategy;
        Ok(self)
    }

    /// Sets the number of trial Jacobians for the interpolation strategy
    pub fn set_n_test_points(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 2 {
            return Err("the number of test points must be ≥ 2");
        }
        self.n_test_points = value;
        Ok(self)
    }

    /// Sets the bracket of trial Jacobians for the interpolation strategy
    pub fn set_j_test_bracket(&mut self, j_min: f64, j_max: f64) -> Result<&mut Self, StrError> {
        if !(j_min > 0.0) {
            return Err("the lower bound of the trial Jacobians must be > 0.0");
        }
        if !(j_max > j_min) || !j_max.is_finite() {
            return Err("the upper bound of the trial Jacobians must be greater than the lower bound");
        }
        self.j_test_min = j_min;
        self.j_test_max = j_max;
        Ok(self)
    }

    /// Sets the tolerance on the lateral stress at the solved Jacobian
    pub fn set_tol_stress(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0) {
            return Err("the stress tolerance must be > 0.0");
        }
        self.tol_stress = value;
        Ok(self)
    }

    /// Sets the maximum number of bracket expansions
    pub fn set_n_bracket_max(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("the maximum number of bracket expansions must be ≥ 1");
        }
        self.n_bracket_max = value;
        Ok(self)
    }

    /// Stops the sweep at the first failed sample
    pub fn set_fail_fast(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.fail_fast = flag;
        Ok(self)
    }

    /// Solves the samples in parallel
    pub fn set_parallel(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.parallel = flag;
        Ok(self)
    }

    /// Enables the printing of messages
    pub fn set_verbose(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.verbose = flag;
        Ok(self)
    }

    /// Checks the consistency of all values (e.g., after reading a JSON file)
    pub fn validate(&self) -> Result<(), StrError> {
        let mut copy = self.clone();
        copy.set_applied_stretch(self.applied_stretch)?
            .set_n_data_points(self.n_data_points)?
            .set_n_test_points(self.n_test_points)?
            .set_j_test_bracket(self.j_test_min, self.j_test_max)?
            .set_tol_stress(self.tol_stress)?
            .set_n_bracket_max(self.n_bracket_max)?;
        Ok(())
    }

    /// Reads a JSON file containing the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn from_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        config.validate()?;
        Ok(config)
    }

    /// Writes a JSON file with the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "applied_stretch = {:?}\n", self.applied_stretch)?;
        write!(f, "n_data_points = {:?}\n", self.n_data_points)?;
        write!(f, "strategy = {:?}\n", self.strategy)?;
        write!(f, "n_test_points = {:?}\n", self.n_test_points)?;
        write!(f, "j_test_min = {:?}\n", self.j_test_min)?;
        write!(f, "j_test_max = {:?}\n", self.j_test_max)?;
        write!(f, "tol_stress = {:?}\n", self.tol_stress)?;
        write!(f, "n_bracket_max = {:?}\n", self.n_bracket_max)?;
        write!(f, "fail_fast = {:?}\n", self.fail_fast)?;
        write!(f, "parallel = {:?}\n", self.parallel)?;
        write!(f, "verbose = {:?}\n", self.verbose)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
