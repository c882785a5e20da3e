use crate::base::{Formulation, ParamOgden, SampleFailure, Strategy};
use crate::material::EquilibriumState;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the results of a uniaxial sweep for one formulation
///
/// **Note:** The failures are written to JSON files but are not read back.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SweepResults {
    /// Formulation
    pub formulation: Formulation,

    /// Strategy used to find the Jacobian (None for the constrained formulation)
    pub strategy: Option<Strategy>,

    /// Material parameters
    pub param: ParamOgden,

    /// Successfully computed states, in stretch order
    pub states: Vec<EquilibriumState>,

    /// Failed samples, in stretch order
    #[serde(skip_deserializing)]
    pub failures: Vec<SampleFailure>,
}

impl SweepResults {
    /// Allocates a new (empty) structure
    pub fn new(formulation: Formulation, strategy: Option<Strategy>, param: ParamOgden) -> Self {
        SweepResults {
            formulation,
            strategy,
            param,
            states: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Returns the axial stretches
    pub fn lambda3(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.lambda3).collect()
    }

    /// Returns the Jacobians
    pub fn jacobians(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.jacobian).collect()
    }

    /// Returns the stresses along direction 1
    pub fn s1(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.s1).collect()
    }

    /// Returns the stresses along direction 2
    pub fn s2(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.s2).collect()
    }

    /// Returns the axial stresses
    pub fn s3(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.s3).collect()
    }

    /// Returns the maximum absolute value of the lateral stresses (S1 and S2)
    pub fn max_abs_lateral_stress(&self) -> f64 {
        self.states
            .iter()
            .fold(0.0, |acc, s| f64::max(acc, f64::max(f64::abs(s.s1), f64::abs(s.s2))))
    }

    /// Returns the (min, max) values of a sequence, or None if it is empty
    pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().fold(f64::INFINITY, |acc, v| f64::min(acc, *v));
        let max = values.iter().fold(f64::NEG_INFINITY, |acc, v| f64::max(acc, *v));
        Some((min, max))
    }

    /// Reads a JSON file containing the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn from<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let results = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(results)
    }

    /// Writes a JSON file with the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write<P>(&self, full_path: &P) -> Result<(), StrError>
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

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
