//! Implements the base structures: parameters, configuration, and error types

mod config;
mod constants;
mod enums;
mod parameters;
mod sample_error;
mod sample_params;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_error::*;
pub use crate::base::sample_params::*;
