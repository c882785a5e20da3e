//! Contains utility structures: interpolation, output files, and kinematics

mod interp_pchip;
mod polar_decomposition;
mod sweep_results;

pub use interp_pchip::*;
pub use polar_decomposition::*;
pub use sweep_results::*;
