//! Implements the Ogden stress laws, the Jacobian solver, and the uniaxial sweep

mod equilibrium_state;
mod jacobian_solver;
mod ogden;
mod plotter;
mod uniaxial_sweep;
pub use crate::material::equilibrium_state::*;
pub use crate::material::jacobian_solver::*;
pub use crate::material::ogden::*;
pub use crate::material::plotter::*;
pub use crate::material::uniaxial_sweep::*;
