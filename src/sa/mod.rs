//! Simulated Annealing (SA).
//!
//! A single-tour trajectory search that accepts worsening moves with a
//! probability that shrinks as the temperature cools, allowing the search
//! to leave local optima early and settle later.
//!
//! Cooling is geometric: `T_{k+1} = alpha * T_k`, and the run ends once
//! `T <= T_min`.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SimulatedAnnealing};
