//! Hill-Climbing (HC).
//!
//! Iterative improvement from a single starting tour. Each iteration moves
//! to a strictly better neighbor; the search ends at a local optimum of the
//! active move family.
//!
//! - [`HcMode::Best`]: steepest descent over the full neighborhood
//! - [`HcMode::First`]: first strictly improving neighbor in scan order
//!
//! # References
//!
//! - Aarts & Lenstra (1997), *Local Search in Combinatorial Optimization*
//! - Hansen & Mladenović (2006), "First vs. best improvement: An empirical study"

mod config;
mod runner;

pub use config::{HcConfig, HcMode};
pub use runner::{HcResult, HillClimbing};
