//! Local-search metaheuristics for small Traveling Salesman instances.
//!
//! Provides the search engines and the plumbing needed to benchmark them:
//!
//! - **Tour model** ([`tour`]): permutation tours, the shared
//!   [`DistanceMatrix`](tour::DistanceMatrix) and the closed-loop cost.
//! - **Neighborhoods** ([`neighborhood`]): swap and 2-opt moves, as
//!   "all neighbors" and "one random neighbor" generators.
//! - **Hill-Climbing** ([`hc`]): first- or best-improvement descent to a
//!   local optimum.
//! - **Multi-Start Hill-Climbing** ([`multistart`]): repeated descents from
//!   random tours, keeping the best.
//! - **Simulated Annealing** ([`sa`]): Metropolis acceptance with geometric
//!   cooling.
//! - **Instances** ([`instance`]): TSPLIB `NODE_COORD_SECTION` loading.
//! - **Experiments** ([`experiment`]): repeated seeded runs, timing and
//!   summary statistics.
//!
//! # Architecture
//!
//! Engines borrow the distance matrix and own everything else, including
//! their random generator, so a `run` never touches shared mutable state.
//! Every engine is built with a fallible constructor that checks its
//! inputs; `run` itself cannot fail.

pub mod error;
pub mod experiment;
pub mod hc;
pub mod instance;
pub mod multistart;
pub mod neighborhood;
pub mod random;
pub mod sa;
pub mod tour;

pub use error::{Result, SearchError};
