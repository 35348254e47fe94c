//! Multi-Start Hill-Climbing.
//!
//! Runs Hill-Climbing from many uniformly random tours and keeps the best
//! local optimum. Restarts are independent; only the incumbent tour and
//! cost carry over from one to the next.
//!
//! # References
//!
//! - Martí, Resende & Ribeiro (2013), "Multi-start methods for combinatorial optimization"

mod config;
mod runner;

pub use config::MultiStartConfig;
pub use runner::{MultiStartHillClimbing, MultiStartResult};
