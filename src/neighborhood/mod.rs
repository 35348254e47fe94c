//! Neighborhood generators for permutation tours.
//!
//! Two move families are provided, each with an "all neighbors" and a
//! "one random neighbor" variant. Every generated neighbor is a fresh
//! vector that shares nothing with the input or with other neighbors.
//!
//! # Move Families
//!
//! - [`swap`]: exchange two positions. O(n) per neighbor (copy)
//! - [`two_opt`]: reverse a segment `tour[i..=j]`. O(n) per neighbor
//!
//! The [`Neighborhood`] enum selects a family at runtime so the engines
//! can switch moves without touching their loops.
//!
//! # References
//!
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"
//! - Lin (1965), "Computer Solutions of the Traveling Salesman Problem"

pub mod swap;
pub mod two_opt;

pub use swap::{generate_all_swap_neighbors, generate_random_swap_neighbor, generate_swap_neighbor};
pub use two_opt::{generate_2opt_neighbor, generate_all_2opt_neighbors, generate_random_2opt_neighbor};

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::tour::Tour;

/// Position pairs `(i, j)` with `i < j < n`, `i` ascending then `j`
/// ascending. This is the enumeration order of every "all neighbors"
/// generator and of first-improvement scans.
pub fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Move family used by a search engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// Exchange the cities at positions `i` and `j`.
    #[default]
    Swap,
    /// Reverse the segment between positions `i` and `j`.
    TwoOpt,
}

impl Neighborhood {
    /// Applies the move at positions `i < j`, returning a new tour.
    pub fn apply(self, tour: &[usize], i: usize, j: usize) -> Tour {
        match self {
            Neighborhood::Swap => generate_swap_neighbor(tour, i, j),
            Neighborhood::TwoOpt => generate_2opt_neighbor(tour, i, j),
        }
    }

    /// Number of neighbors of a tour with `n` cities: `n * (n - 1) / 2`.
    pub fn size(self, n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }

    /// Every neighbor, in [`pairs`] order.
    pub fn all_neighbors(self, tour: &[usize]) -> Vec<Tour> {
        match self {
            Neighborhood::Swap => generate_all_swap_neighbors(tour),
            Neighborhood::TwoOpt => generate_all_2opt_neighbors(tour),
        }
    }

    /// One uniformly drawn neighbor.
    ///
    /// # Panics
    /// Panics if `tour` has fewer than 2 cities.
    pub fn random_neighbor<R: Rng + ?Sized>(self, tour: &[usize], rng: &mut R) -> Tour {
        match self {
            Neighborhood::Swap => generate_random_swap_neighbor(tour, rng),
            Neighborhood::TwoOpt => generate_random_2opt_neighbor(tour, rng),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Neighborhood::Swap => "swap",
            Neighborhood::TwoOpt => "two_opt",
        }
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Neighborhood {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "swap" => Ok(Neighborhood::Swap),
            "two_opt" | "2opt" | "2-opt" => Ok(Neighborhood::TwoOpt),
            other => Err(SearchError::invalid_config(format!(
                "unknown neighborhood '{other}', expected 'swap' or 'two_opt'"
            ))),
        }
    }
}
