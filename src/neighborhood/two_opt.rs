//! 2-opt move: reverse a contiguous segment of the tour.
//!
//! Reversing `tour[i..=j]` replaces the edges entering and leaving the
//! segment, which is how 2-opt removes a crossing.

use rand::seq::index;
use rand::Rng;

use super::pairs;
use crate::tour::Tour;

/// Copy of `tour` with `tour[i..=j]` reversed. Requires `i <= j`.
///
/// # Panics
/// Panics if `j` is out of range or `i > j`.
pub fn generate_2opt_neighbor(tour: &[usize], i: usize, j: usize) -> Tour {
    let mut neighbor = tour.to_vec();
    neighbor[i..=j].reverse();
    neighbor
}

/// One 2-opt neighbor: two distinct positions, ordered so that `i < j`.
///
/// # Panics
/// Panics if `tour` has fewer than 2 cities.
pub fn generate_random_2opt_neighbor<R: Rng + ?Sized>(tour: &[usize], rng: &mut R) -> Tour {
    let picked = index::sample(rng, tour.len(), 2);
    let (a, b) = (picked.index(0), picked.index(1));
    generate_2opt_neighbor(tour, a.min(b), a.max(b))
}

/// Every 2-opt neighbor over pairs `i < j`, same order as the swap
/// neighborhood. Returns `n * (n - 1) / 2` independent tours.
pub fn generate_all_2opt_neighbors(tour: &[usize]) -> Vec<Tour> {
    pairs(tour.len())
        .map(|(i, j)| generate_2opt_neighbor(tour, i, j))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::{is_permutation, DistanceMatrix};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reverses_inner_segment() {
        let tour = vec![0, 1, 2, 3, 4, 5];
        assert_eq!(generate_2opt_neighbor(&tour, 1, 4), vec![0, 4, 3, 2, 1, 5]);
        assert_eq!(tour, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_full_reversal() {
        assert_eq!(generate_2opt_neighbor(&[0, 1, 2], 0, 2), vec![2, 1, 0]);
    }

    #[test]
    fn test_all_2opt_neighbors_count() {
        let tour: Vec<usize> = (0..7).collect();
        let neighbors = generate_all_2opt_neighbors(&tour);
        assert_eq!(neighbors.len(), 21);
        assert!(neighbors.iter().all(|t| is_permutation(t, 7)));
        assert!(generate_all_2opt_neighbors(&[0]).is_empty());
    }

    #[test]
    fn test_2opt_uncrosses_square() {
        let matrix = DistanceMatrix::from_coordinates(&[
            (0.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (10.0, 0.0),
        ]);
        let crossed = vec![0, 2, 1, 3];
        let fixed = generate_2opt_neighbor(&crossed, 1, 2);
        assert_eq!(matrix.tour_cost(&crossed), 48.0);
        assert_eq!(matrix.tour_cost(&fixed), 40.0);
    }

    #[test]
    fn test_random_2opt_neighbor_is_segment_reversal() {
        let mut rng = StdRng::seed_from_u64(42);
        let tour: Vec<usize> = (0..12).collect();
        for _ in 0..100 {
            let neighbor = generate_random_2opt_neighbor(&tour, &mut rng);
            assert!(is_permutation(&neighbor, 12));
            let first = tour.iter().zip(&neighbor).position(|(a, b)| a != b);
            let last = tour.iter().zip(&neighbor).rposition(|(a, b)| a != b);
            if let (Some(i), Some(j)) = (first, last) {
                assert_eq!(neighbor, generate_2opt_neighbor(&tour, i, j));
            }
        }
    }
}
