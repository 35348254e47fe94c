//! Swap move: exchange the cities at two positions.

use rand::seq::index;
use rand::Rng;

use super::pairs;
use crate::tour::Tour;

/// Copy of `tour` with positions `i` and `j` exchanged.
///
/// # Panics
/// Panics if `i` or `j` is out of range.
pub fn generate_swap_neighbor(tour: &[usize], i: usize, j: usize) -> Tour {
    let mut neighbor = tour.to_vec();
    neighbor.swap(i, j);
    neighbor
}

/// One swap neighbor with the two positions drawn without replacement.
///
/// # Panics
/// Panics if `tour` has fewer than 2 cities.
pub fn generate_random_swap_neighbor<R: Rng + ?Sized>(tour: &[usize], rng: &mut R) -> Tour {
    let picked = index::sample(rng, tour.len(), 2);
    generate_swap_neighbor(tour, picked.index(0), picked.index(1))
}

/// Every swap neighbor, ordered by `i` ascending then `j` ascending
/// (`i < j`). Returns `n * (n - 1) / 2` independent tours.
pub fn generate_all_swap_neighbors(tour: &[usize]) -> Vec<Tour> {
    pairs(tour.len())
        .map(|(i, j)| generate_swap_neighbor(tour, i, j))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::is_permutation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_swap_neighbor_leaves_input_untouched() {
        let tour = vec![0, 1, 2, 3];
        let neighbor = generate_swap_neighbor(&tour, 0, 3);
        assert_eq!(neighbor, vec![3, 1, 2, 0]);
        assert_eq!(tour, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_all_swap_neighbors_order() {
        let neighbors = generate_all_swap_neighbors(&[0, 1, 2]);
        assert_eq!(neighbors, vec![vec![1, 0, 2], vec![2, 1, 0], vec![0, 2, 1]]);
    }

    #[test]
    fn test_all_swap_neighbors_count_and_diff() {
        let tour: Vec<usize> = (0..9).collect();
        let neighbors = generate_all_swap_neighbors(&tour);
        assert_eq!(neighbors.len(), 9 * 8 / 2);
        for neighbor in &neighbors {
            let changed = tour.iter().zip(neighbor).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 2);
            assert!(is_permutation(neighbor, 9));
        }
    }

    #[test]
    fn test_all_swap_neighbors_small_tours() {
        assert!(generate_all_swap_neighbors(&[]).is_empty());
        assert!(generate_all_swap_neighbors(&[0]).is_empty());
        assert_eq!(generate_all_swap_neighbors(&[1, 0]), vec![vec![0, 1]]);
    }

    #[test]
    fn test_random_swap_neighbor_changes_two_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        let tour: Vec<usize> = (0..10).collect();
        for _ in 0..100 {
            let neighbor = generate_random_swap_neighbor(&tour, &mut rng);
            let changed = tour.iter().zip(&neighbor).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 2, "{neighbor:?}");
        }
    }

    #[test]
    fn test_random_swap_neighbor_two_cities() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_random_swap_neighbor(&[0, 1], &mut rng), vec![1, 0]);
    }
}
