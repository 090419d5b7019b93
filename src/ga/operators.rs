//! Genetic operators for green-time chromosomes.
//!
//! Genes are integer green times (seconds), one per phase.
//!
//! - [`single_point_crossover`]: prefix of one parent + suffix of the other
//! - [`clip_genes`]: clamp into the inclusive range `[lower, upper]`
//! - [`mutate_genes`]: per-gene uniform resampling from `[lower, upper)`

use rand::Rng;

/// Single-point crossover.
///
/// Draws a cut uniformly from `1..n` and returns `p1[..cut] ++ p2[cut..]`.
/// With fewer than two genes there is no cut point and `p1` is copied.
/// Both parents must have the same length.
pub fn single_point_crossover<R: Rng>(p1: &[u32], p2: &[u32], rng: &mut R) -> Vec<u32> {
    let n = p1.len().min(p2.len());
    if n < 2 {
        return p1.to_vec();
    }
    let cut = rng.random_range(1..n);
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&p1[..cut]);
    child.extend_from_slice(&p2[cut..n]);
    child
}

/// Clamps every gene into `[lower, upper]` (both inclusive).
pub fn clip_genes(genes: &mut [u32], lower: u32, upper: u32) {
    for g in genes.iter_mut() {
        *g = (*g).clamp(lower, upper);
    }
}

/// Resamples each gene from `[lower, upper)` with probability `rate`.
///
/// Genes are re-clipped into `[lower, upper]` afterwards. Requires
/// `lower < upper` and `rate` in [0, 1].
pub fn mutate_genes<R: Rng>(genes: &mut [u32], rate: f64, lower: u32, upper: u32, rng: &mut R) {
    for g in genes.iter_mut() {
        if rng.random_bool(rate) {
            *g = rng.random_range(lower..upper);
        }
    }
    clip_genes(genes, lower, upper);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_crossover_prefix_suffix() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = [1, 2, 3, 4];
        let p2 = [10, 20, 30, 40];
        for _ in 0..50 {
            let child = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(child.len(), 4);
            let cut = child.iter().position(|&g| g >= 10).unwrap();
            // At least one gene from each parent
            assert!((1..4).contains(&cut));
            assert_eq!(&child[..cut], &p1[..cut]);
            assert_eq!(&child[cut..], &p2[cut..]);
        }
    }

    #[test]
    fn test_crossover_uses_every_cut() {
        let mut rng = SmallRng::seed_from_u64(7);
        let p1 = [0, 0, 0, 0];
        let p2 = [1, 1, 1, 1];
        let mut seen = [false; 4];
        for _ in 0..200 {
            let child = single_point_crossover(&p1, &p2, &mut rng);
            let cut = child.iter().position(|&g| g == 1).unwrap();
            seen[cut] = true;
        }
        assert_eq!(seen, [false, true, true, true]);
    }

    #[test]
    fn test_crossover_single_gene_copies_first_parent() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(single_point_crossover(&[17], &[33], &mut rng), vec![17]);
    }

    #[test]
    fn test_clip_inclusive_upper() {
        let mut genes = [5, 10, 45, 46, 30];
        clip_genes(&mut genes, 10, 45);
        assert_eq!(genes, [10, 10, 45, 45, 30]);
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut genes = [12, 25, 40];
        mutate_genes(&mut genes, 0.0, 10, 45, &mut rng);
        assert_eq!(genes, [12, 25, 40]);
    }

    #[test]
    fn test_mutation_rate_one_resamples_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut changed = false;
        for _ in 0..20 {
            let mut genes = [10, 10, 10, 10];
            mutate_genes(&mut genes, 1.0, 10, 45, &mut rng);
            assert!(genes.iter().all(|&g| (10..45).contains(&g)));
            changed |= genes != [10, 10, 10, 10];
        }
        assert!(changed);
    }
}
