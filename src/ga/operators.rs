//! Permutation-preserving genetic operators.
//!
//! Crossover and mutation operate on raw `&[usize]` visiting orders, so
//! children never alias their parents; the engine wraps results back into
//! [`Route`](super::Route) values after breeding.
//!
//! - [`order_crossover`]: cut-point ordered crossover — the child keeps a
//!   prefix of one parent and takes the remaining locations in the other
//!   parent's order
//! - [`swap_mutation`]: exchange two random positions — O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

use super::route::is_permutation;

/// Cut-point ordered crossover for permutations.
///
/// Produces one child per call:
///
/// 1. Sample a cut point `c` uniformly in `[1, n-1]` (fresh on every call;
///    never 0 or n, which would just copy a parent)
/// 2. Child head = `parent_a[0..c)`, order and positions preserved
/// 3. Append every location of `parent_b` not already in the head, in the
///    order it appears in `parent_b`
///
/// Since `parent_b` is a permutation and the head is a strict subset of it,
/// the child is a permutation by construction. The roles are asymmetric:
/// `order_crossover(a, b, …)` and `order_crossover(b, a, …)` generally
/// differ.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(parent_a: &[usize], parent_b: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return parent_a.to_vec();
    }

    let cut = rng.random_range(1..n);

    let mut child = Vec::with_capacity(n);
    let mut in_head = vec![false; n];
    for &gene in &parent_a[..cut] {
        child.push(gene);
        in_head[gene] = true;
    }
    for &gene in parent_b {
        if !in_head[gene] {
            child.push(gene);
        }
    }

    debug_assert!(is_permutation(&child), "crossover broke the permutation");
    child
}

/// Swap mutation: exchange two random positions.
///
/// Positions are drawn with replacement, so drawing the same position twice
/// is a valid no-op. The gene set never changes, only its order.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);

    debug_assert!(is_permutation(perm), "mutation broke the permutation");
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    /// Check that a slice is a valid permutation of 0..n.
    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        perm.len() == n && is_permutation(perm)
    }

    fn random_permutation(n: usize, rng: &mut StdRng) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..n).collect();
        perm.shuffle(rng);
        perm
    }

    // ---- Ordered crossover ----

    #[test]
    fn test_crossover_produces_valid_permutations() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];

        for _ in 0..100 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 8), "child not valid: {child:?}");
        }
    }

    #[test]
    fn test_crossover_keeps_first_parent_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        let p1 = vec![3, 1, 4, 0, 2];
        let p2 = vec![0, 1, 2, 3, 4];

        for _ in 0..50 {
            let child = order_crossover(&p1, &p2, &mut rng);
            // The head always contains at least parent_a[0].
            assert_eq!(child[0], p1[0]);
            assert!(is_valid_permutation(&child, 5));
        }
    }

    #[test]
    fn test_crossover_tail_follows_second_parent_order() {
        let mut rng = StdRng::seed_from_u64(11);
        let p1 = vec![4, 3, 2, 1, 0];
        let p2 = vec![0, 1, 2, 3, 4];

        for _ in 0..50 {
            let child = order_crossover(&p1, &p2, &mut rng);
            // The head is the longest prefix shared with p1.
            let cut = child
                .iter()
                .zip(p1.iter())
                .take_while(|(c, p)| c == p)
                .count();
            let tail = &child[cut..];
            // The tail must be ascending, because that is p2's order.
            assert!(
                tail.windows(2).all(|w| w[0] < w[1]),
                "tail {tail:?} not in parent_b order"
            );
        }
    }

    #[test]
    fn test_crossover_is_asymmetric() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![0, 1, 2, 3, 4, 5];
        let p2 = vec![5, 4, 3, 2, 1, 0];

        let mut differed = false;
        for _ in 0..20 {
            let c1 = order_crossover(&p1, &p2, &mut rng);
            let c2 = order_crossover(&p2, &p1, &mut rng);
            if c1 != c2 {
                differed = true;
                break;
            }
        }
        assert!(differed, "swapped parent roles should usually differ");
    }

    #[test]
    fn test_crossover_single_element() {
        let mut rng = StdRng::seed_from_u64(42);
        let child = order_crossover(&[0], &[0], &mut rng);
        assert_eq!(child, vec![0]);
    }

    #[test]
    fn test_crossover_two_elements() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![0, 1];
        let p2 = vec![1, 0];

        for _ in 0..20 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 2));
            // The only possible cut is 1, so the child equals p1.
            assert_eq!(child, p1);
        }
    }

    #[test]
    fn test_crossover_identical_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = vec![2, 0, 3, 1];
        for _ in 0..20 {
            assert_eq!(order_crossover(&p, &p, &mut rng), p);
        }
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        order_crossover(&[0, 1], &[0, 1, 2], &mut rng);
    }

    // ---- Swap mutation ----

    #[test]
    fn test_swap_preserves_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let mut perm: Vec<usize> = (0..10).collect();
            swap_mutation(&mut perm, &mut rng);
            assert!(is_valid_permutation(&perm, 10));
        }
    }

    #[test]
    fn test_swap_single_element() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    #[test]
    fn test_swap_changes_at_most_two_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let original: Vec<usize> = (0..10).collect();
            let mut perm = original.clone();
            swap_mutation(&mut perm, &mut rng);
            let moved = perm
                .iter()
                .zip(original.iter())
                .filter(|(a, b)| a != b)
                .count();
            assert!(moved == 0 || moved == 2, "swap moved {moved} positions");
        }
    }

    // ---- Closure properties ----

    proptest! {
        #[test]
        fn prop_crossover_closure(n in 1usize..32, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let p1 = random_permutation(n, &mut rng);
            let p2 = random_permutation(n, &mut rng);

            let child = order_crossover(&p1, &p2, &mut rng);
            prop_assert!(is_valid_permutation(&child, n));
        }

        #[test]
        fn prop_mutation_closure(n in 1usize..32, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut perm = random_permutation(n, &mut rng);
            let mut genes_before = perm.clone();
            genes_before.sort_unstable();

            swap_mutation(&mut perm, &mut rng);

            prop_assert!(is_valid_permutation(&perm, n));
            let mut genes_after = perm.clone();
            genes_after.sort_unstable();
            prop_assert_eq!(genes_before, genes_after);
        }

        #[test]
        fn prop_crossover_then_mutation_closure(n in 2usize..24, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let p1 = random_permutation(n, &mut rng);
            let p2 = random_permutation(n, &mut rng);

            let mut child = order_crossover(&p1, &p2, &mut rng);
            swap_mutation(&mut child, &mut rng);
            prop_assert!(is_valid_permutation(&child, n));
        }
    }
}
