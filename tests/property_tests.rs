//! Property-based tests for the numeric primitives.
//!
//! These use `proptest` to verify invariants across thousands of randomly
//! generated inputs, complementing the example-based unit tests in each
//! module. No file or network access; always run.
//!
//! ```bash
//! cargo test --test property_tests
//! PROPTEST_CASES=10000 cargo test --test property_tests
//! ```

use proptest::prelude::*;

use euler::maths;
use euler::permute::{self, is_digit_permutation};
use euler::sieve::{self, PrimeSupplier};

// == Sieve properties ==========================================================

proptest! {
    /// The sieve agrees exactly with trial division: same members, same
    /// order, nothing missing, nothing extra.
    #[test]
    fn prop_primes_up_to_matches_trial_division(limit in 2u64..3000) {
        let sieved = sieve::primes_up_to(limit).unwrap();
        let trial: Vec<u64> = (2..=limit).filter(|&n| sieve::is_prime(n as i64)).collect();
        prop_assert_eq!(sieved, trial);
    }

    /// Output is strictly increasing and bounded by the limit.
    #[test]
    fn prop_primes_up_to_sorted_and_bounded(limit in 2u64..50_000) {
        let primes = sieve::primes_up_to(limit).unwrap();
        prop_assert!(primes.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(primes.iter().all(|&p| 2 <= p && p <= limit));
    }

    /// Bounds below 2 always fail with the invalid-bound error.
    #[test]
    fn prop_primes_up_to_rejects_invalid_bounds(limit in 0u64..2) {
        prop_assert!(sieve::primes_up_to(limit).is_err());
    }

    /// A fresh supplier indexed at any k agrees with a direct sieve large
    /// enough to contain that index, including across growth steps.
    #[test]
    fn prop_supplier_matches_direct_sieve(k in 0usize..1229) {
        let mut supplier = PrimeSupplier::new();
        let reference = sieve::primes_up_to(10_000).unwrap(); // pi(10000) = 1229
        prop_assert_eq!(supplier.nth(k), reference[k]);
    }
}

// == Permutation generator properties ==========================================

proptest! {
    /// A generator over k elements yields exactly k! values, all distinct,
    /// each one a reordering of the full digit multiset, in strictly
    /// increasing order (same-width digit strings, so numeric order is
    /// lexicographic order).
    #[test]
    fn prop_generator_is_exhaustive_and_ordered(k in 1u32..=6) {
        let all: Vec<u64> = permute::digit_permutations(1, k).collect();
        let expected_count = maths::small_factorial(k) as usize;
        prop_assert_eq!(all.len(), expected_count);
        prop_assert!(all.windows(2).all(|w| w[0] < w[1]), "not strictly increasing");

        let identity: u64 = (1..=k as u64).fold(0, |acc, d| 10 * acc + d);
        for &p in &all {
            prop_assert!(is_digit_permutation(p, identity), "{} is not a reordering", p);
        }
    }

    /// Digit-permutation equivalence is symmetric, and implied invariants
    /// (digit count, digit sum) always agree on both sides of a match.
    #[test]
    fn prop_digit_permutation_symmetric(a in 0u64..1_000_000_000, b in 0u64..1_000_000_000) {
        prop_assert_eq!(is_digit_permutation(a, b), is_digit_permutation(b, a));
        if is_digit_permutation(a, b) {
            prop_assert_eq!(maths::digit_count(a), maths::digit_count(b));
            let sum = |n: u64| maths::digits(n).iter().sum::<u32>();
            prop_assert_eq!(sum(a), sum(b));
        }
    }

    /// Every number is a digit permutation of itself.
    #[test]
    fn prop_digit_permutation_reflexive(a in 0u64..u64::MAX) {
        prop_assert!(is_digit_permutation(a, a));
    }
}

// == Maths properties ==========================================================

proptest! {
    /// gcd divides both arguments and is symmetric.
    #[test]
    fn prop_gcd_divides_both(a in 1u64..1_000_000, b in 1u64..1_000_000) {
        let g = maths::gcd(a, b);
        prop_assert!(g > 0);
        prop_assert_eq!(a % g, 0);
        prop_assert_eq!(b % g, 0);
        prop_assert_eq!(g, maths::gcd(b, a));
    }

    /// The prime factorization multiplies back to the original number and
    /// every reported factor is prime.
    #[test]
    fn prop_prime_factors_reconstruct(n in 2u64..100_000) {
        let factors = maths::prime_factors(n);
        let product: u64 = factors.iter().map(|&(p, e)| p.pow(e)).product();
        prop_assert_eq!(product, n);
        for &(p, _) in &factors {
            prop_assert!(sieve::is_prime(p as i64), "{} reported as prime factor", p);
        }
        prop_assert!(factors.windows(2).all(|w| w[0].0 < w[1].0));
    }

    /// Concatenation is consistent with digit counts and recovers its
    /// right operand via modulus.
    #[test]
    fn prop_concat_consistent(a in 1u64..1_000_000, b in 0u64..1_000_000) {
        let joined = maths::concat(a, b);
        prop_assert_eq!(
            maths::digit_count(joined),
            maths::digit_count(a) + maths::digit_count(b)
        );
        prop_assert_eq!(joined % 10u64.pow(maths::digit_count(b)), b);
    }

    /// exact_sqrt returns a root exactly for squares and rejects everything
    /// else.
    #[test]
    fn prop_exact_sqrt_roundtrip(r in 0u64..3_000_000) {
        prop_assert_eq!(maths::exact_sqrt(r * r), Some(r));
        if r > 1 {
            prop_assert_eq!(maths::exact_sqrt(r * r + 1), None);
        }
    }

    /// Figurate generators and their membership tests agree.
    #[test]
    fn prop_figurate_membership(n in 1u64..100_000) {
        prop_assert!(maths::is_triangle(n * (n + 1) / 2));
        prop_assert!(maths::is_pentagonal(n * (3 * n - 1) / 2));
    }
}
