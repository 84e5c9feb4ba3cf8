//! Problems 31 through 40.

use std::collections::HashSet;

use anyhow::{bail, Result};
use rayon::prelude::*;

use crate::maths;
use crate::registry::Context;
use crate::sieve;

/// Ways of making 2 pounds from any number of coins, counted by recursing
/// on the largest coin: for every count of that coin that fits, the rest of
/// the amount is made from the smaller coins.
pub fn problem31(_ctx: &Context) -> Result<String> {
    const COINS: [u64; 8] = [200, 100, 50, 20, 10, 5, 2, 1];
    Ok(coin_ways(200, &COINS).to_string())
}

fn coin_ways(amount: u64, coins: &[u64]) -> u64 {
    if coins.len() == 1 {
        return 1; // only 1p left: exactly one arrangement
    }
    let coin = coins[0];
    let rest = &coins[1..];
    (0..=amount / coin)
        .into_par_iter()
        .map(|i| coin_ways(amount - i * coin, rest))
        .sum()
}

/// Sum of all products whose multiplicand/multiplier/product identity is
/// 1-through-9 pandigital. Since the identity has nine digits in total, the
/// multiplicand stays below 100; products are deduplicated.
pub fn problem32(_ctx: &Context) -> Result<String> {
    let mut products: HashSet<u64> = HashSet::new();
    for a in 2u64..100 {
        for b in (a + 1)..=(99_999 / a) {
            let product = a * b;
            let total_digits =
                maths::digit_count(a) + maths::digit_count(b) + maths::digit_count(product);
            if total_digits > 9 {
                break; // digit total only grows with b
            }
            if total_digits == 9 {
                let identity = maths::concat(maths::concat(a, b), product);
                if maths::is_pandigital(identity, 9) {
                    products.insert(product);
                }
            }
        }
    }
    Ok(products.iter().sum::<u64>().to_string())
}

/// The four "digit cancelling" fractions like 49/98 = 4/8: two-digit
/// numerator and denominator sharing a digit x whose naive removal happens
/// to preserve the value. Returns the denominator of their product in
/// lowest terms.
pub fn problem33(_ctx: &Context) -> Result<String> {
    let mut numerator_product = 1u64;
    let mut denominator_product = 1u64;
    for n in 1..=9u64 {
        for d in (n + 1)..=9 {
            for x in 1..=9u64 {
                // xn/dx = n/d or nx/xd = n/d
                if d * (10 * x + n) == n * (10 * d + x) || d * (10 * n + x) == n * (10 * x + d) {
                    numerator_product *= n;
                    denominator_product *= d;
                }
            }
        }
    }
    let reduced = denominator_product / maths::gcd(numerator_product, denominator_product);
    Ok(reduced.to_string())
}

/// Sum of all numbers equal to the sum of the factorials of their digits.
/// Bounded like problem 30: beyond some width even all-9s fall short.
pub fn problem34(_ctx: &Context) -> Result<String> {
    let digit_factorials: Vec<u64> = (0..=9).map(maths::small_factorial).collect();
    let fact9 = digit_factorials[9];
    let mut width = 0u32;
    while 10u64.pow(width) < (width as u64 + 1) * fact9 {
        width += 1;
    }
    let limit = (width as u64 + 1) * fact9;

    let total: u64 = (10..limit)
        .filter(|&n| {
            let sum: u64 = maths::digits(n)
                .iter()
                .map(|&d| digit_factorials[d as usize])
                .sum();
            sum == n
        })
        .sum();
    Ok(total.to_string())
}

/// Count of circular primes below one million: every rotation of the
/// digits must itself be prime.
pub fn problem35(_ctx: &Context) -> Result<String> {
    let primes = sieve::primes_up_to(999_999)?;
    let prime_set: HashSet<u64> = primes.iter().copied().collect();
    let count = primes
        .par_iter()
        .filter(|&&p| is_circular_prime(p, &prime_set))
        .count();
    Ok(count.to_string())
}

fn is_circular_prime(prime: u64, prime_set: &HashSet<u64>) -> bool {
    let rotations = maths::digit_count(prime) - 1;
    let power = 10u64.pow(rotations);
    let mut n = prime;
    for _ in 0..rotations {
        // move the most significant digit to the least significant end
        n = (n % power) * 10 + n / power;
        if !prime_set.contains(&n) {
            return false;
        }
    }
    true
}

/// Sum of all numbers below one million palindromic in both base 10 and
/// base 2.
pub fn problem36(_ctx: &Context) -> Result<String> {
    let sum: u64 = (1..1_000_000u64)
        .filter(|&n| {
            maths::is_palindrome(&maths::digits(n))
                && maths::is_palindrome(format!("{n:b}").as_bytes())
        })
        .sum();
    Ok(sum.to_string())
}

/// Sum of the eleven primes that stay prime while truncating digits from
/// the left and from the right (single-digit primes excluded).
pub fn problem37(_ctx: &Context) -> Result<String> {
    const TOTAL: usize = 11;
    let mut sum = 0u64;
    let mut found = 0usize;
    for &p in sieve::primes_up_to(999_999)?.iter().filter(|&&p| p >= 10) {
        if is_truncatable_prime(p) {
            sum += p;
            found += 1;
            if found == TOTAL {
                return Ok(sum.to_string());
            }
        }
    }
    bail!("only {found} of {TOTAL} truncatable primes below the sieve bound")
}

fn is_truncatable_prime(prime: u64) -> bool {
    let width = maths::digit_count(prime);
    for i in 1..width {
        let from_right = prime / 10u64.pow(i);
        let from_left = prime % 10u64.pow(width - i);
        if !sieve::is_prime(from_right as i64) || !sieve::is_prime(from_left as i64) {
            return false;
        }
    }
    true
}

/// Largest 1-9 pandigital number formed by concatenating x, 2x, ..., nx
/// for some n > 1.
pub fn problem38(_ctx: &Context) -> Result<String> {
    let mut best = 123_456_789u64; // x = 1, n = 9, the trivial solution
    for n in 2..=8u64 {
        let x_bound = 10u64.pow((9 / n) as u32);
        for x in 2..x_bound {
            let mut product = x;
            for i in 2..=n {
                product = maths::concat(product, i * x);
            }
            if product > best && maths::is_pandigital(product, 9) {
                best = product;
            }
        }
    }
    Ok(best.to_string())
}

/// The perimeter below 1000 admitting the most right-triangle solutions
/// {a, b, c}.
pub fn problem39(_ctx: &Context) -> Result<String> {
    let best = (1..=1000u64)
        .into_par_iter()
        .max_by_key(|&p| (right_triangle_solutions(p), std::cmp::Reverse(p)))
        .unwrap_or(0);
    Ok(best.to_string())
}

fn right_triangle_solutions(perimeter: u64) -> u64 {
    let mut count = 0;
    for a in 1..=perimeter / 3 {
        for b in a..=perimeter / 2 {
            let c = perimeter - a - b;
            if c > b && a * a + b * b == c * c {
                count += 1;
            }
        }
    }
    count
}

/// Product of the digits d1, d10, d100, ..., d1000000 of Champernowne's
/// constant 0.123456789101112...
pub fn problem40(_ctx: &Context) -> Result<String> {
    let product: u64 = [1u64, 10, 100, 1000, 10_000, 100_000, 1_000_000]
        .iter()
        .map(|&i| champernowne_digit(i) as u64)
        .product();
    Ok(product.to_string())
}

/// The 1-indexed digit of 0.123456789101112...: group g (the g-digit
/// numbers) contributes 9 * 10^(g-1) * g digits, which locates the number
/// containing the digit and the position inside it.
fn champernowne_digit(index: u64) -> u32 {
    let mut i = index;
    let mut group = 1u32;
    loop {
        let group_digits = 9 * 10u64.pow(group - 1) * group as u64;
        if i <= group_digits {
            break;
        }
        i -= group_digits;
        group += 1;
    }
    let number = 10u64.pow(group - 1) + (i - 1) / group as u64;
    let offset = ((i - 1) % group as u64) as usize;
    maths::digits(number)[offset]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn ctx() -> Context {
        Context::new(PathBuf::from("data"))
    }

    #[test]
    fn problem31_answer() {
        assert_eq!(problem31(&ctx()).unwrap(), "73682");
    }

    #[test]
    fn coin_ways_small_amounts() {
        // 5p from {5, 2, 1}: 5, 2+2+1, 2+1+1+1, 1x5
        assert_eq!(coin_ways(5, &[5, 2, 1]), 4);
        assert_eq!(coin_ways(0, &[2, 1]), 1); // the empty arrangement
    }

    #[test]
    fn problem32_answer() {
        assert_eq!(problem32(&ctx()).unwrap(), "45228");
    }

    #[test]
    fn problem33_answer() {
        assert_eq!(problem33(&ctx()).unwrap(), "100");
    }

    #[test]
    fn problem34_answer() {
        assert_eq!(problem34(&ctx()).unwrap(), "40730");
    }

    #[test]
    fn circular_prime_examples() {
        let set: HashSet<u64> = sieve::primes_up_to(1000).unwrap().into_iter().collect();
        assert!(is_circular_prime(197, &set)); // 197, 971, 719
        assert!(is_circular_prime(2, &set));
        assert!(!is_circular_prime(19, &set)); // 91 = 7 * 13
    }

    #[test]
    fn problem35_answer() {
        assert_eq!(problem35(&ctx()).unwrap(), "55");
    }

    #[test]
    fn problem36_answer() {
        assert_eq!(problem36(&ctx()).unwrap(), "872187");
    }

    #[test]
    fn truncatable_prime_examples() {
        assert!(is_truncatable_prime(3797)); // the problem statement example
        assert!(!is_truncatable_prime(3798));
        assert!(!is_truncatable_prime(19)); // truncations 1 and 9 are not prime
    }

    #[test]
    fn problem37_answer() {
        assert_eq!(problem37(&ctx()).unwrap(), "748317");
    }

    #[test]
    fn problem38_answer() {
        assert_eq!(problem38(&ctx()).unwrap(), "932718654");
    }

    #[test]
    fn right_triangle_solution_counts() {
        // p = 120: {20,48,52}, {24,45,51}, {30,40,50}
        assert_eq!(right_triangle_solutions(120), 3);
        assert_eq!(right_triangle_solutions(12), 1); // {3,4,5}
        assert_eq!(right_triangle_solutions(11), 0);
    }

    #[test]
    fn problem39_answer() {
        assert_eq!(problem39(&ctx()).unwrap(), "840");
    }

    #[test]
    fn champernowne_digit_examples() {
        assert_eq!(champernowne_digit(1), 1);
        assert_eq!(champernowne_digit(9), 9);
        assert_eq!(champernowne_digit(10), 1); // the '1' of 10
        assert_eq!(champernowne_digit(12), 1); // the '1' of 11
        assert_eq!(champernowne_digit(15), 2); // 123456789101112 -> '2'
    }

    #[test]
    fn problem40_answer() {
        assert_eq!(problem40(&ctx()).unwrap(), "210");
    }
}
