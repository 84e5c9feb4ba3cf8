//! Problems 41 through 49.

use std::collections::HashSet;

use anyhow::{bail, Result};
use rayon::prelude::*;

use crate::data;
use crate::maths;
use crate::permute::{self, is_digit_permutation};
use crate::registry::Context;
use crate::sieve;

/// Largest n-digit pandigital prime. 8- and 9-digit pandigitals have digit
/// sums 36 and 45, both divisible by 3, so the widest candidates use the
/// digits 1 to 7.
pub fn problem41(_ctx: &Context) -> Result<String> {
    for width in (4..=7u32).rev() {
        let ascending: Vec<u64> = permute::digit_permutations(1, width).collect();
        if let Some(&prime) = ascending.iter().rev().find(|&&p| sieve::is_prime(p as i64)) {
            return Ok(prime.to_string());
        }
    }
    bail!("no pandigital prime found")
}

/// Count of triangle words in the word list: words whose letter-value sum
/// is a triangle number.
pub fn problem42(ctx: &Context) -> Result<String> {
    let words = data::read_quoted_words(&ctx.input_path("p042_words.txt"))?;
    let count = words
        .par_iter()
        .filter(|word| maths::is_triangle(letter_score(word)))
        .count();
    Ok(count.to_string())
}

/// "SKY" -> 19 + 11 + 25 = 55. Input is uppercase A-Z.
fn letter_score(word: &str) -> u64 {
    word.bytes().map(|b| (b - b'A' + 1) as u64).sum()
}

/// Sum of all 0-9 pandigital numbers whose three-digit substrings d2d3d4
/// through d8d9d10 are divisible by 2, 3, 5, 7, 11, 13, 17 in turn.
pub fn problem43(_ctx: &Context) -> Result<String> {
    let sum: u64 = permute::digit_permutations(0, 9)
        .filter(|&p| has_substring_divisibility(p))
        .sum();
    Ok(sum.to_string())
}

fn has_substring_divisibility(pandigital: u64) -> bool {
    const DIVISORS: [u64; 7] = [2, 3, 5, 7, 11, 13, 17];
    DIVISORS
        .iter()
        .enumerate()
        .all(|(i, &d)| digit_triple(pandigital, i as u32 + 1) % d == 0)
}

/// The three digits starting at 0-indexed `start` of the conceptual
/// 10-digit string (a collapsed leading zero still counts as a position).
fn digit_triple(pandigital: u64, start: u32) -> u64 {
    (pandigital / 10u64.pow(10 - start - 3)) % 1000
}

/// The smallest difference D = P_j - P_k between two pentagonal numbers
/// whose sum and difference are both pentagonal. The first pair found while
/// growing the pentagonal cache yields it.
pub fn problem44(_ctx: &Context) -> Result<String> {
    let mut pentagonals: HashSet<u64> = HashSet::new();
    let mut n = 1u64;
    loop {
        let p1 = n * (3 * n - 1) / 2;
        pentagonals.insert(p1);
        for &p2 in &pentagonals {
            if p1 > p2 && pentagonals.contains(&(p1 - p2)) && maths::is_pentagonal(p1 + p2) {
                return Ok((p1 - p2).to_string());
            }
        }
        n += 1;
    }
}

/// The smallest odd composite that cannot be written as a prime plus twice
/// a square, disproving Goldbach's other conjecture.
pub fn problem46(_ctx: &Context) -> Result<String> {
    let mut primes_seen = vec![2u64];
    let mut n = 3u64;
    loop {
        if sieve::is_prime(n as i64) {
            primes_seen.push(n);
        } else if !follows_conjecture(n, &primes_seen) {
            return Ok(n.to_string());
        }
        n += 2;
    }
}

fn follows_conjecture(odd_composite: u64, primes: &[u64]) -> bool {
    primes
        .iter()
        .take_while(|&&p| p < odd_composite)
        .any(|&p| {
            let rest = odd_composite - p;
            rest % 2 == 0 && maths::is_square((rest / 2) as i64)
        })
}

/// First of four consecutive integers each having four distinct prime
/// factors. Distinct-factor counts come from a sieve: every prime bumps the
/// count of all its multiples.
pub fn problem47(_ctx: &Context) -> Result<String> {
    const LIMIT: usize = 150_000; // window found sufficient by trial
    let mut factor_counts = vec![0u8; LIMIT];
    for d in 2..LIMIT {
        if factor_counts[d] == 0 {
            let mut multiple = d;
            while multiple < LIMIT {
                factor_counts[multiple] += 1;
                multiple += d;
            }
        }
    }
    let mut run = 0usize;
    for n in 2..LIMIT {
        if factor_counts[n] >= 4 {
            run += 1;
            if run == 4 {
                return Ok((n + 1 - 4).to_string());
            }
        } else {
            run = 0;
        }
    }
    bail!("no run of four consecutive numbers with four distinct prime factors below {LIMIT}")
}

/// Last ten digits of 1^1 + 2^2 + ... + 1000^1000, computed with every
/// multiplication reduced mod 10^10.
pub fn problem48(_ctx: &Context) -> Result<String> {
    const MASK: u64 = 10_000_000_000;
    let sum = (1..=1000u64)
        .map(|n| (1..=n).fold(1u64, |acc, _| (acc as u128 * n as u128 % MASK as u128) as u64))
        .fold(0u64, |acc, term| (acc + term) % MASK);
    Ok(sum.to_string())
}

/// The arithmetic sequence of three 4-digit primes, 3330 apart, that are
/// digit permutations of one another — other than the known 1487 one.
/// Returns the twelve-digit concatenation of its terms.
pub fn problem49(_ctx: &Context) -> Result<String> {
    const STEP: u64 = 3330;
    const KNOWN: u64 = 1487; // the triple given in the problem statement
    for a in 1000..=(9999 - 2 * STEP) {
        if a == KNOWN {
            continue;
        }
        let (b, c) = (a + STEP, a + 2 * STEP);
        if sieve::is_prime(a as i64)
            && sieve::is_prime(b as i64)
            && sieve::is_prime(c as i64)
            && is_digit_permutation(a, b)
            && is_digit_permutation(a, c)
        {
            return Ok(format!("{a}{b}{c}"));
        }
    }
    bail!("no second prime permutation sequence with step {STEP}")
}
