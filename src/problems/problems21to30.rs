//! Problems 22 through 30.

use anyhow::Result;
use rayon::prelude::*;
use rug::ops::Pow;
use rug::Integer;

use crate::data;
use crate::maths;
use crate::registry::Context;
use crate::sieve;

/// Total of all name scores in the name list: alphabetical rank times the
/// sum of the alphabetical values of the letters.
pub fn problem22(ctx: &Context) -> Result<String> {
    let mut names = data::read_quoted_words(&ctx.input_path("p022_names.txt"))?;
    names.sort_unstable();
    let total: u64 = names
        .iter()
        .enumerate()
        .map(|(i, name)| (i as u64 + 1) * letter_score(name))
        .sum();
    Ok(total.to_string())
}

/// "COLIN" -> 3 + 15 + 12 + 9 + 14 = 53. Input is uppercase A-Z.
fn letter_score(word: &str) -> u64 {
    word.bytes().map(|b| (b - b'A' + 1) as u64).sum()
}

/// Sum of all positive integers that cannot be written as the sum of two
/// abundant numbers. Every integer above 28123 can be.
pub fn problem23(_ctx: &Context) -> Result<String> {
    const LIMIT: usize = 28_123;
    let abundant: Vec<usize> = (1..LIMIT)
        .into_par_iter()
        .filter(|&n| maths::sum_proper_divisors(n as u64) > n as u64)
        .collect();
    let mut is_abundant = vec![false; LIMIT];
    for &a in &abundant {
        is_abundant[a] = true;
    }
    let mut sum = 0u64;
    for i in 1..LIMIT {
        let writable = abundant
            .iter()
            .take_while(|&&a| a <= i)
            .any(|&a| is_abundant[i - a]);
        if !writable {
            sum += i as u64;
        }
    }
    Ok(sum.to_string())
}

/// The millionth lexicographic permutation of the digits 0 through 9,
/// located arithmetically: the leading digit splits the permutations into
/// blocks of 9!, the next into blocks of 8!, and so on.
pub fn problem24(_ctx: &Context) -> Result<String> {
    const TARGET: u64 = 1_000_000;
    let mut remaining = TARGET - 1; // 0-indexed rank
    let mut digits: Vec<u32> = (0..10).collect();
    let mut answer = String::with_capacity(10);
    for place in (0..10u32).rev() {
        let block = maths::small_factorial(place);
        let index = (remaining / block) as usize;
        remaining %= block;
        answer.push_str(&digits.remove(index).to_string());
    }
    Ok(answer)
}

/// Index of the first Fibonacci number with 1000 digits.
pub fn problem25(_ctx: &Context) -> Result<String> {
    let threshold = Integer::from(10u32).pow(999);
    let mut prev = Integer::from(1u32);
    let mut curr = Integer::from(1u32);
    let mut index = 2u64;
    while curr < threshold {
        let next = Integer::from(&prev + &curr);
        prev = curr;
        curr = next;
        index += 1;
    }
    Ok(index.to_string())
}

/// The d < 1000 whose unit fraction 1/d has the longest recurring decimal
/// cycle. Scanning downward allows stopping once d drops below the best
/// cycle length found, since a cycle is always shorter than d.
pub fn problem26(_ctx: &Context) -> Result<String> {
    let mut best_length = 0u64;
    let mut best_d = 0u64;
    for d in (1..1000u64).rev() {
        if d <= best_length {
            break;
        }
        let length = recurring_cycle_length(d);
        if length > best_length {
            best_length = length;
            best_d = d;
        }
    }
    Ok(best_d.to_string())
}

/// Length of the recurring cycle of 1/d: strip factors 2 and 5 (they only
/// delay the cycle), then follow the long-division remainders until the
/// first one repeats.
fn recurring_cycle_length(mut d: u64) -> u64 {
    for f in [2, 5] {
        while d % f == 0 {
            d /= f;
        }
    }
    if d == 1 {
        return 0; // terminating decimal, no cycle
    }
    let first = 10 % d;
    let mut remainder = (10 * first) % d;
    let mut length = 1;
    while remainder != first {
        remainder = (10 * remainder) % d;
        length += 1;
    }
    length
}

/// Product of the coefficients a, b (|a|, |b| < 1000) whose quadratic
/// n^2 + a*n + b produces the longest run of primes from n = 0.
pub fn problem27(_ctx: &Context) -> Result<String> {
    // n = 0 forces b itself to be prime, so only prime b need scanning.
    let b_candidates = sieve::primes_up_to(999)?;
    let mut best_run = -1i64;
    let mut best_product = 0i64;
    for a in -999..1000i64 {
        for &b in &b_candidates {
            let b = b as i64;
            let mut n = 0i64;
            while sieve::is_prime(n * n + a * n + b) {
                n += 1;
            }
            if n > best_run {
                best_run = n;
                best_product = a * b;
            }
        }
    }
    Ok(best_product.to_string())
}

/// Sum of both diagonals of a 1001x1001 number spiral. The four corners at
/// ring distance x sum to 16x^2 + 4x + 4; the centre contributes 1.
pub fn problem28(_ctx: &Context) -> Result<String> {
    const SPIRAL_SIZE: u64 = 1001;
    let rings = (SPIRAL_SIZE - 1) / 2;
    let sum: u64 = (1..=rings).map(|x| 16 * x * x + 4 * x + 4).sum::<u64>() + 1;
    Ok(sum.to_string())
}

/// Sum of all numbers that equal the sum of the fifth powers of their
/// digits. The search space is bounded: beyond some width, even all-9s
/// cannot reach the number's own magnitude.
pub fn problem30(_ctx: &Context) -> Result<String> {
    const POWER: u32 = 5;
    let nine_power = 9u64.pow(POWER);
    let mut width = 1u32;
    while (width as u64) * nine_power > 10u64.pow(width - 1) {
        width += 1;
    }
    let limit = (width as u64 - 1) * nine_power;

    let total: u64 = (10..=limit)
        .filter(|&n| {
            let digit_powers: u64 = maths::digits(n).iter().map(|&d| (d as u64).pow(POWER)).sum();
            digit_powers == n
        })
        .sum();
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn ctx() -> Context {
        Context::new(PathBuf::from("data"))
    }

    #[test]
    fn letter_score_colin_is_53() {
        assert_eq!(letter_score("COLIN"), 53);
        assert_eq!(letter_score("A"), 1);
    }

    /// The name list is not bundled; the solver must surface a fatal error
    /// naming the missing input.
    #[test]
    fn problem22_missing_input_is_fatal() {
        let missing = Context::new(PathBuf::from("data/nonexistent"));
        let err = problem22(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("p022_names.txt"));
    }

    #[test]
    fn problem23_answer() {
        assert_eq!(problem23(&ctx()).unwrap(), "4179871");
    }

    #[test]
    fn problem24_answer() {
        assert_eq!(problem24(&ctx()).unwrap(), "2783915460");
    }

    #[test]
    fn problem25_answer() {
        assert_eq!(problem25(&ctx()).unwrap(), "4782");
    }

    #[test]
    fn recurring_cycle_lengths() {
        assert_eq!(recurring_cycle_length(2), 0); // 0.5
        assert_eq!(recurring_cycle_length(3), 1); // 0.(3)
        assert_eq!(recurring_cycle_length(6), 1); // 0.1(6)
        assert_eq!(recurring_cycle_length(7), 6); // 0.(142857)
        assert_eq!(recurring_cycle_length(8), 0); // 0.125
    }

    #[test]
    fn problem26_answer() {
        assert_eq!(problem26(&ctx()).unwrap(), "983");
    }

    #[test]
    fn problem27_answer() {
        assert_eq!(problem27(&ctx()).unwrap(), "-59231");
    }

    #[test]
    fn problem28_answer() {
        assert_eq!(problem28(&ctx()).unwrap(), "669171001");
    }

    #[test]
    fn problem30_answer() {
        assert_eq!(problem30(&ctx()).unwrap(), "443839");
    }
}
