//! Problems 1 through 10.

use std::collections::BTreeMap;

use anyhow::{bail, Result};

use crate::maths;
use crate::registry::Context;
use crate::sieve::{self, PrimeSupplier};

/// Sum of all the multiples of 3 or 5 below 1000.
pub fn problem01(_ctx: &Context) -> Result<String> {
    let sum: u64 = (1..1000).filter(|i| i % 3 == 0 || i % 5 == 0).sum();
    Ok(sum.to_string())
}

/// Largest prime factor of 600851475143: divide out each prime in turn;
/// the one that empties the number is the largest.
pub fn problem03(_ctx: &Context) -> Result<String> {
    let mut n = 600_851_475_143i64;
    let mut prime = 2i64;
    loop {
        while n % prime == 0 {
            n /= prime;
        }
        if n == 1 {
            return Ok(prime.to_string());
        }
        prime = sieve::next_prime(prime);
    }
}

/// Largest palindrome made from the product of two 3-digit numbers.
pub fn problem04(_ctx: &Context) -> Result<String> {
    let mut largest = 0u64;
    for i in 100..1000 {
        for j in i..1000 {
            let product = i * j;
            if product > largest && maths::is_palindrome(&maths::digits(product)) {
                largest = product;
            }
        }
    }
    Ok(largest.to_string())
}

/// Smallest positive number evenly divisible by all of 1 to 20: take, per
/// prime, the highest exponent appearing in any factorization of 1..=20.
pub fn problem05(_ctx: &Context) -> Result<String> {
    let mut max_exponents: BTreeMap<u64, u32> = BTreeMap::new();
    for n in 2..=20 {
        for (prime, exponent) in maths::prime_factors(n) {
            let entry = max_exponents.entry(prime).or_insert(0);
            *entry = (*entry).max(exponent);
        }
    }
    let product: u64 = max_exponents.iter().map(|(p, e)| p.pow(*e)).product();
    Ok(product.to_string())
}

/// Difference between the square of the sum and the sum of the squares of
/// the first one hundred natural numbers.
pub fn problem06(_ctx: &Context) -> Result<String> {
    let sum: u64 = (1..=100).sum();
    let sum_of_squares: u64 = (1..=100).map(|i: u64| i * i).sum();
    Ok((sum * sum - sum_of_squares).to_string())
}

/// The 10001st prime number.
pub fn problem07(_ctx: &Context) -> Result<String> {
    let mut primes = PrimeSupplier::new();
    Ok(primes.nth(10_000).to_string())
}

/// The thousand-digit number from the problem statement, split for
/// readability the way it is printed there.
const THOUSAND_DIGITS: &str = "\
    73167176531330624919225119674426574742355349194934\n\
    96983520312774506326239578318016984801869478851843\n\
    85861560789112949495459501737958331952853208805511\n\
    12540698747158523863050715693290963295227443043557\n\
    66896648950445244523161731856403098711121722383113\n\
    62229893423380308135336276614282806444486645238749\n\
    30358907296290491560440772390713810515859307960866\n\
    70172427121883998797908792274921901699720888093776\n\
    65727333001053367881220235421809751254540594752243\n\
    52584907711670556013604839586446706324415722155397\n\
    53697817977846174064955149290862569321978468622482\n\
    83972241375657056057490261407972968652414535100474\n\
    82166370484403199890008895243450658541227588666881\n\
    16427171479924442928230863465674813919123162824586\n\
    17866458359124566529476545682848912883142607690042\n\
    24219022671055626321111109370544217506941658960408\n\
    07198403850962455444362981230987879927244284909188\n\
    84580156166097919133875499200524063689912560717606\n\
    05886116467109405077541002256983155200055935729725\n\
    71636269561882670428252483600823257530420752963450";

/// Greatest product of 13 adjacent digits in the 1000-digit number.
pub fn problem08(_ctx: &Context) -> Result<String> {
    let digits: Vec<u64> = THOUSAND_DIGITS
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| (b - b'0') as u64)
        .collect();
    match digits.windows(13).map(|w| w.iter().product::<u64>()).max() {
        Some(best) => Ok(best.to_string()),
        None => bail!("fewer than 13 digits in the series"),
    }
}

/// The product abc of the single Pythagorean triplet a < b < c with
/// a + b + c = 1000.
pub fn problem09(_ctx: &Context) -> Result<String> {
    const SUM: u64 = 1000;
    // a < b < c bounds a below SUM/3 and b below SUM/2
    for a in 1..SUM / 3 {
        for b in (a + 1)..SUM / 2 {
            let c = SUM - a - b;
            if a * a + b * b == c * c {
                return Ok((a * b * c).to_string());
            }
        }
    }
    bail!("no Pythagorean triplet sums to {SUM}")
}

/// Sum of all the primes below two million.
pub fn problem10(_ctx: &Context) -> Result<String> {
    let sum: u64 = sieve::primes_up_to(2_000_000)?.iter().sum();
    Ok(sum.to_string())
}
