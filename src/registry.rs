//! # Registry — Explicit Solver Dispatch Table
//!
//! A static mapping from problem number to a typed solver function, its
//! title, and the accepted answer. Dispatch is a table lookup — nothing is
//! discovered at runtime, and adding a solver means adding a row here.
//!
//! Answers are decimal strings rather than integers: a few problems produce
//! digit strings whose positional layout is the answer (e.g. problem 24's
//! millionth permutation), so stringly-typed output is the honest common
//! denominator.

use std::path::PathBuf;

use anyhow::Result;

use crate::problems::{problems01to10, problems11to20, problems21to30, problems31to40, problems41to50};

/// Per-run solver environment. Currently just the directory holding the
/// static puzzle input files.
pub struct Context {
    data_dir: PathBuf,
}

impl Context {
    pub fn new(data_dir: PathBuf) -> Self {
        Context { data_dir }
    }

    /// Absolute or cwd-relative path of a named puzzle input.
    pub fn input_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

type SolverFn = fn(&Context) -> Result<String>;

/// One registered puzzle solver.
pub struct Solver {
    pub number: u32,
    pub title: &'static str,
    /// The accepted Project Euler answer, checked by `euler verify`.
    pub expected: &'static str,
    pub run: SolverFn,
}

/// All registered solvers, in problem order. Problems 2, 12, 21, 29, 45 and
/// 50 were never solved in this collection; the numbering simply skips them.
pub const SOLVERS: &[Solver] = &[
    Solver { number: 1, title: "Multiples of 3 and 5", expected: "233168", run: problems01to10::problem01 },
    Solver { number: 3, title: "Largest prime factor", expected: "6857", run: problems01to10::problem03 },
    Solver { number: 4, title: "Largest palindrome product", expected: "906609", run: problems01to10::problem04 },
    Solver { number: 5, title: "Smallest multiple", expected: "232792560", run: problems01to10::problem05 },
    Solver { number: 6, title: "Sum square difference", expected: "25164150", run: problems01to10::problem06 },
    Solver { number: 7, title: "10001st prime", expected: "104743", run: problems01to10::problem07 },
    Solver { number: 8, title: "Largest product in a series", expected: "23514624000", run: problems01to10::problem08 },
    Solver { number: 9, title: "Special Pythagorean triplet", expected: "31875000", run: problems01to10::problem09 },
    Solver { number: 10, title: "Summation of primes", expected: "142913828922", run: problems01to10::problem10 },
    Solver { number: 11, title: "Largest product in a grid", expected: "70600674", run: problems11to20::problem11 },
    Solver { number: 13, title: "Large sum", expected: "5537376230", run: problems11to20::problem13 },
    Solver { number: 14, title: "Longest Collatz sequence", expected: "837799", run: problems11to20::problem14 },
    Solver { number: 15, title: "Lattice paths", expected: "137846528820", run: problems11to20::problem15 },
    Solver { number: 16, title: "Power digit sum", expected: "1366", run: problems11to20::problem16 },
    Solver { number: 17, title: "Number letter counts", expected: "21124", run: problems11to20::problem17 },
    Solver { number: 18, title: "Maximum path sum I", expected: "1074", run: problems11to20::problem18 },
    Solver { number: 19, title: "Counting Sundays", expected: "171", run: problems11to20::problem19 },
    Solver { number: 20, title: "Factorial digit sum", expected: "648", run: problems11to20::problem20 },
    Solver { number: 22, title: "Names scores", expected: "871198282", run: problems21to30::problem22 },
    Solver { number: 23, title: "Non-abundant sums", expected: "4179871", run: problems21to30::problem23 },
    Solver { number: 24, title: "Lexicographic permutations", expected: "2783915460", run: problems21to30::problem24 },
    Solver { number: 25, title: "1000-digit Fibonacci number", expected: "4782", run: problems21to30::problem25 },
    Solver { number: 26, title: "Reciprocal cycles", expected: "983", run: problems21to30::problem26 },
    Solver { number: 27, title: "Quadratic primes", expected: "-59231", run: problems21to30::problem27 },
    Solver { number: 28, title: "Number spiral diagonals", expected: "669171001", run: problems21to30::problem28 },
    Solver { number: 30, title: "Digit fifth powers", expected: "443839", run: problems21to30::problem30 },
    Solver { number: 31, title: "Coin sums", expected: "73682", run: problems31to40::problem31 },
    Solver { number: 32, title: "Pandigital products", expected: "45228", run: problems31to40::problem32 },
    Solver { number: 33, title: "Digit cancelling fractions", expected: "100", run: problems31to40::problem33 },
    Solver { number: 34, title: "Digit factorials", expected: "40730", run: problems31to40::problem34 },
    Solver { number: 35, title: "Circular primes", expected: "55", run: problems31to40::problem35 },
    Solver { number: 36, title: "Double-base palindromes", expected: "872187", run: problems31to40::problem36 },
    Solver { number: 37, title: "Truncatable primes", expected: "748317", run: problems31to40::problem37 },
    Solver { number: 38, title: "Pandigital multiples", expected: "932718654", run: problems31to40::problem38 },
    Solver { number: 39, title: "Integer right triangles", expected: "840", run: problems31to40::problem39 },
    Solver { number: 40, title: "Champernowne's constant", expected: "210", run: problems31to40::problem40 },
    Solver { number: 41, title: "Pandigital prime", expected: "7652413", run: problems41to50::problem41 },
    Solver { number: 42, title: "Coded triangle numbers", expected: "162", run: problems41to50::problem42 },
    Solver { number: 43, title: "Sub-string divisibility", expected: "16695334890", run: problems41to50::problem43 },
    Solver { number: 44, title: "Pentagon numbers", expected: "5482660", run: problems41to50::problem44 },
    Solver { number: 46, title: "Goldbach's other conjecture", expected: "5777", run: problems41to50::problem46 },
    Solver { number: 47, title: "Distinct primes factors", expected: "134043", run: problems41to50::problem47 },
    Solver { number: 48, title: "Self powers", expected: "9110846700", run: problems41to50::problem48 },
    Solver { number: 49, title: "Prime permutations", expected: "296962999629", run: problems41to50::problem49 },
];

/// Look up a solver by problem number.
pub fn find(number: u32) -> Option<&'static Solver> {
    SOLVERS
        .binary_search_by_key(&number, |solver| solver.number)
        .ok()
        .map(|i| &SOLVERS[i])
}
