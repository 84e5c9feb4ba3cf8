//! # euler — Project Euler solution collection
//!
//! A flat set of independent puzzle solvers built on two reusable numeric
//! primitives:
//!
//! 1. **Prime generation** (`sieve`) — a packed-bit Sieve of Eratosthenes plus
//!    an unbounded [`sieve::PrimeSupplier`] that doubles its working bound on
//!    demand, so callers can ask for the k-th prime without knowing an upper
//!    bound in advance.
//! 2. **Lazy permutation generation** (`permute`) — lexicographic permutations
//!    of a digit range, produced one at a time from an explicit work stack
//!    (recursion reified as state, resumable between draws).
//!
//! Solvers live under [`problems`], grouped by decade, and are dispatched
//! through the explicit [`registry`] table — problem number in, answer string
//! out. Each solver is a pure batch computation: no shared runtime, no
//! persistent state, at most a small static input file read at startup.

pub mod data;
pub mod maths;
pub mod permute;
pub mod problems;
pub mod registry;
pub mod sieve;
