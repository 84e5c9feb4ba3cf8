//! # Permute — Lazy Lexicographic Permutation Generation
//!
//! Produces every permutation of a fixed element set, one at a time, in
//! strict lexicographic order, without ever materializing the full set.
//!
//! The recursive decomposition `P(1..n) = (1, P(2..n)) + (2, P(1..n \ 2)) +
//! ... + (n, P(1..n-1))` is reified as an explicit work stack so the
//! generator can be driven one draw at a time. Each stack item is a partial
//! permutation: the value fixed so far plus the elements still to place.
//!
//! A draw walks the stack top-down: while the top item still has remaining
//! elements, it is popped and replaced by one child per remaining element
//! (children pushed in decreasing pick order, so the smallest choice lands on
//! top of the LIFO stack). Once the top item has nothing left to place, its
//! value is the next permutation. Only one root-to-leaf path is ever expanded
//! per draw — O(n) depth with O(n) fanout per level, never the full n! set.
//!
//! Worked example for elements `[1, 2, 3]`, starting stack `(0, [1 2 3])`:
//!
//! ```text
//! (1, [2 3])          (12, [3])           (123, [])   <- popped and returned
//! (2, [1 3])    ->    (13, [2])     ->    (13, [2])
//! (3, [1 2])          (2, [1 3])          (2, [1 3])
//!                     (3, [1 2])          (3, [1 2])
//! ```

use anyhow::{bail, Result};

/// A partial permutation: the value fixed so far and the elements still to
/// be placed, in their original relative order.
struct Partial<E, V> {
    value: V,
    remaining: Vec<E>,
}

/// Stack-driven lazy permutation generator.
///
/// Generic over the element type, the combined value type, and the
/// left-to-right combining function (for digits: `10 * acc + digit`, which
/// makes a leading zero collapse arithmetically — see
/// [`digit_permutations`]).
pub struct PermutationGenerator<E: Copy, V: Copy, F: Fn(V, E) -> V> {
    stack: Vec<Partial<E, V>>,
    combine: F,
}

impl<E: Copy, V: Copy, F: Fn(V, E) -> V> PermutationGenerator<E, V, F> {
    /// Start a generator over `elements` (in the order that defines
    /// "lexicographic"), folding each placed element into `seed` with
    /// `combine`.
    pub fn new(elements: Vec<E>, seed: V, combine: F) -> Self {
        PermutationGenerator {
            stack: vec![Partial {
                value: seed,
                remaining: elements,
            }],
            combine,
        }
    }

    /// True iff at least one permutation remains undelivered.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// The next permutation in lexicographic order.
    ///
    /// Fails with an exhausted-generator error once all `n!` permutations
    /// have been delivered; guard with [`has_next`](Self::has_next) or use
    /// the `Iterator` impl.
    pub fn next_value(&mut self) -> Result<V> {
        loop {
            match self.stack.pop() {
                None => bail!("permutation generator is exhausted"),
                Some(top) if top.remaining.is_empty() => return Ok(top.value),
                Some(top) => self.decompose(top),
            }
        }
    }

    /// Replace a popped item by one child per remaining element. Children
    /// are pushed in decreasing pick order so that after the pushes the
    /// lexicographically smallest choice sits on top of the stack.
    fn decompose(&mut self, top: Partial<E, V>) {
        for i in (0..top.remaining.len()).rev() {
            let mut remaining = top.remaining.clone();
            let element = remaining.remove(i);
            self.stack.push(Partial {
                value: (self.combine)(top.value, element),
                remaining,
            });
        }
    }
}

impl<E: Copy, V: Copy, F: Fn(V, E) -> V> Iterator for PermutationGenerator<E, V, F> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.next_value().ok()
    }
}

/// Generator over the digit range `[lo, hi]` (inclusive), combining into a
/// base-10 integer.
///
/// A permutation whose first element is 0 simply comes out with one digit
/// fewer — `digit_permutations(0, 2)` yields `12, 21, 102, 120, 201, 210` —
/// since `10 * 0 + d == d`. There is no separate leading-zero handling.
pub type DigitPermutations = PermutationGenerator<u32, u64, fn(u64, u32) -> u64>;

pub fn digit_permutations(lo: u32, hi: u32) -> DigitPermutations {
    fn append_digit(acc: u64, digit: u32) -> u64 {
        10 * acc + digit as u64
    }
    PermutationGenerator::new(
        (lo..=hi).collect(),
        0,
        append_digit as fn(u64, u32) -> u64,
    )
}

/// True iff `a` and `b` are permutations of each other's decimal digits
/// (identical digit multisets). Independent of the generator.
pub fn is_digit_permutation(a: u64, b: u64) -> bool {
    let mut da = crate::maths::digits(a);
    let mut db = crate::maths::digits(b);
    da.sort_unstable();
    db.sort_unstable();
    da == db
}
