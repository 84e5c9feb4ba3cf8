//! Puzzle solvers, grouped by decade of problem number.
//!
//! Every solver has the same shape: `fn(&Context) -> Result<String>` — a
//! pure batch computation from (at most) a static input file to a decimal
//! answer string. Solvers are independent of each other; anything shared
//! lives in `sieve`, `permute` or `maths`.

pub mod problems01to10;
pub mod problems11to20;
pub mod problems21to30;
pub mod problems31to40;
pub mod problems41to50;
