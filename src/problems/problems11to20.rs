//! Problems 11 through 20.

use anyhow::{bail, Context as _, Result};
use chrono::{Datelike, Months, NaiveDate, Weekday};
use rug::ops::Pow;
use rug::Integer;

use crate::data;
use crate::maths;
use crate::registry::Context;

/// The 20x20 grid from the problem statement.
const GRID: &str = "\
    08 02 22 97 38 15 00 40 00 75 04 05 07 78 52 12 50 77 91 08\n\
    49 49 99 40 17 81 18 57 60 87 17 40 98 43 69 48 04 56 62 00\n\
    81 49 31 73 55 79 14 29 93 71 40 67 53 88 30 03 49 13 36 65\n\
    52 70 95 23 04 60 11 42 69 24 68 56 01 32 56 71 37 02 36 91\n\
    22 31 16 71 51 67 63 89 41 92 36 54 22 40 40 28 66 33 13 80\n\
    24 47 32 60 99 03 45 02 44 75 33 53 78 36 84 20 35 17 12 50\n\
    32 98 81 28 64 23 67 10 26 38 40 67 59 54 70 66 18 38 64 70\n\
    67 26 20 68 02 62 12 20 95 63 94 39 63 08 40 91 66 49 94 21\n\
    24 55 58 05 66 73 99 26 97 17 78 78 96 83 14 88 34 89 63 72\n\
    21 36 23 09 75 00 76 44 20 45 35 14 00 61 33 97 34 31 33 95\n\
    78 17 53 28 22 75 31 67 15 94 03 80 04 62 16 14 09 53 56 92\n\
    16 39 05 42 96 35 31 47 55 58 88 24 00 17 54 24 36 29 85 57\n\
    86 56 00 48 35 71 89 07 05 44 44 37 44 60 21 58 51 54 17 58\n\
    19 80 81 68 05 94 47 69 28 73 92 13 86 52 17 77 04 89 55 40\n\
    04 52 08 83 97 35 99 16 07 97 57 32 16 26 26 79 33 27 98 66\n\
    88 36 68 87 57 62 20 72 03 46 33 67 46 55 12 32 63 93 53 69\n\
    04 42 16 73 38 25 39 11 24 94 72 18 08 46 29 32 40 62 76 36\n\
    20 69 36 41 72 30 23 88 34 62 99 69 82 67 59 85 74 04 36 16\n\
    20 73 35 29 78 31 90 01 74 31 49 71 48 86 81 16 23 57 05 54\n\
    01 70 54 71 83 51 54 69 16 92 33 48 61 43 52 01 89 19 67 48";

/// Greatest product of four adjacent numbers in the grid, in any of the
/// four directions (right, down, and both diagonals).
pub fn problem11(_ctx: &Context) -> Result<String> {
    let grid = parse_grid(GRID)?;
    let rows = grid.len();
    let cols = grid[0].len();
    let mut greatest = 0u64;
    for i in 0..rows {
        for j in 0..cols {
            let mut candidates = Vec::with_capacity(4);
            if i + 3 < rows {
                candidates.push(grid[i][j] * grid[i + 1][j] * grid[i + 2][j] * grid[i + 3][j]);
            }
            if j + 3 < cols {
                candidates.push(grid[i][j] * grid[i][j + 1] * grid[i][j + 2] * grid[i][j + 3]);
            }
            if i + 3 < rows && j + 3 < cols {
                candidates
                    .push(grid[i][j] * grid[i + 1][j + 1] * grid[i + 2][j + 2] * grid[i + 3][j + 3]);
            }
            if i + 3 < rows && j >= 3 {
                candidates
                    .push(grid[i][j] * grid[i + 1][j - 1] * grid[i + 2][j - 2] * grid[i + 3][j - 3]);
            }
            greatest = candidates.into_iter().fold(greatest, u64::max);
        }
    }
    Ok(greatest.to_string())
}

fn parse_grid(text: &str) -> Result<Vec<Vec<u64>>> {
    text.lines()
        .map(|row| {
            row.split_whitespace()
                .map(|cell| cell.parse::<u64>().context("malformed grid cell"))
                .collect()
        })
        .collect()
}

/// First ten digits of the sum of one hundred 50-digit numbers.
pub fn problem13(ctx: &Context) -> Result<String> {
    let lines = data::read_lines(&ctx.input_path("p013_numbers.txt"))?;
    let mut sum = Integer::new();
    for line in &lines {
        let number: Integer = line
            .trim()
            .parse()
            .with_context(|| format!("malformed 50-digit number {line:?}"))?;
        sum += number;
    }
    Ok(sum.to_string().chars().take(10).collect())
}

/// Starting number below one million producing the longest Collatz chain.
///
/// Chain lengths below the current start are already known, so each walk
/// stops as soon as it drops under its starting point.
pub fn problem14(_ctx: &Context) -> Result<String> {
    const LIMIT: u64 = 1_000_000;
    let mut lengths = vec![0u32; LIMIT as usize];
    lengths[1] = 1;
    let mut best_start = 1u64;
    let mut best_length = 1u32;
    for start in 2..LIMIT {
        let mut n = start;
        let mut steps = 0u32;
        while n >= start {
            n = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
            steps += 1;
        }
        let length = steps + lengths[n as usize];
        lengths[start as usize] = length;
        if length > best_length {
            best_length = length;
            best_start = start;
        }
    }
    Ok(best_start.to_string())
}

/// Number of down/right routes through a 20x20 lattice: each cell holds the
/// route count to the bottom-right corner, filled from that corner back.
pub fn problem15(_ctx: &Context) -> Result<String> {
    const SIZE: usize = 20 + 1; // 21 corner points per side
    let mut grid = [[0u64; SIZE]; SIZE];
    for i in 0..SIZE {
        grid[i][SIZE - 1] = 1;
        grid[SIZE - 1][i] = 1;
    }
    for row in (0..SIZE - 1).rev() {
        for col in (0..SIZE - 1).rev() {
            grid[row][col] = grid[row + 1][col] + grid[row][col + 1];
        }
    }
    Ok(grid[0][0].to_string())
}

/// Sum of the digits of 2^1000.
pub fn problem16(_ctx: &Context) -> Result<String> {
    let power = Integer::from(2u32).pow(1000);
    Ok(maths::decimal_digit_sum(&power).to_string())
}

/// Letters used writing out 1 to 1000 in words (British usage, with "and").
pub fn problem17(_ctx: &Context) -> Result<String> {
    const ONES: [&str; 9] = [
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ];
    const TEENS: [&str; 10] = [
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ];
    const TENS: [&str; 8] = [
        "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ];

    let ones_sum: usize = ONES.iter().map(|w| w.len()).sum();
    let teens_sum: usize = TEENS.iter().map(|w| w.len()).sum();
    // Each tens word heads ten numbers (twenty, twenty-one, ...).
    let tens_sum: usize = TENS.iter().map(|w| 10 * w.len() + ones_sum).sum();
    let first_hundred = ones_sum + teens_sum + tens_sum;
    // "<digit> hundred" heads 100 numbers, 99 of them with "and".
    let hundreds: usize = ONES
        .iter()
        .map(|w| 100 * (w.len() + "hundred".len()) + 99 * "and".len() + first_hundred)
        .sum();
    let total = first_hundred + hundreds + "onethousand".len();
    Ok(total.to_string())
}

/// Maximum top-to-bottom path sum in the triangle, folded bottom-up: every
/// row absorbs the better of its two children below.
pub fn problem18(ctx: &Context) -> Result<String> {
    let lines = data::read_lines(&ctx.input_path("p018_triangle.txt"))?;
    let mut triangle: Vec<Vec<u64>> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let row: Vec<u64> = line
            .split_whitespace()
            .map(|cell| cell.parse::<u64>().context("malformed triangle cell"))
            .collect::<Result<_>>()?;
        if row.len() != i + 1 {
            bail!("triangle row {} has {} entries, expected {}", i + 1, row.len(), i + 1);
        }
        triangle.push(row);
    }
    if triangle.is_empty() {
        bail!("empty triangle input");
    }
    for i in (0..triangle.len() - 1).rev() {
        for j in 0..triangle[i].len() {
            let below = triangle[i + 1][j].max(triangle[i + 1][j + 1]);
            triangle[i][j] += below;
        }
    }
    Ok(triangle[0][0].to_string())
}

/// Number of Sundays falling on the first of the month during the twentieth
/// century (1 Jan 1901 to 31 Dec 2000).
pub fn problem19(_ctx: &Context) -> Result<String> {
    let from = NaiveDate::from_ymd_opt(1901, 1, 1).context("invalid start date")?;
    let to = NaiveDate::from_ymd_opt(2000, 12, 31).context("invalid end date")?;
    let mut date = from;
    let mut sundays = 0u32;
    while date < to {
        if date.weekday() == Weekday::Sun {
            sundays += 1;
        }
        date = date
            .checked_add_months(Months::new(1))
            .context("date overflow stepping months")?;
    }
    Ok(sundays.to_string())
}

/// Sum of the digits of 100!.
pub fn problem20(_ctx: &Context) -> Result<String> {
    Ok(maths::decimal_digit_sum(&maths::factorial(100)).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn ctx() -> Context {
        Context::new(PathBuf::from("data"))
    }

    #[test]
    fn problem11_answer() {
        assert_eq!(problem11(&ctx()).unwrap(), "70600674");
    }

    #[test]
    fn grid_parses_to_20_by_20() {
        let grid = parse_grid(GRID).unwrap();
        assert_eq!(grid.len(), 20);
        assert!(grid.iter().all(|row| row.len() == 20));
    }

    /// The 50-digit number list is not bundled; the solver must surface a
    /// fatal error naming the missing input.
    #[test]
    fn problem13_missing_input_is_fatal() {
        let missing = Context::new(PathBuf::from("data/nonexistent"));
        let err = problem13(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("p013_numbers.txt"));
    }

    #[test]
    fn problem14_answer() {
        assert_eq!(problem14(&ctx()).unwrap(), "837799");
    }

    #[test]
    fn problem15_answer() {
        assert_eq!(problem15(&ctx()).unwrap(), "137846528820");
    }

    #[test]
    fn problem16_answer() {
        assert_eq!(problem16(&ctx()).unwrap(), "1366");
    }

    #[test]
    fn problem17_answer() {
        assert_eq!(problem17(&ctx()).unwrap(), "21124");
    }

    #[test]
    fn problem18_answer() {
        assert_eq!(problem18(&ctx()).unwrap(), "1074");
    }

    #[test]
    fn problem19_answer() {
        assert_eq!(problem19(&ctx()).unwrap(), "171");
    }

    #[test]
    fn problem20_answer() {
        assert_eq!(problem20(&ctx()).unwrap(), "648");
    }
}
