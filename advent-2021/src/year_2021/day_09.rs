//! Day 9: Smoke Basin

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::Grid;
use crate::utils::grid::Pos;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 9, tags = ["2021", "grid", "flood-fill"])]
pub struct Solver;

const PEAK: u8 = 9;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_digits(input)
    }
}

fn low_points(heights: &Grid<u8>) -> impl Iterator<Item = Pos> + '_ {
    heights.positions().filter(move |&pos| {
        heights
            .neighbors4(pos)
            .all(|n| heights[n] > heights[pos])
    })
}

/// Size of the basin around `low`.
///
/// Flow is followed in reverse: from a cell we may step to any neighbour that
/// is strictly higher and not a peak. Every cell is counted once.
fn basin_size(heights: &Grid<u8>, low: Pos) -> usize {
    let mut visited = Grid::from_fn(heights.width(), heights.height(), |_| false);
    let mut stack = vec![low];
    visited[low] = true;
    let mut size = 0;

    while let Some(pos) = stack.pop() {
        size += 1;
        for next in heights.neighbors4(pos) {
            if !visited[next] && heights[next] != PEAK && heights[next] > heights[pos] {
                visited[next] = true;
                stack.push(next);
            }
        }
    }
    size
}

impl PartSolver<1> for Solver {
    fn solve(heights: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let risk: u32 = low_points(heights)
            .map(|pos| heights[pos] as u32 + 1)
            .sum();
        Ok(risk.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(heights: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut sizes: Vec<usize> = low_points(heights)
            .map(|low| basin_size(heights, low))
            .collect();
        if sizes.len() < 3 {
            return Err(SolveError::failed(format!(
                "need three basins, found {}",
                sizes.len()
            )));
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        Ok(sizes[..3].iter().product::<usize>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2021::test_util::solve;

    const SAMPLE: &str = include_str!("../../samples/day09.txt");

    #[test]
    fn low_point_risk() {
        assert_eq!(solve::<Solver>(SAMPLE, 1), "15");
    }

    #[test]
    fn basin_sizes() {
        let heights = Solver::parse(SAMPLE).unwrap();
        let mut sizes: Vec<usize> = low_points(&heights)
            .map(|low| basin_size(&heights, low))
            .collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![3, 9, 9, 14]);
    }

    #[test]
    fn largest_basins_product() {
        assert_eq!(solve::<Solver>(SAMPLE, 2), "1134");
    }

    #[test]
    fn single_basin_is_an_error() {
        let mut heights = Solver::parse("101\n999").unwrap();
        assert!(<Solver as PartSolver<2>>::solve(&mut heights).is_err());
    }
}
