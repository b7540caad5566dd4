//! Day 6: Lanternfish

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use super::parse_csv;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 6, tags = ["2021", "simulation"])]
pub struct Solver;

const NEWBORN_TIMER: usize = 8;
const RESET_TIMER: usize = 6;

/// Number of fish per timer value
pub type School = [u64; NEWBORN_TIMER + 1];

impl AocParser for Solver {
    type SharedData<'a> = School;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut school = [0; NEWBORN_TIMER + 1];
        for timer in parse_csv::<usize>(input)? {
            *school.get_mut(timer).ok_or_else(|| {
                ParseError::InvalidFormat(format!("timer {} above {}", timer, NEWBORN_TIMER))
            })? += 1;
        }
        Ok(school)
    }
}

fn population_after(school: &School, days: usize) -> u64 {
    let mut school = *school;
    for _ in 0..days {
        school.rotate_left(1);
        school[RESET_TIMER] += school[NEWBORN_TIMER];
    }
    school.iter().sum()
}

impl PartSolver<1> for Solver {
    fn solve(school: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population_after(school, 80).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(school: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population_after(school, 256).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2021::test_util::solve;

    const SAMPLE: &str = include_str!("../../samples/day06.txt");

    #[test]
    fn short_horizon() {
        let school = Solver::parse(SAMPLE).unwrap();
        assert_eq!(population_after(&school, 18), 26);
        assert_eq!(solve::<Solver>(SAMPLE, 1), "5934");
    }

    #[test]
    fn long_horizon() {
        assert_eq!(solve::<Solver>(SAMPLE, 2), "26984457539");
    }

    #[test]
    fn rejects_timer_out_of_range() {
        assert!(Solver::parse("3,9").is_err());
    }
}
