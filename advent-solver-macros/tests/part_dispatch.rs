use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct ThreeParts;

impl AocParser for ThreeParts {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split(',')
            .enumerate()
            .map(|(i, n)| n.trim().parse().map_err(|e| ParseError::at_line(i, e)))
            .collect()
    }
}

impl PartSolver<1> for ThreeParts {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for ThreeParts {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

impl PartSolver<3> for ThreeParts {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.sort_unstable();
        Ok(format!("{:?}", shared))
    }
}

#[test]
fn parts_constant_matches_attribute() {
    assert_eq!(<ThreeParts as Solver>::PARTS, 3);
}

#[test]
fn each_part_dispatches_to_its_part_solver() {
    let mut shared = ThreeParts::parse("3, 1, 2").unwrap();
    assert_eq!(ThreeParts::solve_part(&mut shared, 1).unwrap(), "6");
    assert_eq!(ThreeParts::solve_part(&mut shared, 2).unwrap(), "6");
    assert_eq!(ThreeParts::solve_part(&mut shared, 3).unwrap(), "[1, 2, 3]");
}

#[test]
fn unknown_part_is_not_implemented() {
    let mut shared = ThreeParts::parse("1").unwrap();
    assert!(matches!(
        ThreeParts::solve_part(&mut shared, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
}

#[test]
fn checked_range_rejects_part_zero() {
    let mut shared = ThreeParts::parse("1").unwrap();
    assert!(matches!(
        ThreeParts::solve_part_checked_range(&mut shared, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
}

#[test]
fn parse_error_points_at_item() {
    let err = ThreeParts::parse("1,x,3").unwrap_err();
    assert!(matches!(err, ParseError::InvalidLine { line: 2, .. }));
}
