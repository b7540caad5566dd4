use advent_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, SolverPlugin,
    SolverRegistryBuilder,
};

/// Counts lines; part 2 reuses the count memoised by part 1
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2034, day = 25, tags = ["macro-test", "memo"])]
struct LineCounter;

struct Lines<'a> {
    lines: Vec<&'a str>,
    count: Option<usize>,
}

impl AocParser for LineCounter {
    type SharedData<'a> = Lines<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("no lines".into()));
        }
        Ok(Lines {
            lines: input.lines().collect(),
            count: None,
        })
    }
}

impl PartSolver<1> for LineCounter {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = *shared.count.get_or_insert(shared.lines.len());
        Ok(count.to_string())
    }
}

impl PartSolver<2> for LineCounter {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.count.ok_or_else(|| SolveError::failed("part 1 has not run"))?;
        Ok((count * 2).to_string())
    }
}

/// No tags at all
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2034, day = 24)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.trim().to_uppercase())
    }
}

fn find_plugin(year: u16, day: u8) -> Option<&'static SolverPlugin> {
    advent_solver::inventory::iter::<SolverPlugin>().find(|p| p.year == year && p.day == day)
}

#[test]
fn plugin_is_submitted_with_tags() {
    let plugin = find_plugin(2034, 25).expect("LineCounter should be submitted");
    assert_eq!(plugin.tags, &["macro-test", "memo"]);
    assert_eq!(plugin.solver.parts(), 2);
}

#[test]
fn untagged_plugin_has_empty_tags() {
    let plugin = find_plugin(2034, 24).expect("Untagged should be submitted");
    assert!(plugin.tags.is_empty());
    assert_eq!(plugin.solver.parts(), 1);
}

#[test]
fn tag_filter_selects_only_matching_plugins() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|p| p.tags.contains(&"memo"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2034, 25));
    assert!(!registry.storage().contains(2034, 24));
}

#[test]
fn registered_plugin_shares_data_between_parts() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2034, 25, "a\nb\nc").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "6");
}

#[test]
fn fresh_instance_does_not_see_previous_memo() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut first = registry.create_solver(2034, 25, "a\nb").unwrap();
    first.solve(1).unwrap();

    let mut second = registry.create_solver(2034, 25, "a\nb").unwrap();
    assert!(matches!(second.solve(2), Err(SolveError::SolveFailed(_))));
}

#[test]
fn parse_failure_surfaces_through_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2034, 25, ""),
        Err(advent_solver::SolverError::ParseError(ParseError::MissingData(_)))
    ));
}
