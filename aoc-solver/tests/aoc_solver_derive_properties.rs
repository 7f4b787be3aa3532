//! Tests for the `AocSolver` and `AutoRegisterSolver` derives

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, RegistryBuilder, SolveError,
    Solver,
};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumProduct;

impl AocParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(format!("bad int {l:?}"))))
            .collect()
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

/// Part 1 caches a tally that part 2 reuses, borrowing the input throughout.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 25, tags = ["test", "borrowed"])]
struct Words;

struct WordData<'a> {
    words: Vec<&'a str>,
    longest: Option<&'a str>,
}

impl AocParser for Words {
    type SharedData<'a> = WordData<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let words: Vec<&str> = input.split_whitespace().collect();
        if words.is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(WordData {
            words,
            longest: None,
        })
    }
}

impl PartSolver<1> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared
            .words
            .iter()
            .copied()
            .max_by_key(|w| w.len())
            .ok_or_else(|| SolveError::NoSolution("no words".into()))?;
        shared.longest = Some(longest);
        Ok(longest.to_string())
    }
}

impl PartSolver<2> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = match shared.longest {
            Some(w) => w,
            None => return Err(SolveError::NoSolution("part 1 not solved".into())),
        };
        Ok(longest.len().to_string())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `Solver::solve_part(n)` is `PartSolver<n>::solve`.
    #[test]
    fn prop_solve_part_dispatches_to_part_solver(
        numbers in prop::collection::vec(1i64..10, 1..6),
        part in 1u8..=2,
    ) {
        let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let mut a = SumProduct::parse(&input).unwrap();
        let mut b = SumProduct::parse(&input).unwrap();

        let dispatched = SumProduct::solve_part(&mut a, part).unwrap();
        let direct = match part {
            1 => <SumProduct as PartSolver<1>>::solve(&mut b),
            _ => <SumProduct as PartSolver<2>>::solve(&mut b),
        }
        .unwrap();
        prop_assert_eq!(dispatched, direct);
    }

    /// Parts outside `1..=max_parts` are reported as not implemented.
    #[test]
    fn prop_unknown_part_is_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = SumProduct::parse("1\n2").unwrap();
        match SumProduct::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }
}

#[test]
fn test_derive_sets_parts() {
    assert_eq!(<SumProduct as Solver>::PARTS, 2);
    assert_eq!(<Words as Solver>::PARTS, 2);
}

#[test]
fn test_later_part_reuses_earlier_result() {
    let mut shared = Words::parse("a abc ab").unwrap();
    assert!(matches!(Words::solve_part(&mut shared, 2), Err(SolveError::NoSolution(_))));
    assert_eq!(Words::solve_part(&mut shared, 1).unwrap(), "abc");
    assert_eq!(Words::solve_part(&mut shared, 2).unwrap(), "3");
}

#[test]
fn test_auto_registered_plugin_is_discoverable() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|p| p.tags.contains(&"test"))
        .unwrap()
        .build();

    assert!(registry.contains(2015, 25));
    let info = registry.iter_info().find(|i| (i.year, i.day) == (2015, 25)).unwrap();
    assert_eq!(info.parts, 2);
    assert_eq!(info.tags, &["test", "borrowed"]);

    let mut solver = registry.create_solver(2015, 25, "x yyyy zz").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "yyyy");
    assert_eq!(solver.solve(2).unwrap().answer, "4");
}

#[test]
fn test_filtered_out_plugins_are_absent() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|p| p.year == 2016)
        .unwrap()
        .build();
    assert!(!registry.contains(2015, 25));
}
