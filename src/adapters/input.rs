use crate::domain::model::{Equation, RootCount};
use serde::Serialize;

/// A known-answer record: the coefficients plus the expected solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fixture {
    pub expected: Equation,
}

impl Fixture {
    /// A fresh, unsolved equation with the fixture's coefficients.
    pub fn working_copy(&self) -> Equation {
        Equation::new(self.expected.a(), self.expected.b(), self.expected.c())
    }
}

/// Reads `a b c` triples from whitespace-separated tokens.
///
/// Stops at the first triple that does not parse completely; a trailing partial
/// triple is dropped.
pub fn parse_equations<'a, I>(tokens: I) -> Vec<Equation>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = tokens.into_iter();
    let mut equations = Vec::new();

    while let Some([a, b, c]) = next_reals::<3, _>(&mut tokens) {
        equations.push(Equation::new(a, b, c));
    }

    tracing::debug!("Parsed {} equations", equations.len());
    equations
}

pub fn parse_equation_text(text: &str) -> Vec<Equation> {
    parse_equations(text.split_whitespace())
}

/// Reads `a b c count x1 x2` records from fixture text.
///
/// Loading ends quietly at end of input or at the first malformed record,
/// including a root count outside the known ordinals.
pub fn parse_fixtures(text: &str) -> Vec<Fixture> {
    let mut tokens = text.split_whitespace();
    let mut fixtures = Vec::new();

    loop {
        let Some([a, b, c]) = next_reals::<3, _>(&mut tokens) else {
            break;
        };
        let Some(ordinal) = tokens.next().and_then(|t| t.parse::<i64>().ok()) else {
            break;
        };
        let Some([x1, x2]) = next_reals::<2, _>(&mut tokens) else {
            break;
        };
        let Some(root_count) = RootCount::from_ordinal(ordinal) else {
            tracing::warn!(
                "Fixture {} has unknown root count {}, ignoring it and the rest of the file",
                fixtures.len() + 1,
                ordinal
            );
            break;
        };

        fixtures.push(Fixture {
            expected: Equation::with_roots(a, b, c, root_count, x1, x2),
        });
    }

    tracing::debug!("Parsed {} fixtures", fixtures.len());
    fixtures
}

fn next_reals<'a, const N: usize, I>(tokens: &mut I) -> Option<[f64; N]>
where
    I: Iterator<Item = &'a str>,
{
    let mut values = [0.0; N];
    for value in values.iter_mut() {
        *value = tokens.next()?.parse().ok()?;
    }
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_equations_ignores_line_layout() {
        let equations = parse_equation_text("1 -3\n2 0 2\n-4");
        assert_eq!(
            equations,
            vec![Equation::new(1.0, -3.0, 2.0), Equation::new(0.0, 2.0, -4.0)]
        );
    }

    #[test]
    fn test_parse_equations_drops_partial_triple() {
        assert_eq!(parse_equations(["1", "2", "1", "5", "6"]).len(), 1);
    }

    #[test]
    fn test_parse_equations_stops_at_garbage() {
        let equations = parse_equations(["1", "2", "1", "x", "0", "0", "1", "1", "1"]);
        assert_eq!(equations, vec![Equation::new(1.0, 2.0, 1.0)]);
    }

    #[test]
    fn test_parse_fixtures() {
        let fixtures = parse_fixtures("1 -3 2 3 1 2\n1 2 1 2 -1 0\n0 0 0 4 0 0\n");
        assert_eq!(fixtures.len(), 3);
        assert_eq!(fixtures[0].expected.root_count(), RootCount::Two);
        assert_eq!(fixtures[1].expected.x1(), -1.0);
        assert_eq!(fixtures[2].expected.root_count(), RootCount::Infinite);
    }

    #[test]
    fn test_parse_fixtures_truncates_at_malformed_record() {
        assert_eq!(parse_fixtures("1 -3 2 3 1 2\n1 2 1 2 -1").len(), 1);
        assert_eq!(parse_fixtures("1 -3 2 3 1 2\n1 2 1 two -1 0\n0 0 0 4 0 0").len(), 1);
        assert_eq!(parse_fixtures("1 -3 2 3.0 1 2").len(), 0);
    }

    #[test]
    fn test_parse_fixtures_rejects_unknown_root_count() {
        assert_eq!(parse_fixtures("1 -3 2 3 1 2\n1 -3 2 9 1 2\n1 2 1 2 -1 0").len(), 1);
    }

    #[test]
    fn test_working_copy_is_unsolved() {
        let fixture = parse_fixtures("1 -3 2 3 1 2")[0];
        let copy = fixture.working_copy();
        assert_eq!(copy, Equation::new(1.0, -3.0, 2.0));
    }
}
