use crate::core::format::RootFormatter;
use crate::core::solver::Solver;
use crate::domain::model::Equation;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub solved: usize,
    pub unsolvable: usize,
}

/// Solves every equation in place and writes one line per equation, in input order.
///
/// An equation that fails validation, or whose roots overflow, is reported as
/// unsolvable and the batch carries on.
pub fn solve_batch(
    equations: &mut [Equation],
    solver: &Solver,
    formatter: &RootFormatter,
    out: &mut dyn Write,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (position, equation) in equations.iter_mut().enumerate() {
        write!(
            out,
            "\nEquation {:3} with {} ",
            position + 1,
            formatter.render_coefficients(equation)
        )?;

        match solver
            .solve(equation)
            .and_then(|_| formatter.render_roots(equation))
        {
            Ok(roots) => {
                summary.solved += 1;
                writeln!(out, "has {}", roots)?;
            }
            Err(e) => {
                summary.unsolvable += 1;
                tracing::warn!("Equation {} cannot be solved: {}", position + 1, e);
                writeln!(out, "is unable to be solved!")?;
            }
        }
    }

    Ok(summary)
}
