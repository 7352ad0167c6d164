use crate::adapters::input::{parse_fixtures, Fixture};
use crate::core::equality::roots_equal;
use crate::core::format::RootFormatter;
use crate::core::solver::Solver;
use crate::domain::model::Equation;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    /// The fixture source could not be read; nothing was run.
    Aborted,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    /// 1-based position in the fixture file.
    pub index: usize,
    pub passed: bool,
    pub computed: Equation,
    pub expected: Equation,
}

#[derive(Debug, Clone, Serialize)]
pub struct HarnessReport {
    pub status: RunStatus,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub cases: Vec<CaseOutcome>,
}

impl HarnessReport {
    fn empty(status: RunStatus) -> Self {
        Self {
            status,
            total: 0,
            passed: 0,
            failed: 0,
            cases: Vec::new(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Re-solves known-answer fixtures and reports each one as passed or failed.
pub struct TestHarness<S: Storage> {
    storage: S,
    solver: Solver,
    formatter: RootFormatter,
}

impl<S: Storage> TestHarness<S> {
    pub fn new(storage: S, solver: Solver, formatter: RootFormatter) -> Self {
        Self {
            storage,
            solver,
            formatter,
        }
    }

    /// Loads fixtures from `path` and runs them.
    ///
    /// An unreadable source yields an aborted report with zero tests instead of
    /// an error.
    pub fn run(&self, path: &str, out: &mut dyn Write) -> Result<HarnessReport> {
        tracing::info!("Loading fixtures from {}", path);

        let text = match self.storage.read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Cannot read fixtures from {}: {}", path, e);
                writeln!(out, "\nNumber of tests: {:3}", 0)?;
                return Ok(HarnessReport::empty(RunStatus::Aborted));
            }
        };

        self.run_fixtures(&parse_fixtures(&text), out)
    }

    /// Runs every fixture in order. A failing case never stops the run.
    ///
    /// Anything non-finite reaching the root comparison is fatal and ends the
    /// run with [`crate::QuadError::InvalidEquation`]: a fixture with a NaN or
    /// infinite field, and equally a finite fixture whose computed roots
    /// overflow (e.g. `b² = inf`). Neither is reported as a failed case.
    pub fn run_fixtures(&self, fixtures: &[Fixture], out: &mut dyn Write) -> Result<HarnessReport> {
        writeln!(out, "\nNumber of tests: {:3}", fixtures.len())?;

        let mut report = HarnessReport::empty(RunStatus::Completed);
        for (position, fixture) in fixtures.iter().enumerate() {
            let index = position + 1;
            write!(out, "Test {}...", index)?;

            fixture.expected.validate()?;
            let mut computed = fixture.working_copy();
            self.solver.solve(&mut computed)?;

            let passed = roots_equal(self.solver.tolerance(), &computed, &fixture.expected)?;
            if passed {
                report.passed += 1;
                writeln!(out, "OK! ({} passed, {} failed)", report.passed, report.failed)?;
            } else {
                report.failed += 1;
                writeln!(out, "FAILED! ({} passed, {} failed)", report.passed, report.failed)?;
                self.write_failure(&computed, &fixture.expected, out)?;
                tracing::debug!(index, "fixture failed");
            }

            report.cases.push(CaseOutcome {
                index,
                passed,
                computed,
                expected: fixture.expected,
            });
        }
        report.total = report.cases.len();

        tracing::info!(
            "Fixture run finished: {} passed, {} failed of {}",
            report.passed,
            report.failed,
            report.total
        );
        Ok(report)
    }

    fn write_failure(&self, computed: &Equation, expected: &Equation, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "  EQUATION: {}", self.formatter.render_coefficients(expected))?;
        writeln!(out, "  program answer: {}", self.formatter.render_roots(computed)?)?;
        writeln!(out, "  correct answer: {}", self.formatter.render_roots(expected)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::QuadError;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        files: HashMap<String, String>,
    }

    impl Storage for MemoryStorage {
        fn read_to_string(&self, path: &str) -> Result<String> {
            self.files.get(path).cloned().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, path.to_string()).into()
            })
        }
    }

    fn harness_with(name: &str, content: &str) -> TestHarness<MemoryStorage> {
        let mut storage = MemoryStorage::default();
        storage.files.insert(name.to_string(), content.to_string());
        TestHarness::new(storage, Solver::default(), RootFormatter::default())
    }

    fn run(content: &str) -> (Result<HarnessReport>, String) {
        let harness = harness_with("fixtures.txt", content);
        let mut out = Vec::new();
        let report = harness.run("fixtures.txt", &mut out);
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_passing_fixture() {
        let (report, output) = run("1 -3 2 3 1 2");
        let report = report.unwrap();
        assert_eq!(report.status, RunStatus::Completed);
        assert_eq!((report.total, report.passed, report.failed), (1, 1, 0));
        assert!(output.contains("Number of tests:   1"));
        assert!(output.contains("Test 1...OK!"));
    }

    #[test]
    fn test_failing_fixture_prints_both_answers() {
        let (report, output) = run("1 -3 2 3 2 3");
        let report = report.unwrap();
        assert_eq!((report.passed, report.failed), (0, 1));
        assert!(!report.all_passed());
        assert!(output.contains("Test 1...FAILED!"));
        assert!(output.contains("  EQUATION: a = +1 b = -3 c = +2"));
        assert!(output.contains("  program answer: two roots: +2 +1"));
        assert!(output.contains("  correct answer: two roots: +2 +3"));
    }

    #[test]
    fn test_failures_do_not_stop_the_run() {
        let (report, output) = run("1 -3 2 3 2 3\n1 2 1 2 -1 0\n1 0 1 1 0 0\n0 0 0 4 0 0\n0 2 -4 2 2 0");
        let report = report.unwrap();
        assert_eq!((report.total, report.passed, report.failed), (5, 4, 1));
        assert!(output.contains("Test 5...OK! (4 passed, 1 failed)"));
        let indices: Vec<usize> = report.cases.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_missing_source_aborts_with_zero_tests() {
        let harness = harness_with("fixtures.txt", "1 -3 2 3 1 2");
        let mut out = Vec::new();
        let report = harness.run("other.txt", &mut out).unwrap();
        assert_eq!(report.status, RunStatus::Aborted);
        assert_eq!(report.total, 0);
        assert!(String::from_utf8(out).unwrap().contains("Number of tests:   0"));
    }

    #[test]
    fn test_invalid_fixture_aborts_the_run() {
        let (report, output) = run("1 -3 2 3 1 2\n1 2 1 2 inf 0\n1 2 1 2 -1 0");
        assert!(matches!(report, Err(QuadError::InvalidEquation { field: "x1", .. })));
        assert!(output.contains("Test 1...OK!"));
        assert!(!output.contains("Test 3"));
    }

    #[test]
    fn test_overflowing_roots_abort_the_run() {
        let (report, output) = run("1 -3 2 3 1 2
1 1e200 1 3 0 0
1 2 1 2 -1 0");
        assert!(matches!(report, Err(QuadError::InvalidEquation { field: "x1", .. })));
        assert!(output.contains("Test 2..."));
        assert!(!output.contains("Test 2...FAILED!"));
        assert!(!output.contains("Test 3"));
    }
}
