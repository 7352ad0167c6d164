use crate::core::tolerance::Tolerance;
use crate::domain::model::{Equation, RootCount};
use crate::utils::error::Result;

/// Solves `a·x² + b·x + c = 0` over the reals, falling back to the linear
/// equation when `a` is numerically zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    tolerance: Tolerance,
}

impl Solver {
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Writes the roots into `equation`, stores the classification as its root
    /// count and returns it.
    ///
    /// Root slots that the classification does not cover keep their previous
    /// values. With two roots, `x1` is the `+√D` branch and `x2` the `-√D` branch.
    pub fn solve(&self, equation: &mut Equation) -> Result<RootCount> {
        equation.validate()?;

        let (a, b, c) = (equation.a(), equation.b(), equation.c());
        let root_count = if self.tolerance.is_zero(a) {
            self.solve_linear(equation, b, c)
        } else {
            self.solve_quadratic(equation, a, b, c)
        };

        equation.set_root_count(root_count);
        tracing::debug!(a, b, c, ?root_count, x1 = equation.x1(), x2 = equation.x2(), "solved equation");
        Ok(root_count)
    }

    fn solve_linear(&self, equation: &mut Equation, b: f64, c: f64) -> RootCount {
        if self.tolerance.is_zero(b) {
            return if self.tolerance.is_zero(c) {
                RootCount::Infinite
            } else {
                RootCount::Zero
            };
        }

        equation.set_x1(-c / b);
        RootCount::One
    }

    fn solve_quadratic(&self, equation: &mut Equation, a: f64, b: f64, c: f64) -> RootCount {
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return RootCount::Zero;
        }

        if self.tolerance.is_zero(discriminant) {
            equation.set_x1(-b / (2.0 * a));
            return RootCount::One;
        }

        let root = discriminant.sqrt();
        equation.set_roots((-b + root) / (2.0 * a), (-b - root) / (2.0 * a));
        RootCount::Two
    }
}
