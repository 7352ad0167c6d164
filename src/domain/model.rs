use crate::utils::error::{QuadError, Result};
use serde::{Deserialize, Serialize};

/// How many of an equation's root slots carry a meaningful value.
///
/// The ordinal (0..=4) is the one used by the fixture file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootCount {
    /// Not solved yet. Never produced by the solver.
    #[default]
    Uninitialized,
    Zero,
    /// Only `x1` is meaningful.
    One,
    /// Both `x1` and `x2` are meaningful, in no particular order.
    Two,
    /// Every real number is a root.
    Infinite,
}

impl RootCount {
    pub fn ordinal(self) -> i64 {
        match self {
            RootCount::Uninitialized => 0,
            RootCount::Zero => 1,
            RootCount::One => 2,
            RootCount::Two => 3,
            RootCount::Infinite => 4,
        }
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(RootCount::Uninitialized),
            1 => Some(RootCount::Zero),
            2 => Some(RootCount::One),
            3 => Some(RootCount::Two),
            4 => Some(RootCount::Infinite),
            _ => None,
        }
    }
}

/// An equation `a·x² + b·x + c = 0` together with its (possibly pending) roots.
///
/// Coefficients are fixed at construction. Roots and the root count are written
/// only by [`crate::core::solver::Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    a: f64,
    b: f64,
    c: f64,
    x1: f64,
    x2: f64,
    root_count: RootCount,
}

impl Equation {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self::with_roots(a, b, c, RootCount::Uninitialized, 0.0, 0.0)
    }

    /// Builds an equation with known roots, e.g. the expected answer of a fixture.
    pub fn with_roots(a: f64, b: f64, c: f64, root_count: RootCount, x1: f64, x2: f64) -> Self {
        Self {
            a,
            b,
            c,
            x1,
            x2,
            root_count,
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn x2(&self) -> f64 {
        self.x2
    }

    pub fn root_count(&self) -> RootCount {
        self.root_count
    }

    /// Fails with [`QuadError::InvalidEquation`] naming the first non-finite field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("a", self.a),
            ("b", self.b),
            ("c", self.c),
            ("x1", self.x1),
            ("x2", self.x2),
        ];
        match fields.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(QuadError::InvalidEquation { field, value }),
            None => Ok(()),
        }
    }

    pub(crate) fn set_x1(&mut self, x1: f64) {
        self.x1 = x1;
    }

    pub(crate) fn set_roots(&mut self, x1: f64, x2: f64) {
        self.x1 = x1;
        self.x2 = x2;
    }

    pub(crate) fn set_root_count(&mut self, root_count: RootCount) {
        self.root_count = root_count;
    }
}
