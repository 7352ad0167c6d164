use crate::core::tolerance::Tolerance;
use crate::domain::model::{Equation, RootCount};
use crate::utils::error::Result;

/// Order-insensitive comparison of two solved equations.
///
/// Root counts must match. Root values are then compared within `tolerance`:
/// only `x1` for one root, `{x1, x2}` as an unordered pair for two roots, and
/// not at all for the remaining counts.
pub fn roots_equal(tolerance: Tolerance, computed: &Equation, expected: &Equation) -> Result<bool> {
    computed.validate()?;
    expected.validate()?;

    if computed.root_count() != expected.root_count() {
        return Ok(false);
    }

    let same = |x: f64, y: f64| tolerance.is_zero(x - y);
    Ok(match computed.root_count() {
        RootCount::One => same(computed.x1(), expected.x1()),
        RootCount::Two => {
            (same(computed.x1(), expected.x1()) && same(computed.x2(), expected.x2()))
                || (same(computed.x1(), expected.x2()) && same(computed.x2(), expected.x1()))
        }
        RootCount::Zero | RootCount::Infinite | RootCount::Uninitialized => true,
    })
}
