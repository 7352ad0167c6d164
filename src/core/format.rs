use crate::domain::model::{Equation, RootCount};
use crate::utils::error::Result;

pub const DEFAULT_PRECISION: usize = 5;

/// Renders equations and their roots for the console report.
#[derive(Debug, Clone, Copy)]
pub struct RootFormatter {
    precision: usize,
}

impl RootFormatter {
    pub fn new(precision: usize) -> Self {
        Self {
            precision: precision.max(1),
        }
    }

    /// `"two roots: +1 +2"` and friends, keyed on the root count.
    pub fn render_roots(&self, equation: &Equation) -> Result<String> {
        equation.validate()?;

        Ok(match equation.root_count() {
            RootCount::Infinite => "infinity of roots".to_string(),
            RootCount::Zero => "zero roots".to_string(),
            RootCount::One => format!("one root: {}", self.format_real(equation.x1())),
            RootCount::Two => format!(
                "two roots: {} {}",
                self.format_real(equation.x1()),
                self.format_real(equation.x2())
            ),
            RootCount::Uninitialized => "uninitialized".to_string(),
        })
    }

    pub fn render_coefficients(&self, equation: &Equation) -> String {
        format!(
            "a = {} b = {} c = {}",
            self.format_real(equation.a()),
            self.format_real(equation.b()),
            self.format_real(equation.c())
        )
    }

    /// Signed value with `precision` significant digits and trailing zeros
    /// trimmed, switching to exponent form for very small or very large values.
    pub fn format_real(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        if value == 0.0 {
            return "+0".to_string();
        }

        // Round to `precision` significant digits first so the exponent reflects
        // the rounded value (99999.7 becomes 1.0000e5, not 9.9999e4).
        let scientific = format!("{:+.*e}", self.precision - 1, value);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return value.to_string();
        };
        let Ok(exponent) = exponent.parse::<i32>() else {
            return value.to_string();
        };

        if exponent < -4 || exponent >= self.precision as i32 {
            return format!("{}e{}", trim_fraction(mantissa), exponent);
        }

        let decimals = (self.precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:+.*}", decimals, value)).to_string()
    }
}

impl Default for RootFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::QuadError;

    #[test]
    fn test_format_real() {
        let fmt = RootFormatter::default();
        assert_eq!(fmt.format_real(0.0), "+0");
        assert_eq!(fmt.format_real(-0.0), "+0");
        assert_eq!(fmt.format_real(1.0), "+1");
        assert_eq!(fmt.format_real(-1.0), "-1");
        assert_eq!(fmt.format_real(2.5), "+2.5");
        assert_eq!(fmt.format_real(1.0 / 3.0), "+0.33333");
        assert_eq!(fmt.format_real(-1234.5678), "-1234.6");
        assert_eq!(fmt.format_real(1e-7), "+1e-7");
        assert_eq!(fmt.format_real(123456.0), "+1.2346e5");
    }

    #[test]
    fn test_format_real_rounds_before_choosing_notation() {
        let fmt = RootFormatter::default();
        assert_eq!(fmt.format_real(99999.7), "+1e5");
        assert_eq!(fmt.format_real(-99999.7), "-1e5");
        assert_eq!(fmt.format_real(99999.4), "+99999");
        assert_eq!(fmt.format_real(9.99996e-5), "+0.0001");
        assert_eq!(fmt.format_real(9.99994e-5), "+9.9999e-5");
        assert_eq!(fmt.format_real(9.99996), "+10");
    }

    #[test]
    fn test_precision_is_configurable() {
        let fmt = RootFormatter::new(3);
        assert_eq!(fmt.format_real(1.0 / 3.0), "+0.333");
        assert_eq!(fmt.format_real(2.0f64.sqrt()), "+1.41");
    }

    #[test]
    fn test_render_each_root_count() {
        let fmt = RootFormatter::default();
        let render = |count, x1, x2| {
            fmt.render_roots(&Equation::with_roots(1.0, 0.0, 0.0, count, x1, x2))
                .unwrap()
        };

        assert_eq!(render(RootCount::Infinite, 0.0, 0.0), "infinity of roots");
        assert_eq!(render(RootCount::Zero, 0.0, 0.0), "zero roots");
        assert_eq!(render(RootCount::One, -1.0, 0.0), "one root: -1");
        assert_eq!(render(RootCount::Two, 1.0, 2.0), "two roots: +1 +2");
        assert_eq!(render(RootCount::Uninitialized, 0.0, 0.0), "uninitialized");
    }

    #[test]
    fn test_render_rejects_invalid_equation() {
        let eq = Equation::with_roots(1.0, 0.0, 0.0, RootCount::One, f64::NAN, 0.0);
        assert!(matches!(
            RootFormatter::default().render_roots(&eq),
            Err(QuadError::InvalidEquation { field: "x1", .. })
        ));
    }

    #[test]
    fn test_render_coefficients() {
        let eq = Equation::new(1.0, -3.0, 2.0);
        assert_eq!(
            RootFormatter::default().render_coefficients(&eq),
            "a = +1 b = -3 c = +2"
        );
    }
}
