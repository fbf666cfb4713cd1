//! Binary operators

use std::fmt;

/// A binary operator that can be left pending between two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Symbol shown on the keypad and in the pending-operation preview
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Power => "^",
        }
    }

    /// Apply the operator to `left` and `right`.
    ///
    /// Division follows IEEE semantics: a zero divisor yields an infinity,
    /// or `NaN` for `0 / 0`. Nothing is intercepted.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Power => power(left, right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Exponentiation with browser `Math.pow` semantics.
///
/// `powf` returns 1 for `1^NaN` and `(±1)^±∞`; the display expects `NaN` there.
fn power(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() {
        return f64::NAN;
    }
    if exponent.is_infinite() && base.abs() == 1.0 {
        return f64::NAN;
    }
    base.powf(exponent)
}
