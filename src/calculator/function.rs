//! Unary scientific functions and constants

use std::f64::consts::{E, PI};

/// A unary function key. `Pi` and `E` are constants and ignore their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sqrt,
    Square,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Reciprocal,
    Factorial,
    Exp,
    Pi,
    E,
}

impl Function {
    /// Short name used in status messages and logs
    pub fn name(self) -> &'static str {
        match self {
            Function::Sqrt => "sqrt",
            Function::Square => "square",
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Reciprocal => "1/x",
            Function::Factorial => "fact",
            Function::Exp => "exp",
            Function::Pi => "pi",
            Function::E => "e",
        }
    }

    /// Evaluate the function at `value`.
    ///
    /// With `degrees` set, forward trig functions take their argument in
    /// degrees and inverse trig functions return degrees. Domain errors are
    /// not checked; they surface as `NaN` or infinities.
    pub fn evaluate(self, value: f64, degrees: bool) -> f64 {
        match self {
            Function::Sqrt => value.sqrt(),
            Function::Square => value * value,
            Function::Sin => to_radians(value, degrees).sin(),
            Function::Cos => to_radians(value, degrees).cos(),
            Function::Tan => to_radians(value, degrees).tan(),
            Function::Asin => from_radians(value.asin(), degrees),
            Function::Acos => from_radians(value.acos(), degrees),
            Function::Atan => from_radians(value.atan(), degrees),
            Function::Log => value.log10(),
            Function::Ln => value.ln(),
            Function::Reciprocal => 1.0 / value,
            Function::Factorial => factorial(value),
            Function::Exp => value.exp(),
            Function::Pi => PI,
            Function::E => E,
        }
    }
}

fn to_radians(value: f64, degrees: bool) -> f64 {
    if degrees {
        value * PI / 180.0
    } else {
        value
    }
}

fn from_radians(value: f64, degrees: bool) -> f64 {
    if degrees {
        value * 180.0 / PI
    } else {
        value
    }
}

/// Iterative factorial over `f64`.
///
/// Negative input gives `NaN`. Fractional input is not rejected: the product
/// runs over `2, 3, ..` while the factor does not exceed `n`, so `5.5` gives
/// `120`. `NaN` input gives `1` since no comparison holds.
pub fn factorial(n: f64) -> f64 {
    if n < 0.0 {
        return f64::NAN;
    }
    if n == 0.0 || n == 1.0 {
        return 1.0;
    }

    let mut result = 1.0;
    let mut factor = 2.0;
    while factor <= n {
        result *= factor;
        // Further factors cannot bring an infinite product back
        if result.is_infinite() {
            break;
        }
        factor += 1.0;
    }
    result
}
