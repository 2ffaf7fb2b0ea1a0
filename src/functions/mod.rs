pub mod exponential;
pub mod trig;

use crate::ast::Value;
use crate::error::RuntimeError;
use std::fmt;

/// The closed set of built-in functions. Each takes exactly one argument.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Exp,
    Ln,
    Log,
    Sqrt,
    Asin,
    Acos,
    Atan,
}

impl Function {
    pub const ALL: [Function; 10] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Exp,
        Function::Ln,
        Function::Log,
        Function::Sqrt,
        Function::Asin,
        Function::Acos,
        Function::Atan,
    ];

    /// Canonical uppercase name, as typed by the user after case folding.
    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "SIN",
            Function::Cos => "COS",
            Function::Tan => "TAN",
            Function::Exp => "EXP",
            Function::Ln => "LN",
            Function::Log => "LOG",
            Function::Sqrt => "SQRT",
            Function::Asin => "ASIN",
            Function::Acos => "ACOS",
            Function::Atan => "ATAN",
        }
    }

    pub fn apply(&self, operand: Value) -> Result<Value, RuntimeError> {
        let x = operand.as_f64();
        let result = match self {
            Function::Sin => trig::sin_degrees(x).ok_or_else(|| self.domain_error(operand))?,
            Function::Cos => trig::cos_degrees(x).ok_or_else(|| self.domain_error(operand))?,
            Function::Tan => trig::tan_degrees(x).ok_or_else(|| self.domain_error(operand))?,
            Function::Asin => trig::asin_degrees(x).ok_or_else(|| self.domain_error(operand))?,
            Function::Acos => trig::acos_degrees(x).ok_or_else(|| self.domain_error(operand))?,
            Function::Atan => trig::atan_degrees(x),
            Function::Exp => exponential::exp(x).ok_or(RuntimeError::Overflow)?,
            Function::Ln => exponential::ln(x).ok_or_else(|| self.domain_error(operand))?,
            Function::Log => exponential::log10(x).ok_or_else(|| self.domain_error(operand))?,
            Function::Sqrt => exponential::sqrt(x).ok_or_else(|| self.domain_error(operand))?,
        };
        Ok(Value::Float(result))
    }

    fn domain_error(&self, operand: Value) -> RuntimeError {
        RuntimeError::Domain {
            function: self.name(),
            operand,
        }
    }
}

impl TryFrom<&str> for Function {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Function::ALL
            .into_iter()
            .find(|function| function.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| value.to_string())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
